//! Catalog and circulation service.

use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    error::AppResult,
    models::{
        book::Book,
        request::{AddBook, Circulation, FindBooks},
    },
    search,
    validation::{
        is_integer, is_non_empty_string, is_positive, is_string, is_string_array, validate, Field,
    },
};

/// In-memory catalog and circulation state for one library.
///
/// Construct one instance per independent library and pass it by reference
/// to callers; there is no process-wide singleton. Operations are
/// synchronous and never yield, so a concurrent host must serialize access
/// to a given instance.
#[derive(Debug, Default)]
pub struct LendingLibrary {
    books: Vec<Book>,
    /// patron id -> isbns currently held, in borrow order. Entries are
    /// created on first checkout and retained even once empty.
    checkouts: IndexMap<String, Vec<String>>,
}

impl LendingLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book to the catalog.
    ///
    /// Validates the request bag, normalizes it into a [`Book`] (absent
    /// `nCopies` defaults to 1) and appends it to the catalog. A duplicate
    /// isbn is appended as a second entry.
    pub fn add_book(&mut self, request: &Value) -> AppResult<Book> {
        let fields = [
            Field::required("isbn", is_string),
            Field::required("title", is_string),
            Field::required("authors", is_string_array),
            Field::required("pages", is_integer).check("page count must be positive", is_positive),
            Field::required("year", is_integer).check("year must be positive", is_positive),
            Field::required("publisher", is_string),
            Field::optional("nCopies", is_integer)
                .check("number of copies must be positive", is_positive),
        ];
        validate(request, &fields)?;

        let book: Book = AddBook::from_value(request).into();
        tracing::info!("Catalog add: isbn={} title={:?} copies={}", book.isbn, book.title, book.n_copies);
        self.books.push(book.clone());
        Ok(book)
    }

    /// Search the catalog.
    ///
    /// Every word of length > 1 in the search text must appear as a
    /// substring of a book's lower-cased title/authors/publisher text for
    /// the book to match. Results are sorted ascending by title using the
    /// accent-folding collation. No side effects.
    pub fn find_books(&self, request: &Value) -> AppResult<Vec<Book>> {
        let fields = [Field::required("search", is_string).check(
            "search must contain at least one word longer than one character",
            |v| v.as_str().map_or(false, search::has_usable_word),
        )];
        validate(request, &fields)?;

        let query = FindBooks::from_value(request);
        let mut hits: Vec<Book> = self
            .books
            .iter()
            .filter(|book| {
                let hay = book.search_haystack();
                query.words.iter().all(|word| hay.contains(word.as_str()))
            })
            .cloned()
            .collect();
        hits.sort_by(|a, b| search::compare_titles(&a.title, &b.title));
        tracing::debug!("Catalog search: words={:?} hits={}", query.words, hits.len());
        Ok(hits)
    }

    /// Check a book out to a patron.
    ///
    /// The isbn must name a catalog entry that is in stock, and the patron
    /// must not already hold it. The patron's checkout list is created on
    /// first use; the isbn is appended to it in borrow order.
    pub fn checkout_book(&mut self, request: &Value) -> AppResult<()> {
        let patron_id = request
            .get("patronId")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        {
            let fields = [
                Field::required("patronId", is_non_empty_string),
                Field::required("isbn", is_string)
                    .check("no book in the catalog has this isbn", |v| {
                        v.as_str().map_or(false, |isbn| self.book_by_isbn(isbn).is_some())
                    })
                    .check("all copies of this book are checked out", |v| {
                        v.as_str().map_or(false, |isbn| {
                            self.book_by_isbn(isbn)
                                .map_or(false, |b| self.outstanding(isbn) < b.n_copies as usize)
                        })
                    })
                    .check("patron already has this book checked out", |v| {
                        v.as_str().map_or(false, |isbn| !self.holds(&patron_id, isbn))
                    }),
            ];
            validate(request, &fields)?;
        }

        let req = Circulation::from_value(request);
        tracing::info!("Checkout: patron={} isbn={}", req.patron_id, req.isbn);
        self.checkouts.entry(req.patron_id).or_default().push(req.isbn);
        Ok(())
    }

    /// Return a book held by a patron.
    ///
    /// Removes the first matching entry from the patron's checkout list;
    /// the list itself is retained even when it becomes empty.
    pub fn return_book(&mut self, request: &Value) -> AppResult<()> {
        let patron_id = request
            .get("patronId")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        {
            let fields = [
                Field::required("patronId", is_non_empty_string),
                Field::required("isbn", is_string)
                    .check("no book in the catalog has this isbn", |v| {
                        v.as_str().map_or(false, |isbn| self.book_by_isbn(isbn).is_some())
                    })
                    .check("patron does not have this book checked out", |v| {
                        v.as_str().map_or(false, |isbn| self.holds(&patron_id, isbn))
                    }),
            ];
            validate(request, &fields)?;
        }

        let req = Circulation::from_value(request);
        tracing::info!("Return: patron={} isbn={}", req.patron_id, req.isbn);
        if let Some(list) = self.checkouts.get_mut(&req.patron_id) {
            if let Some(pos) = list.iter().position(|isbn| *isbn == req.isbn) {
                list.remove(pos);
            }
        }
        Ok(())
    }

    /// Number of catalog entries.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Outstanding checkouts of an isbn across all patrons.
    pub fn outstanding(&self, isbn: &str) -> usize {
        self.checkouts
            .values()
            .map(|list| list.iter().filter(|held| held.as_str() == isbn).count())
            .sum()
    }

    /// Total outstanding checkouts.
    pub fn active_checkout_count(&self) -> usize {
        self.checkouts.values().map(Vec::len).sum()
    }

    /// Books a patron currently holds, in borrow order.
    pub fn patron_checkouts(&self, patron_id: &str) -> Vec<&Book> {
        self.checkouts
            .get(patron_id)
            .map(|list| list.iter().filter_map(|isbn| self.book_by_isbn(isbn)).collect())
            .unwrap_or_default()
    }

    fn book_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn == isbn)
    }

    fn holds(&self, patron_id: &str, isbn: &str) -> bool {
        self.checkouts
            .get(patron_id)
            .map_or(false, |list| list.iter().any(|held| held == isbn))
    }
}
