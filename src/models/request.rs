//! Parsed request variants, one per operation.
//!
//! Requests arrive as untyped field bags; these types are constructed only
//! after the validator has accepted the bag, and carry precisely the fields
//! the operation needs. Extraction is total: a field the validator verified
//! cannot fail to parse, so no constructor here returns an error.

use serde_json::Value;

use crate::models::book::Book;
use crate::search;

/// Validated `add_book` request.
#[derive(Debug, Clone)]
pub struct AddBook {
    pub isbn: String,
    pub title: String,
    pub authors: Vec<String>,
    pub pages: u32,
    pub year: u32,
    pub publisher: String,
    /// Defaults to 1 when the field was absent.
    pub n_copies: u32,
}

impl AddBook {
    pub(crate) fn from_value(v: &Value) -> Self {
        Self {
            isbn: str_field(v, "isbn"),
            title: str_field(v, "title"),
            authors: v
                .get("authors")
                .and_then(Value::as_array)
                .map(|a| a.iter().filter_map(Value::as_str).map(str::to_string).collect())
                .unwrap_or_default(),
            pages: uint_field(v, "pages", 0),
            year: uint_field(v, "year", 0),
            publisher: str_field(v, "publisher"),
            n_copies: uint_field(v, "nCopies", 1),
        }
    }
}

impl From<AddBook> for Book {
    fn from(req: AddBook) -> Self {
        Book {
            isbn: req.isbn,
            title: req.title,
            authors: req.authors,
            pages: req.pages,
            year: req.year,
            publisher: req.publisher,
            n_copies: req.n_copies,
        }
    }
}

/// Validated `find_books` request: the usable search words, lower-cased.
#[derive(Debug, Clone)]
pub struct FindBooks {
    pub words: Vec<String>,
}

impl FindBooks {
    pub(crate) fn from_value(v: &Value) -> Self {
        Self { words: search::search_words(&str_field(v, "search")) }
    }
}

/// Validated checkout/return request; both operations share this shape.
#[derive(Debug, Clone)]
pub struct Circulation {
    pub patron_id: String,
    pub isbn: String,
}

impl Circulation {
    pub(crate) fn from_value(v: &Value) -> Self {
        Self { patron_id: str_field(v, "patronId"), isbn: str_field(v, "isbn") }
    }
}

fn str_field(v: &Value, name: &str) -> String {
    v.get(name).and_then(Value::as_str).unwrap_or_default().to_string()
}

fn uint_field(v: &Value, name: &str, default: u32) -> u32 {
    v.get(name).and_then(Value::as_u64).map_or(default, |n| n as u32)
}
