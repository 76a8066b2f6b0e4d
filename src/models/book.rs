//! Book (catalog record) model.

use serde::{Deserialize, Serialize};

/// Catalog entry for a title. Identity is the isbn alone; records are
/// immutable once added to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    /// Ordered, never empty.
    pub authors: Vec<String>,
    pub pages: u32,
    pub year: u32,
    pub publisher: String,
    #[serde(rename = "nCopies", default = "default_n_copies")]
    pub n_copies: u32,
}

fn default_n_copies() -> u32 {
    1
}

impl Book {
    /// Lower-cased concatenation of title, authors and publisher, the text
    /// searched for query words.
    pub fn search_haystack(&self) -> String {
        let mut hay = String::with_capacity(
            self.title.len() + self.publisher.len() + self.authors.iter().map(String::len).sum::<usize>(),
        );
        hay.push_str(&self.title);
        for author in &self.authors {
            hay.push(' ');
            hay.push_str(author);
        }
        hay.push(' ');
        hay.push_str(&self.publisher);
        hay.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book {
            isbn: "978-0135957059".to_string(),
            title: "The Pragmatic Programmer".to_string(),
            authors: vec!["David Thomas".to_string(), "Andrew Hunt".to_string()],
            pages: 352,
            year: 2019,
            publisher: "Addison-Wesley".to_string(),
            n_copies: 2,
        }
    }

    #[test]
    fn test_haystack_covers_title_authors_publisher() {
        let hay = sample().search_haystack();
        assert!(hay.contains("pragmatic"));
        assert!(hay.contains("hunt"));
        assert!(hay.contains("addison-wesley"));
        assert!(!hay.contains("352"));
    }

    #[test]
    fn test_n_copies_defaults_to_one_when_deserialized() {
        let book: Book = serde_json::from_value(serde_json::json!({
            "isbn": "123",
            "title": "t",
            "authors": ["a b"],
            "pages": 10,
            "year": 2000,
            "publisher": "p",
        }))
        .unwrap();
        assert_eq!(book.n_copies, 1);
    }
}
