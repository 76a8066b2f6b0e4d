//! Data models for the lending library

pub mod book;
pub mod request;

// Re-export commonly used types
pub use book::Book;
pub use request::{AddBook, Circulation, FindBooks};
