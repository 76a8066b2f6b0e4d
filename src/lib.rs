//! Lending library core
//!
//! In-memory catalog and circulation tracker for a small lending library:
//! book metadata, full-text-ish catalog search, and per-patron checkout and
//! return of copies. The crate's boundary is [`LendingLibrary`] plus its
//! four operations, each taking an untyped field-keyed request object
//! (`serde_json::Value`) and returning either a success value or a
//! structured error; a hosting layer (HTTP handler, CLI, test harness) is
//! responsible for producing requests and rendering results.

pub mod error;
pub mod models;
pub mod search;
pub mod services;
pub mod validation;

pub use error::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use models::Book;
pub use services::LendingLibrary;
