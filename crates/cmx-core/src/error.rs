//! Error types for reader sessions.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Another book is already registered under this ID.
    #[error("book with id {id} already exists")]
    DuplicateBookId { id: String },

    #[error("no book registered with id {id}")]
    UnknownBook { id: String },

    /// Navigation was requested on a book without pages.
    #[error("book has no pages")]
    EmptyBook,

    /// A stored resume position is not a page index.
    #[error("invalid resume position '{value}'")]
    InvalidResumePosition { value: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
