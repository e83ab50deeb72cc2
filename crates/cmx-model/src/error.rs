use thiserror::Error;

/// Errors raised while normalizing raw schema input.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was neither a document object, a page list nor JSON text.
    #[error("expected a document object or a page list, found {found}")]
    UnexpectedShape { found: &'static str },

    #[error("page {page}: unparseable release date {value}")]
    InvalidReleaseDate { page: usize, value: String },

    #[error("unparseable start date {value}")]
    InvalidStartDate { value: String },

    #[error("invalid hexstring '{value}'")]
    InvalidHexstring { value: String },
}

/// A schema could not be built from its input.
///
/// Wraps the first normalization failure; no partially built schema is
/// ever returned alongside it.
#[derive(Debug, Error)]
#[error("failed to create schema: {source}")]
pub struct SchemaError {
    #[from]
    source: ModelError,
}

impl SchemaError {
    pub fn cause(&self) -> &ModelError {
        &self.source
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
