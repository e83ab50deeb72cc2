use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A date token was rendered for a page without a release date.
    #[error("release date required for format {format}")]
    MissingReleaseDate { format: String },
}

pub type Result<T> = std::result::Result<T, FormatError>;
