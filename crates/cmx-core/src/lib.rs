//! Reader sessions over a [`cmx_model::Schema`].
//!
//! A [`Book`] tracks the current page of one schema and turns every
//! navigation into a [`NavigationEvent`]: the new position, an optional
//! resume entry and an optional rendered state string. Books live in an
//! explicit [`BookRegistry`]; shared options live in a [`SettingsStore`].

pub mod book;
pub mod error;
pub mod registry;
pub mod settings;
pub mod viewer;

pub use book::{Book, NavigationEvent, ResumeEntry};
pub use error::{CoreError, Result};
pub use registry::{BOOK_ID_PREFIX, BookRegistry};
pub use settings::{CoreSettings, SettingsStore};
pub use viewer::ViewerSettings;
