//! Document model for paginated, chaptered visual works.
//!
//! Raw input (JSON text, a bare page list or a structured document) is
//! normalized into a [`Schema`] of [`Page`]s and [`Chapter`]s, which then
//! answers page/chapter lookups and exports page lists for a renderer.

pub mod chapter;
pub mod config;
pub mod date;
pub mod error;
pub mod hexstring;
pub mod page;
pub mod raw;
pub mod schema;
pub mod version;

pub use chapter::Chapter;
pub use config::{DEFAULT_FORMAT, LoadingConfig, SchemaConfig};
pub use error::{ModelError, Result, SchemaError};
pub use hexstring::Hexstring;
pub use page::Page;
pub use raw::{RawChapter, RawConfig, RawDocument, RawInput, RawLoading, RawPage, RawPageObject};
pub use schema::Schema;
pub use version::{CORE_VERSION, Version};
