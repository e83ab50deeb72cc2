//! State-string templating.
//!
//! A format such as `"YYYY/MM/DD"` or `"c-PP"` is split into runs of
//! repeated letters. Each run renders one field of the reader's position;
//! the run length sets the zero-padded width of numeric fields.
//!
//! | letter | renders |
//! |---|---|
//! | `y` | year, two digits below width 3 |
//! | `m` `d` | calendar month and day of month |
//! | `h` `u` `s` | hour, minute, second |
//! | `n` / `N` | abbreviated / full month name |
//! | `c` / `C` | chapter title (falling back to number) / chapter number |
//! | `p` / `P` | page title (falling back to number) / page number |
//! | `f` | file name of the page's primary source |
//!
//! Any other run is copied through as its single character. Date fields
//! need the page's release date; without it the whole render fails.

pub mod context;
pub mod error;
pub mod template;
pub mod token;

pub use context::StateContext;
pub use error::{FormatError, Result};
pub use template::Template;
pub use token::{Command, DateField, Token};

/// Parse and render `format` once.
pub fn render(format: &str, context: &StateContext<'_>) -> Result<String> {
    Template::parse(format).render(context)
}

/// Parse and render `format` once, logging failures and returning `""`.
pub fn render_state(format: &str, context: &StateContext<'_>) -> String {
    Template::parse(format).render_state(context)
}
