//! Library components of the `cmx` command-line tool.

pub mod logging;
pub mod report;
