//! Schema-level configuration.
//!
//! Every recognized option has an explicit default. Raw input overrides
//! only the options it names; see [`SchemaConfig::apply`].

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::date::{describe, parse_timestamp, serialize_timestamp};
use crate::error::{ModelError, Result};
use crate::hexstring::Hexstring;
use crate::raw::{RawConfig, RawLoading};

/// Format used for state strings when a document does not name one.
pub const DEFAULT_FORMAT: &str = "C/PP";

/// Settings consumed by navigation and state rendering, plus display hints
/// passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaConfig {
    /// Format grammar for state strings.
    pub format: String,
    #[serde(
        serialize_with = "serialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDateTime>,
    /// Added to the 0-based chapter position when numbering chapters.
    pub chapter_start_at: i64,
    /// Added to the 0-based page position when numbering pages.
    pub page_start_at: i64,
    /// Base path hint for the renderer.
    pub dir: String,
    #[serde(rename = "imgprebuffer")]
    pub img_pre_buffer: u32,
    #[serde(rename = "imgpostbuffer")]
    pub img_post_buffer: u32,
    /// Page shown when a reader opens the book.
    pub start_page: usize,
    /// Background color.
    pub back: Hexstring,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            start_date: None,
            chapter_start_at: 1,
            page_start_at: 1,
            dir: String::new(),
            img_pre_buffer: 5,
            img_post_buffer: 5,
            start_page: 0,
            back: Hexstring::new(0),
        }
    }
}

impl SchemaConfig {
    /// Override the options present in `raw`, leaving the rest untouched.
    pub fn apply(&mut self, raw: RawConfig) -> Result<()> {
        if let Some(format) = raw.format {
            self.format = format;
        }
        if let Some(value) = raw.start_date {
            let start_date =
                parse_timestamp(&value).ok_or_else(|| ModelError::InvalidStartDate {
                    value: describe(&value),
                })?;
            self.start_date = Some(start_date);
        }
        if let Some(offset) = raw.chapter_start_at {
            self.chapter_start_at = offset;
        }
        if let Some(offset) = raw.page_start_at {
            self.page_start_at = offset;
        }
        if let Some(dir) = raw.dir {
            self.dir = dir;
        }
        if let Some(count) = raw.img_pre_buffer {
            self.img_pre_buffer = count;
        }
        if let Some(count) = raw.img_post_buffer {
            self.img_post_buffer = count;
        }
        if let Some(page) = raw.start_page {
            self.start_page = page;
        }
        if let Some(back) = raw.back {
            self.back = Hexstring::try_from(back)?;
        }
        Ok(())
    }
}

/// Loading indicator settings. Passed through to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingConfig {
    pub diameter: u32,
    pub lines: u32,
    /// Milliseconds per animation frame.
    pub rate: f64,
    #[serde(rename = "xpos", skip_serializing_if = "Option::is_none")]
    pub x_pos: Option<f64>,
    #[serde(rename = "ypos", skip_serializing_if = "Option::is_none")]
    pub y_pos: Option<f64>,
    pub back: Hexstring,
    pub color: Hexstring,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            diameter: 250,
            lines: 16,
            rate: 1000.0 / 30.0,
            x_pos: None,
            y_pos: None,
            back: Hexstring::new(0xfff),
            color: Hexstring::new(0x373737),
        }
    }
}

impl LoadingConfig {
    pub fn apply(&mut self, raw: RawLoading) -> Result<()> {
        if let Some(diameter) = raw.diameter {
            self.diameter = diameter;
        }
        if let Some(lines) = raw.lines {
            self.lines = lines;
        }
        if let Some(rate) = raw.rate {
            self.rate = rate;
        }
        if raw.x_pos.is_some() {
            self.x_pos = raw.x_pos;
        }
        if raw.y_pos.is_some() {
            self.y_pos = raw.y_pos;
        }
        if let Some(back) = raw.back {
            self.back = Hexstring::try_from(back)?;
        }
        if let Some(color) = raw.color {
            self.color = Hexstring::try_from(color)?;
        }
        Ok(())
    }
}
