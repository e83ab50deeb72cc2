//! Raw, un-normalized schema input.
//!
//! Input shape is resolved once, here, into [`RawInput`]. Everything past
//! this module works on typed pages, chapters and configuration.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ModelError, Result};
use crate::hexstring::RawHexstring;

/// Schema input, tagged by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// JSON text holding either a document object or a page list.
    Text(String),
    /// A bare page list.
    SourceList(Vec<RawPage>),
    /// A structured document.
    Document(RawDocument),
}

impl RawInput {
    /// Resolve an arbitrary JSON value into an input variant.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Self::Text(text)),
            Value::Array(_) => Ok(Self::SourceList(serde_json::from_value(value)?)),
            Value::Object(_) => Ok(Self::Document(serde_json::from_value(value)?)),
            other => Err(ModelError::UnexpectedShape {
                found: value_kind(&other),
            }),
        }
    }

    pub(crate) fn into_document(self) -> Result<RawDocument> {
        match self {
            Self::Text(text) => match serde_json::from_str::<Value>(&text)? {
                Value::String(_) => Err(ModelError::UnexpectedShape { found: "string" }),
                value => Self::from_value(value)?.into_document(),
            },
            Self::SourceList(pages) => Ok(RawDocument {
                pages: Some(pages),
                ..RawDocument::default()
            }),
            Self::Document(document) => Ok(document),
        }
    }
}

impl From<String> for RawInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RawInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<RawPage>> for RawInput {
    fn from(pages: Vec<RawPage>) -> Self {
        Self::SourceList(pages)
    }
}

impl From<RawDocument> for RawInput {
    fn from(document: RawDocument) -> Self {
        Self::Document(document)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `{ pages, chapters, config, loading }`, every field optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawDocument {
    pub pages: Option<Vec<RawPage>>,
    pub chapters: Option<Vec<RawChapter>>,
    pub config: Option<RawConfig>,
    pub loading: Option<RawLoading>,
}

/// One page entry: a source, a source list, or an object with metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPage {
    Source(String),
    Sources(Vec<String>),
    Object(RawPageObject),
}

impl From<&str> for RawPage {
    fn from(source: &str) -> Self {
        Self::Source(source.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPageObject {
    pub url: Option<OneOrMany>,
    pub link: Option<String>,
    pub title: Option<String>,
    #[serde(alias = "alt")]
    pub alt_text: Option<String>,
    #[serde(alias = "hover")]
    pub hover_text: Option<String>,
    pub note: Option<String>,
    #[serde(alias = "anim8", alias = "animate")]
    pub is_animated: Option<bool>,
    #[serde(alias = "perm", alias = "permanent")]
    pub is_permanent: Option<bool>,
    #[serde(alias = "absolute")]
    pub is_absolute: Option<bool>,
    #[serde(alias = "release")]
    pub release_date: Option<Value>,
    /// Any other field, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawChapter {
    pub start: usize,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    pub format: Option<String>,
    #[serde(alias = "startdate")]
    pub start_date: Option<Value>,
    pub chapter_start_at: Option<i64>,
    pub page_start_at: Option<i64>,
    pub dir: Option<String>,
    #[serde(alias = "imgprebuffer")]
    pub img_pre_buffer: Option<u32>,
    #[serde(alias = "imgpostbuffer")]
    pub img_post_buffer: Option<u32>,
    #[serde(alias = "startpage")]
    pub start_page: Option<usize>,
    pub back: Option<RawHexstring>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLoading {
    pub diameter: Option<u32>,
    pub lines: Option<u32>,
    pub rate: Option<f64>,
    #[serde(alias = "xpos")]
    pub x_pos: Option<f64>,
    #[serde(alias = "ypos")]
    pub y_pos: Option<f64>,
    pub back: Option<RawHexstring>,
    pub color: Option<RawHexstring>,
}
