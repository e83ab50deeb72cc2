use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::date::{describe, parse_timestamp, serialize_timestamp};
use crate::error::{ModelError, Result};
use crate::raw::{OneOrMany, RawPage, RawPageObject};

/// One unit of content: one or more source variants plus display metadata.
///
/// Pages are immutable once built; rebuild a page to change its sources.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Page {
    #[serde(rename = "url")]
    sources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "alt", skip_serializing_if = "Option::is_none")]
    alt_text: Option<String>,
    #[serde(rename = "hover", skip_serializing_if = "Option::is_none")]
    hover_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    #[serde(rename = "anim8", skip_serializing_if = "Option::is_none")]
    is_animated: Option<bool>,
    #[serde(rename = "perm", skip_serializing_if = "Option::is_none")]
    is_permanent: Option<bool>,
    #[serde(rename = "absolute", skip_serializing_if = "Option::is_none")]
    is_absolute: Option<bool>,
    #[serde(
        rename = "release",
        serialize_with = "serialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    release_date: Option<NaiveDateTime>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl Page {
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Normalize one raw page entry. `index` is only used for error reporting.
    pub fn from_raw(index: usize, raw: RawPage) -> Result<Self> {
        match raw {
            RawPage::Source(source) => Ok(Self::new([source])),
            RawPage::Sources(sources) => Ok(Self::new(sources)),
            RawPage::Object(object) => Self::from_object(index, object),
        }
    }

    fn from_object(index: usize, object: RawPageObject) -> Result<Self> {
        let mut sources = object.url.map(OneOrMany::into_vec).unwrap_or_default();
        if let Some(link) = object.link {
            sources.push(link);
        }
        let release_date = match object.release_date {
            Some(value) => Some(parse_timestamp(&value).ok_or_else(|| {
                ModelError::InvalidReleaseDate {
                    page: index,
                    value: describe(&value),
                }
            })?),
            None => None,
        };
        Ok(Self {
            sources,
            title: object.title,
            alt_text: object.alt_text,
            hover_text: object.hover_text,
            note: object.note,
            is_animated: object.is_animated,
            is_permanent: object.is_permanent,
            is_absolute: object.is_absolute,
            release_date,
            extra: object.extra,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    pub fn with_hover_text(mut self, hover_text: impl Into<String>) -> Self {
        self.hover_text = Some(hover_text.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_release_date(mut self, release_date: NaiveDateTime) -> Self {
        self.release_date = Some(release_date);
        self
    }

    pub fn with_flags(
        mut self,
        is_animated: Option<bool>,
        is_permanent: Option<bool>,
        is_absolute: Option<bool>,
    ) -> Self {
        self.is_animated = is_animated;
        self.is_permanent = is_permanent;
        self.is_absolute = is_absolute;
        self
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// The first source, or `""` for a page without sources.
    pub fn primary_source(&self) -> &str {
        self.sources.first().map_or("", String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }

    pub fn hover_text(&self) -> Option<&str> {
        self.hover_text.as_deref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn is_animated(&self) -> Option<bool> {
        self.is_animated
    }

    pub fn is_permanent(&self) -> Option<bool> {
        self.is_permanent
    }

    pub fn is_absolute(&self) -> Option<bool> {
        self.is_absolute
    }

    pub fn release_date(&self) -> Option<NaiveDateTime> {
        self.release_date
    }

    /// Unrecognized fields carried over from the raw entry.
    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    /// True when the page carries anything besides its sources.
    pub fn has_metadata(&self) -> bool {
        self.title.is_some()
            || self.alt_text.is_some()
            || self.hover_text.is_some()
            || self.note.is_some()
            || self.is_animated.is_some()
            || self.is_permanent.is_some()
            || self.is_absolute.is_some()
            || self.release_date.is_some()
            || !self.extra.is_empty()
    }
}

/// Pages without metadata render as a bare JSON source list, others as an
/// object.
impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = if self.has_metadata() {
            serde_json::to_string(self)
        } else {
            serde_json::to_string(&self.sources)
        };
        f.write_str(&json.map_err(|_| fmt::Error)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn scalar_link_becomes_single_source() {
        let raw = RawPageObject {
            link: Some("comics/1.png".to_string()),
            title: Some("Start".to_string()),
            ..RawPageObject::default()
        };
        let page = Page::from_raw(0, RawPage::Object(raw)).unwrap();
        assert_eq!(page.sources(), ["comics/1.png"]);
        assert_eq!(page.title(), Some("Start"));
    }

    #[test]
    fn url_list_is_kept_in_order() {
        let raw = RawPageObject {
            url: Some(OneOrMany::Many(vec!["lo.png".into(), "hi.png".into()])),
            ..RawPageObject::default()
        };
        let page = Page::from_raw(0, RawPage::Object(raw)).unwrap();
        assert_eq!(page.primary_source(), "lo.png");
        assert_eq!(page.sources().len(), 2);
    }

    #[test]
    fn release_date_is_parsed() {
        let raw = RawPageObject {
            url: Some(OneOrMany::One("a.png".into())),
            release_date: Some(json!("2024-03-05")),
            ..RawPageObject::default()
        };
        let page = Page::from_raw(0, RawPage::Object(raw)).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(page.release_date(), Some(expected));
    }

    #[test]
    fn unparseable_release_date_names_the_page() {
        let raw = RawPageObject {
            url: Some(OneOrMany::One("a.png".into())),
            release_date: Some(json!("soon")),
            ..RawPageObject::default()
        };
        let error = Page::from_raw(7, RawPage::Object(raw)).unwrap_err();
        assert_eq!(error.to_string(), "page 7: unparseable release date soon");
    }

    #[test]
    fn page_without_sources_has_empty_primary_source() {
        let page = Page::from_raw(0, RawPage::Object(RawPageObject::default())).unwrap();
        assert!(page.sources().is_empty());
        assert_eq!(page.primary_source(), "");
    }

    #[test]
    fn display_is_bare_list_without_metadata() {
        assert_eq!(Page::new(["a.png"]).to_string(), r#"["a.png"]"#);
        assert_eq!(
            Page::new(["a.png"]).with_title("One").to_string(),
            r#"{"url":["a.png"],"title":"One"}"#
        );
    }
}
