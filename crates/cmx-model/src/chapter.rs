use serde::Serialize;

use crate::raw::RawChapter;

/// A named run of consecutive pages, anchored at its first page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Chapter {
    start: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Chapter {
    pub fn new(start: usize) -> Self {
        Self {
            start,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Index of the first page in this chapter.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl From<RawChapter> for Chapter {
    fn from(raw: RawChapter) -> Self {
        Self {
            start: raw.start,
            title: raw.title,
            description: raw.description,
        }
    }
}
