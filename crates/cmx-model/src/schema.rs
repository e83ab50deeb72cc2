//! The normalized document and its page/chapter index.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::chapter::Chapter;
use crate::config::{LoadingConfig, SchemaConfig};
use crate::error::{Result, SchemaError};
use crate::page::Page;
use crate::raw::RawInput;

/// Ordered pages, sorted chapters and configuration for one book.
///
/// The page to chapter index is derived data. It is built on construction
/// and by [`Schema::rebuild_index`]; replacing pages or chapters resets and
/// rebuilds it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Schema {
    pages: Vec<Page>,
    chapters: Vec<Chapter>,
    config: SchemaConfig,
    loading: LoadingConfig,
    #[serde(skip)]
    page_chapter_index: BTreeMap<usize, usize>,
}

impl Schema {
    /// Build a schema from any supported input shape.
    pub fn new(input: impl Into<RawInput>) -> std::result::Result<Self, SchemaError> {
        let schema = Self::normalize(input.into())?;
        debug!(
            pages = schema.pages.len(),
            chapters = schema.chapters.len(),
            "schema created"
        );
        Ok(schema)
    }

    pub fn from_json(text: &str) -> std::result::Result<Self, SchemaError> {
        Self::new(text)
    }

    pub fn from_value(value: Value) -> std::result::Result<Self, SchemaError> {
        let input = RawInput::from_value(value)?;
        Self::new(input)
    }

    fn normalize(input: RawInput) -> Result<Self> {
        let raw = input.into_document()?;
        let pages = raw
            .pages
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, page)| Page::from_raw(index, page))
            .collect::<Result<Vec<_>>>()?;
        let mut chapters: Vec<Chapter> = raw
            .chapters
            .unwrap_or_default()
            .into_iter()
            .map(Chapter::from)
            .collect();
        chapters.sort_by_key(Chapter::start);

        let mut config = SchemaConfig::default();
        if let Some(raw_config) = raw.config {
            config.apply(raw_config)?;
        }
        let mut loading = LoadingConfig::default();
        if let Some(raw_loading) = raw.loading {
            loading.apply(raw_loading)?;
        }

        let mut schema = Self {
            pages,
            chapters,
            config,
            loading,
            page_chapter_index: BTreeMap::new(),
        };
        schema.rebuild_index(None);
        Ok(schema)
    }

    pub fn with_config(mut self, config: SchemaConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_loading(mut self, loading: LoadingConfig) -> Self {
        self.loading = loading;
        self
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    pub fn loading(&self) -> &LoadingConfig {
        &self.loading
    }

    pub fn page(&self, page: usize) -> Option<&Page> {
        self.pages.get(page)
    }

    pub fn chapter(&self, chapter: usize) -> Option<&Chapter> {
        self.chapters.get(chapter)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Replace all pages, then rebuild the index from scratch.
    pub fn set_pages(&mut self, pages: Vec<Page>) {
        self.pages = pages;
        self.reset_index();
    }

    /// Replace all chapters, then rebuild the index from scratch.
    pub fn set_chapters(&mut self, chapters: Vec<Chapter>) {
        self.chapters = chapters;
        self.reset_index();
    }

    fn reset_index(&mut self) {
        self.page_chapter_index.clear();
        self.rebuild_index(None);
    }

    /// Map every page to the chapter it falls within.
    ///
    /// Chapters are sorted by start first. With `selected`, only chapters at
    /// those sorted positions are mapped, and each selected chapter runs until
    /// the next *selected* chapter. Stored values are always positions in the
    /// full sorted chapter list.
    ///
    /// Chapters with an empty range are skipped, and pages in a skipped range
    /// keep whatever mapping they already had. Entries are never removed here.
    pub fn rebuild_index(&mut self, selected: Option<&[usize]>) {
        self.chapters.sort_by_key(Chapter::start);
        let positions: Vec<usize> = (0..self.chapters.len())
            .filter(|position| selected.is_none_or(|ids| ids.contains(position)))
            .collect();
        let page_count = self.pages.len();

        for (offset, &position) in positions.iter().enumerate() {
            let start = self.chapters[position].start();
            let end = positions
                .get(offset + 1)
                .map_or(page_count, |&next| self.chapters[next].start())
                .min(page_count);
            if start >= end {
                trace!(chapter = position, start, end, "skipping empty chapter");
                continue;
            }
            for page in start..end {
                self.page_chapter_index.insert(page, position);
            }
        }
        debug!(
            chapters = positions.len(),
            mapped_pages = self.page_chapter_index.len(),
            "page index rebuilt"
        );
    }

    /// Chapter containing `page`, or 0 when the page is unmapped.
    pub fn page_to_chapter(&self, page: usize) -> usize {
        self.page_chapter_index.get(&page).copied().unwrap_or(0)
    }

    /// First page of `chapter`, or 0 when the chapter does not exist.
    pub fn chapter_to_page(&self, chapter: usize) -> usize {
        self.chapters.get(chapter).map_or(0, Chapter::start)
    }

    /// Pages spanned by `chapter` in the full sorted chapter list.
    ///
    /// The range is empty for chapters sharing a start with their successor
    /// or starting at or past the last page.
    pub fn chapter_range(&self, chapter: usize) -> Option<Range<usize>> {
        let start = self.chapters.get(chapter)?.start();
        let end = self
            .chapters
            .get(chapter + 1)
            .map_or(self.pages.len(), Chapter::start)
            .min(self.pages.len());
        Some(start..end.max(start))
    }

    /// Primary source of every page, in reading order.
    pub fn export_pages(&self) -> Vec<&str> {
        self.pages.iter().map(Page::primary_source).collect()
    }

    /// Primary sources of the requested pages, in requested order.
    ///
    /// Unknown page IDs are skipped. An empty selection exports every page.
    pub fn export_selected_pages(&self, ids: &[usize]) -> Vec<&str> {
        self.select_pages(ids)
            .into_iter()
            .filter_map(|id| self.pages.get(id))
            .map(Page::primary_source)
            .collect()
    }

    /// Resolve a page selection: the requested IDs that exist, in requested
    /// order, or every page for an empty selection.
    pub fn select_pages(&self, ids: &[usize]) -> Vec<usize> {
        if ids.is_empty() {
            return (0..self.pages.len()).collect();
        }
        ids.iter()
            .copied()
            .filter(|&id| id < self.pages.len())
            .collect()
    }

    /// Serialize back into a document that [`Schema::from_json`] accepts.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(count: usize) -> Vec<Page> {
        (0..count).map(|i| Page::new([format!("{i}.png")])).collect()
    }

    #[test]
    fn index_maps_ranges_between_chapter_starts() {
        let mut schema = Schema::default();
        schema.set_pages(pages(6));
        schema.set_chapters(vec![Chapter::new(0), Chapter::new(2), Chapter::new(4)]);
        let mapped: Vec<usize> = (0..6).map(|page| schema.page_to_chapter(page)).collect();
        assert_eq!(mapped, [0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn filtered_rebuild_keeps_global_positions() {
        let mut schema = Schema::default();
        schema.set_pages(pages(6));
        schema.set_chapters(vec![Chapter::new(0), Chapter::new(2), Chapter::new(4)]);
        schema.page_chapter_index.clear();
        schema.rebuild_index(Some(&[0, 2]));
        assert_eq!(schema.page_to_chapter(3), 0);
        assert_eq!(schema.page_to_chapter(4), 2);
        assert_eq!(schema.page_to_chapter(5), 2);
    }

    #[test]
    fn skipped_range_keeps_previous_mapping() {
        let mut schema = Schema::default();
        schema.set_pages(pages(4));
        schema.set_chapters(vec![Chapter::new(0), Chapter::new(2)]);
        assert_eq!(schema.page_to_chapter(3), 1);
        // Selecting only chapter 1 maps 2..4 again; 0..2 keep chapter 0.
        schema.rebuild_index(Some(&[1]));
        assert_eq!(schema.page_to_chapter(0), 0);
        assert_eq!(schema.page_to_chapter(2), 1);
    }

    #[test]
    fn chapter_past_last_page_maps_nothing() {
        let mut schema = Schema::default();
        schema.set_pages(pages(3));
        schema.set_chapters(vec![Chapter::new(0), Chapter::new(5)]);
        assert_eq!(schema.page_to_chapter(2), 0);
        assert!(!schema.page_chapter_index.contains_key(&5));
        assert_eq!(schema.chapter_range(1), Some(5..5));
    }
}
