//! A reader's position within one schema.

use cmx_format::{StateContext, Template};
use cmx_model::{Chapter, Page, Schema};
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::settings::CoreSettings;
use crate::viewer::ViewerSettings;

/// Key/value pair for storing a resume position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeEntry {
    pub key: String,
    /// Current page index.
    pub value: String,
}

/// Outcome of one navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub page: usize,
    pub chapter: usize,
    /// Present when resume saving is enabled.
    pub resume: Option<ResumeEntry>,
    /// Present when state pushing is enabled. Empty when the format could
    /// not be rendered for this page.
    pub state: Option<String>,
}

impl NavigationEvent {
    /// History fragment for the rendered state, e.g. `#/1/3`.
    pub fn history_fragment(&self) -> Option<String> {
        self.state.as_ref().map(|state| format!("#/{state}"))
    }
}

/// One book open in a reader: a schema plus the current page.
#[derive(Debug, Clone)]
pub struct Book {
    uid: String,
    cid: String,
    schema: Schema,
    settings: CoreSettings,
    template: Template,
    current: usize,
}

impl Book {
    /// Open `schema` at its configured start page. `cid` scopes resume keys,
    /// typically the host serving the book.
    pub fn new(cid: impl Into<String>, schema: Schema, settings: CoreSettings) -> Self {
        let template = Template::parse(&schema.config().format);
        let current = clamp_page(schema.config().start_page, schema.page_count());
        Self {
            uid: String::new(),
            cid: cid.into(),
            schema,
            settings,
            template,
            current,
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub(crate) fn set_uid(&mut self, uid: String) {
        self.uid = uid;
    }

    pub fn cid(&self) -> &str {
        &self.cid
    }

    pub fn set_cid(&mut self, cid: impl Into<String>) {
        self.cid = cid.into();
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Swap in a new schema, keeping the current page where possible.
    pub fn set_schema(&mut self, schema: Schema) {
        self.template = Template::parse(&schema.config().format);
        self.current = clamp_page(self.current, schema.page_count());
        self.schema = schema;
    }

    pub fn settings(&self) -> CoreSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: CoreSettings) {
        self.settings = settings;
    }

    /// Storage key for this book's resume position.
    pub fn resume_key(&self) -> String {
        format!("{}|{}|current", self.cid, self.uid)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_chapter(&self) -> usize {
        self.schema.page_to_chapter(self.current)
    }

    /// Go to `page`, clamped to the last page.
    pub fn go(&mut self, page: usize) -> Result<NavigationEvent> {
        let last = self
            .schema
            .page_count()
            .checked_sub(1)
            .ok_or(CoreError::EmptyBook)?;
        self.current = page.min(last);
        Ok(self.event())
    }

    pub fn next(&mut self) -> Result<NavigationEvent> {
        self.go(self.current.saturating_add(1))
    }

    pub fn prev(&mut self) -> Result<NavigationEvent> {
        self.go(self.current.saturating_sub(1))
    }

    pub fn first(&mut self) -> Result<NavigationEvent> {
        self.go(0)
    }

    pub fn last(&mut self) -> Result<NavigationEvent> {
        self.go(usize::MAX)
    }

    /// Go to the first page of `chapter`, clamped to the last chapter.
    pub fn chapter_go(&mut self, chapter: usize) -> Result<NavigationEvent> {
        let chapter = chapter.min(self.schema.chapter_count().saturating_sub(1));
        self.go(self.schema.chapter_to_page(chapter))
    }

    /// Go to the first chapter starting after the current page, or to the
    /// last page when none does.
    pub fn chapter_next(&mut self) -> Result<NavigationEvent> {
        let current = self.current;
        match self.chapter_starts().into_iter().find(|&start| start > current) {
            Some(start) => self.go(start),
            None => self.last(),
        }
    }

    /// Go to the start of the chapter before the current one, or to the
    /// first page when there is none.
    pub fn chapter_prev(&mut self) -> Result<NavigationEvent> {
        let current = self.current;
        let starts = self.chapter_starts();
        let current_start = starts.iter().rev().copied().find(|&start| start <= current);
        let previous = current_start
            .and_then(|here| starts.iter().rev().copied().find(|&start| start < here));
        match previous {
            Some(start) => self.go(start),
            None => self.first(),
        }
    }

    pub fn chapter_first(&mut self) -> Result<NavigationEvent> {
        self.chapter_go(0)
    }

    pub fn chapter_last(&mut self) -> Result<NavigationEvent> {
        self.chapter_go(usize::MAX)
    }

    /// Go to a page read back from resume storage.
    pub fn resume(&mut self, stored: &str) -> Result<NavigationEvent> {
        let page = stored
            .trim()
            .parse::<usize>()
            .map_err(|_| CoreError::InvalidResumePosition {
                value: stored.to_string(),
            })?;
        self.go(page)
    }

    /// Metadata for `page`, or for the current page.
    pub fn page_data(&self, page: Option<usize>) -> Option<&Page> {
        self.schema.page(page.unwrap_or(self.current))
    }

    /// Metadata for `chapter`, or for the current chapter.
    pub fn chapter_data(&self, chapter: Option<usize>) -> Option<&Chapter> {
        self.schema
            .chapter(chapter.unwrap_or_else(|| self.current_chapter()))
    }

    /// Page list for the renderer.
    pub fn export_pages(&self) -> Vec<&str> {
        self.schema.export_pages()
    }

    pub fn viewer_settings(&self) -> ViewerSettings {
        ViewerSettings::from_schema(&self.schema, self.settings)
    }

    /// State string for the current page, regardless of settings.
    pub fn state(&self) -> String {
        StateContext::for_page(&self.schema, self.current)
            .map(|context| self.template.render_state(&context))
            .unwrap_or_default()
    }

    /// Start pages of the chapters that own at least one page, ascending.
    /// Chapters sharing a start with their successor are left out.
    fn chapter_starts(&self) -> Vec<usize> {
        (0..self.schema.chapter_count())
            .filter_map(|chapter| self.schema.chapter_range(chapter))
            .filter(|range| !range.is_empty())
            .map(|range| range.start)
            .collect()
    }

    fn event(&self) -> NavigationEvent {
        let chapter = self.current_chapter();
        let resume = self.settings.page_save.then(|| ResumeEntry {
            key: self.resume_key(),
            value: self.current.to_string(),
        });
        let state = self.settings.page_push.then(|| self.state());
        debug!(
            book = %self.uid,
            page = self.current,
            chapter,
            state = state.as_deref().unwrap_or_default(),
            "navigated"
        );
        NavigationEvent {
            page: self.current,
            chapter,
            resume,
            state,
        }
    }
}

fn clamp_page(page: usize, page_count: usize) -> usize {
    page.min(page_count.saturating_sub(1))
}
