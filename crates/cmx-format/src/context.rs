use chrono::NaiveDateTime;
use cmx_model::{Chapter, Schema};

/// Navigation position a state string is rendered from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StateContext<'a> {
    pub release_date: Option<NaiveDateTime>,
    pub page_title: Option<&'a str>,
    pub primary_source: &'a str,
    /// Page position plus the configured page offset.
    pub page_number: i64,
    /// Chapter position plus the configured chapter offset.
    pub chapter_number: i64,
    pub chapter_title: Option<&'a str>,
}

impl<'a> StateContext<'a> {
    /// Context for `page` of `schema`, or `None` if the page does not exist.
    pub fn for_page(schema: &'a Schema, page: usize) -> Option<Self> {
        let entry = schema.page(page)?;
        let chapter = schema.page_to_chapter(page);
        let config = schema.config();
        Some(Self {
            release_date: entry.release_date(),
            page_title: entry.title(),
            primary_source: entry.primary_source(),
            page_number: offset(page, config.page_start_at),
            chapter_number: offset(chapter, config.chapter_start_at),
            chapter_title: schema.chapter(chapter).and_then(Chapter::title),
        })
    }
}

fn offset(position: usize, start_at: i64) -> i64 {
    i64::try_from(position)
        .unwrap_or(i64::MAX)
        .saturating_add(start_at)
}
