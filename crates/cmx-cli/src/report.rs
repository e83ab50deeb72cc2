//! Table output for schema inspection.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cmx_model::{Chapter, Page, Schema};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Key/value overview of the schema configuration.
pub fn config_table(schema: &Schema) -> Table {
    let config = schema.config();
    let loading = schema.loading();
    let mut table = Table::new();
    table.set_header(vec![header_cell("Setting"), header_cell("Value")]);
    apply_table_style(&mut table);
    let start_date = config
        .start_date
        .map(|date| date.format(DATE_FORMAT).to_string());
    let rows: [(&str, String); 10] = [
        ("pages", schema.page_count().to_string()),
        ("chapters", schema.chapter_count().to_string()),
        ("format", config.format.clone()),
        ("start page", config.start_page.to_string()),
        ("page numbers from", config.page_start_at.to_string()),
        ("chapter numbers from", config.chapter_start_at.to_string()),
        ("directory", or_dash(&config.dir)),
        (
            "buffer",
            format!("{} before, {} after", config.img_pre_buffer, config.img_post_buffer),
        ),
        ("background", format!("#{}", config.back)),
        ("start date", start_date.unwrap_or_else(|| "-".to_string())),
    ];
    for (key, value) in rows {
        table.add_row(vec![Cell::new(key), value_cell(value)]);
    }
    table.add_row(vec![
        Cell::new("loader"),
        Cell::new(format!(
            "{}px, {} lines, #{} on #{}",
            loading.diameter, loading.lines, loading.color, loading.back
        )),
    ]);
    table
}

/// One row per chapter with the pages it spans.
pub fn chapter_table(schema: &Schema) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Chapter"),
        header_cell("Title"),
        header_cell("Start"),
        header_cell("Pages"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (position, chapter) in schema.chapters().iter().enumerate() {
        let range = schema.chapter_range(position).unwrap_or_default();
        let pages = if range.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(format!("{}-{}", range.start, range.end - 1))
        };
        table.add_row(vec![
            Cell::new(position),
            title_cell(chapter.title()),
            Cell::new(chapter.start()),
            pages,
            count_cell(range.len()),
        ]);
    }
    table
}

/// One row per page. `ids` selects and orders pages; empty lists them all.
pub fn page_table(schema: &Schema, ids: &[usize]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Page"),
        header_cell("Source"),
        header_cell("Title"),
        header_cell("Chapter"),
        header_cell("Released"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for id in schema.select_pages(ids) {
        let Some(page) = schema.page(id) else {
            continue;
        };
        let chapter = schema.page_to_chapter(id);
        table.add_row(vec![
            Cell::new(id),
            source_cell(page),
            title_cell(page.title()),
            chapter_cell(schema.chapter(chapter), chapter),
            release_cell(page),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn title_cell(title: Option<&str>) -> Cell {
    match title {
        Some(title) if !title.is_empty() => Cell::new(title),
        _ => dim_cell("-"),
    }
}

fn source_cell(page: &Page) -> Cell {
    let extra = page.sources().len().saturating_sub(1);
    if extra == 0 {
        Cell::new(page.primary_source())
    } else {
        Cell::new(format!("{} (+{extra})", page.primary_source()))
    }
}

fn chapter_cell(chapter: Option<&Chapter>, position: usize) -> Cell {
    match chapter {
        Some(_) => Cell::new(position),
        None => dim_cell("-"),
    }
}

fn release_cell(page: &Page) -> Cell {
    match page.release_date() {
        Some(date) => Cell::new(date.format(DATE_FORMAT)),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count)
    }
}

fn value_cell(value: String) -> Cell {
    if value == "-" {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
