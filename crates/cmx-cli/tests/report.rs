//! Integration tests for inspection tables.

use cmx_cli::report::{chapter_table, config_table, page_table};
use cmx_model::Schema;

fn schema() -> Schema {
    Schema::from_json(
        r##"{
            "pages": [
                {"url": ["p0.png", "p0@2x.png"], "title": "Cover", "release": "2024-03-05T18:30:00"},
                "p1.png",
                "p2.png",
                "p3.png",
                "p4.png"
            ],
            "chapters": [
                {"start": 2, "title": "Departure"},
                {"start": 0, "title": "Prologue"},
                {"start": 2}
            ],
            "config": {"format": "c-p", "dir": "ltr", "back": "#1A1A1A"}
        }"##,
    )
    .expect("parse schema")
}

fn rows(table: &comfy_table::Table) -> Vec<String> {
    table.to_string().lines().map(str::to_string).collect()
}

#[test]
fn chapter_table_lists_sorted_ranges() {
    let table = chapter_table(&schema());
    let rows = rows(&table);
    let prologue = rows.iter().find(|row| row.contains("Prologue")).unwrap();
    assert!(prologue.contains("0-1"));
    let departure = rows.iter().find(|row| row.contains("Departure")).unwrap();
    assert!(!departure.contains("2-4"));
    // Only the last of two chapters sharing a start gets pages.
    assert!(rows.iter().any(|row| row.contains("2-4")));
    assert_eq!(table.row_count(), 3);
}

#[test]
fn page_table_follows_requested_ids() {
    let schema = schema();
    let table = page_table(&schema, &[3, 9, 0]);
    assert_eq!(table.row_count(), 2);
    let rendered = table.to_string();
    let third = rendered.find("p3.png").unwrap();
    let first = rendered.find("p0.png (+1)").unwrap();
    assert!(third < first);
    assert!(rendered.contains("2024-03-05 18:30"));
    assert!(rendered.contains("Cover"));
}

#[test]
fn page_table_defaults_to_every_page() {
    assert_eq!(page_table(&schema(), &[]).row_count(), 5);
}

#[test]
fn page_table_matches_page_export() {
    let schema = schema();
    let ids = [4, 12, 1];
    let rendered = page_table(&schema, &ids).to_string();
    let exported = schema.export_selected_pages(&ids);
    assert_eq!(exported, ["p4.png", "p1.png"]);
    let positions: Vec<usize> = exported
        .iter()
        .map(|source| rendered.find(*source).unwrap())
        .collect();
    assert!(positions[0] < positions[1]);
    assert_eq!(page_table(&schema, &ids).row_count(), exported.len());
}

#[test]
fn config_table_shows_normalized_values() {
    let rendered = config_table(&schema()).to_string();
    assert!(rendered.contains("c-p"));
    assert!(rendered.contains("directory"));
    assert!(rendered.contains("ltr"));
    assert!(rendered.contains("#1a1a1a"));
    assert!(rendered.contains("5 before, 5 after"));
    assert!(rendered.contains("250px, 16 lines, #373737 on #fff"));
}
