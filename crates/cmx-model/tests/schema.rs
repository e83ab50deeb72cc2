//! Tests for schema construction and export.

use cmx_model::{Chapter, ModelError, Page, RawDocument, RawInput, RawPage, Schema, SchemaError};
use serde_json::json;

const DOCUMENT: &str = r##"{
    "pages": [
        {"url": "comics/ch1/p001.png", "title": "Cover", "release": "2024-03-05"},
        {"url": ["comics/ch1/p002.png", "comics/ch1/p002@2x.png"], "alt": "Two"},
        {"url": "comics/ch2/p003.png", "hover": "mouse over"},
        {"url": "comics/ch2/p004.png", "special": {"frames": 3}}
    ],
    "chapters": [
        {"start": 2, "title": "Second"},
        {"start": 0, "title": "First", "description": "It begins"}
    ],
    "config": {
        "format": "YY/MM/DD",
        "startDate": "2024-01-01",
        "pageStartAt": 0,
        "startpage": 1,
        "back": "#FFFFFF"
    },
    "loading": {"lines": 8, "color": "#000"}
}"##;

#[test]
fn document_text_normalizes() {
    let schema = Schema::from_json(DOCUMENT).expect("build schema");

    assert_eq!(schema.page_count(), 4);
    assert_eq!(schema.chapter_count(), 2);
    assert_eq!(schema.chapters()[0].title(), Some("First"));
    assert_eq!(schema.chapters()[1].start(), 2);

    let cover = &schema.pages()[0];
    assert_eq!(cover.title(), Some("Cover"));
    assert!(cover.release_date().is_some());
    assert_eq!(schema.pages()[1].sources().len(), 2);
    assert_eq!(schema.pages()[1].alt_text(), Some("Two"));
    assert_eq!(schema.pages()[2].hover_text(), Some("mouse over"));
    assert_eq!(
        schema.pages()[3].extra().get("special"),
        Some(&json!({"frames": 3}))
    );

    let config = schema.config();
    assert_eq!(config.format, "YY/MM/DD");
    assert!(config.start_date.is_some());
    assert_eq!(config.page_start_at, 0);
    assert_eq!(config.chapter_start_at, 1);
    assert_eq!(config.start_page, 1);
    assert_eq!(config.back.value(), 0xffffff);
    assert_eq!(config.img_post_buffer, 5);

    assert_eq!(schema.loading().lines, 8);
    assert_eq!(schema.loading().diameter, 250);
    assert_eq!(schema.loading().color.value(), 0);
}

#[test]
fn document_without_fields_uses_defaults() {
    let schema = Schema::from_json("{}").expect("build schema");
    assert_eq!(schema.page_count(), 0);
    assert_eq!(schema.config().format, "C/PP");
    assert_eq!(schema.config().page_start_at, 1);
    assert_eq!(schema.loading().back.to_string(), "fff");
    assert!(schema.export_pages().is_empty());
}

#[test]
fn bare_source_list_becomes_pages() {
    let schema = Schema::from_value(json!(["a.png", "b.png", "c.png"])).expect("build schema");
    assert_eq!(schema.export_pages(), ["a.png", "b.png", "c.png"]);
    assert!(schema.pages().iter().all(|page| !page.has_metadata()));
}

#[test]
fn bare_object_list_renames_link() {
    let schema = Schema::from_value(json!([
        {"link": "a.png", "title": "A"},
        {"link": "b.png", "note": "B"}
    ]))
    .expect("build schema");
    assert_eq!(schema.pages()[0].sources(), ["a.png"]);
    assert_eq!(schema.pages()[0].title(), Some("A"));
    assert_eq!(schema.pages()[1].note(), Some("B"));
}

#[test]
fn typed_input_variants_are_accepted() {
    let list = Schema::new(vec![RawPage::from("x.png")]).expect("list");
    assert_eq!(list.export_pages(), ["x.png"]);

    let document = Schema::new(RawDocument::default()).expect("document");
    assert_eq!(document.page_count(), 0);

    let text = Schema::new(RawInput::Text("[\"y.png\"]".to_string())).expect("text");
    assert_eq!(text.export_pages(), ["y.png"]);
}

#[test]
fn chapters_are_sorted_by_start() {
    let schema = Schema::from_value(json!({
        "pages": ["0", "1", "2", "3", "4", "5", "6"],
        "chapters": [{"start": 5}, {"start": 2}]
    }))
    .expect("build schema");
    let starts: Vec<usize> = schema.chapters().iter().map(Chapter::start).collect();
    assert_eq!(starts, [2, 5]);
}

#[test]
fn malformed_text_fails_with_prefix() {
    let error = Schema::from_json("{\"pages\": [").unwrap_err();
    assert!(error.to_string().starts_with("failed to create schema: "));
    assert!(matches!(error.cause(), ModelError::Json(_)));
}

#[test]
fn bad_release_date_fails_construction() {
    let error: SchemaError = Schema::from_value(json!({
        "pages": [{"url": "a.png"}, {"url": "b.png", "release": "someday"}]
    }))
    .unwrap_err();
    assert!(matches!(
        error.cause(),
        ModelError::InvalidReleaseDate { page: 1, .. }
    ));
}

#[test]
fn bad_color_fails_construction() {
    let error = Schema::from_value(json!({"config": {"back": "#nothex"}})).unwrap_err();
    assert!(matches!(error.cause(), ModelError::InvalidHexstring { .. }));
}

#[test]
fn chapter_without_start_fails_construction() {
    let error = Schema::from_value(json!({"chapters": [{"title": "Lost"}]})).unwrap_err();
    assert!(matches!(error.cause(), ModelError::Json(_)));
}

#[test]
fn scalar_input_is_rejected() {
    let error = Schema::from_value(json!(true)).unwrap_err();
    assert!(matches!(
        error.cause(),
        ModelError::UnexpectedShape { found: "boolean" }
    ));
}

#[test]
fn export_uses_first_source_or_empty() {
    let mut schema = Schema::default();
    schema.set_pages(vec![
        Page::new(["lo.png", "hi.png"]),
        Page::new(Vec::<String>::new()),
        Page::new(["c.png"]),
    ]);
    assert_eq!(schema.export_pages(), ["lo.png", "", "c.png"]);
}

#[test]
fn selected_export_filters_by_id_in_requested_order() {
    let schema = Schema::from_value(json!(["a", "b", "c", "d"])).expect("build schema");
    assert_eq!(schema.export_selected_pages(&[3, 1]), ["d", "b"]);
    assert_eq!(schema.export_selected_pages(&[9, 0]), ["a"]);
    assert_eq!(schema.export_selected_pages(&[]), ["a", "b", "c", "d"]);
}

#[test]
fn page_selection_keeps_known_ids_in_order() {
    let schema = Schema::from_value(json!(["a", "b", "c"])).expect("build schema");
    assert_eq!(schema.select_pages(&[2, 7, 0, 2]), [2, 0, 2]);
    assert_eq!(schema.select_pages(&[]), [0, 1, 2]);
    assert!(Schema::default().select_pages(&[0]).is_empty());
}

#[test]
fn json_export_round_trips() {
    let schema = Schema::from_json(DOCUMENT).expect("build schema");
    let json = schema.to_json().expect("serialize");
    let again = Schema::from_json(&json).expect("rebuild from export");

    assert_eq!(again.pages(), schema.pages());
    assert_eq!(again.chapters(), schema.chapters());
    assert_eq!(again.config(), schema.config());
    assert_eq!(again.loading(), schema.loading());
}
