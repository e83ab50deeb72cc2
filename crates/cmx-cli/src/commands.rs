use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use cmx_cli::report::{chapter_table, config_table, page_table};
use cmx_core::{Book, CoreSettings};
use cmx_model::{Schema, SchemaConfig};

use crate::cli::{ExportArgs, PagesArgs, SchemaArgs, StateArgs};

/// Resume keys for books opened from the command line are scoped to this.
const CLI_CONTEXT_ID: &str = "cmx";

pub fn run_inspect(args: &SchemaArgs) -> Result<()> {
    let schema = load_schema(&args.file)?;
    println!("{}", config_table(&schema));
    if schema.chapter_count() > 0 {
        println!("{}", chapter_table(&schema));
    }
    Ok(())
}

pub fn run_pages(args: &PagesArgs) -> Result<()> {
    let schema = load_schema(&args.file)?;
    println!("{}", page_table(&schema, &args.ids));
    Ok(())
}

pub fn run_state(args: &StateArgs) -> Result<()> {
    let mut schema = load_schema(&args.file)?;
    if let Some(format) = &args.format {
        let config = schema.config().clone();
        schema = schema.with_config(SchemaConfig {
            format: format.clone(),
            ..config
        });
    }
    let settings = CoreSettings::default().with_page_push(true);
    let mut book = Book::new(CLI_CONTEXT_ID, schema, settings);
    let event = book
        .go(args.page)
        .with_context(|| format!("navigate to page {}", args.page))?;
    debug!(page = event.page, chapter = event.chapter, "rendered state");
    println!("{}", event.state.unwrap_or_default());
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let schema = load_schema(&args.file)?;
    let json = if args.pages_only {
        let pages = schema.export_pages();
        if args.compact {
            serde_json::to_string(&pages)
        } else {
            serde_json::to_string_pretty(&pages)
        }
    } else if args.compact {
        schema.to_json()
    } else {
        schema.to_json_pretty()
    };
    println!("{}", json.context("serialize schema")?);
    Ok(())
}

fn load_schema(path: &Path) -> Result<Schema> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let schema =
        Schema::from_json(&text).with_context(|| format!("parse {}", path.display()))?;
    info!(
        pages = schema.page_count(),
        chapters = schema.chapter_count(),
        "schema loaded"
    );
    Ok(schema)
}
