//! The `presidents timeline` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, ContentArrangement, Table};

use presidents_core::timeline::{timeline, TimelineEntry};

use crate::config::{load_config_from, OutputFormat};

pub fn execute(
    roster_path: Option<PathBuf>,
    format: Option<OutputFormat>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let roster = config.load_roster(roster_path.as_deref())?;
    let entries = timeline(&roster);

    match format.unwrap_or(config.output_format) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Markdown => print!("{}", to_markdown(&entries)),
        OutputFormat::Text => println!("{}", to_table(&entries)),
    }

    Ok(())
}

fn to_table(entries: &[TimelineEntry]) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "President", "Years", "Party", "Details"]);

    for e in entries {
        table.add_row(vec![
            Cell::new(e.number),
            Cell::new(&e.full_name),
            Cell::new(&e.span),
            Cell::new(e.party),
            Cell::new(e.details.as_deref().unwrap_or("")),
        ]);
    }
    table
}

fn to_markdown(entries: &[TimelineEntry]) -> String {
    let mut md = String::new();
    md.push_str("| # | President | Years | Party | Details |\n");
    md.push_str("|---|-----------|-------|-------|---------|\n");
    for e in entries {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            e.number,
            e.full_name,
            e.span,
            e.party,
            e.details.as_deref().unwrap_or("")
        ));
    }
    md
}
