//! The `presidents grade` command.

use std::path::PathBuf;

use anyhow::Result;

use presidents_core::parser::parse_answer_sheet;
use presidents_core::report::GradeReport;
use presidents_core::run_check;

use crate::config::{load_config_from, OutputFormat};

pub fn execute(
    answers_path: PathBuf,
    roster_path: Option<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let roster = config.load_roster(roster_path.as_deref())?;

    let sheet = parse_answer_sheet(&answers_path)?;
    let answers = sheet.to_answer_rows(&roster);
    let outcome = run_check(&answers, &roster);
    let report = GradeReport::new(&outcome, &answers, &roster);
    tracing::info!(score = report.score, "graded {}", answers_path.display());

    if let Some(path) = &output {
        report.save_json(path)?;
        eprintln!("Report saved to {}", path.display());
    }

    match format.unwrap_or(config.output_format) {
        OutputFormat::Markdown => print!("{}", report.to_markdown()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!(
                "Score: {} / {} | Correct: {} / {}",
                report.score, report.baseline, report.correct_count, report.max_correct
            );
            for f in &report.fields {
                println!(
                    "  {:<10} {:>5.1}% ({} correct, {} close, {} wrong)",
                    f.field.to_string(),
                    f.accuracy.rate() * 100.0,
                    f.accuracy.correct,
                    f.accuracy.partial,
                    f.accuracy.incorrect
                );
            }

            if !report.mistakes.is_empty() {
                println!("\nMistakes:");
                for m in &report.mistakes {
                    let given = if m.given.trim().is_empty() {
                        "(blank)"
                    } else {
                        m.given.as_str()
                    };
                    println!(
                        "  #{} {}: {} -> {} [{}]",
                        m.number, m.field, given, m.expected, m.status
                    );
                }
            }
        }
    }

    Ok(())
}
