//! Grade report types with JSON persistence and markdown rendering.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{CheckOutcome, BASELINE_SCORE};
use crate::model::{AnswerRow, Field, FieldStatus};
use crate::roster::Roster;
use crate::statistics::{field_accuracy, FieldAccuracy};

/// Summary of one grading pass over an answer sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    /// When the sheet was graded.
    pub created_at: DateTime<Utc>,
    pub score: f64,
    pub baseline: f64,
    pub correct_count: usize,
    pub max_correct: usize,
    /// Accuracy per answer column, in column order.
    pub fields: Vec<FieldReport>,
    /// Every cell that was not graded correct, in roster order.
    pub mistakes: Vec<Mistake>,
}

/// Accuracy of one answer column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReport {
    pub field: Field,
    #[serde(flatten)]
    pub accuracy: FieldAccuracy,
}

/// A cell that was incorrect or only partially right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mistake {
    pub number: u32,
    pub field: Field,
    pub given: String,
    pub expected: String,
    pub status: FieldStatus,
}

impl GradeReport {
    /// Build a report from a check outcome and the answers it graded.
    pub fn new(outcome: &CheckOutcome, answers: &[AnswerRow], roster: &Roster) -> Self {
        let accuracy = field_accuracy(&outcome.statuses);
        let fields = Field::ALL
            .iter()
            .map(|field| FieldReport {
                field: *field,
                accuracy: accuracy.get(field).copied().unwrap_or_default(),
            })
            .collect();

        let mut mistakes = Vec::new();
        for ((record, status), index) in roster.iter().zip(&outcome.statuses).zip(0..) {
            for field in Field::ALL {
                let status = status.get(field);
                if status == FieldStatus::Correct {
                    continue;
                }
                mistakes.push(Mistake {
                    number: record.number,
                    field,
                    given: answers
                        .get(index)
                        .map(|row| row.get(field).to_string())
                        .unwrap_or_default(),
                    expected: record.expected_display(field),
                    status,
                });
            }
        }

        Self {
            created_at: Utc::now(),
            score: outcome.score,
            baseline: BASELINE_SCORE,
            correct_count: outcome.correct_count,
            max_correct: outcome.max_correct,
            fields,
            mistakes,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: GradeReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("## Grade report\n\n");
        md.push_str(&format!(
            "**Score:** {:.2} / {:.0} ({} of {} fields correct)\n\n",
            self.score, self.baseline, self.correct_count, self.max_correct
        ));

        md.push_str("| Field | Correct | Partial | Incorrect | Accuracy |\n");
        md.push_str("|-------|---------|---------|-----------|----------|\n");
        for f in &self.fields {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {:.1}% |\n",
                f.field,
                f.accuracy.correct,
                f.accuracy.partial,
                f.accuracy.incorrect,
                f.accuracy.rate() * 100.0
            ));
        }
        md.push('\n');

        if self.mistakes.is_empty() {
            md.push_str("No mistakes.\n");
            return md;
        }

        md.push_str("### Mistakes\n\n");
        md.push_str("| # | Field | Given | Expected | Status |\n");
        md.push_str("|---|-------|-------|----------|--------|\n");
        for m in &self.mistakes {
            let given = if m.given.trim().is_empty() {
                "_(blank)_"
            } else {
                m.given.as_str()
            };
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                m.number, m.field, given, m.expected, m.status
            ));
        }

        md
    }
}
