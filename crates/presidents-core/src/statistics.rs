//! Attempt history summaries and per-field accuracy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Field, FieldStatus, StatusRow};
use crate::session::{Attempt, AttemptLog};

/// Format milliseconds as `m:ss`. Minutes are not padded and may exceed 59.
pub fn format_elapsed(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Aggregate view of every recorded test attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptSummary {
    pub attempts: usize,
    pub best_score: f64,
    pub mean_score: f64,
    pub best_correct: usize,
    /// Shortest elapsed time of any attempt, in milliseconds.
    pub fastest_ms: u64,
    pub latest: Attempt,
}

impl AttemptSummary {
    /// Summarise `log`; `None` when no test has been taken.
    pub fn from_log(log: &AttemptLog) -> Option<Self> {
        let latest = log.latest()?.clone();
        let attempts = log.len();

        let best_score = log.iter().map(|a| a.score).fold(f64::MIN, f64::max);
        let mean_score = log.iter().map(|a| a.score).sum::<f64>() / attempts as f64;
        let best_correct = log.iter().map(|a| a.correct_count).max().unwrap_or(0);
        let fastest_ms = log.iter().map(|a| a.elapsed_ms).min().unwrap_or(0);

        Some(Self {
            attempts,
            best_score,
            mean_score: (mean_score * 100.0).round() / 100.0,
            best_correct,
            fastest_ms,
            latest,
        })
    }

    pub fn fastest_display(&self) -> String {
        format_elapsed(self.fastest_ms)
    }
}

/// How one answer column fared across a graded sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldAccuracy {
    pub correct: usize,
    pub partial: usize,
    pub incorrect: usize,
}

impl FieldAccuracy {
    pub fn total(&self) -> usize {
        self.correct + self.partial + self.incorrect
    }

    /// Fraction of cells graded correct, 0.0 when nothing was graded.
    pub fn rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.correct as f64 / total as f64,
        }
    }
}

/// Tally statuses per field. Unchecked cells are not counted.
pub fn field_accuracy(statuses: &[StatusRow]) -> HashMap<Field, FieldAccuracy> {
    let mut per_field: HashMap<Field, FieldAccuracy> = Field::ALL
        .iter()
        .map(|f| (*f, FieldAccuracy::default()))
        .collect();

    for row in statuses {
        for field in Field::ALL {
            let entry = per_field.entry(field).or_default();
            match row.get(field) {
                FieldStatus::Correct => entry.correct += 1,
                FieldStatus::Partial => entry.partial += 1,
                FieldStatus::Incorrect => entry.incorrect += 1,
                FieldStatus::Unchecked => {}
            }
        }
    }

    per_field
}
