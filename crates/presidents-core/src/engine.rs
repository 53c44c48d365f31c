//! The grading pass.
//!
//! Applies every field evaluator to every record in ascending ordinal order,
//! subtracts the penalties from a fixed baseline and tallies correct fields.
//! The pass is pure: the same answers always produce the same outcome.

use serde::{Deserialize, Serialize};

use crate::evaluate::{evaluate_name, evaluate_party, evaluate_year, Verdict};
use crate::model::{AnswerRow, Field, PresidentRecord, StatusRow};
use crate::roster::Roster;

/// Points a sheet starts with before penalties.
pub const BASELINE_SCORE: f64 = 94.0;

/// Result of grading a full answer sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// One status row per roster record, same order as the roster.
    pub statuses: Vec<StatusRow>,
    /// Baseline minus penalties, floored at 0 and rounded to 2 decimals.
    pub score: f64,
    /// Number of fields classified correct.
    pub correct_count: usize,
    /// Highest possible `correct_count` for this roster.
    pub max_correct: usize,
}

/// Evaluate the answer `given` for one field of `record`.
pub fn evaluate_field(
    field: Field,
    given: &str,
    record: &PresidentRecord,
    roster: &Roster,
) -> Verdict {
    match field {
        Field::Name => evaluate_name(given, record, roster),
        Field::StartYear => evaluate_year(given, record.start_year, None),
        Field::EndYear => evaluate_year(given, record.end_year, record.end_label),
        Field::Party => evaluate_party(given, record.party),
    }
}

/// Grade `answers` against `roster`.
///
/// `answers[i]` belongs to `roster.records()[i]`; missing rows count as
/// blank and extra rows are ignored.
pub fn run_check(answers: &[AnswerRow], roster: &Roster) -> CheckOutcome {
    let blank = AnswerRow::default();
    let mut total = BASELINE_SCORE;
    let mut correct_count = 0usize;
    let mut statuses = Vec::with_capacity(roster.len());

    for (index, record) in roster.iter().enumerate() {
        let row = answers.get(index).unwrap_or(&blank);
        let mut status = StatusRow::default();
        for field in Field::ALL {
            let verdict = evaluate_field(field, row.get(field), record, roster);
            total -= verdict.penalty;
            if verdict.is_correct() {
                correct_count += 1;
            }
            status.set(field, verdict.status);
        }
        statuses.push(status);
    }

    let score = round_score(total.max(0.0));
    tracing::debug!(score, correct_count, rows = roster.len(), "graded answer sheet");

    CheckOutcome {
        statuses,
        score,
        correct_count,
        max_correct: roster.max_correct(),
    }
}

fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldStatus, Party};

    fn perfect_sheet(roster: &Roster) -> Vec<AnswerRow> {
        roster
            .iter()
            .map(|r| AnswerRow {
                name: r.full_name.clone(),
                start_year: r.start_year.to_string(),
                end_year: r.end_display(),
                party: r.party.key().to_string(),
            })
            .collect()
    }

    #[test]
    fn all_correct_scores_baseline() {
        let roster = Roster::builtin();
        let outcome = run_check(&perfect_sheet(&roster), &roster);
        assert_eq!(outcome.score, 94.0);
        assert_eq!(outcome.correct_count, 168);
        assert_eq!(outcome.max_correct, 168);
        assert!(outcome
            .statuses
            .iter()
            .all(|s| s.correct_count() == 4));
    }

    #[test]
    fn blank_sheet_floors_at_zero() {
        let roster = Roster::builtin();
        let outcome = run_check(&[], &roster);
        assert_eq!(outcome.score, 0.0);
        assert_eq!(outcome.correct_count, 0);
        assert_eq!(outcome.statuses.len(), 42);
        assert!(outcome
            .statuses
            .iter()
            .all(|s| s.name == FieldStatus::Incorrect && s.party == FieldStatus::Incorrect));
    }

    #[test]
    fn rerunning_is_idempotent() {
        let roster = Roster::builtin();
        let mut sheet = perfect_sheet(&roster);
        sheet[3].name = "James Madisen".into();
        sheet[10].party = "Whig".into();
        sheet[20].end_year = "1886".into();

        let first = run_check(&sheet, &roster);
        let second = run_check(&sheet, &roster);
        assert_eq!(first, second);
        assert_eq!(first.score, 94.0 - 0.5 - 1.0 - 0.5);
        assert_eq!(first.correct_count, 165);
        assert_eq!(first.statuses[3].name, FieldStatus::Partial);
    }

    #[test]
    fn single_record_scenario() {
        let roster = Roster::new(vec![PresidentRecord {
            number: 1,
            full_name: "George Washington".into(),
            last_name: "Washington".into(),
            aliases: vec!["GW".into()],
            start_year: 1789,
            end_year: 1797,
            end_label: None,
            party: Party::None,
            details: None,
            image_url: None,
        }])
        .unwrap();
        let answers = vec![AnswerRow {
            name: "washington".into(),
            start_year: "1789".into(),
            end_year: "1800".into(),
            party: "independent".into(),
        }];

        let outcome = run_check(&answers, &roster);
        assert_eq!(outcome.score, 93.5);
        assert_eq!(outcome.correct_count, 3);
        assert_eq!(outcome.max_correct, 4);
        let row = outcome.statuses[0];
        assert_eq!(row.name, FieldStatus::Correct);
        assert_eq!(row.start_year, FieldStatus::Correct);
        assert_eq!(row.end_year, FieldStatus::Incorrect);
        assert_eq!(row.party, FieldStatus::Correct);
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert_eq!(round_score(93.499999), 93.5);
        assert_eq!(round_score(0.0), 0.0);
        assert_eq!(round_score(41.25), 41.25);
    }
}
