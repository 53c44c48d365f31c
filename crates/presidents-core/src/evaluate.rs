//! Per-field answer evaluators.
//!
//! Each evaluator is a total function from free text to a [`Verdict`]: a
//! status plus the penalty subtracted from the running score. Empty or
//! malformed answers are simply incorrect, never an error.

use serde::{Deserialize, Serialize};

use crate::distance::edit_distance;
use crate::model::{EndLabel, FieldStatus, Party, PresidentRecord};
use crate::normalize::{normalize, normalize_party};
use crate::roster::Roster;

/// Largest edit distance that still earns partial credit.
pub const PARTIAL_DISTANCE: usize = 2;
/// Penalty for a wrong name or party.
pub const MISS_PENALTY: f64 = 1.0;
/// Penalty for a close name or party, and for any wrong year.
pub const HALF_PENALTY: f64 = 0.5;

/// Outcome of evaluating one answer cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: FieldStatus,
    pub penalty: f64,
}

impl Verdict {
    pub const CORRECT: Verdict = Verdict {
        status: FieldStatus::Correct,
        penalty: 0.0,
    };

    pub const PARTIAL: Verdict = Verdict {
        status: FieldStatus::Partial,
        penalty: HALF_PENALTY,
    };

    pub fn incorrect(penalty: f64) -> Self {
        Verdict {
            status: FieldStatus::Incorrect,
            penalty,
        }
    }

    pub fn is_correct(&self) -> bool {
        self.status == FieldStatus::Correct
    }

    /// Partial when `0 < distance <= PARTIAL_DISTANCE`, otherwise incorrect
    /// with `miss_penalty`.
    fn from_distance(distance: usize, miss_penalty: f64) -> Self {
        if distance > 0 && distance <= PARTIAL_DISTANCE {
            Verdict::PARTIAL
        } else {
            Verdict::incorrect(miss_penalty)
        }
    }
}

/// Evaluate a name answer against `record`.
///
/// First match wins: full name, then any alias, then a bare last name when
/// no other president in `roster` shares it, then fuzzy partial credit
/// against the full name, last name and aliases.
pub fn evaluate_name(answer: &str, record: &PresidentRecord, roster: &Roster) -> Verdict {
    let given = normalize(answer);
    if given.is_empty() {
        return Verdict::incorrect(MISS_PENALTY);
    }

    let full_name = normalize(&record.full_name);
    if given == full_name {
        return Verdict::CORRECT;
    }

    let aliases: Vec<String> = record.aliases.iter().map(|a| normalize(a)).collect();
    if aliases.contains(&given) {
        return Verdict::CORRECT;
    }

    let last_name = record.last_name.to_lowercase();
    if let Some(last_token) = given.rsplit(' ').next() {
        if last_token == last_name && roster.is_unique_last_name(&last_name) {
            return Verdict::CORRECT;
        }
    }

    let closest = std::iter::once(edit_distance(&given, &full_name))
        .chain(std::iter::once(edit_distance(&given, &last_name)))
        .chain(aliases.iter().map(|alias| edit_distance(&given, alias)))
        .min()
        .unwrap_or(usize::MAX);

    Verdict::from_distance(closest, MISS_PENALTY)
}

/// Evaluate a year answer.
///
/// `label` is the record's end label when evaluating an open-ended term;
/// any of its synonyms is then accepted. Years have no partial tier.
pub fn evaluate_year(answer: &str, expected_year: i32, label: Option<EndLabel>) -> Verdict {
    let given = answer.trim().to_lowercase();
    if given.is_empty() {
        return Verdict::incorrect(HALF_PENALTY);
    }

    if let Some(label) = label {
        if label.synonyms().contains(&given.as_str()) {
            return Verdict::CORRECT;
        }
    }

    match leading_integer(&given) {
        Some(year) if year == i64::from(expected_year) => Verdict::CORRECT,
        _ => Verdict::incorrect(HALF_PENALTY),
    }
}

/// Evaluate a party answer against the expected party.
pub fn evaluate_party(answer: &str, expected: Party) -> Verdict {
    let given = normalize_party(answer);
    if given.is_empty() {
        return Verdict::incorrect(MISS_PENALTY);
    }

    let expected = expected.canonical_token();
    if given == expected {
        return Verdict::CORRECT;
    }

    Verdict::from_distance(edit_distance(&given, expected), MISS_PENALTY)
}

/// Parse the leading base-10 integer of `s`, ignoring any trailing text
/// ("1789s" reads as 1789). `None` when `s` does not start with a number.
fn leading_integer(s: &str) -> Option<i64> {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}
