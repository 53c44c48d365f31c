//! Core data model types.
//!
//! These are the records of the reference dataset and the per-row answer and
//! status tuples the rest of the crate passes around.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Political party of a president. A closed set of keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    None,
    Federalist,
    #[serde(rename = "Democratic-Republican")]
    DemocraticRepublican,
    Democrat,
    Whig,
    Republican,
    #[serde(rename = "National Union")]
    NationalUnion,
}

impl Party {
    pub const ALL: [Party; 7] = [
        Party::None,
        Party::Federalist,
        Party::DemocraticRepublican,
        Party::Democrat,
        Party::Whig,
        Party::Republican,
        Party::NationalUnion,
    ];

    /// The lowercase token answers are compared against.
    pub fn canonical_token(self) -> &'static str {
        match self {
            Party::None => "none",
            Party::Federalist => "federalist",
            Party::DemocraticRepublican => "democratic-republican",
            Party::Democrat => "democrat",
            Party::Whig => "whig",
            Party::Republican => "republican",
            Party::NationalUnion => "national union",
        }
    }

    /// The dataset key, e.g. `Democratic-Republican`.
    pub fn key(self) -> &'static str {
        match self {
            Party::None => "None",
            Party::Federalist => "Federalist",
            Party::DemocraticRepublican => "Democratic-Republican",
            Party::Democrat => "Democrat",
            Party::Whig => "Whig",
            Party::Republican => "Republican",
            Party::NationalUnion => "National Union",
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Party {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Party::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(wanted) || p.canonical_token() == wanted)
            .ok_or_else(|| format!("unknown party: {wanted}"))
    }
}

/// Textual override for a term's end year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndLabel {
    /// The term is still running.
    Present,
}

impl EndLabel {
    /// Lowercase answers accepted in place of a year.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            EndLabel::Present => &["present", "current", "incumbent"],
        }
    }

    /// Display form used when revealing the answer.
    pub fn display(self) -> &'static str {
        match self {
            EndLabel::Present => "Present",
        }
    }
}

/// One presidency in the reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresidentRecord {
    /// Position in the order of succession, 1-based.
    pub number: u32,
    pub full_name: String,
    pub last_name: String,
    /// Alternate accepted names (nicknames, shortened forms).
    #[serde(default)]
    pub aliases: Vec<String>,
    pub start_year: i32,
    pub end_year: i32,
    /// When set, this label rather than `end_year` is the expected answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_label: Option<EndLabel>,
    pub party: Party,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl PresidentRecord {
    /// End of term as shown to the user: the label if present, else the year.
    pub fn end_display(&self) -> String {
        match self.end_label {
            Some(label) => label.display().to_string(),
            None => self.end_year.to_string(),
        }
    }

    /// `start–end` span text.
    pub fn span(&self) -> String {
        format!("{}\u{2013}{}", self.start_year, self.end_display())
    }

    /// The value a reveal shows for `field`.
    pub fn expected_display(&self, field: Field) -> String {
        match field {
            Field::Name => self.full_name.clone(),
            Field::StartYear => self.start_year.to_string(),
            Field::EndYear => self.end_display(),
            Field::Party => self.party.canonical_token().to_string(),
        }
    }
}

/// Quiz mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Unlimited checks, editable after checking.
    Practice,
    /// A single timed check, then locked.
    Test,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Practice => write!(f, "practice"),
            Mode::Test => write!(f, "test"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "practice" | "p" => Ok(Mode::Practice),
            "test" | "t" => Ok(Mode::Test),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// One of the four answer columns of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    StartYear,
    EndYear,
    Party,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::StartYear, Field::EndYear, Field::Party];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::StartYear => "start year",
            Field::EndYear => "end year",
            Field::Party => "party",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "name" => Ok(Field::Name),
            "start" | "start_year" => Ok(Field::StartYear),
            "end" | "end_year" => Ok(Field::EndYear),
            "party" => Ok(Field::Party),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

/// Classification of a single answer cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    #[default]
    Unchecked,
    Correct,
    Incorrect,
    /// Close enough for half credit.
    Partial,
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldStatus::Unchecked => write!(f, "unchecked"),
            FieldStatus::Correct => write!(f, "correct"),
            FieldStatus::Incorrect => write!(f, "incorrect"),
            FieldStatus::Partial => write!(f, "partial"),
        }
    }
}

/// Free-text answers for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_year: String,
    #[serde(default)]
    pub end_year: String,
    #[serde(default)]
    pub party: String,
}

impl AnswerRow {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::StartYear => &self.start_year,
            Field::EndYear => &self.end_year,
            Field::Party => &self.party,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::StartYear => self.start_year = value,
            Field::EndYear => self.end_year = value,
            Field::Party => self.party = value,
        }
    }
}

/// Per-field statuses for one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRow {
    pub name: FieldStatus,
    pub start_year: FieldStatus,
    pub end_year: FieldStatus,
    pub party: FieldStatus,
}

impl StatusRow {
    pub fn get(&self, field: Field) -> FieldStatus {
        match field {
            Field::Name => self.name,
            Field::StartYear => self.start_year,
            Field::EndYear => self.end_year,
            Field::Party => self.party,
        }
    }

    pub fn set(&mut self, field: Field, status: FieldStatus) {
        match field {
            Field::Name => self.name = status,
            Field::StartYear => self.start_year = status,
            Field::EndYear => self.end_year = status,
            Field::Party => self.party = status,
        }
    }

    pub fn correct_count(&self) -> usize {
        Field::ALL
            .iter()
            .filter(|f| self.get(**f) == FieldStatus::Correct)
            .count()
    }
}
