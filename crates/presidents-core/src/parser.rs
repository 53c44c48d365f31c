//! Roster and answer-sheet file parsing.
//!
//! Loads custom rosters from TOML files and directories, validates them, and
//! reads answer sheets (TOML or JSON) for non-interactive grading.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{AnswerRow, EndLabel, Party, PresidentRecord};
use crate::normalize::normalize;
use crate::roster::Roster;

/// Intermediate TOML structure for roster files.
#[derive(Debug, Deserialize)]
struct TomlRosterFile {
    #[serde(default)]
    presidents: Vec<TomlPresident>,
}

#[derive(Debug, Deserialize)]
struct TomlPresident {
    number: u32,
    full_name: String,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    aliases: Vec<String>,
    start_year: i32,
    end_year: i32,
    party: String,
    #[serde(default)]
    end_label: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

#[derive(Serialize)]
struct RosterFileOut<'a> {
    presidents: &'a [PresidentRecord],
}

/// Parse a roster TOML file.
pub fn parse_roster(path: &Path) -> Result<Roster> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file: {}", path.display()))?;

    parse_roster_str(&content, path)
}

/// Parse roster TOML from a string (useful for testing).
pub fn parse_roster_str(content: &str, source_path: &Path) -> Result<Roster> {
    let parsed: TomlRosterFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let records = parsed
        .presidents
        .into_iter()
        .map(|p| {
            let party: Party = p
                .party
                .parse()
                .map_err(|e: String| anyhow::anyhow!("president {}: {}", p.number, e))?;

            let end_label = p
                .end_label
                .map(|label| match label.trim().to_lowercase().as_str() {
                    "present" => Ok(EndLabel::Present),
                    other => Err(anyhow::anyhow!(
                        "president {}: unknown end_label: {}",
                        p.number,
                        other
                    )),
                })
                .transpose()?;

            let last_name = match p.last_name {
                Some(last) => last,
                None => p
                    .full_name
                    .split_whitespace()
                    .last()
                    .unwrap_or_default()
                    .to_string(),
            };

            Ok(PresidentRecord {
                number: p.number,
                full_name: p.full_name,
                last_name,
                aliases: p.aliases,
                start_year: p.start_year,
                end_year: p.end_year,
                end_label,
                party,
                details: p.details,
                image_url: p.image_url,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let roster = Roster::new(records)
        .with_context(|| format!("invalid roster: {}", source_path.display()))?;
    tracing::debug!(path = %source_path.display(), records = roster.len(), "roster parsed");
    Ok(roster)
}

/// Render a roster in the same TOML layout [`parse_roster_str`] reads.
pub fn roster_to_toml(roster: &Roster) -> Result<String> {
    toml::to_string_pretty(&RosterFileOut {
        presidents: roster.records(),
    })
    .context("failed to serialize roster")
}

/// Recursively load all `.toml` roster files from a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_roster_directory(dir: &Path) -> Result<Vec<(PathBuf, Roster)>> {
    let mut rosters = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            rosters.extend(load_roster_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_roster(&path) {
                Ok(roster) => rosters.push((path, roster)),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(rosters)
}

/// A non-fatal issue found in a roster.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Ordinal of the record, if the warning is about one record.
    pub number: Option<u32>,
    pub message: String,
}

/// Check a roster for problems that do not prevent grading.
pub fn validate_roster(roster: &Roster) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for record in roster.iter() {
        let number = Some(record.number);

        if record.full_name.trim().is_empty() {
            warnings.push(ValidationWarning {
                number,
                message: "full_name is empty".into(),
            });
        }
        if record.last_name.trim().is_empty() {
            warnings.push(ValidationWarning {
                number,
                message: "last_name is empty".into(),
            });
        } else if !normalize(&record.full_name).ends_with(&normalize(&record.last_name)) {
            warnings.push(ValidationWarning {
                number,
                message: format!(
                    "last_name '{}' is not the end of full_name '{}'",
                    record.last_name, record.full_name
                ),
            });
        }

        if record.start_year > record.end_year {
            warnings.push(ValidationWarning {
                number,
                message: format!(
                    "start_year {} is after end_year {}",
                    record.start_year, record.end_year
                ),
            });
        }

        let mut seen = HashSet::new();
        for alias in &record.aliases {
            if !seen.insert(normalize(alias)) {
                warnings.push(ValidationWarning {
                    number,
                    message: format!("duplicate alias: {alias}"),
                });
            }
        }
    }

    let open_ended = roster.iter().filter(|r| r.end_label.is_some()).count();
    if open_ended > 1 {
        warnings.push(ValidationWarning {
            number: None,
            message: format!("{open_ended} records have an end_label; expected at most one"),
        });
    }

    warnings
}

/// One row of an answer sheet. Rows are matched to records by ordinal.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SheetRow {
    pub number: u32,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub start_year: String,
    #[serde(default, deserialize_with = "text")]
    pub end_year: String,
    #[serde(default, deserialize_with = "text")]
    pub party: String,
}

/// Answers for a whole roster, as written to disk.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnswerSheet {
    #[serde(default)]
    pub answers: Vec<SheetRow>,
}

impl AnswerSheet {
    /// Lay the sheet out against `roster`: one row per record, blank where
    /// the sheet has no entry. Unknown ordinals are skipped and a repeated
    /// ordinal keeps its last row.
    pub fn to_answer_rows(&self, roster: &Roster) -> Vec<AnswerRow> {
        let mut rows = vec![AnswerRow::default(); roster.len()];
        for row in &self.answers {
            match roster.position_of(row.number) {
                Some(index) => {
                    rows[index] = AnswerRow {
                        name: row.name.clone(),
                        start_year: row.start_year.clone(),
                        end_year: row.end_year.clone(),
                        party: row.party.clone(),
                    };
                }
                None => tracing::warn!(number = row.number, "answer for unknown ordinal skipped"),
            }
        }
        rows
    }
}

/// Accept free text written as a TOML/JSON string or a bare number.
fn text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Text::deserialize(deserializer)? {
        Text::Str(s) => s,
        Text::Int(i) => i.to_string(),
        Text::Float(f) => f.to_string(),
    })
}

/// Read an answer sheet; `.json` files are JSON, anything else TOML.
pub fn parse_answer_sheet(path: &Path) -> Result<AnswerSheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answer sheet: {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON: {}", path.display()))
    } else {
        toml::from_str(&content)
            .with_context(|| format!("failed to parse TOML: {}", path.display()))
    }
}
