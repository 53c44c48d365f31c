//! The ordered, immutable reference roster.
//!
//! A `Roster` owns its records and the last-name uniqueness index derived
//! from them. Both are fixed at construction; every other component only
//! reads them.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use crate::dataset;
use crate::error::RosterError;
use crate::model::PresidentRecord;
use crate::normalize::normalize;

/// An ordered set of president records plus lookups derived from it.
#[derive(Debug, Clone)]
pub struct Roster {
    records: Vec<PresidentRecord>,
    unique_last_names: HashSet<String>,
}

impl Roster {
    /// Build a roster, enforcing ascending, unique, positive ordinals.
    pub fn new(records: Vec<PresidentRecord>) -> Result<Self, RosterError> {
        if records.is_empty() {
            return Err(RosterError::Empty);
        }
        if let Some(zero) = records.iter().find(|r| r.number == 0) {
            return Err(RosterError::ZeroOrdinal {
                name: zero.full_name.clone(),
            });
        }
        for pair in records.windows(2) {
            if pair[1].number <= pair[0].number {
                return Err(RosterError::OutOfOrder {
                    previous: pair[0].number,
                    current: pair[1].number,
                });
            }
        }
        Ok(Self::indexed(records))
    }

    /// The compiled-in roster, shared across the process.
    pub fn builtin() -> Arc<Roster> {
        static BUILTIN: OnceLock<Arc<Roster>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Arc::new(Self::indexed(dataset::builtin_records())))
            .clone()
    }

    fn indexed(records: Vec<PresidentRecord>) -> Self {
        let unique_last_names = unique_last_names(&records);
        tracing::debug!(
            records = records.len(),
            unique_last_names = unique_last_names.len(),
            "roster indexed"
        );
        Self {
            records,
            unique_last_names,
        }
    }

    pub fn records(&self) -> &[PresidentRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&PresidentRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PresidentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row index of the record with ordinal `number`.
    pub fn position_of(&self, number: u32) -> Option<usize> {
        self.records
            .binary_search_by_key(&number, |r| r.number)
            .ok()
    }

    /// Whether `last_name` (lowercase) belongs to exactly one distinct
    /// full name in this roster.
    pub fn is_unique_last_name(&self, last_name: &str) -> bool {
        self.unique_last_names.contains(last_name)
    }

    /// Highest possible correct-field count: four fields per record.
    pub fn max_correct(&self) -> usize {
        self.records.len() * 4
    }
}

/// Lowercased last names shared by a single distinct (normalised) full name.
/// A president with non-consecutive terms keeps his name unique.
fn unique_last_names(records: &[PresidentRecord]) -> HashSet<String> {
    let mut owners: HashMap<String, HashSet<String>> = HashMap::new();
    for record in records {
        owners
            .entry(record.last_name.to_lowercase())
            .or_default()
            .insert(normalize(&record.full_name));
    }
    owners
        .into_iter()
        .filter(|(_, full_names)| full_names.len() == 1)
        .map(|(last, _)| last)
        .collect()
}
