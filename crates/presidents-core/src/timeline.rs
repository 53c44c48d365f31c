//! Read-only timeline view of a roster.

use serde::Serialize;

use crate::model::Party;
use crate::roster::Roster;

/// One row of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub number: u32,
    pub full_name: String,
    /// `start–end`, with the end label in place of the year when set.
    pub span: String,
    pub party: Party,
    pub details: Option<String>,
}

/// Timeline entries in ascending ordinal order.
pub fn timeline(roster: &Roster) -> Vec<TimelineEntry> {
    roster
        .iter()
        .map(|r| TimelineEntry {
            number: r.number,
            full_name: r.full_name.clone(),
            span: r.span(),
            party: r.party,
            details: r.details.clone(),
        })
        .collect()
}
