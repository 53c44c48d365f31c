//! Session and roster error types.
//!
//! Evaluators never fail; these errors only describe rejected session
//! transitions and rosters that break the dataset invariants.

use thiserror::Error;

use crate::model::Mode;

/// A session action that is not allowed in the current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No practice or test has been started yet.
    #[error("no quiz mode is active; start a practice or a test first")]
    NoActiveMode,

    /// The test has already been checked and its inputs are locked.
    #[error("the test is finished; start a new attempt to answer again")]
    Finished,

    /// The row index does not exist in the roster.
    #[error("row {index} is out of range (roster has {len} records)")]
    RowOutOfRange { index: usize, len: usize },

    /// Revealed answers can only be edited again in practice mode.
    #[error("revealed answers stay locked in {0} mode")]
    RevealLocked(Mode),
}

impl SessionError {
    /// Returns `true` if the caller should hide or disable the action
    /// rather than report it (the state simply does not offer it).
    pub fn is_gating(&self) -> bool {
        matches!(self, SessionError::NoActiveMode | SessionError::Finished)
    }
}

/// A roster that violates the dataset invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A roster must contain at least one record.
    #[error("roster is empty")]
    Empty,

    /// Ordinals must be positive.
    #[error("record '{name}' has ordinal 0; ordinals start at 1")]
    ZeroOrdinal { name: String },

    /// Ordinals must be strictly ascending.
    #[error("ordinal {current} follows {previous}; ordinals must be unique and ascending")]
    OutOfOrder { previous: u32, current: u32 },
}
