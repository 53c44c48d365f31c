//! presidents-core — answer evaluation, scoring and quiz sessions.
//!
//! This crate holds the reference roster of U.S. presidents, the tolerant
//! per-field evaluators, the grading pass, and the practice/test session
//! state machine. Flashcards, the timeline view and file loading for custom
//! rosters and answer sheets build on the same data model.

pub mod dataset;
pub mod distance;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod flashcards;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod report;
pub mod roster;
pub mod session;
pub mod statistics;
pub mod timeline;
pub mod traits;

pub use engine::{run_check, CheckOutcome, BASELINE_SCORE};
pub use error::{RosterError, SessionError};
pub use model::{AnswerRow, EndLabel, Field, FieldStatus, Mode, Party, PresidentRecord, StatusRow};
pub use roster::Roster;
pub use session::{Attempt, AttemptLog, Phase, QuizSession, RevealedCell};
