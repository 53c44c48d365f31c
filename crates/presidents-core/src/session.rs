//! Quiz session state machine.
//!
//! A session moves between explicit phases:
//!
//! ```text
//! Idle ──start(practice)──▶ Practicing ──check──▶ Checked ◀─┐
//!   │                                              │  check │
//!   │                                              └────────┘
//!   └───start(test)──────▶ Testing ─────check────▶ Finished
//! ```
//!
//! `start` is allowed from every phase and clears everything except the
//! attempt history. A finished test rejects edits and further checks.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{run_check, CheckOutcome};
use crate::error::SessionError;
use crate::model::{AnswerRow, Field, FieldStatus, Mode, StatusRow};
use crate::roster::Roster;
use crate::statistics::format_elapsed;
use crate::traits::{Clock, SystemClock};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Practicing,
    Testing,
    /// A practice sheet that has been checked at least once.
    Checked,
    /// A test that has been checked; inputs are locked.
    Finished,
}

impl Phase {
    pub fn mode(self) -> Option<Mode> {
        match self {
            Phase::Idle => None,
            Phase::Practicing | Phase::Checked => Some(Mode::Practice),
            Phase::Testing | Phase::Finished => Some(Mode::Test),
        }
    }
}

/// A completed test attempt. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    /// 1-based, in the order attempts were recorded.
    pub id: usize,
    pub recorded_at: DateTime<Utc>,
    pub score: f64,
    pub correct_count: usize,
    pub max_correct: usize,
    pub elapsed_ms: u64,
}

impl Attempt {
    /// Elapsed time as `m:ss`.
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed_ms)
    }
}

/// Append-only log of test attempts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttemptLog {
    attempts: Vec<Attempt>,
}

impl AttemptLog {
    fn record(
        &mut self,
        outcome: &CheckOutcome,
        elapsed_ms: u64,
        recorded_at: DateTime<Utc>,
    ) -> &Attempt {
        let id = self.attempts.len() + 1;
        self.attempts.push(Attempt {
            id,
            recorded_at,
            score: outcome.score,
            correct_count: outcome.correct_count,
            max_correct: outcome.max_correct,
            elapsed_ms,
        });
        &self.attempts[id - 1]
    }

    /// Attempts in the order they were recorded.
    pub fn as_slice(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attempt> {
        self.attempts.iter()
    }

    /// Attempts with the most recent first.
    pub fn newest_first(&self) -> impl Iterator<Item = &Attempt> {
        self.attempts.iter().rev()
    }

    pub fn latest(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }
}

/// How a revealed cell should be presented. Built from the stored answer and
/// status; revealing never changes either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevealedCell {
    /// Nothing was entered; show the expected value muted.
    Blank { expected: String },
    /// The answer was right; show it as given.
    Correct { given: String },
    /// Incorrect or partial; show the answer struck through beside the
    /// expected value.
    Mistaken { given: String, expected: String },
}

/// One quiz over a roster, plus the history of test attempts.
pub struct QuizSession {
    roster: Arc<Roster>,
    clock: Arc<dyn Clock>,
    phase: Phase,
    answers: Vec<AnswerRow>,
    statuses: Vec<StatusRow>,
    score: Option<f64>,
    correct_count: Option<usize>,
    elapsed_ms: Option<u64>,
    revealed: bool,
    started_at: Option<DateTime<Utc>>,
    history: AttemptLog,
}

impl QuizSession {
    pub fn new(roster: Arc<Roster>) -> Self {
        Self::with_clock(roster, Arc::new(SystemClock))
    }

    pub fn with_clock(roster: Arc<Roster>, clock: Arc<dyn Clock>) -> Self {
        let rows = roster.len();
        Self {
            roster,
            clock,
            phase: Phase::Idle,
            answers: vec![AnswerRow::default(); rows],
            statuses: vec![StatusRow::default(); rows],
            score: None,
            correct_count: None,
            elapsed_ms: None,
            revealed: false,
            started_at: None,
            history: AttemptLog::default(),
        }
    }

    /// Enter `mode` with a blank sheet. The attempt history is kept.
    pub fn start(&mut self, mode: Mode) {
        let rows = self.roster.len();
        self.answers = vec![AnswerRow::default(); rows];
        self.statuses = vec![StatusRow::default(); rows];
        self.score = None;
        self.correct_count = None;
        self.elapsed_ms = None;
        self.revealed = false;
        self.started_at = Some(self.clock.now());
        self.phase = match mode {
            Mode::Practice => Phase::Practicing,
            Mode::Test => Phase::Testing,
        };
        tracing::debug!(%mode, "quiz started");
    }

    /// Store an answer. In practice mode the field's status goes back to
    /// unchecked and any reveal is cleared; the score stays until the next
    /// check.
    pub fn edit(
        &mut self,
        index: usize,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.ensure_row(index)?;

        self.answers[index].set(field, value);
        if self.phase.mode() == Some(Mode::Practice) {
            self.statuses[index].set(field, FieldStatus::Unchecked);
            self.revealed = false;
        }
        Ok(())
    }

    /// Grade the sheet.
    ///
    /// Practice sheets can be checked any number of times. A test is checked
    /// once: elapsed time is frozen, the attempt is appended to the history
    /// and the session becomes [`Phase::Finished`].
    pub fn check(&mut self) -> Result<CheckOutcome, SessionError> {
        match self.phase {
            Phase::Idle => return Err(self.reject(SessionError::NoActiveMode)),
            Phase::Finished => return Err(self.reject(SessionError::Finished)),
            Phase::Practicing | Phase::Checked | Phase::Testing => {}
        }

        let outcome = run_check(&self.answers, &self.roster);
        self.statuses = outcome.statuses.clone();
        self.score = Some(outcome.score);
        self.correct_count = Some(outcome.correct_count);

        if self.phase == Phase::Testing {
            let now = self.clock.now();
            let started_at = self.started_at.unwrap_or(now);
            let elapsed_ms = u64::try_from((now - started_at).num_milliseconds()).unwrap_or(0);
            self.elapsed_ms = Some(elapsed_ms);
            let attempt = self.history.record(&outcome, elapsed_ms, now);
            tracing::debug!(
                attempt = attempt.id,
                score = attempt.score,
                elapsed_ms,
                "test attempt recorded"
            );
            self.phase = Phase::Finished;
        } else {
            self.elapsed_ms = None;
            self.phase = Phase::Checked;
        }

        Ok(outcome)
    }

    /// Show expected answers next to the stored ones, checking first if the
    /// sheet has not been checked yet.
    pub fn reveal(&mut self) -> Result<(), SessionError> {
        if self.phase == Phase::Idle {
            return Err(self.reject(SessionError::NoActiveMode));
        }
        if self.score.is_none() {
            self.check()?;
        }
        self.revealed = true;
        Ok(())
    }

    /// Leave the reveal view and return to editable inputs. Practice only.
    pub fn resume_editing(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Idle => Err(self.reject(SessionError::NoActiveMode)),
            Phase::Testing | Phase::Finished => {
                Err(self.reject(SessionError::RevealLocked(Mode::Test)))
            }
            Phase::Practicing | Phase::Checked => {
                self.revealed = false;
                Ok(())
            }
        }
    }

    /// Presentation of a cell while revealed; `None` when not revealed or the
    /// row does not exist.
    pub fn revealed_cell(&self, index: usize, field: Field) -> Option<RevealedCell> {
        if !self.revealed {
            return None;
        }
        let record = self.roster.get(index)?;
        let given = self.answers[index].get(field);
        let expected = record.expected_display(field);

        Some(if given.is_empty() {
            RevealedCell::Blank { expected }
        } else if self.statuses[index].get(field) == FieldStatus::Correct {
            RevealedCell::Correct {
                given: given.to_string(),
            }
        } else {
            RevealedCell::Mistaken {
                given: given.to_string(),
                expected,
            }
        })
    }

    fn ensure_editable(&self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Idle => Err(self.reject(SessionError::NoActiveMode)),
            Phase::Finished => Err(self.reject(SessionError::Finished)),
            Phase::Practicing | Phase::Checked | Phase::Testing => Ok(()),
        }
    }

    fn ensure_row(&self, index: usize) -> Result<(), SessionError> {
        if index < self.roster.len() {
            Ok(())
        } else {
            Err(self.reject(SessionError::RowOutOfRange {
                index,
                len: self.roster.len(),
            }))
        }
    }

    fn reject(&self, error: SessionError) -> SessionError {
        tracing::debug!(phase = ?self.phase, %error, "session action rejected");
        error
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Option<Mode> {
        self.phase.mode()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn answers(&self) -> &[AnswerRow] {
        &self.answers
    }

    pub fn statuses(&self) -> &[StatusRow] {
        &self.statuses
    }

    /// Score of the most recent check in this mode, if any.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    pub fn correct_count(&self) -> Option<usize> {
        self.correct_count
    }

    /// Time taken by the test, frozen at its check.
    pub fn elapsed_ms(&self) -> Option<u64> {
        self.elapsed_ms
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether inputs are read-only.
    pub fn is_locked(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Finished)
    }

    pub fn can_check(&self) -> bool {
        matches!(
            self.phase,
            Phase::Practicing | Phase::Checked | Phase::Testing
        )
    }

    pub fn history(&self) -> &AttemptLog {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Party, PresidentRecord};
    use crate::traits::ManualClock;
    use chrono::Duration;

    fn washington_roster() -> Arc<Roster> {
        Arc::new(
            Roster::new(vec![PresidentRecord {
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
            .unwrap(),
        )
    }

    fn session_with_clock() -> (QuizSession, Arc<ManualClock>) {
        let start = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let clock = Arc::new(ManualClock::new(start));
        let session = QuizSession::with_clock(washington_roster(), clock.clone());
        (session, clock)
    }

    fn fill(session: &mut QuizSession, name: &str, start: &str, end: &str, party: &str) {
        session.edit(0, Field::Name, name).unwrap();
        session.edit(0, Field::StartYear, start).unwrap();
        session.edit(0, Field::EndYear, end).unwrap();
        session.edit(0, Field::Party, party).unwrap();
    }

    #[test]
    fn idle_rejects_actions() {
        let (mut session, _) = session_with_clock();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.is_locked());
        assert_eq!(session.check().unwrap_err(), SessionError::NoActiveMode);
        assert_eq!(session.reveal().unwrap_err(), SessionError::NoActiveMode);
        assert_eq!(
            session.edit(0, Field::Name, "x").unwrap_err(),
            SessionError::NoActiveMode
        );
        assert!(session.history().is_empty());
    }

    #[test]
    fn practice_checks_repeatedly() {
        let (mut session, _) = session_with_clock();
        session.start(Mode::Practice);
        fill(&mut session, "washington", "1789", "1800", "independent");

        let first = session.check().unwrap();
        assert_eq!(first.score, 93.5);
        assert_eq!(first.correct_count, 3);
        assert_eq!(session.phase(), Phase::Checked);
        assert_eq!(session.elapsed_ms(), None);

        session.edit(0, Field::EndYear, "1797").unwrap();
        assert_eq!(session.statuses()[0].end_year, FieldStatus::Unchecked);
        assert_eq!(session.statuses()[0].name, FieldStatus::Correct);
        // Score display stays until the next check
        assert_eq!(session.score(), Some(93.5));

        let second = session.check().unwrap();
        assert_eq!(second.score, 94.0);
        assert_eq!(second.correct_count, 4);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_mode_checks_once_and_records_attempt() {
        let (mut session, clock) = session_with_clock();
        session.start(Mode::Test);
        fill(&mut session, "washington", "1789", "1800", "independent");
        clock.advance(Duration::seconds(125));

        let outcome = session.check().unwrap();
        assert_eq!(outcome.score, 93.5);
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.elapsed_ms(), Some(125_000));
        assert_eq!(session.history().len(), 1);
        let attempt = session.history().latest().unwrap();
        assert_eq!(attempt.id, 1);
        assert_eq!(attempt.correct_count, 3);
        assert_eq!(attempt.elapsed_display(), "2:05");

        clock.advance(Duration::seconds(30));
        assert_eq!(session.check().unwrap_err(), SessionError::Finished);
        assert_eq!(
            session.edit(0, Field::Name, "adams").unwrap_err(),
            SessionError::Finished
        );
        assert_eq!(session.score(), Some(93.5));
        assert_eq!(session.correct_count(), Some(3));
        assert_eq!(session.elapsed_ms(), Some(125_000));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.answers()[0].name, "washington");
    }

    #[test]
    fn restart_clears_sheet_but_keeps_history() {
        let (mut session, _) = session_with_clock();
        session.start(Mode::Test);
        session.check().unwrap();
        session.reveal().unwrap();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().latest().unwrap().score, 91.0);

        session.start(Mode::Practice);
        assert_eq!(session.phase(), Phase::Practicing);
        assert_eq!(session.score(), None);
        assert_eq!(session.correct_count(), None);
        assert_eq!(session.elapsed_ms(), None);
        assert!(!session.is_revealed());
        assert_eq!(session.answers()[0], AnswerRow::default());
        assert_eq!(session.statuses()[0], StatusRow::default());
        assert_eq!(session.history().len(), 1);

        session.start(Mode::Test);
        session.check().unwrap();
        let ids: Vec<usize> = session.history().newest_first().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn reveal_checks_first_and_keeps_answers() {
        let (mut session, _) = session_with_clock();
        session.start(Mode::Practice);
        session.edit(0, Field::Name, "Washingtn").unwrap();
        session.edit(0, Field::StartYear, "1789").unwrap();
        assert!(session.revealed_cell(0, Field::Name).is_none());

        session.reveal().unwrap();
        assert!(session.is_revealed());
        assert_eq!(session.score(), Some(94.0 - 0.5 - 0.5 - 1.0));
        assert_eq!(session.answers()[0].name, "Washingtn");

        assert_eq!(
            session.revealed_cell(0, Field::Name),
            Some(RevealedCell::Mistaken {
                given: "Washingtn".into(),
                expected: "George Washington".into()
            })
        );
        assert_eq!(
            session.revealed_cell(0, Field::StartYear),
            Some(RevealedCell::Correct {
                given: "1789".into()
            })
        );
        assert_eq!(
            session.revealed_cell(0, Field::Party),
            Some(RevealedCell::Blank {
                expected: "none".into()
            })
        );
        assert_eq!(session.revealed_cell(3, Field::Party), None);
    }

    #[test]
    fn editing_while_revealed_unreveals_in_practice() {
        let (mut session, _) = session_with_clock();
        session.start(Mode::Practice);
        fill(&mut session, "GW", "1789", "1797", "none");
        session.reveal().unwrap();

        session.edit(0, Field::Party, "Federalist").unwrap();
        assert!(!session.is_revealed());
        assert_eq!(session.answers()[0].name, "GW");
        assert_eq!(session.answers()[0].start_year, "1789");
        assert_eq!(session.answers()[0].end_year, "1797");
        assert_eq!(session.statuses()[0].party, FieldStatus::Unchecked);

        session.reveal().unwrap();
        session.resume_editing().unwrap();
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_reveal_finishes_and_stays_locked() {
        let (mut session, _) = session_with_clock();
        session.start(Mode::Test);
        session.edit(0, Field::Name, "George Washington").unwrap();

        session.reveal().unwrap();
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.history().len(), 1);
        assert_eq!(
            session.resume_editing().unwrap_err(),
            SessionError::RevealLocked(Mode::Test)
        );
        assert!(session.is_revealed());

        // Revealing again does not record another attempt
        session.reveal().unwrap();
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn out_of_range_rows_are_rejected() {
        let (mut session, _) = session_with_clock();
        session.start(Mode::Practice);
        assert_eq!(
            session.edit(5, Field::Name, "x").unwrap_err(),
            SessionError::RowOutOfRange { index: 5, len: 1 }
        );
    }

    #[test]
    fn builtin_session_full_sheet() {
        let mut session = QuizSession::new(Roster::builtin());
        session.start(Mode::Practice);
        let records = session.roster().records().to_vec();
        for (index, record) in records.iter().enumerate() {
            session.edit(index, Field::Name, &record.full_name).unwrap();
            session
                .edit(index, Field::StartYear, record.start_year.to_string())
                .unwrap();
            session.edit(index, Field::EndYear, record.end_display()).unwrap();
            session.edit(index, Field::Party, record.party.key()).unwrap();
        }
        let outcome = session.check().unwrap();
        assert_eq!(outcome.score, 94.0);
        assert_eq!(outcome.correct_count, 168);
    }
}
