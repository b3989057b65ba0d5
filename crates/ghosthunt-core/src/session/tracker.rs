use std::collections::{HashMap, HashSet};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::quiz::{QuestionBank, QuestionId};
use crate::score::{Award, Points, ScoreRecord};
use crate::session::{
    AnswerOutcome, EndReason, QuestionProgress, SessionClock, SessionPhase, SkipOutcome,
};

/// Player identity for a session. Validated once at session start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub contact: String,
}

impl Player {
    /// Validate a name and contact: the name must be non-empty and the contact
    /// must contain `@`. Surrounding whitespace is dropped.
    pub fn new(name: &str, contact: &str) -> Result<Self> {
        let name = name.trim();
        let contact = contact.trim();
        if name.is_empty() {
            return Err(Error::InvalidPlayerName);
        }
        if !contact.contains('@') {
            return Err(Error::InvalidContact(contact.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            contact: contact.to_string(),
        })
    }
}

/// Game progress for one session.
///
/// Owns the remaining-target counter, the point total, per-question attempt
/// state and the session clock. Not meant for concurrent mutation; callers
/// serialize access.
#[derive(Debug, Clone)]
pub struct Tracker {
    bank: QuestionBank,
    phase: SessionPhase,
    player: Option<Player>,
    points: Points,
    remaining: usize,
    progress: HashMap<QuestionId, QuestionProgress>,
    skipped: Vec<QuestionId>,
    collected: HashSet<QuestionId>,
    clock: SessionClock,
}

impl Tracker {
    pub fn new(bank: QuestionBank) -> Self {
        let remaining = bank.len();
        Self {
            bank,
            phase: SessionPhase::NotStarted,
            player: None,
            points: Points::ZERO,
            remaining,
            progress: HashMap::new(),
            skipped: Vec::new(),
            collected: HashSet::new(),
            clock: SessionClock::default(),
        }
    }

    /// Validate the player and start the session.
    ///
    /// On rejection the tracker stays in `NotStarted`.
    pub fn start_session(&mut self, name: &str, contact: &str) -> Result<()> {
        if self.phase != SessionPhase::NotStarted {
            return Err(Error::SessionAlreadyStarted);
        }
        let player = Player::new(name, contact)?;

        self.remaining = self.bank.len();
        self.points = Points::ZERO;
        self.progress.clear();
        self.skipped.clear();
        self.collected.clear();
        self.clock.start(Instant::now());
        self.phase = SessionPhase::Active;

        info!(
            "Session started for {} ({} targets)",
            player.name, self.remaining
        );
        self.player = Some(player);
        Ok(())
    }

    /// Apply an answer to a question.
    pub fn record_answer(
        &mut self,
        question_id: &QuestionId,
        selected_index: usize,
    ) -> Result<AnswerOutcome> {
        self.ensure_active()?;
        let question = self
            .bank
            .get(question_id)
            .ok_or_else(|| Error::UnknownQuestion(question_id.to_string()))?;
        if selected_index >= question.options.len() {
            return Err(Error::OptionOutOfRange {
                question: question_id.to_string(),
                index: selected_index,
                options: question.options.len(),
            });
        }
        let correct_index = question.correct_index;
        let is_correct = question.is_correct(selected_index);

        let current = self.progress_of(question_id);
        if current.is_resolved() {
            return Err(Error::QuestionResolved(question_id.to_string()));
        }

        let outcome = if is_correct {
            let awarded = Award::for_correct_answer(current.failed_attempts());
            self.points.add(awarded);
            self.resolve(question_id, QuestionProgress::Resolved(awarded));
            AnswerOutcome::Correct {
                awarded,
                total: self.points.value(),
            }
        } else {
            let next = current.after_failure();
            if next.is_resolved() {
                self.resolve(question_id, next);
                AnswerOutcome::Exhausted { correct_index }
            } else {
                self.progress.insert(question_id.clone(), next);
                AnswerOutcome::TryAgain {
                    attempts_remaining: next.attempts_remaining(),
                }
            }
        };

        debug!("Answer for {}: {:?}", question_id, outcome);
        Ok(outcome)
    }

    /// Set a question aside. Counts as an attempt.
    pub fn record_skip(&mut self, question_id: &QuestionId) -> Result<SkipOutcome> {
        self.ensure_active()?;
        if !self.bank.contains(question_id) {
            return Err(Error::UnknownQuestion(question_id.to_string()));
        }
        let current = self.progress_of(question_id);
        if current.is_resolved() {
            return Err(Error::QuestionResolved(question_id.to_string()));
        }

        let next = current.after_failure();
        let outcome = if next.is_resolved() {
            self.resolve(question_id, next);
            SkipOutcome::Exhausted
        } else {
            self.progress.insert(question_id.clone(), next);
            if !self.skipped.contains(question_id) {
                self.skipped.push(question_id.clone());
            }
            SkipOutcome::Deferred {
                attempts_remaining: next.attempts_remaining(),
            }
        };

        debug!("Skip for {}: {:?}", question_id, outcome);
        Ok(outcome)
    }

    /// Count one more target as collected. Reaching zero completes the session
    /// and returns its record.
    pub fn decrement_remaining(&mut self) -> Result<Option<ScoreRecord>> {
        self.ensure_active()?;
        self.remaining = self.remaining.saturating_sub(1);
        debug!("Targets remaining: {}", self.remaining);

        if self.remaining == 0 {
            return Ok(self.end_session(EndReason::Completed));
        }
        Ok(None)
    }

    /// Collect the target of a resolved question.
    pub fn collect(&mut self, question_id: &QuestionId) -> Result<Option<ScoreRecord>> {
        self.ensure_active()?;
        if !self.bank.contains(question_id) {
            return Err(Error::UnknownQuestion(question_id.to_string()));
        }
        if !self.progress_of(question_id).is_resolved() {
            return Err(Error::QuestionNotResolved(question_id.to_string()));
        }
        if !self.collected.insert(question_id.clone()) {
            return Err(Error::TargetAlreadyCollected(question_id.to_string()));
        }
        self.decrement_remaining()
    }

    /// End the session and build its record.
    ///
    /// Returns `None` once the session is no longer active, so a record is
    /// emitted at most once.
    pub fn end_session(&mut self, reason: EndReason) -> Option<ScoreRecord> {
        if self.phase != SessionPhase::Active {
            return None;
        }
        let elapsed = self.clock.freeze(Instant::now());
        self.phase = reason.terminal_phase();

        let player = self.player.as_ref()?;
        let record = ScoreRecord::new(
            &player.name,
            &player.contact,
            self.points.value(),
            elapsed.as_secs_f64(),
        );
        info!(
            "Session {} for {}: {} points in {:.2}s",
            reason, record.name, self.points, record.elapsed_seconds
        );
        Some(record)
    }

    /// Seconds since the session started; frozen after it ended.
    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.elapsed_at(Instant::now()).as_secs_f64()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn points(&self) -> f64 {
        self.points.value()
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    pub fn progress(&self, question_id: &QuestionId) -> QuestionProgress {
        self.progress_of(question_id)
    }

    pub fn attempts_remaining(&self, question_id: &QuestionId) -> u8 {
        self.progress_of(question_id).attempts_remaining()
    }

    pub fn is_skipped(&self, question_id: &QuestionId) -> bool {
        self.skipped.contains(question_id)
    }

    pub fn skipped(&self) -> &[QuestionId] {
        &self.skipped
    }

    pub fn is_collected(&self, question_id: &QuestionId) -> bool {
        self.collected.contains(question_id)
    }

    /// Unresolved questions, previously skipped ones first.
    pub fn pending_questions(&self) -> Vec<&QuestionId> {
        let mut pending: Vec<&QuestionId> = self.skipped.iter().collect();
        pending.extend(
            self.bank
                .ids()
                .filter(|id| !self.progress_of(id).is_resolved() && !self.is_skipped(id)),
        );
        pending
    }

    fn ensure_active(&self) -> Result<()> {
        if self.phase != SessionPhase::Active {
            return Err(Error::SessionNotActive);
        }
        Ok(())
    }

    fn progress_of(&self, question_id: &QuestionId) -> QuestionProgress {
        self.progress.get(question_id).copied().unwrap_or_default()
    }

    fn resolve(&mut self, question_id: &QuestionId, progress: QuestionProgress) {
        self.progress.insert(question_id.clone(), progress);
        self.skipped.retain(|id| id != question_id);
    }
}
