//! Session accumulator: streak, xp and history for one sitting.
//!
//! A `QuizSession` lives for one quiz or practice run. Every answer updates
//! the profile in memory, forwards to the scheduler, and (through
//! [`QuizSession::submit_answer`]) is written through to the profile store.

use crate::config;
use crate::domain::{AnswerEvent, AnswerResult, Profile, StudyMode, WordStat};
use crate::srs::record_answer;
use crate::store::{ProfileStore, StoreError};

/// Session state for tracking streak and running totals
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
  pub mode: StudyMode,
  /// Consecutive correct quiz answers
  pub streak: u32,
  /// Net xp change actually applied this session
  pub xp_delta: i64,
  pub answered: u32,
  pub correct: u32,
}

/// Result of applying one answer
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
  /// The history entry that was appended
  pub event: AnswerEvent,
  /// Streak flavor text (quiz mode only)
  pub bonus_message: Option<&'static str>,
  /// The word's stats after the scheduler update
  pub word_stat: WordStat,
}

impl AnswerOutcome {
  pub fn is_correct(&self) -> bool {
    self.event.result.is_correct()
  }
}

/// An answer that was applied in memory but could not be saved
#[derive(Debug)]
pub struct UnsavedAnswer {
  pub outcome: AnswerOutcome,
  pub error: StoreError,
}

impl std::fmt::Display for UnsavedAnswer {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Answer to '{}' not saved: {}", self.outcome.event.word, self.error)
  }
}

impl std::error::Error for UnsavedAnswer {}

/// End-of-session totals for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
  pub mode: StudyMode,
  pub answered: u32,
  pub correct: u32,
  pub xp_delta: i64,
}

impl QuizSession {
  pub fn new(mode: StudyMode) -> Self {
    Self {
      mode,
      ..Self::default()
    }
  }

  pub fn quiz() -> Self {
    Self::new(StudyMode::Quiz)
  }

  pub fn practice() -> Self {
    Self::new(StudyMode::Practice)
  }

  /// Score an answer and apply it to the profile in memory.
  ///
  /// Quiz mode: +10 and streak up when correct, -5 and streak reset when
  /// wrong, plus the streak bonus; xp floors at zero. Practice mode leaves xp
  /// and streak alone. Both modes append one history entry and update the
  /// word's scheduler stats.
  pub fn apply_answer(
    &mut self,
    profile: &mut Profile,
    word: &str,
    correct_meaning: &str,
    selected: &str,
  ) -> AnswerOutcome {
    let is_correct = selected == correct_meaning;

    let (xp_gained, bonus_message) = if self.mode.is_practice() {
      (0, None)
    } else {
      let base = if is_correct {
        self.streak += 1;
        config::CORRECT_XP
      } else {
        self.streak = 0;
        -config::WRONG_XP_PENALTY
      };
      let (bonus, message) = config::streak_bonus(self.streak);
      (base + bonus, message)
    };

    let xp_before = profile.xp;
    profile.apply_xp(xp_gained);
    self.xp_delta += profile.xp as i64 - xp_before as i64;

    self.answered += 1;
    if is_correct {
      self.correct += 1;
    }

    let streak_at_time = if self.mode.is_practice() { 0 } else { self.streak };
    let event = AnswerEvent::new(
      word,
      selected,
      correct_meaning,
      AnswerResult::from_bool(is_correct),
      xp_gained,
      streak_at_time,
      self.mode,
    );
    profile.history.push(event.clone());

    let word_stat = record_answer(profile, word, is_correct);

    tracing::debug!(
      "{} answered '{}' {} ({} xp, streak {})",
      profile.username,
      word,
      if is_correct { "correctly" } else { "wrong" },
      xp_gained,
      self.streak
    );

    AnswerOutcome {
      event,
      bonus_message,
      word_stat,
    }
  }

  /// Apply an answer, then save the whole profile.
  ///
  /// On a failed save the answer stays applied in memory and the error
  /// carries the outcome, so the caller can still show feedback and retry
  /// the save later. Nothing is retried here.
  pub fn submit_answer(
    &mut self,
    profile: &mut Profile,
    store: &dyn ProfileStore,
    word: &str,
    correct_meaning: &str,
    selected: &str,
  ) -> Result<AnswerOutcome, UnsavedAnswer> {
    let outcome = self.apply_answer(profile, word, correct_meaning, selected);
    if let Err(error) = store.save(profile) {
      tracing::error!("Failed to save profile '{}': {}", profile.username, error);
      return Err(UnsavedAnswer { outcome, error });
    }
    Ok(outcome)
  }

  pub fn summary(&self) -> SessionSummary {
    SessionSummary {
      mode: self.mode,
      answered: self.answered,
      correct: self.correct,
      xp_delta: self.xp_delta,
    }
  }
}
