//! Adaptive word selection.
//!
//! - [`pool`] keeps the active pool sized to the learner's rank
//! - [`scheduler`] runs the per-word cooldown/priority state machine
//! - [`practice`] picks weak words for xp-neutral drills
//!
//! "Time" is counted in rounds, not wall-clock, so given a seeded rng and the
//! same answers every selection is reproducible.

pub mod pool;
pub mod practice;
pub mod scheduler;

pub use pool::{ensure_pool, pool_target_size, rank_for_xp};
pub use practice::weak_words;
pub use scheduler::{advance_round, record_answer, select_question_set, start_round, QuestionMix};

/// Why there is nothing to ask. Not a failure: the caller shows a
/// "no words available" screen and does not retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NothingToQuiz {
  /// The vocabulary source had no words
  EmptyVocabulary,
  /// The profile has no active pool yet
  EmptyPool,
  /// Every pool word is cooling down
  NoEligibleWords,
}

impl std::fmt::Display for NothingToQuiz {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      NothingToQuiz::EmptyVocabulary => write!(f, "No words available: the vocabulary is empty"),
      NothingToQuiz::EmptyPool => write!(f, "No words available: take a quiz first"),
      NothingToQuiz::NoEligibleWords => write!(f, "No words available: every word is cooling down"),
    }
  }
}

impl std::error::Error for NothingToQuiz {}
