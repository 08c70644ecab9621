use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether an answer counts toward xp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
  #[default]
  #[serde(alias = "normal")]
  Quiz,
  Practice,
}

impl StudyMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Quiz => "quiz",
      Self::Practice => "practice",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "quiz" | "normal" => Some(Self::Quiz),
      "practice" => Some(Self::Practice),
      _ => None,
    }
  }

  pub fn is_practice(&self) -> bool {
    matches!(self, Self::Practice)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerResult {
  Correct,
  Wrong,
}

impl AnswerResult {
  pub fn from_bool(is_correct: bool) -> Self {
    if is_correct { Self::Correct } else { Self::Wrong }
  }

  pub fn is_correct(&self) -> bool {
    matches!(self, Self::Correct)
  }
}

/// One answered question. Appended to a profile's history and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerEvent {
  pub word: String,
  pub selected: String,
  #[serde(alias = "correct")]
  pub correct_meaning: String,
  pub result: AnswerResult,
  #[serde(default)]
  pub xp_gained: i32,
  #[serde(default, alias = "streak")]
  pub streak_at_time: u32,
  pub timestamp: DateTime<Utc>,
  #[serde(default)]
  pub mode: StudyMode,
}

impl AnswerEvent {
  pub fn new(
    word: &str,
    selected: &str,
    correct_meaning: &str,
    result: AnswerResult,
    xp_gained: i32,
    streak_at_time: u32,
    mode: StudyMode,
  ) -> Self {
    Self {
      word: word.to_string(),
      selected: selected.to_string(),
      correct_meaning: correct_meaning.to_string(),
      result,
      xp_gained,
      streak_at_time,
      timestamp: Utc::now(),
      mode,
    }
  }
}
