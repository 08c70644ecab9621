use serde::{Deserialize, Serialize};

use crate::config;

/// Per-word scheduling state inside a profile.
///
/// A word is *eligible* when `cooldown == 0` and *cooling* otherwise. While
/// cooling, `priority` may sit below `true_priority`; the two are equal again
/// the round the cooldown reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordStat {
  /// Current draw weight (0-100). Lower means retest sooner.
  pub priority: u8,
  /// Underlying difficulty estimate (10-100)
  pub true_priority: u8,
  /// Rounds left before the word is eligible again
  pub cooldown: u32,
  #[serde(alias = "correct")]
  pub correct_count: u32,
  #[serde(alias = "wrong")]
  pub wrong_count: u32,
}

impl Default for WordStat {
  fn default() -> Self {
    Self {
      priority: config::DEFAULT_PRIORITY,
      true_priority: config::DEFAULT_PRIORITY,
      cooldown: 0,
      correct_count: 0,
      wrong_count: 0,
    }
  }
}

impl WordStat {
  pub fn is_eligible(&self) -> bool {
    self.cooldown == 0
  }

  pub fn is_high_priority(&self) -> bool {
    self.priority >= config::HIGH_PRIORITY_THRESHOLD
  }

  /// True once the word has been answered at least once
  pub fn is_answered(&self) -> bool {
    self.correct_count + self.wrong_count > 0
  }

  /// Net misses, used to rank weak words for practice
  pub fn weakness(&self) -> i64 {
    self.wrong_count as i64 - self.correct_count as i64
  }

  /// Clamp fields into their valid ranges and restore the eligible invariant.
  /// Returns true if anything changed.
  pub fn sanitize(&mut self) -> bool {
    let before = *self;
    self.true_priority = self
      .true_priority
      .clamp(config::MIN_TRUE_PRIORITY, config::MAX_TRUE_PRIORITY);
    self.priority = self.priority.min(config::MAX_PRIORITY);
    if self.cooldown == 0 {
      self.priority = self.true_priority;
    }
    before != *self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_word_stat() {
    let stat = WordStat::default();
    assert_eq!(stat.priority, 50);
    assert_eq!(stat.true_priority, 50);
    assert_eq!(stat.cooldown, 0);
    assert_eq!(stat.correct_count, 0);
    assert_eq!(stat.wrong_count, 0);
    assert!(stat.is_eligible());
    assert!(stat.is_high_priority());
    assert!(!stat.is_answered());
  }

  #[test]
  fn test_high_priority_threshold_is_inclusive() {
    let mut stat = WordStat::default();
    stat.priority = 30;
    assert!(stat.is_high_priority());
    stat.priority = 29;
    assert!(!stat.is_high_priority());
  }

  #[test]
  fn test_weakness() {
    let stat = WordStat {
      correct_count: 1,
      wrong_count: 4,
      ..WordStat::default()
    };
    assert_eq!(stat.weakness(), 3);
  }

  #[test]
  fn test_sanitize_clamps_out_of_range() {
    let mut stat = WordStat {
      priority: 250,
      true_priority: 3,
      cooldown: 1,
      ..WordStat::default()
    };
    assert!(stat.sanitize());
    assert_eq!(stat.priority, 100);
    assert_eq!(stat.true_priority, 10);
    assert_eq!(stat.cooldown, 1);
  }

  #[test]
  fn test_sanitize_restores_priority_when_eligible() {
    let mut stat = WordStat {
      priority: 10,
      true_priority: 60,
      cooldown: 0,
      ..WordStat::default()
    };
    assert!(stat.sanitize());
    assert_eq!(stat.priority, 60);
  }

  #[test]
  fn test_sanitize_valid_is_unchanged() {
    let mut stat = WordStat {
      priority: 10,
      true_priority: 60,
      cooldown: 2,
      correct_count: 1,
      wrong_count: 1,
    };
    assert!(!stat.sanitize());
  }

  #[test]
  fn test_deserialize_legacy_field_names() {
    let stat: WordStat =
      serde_json::from_str(r#"{"priority": 50, "true_priority": 50, "cooldown": 0, "correct": 2, "wrong": 1}"#)
        .unwrap();
    assert_eq!(stat.correct_count, 2);
    assert_eq!(stat.wrong_count, 1);
  }

  #[test]
  fn test_deserialize_counts_only() {
    // Older profiles only tracked tallies
    let stat: WordStat = serde_json::from_str(r#"{"correct_count": 3, "wrong_count": 0}"#).unwrap();
    assert_eq!(stat.priority, 50);
    assert_eq!(stat.true_priority, 50);
    assert_eq!(stat.correct_count, 3);
  }
}
