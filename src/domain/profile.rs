use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::{AnswerEvent, WordStat};
use crate::config;
use crate::srs::pool::rank_for_xp;

/// A learner's persisted state, keyed by username.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
  pub username: String,
  #[serde(default)]
  pub xp: u32,
  #[serde(default)]
  pub history: Vec<AnswerEvent>,
  /// Stats for every word that has ever been in the active pool
  #[serde(default)]
  pub words: BTreeMap<String, WordStat>,
  /// Words currently being drilled, in insertion order
  #[serde(default)]
  pub active_pool: Vec<String>,
}

impl Profile {
  pub fn new(username: &str) -> Self {
    Self {
      username: username.to_string(),
      xp: 0,
      history: Vec::new(),
      words: BTreeMap::new(),
      active_pool: Vec::new(),
    }
  }

  pub fn rank(&self) -> u32 {
    rank_for_xp(self.xp)
  }

  /// Fraction of the way from the current rank to the next (0.0..1.0)
  pub fn rank_progress(&self) -> f64 {
    (self.xp % config::RANK_XP) as f64 / config::RANK_XP as f64
  }

  pub fn stat(&self, word: &str) -> Option<&WordStat> {
    self.words.get(word)
  }

  /// Stat for `word`, created with defaults if missing
  pub fn stat_mut(&mut self, word: &str) -> &mut WordStat {
    self.words.entry(word.to_string()).or_default()
  }

  /// Apply a signed xp change. XP never drops below zero.
  pub fn apply_xp(&mut self, delta: i32) {
    let next = (self.xp as i64 + delta as i64).max(0);
    self.xp = next.min(u32::MAX as i64) as u32;
  }

  /// Most recent history entries, newest first
  pub fn recent_history(&self, limit: usize) -> impl Iterator<Item = &AnswerEvent> {
    self.history.iter().rev().take(limit)
  }

  /// Repair a freshly loaded profile so every invariant holds.
  ///
  /// Returns the number of fixes applied (0 for a valid profile).
  pub fn sanitize(&mut self, username: &str) -> usize {
    let mut fixes = 0;

    if self.username != username {
      self.username = username.to_string();
      fixes += 1;
    }

    for stat in self.words.values_mut() {
      if stat.sanitize() {
        fixes += 1;
      }
    }

    let mut seen = HashSet::new();
    let before = self.active_pool.len();
    self.active_pool.retain(|w| seen.insert(w.clone()));
    fixes += before - self.active_pool.len();

    fixes
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{AnswerResult, StudyMode};

  #[test]
  fn test_new_profile_is_empty() {
    let profile = Profile::new("ada");
    assert_eq!(profile.username, "ada");
    assert_eq!(profile.xp, 0);
    assert!(profile.history.is_empty());
    assert!(profile.words.is_empty());
    assert!(profile.active_pool.is_empty());
    assert_eq!(profile.rank(), 1);
  }

  #[test]
  fn test_rank_and_progress() {
    let mut profile = Profile::new("ada");
    profile.xp = 450;
    assert_eq!(profile.rank(), 3);
    assert!((profile.rank_progress() - 0.25).abs() < f64::EPSILON);
  }

  #[test]
  fn test_apply_xp_floors_at_zero() {
    let mut profile = Profile::new("ada");
    profile.xp = 3;
    profile.apply_xp(-5);
    assert_eq!(profile.xp, 0);
    profile.apply_xp(25);
    assert_eq!(profile.xp, 25);
  }

  #[test]
  fn test_stat_mut_initializes_default() {
    let mut profile = Profile::new("ada");
    assert!(profile.stat("Debacle").is_none());
    profile.stat_mut("Debacle").wrong_count += 1;
    let stat = profile.stat("Debacle").unwrap();
    assert_eq!(stat.wrong_count, 1);
    assert_eq!(stat.priority, 50);
  }

  #[test]
  fn test_recent_history_newest_first() {
    let mut profile = Profile::new("ada");
    for word in ["a", "b", "c"] {
      profile.history.push(AnswerEvent::new(
        word,
        "x",
        "x",
        AnswerResult::Correct,
        10,
        1,
        StudyMode::Quiz,
      ));
    }
    let words: Vec<_> = profile.recent_history(2).map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["c", "b"]);
  }

  #[test]
  fn test_sanitize_valid_profile() {
    let mut profile = Profile::new("ada");
    profile.active_pool = vec!["a".into(), "b".into()];
    profile.words.insert("a".into(), WordStat::default());
    assert_eq!(profile.sanitize("ada"), 0);
  }

  #[test]
  fn test_sanitize_repairs() {
    let mut profile = Profile::new("someone-else");
    profile.active_pool = vec!["a".into(), "b".into(), "a".into()];
    profile.words.insert(
      "a".into(),
      WordStat {
        priority: 10,
        true_priority: 70,
        cooldown: 0,
        ..WordStat::default()
      },
    );

    let fixes = profile.sanitize("ada");
    assert_eq!(fixes, 3);
    assert_eq!(profile.username, "ada");
    assert_eq!(profile.active_pool, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(profile.words["a"].priority, 70);
  }
}
