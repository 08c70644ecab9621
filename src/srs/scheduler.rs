//! Cooldown/priority scheduler.
//!
//! Each word is either eligible (`cooldown == 0`) or cooling. Answering a
//! word, right or wrong, drops its priority to `ANSWERED_PRIORITY` and cools
//! it for `ANSWER_COOLDOWN` rounds. The answer's direction only moves
//! `true_priority`, which `priority` snaps back to once the cooldown expires.

use rand::Rng;
use rand::seq::{SliceRandom, index};

use super::NothingToQuiz;
use super::pool::ensure_pool;
use crate::config;
use crate::content::Vocabulary;
use crate::domain::{Profile, WordStat};

/// How many high- and low-band words one round asks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionMix {
  pub high_quota: usize,
  pub low_quota: usize,
}

impl Default for QuestionMix {
  fn default() -> Self {
    Self {
      high_quota: config::HIGH_QUOTA,
      low_quota: config::LOW_QUOTA,
    }
  }
}

impl QuestionMix {
  pub fn new(high_quota: usize, low_quota: usize) -> Self {
    Self {
      high_quota,
      low_quota,
    }
  }

  pub fn total(&self) -> usize {
    self.high_quota + self.low_quota
  }
}

/// Tick every cooling word down by one round. A word that reaches zero gets
/// its `priority` reset to `true_priority`.
///
/// Returns how many words became eligible.
pub fn advance_round(profile: &mut Profile) -> usize {
  let mut released = 0;
  for stat in profile.words.values_mut().filter(|s| s.cooldown > 0) {
    stat.cooldown -= 1;
    if stat.cooldown == 0 {
      stat.priority = stat.true_priority;
      released += 1;
    }
  }
  released
}

/// Pick this round's words from the eligible part of the active pool.
///
/// Eligible words are split at `HIGH_PRIORITY_THRESHOLD`; up to
/// `mix.high_quota` are drawn from the high band and `mix.low_quota` from the
/// low band, each without replacement, then shuffled together. Pool words
/// without stats get default stats first. An empty result means there is
/// nothing to ask.
pub fn select_question_set<R: Rng + ?Sized>(
  profile: &mut Profile,
  mix: QuestionMix,
  rng: &mut R,
) -> Vec<String> {
  let words = &mut profile.words;
  for word in &profile.active_pool {
    if !words.contains_key(word) {
      tracing::debug!("Initializing missing stats for pool word '{}'", word);
      words.insert(word.clone(), WordStat::default());
    }
  }

  let (high, low): (Vec<&String>, Vec<&String>) = profile
    .active_pool
    .iter()
    .filter(|w| profile.words.get(*w).is_some_and(WordStat::is_eligible))
    .partition(|w| profile.words.get(*w).is_some_and(WordStat::is_high_priority));

  let mut selected = sample(&high, mix.high_quota, rng);
  selected.extend(sample(&low, mix.low_quota, rng));
  selected.shuffle(rng);

  tracing::debug!(
    "Selected {} words ({} high / {} low eligible)",
    selected.len(),
    high.len(),
    low.len()
  );

  selected
}

fn sample<R: Rng + ?Sized>(band: &[&String], quota: usize, rng: &mut R) -> Vec<String> {
  let amount = quota.min(band.len());
  index::sample(rng, band.len(), amount)
    .into_iter()
    .map(|i| band[i].clone())
    .collect()
}

/// Update a word's stats after it was answered and return the new stats.
pub fn record_answer(profile: &mut Profile, word: &str, is_correct: bool) -> WordStat {
  let stat = profile.stat_mut(word);
  if is_correct {
    stat.correct_count += 1;
    stat.true_priority = stat
      .true_priority
      .saturating_sub(config::CORRECT_PRIORITY_STEP)
      .max(config::MIN_TRUE_PRIORITY);
  } else {
    stat.wrong_count += 1;
    stat.true_priority = stat
      .true_priority
      .saturating_add(config::WRONG_PRIORITY_STEP)
      .min(config::MAX_TRUE_PRIORITY);
  }
  stat.priority = config::ANSWERED_PRIORITY;
  stat.cooldown = config::ANSWER_COOLDOWN;
  *stat
}

/// Start a quiz round: tick cooldowns, resize the pool, then select words.
pub fn start_round<R: Rng + ?Sized>(
  profile: &mut Profile,
  vocabulary: &Vocabulary,
  mix: QuestionMix,
  rng: &mut R,
) -> Result<Vec<String>, NothingToQuiz> {
  if vocabulary.is_empty() {
    return Err(NothingToQuiz::EmptyVocabulary);
  }

  let released = advance_round(profile);
  ensure_pool(profile, vocabulary, rng);
  let words = select_question_set(profile, mix, rng);

  tracing::debug!(
    "Round for {}: {} words released from cooldown, {} selected",
    profile.username,
    released,
    words.len()
  );

  if words.is_empty() {
    Err(NothingToQuiz::NoEligibleWords)
  } else {
    Ok(words)
  }
}
