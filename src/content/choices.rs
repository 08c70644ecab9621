use rand::Rng;
use rand::seq::{SliceRandom, index};
use std::collections::BTreeSet;

use super::Vocabulary;
use crate::config;

/// Build the shuffled answer choices for `word`: its meaning plus up to
/// `DISTRACTOR_COUNT` distinct other meanings.
///
/// Returns None if the word isn't in the vocabulary.
pub fn generate_choices<R: Rng + ?Sized>(
  word: &str,
  vocabulary: &Vocabulary,
  rng: &mut R,
) -> Option<Vec<String>> {
  let correct = vocabulary.meaning(word)?;

  // Two words may share a meaning; never offer the right answer twice
  let others: Vec<&str> = vocabulary
    .meanings()
    .filter(|m| *m != correct)
    .collect::<BTreeSet<_>>()
    .into_iter()
    .collect();

  let amount = config::DISTRACTOR_COUNT.min(others.len());
  let mut choices = Vec::with_capacity(amount + 1);
  choices.push(correct.to_string());
  choices.extend(index::sample(rng, others.len(), amount).into_iter().map(|i| others[i].to_string()));
  choices.shuffle(rng);

  Some(choices)
}
