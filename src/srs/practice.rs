use rand::Rng;
use rand::seq::index;
use std::cmp::Reverse;

use super::NothingToQuiz;
use crate::domain::Profile;

/// Words to drill in practice mode, weakest first.
///
/// Ranks active-pool words the learner has answered by
/// `wrong_count - correct_count` (ties keep pool order) and takes the first
/// `limit`. If no pool word has been answered yet, falls back to a random
/// sample of the pool.
pub fn weak_words<R: Rng + ?Sized>(
  profile: &Profile,
  limit: usize,
  rng: &mut R,
) -> Result<Vec<String>, NothingToQuiz> {
  if profile.active_pool.is_empty() {
    return Err(NothingToQuiz::EmptyPool);
  }

  let mut scored: Vec<(&String, i64)> = profile
    .active_pool
    .iter()
    .filter_map(|w| profile.stat(w).filter(|s| s.is_answered()).map(|s| (w, s.weakness())))
    .collect();
  scored.sort_by_key(|(_, weakness)| Reverse(*weakness));

  let weak: Vec<String> = scored.into_iter().take(limit).map(|(w, _)| w.clone()).collect();
  if !weak.is_empty() {
    return Ok(weak);
  }

  let pool = &profile.active_pool;
  let amount = limit.min(pool.len());
  Ok(index::sample(rng, pool.len(), amount).into_iter().map(|i| pool[i].clone()).collect())
}
