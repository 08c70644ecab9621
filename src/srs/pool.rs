//! Active pool management: the rank-sized working set of words.

use rand::Rng;
use rand::seq::index;
use std::collections::HashSet;

use crate::config;
use crate::content::Vocabulary;
use crate::domain::Profile;

/// Rank 1 starts at 0 xp and every `RANK_XP` adds one
pub fn rank_for_xp(xp: u32) -> u32 {
  xp / config::RANK_XP + 1
}

/// How many words the active pool should hold at this xp
pub fn pool_target_size(xp: u32) -> usize {
  let extra_ranks = (rank_for_xp(xp) - 1) as usize;
  config::BASE_POOL_SIZE + extra_ranks * config::POOL_GROWTH_PER_RANK
}

/// Grow or shrink the profile's active pool to its rank's target size.
///
/// New words are drawn uniformly without replacement from vocabulary words
/// not already in the pool and get default stats if they have none. A word
/// that re-enters the pool keeps its old stats. Shrinking keeps the first
/// `target` words; no stats are ever deleted. Pool words missing from the
/// vocabulary are dropped first, so an empty vocabulary yields an empty pool.
pub fn ensure_pool<'a, R: Rng + ?Sized>(
  profile: &'a mut Profile,
  vocabulary: &Vocabulary,
  rng: &mut R,
) -> &'a [String] {
  let target = pool_target_size(profile.xp);

  let before = profile.active_pool.len();
  profile.active_pool.retain(|w| vocabulary.contains(w));
  if profile.active_pool.len() != before {
    tracing::debug!(
      "Dropped {} pool words no longer in the vocabulary",
      before - profile.active_pool.len()
    );
  }

  if profile.active_pool.len() < target {
    let in_pool: HashSet<&str> = profile.active_pool.iter().map(String::as_str).collect();
    let unused: Vec<&str> = vocabulary.words().filter(|w| !in_pool.contains(w)).collect();
    let amount = (target - profile.active_pool.len()).min(unused.len());

    let added: Vec<String> = index::sample(rng, unused.len(), amount)
      .into_iter()
      .map(|i| unused[i].to_string())
      .collect();

    for word in &added {
      profile.words.entry(word.clone()).or_default();
    }
    profile.active_pool.extend(added);
  } else if profile.active_pool.len() > target {
    profile.active_pool.truncate(target);
  }

  tracing::debug!(
    "Active pool for {}: {} words (target {})",
    profile.username,
    profile.active_pool.len(),
    target
  );

  &profile.active_pool
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::WordStat;
  use rand::SeedableRng;
  use rand::rngs::StdRng;

  fn vocab(n: usize) -> Vocabulary {
    Vocabulary::from_pairs((0..n).map(|i| (format!("word{:03}", i), format!("meaning {}", i))))
  }

  #[test]
  fn test_rank_for_xp() {
    assert_eq!(rank_for_xp(0), 1);
    assert_eq!(rank_for_xp(199), 1);
    assert_eq!(rank_for_xp(200), 2);
    assert_eq!(rank_for_xp(1000), 6);
  }

  #[test]
  fn test_pool_target_size() {
    assert_eq!(pool_target_size(0), 20);
    assert_eq!(pool_target_size(199), 20);
    assert_eq!(pool_target_size(200), 25);
    assert_eq!(pool_target_size(450), 30);
  }

  #[test]
  fn test_fills_empty_pool_with_defaults() {
    let vocab = vocab(50);
    let mut profile = Profile::new("ada");
    let mut rng = StdRng::seed_from_u64(1);

    let pool = ensure_pool(&mut profile, &vocab, &mut rng).to_vec();
    assert_eq!(pool.len(), 20);

    let unique: HashSet<_> = pool.iter().collect();
    assert_eq!(unique.len(), 20);
    for word in &pool {
      assert!(vocab.contains(word));
      assert_eq!(profile.words[word], WordStat::default());
    }
  }

  #[test]
  fn test_small_vocabulary_fills_what_it_can() {
    let vocab = vocab(7);
    let mut profile = Profile::new("ada");
    let mut rng = StdRng::seed_from_u64(2);

    assert_eq!(ensure_pool(&mut profile, &vocab, &mut rng).len(), 7);
  }

  #[test]
  fn test_grows_on_rank_up_without_touching_existing() {
    let vocab = vocab(60);
    let mut profile = Profile::new("ada");
    let mut rng = StdRng::seed_from_u64(3);

    let first = ensure_pool(&mut profile, &vocab, &mut rng).to_vec();
    profile.words.get_mut(&first[0]).unwrap().wrong_count = 4;

    profile.xp = 200;
    let grown = ensure_pool(&mut profile, &vocab, &mut rng).to_vec();
    assert_eq!(grown.len(), 25);
    assert_eq!(&grown[..20], &first[..]);
    assert_eq!(profile.words[&first[0]].wrong_count, 4);

    let unique: HashSet<_> = grown.iter().collect();
    assert_eq!(unique.len(), 25);
  }

  #[test]
  fn test_truncates_but_keeps_stats() {
    let vocab = vocab(60);
    let mut profile = Profile::new("ada");
    profile.xp = 400;
    let mut rng = StdRng::seed_from_u64(4);

    let full = ensure_pool(&mut profile, &vocab, &mut rng).to_vec();
    assert_eq!(full.len(), 30);

    profile.xp = 0;
    let shrunk = ensure_pool(&mut profile, &vocab, &mut rng).to_vec();
    assert_eq!(shrunk, full[..20].to_vec());
    for word in &full {
      assert!(profile.words.contains_key(word));
    }
  }

  #[test]
  fn test_resurrected_word_keeps_stats() {
    let vocab = vocab(21);
    let mut profile = Profile::new("ada");
    let stat = WordStat {
      true_priority: 80,
      priority: 80,
      wrong_count: 3,
      ..WordStat::default()
    };
    // Every vocabulary word has stats from an earlier, larger pool
    for word in vocab.words() {
      profile.words.insert(word.to_string(), stat);
    }
    let mut rng = StdRng::seed_from_u64(5);

    let pool = ensure_pool(&mut profile, &vocab, &mut rng).to_vec();
    assert_eq!(pool.len(), 20);
    for word in &pool {
      assert_eq!(profile.words[word], stat);
    }
  }

  #[test]
  fn test_empty_vocabulary_gives_empty_pool() {
    let vocab = Vocabulary::default();
    let mut profile = Profile::new("ada");
    profile.active_pool = vec!["gone".to_string()];
    profile.words.insert("gone".to_string(), WordStat::default());
    let mut rng = StdRng::seed_from_u64(6);

    assert!(ensure_pool(&mut profile, &vocab, &mut rng).is_empty());
    assert!(profile.words.contains_key("gone"));
  }

  #[test]
  fn test_pool_at_target_is_unchanged() {
    let vocab = vocab(40);
    let mut profile = Profile::new("ada");
    let mut rng = StdRng::seed_from_u64(7);

    let first = ensure_pool(&mut profile, &vocab, &mut rng).to_vec();
    let second = ensure_pool(&mut profile, &vocab, &mut rng).to_vec();
    assert_eq!(first, second);
  }

  #[test]
  fn test_same_seed_same_pool() {
    let vocab = vocab(100);
    let mut a = Profile::new("a");
    let mut b = Profile::new("b");

    let pool_a = ensure_pool(&mut a, &vocab, &mut StdRng::seed_from_u64(99)).to_vec();
    let pool_b = ensure_pool(&mut b, &vocab, &mut StdRng::seed_from_u64(99)).to_vec();
    assert_eq!(pool_a, pool_b);
  }
}
