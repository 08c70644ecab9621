//! Test utilities: temporary stores, seeded randomness and fixture decks.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use tempfile::TempDir;

use crate::content::Vocabulary;
use crate::store::{JsonProfileStore, SqliteProfileStore, StoreError};

/// Both profile backends opened inside one temporary directory.
///
/// Dropping the env removes every file the stores wrote.
pub struct TestEnv {
  /// Temporary directory (kept alive for file persistence)
  pub temp: TempDir,
  /// File-per-profile store under `<temp>/users`
  pub json: JsonProfileStore,
  /// SQLite store at `<temp>/profiles.db`
  pub sqlite: SqliteProfileStore,
}

impl TestEnv {
  pub fn new() -> Result<Self, StoreError> {
    let temp = TempDir::new()?;
    let json = JsonProfileStore::new(temp.path().join("users"))?;
    let sqlite = SqliteProfileStore::open(&temp.path().join("profiles.db"))?;

    Ok(Self { temp, json, sqlite })
  }

  /// Get the temporary directory path for creating test files.
  pub fn path(&self) -> &Path {
    self.temp.path()
  }
}

/// Deterministic rng for reproducible selections
pub fn seeded_rng(seed: u64) -> StdRng {
  StdRng::seed_from_u64(seed)
}

/// `n` words `word00`, `word01`, ... each with a distinct meaning
pub fn sample_vocabulary(n: usize) -> Vocabulary {
  Vocabulary::from_pairs((0..n).map(|i| (format!("word{:02}", i), format!("meaning {}", i))))
}
