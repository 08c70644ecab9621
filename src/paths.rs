//! Project path functions - single source of truth for all file paths.
//!
//! ## Environment Variables
//!
//! - `DATA_DIR`: Override the base data directory (default: "data")
//!
//! Running against a scratch directory keeps real profiles untouched:
//! ```bash
//! DATA_DIR=/tmp/lexibox cargo run
//! ```

use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Lazily initialized data directory from DATA_DIR env var
static DATA_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// Get the base data directory (from DATA_DIR env var or default "data")
pub fn data_dir() -> &'static str {
  DATA_DIR_VALUE.get_or_init(|| env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()))
}

/// Flat `{ word: meaning }` vocabulary file
pub fn vocabulary_path() -> PathBuf {
  PathBuf::from(data_dir()).join("words.json")
}

/// Directory holding one `<username>.json` per profile
pub fn users_dir() -> PathBuf {
  PathBuf::from(data_dir()).join("users")
}

/// SQLite profile store
pub fn profiles_db_path() -> PathBuf {
  PathBuf::from(data_dir()).join("profiles.db")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_paths_share_data_dir() {
    let base = PathBuf::from(data_dir());
    assert!(vocabulary_path().starts_with(&base));
    assert!(users_dir().starts_with(&base));
    assert!(profiles_db_path().starts_with(&base));
  }

  #[test]
  fn test_file_names() {
    assert!(vocabulary_path().ends_with("words.json"));
    assert!(users_dir().ends_with("users"));
    assert!(profiles_db_path().ends_with("profiles.db"));
  }
}
