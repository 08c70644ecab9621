//! Profile persistence.
//!
//! A profile is one JSON document keyed by username. Two backends:
//! - [`JsonProfileStore`]: `<dir>/<username>.json`, one file per profile
//! - [`SqliteProfileStore`]: one row per profile in a single SQLite file
//!
//! Saves are last-write-wins; concurrent sessions on the same profile are
//! not detected. Documents are validated on load and a corrupt one is
//! replaced by a fresh profile instead of failing.

pub mod document;
pub mod json;
pub mod sqlite;

pub use document::{decode_profile, encode_profile};
pub use json::JsonProfileStore;
pub use sqlite::SqliteProfileStore;

use crate::config::{self, AppConfig, StoreBackend};
use crate::domain::Profile;

/// Load/save/delete profiles by username.
pub trait ProfileStore {
  /// `Ok(None)` if no profile exists for `username`
  fn load(&self, username: &str) -> Result<Option<Profile>, StoreError>;

  fn save(&self, profile: &Profile) -> Result<(), StoreError>;

  /// Returns false if there was nothing to delete
  fn delete(&self, username: &str) -> Result<bool, StoreError>;

  /// All stored usernames, sorted
  fn list(&self) -> Result<Vec<String>, StoreError>;

  /// Load the profile, or start a fresh (unsaved) one
  fn load_or_create(&self, username: &str) -> Result<Profile, StoreError> {
    match self.load(username)? {
      Some(profile) => Ok(profile),
      None => {
        tracing::info!("Creating new profile '{}'", username.trim());
        Ok(Profile::new(validate_username(username)?))
      }
    }
  }
}

/// Open the store selected by the configuration
pub fn open_store(config: &AppConfig) -> Result<Box<dyn ProfileStore>, StoreError> {
  match config.store_backend {
    StoreBackend::Json => Ok(Box::new(JsonProfileStore::new(&config.store_path)?)),
    StoreBackend::Sqlite => Ok(Box::new(SqliteProfileStore::open(&config.store_path)?)),
  }
}

/// Check a free-text username and return its trimmed form.
///
/// Usernames double as file names, so path separators, control characters
/// and dot names are rejected.
pub fn validate_username(username: &str) -> Result<&str, StoreError> {
  let name = username.trim();
  let invalid = |reason: &str| Err(StoreError::InvalidUsername(format!("'{}': {}", name, reason)));

  if name.is_empty() {
    return invalid("must not be empty");
  }
  if name.chars().count() > config::MAX_USERNAME_LEN {
    return invalid("too long");
  }
  if name == "." || name == ".." {
    return invalid("reserved name");
  }
  if name.chars().any(|c| c == '/' || c == '\\' || c.is_control()) {
    return invalid("contains a path separator or control character");
  }
  Ok(name)
}

/// Profile store errors.
#[derive(Debug)]
pub enum StoreError {
  InvalidUsername(String),
  Io(String),
  Serialize(String),
  Database(String),
}

impl std::fmt::Display for StoreError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      StoreError::InvalidUsername(msg) => write!(f, "Invalid username {}", msg),
      StoreError::Io(err) => write!(f, "Profile storage IO error: {}", err),
      StoreError::Serialize(err) => write!(f, "Failed to encode profile: {}", err),
      StoreError::Database(err) => write!(f, "Profile database error: {}", err),
    }
  }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
  fn from(e: std::io::Error) -> Self {
    StoreError::Io(e.to_string())
  }
}

impl From<serde_json::Error> for StoreError {
  fn from(e: serde_json::Error) -> Self {
    StoreError::Serialize(e.to_string())
  }
}

impl From<rusqlite::Error> for StoreError {
  fn from(e: rusqlite::Error) -> Self {
    StoreError::Database(e.to_string())
  }
}

/// Log-and-continue for fallible reads whose failure should not stop a screen
pub trait LogOnError<T: Default> {
  /// Warn with `context` and fall back to `T::default()`
  fn log_warn_default(self, context: &str) -> T;
}

impl<T: Default, E: std::fmt::Display> LogOnError<T> for Result<T, E> {
  fn log_warn_default(self, context: &str) -> T {
    self.unwrap_or_else(|e| {
      tracing::warn!("{}: {}", context, e);
      T::default()
    })
  }
}
