//! Application configuration constants.
//!
//! Scheduler and scoring rules live here as constants. Runtime settings
//! (vocabulary file, profile store backend) are resolved by [`AppConfig::load`].

use serde::Deserialize;
use std::path::PathBuf;

use crate::paths;

// ==================== Pool Configuration ====================

/// Active pool size at rank 1
pub const BASE_POOL_SIZE: usize = 20;

/// Experience points needed per rank
pub const RANK_XP: u32 = 200;

/// Words added to the active pool per rank above 1
pub const POOL_GROWTH_PER_RANK: usize = 5;

// ==================== Scheduler Configuration ====================

/// Priority given to a word the first time it enters a pool
pub const DEFAULT_PRIORITY: u8 = 50;

/// Words at or above this priority belong to the high band
pub const HIGH_PRIORITY_THRESHOLD: u8 = 30;

/// Bounds for `true_priority`
pub const MIN_TRUE_PRIORITY: u8 = 10;
pub const MAX_TRUE_PRIORITY: u8 = 100;

/// Upper bound for `priority`
pub const MAX_PRIORITY: u8 = 100;

/// `true_priority` moves by these steps after each answer
pub const CORRECT_PRIORITY_STEP: u8 = 5;
pub const WRONG_PRIORITY_STEP: u8 = 10;

/// Priority a word drops to right after it is answered
pub const ANSWERED_PRIORITY: u8 = 10;

/// Rounds an answered word sits out
pub const ANSWER_COOLDOWN: u32 = 2;

/// Default number of high / low band words per round
pub const HIGH_QUOTA: usize = 8;
pub const LOW_QUOTA: usize = 2;

// ==================== Scoring Configuration ====================

/// XP for a correct quiz answer
pub const CORRECT_XP: i32 = 10;

/// XP lost on a wrong quiz answer
pub const WRONG_XP_PENALTY: i32 = 5;

/// Bonus xp and flavor message for the streak reached after a correct answer
pub fn streak_bonus(streak: u32) -> (i32, Option<&'static str>) {
  match streak {
    3 => (5, Some("You're on fire!")),
    4 => (10, Some("Unstoppable!")),
    s if s >= 5 => (15, Some("God mode!")),
    _ => (0, None),
  }
}

// ==================== Study Configuration ====================

/// Number of distractor choices in multiple choice mode
pub const DISTRACTOR_COUNT: usize = 3;

/// Max words drilled in one practice session
pub const PRACTICE_WORD_LIMIT: usize = 20;

/// History entries shown on the history screen
pub const HISTORY_DISPLAY_LIMIT: usize = 100;

/// Longest accepted username
pub const MAX_USERNAME_LEN: usize = 32;

// ==================== Runtime Configuration ====================

/// Which profile store to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
  #[default]
  Json,
  Sqlite,
}

impl StoreBackend {
  pub fn from_str(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "json" => Some(Self::Json),
      "sqlite" => Some(Self::Sqlite),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Json => "json",
      Self::Sqlite => "sqlite",
    }
  }
}

/// config.toml structure
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
  vocabulary: Option<VocabularySection>,
  store: Option<StoreSection>,
  quiz: Option<QuizSection>,
}

#[derive(Debug, Deserialize)]
struct VocabularySection {
  path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StoreSection {
  backend: Option<StoreBackend>,
  path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuizSection {
  high_quota: Option<usize>,
  low_quota: Option<usize>,
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  pub vocabulary_path: PathBuf,
  pub store_backend: StoreBackend,
  pub store_path: PathBuf,
  pub high_quota: usize,
  pub low_quota: usize,
}

impl AppConfig {
  /// Load configuration with priority: config.toml > environment (.env) > default
  pub fn load() -> Self {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let file = match std::fs::read_to_string("config.toml") {
      Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
        Ok(parsed) => {
          tracing::info!("Using settings from config.toml");
          parsed
        }
        Err(e) => {
          tracing::warn!("Ignoring malformed config.toml: {}", e);
          ConfigFile::default()
        }
      },
      Err(_) => ConfigFile::default(),
    };

    Self::resolve(file, |key| std::env::var(key).ok())
  }

  /// Parse a config.toml body, falling back to `env` then defaults
  pub fn from_toml_str(
    contents: &str,
    env: impl Fn(&str) -> Option<String>,
  ) -> Result<Self, toml::de::Error> {
    let file = toml::from_str::<ConfigFile>(contents)?;
    Ok(Self::resolve(file, env))
  }

  fn resolve(file: ConfigFile, env: impl Fn(&str) -> Option<String>) -> Self {
    let vocabulary_path = file
      .vocabulary
      .and_then(|v| v.path)
      .or_else(|| env("LEXIBOX_VOCAB"))
      .map(PathBuf::from)
      .unwrap_or_else(paths::vocabulary_path);

    let (file_backend, file_store_path) = match file.store {
      Some(s) => (s.backend, s.path),
      None => (None, None),
    };

    let store_backend = file_backend
      .or_else(|| env("LEXIBOX_STORE").and_then(|s| StoreBackend::from_str(&s)))
      .unwrap_or_default();

    let store_path = file_store_path
      .or_else(|| env("LEXIBOX_STORE_PATH"))
      .map(PathBuf::from)
      .unwrap_or_else(|| match store_backend {
        StoreBackend::Json => paths::users_dir(),
        StoreBackend::Sqlite => paths::profiles_db_path(),
      });

    let (high_quota, low_quota) = match file.quiz {
      Some(q) => (
        q.high_quota.unwrap_or(HIGH_QUOTA),
        q.low_quota.unwrap_or(LOW_QUOTA),
      ),
      None => (HIGH_QUOTA, LOW_QUOTA),
    };

    tracing::debug!(
      "Vocabulary: {}, store: {} at {}",
      vocabulary_path.display(),
      store_backend.as_str(),
      store_path.display()
    );

    Self {
      vocabulary_path,
      store_backend,
      store_path,
      high_quota,
      low_quota,
    }
  }
}
