//! Vocabulary sources - read-only word → meaning mappings.
//!
//! The deck is loaded once per session. A missing or empty deck is reported
//! to the caller, never treated as a crash.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Word → meaning mapping with deterministic (sorted) iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
  entries: BTreeMap<String, String>,
}

impl Vocabulary {
  /// Build from raw pairs. Keys and values are trimmed and NFC-normalized so
  /// selected answers compare equal to stored meanings; blank pairs are dropped.
  pub fn from_pairs<I, K, V>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let entries = pairs
      .into_iter()
      .filter_map(|(k, v)| {
        let word = normalize(k.as_ref());
        let meaning = normalize(v.as_ref());
        if word.is_empty() || meaning.is_empty() {
          None
        } else {
          Some((word, meaning))
        }
      })
      .collect();
    Self { entries }
  }

  pub fn meaning(&self, word: &str) -> Option<&str> {
    self.entries.get(word).map(String::as_str)
  }

  pub fn contains(&self, word: &str) -> bool {
    self.entries.contains_key(word)
  }

  pub fn words(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }

  pub fn meanings(&self) -> impl Iterator<Item = &str> {
    self.entries.values().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

fn normalize(s: &str) -> String {
  s.trim().nfc().collect()
}

/// Anything that can hand over the full vocabulary.
pub trait VocabularySource {
  fn get_all(&self) -> Result<Vocabulary, VocabularyError>;
}

/// Flat JSON object file: `{ "Aberration": "A departure from what is normal", ... }`
#[derive(Debug, Clone)]
pub struct JsonVocabulary {
  path: PathBuf,
}

impl JsonVocabulary {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl VocabularySource for JsonVocabulary {
  fn get_all(&self) -> Result<Vocabulary, VocabularyError> {
    let path_str = self.path.display().to_string();

    if !self.path.exists() {
      return Err(VocabularyError::NotFound(path_str));
    }

    let content =
      fs::read_to_string(&self.path).map_err(|e| VocabularyError::Io(path_str.clone(), e.to_string()))?;

    let raw: BTreeMap<String, String> =
      serde_json::from_str(&content).map_err(|e| VocabularyError::Parse(path_str.clone(), e.to_string()))?;

    let vocabulary = Vocabulary::from_pairs(raw);
    tracing::debug!("Loaded {} words from {}", vocabulary.len(), path_str);
    Ok(vocabulary)
  }
}

/// Small sample deck used when no vocabulary file is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinVocabulary;

const BUILTIN_WORDS: [(&str, &str); 10] = [
  ("Aberration", "A departure from what is normal"),
  ("Capitulate", "Cease to resist an opponent"),
  ("Debacle", "A sudden failure"),
  ("Enervate", "Cause someone to feel drained"),
  ("Fervent", "Having passionate intensity"),
  ("Garrulous", "Excessively talkative"),
  ("Harangue", "A lengthy and aggressive speech"),
  ("Impetuous", "Acting quickly without thought"),
  ("Juxtapose", "Place side by side for contrast"),
  ("Knavery", "Dishonest or unscrupulous behavior"),
];

impl VocabularySource for BuiltinVocabulary {
  fn get_all(&self) -> Result<Vocabulary, VocabularyError> {
    Ok(Vocabulary::from_pairs(BUILTIN_WORDS))
  }
}

/// Load the vocabulary file at `path`, falling back to the built-in deck
/// when the file doesn't exist. Read and parse errors are returned.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary, VocabularyError> {
  match JsonVocabulary::new(path).get_all() {
    Ok(vocabulary) => Ok(vocabulary),
    Err(VocabularyError::NotFound(p)) => {
      tracing::info!("No vocabulary at {}, using built-in deck", p);
      BuiltinVocabulary.get_all()
    }
    Err(e) => Err(e),
  }
}

/// Vocabulary loading errors.
#[derive(Debug)]
pub enum VocabularyError {
  NotFound(String),
  Io(String, String),
  Parse(String, String),
}

impl std::fmt::Display for VocabularyError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      VocabularyError::NotFound(path) => write!(f, "Vocabulary file not found: {}", path),
      VocabularyError::Io(path, err) => write!(f, "IO error reading {}: {}", path, err),
      VocabularyError::Parse(path, err) => write!(f, "Parse error in {}: {}", path, err),
    }
  }
}

impl VocabularyError {
  /// Returns a user-facing error message without exposing filesystem paths.
  pub fn user_message(&self) -> &'static str {
    match self {
      VocabularyError::NotFound(_) => "Vocabulary file not found",
      VocabularyError::Io(_, _) => "Failed to read vocabulary file",
      VocabularyError::Parse(_, _) => "Vocabulary file is not a word to meaning map",
    }
  }
}

impl std::error::Error for VocabularyError {}
