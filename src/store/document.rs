//! Profile document encoding and load-time validation.

use chrono::{DateTime, NaiveTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

use super::StoreError;
use crate::domain::{AnswerEvent, Profile, WordStat};

/// Loosely typed form of a stored profile. Individual history entries and
/// word stats are parsed one by one so a single bad entry doesn't cost the
/// learner their whole profile.
#[derive(Debug, Deserialize)]
struct ProfileDocument {
  #[serde(default)]
  xp: i64,
  #[serde(default)]
  history: Vec<serde_json::Value>,
  #[serde(default)]
  words: BTreeMap<String, serde_json::Value>,
  #[serde(default)]
  active_pool: Vec<String>,
}

/// Serialize a profile for storage
pub fn encode_profile(profile: &Profile) -> Result<String, StoreError> {
  Ok(serde_json::to_string_pretty(profile)?)
}

/// Parse a stored document into a valid profile for `username`.
///
/// Never fails: an unreadable document yields a fresh profile, and
/// unreadable entries inside an otherwise good document are skipped.
pub fn decode_profile(username: &str, contents: &str) -> Profile {
  let doc: ProfileDocument = match serde_json::from_str(contents) {
    Ok(doc) => doc,
    Err(e) => {
      tracing::warn!("Profile '{}' is corrupt, starting fresh: {}", username, e);
      return Profile::new(username);
    }
  };

  let history_len = doc.history.len();
  let history: Vec<AnswerEvent> = doc
    .history
    .into_iter()
    .filter_map(parse_event)
    .collect();
  if history.len() < history_len {
    tracing::warn!(
      "Profile '{}': skipped {} unreadable history entries",
      username,
      history_len - history.len()
    );
  }

  let mut words = BTreeMap::new();
  for (word, value) in doc.words {
    match serde_json::from_value::<WordStat>(value) {
      Ok(stat) => {
        words.insert(word, stat);
      }
      Err(e) => tracing::warn!("Profile '{}': resetting stats for '{}': {}", username, word, e),
    }
  }

  let mut profile = Profile {
    username: username.to_string(),
    xp: doc.xp.clamp(0, u32::MAX as i64) as u32,
    history,
    words,
    active_pool: doc.active_pool,
  };

  let fixes = profile.sanitize(username);
  if fixes > 0 {
    tracing::warn!("Profile '{}': repaired {} invalid fields", username, fixes);
  }

  profile
}

/// Older documents carry only a `"time": "HH:MM:SS"` stamp with no date.
/// Those entries are placed on 1970-01-01 at that time of day.
fn parse_event(mut value: serde_json::Value) -> Option<AnswerEvent> {
  if let Some(entry) = value.as_object_mut() {
    if !entry.contains_key("timestamp") {
      let time = entry
        .get("time")
        .and_then(|t| t.as_str())
        .and_then(|t| NaiveTime::parse_from_str(t, "%H:%M:%S").ok())
        .unwrap_or_default();
      let timestamp = DateTime::<Utc>::UNIX_EPOCH.date_naive().and_time(time).and_utc();
      entry.insert("timestamp".into(), serde_json::to_value(timestamp).ok()?);
    }
  }
  serde_json::from_value(value).ok()
}
