//! One JSON file per profile.

use std::fs;
use std::path::{Path, PathBuf};

use super::{ProfileStore, StoreError, decode_profile, encode_profile, validate_username};
use crate::domain::Profile;

#[derive(Debug, Clone)]
pub struct JsonProfileStore {
  dir: PathBuf,
}

impl JsonProfileStore {
  /// Use `dir` for profile files, creating it if needed
  pub fn new(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
    let dir = dir.as_ref().to_path_buf();
    fs::create_dir_all(&dir)
      .map_err(|e| StoreError::Io(format!("creating {}: {}", dir.display(), e)))?;
    Ok(Self { dir })
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  fn path_for(&self, username: &str) -> Result<PathBuf, StoreError> {
    let name = validate_username(username)?;
    Ok(self.dir.join(format!("{}.json", name)))
  }
}

impl ProfileStore for JsonProfileStore {
  fn load(&self, username: &str) -> Result<Option<Profile>, StoreError> {
    let path = self.path_for(username)?;
    if !path.exists() {
      return Ok(None);
    }

    let contents = fs::read_to_string(&path)
      .map_err(|e| StoreError::Io(format!("reading {}: {}", path.display(), e)))?;
    Ok(Some(decode_profile(validate_username(username)?, &contents)))
  }

  fn save(&self, profile: &Profile) -> Result<(), StoreError> {
    let path = self.path_for(&profile.username)?;
    let contents = encode_profile(profile)?;

    // Write beside the target and rename over it so a crash mid-write
    // never leaves a truncated profile
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents).map_err(|e| StoreError::Io(format!("writing {}: {}", tmp.display(), e)))?;
    fs::rename(&tmp, &path).map_err(|e| StoreError::Io(format!("replacing {}: {}", path.display(), e)))?;

    tracing::debug!("Saved profile '{}' to {}", profile.username, path.display());
    Ok(())
  }

  fn delete(&self, username: &str) -> Result<bool, StoreError> {
    let path = self.path_for(username)?;
    if !path.exists() {
      return Ok(false);
    }
    fs::remove_file(&path).map_err(|e| StoreError::Io(format!("deleting {}: {}", path.display(), e)))?;
    tracing::info!("Deleted profile '{}'", username.trim());
    Ok(true)
  }

  fn list(&self) -> Result<Vec<String>, StoreError> {
    let entries = fs::read_dir(&self.dir)
      .map_err(|e| StoreError::Io(format!("listing {}: {}", self.dir.display(), e)))?;

    let mut names: Vec<String> = entries
      .filter_map(|entry| entry.ok())
      .filter_map(|entry| {
        let file_name = entry.file_name().into_string().ok()?;
        file_name.strip_suffix(".json").map(str::to_string)
      })
      .filter(|name| validate_username(name).is_ok())
      .collect();
    names.sort();
    Ok(names)
  }
}
