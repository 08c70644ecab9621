//! Profiles as JSON documents in a single SQLite file.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::{ProfileStore, StoreError, decode_profile, encode_profile, validate_username};
use crate::domain::Profile;

pub struct SqliteProfileStore {
  conn: Connection,
}

impl SqliteProfileStore {
  pub fn open(path: &Path) -> Result<Self, StoreError> {
    if let Some(parent) = path.parent() {
      if !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent)?;
      }
    }
    let conn = Connection::open(path)?;
    tracing::debug!("Opened profile database at {}", path.display());
    Self::with_connection(conn)
  }

  pub fn open_in_memory() -> Result<Self, StoreError> {
    Self::with_connection(Connection::open_in_memory()?)
  }

  fn with_connection(conn: Connection) -> Result<Self, StoreError> {
    run_migrations(&conn)?;
    Ok(Self { conn })
  }
}

fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS profiles (
      username TEXT PRIMARY KEY,
      document TEXT NOT NULL,
      updated_at TEXT NOT NULL
    );
    "#,
  )
}

impl ProfileStore for SqliteProfileStore {
  fn load(&self, username: &str) -> Result<Option<Profile>, StoreError> {
    let name = validate_username(username)?;
    let document: Option<String> = self
      .conn
      .query_row(
        "SELECT document FROM profiles WHERE username = ?1",
        params![name],
        |row| row.get(0),
      )
      .optional()?;

    Ok(document.map(|doc| decode_profile(name, &doc)))
  }

  fn save(&self, profile: &Profile) -> Result<(), StoreError> {
    let name = validate_username(&profile.username)?;
    let document = encode_profile(profile)?;
    let now = Utc::now().to_rfc3339();

    self.conn.execute(
      r#"
      INSERT INTO profiles (username, document, updated_at)
      VALUES (?1, ?2, ?3)
      ON CONFLICT(username) DO UPDATE SET
        document = excluded.document,
        updated_at = excluded.updated_at
      "#,
      params![name, document, now],
    )?;

    tracing::debug!("Saved profile '{}' to database", name);
    Ok(())
  }

  fn delete(&self, username: &str) -> Result<bool, StoreError> {
    let name = validate_username(username)?;
    let deleted = self
      .conn
      .execute("DELETE FROM profiles WHERE username = ?1", params![name])?;
    if deleted > 0 {
      tracing::info!("Deleted profile '{}'", name);
    }
    Ok(deleted > 0)
  }

  fn list(&self) -> Result<Vec<String>, StoreError> {
    let mut stmt = self
      .conn
      .prepare("SELECT username FROM profiles ORDER BY username")?;
    let names = stmt
      .query_map([], |row| row.get(0))?
      .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(names)
  }
}
