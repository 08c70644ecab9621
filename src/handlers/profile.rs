//! Profile picker: list, load, create and delete profiles.

use rand::Rng;
use std::io::{self, BufRead, Write};

use super::Terminal;
use crate::domain::Profile;
use crate::srs::ensure_pool;
use crate::store::{LogOnError, validate_username};

impl<R: BufRead, W: Write, G: Rng> Terminal<'_, R, W, G> {
  /// Returns the chosen profile, or None to quit
  pub(super) fn profile_screen(&mut self) -> io::Result<Option<Profile>> {
    loop {
      writeln!(self.output)?;
      writeln!(self.output, "=== Lexibox - Select Profile ===")?;

      let users = self.store.list().log_warn_default("Listing profiles failed");
      if users.is_empty() {
        writeln!(self.output, "No profiles yet.")?;
      }
      for name in &users {
        writeln!(self.output, "  - {}", name)?;
      }
      writeln!(self.output, "Commands: load <name> | new <name> | delete <name> | quit")?;

      let Some(line) = self.prompt("> ")? else {
        return Ok(None);
      };
      let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((c, a)) => (c, a.trim()),
        None => (line.as_str(), ""),
      };

      match command {
        "load" | "l" => {
          if let Some(profile) = self.load_profile(arg)? {
            return Ok(Some(profile));
          }
        }
        "new" | "n" => {
          if let Some(profile) = self.create_profile(arg)? {
            return Ok(Some(profile));
          }
        }
        "delete" | "d" => self.delete_profile(arg)?,
        "quit" | "q" => return Ok(None),
        "" => {}
        other => writeln!(self.output, "Unknown command '{}'", other)?,
      }
    }
  }

  fn load_profile(&mut self, name: &str) -> io::Result<Option<Profile>> {
    match self.store.load(name) {
      Ok(Some(mut profile)) => {
        // Bring the pool up to date for the profile's rank right away
        ensure_pool(&mut profile, self.vocabulary, &mut self.rng);
        self.save(&profile)?;
        Ok(Some(profile))
      }
      Ok(None) => {
        writeln!(self.output, "No profile named '{}'", name)?;
        Ok(None)
      }
      Err(e) => {
        writeln!(self.output, "Could not load profile: {}", e)?;
        Ok(None)
      }
    }
  }

  fn create_profile(&mut self, name: &str) -> io::Result<Option<Profile>> {
    let name = match validate_username(name) {
      Ok(n) => n,
      Err(e) => {
        writeln!(self.output, "{}", e)?;
        return Ok(None);
      }
    };

    match self.store.load(name) {
      Ok(Some(_)) => {
        writeln!(self.output, "Profile '{}' already exists", name)?;
        return Ok(None);
      }
      Ok(None) => {}
      Err(e) => {
        writeln!(self.output, "Could not check existing profiles: {}", e)?;
        return Ok(None);
      }
    }

    let mut profile = Profile::new(name);
    ensure_pool(&mut profile, self.vocabulary, &mut self.rng);
    if let Err(e) = self.store.save(&profile) {
      writeln!(self.output, "Could not create profile: {}", e)?;
      return Ok(None);
    }
    tracing::info!("Created profile '{}'", name);
    Ok(Some(profile))
  }

  fn delete_profile(&mut self, name: &str) -> io::Result<()> {
    match self.store.delete(name) {
      Ok(true) => writeln!(self.output, "Deleted '{}'", name),
      Ok(false) => writeln!(self.output, "No profile named '{}'", name),
      Err(e) => writeln!(self.output, "Could not delete profile: {}", e),
    }
  }
}
