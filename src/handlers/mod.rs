//! Terminal front end.
//!
//! Line-oriented screens over any `BufRead`/`Write` pair so the whole flow
//! can be driven from tests. The screens only render and collect input; all
//! scoring and scheduling goes through `srs` and `session`.

pub mod history;
pub mod home;
pub mod profile;
pub mod quiz;

use rand::Rng;
use std::io::{self, BufRead, Write};

use crate::content::Vocabulary;
use crate::domain::Profile;
use crate::srs::QuestionMix;
use crate::store::ProfileStore;

/// Where a screen sends the user next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  /// Stay on the calling screen
  Stay,
  /// Return to the profile picker
  SwitchProfile,
  /// Exit the program
  Quit,
}

pub struct Terminal<'a, R, W, G> {
  input: R,
  output: W,
  store: &'a dyn ProfileStore,
  vocabulary: &'a Vocabulary,
  mix: QuestionMix,
  rng: G,
}

impl<'a, R: BufRead, W: Write, G: Rng> Terminal<'a, R, W, G> {
  pub fn new(
    input: R,
    output: W,
    store: &'a dyn ProfileStore,
    vocabulary: &'a Vocabulary,
    mix: QuestionMix,
    rng: G,
  ) -> Self {
    Self {
      input,
      output,
      store,
      vocabulary,
      mix,
      rng,
    }
  }

  /// Run until the user quits or input ends
  pub fn run(&mut self) -> io::Result<()> {
    if self.vocabulary.is_empty() {
      writeln!(self.output, "🛑 No words available! Add words to the vocabulary file.")?;
    }

    while let Some(mut profile) = self.profile_screen()? {
      if self.home_screen(&mut profile)? == Flow::Quit {
        break;
      }
    }

    writeln!(self.output, "Goodbye!")?;
    self.output.flush()
  }

  /// Consume the terminal and hand back its output (for tests)
  pub fn into_output(self) -> W {
    self.output
  }

  /// Print a prompt and read one trimmed line. None on end of input.
  fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
    write!(self.output, "{}", prompt)?;
    self.output.flush()?;

    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 {
      return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
  }

  /// Save and report failures without leaving the screen
  fn save(&mut self, profile: &Profile) -> io::Result<()> {
    if let Err(e) = self.store.save(profile) {
      tracing::error!("Saving profile '{}' failed: {}", profile.username, e);
      writeln!(self.output, "⚠ Could not save progress: {}", e)?;
    }
    Ok(())
  }
}
