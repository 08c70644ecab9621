//! Home screen: xp, rank and the main menu.

use rand::Rng;
use std::io::{self, BufRead, Write};

use super::{Flow, Terminal};
use crate::domain::Profile;
use crate::srs::pool_target_size;

const PROGRESS_BAR_WIDTH: usize = 20;

/// Text progress bar toward the next rank, e.g. `[#####---------------]`
pub fn progress_bar(fraction: f64) -> String {
  let filled = ((fraction.clamp(0.0, 1.0) * PROGRESS_BAR_WIDTH as f64) as usize).min(PROGRESS_BAR_WIDTH);
  format!("[{}{}]", "#".repeat(filled), "-".repeat(PROGRESS_BAR_WIDTH - filled))
}

/// `XP: 230 | Rank: 2` status line
pub fn status_line(profile: &Profile) -> String {
  format!(
    "XP: {} | Rank: {} {}",
    profile.xp,
    profile.rank(),
    progress_bar(profile.rank_progress())
  )
}

impl<R: BufRead, W: Write, G: Rng> Terminal<'_, R, W, G> {
  pub(super) fn home_screen(&mut self, profile: &mut Profile) -> io::Result<Flow> {
    loop {
      writeln!(self.output)?;
      writeln!(self.output, "👤 {}", profile.username)?;
      writeln!(self.output, "{}", status_line(profile))?;
      writeln!(
        self.output,
        "Active words: {} of {}",
        profile.active_pool.len(),
        pool_target_size(profile.xp)
      )?;
      writeln!(self.output, "1) ▶ Start Quiz  2) 🧩 Practice  3) 📜 History  4) 🔄 Switch Profile  5) Quit")?;

      let Some(choice) = self.prompt("> ")? else {
        return Ok(Flow::Quit);
      };

      let flow = match choice.as_str() {
        "1" | "quiz" => self.quiz_screen(profile)?,
        "2" | "practice" => self.practice_screen(profile)?,
        "3" | "history" => {
          self.history_screen(profile)?;
          Flow::Stay
        }
        "4" | "switch" => return Ok(Flow::SwitchProfile),
        "5" | "quit" | "q" => return Ok(Flow::Quit),
        _ => {
          writeln!(self.output, "Pick 1-5")?;
          Flow::Stay
        }
      };

      if flow == Flow::Quit {
        return Ok(Flow::Quit);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_progress_bar() {
    assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(20)));
    assert_eq!(progress_bar(0.25), format!("[{}{}]", "#".repeat(5), "-".repeat(15)));
    assert_eq!(progress_bar(1.5), format!("[{}]", "#".repeat(20)));
  }

  #[test]
  fn test_status_line() {
    let mut profile = Profile::new("ada");
    profile.xp = 250;
    assert!(status_line(&profile).starts_with("XP: 250 | Rank: 2 "));
  }
}
