use rand::Rng;
use std::io::{self, BufRead, Write};

use super::Terminal;
use crate::config;
use crate::domain::{AnswerEvent, Profile, StudyMode};

/// One history line, e.g. `(QUIZ) ✅ Debacle | You: ... | Correct: ... | XP: 10 | 14:03:12`
pub fn format_event(event: &AnswerEvent) -> String {
  let mode = match event.mode {
    StudyMode::Quiz => "(QUIZ)",
    StudyMode::Practice => "(PRACTICE)",
  };
  let status = if event.result.is_correct() { "✅" } else { "❌" };
  format!(
    "{} {} {} | You: {} | Correct: {} | XP: {} | {}",
    mode,
    status,
    event.word,
    event.selected,
    event.correct_meaning,
    event.xp_gained,
    event.timestamp.format("%Y-%m-%d %H:%M:%S")
  )
}

impl<R: BufRead, W: Write, G: Rng> Terminal<'_, R, W, G> {
  pub(super) fn history_screen(&mut self, profile: &Profile) -> io::Result<()> {
    writeln!(self.output)?;
    writeln!(self.output, "📜 Quiz History")?;
    if profile.history.is_empty() {
      writeln!(self.output, "Nothing answered yet.")?;
    }
    for event in profile.recent_history(config::HISTORY_DISPLAY_LIMIT) {
      writeln!(self.output, "{}", format_event(event))?;
    }
    Ok(())
  }
}
