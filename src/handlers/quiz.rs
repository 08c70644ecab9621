//! Quiz and practice screens.

use rand::Rng;
use std::io::{self, BufRead, Write};

use super::{Flow, Terminal};
use super::home::status_line;
use crate::config;
use crate::content::generate_choices;
use crate::domain::Profile;
use crate::session::QuizSession;
use crate::srs::{NothingToQuiz, start_round, weak_words};

impl<R: BufRead, W: Write, G: Rng> Terminal<'_, R, W, G> {
  /// One scheduled round: cooldowns tick, the pool is resized, and the
  /// selected words are asked for xp
  pub(super) fn quiz_screen(&mut self, profile: &mut Profile) -> io::Result<Flow> {
    let words = match start_round(profile, self.vocabulary, self.mix, &mut self.rng) {
      Ok(words) => words,
      Err(reason) => {
        // Cooldowns already ticked for this round
        if reason == NothingToQuiz::NoEligibleWords {
          self.save(profile)?;
        }
        writeln!(self.output, "🛑 {}", reason)?;
        return Ok(Flow::Stay);
      }
    };
    self.save(profile)?;

    self.ask_words(profile, &words, QuizSession::quiz())
  }

  /// Weak words, no xp at stake
  pub(super) fn practice_screen(&mut self, profile: &mut Profile) -> io::Result<Flow> {
    let words = match weak_words(profile, config::PRACTICE_WORD_LIMIT, &mut self.rng) {
      Ok(words) => words,
      Err(reason) => {
        writeln!(self.output, "🛑 {}", reason)?;
        return Ok(Flow::Stay);
      }
    };

    self.ask_words(profile, &words, QuizSession::practice())
  }

  fn ask_words(&mut self, profile: &mut Profile, words: &[String], mut session: QuizSession) -> io::Result<Flow> {
    let vocabulary = self.vocabulary;
    let total = words.len();

    for (i, word) in words.iter().enumerate() {
      let Some(meaning) = vocabulary.meaning(word) else {
        tracing::warn!("'{}' is no longer in the vocabulary, skipping", word);
        continue;
      };
      let Some(choices) = generate_choices(word, vocabulary, &mut self.rng) else {
        continue;
      };

      writeln!(self.output)?;
      writeln!(self.output, "Question {}/{}: What is the meaning of '{}'?", i + 1, total, word)?;
      for (n, choice) in choices.iter().enumerate() {
        writeln!(self.output, "  {}) {}", n + 1, choice)?;
      }

      let selected = loop {
        let Some(input) = self.prompt(&format!("Your choice (1-{}, q to stop): ", choices.len()))? else {
          return Ok(Flow::Quit);
        };
        if input == "q" {
          return self.finish(&session, profile);
        }
        match input.parse::<usize>() {
          Ok(n) if (1..=choices.len()).contains(&n) => break &choices[n - 1],
          _ => writeln!(self.output, "Enter a number between 1 and {}", choices.len())?,
        }
      };

      let outcome = match session.submit_answer(profile, self.store, word, meaning, selected) {
        Ok(outcome) => outcome,
        Err(unsaved) => {
          writeln!(self.output, "⚠ Could not save progress: {}", unsaved.error)?;
          unsaved.outcome
        }
      };

      if outcome.is_correct() {
        writeln!(self.output, "✅ Correct!")?;
      } else {
        writeln!(self.output, "❌ Wrong. Correct answer: {}", meaning)?;
      }
      if let Some(message) = outcome.bonus_message {
        writeln!(self.output, "{} (+{} xp)", message, outcome.event.xp_gained)?;
      }
      if !session.mode.is_practice() {
        writeln!(self.output, "{}", status_line(profile))?;
      }
    }

    self.finish(&session, profile)
  }

  fn finish(&mut self, session: &QuizSession, profile: &Profile) -> io::Result<Flow> {
    let summary = session.summary();
    writeln!(self.output)?;
    writeln!(
      self.output,
      "🎉 Session Finished! {}/{} correct",
      summary.correct, summary.answered
    )?;
    if !summary.mode.is_practice() {
      writeln!(self.output, "XP this session: {:+}", summary.xp_delta)?;
      writeln!(self.output, "{}", status_line(profile))?;
    }
    Ok(Flow::Stay)
  }
}
