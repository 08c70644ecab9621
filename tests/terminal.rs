use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use tempfile::TempDir;

use lexibox::content::{BuiltinVocabulary, VocabularySource};
use lexibox::handlers::Terminal;
use lexibox::srs::QuestionMix;
use lexibox::store::{JsonProfileStore, ProfileStore};

fn run(store: &dyn ProfileStore, script: &str) -> String {
  let vocab = BuiltinVocabulary.get_all().unwrap();
  let mut terminal = Terminal::new(
    Cursor::new(script.as_bytes().to_vec()),
    Vec::new(),
    store,
    &vocab,
    QuestionMix::default(),
    StdRng::seed_from_u64(9),
  );
  terminal.run().unwrap();
  String::from_utf8(terminal.into_output()).unwrap()
}

#[test]
fn test_progress_survives_restart() {
  let temp = TempDir::new().unwrap();

  {
    let store = JsonProfileStore::new(temp.path()).unwrap();
    let out = run(&store, "new ada\n1\n1\n2\n3\nq\n5\n");
    assert!(out.contains("=== Lexibox - Select Profile ==="));
    assert!(out.contains("No profiles yet."));
    assert!(out.contains("/3 correct"));
  }

  let store = JsonProfileStore::new(temp.path()).unwrap();
  let out = run(&store, "load ada\n3\nq\n");
  assert!(out.contains("  - ada"));
  // Three answered quiz questions, newest first
  assert_eq!(out.matches("(QUIZ) ").count(), 3);

  let profile = store.load("ada").unwrap().unwrap();
  // The built-in deck is smaller than a rank 1 pool
  assert_eq!(profile.active_pool.len(), 10);
  assert_eq!(profile.history.len(), 3);
}

#[test]
fn test_quiz_with_every_word_cooling_down() {
  let temp = TempDir::new().unwrap();
  let store = JsonProfileStore::new(temp.path()).unwrap();

  // Round one asks 8 of the 10 words; round two only has the other 2 left
  let out = run(
    &store,
    "new ada\n1\n1\n1\n1\n1\n1\n1\n1\n1\n1\n1\n1\n5\n",
  );
  assert!(out.contains("Question 8/8"));
  assert!(out.contains("Question 2/2"));
  assert!(!out.contains("Question 3/2"));

  let profile = store.load("ada").unwrap().unwrap();
  assert_eq!(profile.history.len(), 10);
}
