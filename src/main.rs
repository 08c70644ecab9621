use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lexibox::config::AppConfig;
use lexibox::content::{Vocabulary, load_vocabulary};
use lexibox::handlers::Terminal;
use lexibox::srs::QuestionMix;
use lexibox::store;

fn main() {
  // Logs go to stderr so they don't interleave with the quiz on stdout
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lexibox=info".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  let config = AppConfig::load();

  let vocabulary = match load_vocabulary(&config.vocabulary_path) {
    Ok(vocabulary) => vocabulary,
    Err(e) => {
      tracing::error!("{}", e);
      eprintln!("{}", e.user_message());
      Vocabulary::default()
    }
  };
  tracing::info!("Loaded {} words", vocabulary.len());

  let profiles = store::open_store(&config).expect("Failed to open profile store");

  let stdin = io::stdin();
  let mut terminal = Terminal::new(
    stdin.lock(),
    io::stdout(),
    &*profiles,
    &vocabulary,
    QuestionMix::new(config.high_quota, config.low_quota),
    rand::rng(),
  );

  if let Err(e) = terminal.run() {
    tracing::error!("Terminal I/O failed: {}", e);
    std::process::exit(1);
  }
}
