//! `rolo` — interactive command-line phone book.
//!
//! # Usage
//!
//! ```
//! rolo                          # uses ./contacts.json
//! rolo --file ~/contacts.json
//! ROLO_FILE=~/contacts.json rolo
//! ```

mod app;

use std::io;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use rolo_store_json::JsonStore;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rolo", about = "Interactive command-line phone book")]
struct Args {
  /// Path to the phone book JSON file.
  #[arg(
    long,
    value_name = "FILE",
    env = "ROLO_FILE",
    default_value = "contacts.json"
  )]
  file: std::path::PathBuf,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Diagnostics go to stderr so they never interleave with the prompts.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();
  let store = JsonStore::new(args.file);
  let book = store.load().context("loading the phone book")?;

  let stdin = io::stdin();
  let stdout = io::stdout();
  App::new(book, store).run(&mut stdin.lock(), &mut stdout.lock())
}
