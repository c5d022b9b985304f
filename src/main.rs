//! Wordbank CLI - load filtered word lists into a local SQLite database

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordbank::FilterPolicy;
use wordbank::config::{self, WordbankConfig};
use wordbank::loader::load_words;
use wordbank::storage::WordStore;
use wordbank::ui;

#[derive(Parser)]
#[command(name = "wordbank")]
#[command(version = "0.1.0")]
#[command(about = "Load filtered word lists into a local SQLite database")]
#[command(long_about = r#"
Wordbank reads a newline-delimited word list, keeps the words that are
4 to 6 characters long and contain no spaces or hyphens, and appends
them to a words table in a local SQLite file.

Example usage:
  wordbank load --source word_list.txt --database word_database.db
  wordbank stats
  wordbank words --limit 20
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a word list into the database
    Load {
        /// Path to the source word list (overrides the config file)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Path to the database file (overrides the config file)
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Path to the config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show statistics about the stored words
    Stats {
        /// Path to the database file
        #[arg(short, long, default_value = "word_database.db")]
        database: PathBuf,
    },

    /// List stored words
    Words {
        /// Path to the database file
        #[arg(short, long, default_value = "word_database.db")]
        database: PathBuf,

        /// Maximum number of words to print
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Write a starter config file
    Init {
        /// Where to write the config
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Load {
            source,
            database,
            config: config_path,
        } => {
            let file_config = config::load_config(config_path.as_deref())?.unwrap_or_default();
            let (source, database) = config::resolve_paths(source, database, &file_config);

            tracing::info!("Loading {} into {}", source.display(), database.display());

            config::ensure_db_dir(&database)?;
            let mut store = WordStore::open(&database)?;

            ui::header("Wordbank Loader");
            ui::info("Source", &source.display().to_string());
            ui::info("Database", &database.display().to_string());
            println!();

            let policy = FilterPolicy::default();
            let report = load_words(&mut store, &source, &policy, &mut ui::word_added)?;

            println!();
            ui::success("Load complete");
            ui::summary_row("Lines read:", &report.lines_read.to_string());
            ui::summary_row("Inserted:", &report.inserted.to_string());
            ui::summary_row("Skipped:", &report.skipped.to_string());
        }

        Commands::Stats { database } => {
            let store = WordStore::open(&database)?;
            let stats = store.stats()?;

            println!("{} Wordbank statistics ({})", ui::Icons::STATS, database.display());
            println!("{}", stats);
        }

        Commands::Words { database, limit } => {
            let store = WordStore::open(&database)?;
            let words = store.all_words()?;

            if words.is_empty() {
                println!("∅ No words stored.");
            } else {
                for word in words.iter().take(limit) {
                    println!("- {} (id {})", word.word, word.id);
                }
                if words.len() > limit {
                    println!("  ... and {} more", words.len() - limit);
                }
            }
        }

        Commands::Init { path, force } => {
            let path = path.unwrap_or_else(config::default_config_path);
            let starter = WordbankConfig {
                source: Some(config::default_source_path().display().to_string()),
                database: Some(config::default_database_path().display().to_string()),
            };

            config::write_config(&path, &starter, force)?;
            ui::success(&format!("Wrote config to {}", path.display()));
        }
    }

    Ok(())
}
