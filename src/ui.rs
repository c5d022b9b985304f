//! Terminal output helpers
//!
//! User-facing output is kept separate from tracing diagnostics: these
//! helpers style the per-word notifications and run summaries, falling
//! back to plain text when stdout is not a terminal.

use owo_colors::{OwoColorize, Style};
use std::sync::OnceLock;

use crate::word::Word;

pub struct Icons;

impl Icons {
    pub const BOOK: &str = "📖";
    pub const NEW: &str = "✨";
    pub const CHECK: &str = "✅";
    pub const STATS: &str = "📊";
    pub const INFO: &str = "ℹ️";
}

static THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub dim: Style,
}

impl Theme {
    pub fn detect() -> Self {
        if !console::Term::stdout().is_term() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            dim: Style::new().white().dimmed(),
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            success: Style::new(),
            dim: Style::new(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}

pub fn header(text: &str) {
    println!("{} {}", Icons::BOOK, text.style(theme().header.clone()));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        Icons::INFO.style(theme().dim.clone()),
        label.style(theme().dim.clone()),
        value
    );
}

/// One notification line per inserted word
pub fn word_added(word: &Word) {
    println!("{} Added word: {}", Icons::NEW, word.word);
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(theme().dim.clone()), value);
}
