//! Filter policy - which candidate words are eligible for insertion
//!
//! A candidate is a single line from the source list with leading and
//! trailing whitespace removed. It is accepted when its character length
//! is within bounds and it contains neither a space nor a hyphen.

/// Minimum candidate length in characters, inclusive
pub const MIN_WORD_CHARS: usize = 4;
/// Maximum candidate length in characters, inclusive
pub const MAX_WORD_CHARS: usize = 6;

/// The predicate applied to every trimmed candidate word.
///
/// All conditions are required: length within `min_chars..=max_chars`,
/// no space character, no hyphen character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPolicy {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            min_chars: MIN_WORD_CHARS,
            max_chars: MAX_WORD_CHARS,
        }
    }
}

impl FilterPolicy {
    /// Check whether a trimmed candidate is eligible for insertion.
    ///
    /// Length is counted in Unicode scalar values, so a multi-byte
    /// character like 'ç' counts once.
    pub fn accepts(&self, candidate: &str) -> bool {
        let chars = candidate.chars().count();
        chars >= self.min_chars
            && chars <= self.max_chars
            && !candidate.contains(' ')
            && !candidate.contains('-')
    }
}
