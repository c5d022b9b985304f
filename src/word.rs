//! Word record type
//!
//! A row of the `words` table: the id assigned by storage plus the text.

/// A word persisted in the database.
///
/// Ids are assigned by SQLite on insertion and are stable once assigned.
/// The text is never empty since the minimum filter length is above zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Storage-assigned row id, strictly increasing in insertion order
    pub id: i64,
    /// The word text
    pub word: String,
}

impl Word {
    /// Create a word record from a stored row
    pub fn new(id: i64, word: impl Into<String>) -> Self {
        Self {
            id,
            word: word.into(),
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_display() {
        let word = Word::new(3, "kitap");
        assert_eq!(word.to_string(), "kitap");
        assert_eq!(word.id, 3);
    }
}
