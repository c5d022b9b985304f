//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use super::schema;
use crate::Result;
use crate::word::Word;

/// SQLite-backed storage for accepted words.
///
/// Owns the connection as a scoped resource for the duration of a run.
/// Dropping the store releases the connection; a transaction left
/// uncommitted at that point is rolled back by SQLite.
pub struct WordStore {
    conn: Connection,
}

impl WordStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Create the words table if it does not already exist.
    ///
    /// Idempotent: safe to call on every run, never alters existing rows.
    pub fn ensure_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Word Operations ==========

    /// Insert a word, returning the id assigned by SQLite
    pub fn insert_word(&self, word: &str) -> Result<i64> {
        self.conn
            .execute("INSERT INTO words (word) VALUES (?1)", params![word])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a word by id
    pub fn get_word(&self, id: i64) -> Result<Option<Word>> {
        self.conn
            .query_row("SELECT id, word FROM words WHERE id = ?1", [id], |row| {
                Self::row_to_word(row)
            })
            .optional()
            .map_err(Into::into)
    }

    /// All stored words in insertion order
    pub fn all_words(&self) -> Result<Vec<Word>> {
        let mut stmt = self.conn.prepare("SELECT id, word FROM words ORDER BY id")?;

        let words = stmt
            .query_map([], |row| Self::row_to_word(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(words)
    }

    /// Count all words
    pub fn count_words(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a Word
    fn row_to_word(row: &rusqlite::Row) -> rusqlite::Result<Word> {
        Ok(Word {
            id: row.get(0)?,
            word: row.get(1)?,
        })
    }

    // ========== Bulk Operations ==========

    /// Begin a transaction for bulk inserts
    pub fn begin_transaction(&mut self) -> Result<()> {
        self.conn.execute("BEGIN TRANSACTION", [])?;
        Ok(())
    }

    /// Commit a transaction
    pub fn commit(&mut self) -> Result<()> {
        self.conn.execute("COMMIT", [])?;
        Ok(())
    }

    /// Rollback a transaction
    pub fn rollback(&mut self) -> Result<()> {
        self.conn.execute("ROLLBACK", [])?;
        Ok(())
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            words: self.count_words()?,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DbStats {
    pub words: usize,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Words: {}", self.words)
    }
}
