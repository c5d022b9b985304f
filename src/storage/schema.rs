//! Database schema definitions

/// SQL to create the words table
pub const CREATE_WORDS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS words (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word TEXT NOT NULL
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_WORDS_TABLE]
}
