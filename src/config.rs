use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Recognized options: where to read words from, where to persist them.
/// Both fall back to the fixed defaults when unset.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WordbankConfig {
    pub source: Option<String>,
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("wordbank.toml")
}

pub fn default_source_path() -> PathBuf {
    PathBuf::from("word_list.txt")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("word_database.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<WordbankConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: WordbankConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &WordbankConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Resolve the effective paths: CLI flag > config file > default.
pub fn resolve_paths(
    source: Option<PathBuf>,
    database: Option<PathBuf>,
    config: &WordbankConfig,
) -> (PathBuf, PathBuf) {
    let source = source
        .or_else(|| config.source.as_ref().map(PathBuf::from))
        .unwrap_or_else(default_source_path);
    let database = database
        .or_else(|| config.database.as_ref().map(PathBuf::from))
        .unwrap_or_else(default_database_path);
    (source, database)
}
