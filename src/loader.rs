//! Single-pass word list ingestion
//!
//! Streams the source file line by line, trims each line to a candidate
//! word, applies the filter policy, and inserts survivors inside one
//! transaction committed after the last line. There is no deduplication
//! and no partial-failure recovery: an error mid-stream aborts the pass
//! and the uncommitted transaction is rolled back when the store drops.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::Result;
use crate::filter::FilterPolicy;
use crate::storage::WordStore;
use crate::word::Word;

/// Summary of one ingestion pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Raw lines read from the source
    pub lines_read: usize,
    /// Candidates inserted
    pub inserted: usize,
    /// Candidates rejected by the filter
    pub skipped: usize,
}

/// Ingest a word list into the store.
///
/// The observer is invoked once per inserted word, in insertion order,
/// after the row exists in the still-uncommitted transaction. A missing
/// or undecodable source file surfaces as an IO error.
pub fn load_words(
    store: &mut WordStore,
    source: &Path,
    policy: &FilterPolicy,
    observer: &mut dyn FnMut(&Word),
) -> Result<LoadReport> {
    let file = File::open(source)?;
    let reader = BufReader::new(file);

    let mut report = LoadReport::default();

    store.begin_transaction()?;
    for line in reader.lines() {
        let line = line?;
        report.lines_read += 1;

        let candidate = line.trim();
        if !policy.accepts(candidate) {
            tracing::debug!("Rejected candidate: {:?}", candidate);
            report.skipped += 1;
            continue;
        }

        let id = store.insert_word(candidate)?;
        observer(&Word::new(id, candidate));
        report.inserted += 1;
    }
    store.commit()?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::fs;
    use std::path::PathBuf;

    fn write_source(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("word_list.txt");
        fs::write(&path, contents).unwrap();
        path
    }

    fn collect_words(source_contents: &str) -> (Vec<Word>, LoadReport) {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(&dir, source_contents);

        let mut store = WordStore::open_in_memory().unwrap();
        let mut seen = Vec::new();
        let report = load_words(
            &mut store,
            &source,
            &FilterPolicy::default(),
            &mut |word| seen.push(word.clone()),
        )
        .unwrap();

        (seen, report)
    }

    #[test]
    fn test_sample_word_list() {
        let (seen, report) = collect_words("ev\nkitap\nmasa-üstü\nkalem \nçanta\ntop\n");

        let words: Vec<&str> = seen.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["kitap", "kalem", "çanta"]);

        assert_eq!(report.lines_read, 6);
        assert_eq!(report.inserted, 3);
        assert_eq!(report.skipped, 3);
    }

    #[test]
    fn test_observer_sees_monotonic_ids() {
        let (seen, _) = collect_words("kitap\nkalem\nçanta\n");

        assert!(seen.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[test]
    fn test_candidates_are_trimmed_before_storage() {
        let (seen, _) = collect_words("  door  \n");

        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].word, "door");
    }

    #[test]
    fn test_duplicates_are_not_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(&dir, "word\nword\n");

        let mut store = WordStore::open_in_memory().unwrap();
        load_words(&mut store, &source, &FilterPolicy::default(), &mut |_| {}).unwrap();

        let words = store.all_words().unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.iter().all(|w| w.word == "word"));
        assert_ne!(words[0].id, words[1].id);
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = WordStore::open_in_memory().unwrap();

        let result = load_words(
            &mut store,
            &dir.path().join("no_such_list.txt"),
            &FilterPolicy::default(),
            &mut |_| {},
        );

        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_pass_commits_once_at_the_end() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(&dir, "kitap\nkalem\nçanta\n");
        let db_path = dir.path().join("words.db");

        {
            let mut store = WordStore::open(&db_path).unwrap();
            let report =
                load_words(&mut store, &source, &FilterPolicy::default(), &mut |_| {}).unwrap();
            assert_eq!(report.inserted, 3);
        }

        let store = WordStore::open(&db_path).unwrap();
        assert_eq!(store.count_words().unwrap(), 3);
    }

    #[test]
    fn test_empty_source_commits_empty_pass() {
        let (seen, report) = collect_words("");

        assert!(seen.is_empty());
        assert_eq!(report, LoadReport::default());
    }
}
