//! Ordering of aggregated vocabulary.
//!
//! [`rank`] materializes a [`VocabMap`] into a list sorted by a
//! [`SortMode`]. Ties are always broken deterministically, so the same
//! corpus produces the same deck on every run.

use std::cmp::{Ordering, Reverse};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::vocabulary::{VocabEntry, VocabMap};

/// Sort policy for the ranked vocabulary.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Ascending first-seen index
    #[default]
    Index,
    /// Descending repetition count
    Frequency,
}

/// Ascending by (`first_index`, `discovery`).
fn by_first_index(a: &VocabEntry, b: &VocabEntry) -> Ordering {
    (a.first_index, a.discovery).cmp(&(b.first_index, b.discovery))
}

/// Descending `count`, then first-seen order.
fn by_count_desc(a: &VocabEntry, b: &VocabEntry) -> Ordering {
    (Reverse(a.count), a.first_index, a.discovery).cmp(&(
        Reverse(b.count),
        b.first_index,
        b.discovery,
    ))
}

/// Sort `entries` in place according to `mode`.
pub fn sort_entries(entries: &mut [VocabEntry], mode: SortMode) {
    match mode {
        SortMode::Index => entries.sort_by(by_first_index),
        SortMode::Frequency => entries.sort_by(by_count_desc),
    }
}

/// Convert the aggregate mapping into an ordered list.
pub fn rank(entries: VocabMap, mode: SortMode) -> Vec<VocabEntry> {
    let mut ranked: Vec<VocabEntry> = entries.into_iter().map(|(_, entry)| entry).collect();
    sort_entries(&mut ranked, mode);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, count: usize, first_index: usize, discovery: usize) -> VocabEntry {
        VocabEntry {
            word: word.to_string(),
            count,
            first_index,
            discovery,
        }
    }

    fn map(entries: Vec<VocabEntry>) -> VocabMap {
        entries.into_iter().map(|e| (e.word.clone(), e)).collect()
    }

    fn words(entries: &[VocabEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn test_rank_by_first_index() {
        let entries = map(vec![
            entry("gamma", 5, 2, 2),
            entry("alpha", 0, 0, 0),
            entry("beta", 9, 1, 1),
        ]);

        let ranked = rank(entries, SortMode::Index);
        assert_eq!(words(&ranked), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_rank_by_first_index_is_idempotent() {
        let entries = map(vec![
            entry("c", 0, 2, 2),
            entry("a", 0, 0, 0),
            entry("b", 0, 1, 1),
        ]);

        let mut ranked = rank(entries, SortMode::Index);
        let once = ranked.clone();
        sort_entries(&mut ranked, SortMode::Index);
        assert_eq!(ranked, once);
    }

    #[test]
    fn test_per_file_index_ties_use_discovery() {
        // Two files, both starting their index at 0.
        let entries = map(vec![
            entry("second_file_first", 0, 0, 2),
            entry("first_file_first", 0, 0, 0),
            entry("first_file_second", 0, 1, 1),
        ]);

        let ranked = rank(entries, SortMode::Index);
        assert_eq!(
            words(&ranked),
            vec!["first_file_first", "second_file_first", "first_file_second"]
        );
    }

    #[test]
    fn test_rank_by_count_desc() {
        let entries = map(vec![
            entry("rare", 0, 0, 0),
            entry("common", 7, 1, 1),
            entry("medium", 3, 2, 2),
        ]);

        let ranked = rank(entries, SortMode::Frequency);
        assert_eq!(words(&ranked), vec!["common", "medium", "rare"]);
    }

    #[test]
    fn test_count_ties_break_by_first_index() {
        let entries = map(vec![
            entry("late", 2, 5, 5),
            entry("early", 2, 1, 1),
            entry("top", 4, 3, 3),
        ]);

        let ranked = rank(entries, SortMode::Frequency);
        assert_eq!(words(&ranked), vec!["top", "early", "late"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(VocabMap::default(), SortMode::Frequency).is_empty());
    }
}
