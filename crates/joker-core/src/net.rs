//! Bucketed pre-filter that narrows a large pool before full scoring.
//!
//! Words are grouped by an integer bucket key derived from a sortable score.
//! A lookup gathers every word from buckets near the input's own key whose
//! percent difference to that key is within a threshold. Both the sortable
//! score and the percent difference are supplied by the caller.

use std::collections::HashMap;

/// Bucket key to the words sharing it.
pub type BucketIndex = HashMap<i64, Vec<String>>;

/// Maps a word to a comparable scalar. Truncated toward zero to get a bucket key.
pub trait SortableScore {
    fn sortable_score(&self, word: &str) -> f64;

    fn bucket_key(&self, word: &str) -> i64 {
        self.sortable_score(word) as i64
    }
}

impl<F> SortableScore for F
where
    F: Fn(&str) -> f64,
{
    fn sortable_score(&self, word: &str) -> f64 {
        self(word)
    }
}

/// Closeness of two bucket keys, in percent.
pub trait PercentDifference {
    fn percent_difference(&self, candidate: i64, origin: i64) -> f64;
}

impl<F> PercentDifference for F
where
    F: Fn(i64, i64) -> f64,
{
    fn percent_difference(&self, candidate: i64, origin: i64) -> f64 {
        self(candidate, origin)
    }
}

/// Words from buckets near `input_word`'s bucket.
///
/// Keys `key..key + look_range` are visited first, then
/// `max(0, key - look_range)..key`, each in increasing order. A present bucket
/// contributes all of its words when its percent difference to `key` is at
/// most `percent_range`. Missing buckets are skipped and duplicates across
/// buckets are kept.
pub fn neighbor_words<'i, K, D>(
    input_word: &str,
    index: &'i BucketIndex,
    percent_range: f64,
    look_range: i64,
    sortable: &K,
    difference: &D,
) -> Vec<&'i str>
where
    K: SortableScore + ?Sized,
    D: PercentDifference + ?Sized,
{
    let key = sortable.bucket_key(input_word);
    let upper = key..key.saturating_add(look_range);
    let lower = key.saturating_sub(look_range).max(0)..key;

    let mut net = Vec::new();
    for bucket in upper.chain(lower) {
        let Some(words) = index.get(&bucket) else {
            continue;
        };
        let diff = difference.percent_difference(bucket, key);
        if diff <= percent_range {
            tracing::trace!("bucket {} accepted for '{}' ({:.2}%)", bucket, input_word, diff);
            net.extend(words.iter().map(String::as_str));
        }
    }
    tracing::debug!("net for '{}' (key {}) holds {} words", input_word, key, net.len());
    net
}

/// Sortable score summing the word's Unicode scalar values.
///
/// Anagrams share a key, so transposed letters land in the same bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodepointSum;

impl SortableScore for CodepointSum {
    fn sortable_score(&self, word: &str) -> f64 {
        word.chars().map(|c| c as u32 as f64).sum()
    }
}

/// `|a - b|` relative to the mean of `|a|` and `|b|`, in percent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativePercentDifference;

impl PercentDifference for RelativePercentDifference {
    fn percent_difference(&self, candidate: i64, origin: i64) -> f64 {
        let (a, b) = (candidate as f64, origin as f64);
        let mean = (a.abs() + b.abs()) / 2.0;
        if mean == 0.0 {
            return 0.0;
        }
        (a - b).abs() / mean * 100.0
    }
}

/// Group `words` by their bucket key, keeping first-seen order within a bucket.
pub fn build_index<'w, K>(words: impl IntoIterator<Item = &'w str>, sortable: &K) -> BucketIndex
where
    K: SortableScore + ?Sized,
{
    let mut index = BucketIndex::new();
    for word in words {
        index
            .entry(sortable.bucket_key(word))
            .or_default()
            .push(word.to_string());
    }
    index
}
