//! Independent similarity metrics.
//!
//! Every metric compares an `original` (the known command acting as the model)
//! with an `input` (what the user typed) and returns a value in `0.0..=1.0`.
//! Lengths are measured in Unicode scalar values. An empty `original` is
//! rejected with [`Error::DegenerateInput`](crate::Error::DegenerateInput).

use clap::ValueEnum;
use strum::{Display, EnumString, VariantNames};

use crate::error::{Error, Result};

/// Signature shared by all metrics: `(original, input) -> 0.0..=1.0`.
pub type MetricFn = fn(&str, &str) -> Result<f64>;

/// Letters considered by [`letter_histogram_score`].
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

fn model_len(original: &str) -> Result<usize> {
    match original.chars().count() {
        0 => Err(Error::empty_original()),
        n => Ok(n),
    }
}

/// Ratio of the shorter length to the longer one. Symmetric in its arguments.
pub fn length_score(original: &str, input: &str) -> Result<f64> {
    let len_o = model_len(original)?;
    let len_i = input.chars().count();
    Ok(len_o.min(len_i) as f64 / len_o.max(len_i) as f64)
}

/// Fraction of `original`'s characters that reappear at the same position in `input`.
///
/// The denominator is the length of `original`, not the shorter string, so the
/// metric is asymmetric when lengths differ: `("cat", "ca")` scores 2/3 while
/// `("ca", "cat")` scores 1.0.
pub fn positional_letter_score(original: &str, input: &str) -> Result<f64> {
    let len_o = model_len(original)?;
    let matches = original
        .chars()
        .zip(input.chars())
        .filter(|(o, i)| o == i)
        .count();
    Ok(matches as f64 / len_o as f64)
}

/// Rewards lowercase ASCII letters that occur exactly as often in both strings.
///
/// A letter contributes its count only when both counts are non-zero and
/// equal; near misses contribute nothing. Characters outside [`ALPHABET`] are
/// ignored but still count towards the length of `original`.
pub fn letter_histogram_score(original: &str, input: &str) -> Result<f64> {
    let len_o = model_len(original)?;
    let hist_o = histogram(original);
    let hist_i = histogram(input);

    let total: usize = hist_o
        .iter()
        .zip(hist_i.iter())
        .filter(|(o, i)| **o != 0 && o == i)
        .map(|(o, _)| *o)
        .sum();
    Ok(total as f64 / len_o as f64)
}

fn histogram(s: &str) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for c in s.chars() {
        if let Some(slot) = ALPHABET.iter().position(|a| *a == c) {
            counts[slot] += 1;
        }
    }
    counts
}

/// Jaro-Winkler similarity, weighting shared prefixes.
pub fn jaro_winkler_score(original: &str, input: &str) -> Result<f64> {
    model_len(original)?;
    Ok(strsim::jaro_winkler(original, input))
}

/// One minus the Levenshtein distance normalised by the longer length.
pub fn levenshtein_score(original: &str, input: &str) -> Result<f64> {
    model_len(original)?;
    Ok(strsim::normalized_levenshtein(original, input))
}

/// Named metrics, as selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString, VariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum Metric {
    Length,
    Positional,
    Histogram,
    JaroWinkler,
    Levenshtein,
}

impl Metric {
    /// The metrics making up the default composite, in order.
    pub const DEFAULTS: [Metric; 3] = [Metric::Length, Metric::Positional, Metric::Histogram];

    pub fn function(self) -> MetricFn {
        match self {
            Metric::Length => length_score,
            Metric::Positional => positional_letter_score,
            Metric::Histogram => letter_histogram_score,
            Metric::JaroWinkler => jaro_winkler_score,
            Metric::Levenshtein => levenshtein_score,
        }
    }
}
