//! Picking the best candidate for a piece of user input.

use std::cmp::Ordering;

use crate::candidate::ComparisonText;
use crate::error::{Error, Result};
use crate::score::{DEFAULT_SCORER, Scorer};

/// One candidate together with its score against the input.
#[derive(Debug, PartialEq)]
pub struct Scored<'c, C> {
    /// Position of the candidate in the pool it came from.
    pub index: usize,
    pub candidate: &'c C,
    pub score: f64,
}

// Manual impls: `C` itself need not be `Copy`.
impl<C> Clone for Scored<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Scored<'_, C> {}

/// Scores of every candidate in a pool, in pool order.
#[derive(Debug)]
pub struct ScoreTable<'c, C> {
    entries: Vec<Scored<'c, C>>,
}

impl<'c, C> ScoreTable<'c, C> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scored<'c, C>> {
        self.entries.iter()
    }

    /// The first entry holding the highest strictly positive score.
    pub fn best(&self) -> Option<Scored<'c, C>> {
        let mut best = None;
        let mut best_score = 0.0;
        for entry in &self.entries {
            if entry.score > best_score {
                best_score = entry.score;
                best = Some(*entry);
            }
        }
        best
    }

    /// Entries ordered by descending score; equal scores keep pool order.
    pub fn ranked(&self) -> Vec<Scored<'c, C>> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked
    }
}

/// Score every candidate against `input` with the default composite.
pub fn score_all<'c, C: ComparisonText>(
    input: &str,
    candidates: &'c [C],
) -> Result<ScoreTable<'c, C>> {
    score_all_with(input, candidates, &DEFAULT_SCORER)
}

/// Score every candidate against `input`; the candidate is the model string.
pub fn score_all_with<'c, C, S>(
    input: &str,
    candidates: &'c [C],
    scorer: &S,
) -> Result<ScoreTable<'c, C>>
where
    C: ComparisonText,
    S: Scorer + ?Sized,
{
    let mut entries = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        let text = candidate.comparison_text();
        let score = scorer.score(text, input)?;
        tracing::trace!("scored '{}' against '{}': {:.2}", text, input, score);
        entries.push(Scored {
            index,
            candidate,
            score,
        });
    }
    Ok(ScoreTable { entries })
}

/// Text of the best candidate for `input` under the default composite.
pub fn select_best<'c, C: ComparisonText>(input: &str, candidates: &'c [C]) -> Result<&'c str> {
    select_best_with(input, candidates, &DEFAULT_SCORER)
        .map(|best| best.candidate.comparison_text())
}

/// Best candidate for `input` under `scorer`.
///
/// Ties go to the candidate that appears first. A pool where nothing scores
/// above zero, including an empty pool, yields [`Error::NoMatch`].
pub fn select_best_with<'c, C, S>(
    input: &str,
    candidates: &'c [C],
    scorer: &S,
) -> Result<Scored<'c, C>>
where
    C: ComparisonText,
    S: Scorer + ?Sized,
{
    let table = score_all_with(input, candidates, scorer)?;
    match table.best() {
        Some(best) => {
            tracing::debug!(
                "best match for '{}' is '{}' ({:.2})",
                input,
                best.candidate.comparison_text(),
                best.score
            );
            Ok(best)
        }
        None => Err(Error::NoMatch {
            input: input.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;
    use crate::metrics::{MetricFn, positional_letter_score};
    use crate::score::CompositeScorer;
    use indexmap::IndexMap;

    #[test]
    fn test_select_best_transposed_letters() {
        let candidates = ["status", "stash", "commit"];
        assert_eq!(select_best("stauts", &candidates).unwrap(), "status");
    }

    #[test]
    fn test_select_best_tie_goes_to_first() {
        // "ab" and "cd" both score 100/3 against "xy": equal length, nothing else
        let forward = ["ab", "cd"];
        let backward = ["cd", "ab"];
        assert_eq!(select_best("xy", &forward).unwrap(), "ab");
        assert_eq!(select_best("xy", &backward).unwrap(), "cd");
    }

    #[test]
    fn test_tie_between_identical_texts_keeps_first_record() {
        let mut first = IndexMap::new();
        first.insert("id".to_string(), serde_json::json!(1));
        let mut second = IndexMap::new();
        second.insert("id".to_string(), serde_json::json!(2));
        let candidates = vec![
            Candidate::labeled("push", first),
            Candidate::labeled("push", second),
        ];
        let best = select_best_with("psuh", &candidates, &DEFAULT_SCORER).unwrap();
        assert_eq!(best.index, 0);
        assert_eq!(best.candidate.payload().unwrap()["id"], 1);
    }

    #[test]
    fn test_empty_pool_is_no_match() {
        let candidates: [&str; 0] = [];
        match select_best("push", &candidates) {
            Err(Error::NoMatch { input }) => assert_eq!(input, "push"),
            other => panic!("expected NoMatch, got {other:?}"),
        }
    }

    #[test]
    fn test_all_zero_scores_is_no_match() {
        let metrics: [MetricFn; 1] = [positional_letter_score];
        let scorer = CompositeScorer::new(&metrics).unwrap();
        let result = select_best_with("zzz", &["abc", "def"], &scorer);
        assert!(matches!(result, Err(Error::NoMatch { .. })));
    }

    #[test]
    fn test_empty_candidate_is_degenerate() {
        let result = select_best("push", &["push", ""]);
        assert!(matches!(result, Err(Error::DegenerateInput { .. })));
    }

    #[test]
    fn test_score_all_keeps_pool_order() {
        let candidates = vec![
            Candidate::from("commit"),
            Candidate::from("stash"),
            Candidate::from("status"),
        ];
        let table = score_all("stauts", &candidates).unwrap();
        let texts: Vec<_> = table
            .iter()
            .map(|s| s.candidate.comparison_text())
            .collect();
        assert_eq!(texts, vec!["commit", "stash", "status"]);
        assert_eq!(table.len(), 3);

        let ranked: Vec<_> = table
            .ranked()
            .into_iter()
            .map(|s| s.candidate.comparison_text())
            .collect();
        assert_eq!(ranked, vec!["status", "stash", "commit"]);
    }

    #[test]
    fn test_candidate_is_the_original_argument() {
        // Only the positional metric: "cat" as model against "ca" gives 2/3,
        // the swapped order would give 1.0.
        let metrics: [MetricFn; 1] = [positional_letter_score];
        let scorer = CompositeScorer::new(&metrics).unwrap();
        let table = score_all_with("ca", &["cat"], &scorer).unwrap();
        let score = table.iter().next().unwrap().score;
        assert!((score - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_closure_strategy() {
        let by_length = |original: &str, _: &str| -> Result<f64> { Ok(original.len() as f64) };
        let best = select_best_with("x", &["ab", "abcd", "abc"], &by_length).unwrap();
        assert_eq!(*best.candidate, "abcd");
    }
}
