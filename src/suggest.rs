//! "Did you mean?" suggestions for a mistyped command.
//!
//! Glues the core together the intended way: a large registry is first
//! narrowed with the bucketed net, then the survivors are scored and ranked.

use indexmap::IndexMap;
use joker_core::net::{self, CodepointSum, RelativePercentDifference};
use joker_core::{Candidate, ComparisonText, Scored, Scorer, score_all_with};

use crate::error::{JokerError, Result};
use crate::settings::Settings;

/// Whether the net runs before scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetMode {
    /// Only when the registry is larger than the net threshold
    Auto,
    Always,
    Never,
}

/// Candidates worth scoring for `input`.
///
/// When the net runs, the result follows the net's scan order and each net
/// word maps to the first registry entry with that text. An empty net falls
/// back to the whole registry.
pub fn narrow<'r>(
    input: &str,
    registry: &'r [Candidate],
    settings: &Settings,
    mode: NetMode,
) -> Vec<&'r Candidate> {
    let use_net = match mode {
        NetMode::Always => true,
        NetMode::Never => false,
        NetMode::Auto => registry.len() > settings.net_threshold,
    };
    if !use_net {
        return registry.iter().collect();
    }

    let mut by_text: IndexMap<&str, &Candidate> = IndexMap::new();
    for candidate in registry {
        by_text
            .entry(candidate.comparison_text())
            .or_insert(candidate);
    }

    let index = net::build_index(by_text.keys().copied(), &CodepointSum);
    let words = net::neighbor_words(
        input,
        &index,
        settings.percent_range,
        settings.look_range,
        &CodepointSum,
        &RelativePercentDifference,
    );
    if words.is_empty() {
        tracing::debug!("Net for '{}' is empty, scoring the whole registry", input);
        return registry.iter().collect();
    }

    tracing::debug!(
        "Net narrowed {} commands to {} for '{}'",
        registry.len(),
        words.len(),
        input
    );
    words
        .into_iter()
        .filter_map(|word| by_text.get(word).copied())
        .collect()
}

/// Up to `limit` best suggestions for `input`, best first.
///
/// Only candidates with a strictly positive score are suggested; if none
/// qualifies the result is [`joker_core::Error::NoMatch`].
pub fn suggest<'r, S: Scorer + ?Sized>(
    input: &str,
    pool: &[&'r Candidate],
    scorer: &S,
    limit: usize,
) -> Result<Vec<Scored<'r, Candidate>>> {
    let table = score_all_with(input, pool, scorer)?;
    let best: Vec<_> = table
        .ranked()
        .into_iter()
        .filter(|scored| scored.score > 0.0)
        .take(limit.max(1))
        .map(|scored| Scored {
            index: scored.index,
            candidate: *scored.candidate,
            score: scored.score,
        })
        .collect();

    if best.is_empty() {
        return Err(JokerError::Core(joker_core::Error::NoMatch {
            input: input.to_string(),
        }));
    }
    Ok(best)
}

/// Format suggestions as a human-readable string.
///
/// Returns None if there are no suggestions.
pub fn format_suggestions(suggestions: &[&str]) -> Option<String> {
    match suggestions.len() {
        0 => None,
        1 => Some(format!("Did you mean '{}'?", suggestions[0])),
        _ => {
            let quoted: Vec<_> = suggestions.iter().map(|s| format!("'{}'", s)).collect();
            Some(format!("Did you mean one of: {}?", quoted.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joker_core::DEFAULT_SCORER;

    fn registry(words: &[&str]) -> Vec<Candidate> {
        words.iter().map(|w| Candidate::from(*w)).collect()
    }

    fn texts(pool: &[&Candidate]) -> Vec<String> {
        pool.iter().map(|c| c.comparison_text().to_string()).collect()
    }

    #[test]
    fn test_narrow_below_threshold_keeps_everything() {
        let reg = registry(&["status", "stash", "commit"]);
        let pool = narrow("stauts", &reg, &Settings::default(), NetMode::Auto);
        assert_eq!(texts(&pool), vec!["status", "stash", "commit"]);
    }

    #[test]
    fn test_narrow_with_net() {
        let reg = registry(&["status", "stash", "commit", "push"]);
        let settings = Settings {
            percent_range: 1.0,
            look_range: 20,
            net_threshold: 0,
        };
        let pool = narrow("stauts", &reg, &settings, NetMode::Auto);
        assert_eq!(texts(&pool), vec!["status"]);
    }

    #[test]
    fn test_narrow_empty_net_falls_back() {
        let reg = registry(&["push", "pull"]);
        let pool = narrow("zzzzzzzzzz", &reg, &Settings::default(), NetMode::Always);
        assert_eq!(texts(&pool), vec!["push", "pull"]);
    }

    #[test]
    fn test_narrow_never() {
        let reg = registry(&["push"]);
        let settings = Settings {
            net_threshold: 0,
            ..Settings::default()
        };
        assert_eq!(narrow("psuh", &reg, &settings, NetMode::Never).len(), 1);
    }

    #[test]
    fn test_suggest_ranks_and_limits() {
        let reg = registry(&["commit", "stash", "status"]);
        let pool: Vec<_> = reg.iter().collect();

        let best = suggest("stauts", &pool, &DEFAULT_SCORER, 1).unwrap();
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].candidate.comparison_text(), "status");
        assert_eq!(best[0].index, 2);

        let top = suggest("stauts", &pool, &DEFAULT_SCORER, 2).unwrap();
        let names: Vec<_> = top.iter().map(|s| s.candidate.comparison_text()).collect();
        assert_eq!(names, vec!["status", "stash"]);
    }

    #[test]
    fn test_suggest_empty_pool_is_no_match() {
        let err = suggest("push", &[], &DEFAULT_SCORER, 3).unwrap_err();
        assert!(matches!(
            err,
            JokerError::Core(joker_core::Error::NoMatch { .. })
        ));
    }

    #[test]
    fn test_format_suggestions_none() {
        assert_eq!(format_suggestions(&[]), None);
    }

    #[test]
    fn test_format_suggestions_single() {
        assert_eq!(
            format_suggestions(&["status"]),
            Some("Did you mean 'status'?".to_string())
        );
    }

    #[test]
    fn test_format_suggestions_multiple() {
        assert_eq!(
            format_suggestions(&["status", "stash"]),
            Some("Did you mean one of: 'status', 'stash'?".to_string())
        );
    }
}
