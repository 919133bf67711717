//! Core of joker: similarity metrics, composite scoring, candidate selection
//! and the bucketed net used to narrow large pools.
//!
//! The intended pipeline narrows a pool with [`net::neighbor_words`] and then
//! picks from the narrowed set with [`select::select_best`]. Wiring the two
//! together is left to the caller.

pub mod candidate;
pub mod error;
pub mod metrics;
pub mod net;
pub mod score;
pub mod select;

pub use candidate::{Candidate, ComparisonText};
pub use error::{Degenerate, Error, Result};
pub use metrics::{Metric, MetricFn};
pub use net::{BucketIndex, PercentDifference, SortableScore, neighbor_words};
pub use score::{CompositeScorer, DEFAULT_SCORER, Scorer, composite_score, default_score};
pub use select::{ScoreTable, Scored, score_all, score_all_with, select_best, select_best_with};
