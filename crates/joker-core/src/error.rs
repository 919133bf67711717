use miette::Diagnostic;
use strum::Display;
use thiserror::Error;

/// Why an input was rejected before any arithmetic happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Degenerate {
    /// The model string handed to a metric was empty.
    #[strum(to_string = "the original string is empty")]
    EmptyOriginal,
    /// The aggregator was given no metrics to average.
    #[strum(to_string = "no metrics were supplied")]
    NoMetrics,
}

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("Cannot score degenerate input: {reason}")]
    #[diagnostic(
        code(joker::score::degenerate_input),
        help("Known commands must be non-empty and at least one metric must be selected")
    )]
    DegenerateInput { reason: Degenerate },

    #[error("No known command resembles '{input}'")]
    #[diagnostic(
        code(joker::select::no_match),
        help("Run 'joker list' to see the commands joker knows about")
    )]
    NoMatch { input: String },
}

impl Error {
    pub fn empty_original() -> Self {
        Error::DegenerateInput {
            reason: Degenerate::EmptyOriginal,
        }
    }

    pub fn no_metrics() -> Self {
        Error::DegenerateInput {
            reason: Degenerate::NoMetrics,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
