use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum JokerError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("{message}")]
    #[diagnostic(
        code(joker::config::not_found),
        help("Create a joker.toml listing your commands, or pass --config <path>")
    )]
    ConfigNotFound { message: String },

    #[error("Failed to read configuration file {}", path.display())]
    #[diagnostic(
        code(joker::config::read_failed),
        help("Ensure the config file exists and you have read permissions")
    )]
    ConfigReadFailed {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in configuration file")]
    #[diagnostic(
        code(joker::config::invalid_toml),
        help("Check the TOML syntax in your joker.toml file")
    )]
    ConfigParseError {
        #[source]
        source: toml_edit::de::Error,
    },

    #[error("Configuration validation failed:\n  • {}", issues.join("\n  • "))]
    #[diagnostic(
        code(joker::config::validation_failed),
        help("Review the errors above and update your joker.toml file")
    )]
    ConfigValidationFailed { issues: Vec<String> },

    /// Invalid tuning value given on the command line or in the environment
    #[error("Invalid setting '{name}': {reason}")]
    #[diagnostic(code(joker::settings::invalid))]
    InvalidSetting { name: &'static str, reason: String },

    // ========================================================================
    // Matching Errors
    // ========================================================================
    #[error(transparent)]
    #[diagnostic(transparent)]
    Core(#[from] joker_core::Error),

    // ========================================================================
    // Generic I/O Errors (fallback)
    // ========================================================================
    #[error("I/O error: {0}")]
    #[diagnostic(code(joker::io::error))]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(joker::json::error))]
    Json(String),
}

impl From<serde_json::Error> for JokerError {
    fn from(err: serde_json::Error) -> Self {
        JokerError::Json(err.to_string())
    }
}

impl From<toml_edit::de::Error> for JokerError {
    fn from(source: toml_edit::de::Error) -> Self {
        JokerError::ConfigParseError { source }
    }
}

pub type Result<T> = std::result::Result<T, JokerError>;
