use crate::env;
use crate::error::{JokerError, Result};
use joker_core::{Candidate, ComparisonText};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// The registry of known commands, read from `joker.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Known commands; bare strings or tables with a `text` key
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<Candidate>,

    /// Tuning values for the net
    #[serde(default)]
    pub settings: SettingsConfig,

    /// File this configuration was read from (not serialized)
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// `[settings]` table; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_range: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub look_range: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_threshold: Option<usize>,
}

impl Config {
    /// Load from an explicit path when given, otherwise search for `joker.toml`
    pub fn load_smart(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let path = env::expand_path(&path.to_string_lossy());
            // Resolve relative paths against current directory first
            let resolved = if path.is_relative() {
                env::current_dir()?.join(path)
            } else {
                path
            };
            return Self::load(resolved);
        }

        let current_dir = env::current_dir()?;
        let global = env::JOKER_CONFIG_DIR.join(env::CONFIG_FILE_NAME);
        match Self::find_upward(&current_dir).or_else(|| global.is_file().then_some(global)) {
            Some(path) => Self::load(path),
            None => Err(JokerError::ConfigNotFound {
                message: format!(
                    "No {} found in {} or any parent directory, nor in {}",
                    env::CONFIG_FILE_NAME,
                    current_dir.display(),
                    env::JOKER_CONFIG_DIR.display()
                ),
            }),
        }
    }

    /// Load and validate configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| JokerError::ConfigReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::parse(&content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml_edit::de::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Nearest `joker.toml` at or above `start`
    pub fn find_upward(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(env::CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Reject entries that cannot be scored and out-of-range settings
    pub fn validate(&self) -> Result<()> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for (i, command) in self.commands.iter().enumerate() {
            let text = command.comparison_text();
            if text.is_empty() {
                issues.push(format!("commands[{}] has empty text", i));
            } else if !seen.insert(text) {
                tracing::warn!("Command '{}' is listed more than once; the first entry wins", text);
            }
        }

        if let Some(percent_range) = self.settings.percent_range
            && !(percent_range.is_finite() && percent_range >= 0.0)
        {
            issues.push(format!(
                "settings.percent_range must be a non-negative number, got {}",
                percent_range
            ));
        }
        if let Some(look_range) = self.settings.look_range
            && look_range < 0
        {
            issues.push(format!(
                "settings.look_range must not be negative, got {}",
                look_range
            ));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(JokerError::ConfigValidationFailed { issues })
        }
    }

    /// Human-readable description of a command, if its record carries one
    pub fn description(candidate: &Candidate) -> Option<&str> {
        candidate
            .payload()
            .and_then(|payload| payload.get("description"))
            .and_then(|value| value.as_str())
    }
}
