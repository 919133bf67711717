// Settings management for joker
//
// Tuning values are merged from, in increasing precedence:
// 1. Default values
// 2. The [settings] table of joker.toml
// 3. Environment variables and CLI flags (clap resolves these together)

use crate::config::SettingsConfig;
use crate::error::{JokerError, Result};
use clap::Args;

pub const DEFAULT_PERCENT_RANGE: f64 = 5.0;
pub const DEFAULT_LOOK_RANGE: i64 = 3;
pub const DEFAULT_NET_THRESHOLD: usize = 64;

/// Net tuning flags shared by the commands that use the net
#[derive(Debug, Clone, Default, Args)]
pub struct TuningArgs {
    /// Buckets searched on each side of the input's bucket
    #[arg(short, long, env = "JOKER_LOOK_RANGE")]
    pub look_range: Option<i64>,

    /// Largest accepted percent difference between bucket keys
    #[arg(short, long, env = "JOKER_PERCENT_RANGE")]
    pub percent_range: Option<f64>,

    /// Registry size above which the net narrows candidates before scoring
    #[arg(long, env = "JOKER_NET_THRESHOLD")]
    pub net_threshold: Option<usize>,
}

/// Fully resolved tuning values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub percent_range: f64,
    pub look_range: i64,
    pub net_threshold: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            percent_range: DEFAULT_PERCENT_RANGE,
            look_range: DEFAULT_LOOK_RANGE,
            net_threshold: DEFAULT_NET_THRESHOLD,
        }
    }
}

impl Settings {
    /// Merge CLI/env values over the config file over defaults
    pub fn resolve(args: &TuningArgs, file: &SettingsConfig) -> Result<Self> {
        let defaults = Self::default();
        let settings = Self {
            percent_range: args
                .percent_range
                .or(file.percent_range)
                .unwrap_or(defaults.percent_range),
            look_range: args
                .look_range
                .or(file.look_range)
                .unwrap_or(defaults.look_range),
            net_threshold: args
                .net_threshold
                .or(file.net_threshold)
                .unwrap_or(defaults.net_threshold),
        };

        if !(settings.percent_range.is_finite() && settings.percent_range >= 0.0) {
            return Err(JokerError::InvalidSetting {
                name: "percent_range",
                reason: format!("expected a non-negative number, got {}", settings.percent_range),
            });
        }
        if settings.look_range < 0 {
            return Err(JokerError::InvalidSetting {
                name: "look_range",
                reason: format!("expected a non-negative integer, got {}", settings.look_range),
            });
        }

        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings =
            Settings::resolve(&TuningArgs::default(), &SettingsConfig::default()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.percent_range, 5.0);
        assert_eq!(settings.look_range, 3);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = SettingsConfig {
            percent_range: Some(1.5),
            look_range: None,
            net_threshold: Some(10),
        };
        let settings = Settings::resolve(&TuningArgs::default(), &file).unwrap();
        assert_eq!(settings.percent_range, 1.5);
        assert_eq!(settings.look_range, DEFAULT_LOOK_RANGE);
        assert_eq!(settings.net_threshold, 10);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = SettingsConfig {
            percent_range: Some(1.5),
            look_range: Some(7),
            net_threshold: None,
        };
        let args = TuningArgs {
            look_range: Some(2),
            percent_range: None,
            net_threshold: Some(0),
        };
        let settings = Settings::resolve(&args, &file).unwrap();
        assert_eq!(settings.percent_range, 1.5);
        assert_eq!(settings.look_range, 2);
        assert_eq!(settings.net_threshold, 0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let args = TuningArgs {
            percent_range: Some(f64::NAN),
            ..Default::default()
        };
        let err = Settings::resolve(&args, &SettingsConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            JokerError::InvalidSetting {
                name: "percent_range",
                ..
            }
        ));

        let args = TuningArgs {
            look_range: Some(-1),
            ..Default::default()
        };
        assert!(Settings::resolve(&args, &SettingsConfig::default()).is_err());
    }
}
