use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use clap::{Parser, Subcommand};
use joker_core::{Metric, MetricFn};

pub mod list;
pub mod net;
pub mod score;
pub mod suggest;
pub mod version;

#[derive(Parser)]
#[command(name = "joker")]
#[command(about = "Suggests the command you meant to type", long_about = None)]
#[command(version)]
#[command(help_expected = true)]
pub struct Cli {
    /// Path to the command registry (default: joker.toml, searches parent directories)
    #[arg(short, long, global = true, env = "JOKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the known commands and their bucket keys
    List(list::ListCommand),

    /// Show the net of known commands around a word
    Net(net::NetCommand),

    /// Score every known command against an input
    Score(score::ScoreCommand),

    /// Suggest the known command closest to a mistyped one
    Suggest(suggest::SuggestCommand),

    /// Show version information
    Version(version::VersionCommand),
}

impl Commands {
    pub fn run(&self, cli: &Cli) -> Result<()> {
        match self {
            // Commands that don't need config
            Commands::Version(cmd) => cmd.run(cli),

            // Commands that need config
            Commands::List(cmd) => cmd.run(cli, self.load_config(cli)?),
            Commands::Net(cmd) => cmd.run(cli, self.load_config(cli)?),
            Commands::Score(cmd) => cmd.run(cli, self.load_config(cli)?),
            Commands::Suggest(cmd) => cmd.run(cli, self.load_config(cli)?),
        }
    }

    fn load_config(&self, cli: &Cli) -> Result<Config> {
        Config::load_smart(cli.config.as_deref())
    }
}

/// Metric functions for the `--metric` selection, defaulting to the standard composite
pub(crate) fn metric_functions(selected: &[Metric]) -> Vec<MetricFn> {
    let metrics = if selected.is_empty() {
        &Metric::DEFAULTS[..]
    } else {
        selected
    };
    metrics.iter().map(|m| m.function()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_suggest() {
        let cli = Cli::try_parse_from([
            "joker", "suggest", "stauts", "-m", "length", "-m", "jaro-winkler", "--top", "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Suggest(cmd) => {
                assert_eq!(cmd.input, "stauts");
                assert_eq!(cmd.metric, vec![Metric::Length, Metric::JaroWinkler]);
                assert_eq!(cmd.top, 2);
            }
            _ => panic!("expected suggest"),
        }
    }

    #[test]
    fn test_parse_aliases() {
        let cli = Cli::try_parse_from(["joker", "s", "psuh"]).unwrap();
        assert!(matches!(cli.command, Commands::Suggest(_)));
        let cli = Cli::try_parse_from(["joker", "ls"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_metric_functions_default() {
        assert_eq!(metric_functions(&[]).len(), 3);
        assert_eq!(metric_functions(&[Metric::Levenshtein]).len(), 1);
    }
}
