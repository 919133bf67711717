use crate::commands::{Cli, metric_functions};
use crate::config::Config;
use crate::error::Result;
use crate::settings::{Settings, TuningArgs};
use crate::suggest::{NetMode, format_suggestions, narrow, suggest};
use clap::Args;
use joker_core::{ComparisonText, CompositeScorer, Metric};

#[derive(Debug, Args)]
#[command(visible_aliases = ["s"])]
pub struct SuggestCommand {
    /// The possibly mistyped command
    pub input: String,

    /// Metrics to average (default: length, positional, histogram)
    #[arg(short, long, value_enum)]
    pub metric: Vec<Metric>,

    /// Number of suggestions to show
    #[arg(short = 'n', long, default_value_t = 1)]
    pub top: usize,

    /// Always narrow candidates with the net first
    #[arg(long, conflicts_with = "no_net")]
    pub net: bool,

    /// Never use the net, score every known command
    #[arg(long)]
    pub no_net: bool,

    #[command(flatten)]
    pub tuning: TuningArgs,
}

impl SuggestCommand {
    pub fn run(&self, _cli: &Cli, config: Config) -> Result<()> {
        tracing::debug!("Suggesting a command for '{}'", self.input);
        let settings = Settings::resolve(&self.tuning, &config.settings)?;
        let metrics = metric_functions(&self.metric);
        let scorer = CompositeScorer::new(&metrics)?;

        let pool = narrow(&self.input, &config.commands, &settings, self.net_mode());
        let best = suggest(&self.input, &pool, &scorer, self.top)?;

        for scored in &best {
            tracing::debug!(
                "'{}' scored {:.2}",
                scored.candidate.comparison_text(),
                scored.score
            );
        }

        let names: Vec<_> = best
            .iter()
            .map(|scored| scored.candidate.comparison_text())
            .collect();
        if self.top <= 1 {
            println!("{}", console::style(names[0]).green().bold());
        } else if let Some(message) = format_suggestions(&names) {
            println!("{}", message);
        }
        Ok(())
    }

    fn net_mode(&self) -> NetMode {
        if self.net {
            NetMode::Always
        } else if self.no_net {
            NetMode::Never
        } else {
            NetMode::Auto
        }
    }
}
