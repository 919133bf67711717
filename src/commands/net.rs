use crate::commands::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::settings::{Settings, TuningArgs};
use clap::Args;
use joker_core::ComparisonText;
use joker_core::net::{self, CodepointSum, RelativePercentDifference, SortableScore};

#[derive(Debug, Args)]
pub struct NetCommand {
    /// Word whose neighbourhood to show
    pub word: String,

    #[command(flatten)]
    pub tuning: TuningArgs,
}

impl NetCommand {
    pub fn run(&self, _cli: &Cli, config: Config) -> Result<()> {
        let settings = Settings::resolve(&self.tuning, &config.settings)?;
        let index = net::build_index(
            config.commands.iter().map(|c| c.comparison_text()),
            &CodepointSum,
        );
        tracing::debug!(
            "'{}' falls in bucket {} of {} buckets",
            self.word,
            CodepointSum.bucket_key(&self.word),
            index.len()
        );

        let words = net::neighbor_words(
            &self.word,
            &index,
            settings.percent_range,
            settings.look_range,
            &CodepointSum,
            &RelativePercentDifference,
        );
        for word in words {
            println!("{}", word);
        }
        Ok(())
    }
}
