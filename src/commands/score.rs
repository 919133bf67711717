use crate::commands::{Cli, metric_functions};
use crate::config::Config;
use crate::error::Result;
use clap::Args;
use joker_core::{ComparisonText, CompositeScorer, Metric, score_all_with};
use serde::Serialize;
use tabled::settings::{
    Alignment, Color, Format, Modify, Style,
    object::{Columns, Rows},
};
use tabled::{Table, Tabled};

#[derive(Debug, Args)]
pub struct ScoreCommand {
    /// The possibly mistyped command
    pub input: String,

    /// Metrics to average (default: length, positional, histogram)
    #[arg(short, long, value_enum)]
    pub metric: Vec<Metric>,

    /// Order rows by descending score instead of registry order
    #[arg(short, long)]
    pub sort: bool,

    /// Output as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    command: &'a str,
    score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Debug, Tabled)]
struct ScoreRow {
    #[tabled(rename = "Command")]
    command: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl ScoreCommand {
    pub fn run(&self, _cli: &Cli, config: Config) -> Result<()> {
        tracing::debug!("Scoring {} commands against '{}'", config.commands.len(), self.input);
        let metrics = metric_functions(&self.metric);
        let scorer = CompositeScorer::new(&metrics)?;
        let table = score_all_with(&self.input, &config.commands, &scorer)?;

        if table.is_empty() && !self.json {
            println!("No commands defined");
            return Ok(());
        }

        let entries = if self.sort {
            table.ranked()
        } else {
            table.iter().copied().collect()
        };
        if self.json {
            let rows: Vec<_> = entries
                .iter()
                .map(|scored| JsonRow {
                    command: scored.candidate.comparison_text(),
                    score: scored.score,
                    description: Config::description(scored.candidate),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        let rows: Vec<_> = entries
            .iter()
            .map(|scored| ScoreRow {
                command: scored.candidate.comparison_text().to_string(),
                score: format!("{:.2}", scored.score),
                description: Config::description(scored.candidate)
                    .unwrap_or("")
                    .to_string(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::empty());
        table.with(Modify::new(Columns::new(1..2)).with(Alignment::right()));
        if console::colors_enabled() {
            table.with(
                Modify::new(Rows::first())
                    .with(Color::FG_BRIGHT_BLUE)
                    .with(Format::content(|s| format!("\x1b[1m{}\x1b[0m", s))),
            );
        }
        println!("{}", table);
        Ok(())
    }
}
