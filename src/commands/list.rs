use crate::commands::Cli;
use crate::config::Config;
use crate::error::Result;
use clap::Args;
use joker_core::ComparisonText;
use joker_core::net::{CodepointSum, SortableScore};
use tabled::settings::{
    Color, Format, Modify, Style, Width,
    object::{Columns, Rows},
};
use tabled::{Table, Tabled};

#[derive(Debug, Args)]
#[command(visible_aliases = ["ls"])]
pub struct ListCommand {
    /// Show full descriptions without wrapping
    #[arg(short, long)]
    pub full: bool,

    /// Output command names only (one per line)
    #[arg(long, hide = true)]
    pub complete: bool,
}

#[derive(Debug, Tabled)]
struct CommandRow {
    #[tabled(rename = "Command")]
    command: String,
    #[tabled(rename = "Bucket")]
    bucket: i64,
    #[tabled(rename = "Description")]
    description: String,
}

impl ListCommand {
    pub fn run(&self, _cli: &Cli, config: Config) -> Result<()> {
        if let Some(source) = &config.source {
            tracing::debug!("Listing commands from {}", source.display());
        }

        if config.commands.is_empty() {
            if !self.complete {
                println!("No commands defined");
            }
            return Ok(());
        }

        // Handle completion mode
        if self.complete {
            for command in &config.commands {
                println!("{}", command.comparison_text());
            }
            return Ok(());
        }

        let rows: Vec<_> = config
            .commands
            .iter()
            .map(|command| CommandRow {
                command: command.comparison_text().to_string(),
                bucket: CodepointSum.bucket_key(command.comparison_text()),
                description: Config::description(command).unwrap_or("").to_string(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::empty());

        // Apply colors only if enabled
        if console::colors_enabled() {
            table.with(
                Modify::new(Rows::first())
                    .with(Color::FG_BRIGHT_BLUE)
                    .with(Format::content(|s| format!("\x1b[1m{}\x1b[0m", s))),
            );
        }

        if !self.full {
            table.with(Modify::new(Columns::last()).with(Width::wrap(60)));
        }

        println!("{}", table);
        Ok(())
    }
}
