use crate::config::{Config, OutputFormat};
use crate::error::AppResult;
use crate::schedule::DayOfWeekRecord;
use crate::utils::days::DayName;
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

// Export submodules
pub mod normalize;
pub mod slots;
pub mod summarize;

/// Shared context for all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn output(&self) -> OutputFormat {
        self.config.output
    }
}

/// Type alias for command result
pub type CommandResult = AppResult<()>;

/// Summarize, inspect or normalize a disruption's day-of-week records.
///
/// Records are read as a JSON array from FILE, or stdin when FILE is omitted.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "arrow_days", version)]
pub struct Command {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Action {
    /// Print the human-readable summary
    Summarize { input: Option<PathBuf> },
    /// Print the seven editing slots
    Slots {
        input: Option<PathBuf>,
        /// Only print this day's slot
        #[arg(long)]
        day: Option<DayName>,
    },
    /// Print canonical wire JSON
    Normalize { input: Option<PathBuf> },
}

impl Action {
    fn input(&self) -> Option<&PathBuf> {
        match self {
            Action::Summarize { input }
            | Action::Slots { input, .. }
            | Action::Normalize { input } => input.as_ref(),
        }
    }
}

impl Command {
    /// Read the input records and run the command, writing to `out`
    pub fn run(&self, ctx: &CommandContext, out: &mut impl Write) -> CommandResult {
        let raw = match self.action.input() {
            Some(path) => {
                debug!("Reading records from {}", path.display());
                fs::read_to_string(path)?
            }
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        let records = read_records(&raw)?;
        info!("Running {:?} on {} records", self.action, records.len());

        match &self.action {
            Action::Summarize { .. } => summarize::run(ctx, &records, out),
            Action::Slots { day, .. } => slots::run(ctx, &records, *day, out),
            Action::Normalize { .. } => normalize::run(ctx, &records, out),
        }
    }
}

/// Parse a JSON array of day-of-week records
pub fn read_records(raw: &str) -> AppResult<Vec<DayOfWeekRecord>> {
    Ok(serde_json::from_str(raw)?)
}
