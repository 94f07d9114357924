use super::{CommandContext, CommandResult};
use crate::config::OutputFormat;
use crate::schedule::{parse_days_and_times, DayOfWeekRecord};
use serde_json::json;
use std::io::Write;

/// Print the human-readable summary of the records
pub fn run(ctx: &CommandContext, records: &[DayOfWeekRecord], out: &mut impl Write) -> CommandResult {
    let summary = parse_days_and_times(records);

    match ctx.output() {
        OutputFormat::Text => writeln!(out, "{}", summary)?,
        OutputFormat::Json => writeln!(out, "{}", json!({ "summary": summary }))?,
    }

    Ok(())
}
