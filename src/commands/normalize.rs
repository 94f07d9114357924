use super::{CommandContext, CommandResult};
use crate::schedule::{from_days_of_week, DayOfWeekRecord};
use std::io::Write;
use tracing::debug;

/// Re-encode the records through week slots: Monday first, snake_case,
/// quarter-hour times only. Always JSON.
pub fn run(_ctx: &CommandContext, records: &[DayOfWeekRecord], out: &mut impl Write) -> CommandResult {
    let slots = from_days_of_week(records)?;
    let normalized = slots.to_days_of_week();
    debug!("Normalized {} records into {}", records.len(), normalized.len());

    writeln!(out, "{}", serde_json::to_string_pretty(&normalized)?)?;
    Ok(())
}
