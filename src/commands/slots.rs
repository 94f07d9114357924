use super::{CommandContext, CommandResult};
use crate::config::OutputFormat;
use crate::schedule::{from_days_of_week, DayOfWeekRecord, DayTimeRange, WeekSlots};
use crate::utils::days::DayName;
use std::io::Write;

fn format_slot(range: Option<&DayTimeRange>) -> String {
    match range {
        Some(range) => format!(
            "{} - {}",
            range
                .start
                .map(|t| t.to_string())
                .unwrap_or_else(|| "Start of service".to_string()),
            range
                .end
                .map(|t| t.to_string())
                .unwrap_or_else(|| "End of service".to_string())
        ),
        None => "-".to_string(),
    }
}

/// Render the editing slots, one line per day; `only` keeps a single day
pub fn render(slots: &WeekSlots, only: Option<DayName>) -> String {
    slots
        .iter()
        .filter(|(day, _)| only.map_or(true, |only| only == *day))
        .map(|(day, range)| format!("{}: {}", day.abbreviation(), format_slot(range)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the records as week slots
pub fn run(
    ctx: &CommandContext,
    records: &[DayOfWeekRecord],
    only: Option<DayName>,
    out: &mut impl Write,
) -> CommandResult {
    let slots = from_days_of_week(records)?;

    match ctx.output() {
        OutputFormat::Text => writeln!(out, "{}", render(&slots, only))?,
        OutputFormat::Json => match only {
            Some(day) => writeln!(out, "{}", serde_json::to_string_pretty(&slots.get(day))?)?,
            None => writeln!(out, "{}", serde_json::to_string_pretty(&slots)?)?,
        },
    }

    Ok(())
}
