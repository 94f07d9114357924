//! Human-readable summaries of a weekly schedule.
//!
//! Picks the shortest of three shapes: one range shared by a run of
//! consecutive days ("Daily"), a single span from a start on the first day
//! to an end on the last ("Ends"), or one clause per day.

use super::models::DayOfWeekRecord;
use super::slots::WeekSlots;
use super::time::TimeOfDay;
use std::collections::HashSet;
use tracing::debug;

const START_OF_SERVICE: &str = "Start of service";
const END_OF_SERVICE: &str = "End of service";

fn describe_time(time: Option<&str>, open_ended: &str) -> String {
    time.and_then(|raw| TimeOfDay::parse_24h(raw).ok())
        .map(|t| t.to_string())
        .unwrap_or_else(|| open_ended.to_string())
}

fn describe_start(record: &DayOfWeekRecord) -> String {
    describe_time(record.start_time.as_deref(), START_OF_SERVICE)
}

fn describe_end(record: &DayOfWeekRecord) -> String {
    describe_time(record.end_time.as_deref(), END_OF_SERVICE)
}

/// Format one day as `"Mon, 9:00AM - End of service"`
pub fn describe_single_day(record: &DayOfWeekRecord) -> String {
    format!(
        "{}, {} - {}",
        record.day_name.abbreviation(),
        describe_start(record),
        describe_end(record)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    Single,
    Daily,
    Ends,
    Other,
}

fn is_consecutive(sorted: &[&DayOfWeekRecord]) -> bool {
    sorted
        .windows(2)
        .all(|pair| pair[1].day_name.index() == pair[0].day_name.index() + 1)
}

fn classify(sorted: &[&DayOfWeekRecord]) -> Pattern {
    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Pattern::Other,
    };
    if sorted.len() == 1 {
        return Pattern::Single;
    }
    if !is_consecutive(sorted) {
        return Pattern::Other;
    }

    // Absent times count as a value of their own
    let starts: HashSet<Option<&str>> = sorted.iter().map(|d| d.start_time.as_deref()).collect();
    let ends: HashSet<Option<&str>> = sorted.iter().map(|d| d.end_time.as_deref()).collect();
    let distinct = starts.len() + ends.len();

    if starts.len() <= 1 && ends.len() <= 1 && distinct == 2 {
        return Pattern::Daily;
    }

    let first_opens = (first.start_time.is_some() || first.end_time.is_some())
        && first.end_time.is_none();
    // Keyed on the last day's end alone, not on first start == last end
    let expected = if last.end_time.is_none() { 3 } else { 4 };
    if first_opens && last.start_time.is_none() && distinct == expected {
        return Pattern::Ends;
    }

    Pattern::Other
}

/// Summarize a set of day records, e.g. `"Wed - Fri, 11:30AM - 8:45PM"`.
///
/// Records are sorted Monday first before the shape is chosen, so input
/// order does not matter. The week does not wrap: Saturday, Sunday and
/// Monday are not consecutive.
pub fn parse_days_and_times(records: &[DayOfWeekRecord]) -> String {
    let mut sorted: Vec<&DayOfWeekRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.day_name.index());

    let pattern = classify(&sorted);
    debug!("Summarizing {} days as {:?}", sorted.len(), pattern);

    match (pattern, sorted.first(), sorted.last()) {
        (Pattern::Single, Some(day), _) => describe_single_day(day),
        (Pattern::Daily, Some(first), Some(last)) => format!(
            "{} - {}, {} - {}",
            first.day_name.abbreviation(),
            last.day_name.abbreviation(),
            describe_start(first),
            describe_end(last)
        ),
        (Pattern::Ends, Some(first), Some(last)) => format!(
            "{} {} - {} {}",
            first.day_name.abbreviation(),
            describe_start(first),
            last.day_name.abbreviation(),
            describe_end(last)
        ),
        _ => sorted
            .iter()
            .map(|record| describe_single_day(record))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

impl WeekSlots {
    /// Summary of the selected days, as shown on a read-only page
    pub fn summary(&self) -> String {
        parse_days_and_times(&self.to_days_of_week())
    }
}
