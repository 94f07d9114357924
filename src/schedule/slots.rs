use super::models::DayOfWeekRecord;
use super::time::TimeOfDay;
use crate::error::{ParseError, TimeField};
use crate::utils::days::DayName;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Start and end of one selected day; `None` means start or end of service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTimeRange {
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
}

impl DayTimeRange {
    pub fn new(start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> Self {
        Self { start, end }
    }
}

/// Editing form of a weekly schedule: one slot per day, Monday first.
///
/// An empty slot means the day is not part of the schedule at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSlots([Option<DayTimeRange>; 7]);

impl WeekSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: DayName) -> Option<&DayTimeRange> {
        self.0[day.index()].as_ref()
    }

    pub fn set(&mut self, day: DayName, range: Option<DayTimeRange>) {
        self.0[day.index()] = range;
    }

    pub fn is_day_selected(&self, day: DayName) -> bool {
        self.0[day.index()].is_some()
    }

    /// Turn a day on (as a full service day) or off
    pub fn toggle_day(&mut self, day: DayName) {
        let slot = &mut self.0[day.index()];
        *slot = match slot {
            Some(_) => None,
            None => Some(DayTimeRange::default()),
        };
    }

    /// Change a selected day's start; returns false if the day is off
    pub fn set_start(&mut self, day: DayName, start: Option<TimeOfDay>) -> bool {
        match self.0[day.index()].as_mut() {
            Some(range) => {
                range.start = start;
                true
            }
            None => false,
        }
    }

    /// Change a selected day's end; returns false if the day is off
    pub fn set_end(&mut self, day: DayName, end: Option<TimeOfDay>) -> bool {
        match self.0[day.index()].as_mut() {
            Some(range) => {
                range.end = end;
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// All seven slots paired with their day
    pub fn iter(&self) -> impl Iterator<Item = (DayName, Option<&DayTimeRange>)> + '_ {
        DayName::ALL
            .iter()
            .zip(self.0.iter())
            .map(|(day, slot)| (*day, slot.as_ref()))
    }

    /// Wire records for every selected day, Monday first
    pub fn to_days_of_week(&self) -> Vec<DayOfWeekRecord> {
        self.iter()
            .filter_map(|(day, slot)| {
                slot.map(|range| DayOfWeekRecord {
                    day_name: day,
                    start_time: range.start.map(|t| t.to_24h()),
                    end_time: range.end.map(|t| t.to_24h()),
                })
            })
            .collect()
    }
}

fn parse_field(
    day: DayName,
    field: TimeField,
    value: Option<&str>,
) -> Result<Option<TimeOfDay>, ParseError> {
    value
        .map(|raw| {
            TimeOfDay::parse_24h(raw).map_err(|source| {
                warn!("Rejecting {} {:?} on {}: {}", field, raw, day, source);
                ParseError { day, field, source }
            })
        })
        .transpose()
}

/// Build week slots from wire records.
///
/// Fails as a whole if any record carries a malformed time. Days not in
/// `records` stay empty.
pub fn from_days_of_week(records: &[DayOfWeekRecord]) -> Result<WeekSlots, ParseError> {
    let mut slots = WeekSlots::new();

    for record in records {
        let day = record.day_name;
        let start = parse_field(day, TimeField::Start, record.start_time.as_deref())?;
        let end = parse_field(day, TimeField::End, record.end_time.as_deref())?;
        slots.set(day, Some(DayTimeRange::new(start, end)));
    }

    debug!("Converted {} day records into week slots", records.len());
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimeParseError;
    use crate::schedule::time::{Hour, Minute, Period};
    use pretty_assertions::assert_eq;

    fn tod(hour: u8, minute: Minute, period: Period) -> TimeOfDay {
        TimeOfDay::new(Hour::new(hour).unwrap(), minute, period)
    }

    #[test]
    fn test_from_days_of_week() {
        let records = vec![
            DayOfWeekRecord::new(DayName::Friday).with_start("20:45:00"),
            DayOfWeekRecord::new(DayName::Monday),
            DayOfWeekRecord::new(DayName::Sunday).with_end("00:00:00"),
        ];
        let slots = from_days_of_week(&records).unwrap();

        assert_eq!(slots.get(DayName::Monday), Some(&DayTimeRange::default()));
        assert_eq!(
            slots.get(DayName::Friday),
            Some(&DayTimeRange::new(
                Some(tod(8, Minute::FortyFive, Period::Pm)),
                None
            ))
        );
        assert_eq!(
            slots.get(DayName::Sunday),
            Some(&DayTimeRange::new(None, Some(tod(12, Minute::Zero, Period::Am))))
        );
        assert_eq!(slots.get(DayName::Tuesday), None);
        assert_eq!(slots.get(DayName::Saturday), None);
    }

    #[test]
    fn test_one_bad_time_fails_everything() {
        let records = vec![
            DayOfWeekRecord::new(DayName::Monday).with_start("09:00:00"),
            DayOfWeekRecord::new(DayName::Tuesday).with_start("11:37:00"),
        ];
        assert_eq!(
            from_days_of_week(&records),
            Err(ParseError {
                day: DayName::Tuesday,
                field: TimeField::Start,
                source: TimeParseError::Minute("37".to_string()),
            })
        );
    }

    #[test]
    fn test_signed_hour_is_not_rewritten() {
        let records = vec![DayOfWeekRecord::new(DayName::Monday).with_start("+9:00:00")];
        assert_eq!(
            from_days_of_week(&records),
            Err(ParseError {
                day: DayName::Monday,
                field: TimeField::Start,
                source: TimeParseError::Shape("+9:00:00".to_string()),
            })
        );
    }

    #[test]
    fn test_bad_end_time_reported() {
        let records = vec![DayOfWeekRecord::new(DayName::Wednesday).with_end("10:00:30")];
        let err = from_days_of_week(&records).unwrap_err();
        assert_eq!(err.field, TimeField::End);
        assert_eq!(err.source, TimeParseError::Seconds("30".to_string()));
    }

    #[test]
    fn test_to_days_of_week_is_monday_first() {
        let mut slots = WeekSlots::new();
        slots.set(
            DayName::Sunday,
            Some(DayTimeRange::new(None, Some(tod(5, Minute::Zero, Period::Am)))),
        );
        slots.set(
            DayName::Tuesday,
            Some(DayTimeRange::new(Some(tod(12, Minute::Thirty, Period::Pm)), None)),
        );

        assert_eq!(
            slots.to_days_of_week(),
            vec![
                DayOfWeekRecord::new(DayName::Tuesday).with_start("12:30:00"),
                DayOfWeekRecord::new(DayName::Sunday).with_end("05:00:00"),
            ]
        );
    }

    #[test]
    fn test_toggle_and_edit() {
        let mut slots = WeekSlots::new();
        assert!(slots.is_empty());
        assert!(!slots.set_start(DayName::Monday, Some(tod(9, Minute::Zero, Period::Am))));

        slots.toggle_day(DayName::Monday);
        assert!(slots.is_day_selected(DayName::Monday));
        assert!(slots.set_start(DayName::Monday, Some(tod(9, Minute::Zero, Period::Am))));
        assert!(slots.set_end(DayName::Monday, Some(tod(5, Minute::Fifteen, Period::Pm))));
        assert_eq!(
            slots.to_days_of_week(),
            vec![DayOfWeekRecord::new(DayName::Monday)
                .with_start("09:00:00")
                .with_end("17:15:00")]
        );

        slots.toggle_day(DayName::Monday);
        assert!(slots.is_empty());
    }
}
