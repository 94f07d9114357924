//! 12-hour quarter-hour clock values and their 24-hour wire encoding.

use crate::error::TimeParseError;
use crate::utils::time::{format_time, parse_time};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hour on a 12-hour clock face, `1..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hour(u8);

impl Hour {
    pub fn new(hour: u8) -> Option<Self> {
        (1..=12).contains(&hour).then_some(Self(hour))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Hour {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HOUR_OPTIONS
            .contains(&value.as_str())
            .then(|| value.parse::<u8>().ok())
            .flatten()
            .and_then(Hour::new)
            .ok_or_else(|| format!("invalid hour: {value:?}"))
    }
}

impl From<Hour> for String {
    fn from(hour: Hour) -> Self {
        hour.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Minute {
    #[serde(rename = "00")]
    Zero,
    #[serde(rename = "15")]
    Fifteen,
    #[serde(rename = "30")]
    Thirty,
    #[serde(rename = "45")]
    FortyFive,
}

impl Minute {
    pub fn from_u32(minute: u32) -> Option<Self> {
        MINUTE_OPTIONS.into_iter().find(|m| m.as_u32() == minute)
    }

    pub fn as_u32(self) -> u32 {
        match self {
            Minute::Zero => 0,
            Minute::Fifteen => 15,
            Minute::Thirty => 30,
            Minute::FortyFive => 45,
        }
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.as_u32())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    Am,
    Pm,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => f.write_str("AM"),
            Period::Pm => f.write_str("PM"),
        }
    }
}

/// Hours in the order a form select lists them
pub const HOUR_OPTIONS: [&str; 12] = [
    "12", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11",
];

/// Minutes in the order a form select lists them
pub const MINUTE_OPTIONS: [Minute; 4] =
    [Minute::Zero, Minute::Fifteen, Minute::Thirty, Minute::FortyFive];

/// One of the 48 quarter-hour marks on a 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: Hour,
    pub minute: Minute,
    pub period: Period,
}

impl TimeOfDay {
    pub fn new(hour: Hour, minute: Minute, period: Period) -> Self {
        Self {
            hour,
            minute,
            period,
        }
    }

    /// Build from a 24-hour hour and minute
    pub fn from_24h(hour: u32, minute: u32) -> Result<Self, TimeParseError> {
        let (hour12, period) = match hour {
            0 => (12, Period::Am),
            1..=11 => (hour, Period::Am),
            12 => (12, Period::Pm),
            13..=23 => (hour - 12, Period::Pm),
            _ => return Err(TimeParseError::Hour(hour.to_string())),
        };
        let hour = u8::try_from(hour12)
            .ok()
            .and_then(Hour::new)
            .ok_or_else(|| TimeParseError::Hour(hour.to_string()))?;
        let minute = Minute::from_u32(minute)
            .ok_or_else(|| TimeParseError::Minute(format!("{:02}", minute)))?;

        Ok(Self::new(hour, minute, period))
    }

    /// Parse a wire `HH:MM:SS` string
    pub fn parse_24h(time_str: &str) -> Result<Self, TimeParseError> {
        let (hour, minute) = parse_time(time_str)?;
        Self::from_24h(hour, minute)
    }

    /// Hour on the 24-hour clock, `0..=23`
    pub fn hour_24(&self) -> u32 {
        let hour = u32::from(self.hour.get());
        match (self.period, hour) {
            (Period::Am, 12) => 0,
            (Period::Pm, h) if h != 12 => h + 12,
            (_, h) => h,
        }
    }

    /// Wire `HH:MM:SS` string
    pub fn to_24h(&self) -> String {
        format_time(self.hour_24(), self.minute.as_u32())
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        // hour_24 and minute are always in range
        NaiveTime::from_hms_opt(self.hour_24(), self.minute.as_u32(), 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}{}", self.hour, self.minute, self.period)
    }
}

impl TryFrom<NaiveTime> for TimeOfDay {
    type Error = TimeParseError;

    fn try_from(time: NaiveTime) -> Result<Self, Self::Error> {
        if time.second() != 0 || time.nanosecond() != 0 {
            return Err(TimeParseError::Seconds(format!("{:02}", time.second())));
        }
        Self::from_24h(time.hour(), time.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tod(hour: u8, minute: Minute, period: Period) -> TimeOfDay {
        TimeOfDay::new(Hour::new(hour).unwrap(), minute, period)
    }

    #[test]
    fn test_boundary_table() {
        assert_eq!(
            TimeOfDay::parse_24h("00:00:00"),
            Ok(tod(12, Minute::Zero, Period::Am))
        );
        assert_eq!(
            TimeOfDay::parse_24h("12:00:00"),
            Ok(tod(12, Minute::Zero, Period::Pm))
        );
        assert_eq!(
            TimeOfDay::parse_24h("13:15:00"),
            Ok(tod(1, Minute::Fifteen, Period::Pm))
        );
        assert_eq!(
            TimeOfDay::parse_24h("23:45:00"),
            Ok(tod(11, Minute::FortyFive, Period::Pm))
        );
        assert_eq!(
            TimeOfDay::parse_24h("11:30:00"),
            Ok(tod(11, Minute::Thirty, Period::Am))
        );
    }

    #[test]
    fn test_rejects_off_quarter_minute() {
        assert_eq!(
            TimeOfDay::parse_24h("11:37:00"),
            Err(TimeParseError::Minute("37".to_string()))
        );
    }

    #[test]
    fn test_all_quarter_hours_round_trip() {
        for hour in 0..24 {
            for minute in [0, 15, 30, 45] {
                let wire = format_time(hour, minute);
                let parsed = TimeOfDay::parse_24h(&wire).unwrap();
                assert_eq!(parsed.to_24h(), wire);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(tod(9, Minute::Thirty, Period::Am).to_string(), "9:30AM");
        assert_eq!(tod(12, Minute::Zero, Period::Pm).to_string(), "12:00PM");
        assert_eq!(tod(8, Minute::FortyFive, Period::Pm).to_string(), "8:45PM");
    }

    #[test]
    fn test_naive_time_bridge() {
        let time = NaiveTime::from_hms_opt(20, 45, 0).unwrap();
        let parsed = TimeOfDay::try_from(time).unwrap();
        assert_eq!(parsed, tod(8, Minute::FortyFive, Period::Pm));
        assert_eq!(parsed.to_naive_time(), time);

        let odd = NaiveTime::from_hms_opt(20, 45, 10).unwrap();
        assert!(TimeOfDay::try_from(odd).is_err());
    }

    #[test]
    fn test_serde_form_shape() {
        let json = serde_json::to_value(tod(9, Minute::Zero, Period::Am)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"hour": "9", "minute": "00", "period": "AM"})
        );
        let back: TimeOfDay = serde_json::from_value(json).unwrap();
        assert_eq!(back, tod(9, Minute::Zero, Period::Am));
    }

    #[test]
    fn test_options_cover_clock_face() {
        assert_eq!(HOUR_OPTIONS.len() * MINUTE_OPTIONS.len() * 2, 48);
        for hour in HOUR_OPTIONS {
            assert!(Hour::try_from(hour.to_string()).is_ok());
        }
        assert!(Hour::try_from("01".to_string()).is_err());
        assert!(Hour::try_from("+1".to_string()).is_err());
        assert!(Hour::try_from("13".to_string()).is_err());
    }
}
