use chrono::Weekday;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A day of the week, Monday first.
///
/// This is the one table mapping day names, slot indices and
/// abbreviations; everything else goes through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayName {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, DayName> =
        DayName::ALL.iter().map(|day| (day.as_str(), *day)).collect();
}

impl DayName {
    /// All days in slot order
    pub const ALL: [DayName; 7] = [
        DayName::Monday,
        DayName::Tuesday,
        DayName::Wednesday,
        DayName::Thursday,
        DayName::Friday,
        DayName::Saturday,
        DayName::Sunday,
    ];

    /// Slot index, 0 = Monday .. 6 = Sunday
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<DayName> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase wire name
    pub fn as_str(self) -> &'static str {
        match self {
            DayName::Monday => "monday",
            DayName::Tuesday => "tuesday",
            DayName::Wednesday => "wednesday",
            DayName::Thursday => "thursday",
            DayName::Friday => "friday",
            DayName::Saturday => "saturday",
            DayName::Sunday => "sunday",
        }
    }

    /// Three-letter English abbreviation used in summaries
    pub fn abbreviation(self) -> &'static str {
        match self {
            DayName::Monday => "Mon",
            DayName::Tuesday => "Tue",
            DayName::Wednesday => "Wed",
            DayName::Thursday => "Thu",
            DayName::Friday => "Fri",
            DayName::Saturday => "Sat",
            DayName::Sunday => "Sun",
        }
    }
}

impl fmt::Display for DayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a name outside `monday`..`sunday`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day name: {0:?}")]
pub struct UnknownDayName(pub String);

impl FromStr for DayName {
    type Err = UnknownDayName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| UnknownDayName(s.to_string()))
    }
}

impl From<Weekday> for DayName {
    fn from(weekday: Weekday) -> Self {
        // num_days_from_monday is always 0..=6
        Self::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl From<DayName> for Weekday {
    fn from(day: DayName) -> Self {
        match day {
            DayName::Monday => Weekday::Mon,
            DayName::Tuesday => Weekday::Tue,
            DayName::Wednesday => Weekday::Wed,
            DayName::Thursday => Weekday::Thu,
            DayName::Friday => Weekday::Fri,
            DayName::Saturday => Weekday::Sat,
            DayName::Sunday => Weekday::Sun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, day) in DayName::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(DayName::from_index(i), Some(*day));
        }
        assert_eq!(DayName::from_index(7), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("monday".parse::<DayName>(), Ok(DayName::Monday));
        assert_eq!("Sunday".parse::<DayName>(), Ok(DayName::Sunday));
        assert_eq!(
            "funday".parse::<DayName>(),
            Err(UnknownDayName("funday".to_string()))
        );
    }

    #[test]
    fn test_abbreviations() {
        let abbrs: Vec<&str> = DayName::ALL.iter().map(|d| d.abbreviation()).collect();
        assert_eq!(abbrs, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn test_chrono_weekday() {
        assert_eq!(DayName::from(Weekday::Mon), DayName::Monday);
        assert_eq!(DayName::from(Weekday::Sun), DayName::Sunday);
        assert_eq!(Weekday::from(DayName::Thursday), Weekday::Thu);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&DayName::Wednesday).unwrap();
        assert_eq!(json, "\"wednesday\"");
        let day: DayName = serde_json::from_str("\"friday\"").unwrap();
        assert_eq!(day, DayName::Friday);
    }
}
