use crate::utils::days::DayName;
use serde::{Deserialize, Serialize};

/// One weekday's override in a disruption's schedule, as stored on the wire.
///
/// Absent times mean the range is open-ended (start or end of service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOfWeekRecord {
    #[serde(alias = "dayName")]
    pub day_name: DayName,
    #[serde(default, alias = "startTime", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, alias = "endTime", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl DayOfWeekRecord {
    /// Create a full-day record for a day
    pub fn new(day_name: DayName) -> Self {
        Self {
            day_name,
            start_time: None,
            end_time: None,
        }
    }

    pub fn with_start(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    pub fn with_end(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }
}
