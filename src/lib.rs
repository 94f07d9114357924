//! Day-of-week and time-range model for Arrow transit disruptions.

pub mod commands;
pub mod config;
pub mod error;
pub mod schedule;
pub mod startup;
pub mod utils;

pub use schedule::{
    describe_single_day, from_days_of_week, parse_days_and_times, DayOfWeekRecord, DayTimeRange,
    TimeOfDay, WeekSlots,
};
pub use utils::days::DayName;
