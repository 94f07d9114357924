//! Weekly recurring time windows of a disruption.
//!
//! Three forms of the same schedule live here: the wire records
//! ([`DayOfWeekRecord`]), the editing slots ([`WeekSlots`]) and the
//! read-only summary string.

pub mod models;
pub mod slots;
pub mod summary;
pub mod time;

pub use models::DayOfWeekRecord;
pub use slots::{from_days_of_week, DayTimeRange, WeekSlots};
pub use summary::{describe_single_day, parse_days_and_times};
pub use time::{Hour, Minute, Period, TimeOfDay};
