pub mod days;
pub mod time;
