//! Domain utilities

pub mod time_of_day;

pub use time_of_day::{minutes_since_midnight, pad_time};
