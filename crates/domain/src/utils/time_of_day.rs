//! Wall-clock `HH:MM` helpers
//!
//! Slots store their bounds as zero-padded 24-hour strings. These helpers are
//! the only place that parses that representation.

/// Minutes in one day; slot bounds never reach it.
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Split a `H:M` / `HH:MM` string into validated hour and minute components.
fn parse_components(value: &str) -> Option<(u32, u32)> {
    let (hour, minute) = value.trim().split_once(':')?;
    let hour = hour.trim();
    let minute = minute.trim();

    if hour.is_empty() || minute.is_empty() || hour.len() > 2 || minute.len() > 2 {
        return None;
    }
    if !hour.bytes().all(|b| b.is_ascii_digit()) || !minute.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    (minute < 60 && hour * 60 + minute < MINUTES_PER_DAY).then_some((hour, minute))
}

/// Convert a time-of-day string to minutes since midnight.
///
/// Accepts unpadded components (`"9:5"`). Returns `None` for anything that
/// is not a valid 24-hour time.
pub fn minutes_since_midnight(value: &str) -> Option<u32> {
    parse_components(value).map(|(hour, minute)| hour * 60 + minute)
}

/// Zero-pad a time-of-day string (`"9:5"` -> `"09:05"`).
pub fn pad_time(value: &str) -> Option<String> {
    parse_components(value).map(|(hour, minute)| format!("{hour:02}:{minute:02}"))
}
