//! Edit-boundary validation for slots
//!
//! Runs before normalization on the write path. Unlike the normalizer it
//! rejects input the user can correct, most importantly inverted ranges.

use linkup_domain::{minutes_since_midnight, LinkupError, RawSlot, Result};

use super::normalizer::SlotDefaults;

/// Validate the time range a raw slot will normalize to.
///
/// Explicit times must parse as `HH:MM`; missing times take the defaults
/// table value. The effective end must be strictly after the start.
///
/// # Errors
/// Returns `LinkupError::InvalidInput` for unparsable times or when
/// `end <= start`.
pub fn validate_raw_slot(raw: &RawSlot, defaults: &SlotDefaults) -> Result<()> {
    let start = effective_minutes("startTime", raw.start_time.as_deref(), &defaults.start_time)?;
    let end = effective_minutes("endTime", raw.end_time.as_deref(), &defaults.end_time)?;

    if end <= start {
        return Err(LinkupError::InvalidInput(format!(
            "endTime must be after startTime (got {} - {})",
            raw.start_time.as_deref().unwrap_or(&defaults.start_time),
            raw.end_time.as_deref().unwrap_or(&defaults.end_time),
        )));
    }

    Ok(())
}

fn effective_minutes(field: &str, value: Option<&str>, default: &str) -> Result<u32> {
    let value = value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default);
    minutes_since_midnight(value).ok_or_else(|| {
        LinkupError::InvalidInput(format!("{field} must be a 24-hour HH:MM time, got {value:?}"))
    })
}
