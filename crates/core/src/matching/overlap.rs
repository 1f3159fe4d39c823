//! Day and time-range overlap between two slots

use linkup_domain::{minutes_since_midnight, Slot};

/// `[start, end)` in minutes since midnight, only for well-formed slots.
pub fn slot_minutes(slot: &Slot) -> Option<(u32, u32)> {
    let start = minutes_since_midnight(&slot.start_time)?;
    let end = minutes_since_midnight(&slot.end_time)?;
    (end > start).then_some((start, end))
}

/// Whether two slots share a weekday and their half-open time ranges
/// intersect. Touching boundaries do not overlap, and a malformed or
/// inverted slot never overlaps anything.
pub fn slots_overlap(a: &Slot, b: &Slot) -> bool {
    if a.day != b.day {
        return false;
    }

    match (slot_minutes(a), slot_minutes(b)) {
        (Some((start_a, end_a)), Some((start_b, end_b))) => start_a < end_b && start_b < end_a,
        _ => false,
    }
}
