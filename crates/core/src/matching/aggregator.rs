//! Match aggregation
//!
//! Runs every (my slot, counterpart slot) pair through the overlap and
//! proximity checks and groups the survivors by counterpart.

use std::collections::HashMap;

use linkup_domain::{MatchGroup, Overlap, Profile, Slot};

use super::overlap::{slot_minutes, slots_overlap};
use super::proximity::check_proximity;

/// Compute match groups for `me` against a snapshot of other profiles.
///
/// - Counterparts that are not looking, and `me` itself, are skipped.
/// - Groups appear in first-encountered order.
/// - Overlaps inside a group are ordered by weekday (Monday first), then by
///   my slot's start time, then by the counterpart slot's start time.
///
/// Pure and idempotent: the same snapshot always yields the same output.
pub fn compute_matches(me: &Profile, others: &[Profile]) -> Vec<MatchGroup> {
    if me.slots.is_empty() {
        return Vec::new();
    }

    let candidates: Vec<&Profile> = others
        .iter()
        .filter(|other| other.is_looking && other.user_id != me.user_id)
        .collect();

    let mut groups: Vec<MatchGroup> = Vec::new();
    let mut index_by_user: HashMap<&str, usize> = HashMap::new();

    for my_slot in &me.slots {
        for other in &candidates {
            for other_slot in &other.slots {
                if !slots_overlap(my_slot, other_slot) {
                    continue;
                }

                let proximity = check_proximity(&my_slot.location, &other_slot.location);
                if !proximity.qualifies() {
                    continue;
                }

                let overlap = Overlap {
                    my_slot: my_slot.clone(),
                    other_slot: other_slot.clone(),
                    distance_miles: proximity.distance_miles(),
                };

                let index = *index_by_user.entry(other.user_id.as_str()).or_insert_with(|| {
                    groups.push(MatchGroup {
                        user_id: other.user_id.clone(),
                        owner: other.owner.clone(),
                        overlaps: Vec::new(),
                    });
                    groups.len() - 1
                });
                groups[index].overlaps.push(overlap);
            }
        }
    }

    for group in &mut groups {
        group.overlaps.sort_by_key(overlap_sort_key);
    }

    groups
}

fn overlap_sort_key(overlap: &Overlap) -> (u8, u32, u32) {
    (
        overlap.my_slot.day.sort_index(),
        start_minutes(&overlap.my_slot),
        start_minutes(&overlap.other_slot),
    )
}

fn start_minutes(slot: &Slot) -> u32 {
    slot_minutes(slot).map_or(0, |(start, _)| start)
}
