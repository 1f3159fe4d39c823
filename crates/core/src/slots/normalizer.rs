//! Slot normalization
//!
//! Turns a [`RawSlot`] into a canonical [`Slot`]. Normalization is total:
//! malformed or missing fields fall back to the [`SlotDefaults`] table rather
//! than failing. Rejecting inverted time ranges is the validator's job.

use chrono::{DateTime, Utc};
use linkup_domain::constants::{DEFAULT_END_TIME, DEFAULT_RADIUS_MILES, DEFAULT_START_TIME};
use linkup_domain::{pad_time, Location, RawLocation, RawSlot, Slot, Weekday};
use uuid::Uuid;

/// Every default the normalizer may apply, in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotDefaults {
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub radius_miles: f64,
}

impl Default for SlotDefaults {
    fn default() -> Self {
        Self {
            day: Weekday::Monday,
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            radius_miles: DEFAULT_RADIUS_MILES,
        }
    }
}

impl SlotDefaults {
    /// Defaults with the radius replaced by a profile preference.
    ///
    /// Non-positive or non-finite radii keep the built-in default.
    pub fn with_radius(mut self, radius_miles: f64) -> Self {
        if let Some(radius) = valid_radius(Some(radius_miles)) {
            self.radius_miles = radius;
        }
        self
    }
}

/// Normalize a raw slot using `default_radius` for a missing radius.
pub fn normalize_slot(raw: &RawSlot, default_radius: f64) -> Slot {
    SlotNormalizer::new(SlotDefaults::default().with_radius(default_radius)).normalize(raw)
}

/// Normalizer bound to a defaults table.
#[derive(Debug, Clone, Default)]
pub struct SlotNormalizer {
    defaults: SlotDefaults,
}

impl SlotNormalizer {
    pub fn new(defaults: SlotDefaults) -> Self {
        Self { defaults }
    }

    /// Normalize with the current wall clock.
    pub fn normalize(&self, raw: &RawSlot) -> Slot {
        self.normalize_at(raw, Utc::now())
    }

    /// Normalize with an explicit `now`, stamped into `updated_at` (and
    /// `created_at` when the raw slot has none).
    pub fn normalize_at(&self, raw: &RawSlot, now: DateTime<Utc>) -> Slot {
        Slot {
            id: non_empty(raw.id.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| Uuid::now_v7().to_string()),
            day: self.normalize_day(raw.day.as_deref()),
            start_time: raw
                .start_time
                .as_deref()
                .and_then(pad_time)
                .unwrap_or_else(|| self.defaults.start_time.clone()),
            end_time: raw
                .end_time
                .as_deref()
                .and_then(pad_time)
                .unwrap_or_else(|| self.defaults.end_time.clone()),
            location: self.normalize_location(raw.location.as_ref()),
            notes: non_empty(raw.notes.as_deref()).map(str::to_string),
            created_at: raw.created_at.unwrap_or(now),
            updated_at: now,
        }
    }

    /// Canonical day: a weekday name (any case) or the Sunday-first numeric
    /// storage encoding. Anything else is the default day.
    pub fn normalize_day(&self, raw: Option<&str>) -> Weekday {
        let Some(value) = non_empty(raw) else {
            return self.defaults.day;
        };

        if let Ok(day) = value.parse::<Weekday>() {
            return day;
        }

        value
            .parse::<u8>()
            .ok()
            .and_then(Weekday::from_storage_index)
            .unwrap_or(self.defaults.day)
    }

    /// Carry a raw location through without resolving it.
    pub fn normalize_location(&self, raw: Option<&RawLocation>) -> Location {
        let Some(raw) = raw else {
            return Location::unresolved("", self.defaults.radius_miles);
        };

        let query = non_empty(raw.query.as_deref()).unwrap_or_else(|| raw.reference());
        let mut location = Location::unresolved(
            query,
            valid_radius(raw.radius_miles).unwrap_or(self.defaults.radius_miles),
        );

        if let Some(label) = non_empty(raw.label.as_deref()) {
            location.label = label.to_string();
        }
        location.postal_code = non_empty(raw.postal_code.as_deref()).map(str::to_string);

        match raw.coordinates() {
            Some(coordinates) => location.with_coordinates(coordinates),
            None => location,
        }
    }
}

/// Positive, finite radius or `None`.
pub fn valid_radius(radius: Option<f64>) -> Option<f64> {
    radius.filter(|r| r.is_finite() && *r > 0.0)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
