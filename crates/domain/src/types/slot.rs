//! Weekly availability slots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::location::{Location, RawLocation};
use crate::impl_domain_enum_conversions;

/// Day of the week a slot recurs on.
///
/// Display order starts on Monday (`sort_index`), while the stored numeric
/// encoding starts on Sunday (`storage_index`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl_domain_enum_conversions!(Weekday {
    Monday => "monday",
    Tuesday => "tuesday",
    Wednesday => "wednesday",
    Thursday => "thursday",
    Friday => "friday",
    Saturday => "saturday",
    Sunday => "sunday",
});

impl Weekday {
    /// All weekdays in display order.
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Position in display order (Monday = 0 ... Sunday = 6).
    pub fn sort_index(self) -> u8 {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }

    /// Numeric storage encoding (Sunday = 0 ... Saturday = 6).
    pub fn storage_index(self) -> u8 {
        (self.sort_index() + 1) % 7
    }

    /// Inverse of [`Weekday::storage_index`].
    pub fn from_storage_index(index: u8) -> Option<Self> {
        (index < 7).then(|| Self::ALL[usize::from((index + 6) % 7)])
    }
}

/// One recurring weekly availability window, in canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: String,
    pub day: Weekday,
    /// Zero-padded `HH:MM`
    pub start_time: String,
    /// Zero-padded `HH:MM`, strictly after `start_time` for valid slots
    pub end_time: String,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Slot as submitted by a client; every field may be missing or malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSlot {
    pub id: Option<String>,
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<RawLocation>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Slot> for RawSlot {
    fn from(slot: &Slot) -> Self {
        Self {
            id: Some(slot.id.clone()),
            day: Some(slot.day.to_string()),
            start_time: Some(slot.start_time.clone()),
            end_time: Some(slot.end_time.clone()),
            location: Some(RawLocation::from(&slot.location)),
            notes: slot.notes.clone(),
            created_at: Some(slot.created_at),
        }
    }
}
