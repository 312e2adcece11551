//! Weekly schedule slot domain model.
//!
//! # Responsibility
//! - Define the slot shape linking a subject and a teacher to a group.
//! - Keep the weekday as a closed seven-value enum with stable labels.
//!
//! # Invariants
//! - `slot_id` is unique within the store.
//! - `subject_id` and `employee_id` resolve to existing entities at creation
//!   time; referenced entities are never deleted afterwards.

use serde::{Deserialize, Serialize};

/// Day of the week a slot occurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Stable lowercase label, matching the persisted wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Parses a label produced by [`Weekday::label`]. Case-insensitive.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monday" => Some(Self::Monday),
            "tuesday" => Some(Self::Tuesday),
            "wednesday" => Some(Self::Wednesday),
            "thursday" => Some(Self::Thursday),
            "friday" => Some(Self::Friday),
            "saturday" => Some(Self::Saturday),
            "sunday" => Some(Self::Sunday),
            _ => None,
        }
    }
}

/// One weekly occurrence of a subject taught by a teacher to a group.
///
/// Times are `"HH:MM"` strings carried verbatim; the core does not order or
/// overlap-check slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Caller-supplied unique key.
    pub slot_id: String,
    pub subject_id: String,
    pub employee_id: String,
    pub grade_level: String,
    pub section: String,
    pub weekday: Weekday,
    pub starts_at: String,
    pub ends_at: String,
    pub room: String,
}
