//! Student domain model.
//!
//! # Responsibility
//! - Define the enrollment record keyed by `enrollment_id`.
//! - Provide the one-way withdrawal transition.
//!
//! # Invariants
//! - `enrollment_id` is unique within the store and never reused.
//! - `active` starts `true` and `withdraw` is the only transition; there is
//!   no re-activation path.
//! - `withdrawn_at` is `None` exactly while `active` is `true`.

use crate::model::person::PersonInfo;
use serde::{Deserialize, Serialize};

/// One enrolled student.
///
/// Students are never deleted; withdrawal flips `active` and stamps
/// `withdrawn_at`, preserving the record for historical queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Externally assigned unique key (the student's matriculation number).
    pub enrollment_id: String,
    #[serde(flatten)]
    pub person: PersonInfo,
    /// Grade-level label, e.g. `"5"`. Free text, compared verbatim.
    pub grade_level: String,
    /// Section label within the grade level, e.g. `"A"`.
    pub section: String,
    pub active: bool,
    /// `YYYY-MM-DD HH:MM:SS`, stamped at enrollment.
    pub enrolled_at: String,
    /// `YYYY-MM-DD HH:MM:SS`, stamped at withdrawal. `None` while active.
    #[serde(default)]
    pub withdrawn_at: Option<String>,
}

impl Student {
    /// Creates an active student stamped with the given enrollment time.
    pub fn new(
        enrollment_id: impl Into<String>,
        person: PersonInfo,
        grade_level: impl Into<String>,
        section: impl Into<String>,
        enrolled_at: impl Into<String>,
    ) -> Self {
        Self {
            enrollment_id: enrollment_id.into(),
            person,
            grade_level: grade_level.into(),
            section: section.into(),
            active: true,
            enrolled_at: enrolled_at.into(),
            withdrawn_at: None,
        }
    }

    /// Marks the student as withdrawn at `stamp`.
    ///
    /// Terminal transition: callers must reject withdrawal of an already
    /// inactive student before reaching this method.
    pub fn withdraw(&mut self, stamp: impl Into<String>) {
        self.active = false;
        self.withdrawn_at = Some(stamp.into());
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn full_name(&self) -> String {
        self.person.full_name()
    }
}
