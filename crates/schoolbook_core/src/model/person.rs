//! Shared person fields embedded by [`Student`](crate::model::student::Student)
//! and [`Teacher`](crate::model::teacher::Teacher).
//!
//! Plain data with no behavior beyond field access, so embedding replaces
//! inheritance without losing anything.

use serde::{Deserialize, Serialize};

/// Name and contact fields common to students and teachers.
///
/// `birth_date` is stored as the operator typed it (free-form locale format)
/// and is never parsed by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInfo {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub phone: String,
}

impl PersonInfo {
    /// Returns `"first last"`, the display form used by search and messages.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
