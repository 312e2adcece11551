//! Subject domain model.

use serde::{Deserialize, Serialize};

/// One taught subject, referenced by grade records and schedule slots.
///
/// Created once; no update or delete operation exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Externally assigned unique key.
    pub subject_id: String,
    pub name: String,
    /// Grade-level label this subject is taught at.
    pub grade_level: String,
    /// Free text; may be empty and defaults to empty when absent from the
    /// persisted document.
    #[serde(default)]
    pub description: String,
}
