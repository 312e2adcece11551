//! Teacher domain model.
//!
//! Teachers are created once and never updated or deleted; schedule slots
//! reference them by `employee_id`.

use crate::model::person::PersonInfo;
use serde::{Deserialize, Serialize};

/// One staff member able to appear on schedule slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Externally assigned unique key.
    pub employee_id: String,
    #[serde(flatten)]
    pub person: PersonInfo,
    /// Teaching specialty, e.g. `"Matemáticas"`.
    pub specialty: String,
    pub email: String,
}

impl Teacher {
    pub fn full_name(&self) -> String {
        self.person.full_name()
    }
}
