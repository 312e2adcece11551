//! On-disk document shape for the whole-snapshot store.
//!
//! One JSON object with five top-level lists. Every key is optional on load
//! (`serde(default)`), so a partial or empty document yields empty
//! collections instead of a parse failure.

use crate::model::grade::GradeRecord;
use crate::model::schedule::ScheduleSlot;
use crate::model::student::Student;
use crate::model::subject::Subject;
use crate::model::teacher::Teacher;
use serde::{Deserialize, Serialize};

/// Serialized form of the five store collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchoolDocument {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub grade_records: Vec<GradeRecord>,
    #[serde(default)]
    pub schedule_slots: Vec<ScheduleSlot>,
}
