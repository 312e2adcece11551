//! Core domain logic for Schoolbook, a single-operator school records system.
//! This crate is the single source of truth for business invariants.

pub mod clock;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::grade::{grade_record_id, score_in_range, GradeRecord, SCORE_MAX, SCORE_MIN};
pub use model::person::PersonInfo;
pub use model::schedule::{ScheduleSlot, Weekday};
pub use model::student::Student;
pub use model::subject::Subject;
pub use model::teacher::Teacher;
pub use query::{
    average_for_student, distinct_groups, grades_for_student, schedule_for_group,
    schedule_for_teacher, search_students, search_subjects, search_teachers, students_in_group,
};
pub use service::registrar::{
    EnrollStudent, NewScheduleSlot, NewSubject, NewTeacher, OpError, OpResult, Registrar,
};
pub use store::{SchoolDocument, Store, StoreError, StoreResult};

/// Default file name for the backing document when none is supplied.
pub const DEFAULT_DATA_FILE: &str = "school_data.json";

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
