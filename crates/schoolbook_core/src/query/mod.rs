//! Read-only queries over the store.
//!
//! # Responsibility
//! - Provide search, filter, grouping and aggregation views.
//!
//! # Invariants
//! - Nothing here mutates the store or touches the data file.
//! - Results borrow from the store; callers own any sorting they need.

mod reports;
mod search;

pub use reports::{
    average_for_student, distinct_groups, grades_for_student, schedule_for_group,
    schedule_for_teacher, students_in_group,
};
pub use search::{search_students, search_subjects, search_teachers};
