//! Grouping, schedule and grade aggregation views.

use crate::model::grade::GradeRecord;
use crate::model::schedule::ScheduleSlot;
use crate::model::student::Student;
use crate::store::Store;
use std::collections::BTreeSet;

/// Distinct `(grade_level, section)` pairs among active students, sorted
/// lexicographically by grade level then section.
pub fn distinct_groups(store: &Store) -> Vec<(String, String)> {
    let groups: BTreeSet<(String, String)> = store
        .students
        .iter()
        .filter(|student| student.is_active())
        .map(|student| (student.grade_level.clone(), student.section.clone()))
        .collect();
    groups.into_iter().collect()
}

/// Active students belonging to the given group.
pub fn students_in_group<'a>(
    store: &'a Store,
    grade_level: &str,
    section: &str,
) -> Vec<&'a Student> {
    store
        .students
        .iter()
        .filter(|student| {
            student.is_active()
                && student.grade_level == grade_level
                && student.section == section
        })
        .collect()
}

/// Schedule slots assigned to the given group.
pub fn schedule_for_group<'a>(
    store: &'a Store,
    grade_level: &str,
    section: &str,
) -> Vec<&'a ScheduleSlot> {
    store
        .schedule_slots
        .iter()
        .filter(|slot| slot.grade_level == grade_level && slot.section == section)
        .collect()
}

/// Schedule slots taught by the given teacher.
pub fn schedule_for_teacher<'a>(store: &'a Store, employee_id: &str) -> Vec<&'a ScheduleSlot> {
    store
        .schedule_slots
        .iter()
        .filter(|slot| slot.employee_id == employee_id)
        .collect()
}

/// All grade records for the given student, in insertion order.
pub fn grades_for_student<'a>(store: &'a Store, enrollment_id: &str) -> Vec<&'a GradeRecord> {
    store
        .grade_records
        .iter()
        .filter(|record| record.enrollment_id == enrollment_id)
        .collect()
}

/// Arithmetic mean of the student's scores; 0 when no records exist.
///
/// "No grades yet" is a normal state for a fresh enrollment, so it reports a
/// zero average instead of an error.
pub fn average_for_student(store: &Store, enrollment_id: &str) -> f64 {
    let grades = grades_for_student(store, enrollment_id);
    if grades.is_empty() {
        return 0.0;
    }
    let total: f64 = grades.iter().map(|record| record.score).sum();
    total / grades.len() as f64
}
