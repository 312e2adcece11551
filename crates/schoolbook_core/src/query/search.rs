//! Case-insensitive substring search across entity fields.
//!
//! A blank term matches everything, so the same call backs both "list all"
//! and type-as-you-filter presentation flows. Result order follows store
//! insertion order; presentation code sorts by id where it needs to.

use crate::model::student::Student;
use crate::model::subject::Subject;
use crate::model::teacher::Teacher;
use crate::store::Store;

/// Searches students by enrollment id, first name, last name or full name.
///
/// `active_only` drops withdrawn students before matching.
pub fn search_students<'a>(store: &'a Store, term: &str, active_only: bool) -> Vec<&'a Student> {
    let needle = term.trim().to_lowercase();
    store
        .students
        .iter()
        .filter(|student| !active_only || student.is_active())
        .filter(|student| {
            let full_name = student.full_name();
            matches_any(
                &needle,
                [
                    student.enrollment_id.as_str(),
                    student.person.first_name.as_str(),
                    student.person.last_name.as_str(),
                    full_name.as_str(),
                ],
            )
        })
        .collect()
}

/// Searches teachers by employee id, names, full name, specialty or email.
pub fn search_teachers<'a>(store: &'a Store, term: &str) -> Vec<&'a Teacher> {
    let needle = term.trim().to_lowercase();
    store
        .teachers
        .iter()
        .filter(|teacher| {
            let full_name = teacher.full_name();
            matches_any(
                &needle,
                [
                    teacher.employee_id.as_str(),
                    teacher.person.first_name.as_str(),
                    teacher.person.last_name.as_str(),
                    full_name.as_str(),
                    teacher.specialty.as_str(),
                    teacher.email.as_str(),
                ],
            )
        })
        .collect()
}

/// Searches subjects by id, name, grade level or description.
pub fn search_subjects<'a>(store: &'a Store, term: &str) -> Vec<&'a Subject> {
    let needle = term.trim().to_lowercase();
    store
        .subjects
        .iter()
        .filter(|subject| {
            matches_any(
                &needle,
                [
                    subject.subject_id.as_str(),
                    subject.name.as_str(),
                    subject.grade_level.as_str(),
                    subject.description.as_str(),
                ],
            )
        })
        .collect()
}

fn matches_any<'f>(needle: &str, fields: impl IntoIterator<Item = &'f str>) -> bool {
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
