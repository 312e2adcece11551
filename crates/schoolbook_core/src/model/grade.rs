//! Grade record domain model and derived-id construction.
//!
//! # Responsibility
//! - Define the immutable grade record shape.
//! - Build record ids deterministically from the inputs plus a clock stamp.
//!
//! # Invariants
//! - `score` lies in the closed range [0, 100].
//! - The `(enrollment_id, subject_id, term)` triple is unique store-wide;
//!   the id scheme is diagnostic, not the uniqueness mechanism.

use serde::{Deserialize, Serialize};

/// Inclusive lower bound for a valid score.
pub const SCORE_MIN: f64 = 0.0;
/// Inclusive upper bound for a valid score.
pub const SCORE_MAX: f64 = 100.0;

/// One recorded score for a student in a subject and term.
///
/// Records are write-once: a second record for the same triple is rejected by
/// the rule engine, never overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    /// Derived id, see [`grade_record_id`].
    pub record_id: String,
    /// Reference to an existing [`Student`](crate::model::student::Student).
    pub enrollment_id: String,
    /// Reference to an existing [`Subject`](crate::model::subject::Subject).
    pub subject_id: String,
    /// Free-text grading-period label, e.g. `"1st term"`.
    pub term: String,
    /// Numeric score in `[SCORE_MIN, SCORE_MAX]`.
    pub score: f64,
    /// `YYYY-MM-DD HH:MM:SS`, stamped at creation.
    pub recorded_at: String,
}

/// Returns whether `score` is a valid grade value.
///
/// NaN fails the range test, so it is rejected like any out-of-range input.
pub fn score_in_range(score: f64) -> bool {
    (SCORE_MIN..=SCORE_MAX).contains(&score)
}

/// Builds a grade-record id from its natural components plus a compact
/// wall-clock stamp (`YYYYMMDDHHMMSS`).
///
/// Deterministic in its inputs. Two calls within the same second for the same
/// triple would collide, but the rule engine already rejects a second record
/// for the triple, so the stamp only has to make ids readable and traceable.
pub fn grade_record_id(enrollment_id: &str, subject_id: &str, term: &str, stamp: &str) -> String {
    format!("{enrollment_id}_{subject_id}_{term}_{stamp}")
}
