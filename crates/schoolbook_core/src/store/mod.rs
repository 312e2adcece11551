//! In-memory store and whole-document persistence.
//!
//! # Responsibility
//! - Own the five entity collections, keyed by their natural unique id.
//! - Load and save the backing JSON document as a whole snapshot.
//!
//! # Invariants
//! - Collections preserve insertion order for stable listing.
//! - A malformed document is never partially applied: load either populates
//!   everything or reports an error and leaves the store empty.
//! - Save rewrites all five collections in full; there is no change log.

use crate::model::grade::GradeRecord;
use crate::model::schedule::ScheduleSlot;
use crate::model::student::Student;
use crate::model::subject::Subject;
use crate::model::teacher::Teacher;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Instant;

mod document;

pub use document::SchoolDocument;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for document load/save operations.
#[derive(Debug)]
pub enum StoreError {
    /// The document file could not be read or written.
    Io(std::io::Error),
    /// The document exists but is not valid JSON of the expected shape.
    Document(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "data file I/O failed: {err}"),
            Self::Document(err) => write!(f, "data file is malformed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Document(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Document(value)
    }
}

/// Owner of the five entity collections.
///
/// All mutation goes through the rule engine
/// ([`Registrar`](crate::service::registrar::Registrar)); query code reads
/// these collections through `&Store` and never caches copies.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
    pub subjects: Vec<Subject>,
    pub grade_records: Vec<GradeRecord>,
    pub schedule_slots: Vec<ScheduleSlot>,
}

impl Store {
    /// Loads a store from the document at `path`.
    ///
    /// A missing file is not an error: it yields empty collections, matching
    /// first-run behavior. A present but unreadable or malformed file returns
    /// an error; callers are expected to degrade to an empty store and
    /// surface the message rather than abort.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let started_at = Instant::now();

        if !path.exists() {
            info!(
                "event=store_load module=store status=ok mode=fresh path={}",
                path.display()
            );
            return Ok(Self::default());
        }

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                error!(
                    "event=store_load module=store status=error path={} error={}",
                    path.display(),
                    err
                );
                return Err(err.into());
            }
        };

        let document: SchoolDocument = match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(err) => {
                error!(
                    "event=store_load module=store status=error path={} error={}",
                    path.display(),
                    err
                );
                return Err(err.into());
            }
        };

        let store = Self::from_document(document);
        info!(
            "event=store_load module=store status=ok mode=file path={} duration_ms={} students={} teachers={} subjects={} grades={} slots={}",
            path.display(),
            started_at.elapsed().as_millis(),
            store.students.len(),
            store.teachers.len(),
            store.subjects.len(),
            store.grade_records.len(),
            store.schedule_slots.len()
        );
        Ok(store)
    }

    /// Serializes all five collections to `path`, replacing prior content.
    ///
    /// Output is indented JSON with non-ASCII text preserved, so the document
    /// stays readable in a plain editor.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let started_at = Instant::now();
        let document = self.to_document();
        let rendered = serde_json::to_string_pretty(&document)?;

        if let Err(err) = std::fs::write(path, rendered) {
            error!(
                "event=store_save module=store status=error path={} error={}",
                path.display(),
                err
            );
            return Err(err.into());
        }

        info!(
            "event=store_save module=store status=ok path={} duration_ms={}",
            path.display(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    fn from_document(document: SchoolDocument) -> Self {
        Self {
            students: document.students,
            teachers: document.teachers,
            subjects: document.subjects,
            grade_records: document.grade_records,
            schedule_slots: document.schedule_slots,
        }
    }

    fn to_document(&self) -> SchoolDocument {
        SchoolDocument {
            students: self.students.clone(),
            teachers: self.teachers.clone(),
            subjects: self.subjects.clone(),
            grade_records: self.grade_records.clone(),
            schedule_slots: self.schedule_slots.clone(),
        }
    }

    /// Looks up a student by enrollment id.
    pub fn student(&self, enrollment_id: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|student| student.enrollment_id == enrollment_id)
    }

    pub(crate) fn student_mut(&mut self, enrollment_id: &str) -> Option<&mut Student> {
        self.students
            .iter_mut()
            .find(|student| student.enrollment_id == enrollment_id)
    }

    /// Looks up a teacher by employee id.
    pub fn teacher(&self, employee_id: &str) -> Option<&Teacher> {
        self.teachers
            .iter()
            .find(|teacher| teacher.employee_id == employee_id)
    }

    /// Looks up a subject by subject id.
    pub fn subject(&self, subject_id: &str) -> Option<&Subject> {
        self.subjects
            .iter()
            .find(|subject| subject.subject_id == subject_id)
    }

    /// Looks up a schedule slot by slot id.
    pub fn schedule_slot(&self, slot_id: &str) -> Option<&ScheduleSlot> {
        self.schedule_slots.iter().find(|slot| slot.slot_id == slot_id)
    }

    /// Finds the grade record for a `(student, subject, term)` triple.
    pub fn grade_for_triple(
        &self,
        enrollment_id: &str,
        subject_id: &str,
        term: &str,
    ) -> Option<&GradeRecord> {
        self.grade_records.iter().find(|record| {
            record.enrollment_id == enrollment_id
                && record.subject_id == subject_id
                && record.term == term
        })
    }
}
