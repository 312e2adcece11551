//! Registrar: the mutating operation surface of the core.
//!
//! # Responsibility
//! - Own the store and its data-file path; no ambient global collections.
//! - Validate every mutation against current store state, then mutate and
//!   save in that order.
//!
//! # Invariants
//! - Validation precedes mutation; a rejected operation changes nothing.
//! - Every successful mutation triggers exactly one save.
//! - A save failure is reported but the in-memory mutation is kept; memory
//!   and document may diverge until the next successful save.

use crate::clock::{now_compact, now_stamp};
use crate::model::grade::{grade_record_id, score_in_range, GradeRecord, SCORE_MAX, SCORE_MIN};
use crate::model::person::PersonInfo;
use crate::model::schedule::{ScheduleSlot, Weekday};
use crate::model::student::Student;
use crate::model::subject::Subject;
use crate::model::teacher::Teacher;
use crate::store::{Store, StoreError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Result of a mutating operation: a user-facing success message or a typed
/// failure whose `Display` is the user-facing error text.
pub type OpResult = Result<String, OpError>;

/// Failure taxonomy for registrar operations.
///
/// Presentation code shows the `Display` text verbatim; nothing here is a
/// process-terminating fault.
#[derive(Debug)]
pub enum OpError {
    /// Malformed or out-of-range input (blank required field, bad score).
    Validation(String),
    /// A referenced entity id does not exist.
    NotFound { entity: &'static str, id: String },
    /// An id or a (student, subject, term) triple already exists.
    Duplicate(String),
    /// The document could not be written; the in-memory change was kept.
    Persistence(StoreError),
}

impl Display for OpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "{message}"),
            Self::NotFound { entity, id } => write!(f, "no {entity} found with id {id}"),
            Self::Duplicate(message) => write!(f, "{message}"),
            Self::Persistence(err) => write!(f, "changes kept in memory but not saved: {err}"),
        }
    }
}

impl Error for OpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for OpError {
    fn from(value: StoreError) -> Self {
        Self::Persistence(value)
    }
}

/// Request model for enrolling a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollStudent {
    pub enrollment_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub phone: String,
    pub grade_level: String,
    pub section: String,
}

/// Request model for registering a teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub phone: String,
    pub specialty: String,
    pub email: String,
}

/// Request model for registering a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubject {
    pub subject_id: String,
    pub name: String,
    pub grade_level: String,
    /// May be blank; every other field is required.
    pub description: String,
}

/// Request model for adding a weekly schedule slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScheduleSlot {
    pub slot_id: String,
    pub subject_id: String,
    pub employee_id: String,
    pub grade_level: String,
    pub section: String,
    pub weekday: Weekday,
    pub starts_at: String,
    pub ends_at: String,
    pub room: String,
}

/// Owner of the store and entry point for all mutations.
pub struct Registrar {
    store: Store,
    data_path: PathBuf,
}

impl Registrar {
    /// Opens the registrar over the document at `path`.
    ///
    /// A malformed or unreadable document degrades softly: the error is
    /// returned alongside a registrar holding empty collections, so the
    /// operator can keep working and the message can be shown. The broken
    /// file is left untouched until the next successful save overwrites it.
    pub fn open(path: impl Into<PathBuf>) -> (Self, Option<StoreError>) {
        let data_path = path.into();
        match Store::load(&data_path) {
            Ok(store) => (Self { store, data_path }, None),
            Err(err) => {
                warn!(
                    "event=registrar_open module=service status=degraded path={} error={}",
                    data_path.display(),
                    err
                );
                (
                    Self {
                        store: Store::default(),
                        data_path,
                    },
                    Some(err),
                )
            }
        }
    }

    /// Read-only view of the collections for the query layer.
    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Enrolls a new student with the current time as enrollment stamp.
    pub fn enroll_student(&mut self, request: EnrollStudent) -> OpResult {
        let enrollment_id = required("enrollment id", &request.enrollment_id)?;
        let person = required_person(
            &request.first_name,
            &request.last_name,
            &request.birth_date,
            &request.phone,
        )?;
        let grade_level = required("grade level", &request.grade_level)?;
        let section = required("section", &request.section)?;

        if self.store.student(&enrollment_id).is_some() {
            return Err(OpError::Duplicate(format!(
                "a student with enrollment id {enrollment_id} already exists"
            )));
        }

        let student = Student::new(&enrollment_id, person, grade_level, section, now_stamp());
        let full_name = student.full_name();
        self.store.students.push(student);
        self.persist()?;

        info!("event=enroll_student module=service status=ok id={enrollment_id}");
        Ok(format!("student {full_name} enrolled with id {enrollment_id}"))
    }

    /// Withdraws an active student. Terminal: a second call fails.
    pub fn withdraw_student(&mut self, enrollment_id: &str) -> OpResult {
        let enrollment_id = required("enrollment id", enrollment_id)?;

        let Some(student) = self.store.student(&enrollment_id) else {
            return Err(not_found("student", &enrollment_id));
        };
        let full_name = student.full_name();
        if !student.is_active() {
            return Err(OpError::Validation(format!(
                "student {full_name} is already withdrawn"
            )));
        }

        let stamp = now_stamp();
        // Lookup above guarantees presence; re-borrow mutably to apply.
        if let Some(student) = self.store.student_mut(&enrollment_id) {
            student.withdraw(stamp);
        }
        self.persist()?;

        info!("event=withdraw_student module=service status=ok id={enrollment_id}");
        Ok(format!("student {full_name} withdrawn"))
    }

    /// Registers a new teacher.
    pub fn add_teacher(&mut self, request: NewTeacher) -> OpResult {
        let employee_id = required("employee id", &request.employee_id)?;
        let person = required_person(
            &request.first_name,
            &request.last_name,
            &request.birth_date,
            &request.phone,
        )?;
        let specialty = required("specialty", &request.specialty)?;
        let email = required("email", &request.email)?;

        if self.store.teacher(&employee_id).is_some() {
            return Err(OpError::Duplicate(format!(
                "a teacher with employee id {employee_id} already exists"
            )));
        }

        let teacher = Teacher {
            employee_id: employee_id.clone(),
            person,
            specialty,
            email,
        };
        let full_name = teacher.full_name();
        self.store.teachers.push(teacher);
        self.persist()?;

        info!("event=add_teacher module=service status=ok id={employee_id}");
        Ok(format!("teacher {full_name} added with id {employee_id}"))
    }

    /// Registers a new subject.
    pub fn add_subject(&mut self, request: NewSubject) -> OpResult {
        let subject_id = required("subject id", &request.subject_id)?;
        let name = required("subject name", &request.name)?;
        let grade_level = required("grade level", &request.grade_level)?;

        if self.store.subject(&subject_id).is_some() {
            return Err(OpError::Duplicate(format!(
                "a subject with id {subject_id} already exists"
            )));
        }

        self.store.subjects.push(Subject {
            subject_id: subject_id.clone(),
            name: name.clone(),
            grade_level,
            description: request.description.trim().to_string(),
        });
        self.persist()?;

        info!("event=add_subject module=service status=ok id={subject_id}");
        Ok(format!("subject {name} added with id {subject_id}"))
    }

    /// Records a grade for an active student in an existing subject.
    ///
    /// Each precondition failure carries its own message: unknown student,
    /// withdrawn student, unknown subject, duplicate (student, subject, term)
    /// triple, and out-of-range score.
    pub fn record_grade(
        &mut self,
        enrollment_id: &str,
        subject_id: &str,
        term: &str,
        score: f64,
    ) -> OpResult {
        let enrollment_id = required("enrollment id", enrollment_id)?;
        let subject_id = required("subject id", subject_id)?;
        let term = required("term", term)?;

        let Some(student) = self.store.student(&enrollment_id) else {
            return Err(not_found("student", &enrollment_id));
        };
        if !student.is_active() {
            return Err(OpError::Validation(format!(
                "student {} is withdrawn and cannot receive grades",
                student.full_name()
            )));
        }
        if self.store.subject(&subject_id).is_none() {
            return Err(not_found("subject", &subject_id));
        }
        if self
            .store
            .grade_for_triple(&enrollment_id, &subject_id, &term)
            .is_some()
        {
            return Err(OpError::Duplicate(format!(
                "a grade for this student and subject already exists in {term}"
            )));
        }
        if !score_in_range(score) {
            return Err(OpError::Validation(format!(
                "score {score} is outside the valid range [{SCORE_MIN}, {SCORE_MAX}]"
            )));
        }

        let record = GradeRecord {
            record_id: grade_record_id(&enrollment_id, &subject_id, &term, &now_compact()),
            enrollment_id: enrollment_id.clone(),
            subject_id,
            term,
            score,
            recorded_at: now_stamp(),
        };
        self.store.grade_records.push(record);
        self.persist()?;

        info!("event=record_grade module=service status=ok student={enrollment_id} score={score}");
        Ok("grade recorded".to_string())
    }

    /// Adds a weekly schedule slot referencing an existing subject and
    /// teacher.
    pub fn add_schedule_slot(&mut self, request: NewScheduleSlot) -> OpResult {
        let slot_id = required("slot id", &request.slot_id)?;
        let subject_id = required("subject id", &request.subject_id)?;
        let employee_id = required("employee id", &request.employee_id)?;
        let grade_level = required("grade level", &request.grade_level)?;
        let section = required("section", &request.section)?;
        let starts_at = required("start time", &request.starts_at)?;
        let ends_at = required("end time", &request.ends_at)?;
        let room = required("room", &request.room)?;

        if self.store.schedule_slot(&slot_id).is_some() {
            return Err(OpError::Duplicate(format!(
                "a schedule slot with id {slot_id} already exists"
            )));
        }
        if self.store.subject(&subject_id).is_none() {
            return Err(not_found("subject", &subject_id));
        }
        if self.store.teacher(&employee_id).is_none() {
            return Err(not_found("teacher", &employee_id));
        }

        self.store.schedule_slots.push(ScheduleSlot {
            slot_id: slot_id.clone(),
            subject_id,
            employee_id,
            grade_level,
            section,
            weekday: request.weekday,
            starts_at,
            ends_at,
            room,
        });
        self.persist()?;

        info!("event=add_schedule_slot module=service status=ok id={slot_id}");
        Ok(format!("schedule slot {slot_id} added"))
    }

    fn persist(&self) -> Result<(), OpError> {
        self.store.save(&self.data_path).map_err(|err| {
            error!(
                "event=store_save module=service status=error path={} error={}",
                self.data_path.display(),
                err
            );
            OpError::Persistence(err)
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, OpError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(OpError::Validation(format!("{field} cannot be blank")));
    }
    Ok(trimmed.to_string())
}

fn required_person(
    first_name: &str,
    last_name: &str,
    birth_date: &str,
    phone: &str,
) -> Result<PersonInfo, OpError> {
    Ok(PersonInfo {
        first_name: required("first name", first_name)?,
        last_name: required("last name", last_name)?,
        birth_date: required("birth date", birth_date)?,
        phone: required("phone", phone)?,
    })
}

fn not_found(entity: &'static str, id: &str) -> OpError {
    OpError::NotFound {
        entity,
        id: id.to_string(),
    }
}
