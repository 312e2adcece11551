use schoolbook_core::{
    average_for_student, grades_for_student, EnrollStudent, NewSubject, OpError, Registrar,
};
use tempfile::TempDir;

#[test]
fn record_grade_rejects_each_precondition_without_mutation() {
    let (_dir, mut registrar) = temp_registrar();
    registrar.enroll_student(enroll_request("A-100")).unwrap();
    registrar.enroll_student(enroll_request("A-200")).unwrap();
    registrar.withdraw_student("A-200").unwrap();
    registrar.add_subject(subject_request("MAT1")).unwrap();

    let err = registrar.record_grade("A-999", "MAT1", "1st term", 80.0).unwrap_err();
    assert!(matches!(err, OpError::NotFound { entity: "student", .. }));

    let err = registrar.record_grade("A-200", "MAT1", "1st term", 80.0).unwrap_err();
    assert!(matches!(err, OpError::Validation(_)));
    assert!(err.to_string().contains("withdrawn"));

    let err = registrar.record_grade("A-100", "QUI9", "1st term", 80.0).unwrap_err();
    assert!(matches!(err, OpError::NotFound { entity: "subject", .. }));

    let err = registrar.record_grade("A-100", "MAT1", "1st term", -0.5).unwrap_err();
    assert!(matches!(err, OpError::Validation(_)));
    let err = registrar.record_grade("A-100", "MAT1", "1st term", 100.5).unwrap_err();
    assert!(matches!(err, OpError::Validation(_)));

    assert!(registrar.store().grade_records.is_empty());
}

#[test]
fn duplicate_triple_is_rejected_and_first_record_kept() {
    let (_dir, mut registrar) = temp_registrar();
    registrar.enroll_student(enroll_request("E1")).unwrap();
    registrar.add_subject(subject_request("S1")).unwrap();

    registrar.record_grade("E1", "S1", "T1", 95.0).unwrap();
    let err = registrar.record_grade("E1", "S1", "T1", 60.0).unwrap_err();
    assert!(matches!(err, OpError::Duplicate(_)));

    let grades = grades_for_student(registrar.store(), "E1");
    assert_eq!(grades.len(), 1);
    assert_eq!(grades[0].score, 95.0);
    assert_eq!(average_for_student(registrar.store(), "E1"), 95.0);
}

#[test]
fn same_subject_in_a_different_term_is_allowed() {
    let (_dir, mut registrar) = temp_registrar();
    registrar.enroll_student(enroll_request("A-100")).unwrap();
    registrar.add_subject(subject_request("MAT1")).unwrap();

    registrar.record_grade("A-100", "MAT1", "1st term", 80.0).unwrap();
    registrar.record_grade("A-100", "MAT1", "2nd term", 90.0).unwrap();

    assert_eq!(grades_for_student(registrar.store(), "A-100").len(), 2);
}

#[test]
fn boundary_scores_are_accepted() {
    let (_dir, mut registrar) = temp_registrar();
    registrar.enroll_student(enroll_request("A-100")).unwrap();
    registrar.add_subject(subject_request("MAT1")).unwrap();

    registrar.record_grade("A-100", "MAT1", "T1", 0.0).unwrap();
    registrar.record_grade("A-100", "MAT1", "T2", 100.0).unwrap();
    assert_eq!(average_for_student(registrar.store(), "A-100"), 50.0);
}

#[test]
fn average_is_zero_without_records_and_exact_mean_otherwise() {
    let (_dir, mut registrar) = temp_registrar();
    registrar.enroll_student(enroll_request("A-100")).unwrap();
    registrar.add_subject(subject_request("MAT1")).unwrap();

    assert_eq!(average_for_student(registrar.store(), "A-100"), 0.0);

    registrar.record_grade("A-100", "MAT1", "T1", 80.0).unwrap();
    registrar.record_grade("A-100", "MAT1", "T2", 90.0).unwrap();
    assert_eq!(average_for_student(registrar.store(), "A-100"), 85.0);
}

#[test]
fn record_id_embeds_the_triple() {
    let (_dir, mut registrar) = temp_registrar();
    registrar.enroll_student(enroll_request("A-100")).unwrap();
    registrar.add_subject(subject_request("MAT1")).unwrap();

    registrar.record_grade("A-100", "MAT1", "T1", 70.0).unwrap();
    let record = &registrar.store().grade_records[0];
    assert!(record.record_id.starts_with("A-100_MAT1_T1_"));
    assert_eq!(record.recorded_at.len(), 19);
}

fn enroll_request(enrollment_id: &str) -> EnrollStudent {
    EnrollStudent {
        enrollment_id: enrollment_id.to_string(),
        first_name: "Ana".to_string(),
        last_name: "García".to_string(),
        birth_date: "12/03/2010".to_string(),
        phone: "5551234567".to_string(),
        grade_level: "5".to_string(),
        section: "A".to_string(),
    }
}

fn subject_request(subject_id: &str) -> NewSubject {
    NewSubject {
        subject_id: subject_id.to_string(),
        name: "Matemáticas".to_string(),
        grade_level: "5".to_string(),
        description: String::new(),
    }
}

fn temp_registrar() -> (TempDir, Registrar) {
    let dir = tempfile::tempdir().unwrap();
    let (registrar, load_error) = Registrar::open(dir.path().join("school_data.json"));
    assert!(load_error.is_none());
    (dir, registrar)
}
