use schoolbook_core::{
    distinct_groups, search_students, search_subjects, search_teachers, students_in_group,
    EnrollStudent, NewSubject, NewTeacher, Registrar,
};
use tempfile::TempDir;

#[test]
fn student_search_matches_id_names_and_full_name() {
    let (_dir, mut registrar) = temp_registrar();
    registrar
        .enroll_student(student("A-100", "Ana", "García", "5", "A"))
        .unwrap();
    registrar
        .enroll_student(student("A-200", "Luis", "Mendoza", "5", "B"))
        .unwrap();

    let by_id = search_students(registrar.store(), "a-2", true);
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].enrollment_id, "A-200");

    let by_last = search_students(registrar.store(), "garcía", true);
    assert_eq!(by_last.len(), 1);
    assert_eq!(by_last[0].enrollment_id, "A-100");

    // Matches across the first/last boundary only via the concatenated form.
    let by_full = search_students(registrar.store(), "ana garcía", true);
    assert_eq!(by_full.len(), 1);

    assert!(search_students(registrar.store(), "nadie", true).is_empty());
}

#[test]
fn active_only_filters_withdrawn_students_from_matches() {
    let (_dir, mut registrar) = temp_registrar();
    registrar
        .enroll_student(student("A-100", "Ana", "García", "5", "A"))
        .unwrap();
    registrar.withdraw_student("A-100").unwrap();

    assert!(search_students(registrar.store(), "ana", true).is_empty());
    assert_eq!(search_students(registrar.store(), "ana", false).len(), 1);
}

#[test]
fn teacher_search_spans_specialty_and_email() {
    let (_dir, mut registrar) = temp_registrar();
    registrar.add_teacher(teacher("D-01", "Química")).unwrap();
    registrar.add_teacher(teacher("D-02", "Historia")).unwrap();

    let by_specialty = search_teachers(registrar.store(), "química");
    assert_eq!(by_specialty.len(), 1);
    assert_eq!(by_specialty[0].employee_id, "D-01");

    let by_email = search_teachers(registrar.store(), "d-02@example.edu");
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].employee_id, "D-02");

    assert_eq!(search_teachers(registrar.store(), "").len(), 2);
}

#[test]
fn subject_search_spans_grade_level_and_description() {
    let (_dir, mut registrar) = temp_registrar();
    registrar
        .add_subject(NewSubject {
            subject_id: "MAT1".to_string(),
            name: "Matemáticas".to_string(),
            grade_level: "5".to_string(),
            description: "Aritmética básica".to_string(),
        })
        .unwrap();
    registrar
        .add_subject(NewSubject {
            subject_id: "HIS1".to_string(),
            name: "Historia".to_string(),
            grade_level: "6".to_string(),
            description: String::new(),
        })
        .unwrap();

    let by_description = search_subjects(registrar.store(), "aritmética");
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].subject_id, "MAT1");

    let by_grade = search_subjects(registrar.store(), "6");
    assert_eq!(by_grade.len(), 1);
    assert_eq!(by_grade[0].subject_id, "HIS1");
}

#[test]
fn distinct_groups_cover_active_students_only_and_sort_lexicographically() {
    let (_dir, mut registrar) = temp_registrar();
    registrar
        .enroll_student(student("A-1", "Ana", "García", "5", "B"))
        .unwrap();
    registrar
        .enroll_student(student("A-2", "Luis", "Mendoza", "5", "A"))
        .unwrap();
    registrar
        .enroll_student(student("A-3", "Rosa", "Núñez", "4", "C"))
        .unwrap();
    registrar
        .enroll_student(student("A-4", "Iván", "Soto", "6", "A"))
        .unwrap();
    registrar.withdraw_student("A-4").unwrap();

    let groups = distinct_groups(registrar.store());
    assert_eq!(
        groups,
        vec![
            ("4".to_string(), "C".to_string()),
            ("5".to_string(), "A".to_string()),
            ("5".to_string(), "B".to_string()),
        ]
    );
}

#[test]
fn students_in_group_excludes_withdrawn_and_other_groups() {
    let (_dir, mut registrar) = temp_registrar();
    registrar
        .enroll_student(student("A-1", "Ana", "García", "5", "A"))
        .unwrap();
    registrar
        .enroll_student(student("A-2", "Luis", "Mendoza", "5", "A"))
        .unwrap();
    registrar
        .enroll_student(student("A-3", "Rosa", "Núñez", "5", "B"))
        .unwrap();
    registrar.withdraw_student("A-2").unwrap();

    let group = students_in_group(registrar.store(), "5", "A");
    assert_eq!(group.len(), 1);
    assert_eq!(group[0].enrollment_id, "A-1");
}

fn student(
    enrollment_id: &str,
    first_name: &str,
    last_name: &str,
    grade_level: &str,
    section: &str,
) -> EnrollStudent {
    EnrollStudent {
        enrollment_id: enrollment_id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        birth_date: "12/03/2010".to_string(),
        phone: "5551234567".to_string(),
        grade_level: grade_level.to_string(),
        section: section.to_string(),
    }
}

fn teacher(employee_id: &str, specialty: &str) -> NewTeacher {
    NewTeacher {
        employee_id: employee_id.to_string(),
        first_name: "Carlos".to_string(),
        last_name: "Pérez".to_string(),
        birth_date: "02/11/1985".to_string(),
        phone: "5557654321".to_string(),
        specialty: specialty.to_string(),
        email: format!("{}@example.edu", employee_id.to_lowercase()),
    }
}

fn temp_registrar() -> (TempDir, Registrar) {
    let dir = tempfile::tempdir().unwrap();
    let (registrar, load_error) = Registrar::open(dir.path().join("school_data.json"));
    assert!(load_error.is_none());
    (dir, registrar)
}
