//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `schoolbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use schoolbook_core::{Registrar, DEFAULT_DATA_FILE};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

    let (registrar, load_error) = Registrar::open(&path);
    if let Some(err) = load_error {
        eprintln!("warning: {err}; starting with empty collections");
    }

    let store = registrar.store();
    println!("schoolbook_core version={}", schoolbook_core::core_version());
    println!("data file={}", registrar.data_path().display());
    println!(
        "students={} teachers={} subjects={} grade_records={} schedule_slots={}",
        store.students.len(),
        store.teachers.len(),
        store.subjects.len(),
        store.grade_records.len(),
        store.schedule_slots.len()
    );
}
