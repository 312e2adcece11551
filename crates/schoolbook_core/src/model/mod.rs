//! Domain model for school records.
//!
//! # Responsibility
//! - Define the canonical entity shapes held by the store.
//! - Keep shared person fields as embedded data, not inheritance.
//!
//! # Invariants
//! - Every entity is identified by a caller-visible string key.
//! - A withdrawn student never becomes active again.

pub mod grade;
pub mod person;
pub mod schedule;
pub mod student;
pub mod subject;
pub mod teacher;
