//! Rule engine: validated mutating operations over the store.
//!
//! # Responsibility
//! - Check uniqueness, reference and range invariants before any mutation.
//! - Persist the whole document exactly once per successful mutation.
//!
//! # Invariants
//! - A failed operation leaves the store untouched.
//! - No operation updates or deletes teachers, subjects or schedule slots,
//!   and none re-activates a withdrawn student.

pub mod registrar;
