//! Domain model for student records.
//!
//! # Responsibility
//! - Define the record shape shared by repository and service layers.
//!
//! # Invariants
//! - `name` is the only lookup key; it is not required to be unique.

pub mod student;
