//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract used by the service layer.
//! - Own the authoritative student collection.
//!
//! # Invariants
//! - Repositories never validate input and never return errors.
//! - "Not found" is an absent result (`None`/`false`), not a failure.

pub mod student_repo;
