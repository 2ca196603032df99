//! In-memory student record management.
//!
//! A `StudentService` validates caller input and delegates storage to a
//! `StudentRepository`; `InMemoryStudentRepository` is the bundled store.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::student::Student;
pub use repo::student_repo::{InMemoryStudentRepository, StudentRepository};
pub use service::student_service::{ServiceError, ServiceResult, StudentService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
