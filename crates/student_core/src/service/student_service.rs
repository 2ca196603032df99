//! Student use-case service.
//!
//! # Responsibility
//! - Provide validated add/remove/update/get/list entry points.
//! - Delegate storage to a `StudentRepository`.
//!
//! # Invariants
//! - The only error is `InvalidArgument`, raised before any repository call.
//! - Removing, updating or reading a missing name is never an error; remove and
//!   update report the outcome as `bool`.
//! - Update overwrites all four fields of the first matching record.

use crate::model::student::Student;
use crate::repo::student_repo::StudentRepository;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

const NAME_PARAM: &str = "student_name";
const STUDENT_PARAM: &str = "student";
const EMPTY_NAME_MESSAGE: &str = "Student name cannot be null or empty.";
const MISSING_STUDENT_MESSAGE: &str = "Value cannot be null.";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for student use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Caller input failed validation.
    InvalidArgument {
        param: &'static str,
        message: &'static str,
    },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { param, message } => {
                write!(f, "{message} (parameter `{param}`)")
            }
        }
    }
}

impl Error for ServiceError {}

/// Use-case service wrapper for student record operations.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service owning the provided repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access to the wrapped repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Adds a record.
    ///
    /// Accepts either a `Student` or an `Option<Student>`; `None` is rejected.
    ///
    /// # Errors
    /// - `InvalidArgument` when no student is supplied.
    pub fn add_new(&mut self, student: impl Into<Option<Student>>) -> ServiceResult<()> {
        let Some(student) = student.into() else {
            debug!("event=student_add module=service status=rejected reason=missing_student");
            return Err(ServiceError::InvalidArgument {
                param: STUDENT_PARAM,
                message: MISSING_STUDENT_MESSAGE,
            });
        };

        self.repo.add(student);
        debug!(
            "event=student_add module=service status=ok count={}",
            self.repo.get_all().len()
        );
        Ok(())
    }

    /// Removes the first record named `name`.
    ///
    /// Returns `Ok(false)` when no record matched.
    ///
    /// # Errors
    /// - `InvalidArgument` when `name` is empty or whitespace-only.
    pub fn remove_existing(&mut self, name: &str) -> ServiceResult<bool> {
        validate_name(name, "student_remove")?;

        let removed = self.repo.remove(name);
        debug!("event=student_remove module=service status=ok found={removed}");
        Ok(removed)
    }

    /// Overwrites all fields of the first record named `name` with `updated`.
    ///
    /// Returns `Ok(false)` and leaves the store untouched when no record matched.
    ///
    /// # Errors
    /// - `InvalidArgument` when `name` is empty or whitespace-only.
    pub fn update_info(&mut self, name: &str, updated: &Student) -> ServiceResult<bool> {
        validate_name(name, "student_update")?;

        let found = match self.repo.get_mut(name) {
            Some(existing) => {
                existing.overwrite_from(updated);
                true
            }
            None => false,
        };
        debug!("event=student_update module=service status=ok found={found}");
        Ok(found)
    }

    /// Gets the first record named `name`.
    ///
    /// # Errors
    /// - `InvalidArgument` when `name` is empty or whitespace-only.
    pub fn get_info(&self, name: &str) -> ServiceResult<Option<&Student>> {
        validate_name(name, "student_get")?;
        Ok(self.repo.get(name))
    }

    /// Lists all records in insertion order.
    pub fn get_all_info(&self) -> &[Student] {
        self.repo.get_all()
    }
}

fn validate_name(name: &str, event: &str) -> ServiceResult<()> {
    if name.trim().is_empty() {
        debug!("event={event} module=service status=rejected reason=empty_name");
        return Err(ServiceError::InvalidArgument {
            param: NAME_PARAM,
            message: EMPTY_NAME_MESSAGE,
        });
    }
    Ok(())
}
