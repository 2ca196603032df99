//! Student repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/remove/get/list over an insertion-ordered collection.
//! - Keep membership changes inside the repository boundary.
//!
//! # Invariants
//! - Name lookups are linear scans returning the first exact match.
//! - Duplicate names are stored as-is; no dedup on insert.
//! - `get_all` exposes a read-only view; only `add`/`remove` change membership.

use crate::model::student::Student;

/// Repository interface for student record storage.
pub trait StudentRepository {
    /// Appends a record. Never fails.
    fn add(&mut self, student: Student);
    /// Removes the first record named `name`. Returns `false` when none matched.
    fn remove(&mut self, name: &str) -> bool;
    fn get(&self, name: &str) -> Option<&Student>;
    /// Mutable access to the first record named `name`, for in-place edits.
    fn get_mut(&mut self, name: &str) -> Option<&mut Student>;
    /// All records in insertion order.
    fn get_all(&self) -> &[Student];
}

/// Vec-backed student repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentRepository {
    students: Vec<Student>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.students.iter().position(|student| student.name == name)
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                // Must preserve insertion order of the remaining records.
                self.students.remove(index);
                true
            }
            None => false,
        }
    }

    fn get(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Student> {
        self.students
            .iter_mut()
            .find(|student| student.name == name)
    }

    fn get_all(&self) -> &[Student] {
        &self.students
    }
}
