//! Core use-case services.
//!
//! # Responsibility
//! - Validate caller input before it reaches the repository.
//! - Keep callers decoupled from the storage implementation.

pub mod student_service;
