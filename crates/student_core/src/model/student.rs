//! Student record model.
//!
//! # Responsibility
//! - Define the four-field student record handled by the store.
//! - Provide the full-overwrite helper used by update flows.
//!
//! # Invariants
//! - A record has no identity beyond `name`; two records with equal names
//!   are distinct entries in the store.
//! - `overwrite_from` replaces every field, never a subset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One student entry: name, date of birth, address and phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Lookup key for name-based operations. Compared with exact `==`.
    pub name: String,
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub phone_number: String,
}

impl Student {
    /// Creates a record from its four fields.
    pub fn new(
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
            address: address.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Overwrites all four fields with values from `other`.
    pub fn overwrite_from(&mut self, other: &Student) {
        self.name.clone_from(&other.name);
        self.date_of_birth = other.date_of_birth;
        self.address.clone_from(&other.address);
        self.phone_number.clone_from(&other.phone_number);
    }
}
