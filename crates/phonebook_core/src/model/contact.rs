//! Contact domain model.
//!
//! # Responsibility
//! - Define the immutable name/number record held by the contact store.
//! - Provide the normalized-name projection used by duplicate checks and
//!   the filter view.
//!
//! # Invariants
//! - `id` is generated once and never reused for another contact.
//! - `id` is never the nil UUID.
//! - Fields are read-only after construction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one contact.
pub type ContactId = Uuid;

/// Construction error for caller-provided contact identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    /// Nil UUID is reserved and cannot identify a contact.
    NilId,
}

impl Display for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "contact id must not be nil"),
        }
    }
}

impl Error for ContactError {}

/// One phone book entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactRecord")]
pub struct Contact {
    id: ContactId,
    name: String,
    number: String,
    #[serde(skip_serializing)]
    normalized_name: String,
}

/// Unchecked wire shape, validated into `Contact` on deserialize.
#[derive(Deserialize)]
struct ContactRecord {
    id: ContactId,
    name: String,
    number: String,
}

impl TryFrom<ContactRecord> for Contact {
    type Error = ContactError;

    fn try_from(value: ContactRecord) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.name, value.number)
    }
}

impl Contact {
    /// Creates a contact with a freshly generated id.
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self::build(Uuid::new_v4(), name.into(), number.into())
    }

    /// Creates a contact with a caller-provided id.
    ///
    /// Used when identity already exists outside the store (snapshots, tests).
    ///
    /// # Errors
    /// - Returns `ContactError::NilId` for `Uuid::nil()`.
    pub fn with_id(
        id: ContactId,
        name: impl Into<String>,
        number: impl Into<String>,
    ) -> Result<Self, ContactError> {
        if id.is_nil() {
            return Err(ContactError::NilId);
        }
        Ok(Self::build(id, name.into(), number.into()))
    }

    fn build(id: ContactId, name: String, number: String) -> Self {
        let normalized_name = normalize_name(&name);
        Self {
            id,
            name,
            number,
            normalized_name,
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Lowercased name used for duplicate detection and filtering.
    ///
    /// Computed once at construction.
    pub fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

/// Case-folds a name or query for comparison.
///
/// Uses Unicode lowercasing, so Cyrillic and Latin-1 letters fold as well.
pub fn normalize_name(value: &str) -> String {
    value.to_lowercase()
}
