//! Ordered contact collection with duplicate-name rejection.
//!
//! # Responsibility
//! - Provide add/remove/read APIs over the session's contacts.
//! - Keep the collection state unchanged on every rejected write.
//!
//! # Invariants
//! - `add` prepends; `remove` preserves relative order of the rest.
//! - Name comparison uses `normalize_name` (Unicode lowercase).
//! - Removing an unknown id is a no-op, never an error.

use crate::model::contact::{normalize_name, Contact, ContactId};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level write rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A contact with the same normalized name already exists.
    DuplicateName { name: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName { name } => write!(f, "{name} is already in contacts list"),
        }
    }
}

impl Error for StoreError {}

/// Ordered, newest-first contact collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an existing newest-first sequence.
    ///
    /// Later entries whose normalized name repeats an earlier one are dropped,
    /// so the uniqueness invariant holds for any input.
    pub fn from_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let mut store = Self::new();
        for contact in contacts {
            if store.contains_name(contact.name()) {
                debug!(
                    "event=contact_seed module=store status=skipped reason=duplicate_name contact_id={}",
                    contact.id()
                );
                continue;
            }
            store.contacts.push(contact);
        }
        store
    }

    /// Adds one contact at the front of the collection.
    ///
    /// The caller is expected to pass trimmed, field-validated values.
    ///
    /// # Errors
    /// - `StoreError::DuplicateName` when the normalized name is taken. The
    ///   collection is left untouched.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        number: impl Into<String>,
    ) -> StoreResult<Contact> {
        let name = name.into();
        if self.contains_name(&name) {
            info!(
                "event=contact_add module=store status=rejected reason=duplicate_name total={}",
                self.contacts.len()
            );
            return Err(StoreError::DuplicateName { name });
        }

        let contact = Contact::new(name, number);
        self.contacts.insert(0, contact.clone());
        info!(
            "event=contact_add module=store status=ok contact_id={} total={}",
            contact.id(),
            self.contacts.len()
        );
        Ok(contact)
    }

    /// Removes the contact with `id`, returning it when present.
    pub fn remove(&mut self, id: ContactId) -> Option<Contact> {
        let index = self.contacts.iter().position(|item| item.id() == id)?;
        let removed = self.contacts.remove(index);
        info!(
            "event=contact_remove module=store status=ok contact_id={} total={}",
            id,
            self.contacts.len()
        );
        Some(removed)
    }

    /// Returns whether a contact with the same normalized name exists.
    ///
    /// Only the candidate `name` is lowercased; stored contacts carry their
    /// normalized name from construction.
    pub fn contains_name(&self, name: &str) -> bool {
        let normalized = normalize_name(name);
        self.contacts
            .iter()
            .any(|item| item.normalized_name() == normalized.as_str())
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|item| item.id() == id)
    }

    /// All contacts, newest first.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
