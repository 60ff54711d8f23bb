//! Case-insensitive name filter over the contact collection.
//!
//! # Responsibility
//! - Derive the visible contact subset from the collection and filter text.
//!
//! # Invariants
//! - Pure: never mutates the collection.
//! - Result order equals collection order.
//! - The query is not trimmed; surrounding spaces are part of the match.

use crate::model::contact::{normalize_name, Contact};

/// Returns contacts whose name contains `filter_text`, ignoring case.
///
/// An empty filter returns the full collection.
pub fn visible<'a>(contacts: &'a [Contact], filter_text: &str) -> Vec<&'a Contact> {
    if filter_text.is_empty() {
        return contacts.iter().collect();
    }

    let needle = normalize_name(filter_text);
    contacts
        .iter()
        .filter(|contact| contact.normalized_name().contains(needle.as_str()))
        .collect()
}
