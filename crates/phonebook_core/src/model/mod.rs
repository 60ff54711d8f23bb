//! Domain model for phone book contacts.
//!
//! # Responsibility
//! - Define the contact record shared by store, filter view and front ends.
//! - Own the field-level validation grammar for names and numbers.
//!
//! # Invariants
//! - Every contact is identified by a stable `ContactId`.
//! - Contacts are never edited in place; removal is the only lifecycle exit.

pub mod contact;
pub mod validation;
