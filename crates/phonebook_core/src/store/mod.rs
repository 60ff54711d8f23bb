//! In-memory contact storage.
//!
//! # Responsibility
//! - Own the ordered contact collection for one session.
//! - Enforce duplicate-name rejection at the single write entry point.
//!
//! # Invariants
//! - No two stored contacts share a lowercase-normalized name.
//! - Newest contact is always at the front.

pub mod contact_store;
