//! Read-side projections over the contact collection.
//!
//! # Responsibility
//! - Keep visible-list derivation pure and separate from store writes.

pub mod filter;
