//! Session services over the phone book core.
//!
//! # Responsibility
//! - Turn presentation events into store and draft mutations.
//! - Keep front ends (CLI, FFI) decoupled from store internals.

pub mod phonebook;
