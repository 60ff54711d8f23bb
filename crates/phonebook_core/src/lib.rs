//! Core domain logic for the phone book.
//! This crate is the single source of truth for contact invariants.

pub mod form;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use form::{Drafts, Field, FormError, FormPhase};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{normalize_name, Contact, ContactError, ContactId};
pub use model::validation::{
    validate_contact_fields, validate_name, validate_number, FieldValidationError,
};
pub use search::filter::visible;
pub use service::phonebook::{Effect, Message, PhoneBook, PhoneBookError};
pub use store::contact_store::{ContactStore, StoreError, StoreResult};

/// Minimal health-check API for front-end wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
