//! Field-level validation for contact drafts.
//!
//! # Responsibility
//! - Enforce the name and phone-number grammars before a contact is created.
//!
//! # Invariants
//! - Inputs are expected to be trimmed by the caller.
//! - Validation is pure; it never touches store or draft state.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Letters accepted in names: ASCII, Latin-1 letters, Latin Extended-A/B and
/// the Cyrillic block.
const NAME_LETTERS: &str = r"A-Za-zÀ-ÖØ-öø-ÿ\x{0100}-\x{024F}\x{0400}-\x{04FF}";

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^[{l}]+(?:[ '\-][{l} ]?[{l}]*)*$",
        l = NAME_LETTERS
    ))
    .expect("valid name regex")
});

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?(?:[0-9]{1,4}|\([0-9]{1,4}\))(?:[-. ]?(?:[0-9]{1,4}|\([0-9]{1,4}\)))*$")
        .expect("valid number regex")
});

/// Hint shown next to the name input.
pub const NAME_HINT: &str = "Name may contain only letters, apostrophe, dash and spaces. \
For example Adrian, Jacob Mercer, Charles de Batz de Castelmore d'Artagnan";

/// Hint shown next to the number input.
pub const NUMBER_HINT: &str = "Phone number must be digits and can contain spaces, dashes, \
parentheses and can start with +";

/// Rejection reason for a single draft field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    EmptyName,
    InvalidName(String),
    EmptyNumber,
    InvalidNumber(String),
}

impl FieldValidationError {
    /// Hint text for the field that failed.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::InvalidName(_) => NAME_HINT,
            Self::EmptyNumber | Self::InvalidNumber(_) => NUMBER_HINT,
        }
    }
}

impl Display for FieldValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name is required"),
            Self::InvalidName(value) => write!(f, "invalid name: `{value}`"),
            Self::EmptyNumber => write!(f, "number is required"),
            Self::InvalidNumber(value) => write!(f, "invalid number: `{value}`"),
        }
    }
}

impl Error for FieldValidationError {}

/// Validates one contact name.
pub fn validate_name(name: &str) -> Result<(), FieldValidationError> {
    if name.is_empty() {
        return Err(FieldValidationError::EmptyName);
    }
    if !NAME_RE.is_match(name) {
        return Err(FieldValidationError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Validates one phone number.
///
/// Grammar: optional leading `+`, digit groups of 1-4 digits separated by at
/// most one space, dash or dot, with at most one parenthesized group.
pub fn validate_number(number: &str) -> Result<(), FieldValidationError> {
    if number.is_empty() {
        return Err(FieldValidationError::EmptyNumber);
    }
    if !NUMBER_RE.is_match(number) || number.matches('(').count() > 1 {
        return Err(FieldValidationError::InvalidNumber(number.to_string()));
    }
    Ok(())
}

/// Validates both fields, name first.
pub fn validate_contact_fields(name: &str, number: &str) -> Result<(), FieldValidationError> {
    validate_name(name)?;
    validate_number(number)
}
