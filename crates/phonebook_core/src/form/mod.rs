//! Pending form input for one session.
//!
//! # Responsibility
//! - Hold the `name`, `number` and `filter` drafts fed by input events.
//! - Map event field keys onto typed draft fields.
//!
//! # Invariants
//! - A field update overwrites exactly one draft.
//! - Clearing after a successful submit never touches the filter draft.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Editable draft field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Number,
    Filter,
}

impl Field {
    /// Stable key used by input events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Number => "number",
            Self::Filter => "filter",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "name" => Ok(Self::Name),
            "number" => Ok(Self::Number),
            "filter" => Ok(Self::Filter),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Error for input events that do not address a known draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    UnknownField(String),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(value) => {
                write!(f, "unknown field `{value}`; expected name|number|filter")
            }
        }
    }
}

impl Error for FormError {}

/// Observable submit lifecycle.
///
/// `Submitted` is reported only as the result of a successful submit; the
/// session is back in `Editing` before the next event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Current draft values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drafts {
    pub name: String,
    pub number: String,
    pub filter: String,
}

impl Drafts {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Number => &self.number,
            Field::Filter => &self.filter,
        }
    }

    /// Overwrites one draft with `value` as-is.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Number => &mut self.number,
            Field::Filter => &mut self.filter,
        };
        *slot = value.into();
    }

    /// Resets name and number after a successful submit.
    pub fn clear_contact_fields(&mut self) {
        self.name.clear();
        self.number.clear();
    }
}
