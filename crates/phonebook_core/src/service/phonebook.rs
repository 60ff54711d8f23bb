//! Phone book session and event reducer.
//!
//! # Responsibility
//! - Own the contact store and form drafts for one UI session.
//! - Apply input events through a single `dispatch` entry point.
//! - Run the submit pipeline: trim, validate, duplicate-check, insert, reset.
//!
//! # Invariants
//! - A rejected submit leaves drafts and collection untouched.
//! - A successful submit clears name/number drafts and keeps the filter.
//! - Filter updates never touch the collection or the contact drafts.

use crate::form::{Drafts, Field, FormError, FormPhase};
use crate::model::contact::{Contact, ContactId};
use crate::model::validation::{validate_contact_fields, FieldValidationError};
use crate::search::filter::visible;
use crate::store::contact_store::{ContactStore, StoreError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Contacts present when a demo session starts, oldest last.
const DEMO_CONTACTS: &[(&str, &str)] = &[("Apple", "12349999"), ("Android", "54399921")];

/// Input event accepted by the session reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Overwrites one draft field.
    SetField { field: Field, value: String },
    /// Adds a contact from the current name/number drafts.
    Submit,
    /// Adds a contact from explicit values.
    AddContact { name: String, number: String },
    /// Removes one contact; unknown ids are ignored.
    RemoveContact { id: ContactId },
}

/// State change produced by one dispatched message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FieldUpdated(Field),
    ContactAdded(Contact),
    ContactRemoved { id: ContactId, removed: bool },
}

impl Effect {
    /// Form phase observed right after this effect.
    pub fn phase(&self) -> FormPhase {
        match self {
            Self::ContactAdded(_) => FormPhase::Submitted,
            _ => FormPhase::Editing,
        }
    }
}

/// Session-level rejection. No variant is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneBookError {
    DuplicateName { name: String },
    InvalidField(FieldValidationError),
    UnknownField(String),
}

impl PhoneBookError {
    /// Notice text for the presentation layer.
    pub fn user_message(&self) -> String {
        match self {
            Self::DuplicateName { name } => format!("{name} is already in contacts list"),
            Self::InvalidField(err) => format!("{err}. {}", err.hint()),
            Self::UnknownField(_) => self.to_string(),
        }
    }
}

impl Display for PhoneBookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName { name } => write!(f, "duplicate contact name: `{name}`"),
            Self::InvalidField(err) => write!(f, "{err}"),
            Self::UnknownField(value) => {
                write!(f, "unknown field `{value}`; expected name|number|filter")
            }
        }
    }
}

impl Error for PhoneBookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidField(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for PhoneBookError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::DuplicateName { name } => Self::DuplicateName { name },
        }
    }
}

impl From<FieldValidationError> for PhoneBookError {
    fn from(value: FieldValidationError) -> Self {
        Self::InvalidField(value)
    }
}

impl From<FormError> for PhoneBookError {
    fn from(value: FormError) -> Self {
        match value {
            FormError::UnknownField(field) => Self::UnknownField(field),
        }
    }
}

/// One phone book session: contacts plus pending form input.
#[derive(Debug, Clone, Default)]
pub struct PhoneBook {
    store: ContactStore,
    drafts: Drafts,
}

impl PhoneBook {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session seeded with the demo contacts.
    pub fn with_demo_contacts() -> Self {
        Self::with_store(ContactStore::from_contacts(
            DEMO_CONTACTS
                .iter()
                .map(|(name, number)| Contact::new(*name, *number)),
        ))
    }

    /// Creates a session over an existing store with empty drafts.
    pub fn with_store(store: ContactStore) -> Self {
        Self {
            store,
            drafts: Drafts::default(),
        }
    }

    /// Applies one input event.
    ///
    /// # Errors
    /// - `DuplicateName` / `InvalidField` from the submit pipeline; state is
    ///   unchanged in both cases.
    pub fn dispatch(&mut self, message: Message) -> Result<Effect, PhoneBookError> {
        match message {
            Message::SetField { field, value } => {
                self.drafts.set(field, value);
                debug!("event=draft_update module=session status=ok field={field}");
                Ok(Effect::FieldUpdated(field))
            }
            Message::Submit => {
                let name = self.drafts.name.clone();
                let number = self.drafts.number.clone();
                self.add_contact(&name, &number).map(Effect::ContactAdded)
            }
            Message::AddContact { name, number } => {
                self.add_contact(&name, &number).map(Effect::ContactAdded)
            }
            Message::RemoveContact { id } => {
                let removed = self.store.remove(id).is_some();
                if !removed {
                    debug!("event=contact_remove module=session status=noop contact_id={id}");
                }
                Ok(Effect::ContactRemoved { id, removed })
            }
        }
    }

    /// Updates a draft addressed by its event key (`name|number|filter`).
    pub fn set_field_by_key(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<Effect, PhoneBookError> {
        let field = key.parse::<Field>()?;
        self.dispatch(Message::SetField {
            field,
            value: value.into(),
        })
    }

    /// Contacts matching the current filter draft, newest first.
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        visible(self.store.contacts(), &self.drafts.filter)
    }

    pub fn contacts(&self) -> &[Contact] {
        self.store.contacts()
    }

    pub fn drafts(&self) -> &Drafts {
        &self.drafts
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    fn add_contact(&mut self, name: &str, number: &str) -> Result<Contact, PhoneBookError> {
        let name = name.trim();
        let number = number.trim();
        if let Err(err) = validate_contact_fields(name, number) {
            debug!("event=contact_submit module=session status=rejected reason=invalid_field");
            return Err(err.into());
        }

        let contact = self.store.add(name, number)?;
        self.drafts.clear_contact_fields();
        Ok(contact)
    }
}
