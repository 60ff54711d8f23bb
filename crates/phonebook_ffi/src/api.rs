//! FFI session API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose input events (field change, submit, delete) to Dart via FRB.
//! - Return render-ready snapshots of drafts and visible contacts.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One session per process; every call holds the session lock for its
//!   whole duration, so events apply in delivery order.
//!
//! # See also
//! - phonebook_core::service::phonebook

use log::warn;
use phonebook_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Contact, ContactId, Effect, Message, PhoneBook, PhoneBookError,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

const DEMO_CONTACTS_ENV: &str = "PHONEBOOK_DEMO_CONTACTS";
static SESSION: OnceLock<Mutex<PhoneBook>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Contact row for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    /// Stable contact ID in string form.
    pub contact_id: String,
    pub name: String,
    pub number: String,
}

/// Current controlled-input values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftsSnapshot {
    pub name: String,
    pub number: String,
    pub filter: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneBookActionResponse {
    /// Whether the event was applied.
    pub ok: bool,
    /// Contact ID affected by submit/remove, when any.
    pub contact_id: Option<String>,
    /// Notice text; non-empty on rejection so the UI can alert the user.
    pub message: String,
}

impl PhoneBookActionResponse {
    fn success(message: impl Into<String>, contact_id: Option<ContactId>) -> Self {
        Self {
            ok: true,
            contact_id: contact_id.map(|id| id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            contact_id: None,
            message: message.into(),
        }
    }
}

impl From<Result<Effect, PhoneBookError>> for PhoneBookActionResponse {
    fn from(value: Result<Effect, PhoneBookError>) -> Self {
        match value {
            Ok(Effect::FieldUpdated(_)) => Self::success("", None),
            Ok(Effect::ContactAdded(contact)) => {
                Self::success("Contact added.", Some(contact.id()))
            }
            Ok(Effect::ContactRemoved { id, removed: true }) => {
                Self::success("Contact removed.", Some(id))
            }
            Ok(Effect::ContactRemoved { id, removed: false }) => {
                Self::success("Contact not found.", Some(id))
            }
            Err(err) => Self::failure(err.user_message()),
        }
    }
}

/// Overwrites one draft (`name|number|filter`).
#[flutter_rust_bridge::frb(sync)]
pub fn phonebook_set_field(field: String, value: String) -> PhoneBookActionResponse {
    with_session(|book| book.set_field_by_key(field.as_str(), value)).into()
}

/// Submits the current name/number drafts.
///
/// # FFI contract
/// - On rejection (`ok=false`), `message` carries the user-facing notice and
///   drafts are left for correction.
#[flutter_rust_bridge::frb(sync)]
pub fn phonebook_submit() -> PhoneBookActionResponse {
    with_session(|book| book.dispatch(Message::Submit)).into()
}

/// Removes one contact by ID. Unknown IDs succeed as no-ops.
#[flutter_rust_bridge::frb(sync)]
pub fn phonebook_remove(contact_id: String) -> PhoneBookActionResponse {
    let id = match contact_id.trim().parse::<ContactId>() {
        Ok(id) => id,
        Err(err) => {
            return PhoneBookActionResponse::failure(format!(
                "phonebook_remove failed: invalid contact_id `{contact_id}`: {err}"
            ))
        }
    };
    with_session(|book| book.dispatch(Message::RemoveContact { id })).into()
}

/// Contacts matching the current filter draft, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn phonebook_visible() -> Vec<ContactItem> {
    with_session(|book| {
        book.visible_contacts()
            .into_iter()
            .map(to_contact_item)
            .collect()
    })
}

/// Current draft values for controlled inputs.
#[flutter_rust_bridge::frb(sync)]
pub fn phonebook_drafts() -> DraftsSnapshot {
    with_session(|book| {
        let drafts = book.drafts();
        DraftsSnapshot {
            name: drafts.name.clone(),
            number: drafts.number.clone(),
            filter: drafts.filter.clone(),
        }
    })
}

fn with_session<T>(f: impl FnOnce(&mut PhoneBook) -> T) -> T {
    let mut guard = lock_session();
    f(&mut *guard)
}

fn lock_session() -> MutexGuard<'static, PhoneBook> {
    let session = SESSION.get_or_init(|| Mutex::new(new_session()));
    session.lock().unwrap_or_else(|poisoned| {
        // Every reducer step applies fully or not at all.
        warn!("event=session_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn new_session() -> PhoneBook {
    if demo_contacts_enabled(std::env::var(DEMO_CONTACTS_ENV).ok().as_deref()) {
        PhoneBook::with_demo_contacts()
    } else {
        PhoneBook::new()
    }
}

fn demo_contacts_enabled(raw: Option<&str>) -> bool {
    !matches!(
        raw.map(|value| value.trim().to_ascii_lowercase()).as_deref(),
        Some("0" | "false" | "no" | "off")
    )
}

fn to_contact_item(contact: &Contact) -> ContactItem {
    ContactItem {
        contact_id: contact.id().to_string(),
        name: contact.name().to_string(),
        number: contact.number().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, demo_contacts_enabled, init_logging, phonebook_drafts, phonebook_remove,
        phonebook_set_field, phonebook_submit, phonebook_visible, ping,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/phonebook-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn demo_contacts_flag_parsing() {
        assert!(demo_contacts_enabled(None));
        assert!(demo_contacts_enabled(Some("1")));
        assert!(!demo_contacts_enabled(Some(" FALSE ")));
        assert!(!demo_contacts_enabled(Some("0")));
    }

    #[test]
    fn remove_rejects_malformed_id() {
        let response = phonebook_remove("not-a-uuid".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("invalid contact_id"));
    }

    // The session is process-global; keep every stateful step in one test.
    #[test]
    fn session_flow_submit_filter_and_remove() {
        let unknown = phonebook_set_field("email".to_string(), "x".to_string());
        assert!(!unknown.ok);
        assert!(unknown.message.contains("unknown field"));

        assert!(phonebook_set_field("name".to_string(), "Nokia".to_string()).ok);
        assert!(phonebook_set_field("number".to_string(), "000".to_string()).ok);
        let added = phonebook_submit();
        assert!(added.ok, "{}", added.message);
        let nokia_id = added.contact_id.expect("submit should return contact_id");

        let drafts = phonebook_drafts();
        assert_eq!(drafts.name, "");
        assert_eq!(drafts.number, "");

        assert!(phonebook_set_field("name".to_string(), "NOKIA".to_string()).ok);
        assert!(phonebook_set_field("number".to_string(), "111".to_string()).ok);
        let duplicate = phonebook_submit();
        assert!(!duplicate.ok);
        assert_eq!(duplicate.message, "NOKIA is already in contacts list");
        assert_eq!(phonebook_drafts().name, "NOKIA");

        assert!(phonebook_set_field("filter".to_string(), "nok".to_string()).ok);
        let visible = phonebook_visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].contact_id, nokia_id);

        let removed = phonebook_remove(nokia_id.clone());
        assert!(removed.ok);
        assert_eq!(removed.message, "Contact removed.");
        assert!(phonebook_visible().is_empty());

        let again = phonebook_remove(nokia_id);
        assert!(again.ok);
        assert_eq!(again.message, "Contact not found.");
    }
}
