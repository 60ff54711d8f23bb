use phonebook_core::{
    Contact, ContactStore, Drafts, Effect, Field, FieldValidationError, FormPhase, Message,
    PhoneBook, PhoneBookError,
};
use uuid::Uuid;

fn set(book: &mut PhoneBook, field: Field, value: &str) {
    book.dispatch(Message::SetField {
        field,
        value: value.to_string(),
    })
    .unwrap();
}

fn names(book: &PhoneBook) -> Vec<String> {
    book.contacts().iter().map(|c| c.name().to_string()).collect()
}

#[test]
fn end_to_end_submit_reject_accept_and_remove() {
    let mut book = PhoneBook::with_demo_contacts();
    let apple_id = book.contacts()[0].id();

    set(&mut book, Field::Name, "Apple");
    set(&mut book, Field::Number, "000");
    let err = book.dispatch(Message::Submit).unwrap_err();
    assert_eq!(
        err,
        PhoneBookError::DuplicateName {
            name: "Apple".to_string()
        }
    );
    assert_eq!(err.user_message(), "Apple is already in contacts list");
    assert_eq!(book.contacts().len(), 2);

    set(&mut book, Field::Name, "Nokia");
    let effect = book.dispatch(Message::Submit).unwrap();
    assert!(matches!(effect, Effect::ContactAdded(ref c) if c.name() == "Nokia"));
    assert_eq!(effect.phase(), FormPhase::Submitted);
    assert_eq!(names(&book), vec!["Nokia", "Apple", "Android"]);

    book.dispatch(Message::RemoveContact { id: apple_id }).unwrap();
    assert_eq!(names(&book), vec!["Nokia", "Android"]);
}

#[test]
fn rejected_submit_leaves_drafts_untouched() {
    let mut book = PhoneBook::with_demo_contacts();
    set(&mut book, Field::Name, "apple");
    set(&mut book, Field::Number, "555");
    set(&mut book, Field::Filter, "a");

    assert!(book.dispatch(Message::Submit).is_err());

    let expected = Drafts {
        name: "apple".to_string(),
        number: "555".to_string(),
        filter: "a".to_string(),
    };
    assert_eq!(book.drafts(), &expected);
}

#[test]
fn successful_submit_resets_name_and_number_only() {
    let mut book = PhoneBook::new();
    set(&mut book, Field::Filter, "no");
    set(&mut book, Field::Name, "  Nokia ");
    set(&mut book, Field::Number, " +1 (555) 123-4567 ");

    let effect = book.dispatch(Message::Submit).unwrap();
    let Effect::ContactAdded(contact) = effect else {
        panic!("expected ContactAdded");
    };
    assert_eq!(contact.name(), "Nokia");
    assert_eq!(contact.number(), "+1 (555) 123-4567");

    assert_eq!(book.drafts().name, "");
    assert_eq!(book.drafts().number, "");
    assert_eq!(book.drafts().filter, "no");
}

#[test]
fn invalid_fields_are_rejected_without_state_change() {
    let mut book = PhoneBook::with_demo_contacts();
    let before = book.contacts().to_vec();

    set(&mut book, Field::Name, "R2D2");
    set(&mut book, Field::Number, "000");
    let err = book.dispatch(Message::Submit).unwrap_err();
    assert_eq!(
        err,
        PhoneBookError::InvalidField(FieldValidationError::InvalidName("R2D2".to_string()))
    );

    set(&mut book, Field::Name, "Nokia");
    set(&mut book, Field::Number, "   ");
    let err = book.dispatch(Message::Submit).unwrap_err();
    assert_eq!(
        err,
        PhoneBookError::InvalidField(FieldValidationError::EmptyNumber)
    );

    assert_eq!(book.contacts(), before.as_slice());
    assert_eq!(book.drafts().name, "Nokia");
    assert_eq!(book.drafts().number, "   ");
}

#[test]
fn filter_draft_drives_visible_contacts_without_touching_other_state() {
    let mut book = PhoneBook::with_demo_contacts();
    set(&mut book, Field::Name, "Nokia");
    set(&mut book, Field::Number, "000");
    let before = book.contacts().to_vec();

    set(&mut book, Field::Filter, "AN");
    let visible: Vec<&str> = book.visible_contacts().iter().map(|c| c.name()).collect();
    assert_eq!(visible, vec!["Android"]);

    assert_eq!(book.contacts(), before.as_slice());
    assert_eq!(book.drafts().name, "Nokia");
    assert_eq!(book.drafts().number, "000");

    set(&mut book, Field::Filter, "");
    assert_eq!(book.visible_contacts().len(), 2);
}

#[test]
fn add_contact_message_uses_explicit_values_and_clears_drafts() {
    let mut book = PhoneBook::new();
    set(&mut book, Field::Name, "Draft");

    let effect = book
        .dispatch(Message::AddContact {
            name: "Zoe".to_string(),
            number: "111".to_string(),
        })
        .unwrap();
    assert!(matches!(effect, Effect::ContactAdded(_)));
    assert_eq!(book.drafts().name, "");
    assert_eq!(names(&book), vec!["Zoe"]);
}

#[test]
fn remove_unknown_id_reports_noop() {
    let mut book = PhoneBook::with_demo_contacts();
    let id = Uuid::new_v4();

    let effect = book.dispatch(Message::RemoveContact { id }).unwrap();
    assert_eq!(effect, Effect::ContactRemoved { id, removed: false });
    assert_eq!(book.contacts().len(), 2);
}

#[test]
fn remove_twice_matches_single_remove() {
    let mut book = PhoneBook::with_demo_contacts();
    let id = book.contacts()[1].id();

    let first = book.dispatch(Message::RemoveContact { id }).unwrap();
    let after_first = book.contacts().to_vec();
    let second = book.dispatch(Message::RemoveContact { id }).unwrap();

    assert_eq!(first, Effect::ContactRemoved { id, removed: true });
    assert_eq!(second, Effect::ContactRemoved { id, removed: false });
    assert_eq!(book.contacts(), after_first.as_slice());
}

#[test]
fn set_field_by_key_rejects_unknown_keys() {
    let mut book = PhoneBook::new();
    book.set_field_by_key("number", "123").unwrap();
    assert_eq!(book.drafts().number, "123");

    let err = book.set_field_by_key("email", "x").unwrap_err();
    assert_eq!(err, PhoneBookError::UnknownField("email".to_string()));
}

#[test]
fn with_store_reuses_existing_collection() {
    let store = ContactStore::from_contacts([Contact::new("Apple", "1")]);
    let mut book = PhoneBook::with_store(store);

    let err = book
        .dispatch(Message::AddContact {
            name: "APPLE".to_string(),
            number: "2".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, PhoneBookError::DuplicateName { .. }));
    assert_eq!(book.store().len(), 1);
}

#[test]
fn submit_accepts_extended_latin_names() {
    let mut book = PhoneBook::new();
    for name in ["Łukasz", "Antonín Dvořák", "Ştefan"] {
        set(&mut book, Field::Name, name);
        set(&mut book, Field::Number, "000");
        book.dispatch(Message::Submit).unwrap();
    }
    assert_eq!(names(&book), vec!["Ştefan", "Antonín Dvořák", "Łukasz"]);

    set(&mut book, Field::Name, "ŁUKASZ");
    set(&mut book, Field::Number, "111");
    let err = book.dispatch(Message::Submit).unwrap_err();
    assert!(matches!(err, PhoneBookError::DuplicateName { .. }));
}
