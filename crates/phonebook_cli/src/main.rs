//! Terminal front end for the phone book core.
//!
//! # Responsibility
//! - Forward line commands as input events into one `PhoneBook` session.
//! - Print drafts, notices and the filtered contact list.
//!
//! # Invariants
//! - All state lives in `phonebook_core`; this binary only renders it.

mod command;

use command::{parse_command, Command};
use log::info;
use phonebook_core::{ContactId, Effect, Message, PhoneBook};
use std::io::{self, BufRead, Write};

const LOG_DIR_ENV: &str = "PHONEBOOK_LOG_DIR";
const LOG_LEVEL_ENV: &str = "PHONEBOOK_LOG_LEVEL";
const DEMO_CONTACTS_ENV: &str = "PHONEBOOK_DEMO_CONTACTS";

const HELP: &str = "\
commands:
  name <text>       set name draft
  number <text>     set number draft
  filter [text]     set filter (empty shows all)
  add               add contact from drafts
  delete <n|id>     delete by list position or id
  list              show contacts
  quit              exit";

fn main() {
    if let Err(err) = init_logging_from_env() {
        eprintln!("logging disabled: {err}");
    }

    let mut book = if env_flag_enabled(std::env::var(DEMO_CONTACTS_ENV).ok().as_deref()) {
        PhoneBook::with_demo_contacts()
    } else {
        PhoneBook::new()
    };
    info!(
        "event=cli_start module=cli status=ok version={} contacts={}",
        phonebook_core::core_version(),
        book.contacts().len()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(&mut book, stdin.lock(), stdout.lock()) {
        eprintln!("phonebook: {err}");
        std::process::exit(1);
    }
}

fn init_logging_from_env() -> Result<(), String> {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return Ok(());
    };
    let level = std::env::var(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| phonebook_core::default_log_level().to_string());
    phonebook_core::init_logging(&level, &log_dir)
}

fn env_flag_enabled(raw: Option<&str>) -> bool {
    !matches!(
        raw.map(|value| value.trim().to_ascii_lowercase()).as_deref(),
        Some("0" | "false" | "no" | "off")
    )
}

/// Reads commands until EOF or `quit`, rendering after every state change.
fn run(book: &mut PhoneBook, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "Phone Book ({})", phonebook_core::core_version())?;
    render(book, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "! {err}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::List => render(book, &mut output)?,
            Command::Set(field, value) => {
                book.dispatch(Message::SetField { field, value })
                    .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
                if field == phonebook_core::Field::Filter {
                    render(book, &mut output)?;
                }
            }
            Command::Submit => match book.dispatch(Message::Submit) {
                Ok(Effect::ContactAdded(contact)) => {
                    writeln!(output, "added {}: {}", contact.name(), contact.number())?;
                    render(book, &mut output)?;
                }
                Ok(_) => {}
                Err(err) => writeln!(output, "! {}", err.user_message())?,
            },
            Command::Delete(target) => match resolve_target(book, &target) {
                Some(id) => {
                    if let Ok(Effect::ContactRemoved { removed: true, .. }) =
                        book.dispatch(Message::RemoveContact { id })
                    {
                        writeln!(output, "deleted")?;
                    }
                    render(book, &mut output)?;
                }
                None => writeln!(output, "! no contact at `{target}`")?,
            },
        }
    }
    Ok(())
}

/// Resolves a 1-based position in the visible list, or a full contact id.
fn resolve_target(book: &PhoneBook, target: &str) -> Option<ContactId> {
    if let Ok(position) = target.parse::<usize>() {
        let visible = book.visible_contacts();
        return position
            .checked_sub(1)
            .and_then(|index| visible.get(index))
            .map(|contact| contact.id());
    }
    target.parse::<ContactId>().ok()
}

fn render(book: &PhoneBook, output: &mut impl Write) -> io::Result<()> {
    let drafts = book.drafts();
    writeln!(
        output,
        "[name: {:?} | number: {:?} | filter: {:?}]",
        drafts.name, drafts.number, drafts.filter
    )?;

    let visible = book.visible_contacts();
    if visible.is_empty() {
        writeln!(output, "  (no contacts)")?;
    }
    for (index, contact) in visible.iter().enumerate() {
        writeln!(
            output,
            "  {}. {}: {}  [{}]",
            index + 1,
            contact.name(),
            contact.number(),
            contact.id()
        )?;
    }
    Ok(())
}
