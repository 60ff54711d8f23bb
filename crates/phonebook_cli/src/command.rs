//! Line command parsing for the terminal front end.

use phonebook_core::Field;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `name <v>`, `number <v>`, `filter [v]`.
    Set(Field, String),
    /// `add`
    Submit,
    /// `delete <n|id>`
    Delete(String),
    /// `list`
    List,
    Help,
    Quit,
}

/// Parses one input line; `Ok(None)` for blank lines.
///
/// Field values keep their inner whitespace; only the single space after the
/// keyword is consumed.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let trimmed = line.trim_start();
    let (keyword, rest) = match trimmed.split_once(' ') {
        Some((keyword, rest)) => (keyword, rest),
        None => (trimmed, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "name" => Command::Set(Field::Name, rest.to_string()),
        "number" => Command::Set(Field::Number, rest.to_string()),
        "filter" => Command::Set(Field::Filter, rest.to_string()),
        "add" | "submit" => Command::Submit,
        "delete" | "rm" => {
            let target = rest.trim();
            if target.is_empty() {
                return Err("delete expects a list position or contact id".to_string());
            }
            Command::Delete(target.to_string())
        }
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };
    Ok(Some(command))
}
