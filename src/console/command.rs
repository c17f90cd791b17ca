use clap::error::ErrorKind;
use clap::{ColorChoice, Parser, Subcommand};
use thiserror::Error;

use crate::domain::FieldId;

const FIELDS_HELP: &str =
    "Fields: first-name, last-name, email, contact, department, designation, experience";

/// One console line: a single user gesture.
#[derive(Debug, Parser)]
#[command(
    name = "users_ui",
    no_binary_name = true,
    color = ColorChoice::Never,
    after_help = FIELDS_HELP
)]
struct ConsoleLine {
    #[command(subcommand)]
    command: Command,
}

/// One user gesture against the users list.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    #[command(about = "Click the Register User / Hide Form button")]
    Toggle,
    #[command(alias = "set", about = "Replace a field's value; no value clears it")]
    Change {
        field: FieldId,
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
    #[command(about = "Type text into a field one key at a time, then tab away")]
    Type {
        field: FieldId,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    #[command(about = "Move focus away from a field")]
    Blur { field: FieldId },
    #[command(about = "Click Add User")]
    Submit,
    #[command(alias = "show", about = "Print the page markup")]
    Render,
    #[command(alias = "list", about = "Print the current records")]
    Records,
    #[command(alias = "exit", about = "Leave the console")]
    Quit,
}

/// A line clap could not turn into a [`Command`]. Requests for help land
/// here too, see [`CommandError::is_help`].
#[derive(Debug, Error)]
#[error("{}", .0.to_string().trim_end())]
pub struct CommandError(#[from] clap::Error);

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        self.0.kind()
    }

    pub fn is_help(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        )
    }
}

impl Command {
    /// Parses a line. Blank lines and `#` comments yield `None`.
    ///
    /// The line splits into at most three words: the command, the field and
    /// the rest, so values keep their inner spaces.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let parsed = ConsoleLine::try_parse_from(split_line(line))?;
        Ok(Some(parsed.command))
    }
}

fn split_line(line: &str) -> Vec<&str> {
    let (word, rest) = split_word(line);
    let (field, value) = split_word(rest);
    [word, field, value]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect()
}

fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(line: &str) -> CommandError {
        Command::parse(line).unwrap_err()
    }

    #[test]
    fn parses_gestures() {
        assert_eq!(Command::parse("toggle").unwrap(), Some(Command::Toggle));
        assert_eq!(Command::parse("  submit ").unwrap(), Some(Command::Submit));
        assert_eq!(
            Command::parse("change first_name Ravi  Kumar").unwrap(),
            Some(Command::Change {
                field: FieldId::FirstName,
                value: Some("Ravi  Kumar".to_string())
            })
        );
        assert_eq!(
            Command::parse("type email ravi@gmail.com").unwrap(),
            Some(Command::Type {
                field: FieldId::Email,
                text: "ravi@gmail.com".to_string()
            })
        );
        assert_eq!(
            Command::parse("blur Experience").unwrap(),
            Some(Command::Blur {
                field: FieldId::Experience
            })
        );
    }

    #[test]
    fn aliases_map_to_the_same_gesture() {
        assert_eq!(Command::parse("list").unwrap(), Some(Command::Records));
        assert_eq!(Command::parse("show").unwrap(), Some(Command::Render));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
        assert!(matches!(
            Command::parse("set contact 555").unwrap(),
            Some(Command::Change {
                field: FieldId::Contact,
                ..
            })
        ));
    }

    #[test]
    fn change_without_value_clears() {
        assert_eq!(
            Command::parse("change department").unwrap(),
            Some(Command::Change {
                field: FieldId::Department,
                value: None
            })
        );
    }

    #[test]
    fn values_may_start_with_a_dash() {
        assert_eq!(
            Command::parse("change experience -1").unwrap(),
            Some(Command::Change {
                field: FieldId::Experience,
                value: Some("-1".to_string())
            })
        );
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert!(Command::parse("   ").unwrap().is_none());
        assert!(Command::parse("# fill the form").unwrap().is_none());
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(parse_err("dance").kind(), ErrorKind::InvalidSubcommand);
        assert_eq!(parse_err("blur").kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(parse_err("type email").kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(parse_err("change age 3").kind(), ErrorKind::ValueValidation);
        assert!(parse_err("change age 3").to_string().contains("Unknown field: age"));
        assert!(!parse_err("dance").is_help());
    }

    #[test]
    fn help_lists_every_command() {
        let err = parse_err("help");
        assert!(err.is_help());
        let text = err.to_string();
        for command in ["toggle", "change", "type", "blur", "submit", "render", "records", "quit"] {
            assert!(text.contains(command), "help is missing {command}");
        }
        assert!(text.contains("first-name"));
    }
}
