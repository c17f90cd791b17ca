use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use super::command::Command;
use crate::clients::UsersClient;
use crate::domain::UserRecord;
use crate::messages::ListOutcome;
use crate::users_list::view::EMPTY_PLACEHOLDER;
use crate::users_list::ListError;

/// Reads commands from `reader` until EOF or `quit`, applying each to the
/// users list and writing the result to `writer`.
///
/// Bad input and rejected gestures are reported and the loop keeps going;
/// only I/O failures end it early.
pub async fn run_console<R, W>(client: &UsersClient, reader: R, writer: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) if e.is_help() => {
                writer.write_all(format!("{}\n", e).as_bytes()).await?;
                continue;
            }
            Err(e) => {
                // clap's message already starts with `error:`.
                warn!(kind = ?e.kind(), "Rejected console input");
                writer.write_all(format!("{}\n", e).as_bytes()).await?;
                continue;
            }
        };

        if command == Command::Quit {
            info!("Quit requested");
            break;
        }

        debug!(?command, "Applying command");
        let output = match apply(client, command).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Command failed");
                format!("error: {}", e)
            }
        };
        writer.write_all(output.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(())
}

async fn apply(client: &UsersClient, command: Command) -> Result<String, ListError> {
    match command {
        Command::Toggle => Ok(if client.toggle_form().await? {
            "form shown".to_string()
        } else {
            "form hidden".to_string()
        }),
        Command::Change { field, value } => {
            Ok(describe(&client.change(field, value.unwrap_or_default()).await?))
        }
        Command::Type { field, text } => Ok(describe(&client.type_text(field, &text).await?)),
        Command::Blur { field } => Ok(describe(&client.blur(field).await?)),
        Command::Submit => {
            let record = client.submit().await?;
            Ok(format!("added #{} {} <{}>", record.id, record.name, record.email))
        }
        Command::Render => Ok(client.render_users().await?.to_string()),
        Command::Records => Ok(format_records(&client.records().await?)),
        Command::Quit => Ok(String::new()),
    }
}

fn describe(outcome: &ListOutcome) -> String {
    match outcome {
        ListOutcome::FormShown => "form shown".to_string(),
        ListOutcome::FormHidden => "form hidden".to_string(),
        ListOutcome::FieldChecked {
            field,
            check,
            submit_enabled,
        } => {
            let status = check.message().unwrap_or("ok");
            let submit = if *submit_enabled { "enabled" } else { "disabled" };
            format!("{}: {} (submit {})", field, status, submit)
        }
        ListOutcome::UserAdded { record, form_visible } => {
            let form = if *form_visible { "open" } else { "hidden" };
            format!("added #{} {} <{}> (form {})", record.id, record.name, record.email, form)
        }
    }
}

/// Plain-text rendering of the records table: position, name, email.
pub fn format_records(records: &[UserRecord]) -> String {
    if records.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let rows: Vec<[String; 3]> = records
        .iter()
        .enumerate()
        .map(|(i, r)| [(i + 1).to_string(), r.name.clone(), r.email.clone()])
        .collect();
    let headers = ["S.No.", "Name", "Email"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format!(
        "{:<w0$}  {:<w1$}  {}",
        headers[0],
        headers[1],
        headers[2],
        w0 = widths[0],
        w1 = widths[1]
    );
    for row in rows {
        out.push('\n');
        out.push_str(&format!(
            "{:<w0$}  {:<w1$}  {}",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1]
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_system::{UiConfig, UsersSystem};

    async fn run_script(config: &UiConfig, script: &str) -> String {
        let system = UsersSystem::new(config);
        let mut out = Vec::new();
        run_console(&system.users_client, script.as_bytes(), &mut out)
            .await
            .unwrap();
        system.shutdown().await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn formats_records_with_positions() {
        let records = vec![
            UserRecord::new(4, "Ravi", "ravi@gmail.com"),
            UserRecord::new(9, "Asha Rao", "asha@example.com"),
        ];
        let text = format_records(&records);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("S.No."));
        assert!(lines[1].starts_with("1 "));
        assert!(lines[2].starts_with("2 "));
        assert!(lines[2].contains("Asha Rao"));
        assert_eq!(format_records(&[]), EMPTY_PLACEHOLDER);
    }

    #[tokio::test]
    async fn script_registers_a_user() {
        let script = "\
toggle
type first-name Asha
type email asha@example.com
type department Engineering
type designation Developer
change experience 3
submit
records
quit
render
";
        let out = run_script(&UiConfig::default(), script).await;

        assert!(out.contains("form shown"));
        assert!(out.contains("experience: ok (submit enabled)"));
        assert!(out.contains("added #3 Asha <asha@example.com>"));
        assert!(out.lines().any(|l| l.starts_with("3 ") && l.contains("Asha")));
        // Nothing after quit runs.
        assert!(!out.contains("<table"));
    }

    #[tokio::test]
    async fn errors_are_reported_and_loop_continues() {
        let config = UiConfig {
            set_dummy_data: false,
            ..UiConfig::default()
        };
        let out = run_script(&config, "dance\nsubmit\nblur email\nrecords\n").await;
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("error:"));
        assert!(lines[0].contains("dance"));
        let hidden: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|l| *l == "error: Registration form is hidden")
            .collect();
        assert_eq!(hidden.len(), 2);
        assert_eq!(lines.last().copied(), Some(EMPTY_PLACEHOLDER));
    }

    #[tokio::test]
    async fn help_is_printed_without_touching_the_list() {
        let out = run_script(&UiConfig::default(), "help\nrecords\n").await;
        assert!(out.contains("Click Add User"));
        assert!(!out.contains("error:"));
        assert!(out.contains("ravi@gmail.com"));
    }

    #[tokio::test]
    async fn invalid_email_shows_message() {
        let out = run_script(&UiConfig::default(), "toggle\nchange email ravi\n").await;
        assert!(out.contains("email: Invalid Email (submit disabled)"));
    }
}
