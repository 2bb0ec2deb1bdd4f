//! Terminal session — stdin command loop that drives one wizard and prints
//! the current step after every command.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use futures::{StreamExt, stream};
use rust_decimal::Decimal;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::config::WizardConfig;
use crate::error::{Error, Result};
use crate::views;
use crate::wizard::schema;
use crate::wizard::{FieldEdit, ProfilePhoto, SimulatedSubmission, SubmissionSink, Wizard};

const HELP: &str = "\
Commands:
  show                     redraw the current step
  next                     validate this step and continue
  back                     go to the previous step
  goto <n>                 jump to a step you have already reached
  set <field> <value>      change a field (empty value clears it)
  photo <path>|remove      attach or remove a profile picture
  errors                   list what still blocks this step
  submit                   submit the application from the review step
  help                     show this message
  quit                     leave (asks again if there are unsaved changes)

Fields:
  name, email, phone, birth-date, department, title, start-date, job-type,
  salary, manager, skill, experience, hours, remote, approved, notes,
  contact-name, relationship, contact-phone, guardian-name, guardian-phone,
  confirm

Dates are YYYY-MM-DD, hours are `HH:MM HH:MM`, experience is
`<skill> <years>`, and yes/no fields take yes, no, or an empty value.";

const UNSAVED_WARNING: &str =
    "You have unsaved changes. Type quit again to leave without saving.";

/// A line of user input, parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Show,
    Next,
    Back,
    Goto(u8),
    Set(FieldEdit),
    Photo(PathBuf),
    Submit,
    Errors,
    Help,
    Quit,
    /// Recognized command with a value that could not be parsed.
    Invalid(String),
    Unknown(String),
}

/// Parses stdin lines into [`Command`]s.
pub struct CommandParser;

impl CommandParser {
    pub fn parse(line: &str) -> Command {
        let trimmed = line.trim();
        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (trimmed, ""),
        };

        match head.to_lowercase().as_str() {
            "show" | "s" => Command::Show,
            "next" | "n" => Command::Next,
            "back" | "b" | "previous" => Command::Back,
            "errors" | "e" => Command::Errors,
            "submit" => Command::Submit,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "goto" | "g" => match rest.parse::<u8>() {
                Ok(n) => Command::Goto(n),
                Err(_) => Command::Invalid(format!("Expected a step number, got '{rest}'")),
            },
            "photo" => match rest {
                "" => Command::Invalid("Expected a file path or 'remove'".into()),
                "remove" | "none" => Command::Set(FieldEdit::RemovePhoto),
                path => Command::Photo(PathBuf::from(path)),
            },
            "set" => parse_set(rest),
            _ => Command::Unknown(trimmed.to_string()),
        }
    }
}

/// `set <field> <value>`
fn parse_set(args: &str) -> Command {
    let (field, value) = match args.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None => (args, ""),
    };
    if field.is_empty() {
        return Command::Invalid("Expected a field name after 'set'".into());
    }

    match field_edit(&field.to_lowercase(), value) {
        Ok(edit) => Command::Set(edit),
        Err(message) => Command::Invalid(message),
    }
}

fn field_edit(field: &str, value: &str) -> std::result::Result<FieldEdit, String> {
    let edit = match field {
        "name" => FieldEdit::FullName(value.to_string()),
        "email" => FieldEdit::Email(value.to_string()),
        "phone" => FieldEdit::Phone(value.to_string()),
        "birth-date" => FieldEdit::BirthDate(optional(value, parse_date)?),

        "department" => FieldEdit::Department(optional(value, |v| v.parse())?),
        "title" => FieldEdit::Title(value.to_string()),
        "start-date" => FieldEdit::StartDate(optional(value, parse_date)?),
        "job-type" => FieldEdit::JobType(optional(value, |v| v.parse())?),
        "salary" => FieldEdit::Salary(optional(value, parse_amount)?),
        "manager" => FieldEdit::Manager(optional(value, |v| Ok(v.to_string()))?),

        "skill" if value.is_empty() => return Err("Expected a skill name".into()),
        "skill" => FieldEdit::ToggleSkill(value.to_string()),
        "experience" => {
            let (skill, years) = value
                .rsplit_once(char::is_whitespace)
                .ok_or("Expected `<skill> <years>`")?;
            let years = years
                .parse::<u8>()
                .map_err(|_| format!("Expected whole years, got '{years}'"))?;
            FieldEdit::Experience {
                skill: skill.trim().to_string(),
                years,
            }
        }
        "hours" => {
            let mut parts = value.split_whitespace();
            let start = optional(parts.next().unwrap_or_default(), parse_time)?;
            let end = optional(parts.next().unwrap_or_default(), parse_time)?;
            FieldEdit::WorkingHours { start, end }
        }
        "remote" => {
            let pct = value.trim_end_matches('%');
            FieldEdit::RemotePercentage(
                pct.parse()
                    .map_err(|_| format!("Expected a percentage, got '{value}'"))?,
            )
        }
        "approved" => FieldEdit::ManagerApproved(optional(value, parse_yes_no)?),
        "notes" => FieldEdit::Notes(optional(value, |v| Ok(v.to_string()))?),

        "contact-name" => FieldEdit::ContactName(value.to_string()),
        "relationship" => FieldEdit::Relationship(value.to_string()),
        "contact-phone" => FieldEdit::ContactPhone(value.to_string()),
        "guardian-name" => FieldEdit::GuardianName(optional(value, |v| Ok(v.to_string()))?),
        "guardian-phone" => FieldEdit::GuardianPhone(optional(value, |v| Ok(v.to_string()))?),

        "confirm" => FieldEdit::ConfirmCorrect(parse_yes_no(value)?),

        other => return Err(format!("Unknown field '{other}'. Type help for the list")),
    };
    Ok(edit)
}

/// Empty input (or `-`) clears the field.
fn optional<T>(
    value: &str,
    parse: impl FnOnce(&str) -> std::result::Result<T, String>,
) -> std::result::Result<Option<T>, String> {
    match value {
        "" | "-" => Ok(None),
        v => parse(v).map(Some),
    }
}

fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("Expected a date as YYYY-MM-DD, got '{value}'"))
}

fn parse_time(value: &str) -> std::result::Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| format!("Expected a time as HH:MM, got '{value}'"))
}

fn parse_amount(value: &str) -> std::result::Result<Decimal, String> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '$' | ','))
        .collect();
    Decimal::from_str(&cleaned).map_err(|_| format!("Expected an amount, got '{value}'"))
}

fn parse_yes_no(value: &str) -> std::result::Result<bool, String> {
    match value.to_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        _ => Err(format!("Expected yes or no, got '{value}'")),
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Print(String),
    Exit,
}

/// One wizard plus the state the terminal needs around it.
pub struct Session {
    wizard: Wizard,
    sink: Box<dyn SubmissionSink>,
    quit_pending: bool,
}

impl Session {
    pub fn new(wizard: Wizard, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            wizard,
            sink,
            quit_pending: false,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub async fn handle(&mut self, command: Command) -> Reply {
        if command != Command::Quit {
            self.quit_pending = false;
        }

        match command {
            Command::Show => Reply::Print(views::render_current(&self.wizard)),
            Command::Help => Reply::Print(HELP.to_string()),
            Command::Errors => {
                let validation = self.wizard.validate_current();
                if validation.valid {
                    Reply::Print("This step is complete.".to_string())
                } else {
                    Reply::Print(views::render_errors(&validation))
                }
            }
            Command::Next => match self.wizard.advance() {
                Ok(_) => self.screen(),
                Err(e) => refused(e),
            },
            Command::Back => {
                self.wizard.retreat();
                self.screen()
            }
            Command::Goto(n) => match self.wizard.jump_to(n) {
                Ok(_) => self.screen(),
                Err(e) => refused(e),
            },
            Command::Set(edit) => match self.wizard.edit(edit) {
                Ok(()) => self.screen(),
                Err(e) => refused(e),
            },
            Command::Photo(path) => self.attach_photo(&path).await,
            Command::Submit => self.submit().await,
            Command::Quit => {
                if self.wizard.has_unsaved_changes() && !self.quit_pending {
                    self.quit_pending = true;
                    Reply::Print(UNSAVED_WARNING.to_string())
                } else {
                    Reply::Exit
                }
            }
            Command::Invalid(message) => Reply::Print(message),
            Command::Unknown(input) => {
                Reply::Print(format!("Unknown command '{input}'. Type help for a list."))
            }
        }
    }

    fn screen(&self) -> Reply {
        Reply::Print(views::render_current(&self.wizard))
    }

    async fn attach_photo(&mut self, path: &Path) -> Reply {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(m) if m.is_file() => m,
            Ok(_) => return Reply::Print(format!("{} is not a file", path.display())),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Cannot read photo");
                return Reply::Print(format!("Cannot read {}: {e}", path.display()));
            }
        };

        let photo = ProfilePhoto {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            mime_type: schema::mime_type_for(path).to_string(),
            size_bytes: metadata.len(),
        };
        match self.wizard.edit(FieldEdit::AttachPhoto(photo)) {
            Ok(()) => self.screen(),
            Err(e) => refused(e),
        }
    }

    async fn submit(&mut self) -> Reply {
        info!(step = %self.wizard.current_step(), "Submitting application");
        let receipt = match self.wizard.submit(self.sink.as_ref()).await {
            Ok(receipt) => receipt,
            Err(e) => return refused(e),
        };
        let snapshot = match receipt.application.to_pretty_json() {
            Ok(text) => text,
            Err(e) => return refused(e),
        };
        Reply::Print(
            [
                receipt.acknowledgment.message,
                snapshot,
                String::new(),
                views::render_current(&self.wizard),
            ]
            .join("\n"),
        )
    }
}

/// Report a refused command to the user.
fn refused(err: impl Into<Error>) -> Reply {
    let err = err.into();
    debug!(error = %err, "Command refused");
    Reply::Print(err.to_string())
}

fn prompt() {
    eprint!("> ");
}

/// Run the wizard against stdin/stdout until EOF or quit.
pub async fn run(wizard: Wizard, config: &WizardConfig) -> Result<()> {
    let sink = SimulatedSubmission::new(config.submit_delay);
    let mut session = Session::new(wizard, Box::new(sink));

    let reader = BufReader::new(tokio::io::stdin());
    let mut lines = Box::pin(stream::unfold(reader.lines(), |mut lines| async move {
        lines.next_line().await.transpose().map(|line| (line, lines))
    }));

    println!("{}", views::render_current(session.wizard()));
    eprintln!("Type help for commands.");
    prompt();

    while let Some(line) = lines.next().await {
        let line = line?;
        if line.trim().is_empty() {
            prompt();
            continue;
        }

        let command = CommandParser::parse(&line);
        debug!(?command, "Command");
        match session.handle(command).await {
            Reply::Print(text) => println!("\n{text}\n"),
            Reply::Exit => break,
        }
        prompt();
    }

    info!(
        step = %session.wizard().current_step(),
        unsaved = session.wizard().has_unsaved_changes(),
        "Session ended"
    );
    Ok(())
}
