//! Couche interactive : lecture d'une ligne, appel du cœur, réponse texte.
//!
//! Toute traduction d'erreur en message utilisateur se fait ici ; le cœur
//! (`fields`, `model`, `birthdays`) ne fait que propager.

use crate::birthdays::BirthdayOptions;
use crate::fields::{Birthday, Phone, ValidationError};
use crate::model::{AddressBook, Record};
use crate::report::{prepare_report, TextReport};
use crate::storage::Storage;
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use thiserror::Error;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const COMMANDS: &str = "Commands: add, change, phone, remove-phone, delete, all, add-birthday, show-birthday, birthdays, hello, close/exit";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Data saved. Good bye!";

/// Erreurs côté shell ; `Display` donne directement la réponse affichée.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Not enough arguments.")]
    NotEnoughArguments,
    #[error("This contact does not exist.")]
    UnknownContact(String),
    #[error("Invalid command.")]
    UnknownCommand(String),
    #[error("Value error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Error: {0:#}")]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
}

/// Résultat du découpage d'une ligne saisie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Blank,
    Exit,
    Command(Command),
}

pub fn parse_line(line: &str) -> Result<Line, ShellError> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(Line::Blank);
    };
    let rest: Vec<&str> = words.collect();

    let cmd = match keyword {
        "close" | "exit" => return Ok(Line::Exit),
        "hello" => Command::Hello,
        "add" => {
            let [name, phone] = take(&rest)?;
            Command::Add { name, phone }
        }
        "change" => {
            let [name, old, new] = take(&rest)?;
            Command::Change { name, old, new }
        }
        "phone" => {
            let [name] = take(&rest)?;
            Command::Phone { name }
        }
        "remove-phone" => {
            let [name, phone] = take(&rest)?;
            Command::RemovePhone { name, phone }
        }
        "delete" => {
            let [name] = take(&rest)?;
            Command::Delete { name }
        }
        "all" => Command::All,
        "add-birthday" => {
            let [name, date] = take(&rest)?;
            Command::AddBirthday { name, date }
        }
        "show-birthday" => {
            let [name] = take(&rest)?;
            Command::ShowBirthday { name }
        }
        "birthdays" => Command::Birthdays,
        other => return Err(ShellError::UnknownCommand(other.to_owned())),
    };
    Ok(Line::Command(cmd))
}

/// Les `N` premiers arguments ; les suivants sont ignorés.
fn take<const N: usize>(args: &[&str]) -> Result<[String; N], ShellError> {
    if args.len() < N {
        return Err(ShellError::NotEnoughArguments);
    }
    Ok(std::array::from_fn(|i| args[i].to_owned()))
}

/// Contexte d'exécution (date du jour, fenêtre d'anniversaires).
#[derive(Debug, Clone, Copy)]
pub struct ShellContext {
    pub today: NaiveDate,
    pub birthdays: BirthdayOptions,
}

pub fn execute(
    cmd: Command,
    book: &mut AddressBook,
    ctx: &ShellContext,
) -> Result<String, ShellError> {
    let reply = match cmd {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add { name, phone } => {
            // validation avant toute insertion : pas de contact à moitié créé
            let phone = Phone::new(phone)?;
            if let Some(record) = book.find_mut(&name) {
                record.push_phone(phone);
                "Contact updated.".to_string()
            } else {
                let mut record = Record::new(&name)?;
                record.push_phone(phone);
                book.add_record(record);
                "Contact added.".to_string()
            }
        }
        Command::Change { name, old, new } => {
            let record = existing_mut(book, &name)?;
            if record.edit_phone(&old, &new)? {
                "Phone updated.".to_string()
            } else {
                "Old phone not found.".to_string()
            }
        }
        Command::Phone { name } => {
            let record = existing(book, &name)?;
            if record.phones().is_empty() {
                "No phones.".to_string()
            } else {
                record
                    .phones()
                    .iter()
                    .map(Phone::as_str)
                    .collect::<Vec<_>>()
                    .join("; ")
            }
        }
        Command::RemovePhone { name, phone } => {
            let record = existing_mut(book, &name)?;
            if record.remove_phone(&phone) {
                "Phone removed.".to_string()
            } else {
                "Phone not found.".to_string()
            }
        }
        Command::Delete { name } => {
            book.delete(&name)
                .ok_or(ShellError::UnknownContact(name))?;
            "Contact deleted.".to_string()
        }
        Command::All => {
            if book.is_empty() {
                "No contacts.".to_string()
            } else {
                book.records()
                    .map(Record::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Command::AddBirthday { name, date } => {
            let birthday = Birthday::parse(&date)?;
            if let Some(record) = book.find_mut(&name) {
                record.set_birthday(birthday);
                "Birthday added.".to_string()
            } else {
                let mut record = Record::new(&name)?;
                record.set_birthday(birthday);
                book.add_record(record);
                "Contact created. Birthday added.".to_string()
            }
        }
        Command::ShowBirthday { name } => existing(book, &name)?
            .birthday()
            .map(Birthday::to_string)
            .unwrap_or_else(|| "No birthday set.".to_string()),
        Command::Birthdays => {
            prepare_report(book, ctx.today, &ctx.birthdays, &TextReport).content
        }
    };
    Ok(reply)
}

fn existing<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record, ShellError> {
    book.find(name)
        .ok_or_else(|| ShellError::UnknownContact(name.to_owned()))
}

fn existing_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record, ShellError> {
    book.find_mut(name)
        .ok_or_else(|| ShellError::UnknownContact(name.to_owned()))
}

/// Effet d'une ligne sur la session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Reply(String),
    Silent,
    Exit,
}

/// Session interactive : possède le carnet du chargement jusqu'à la sauvegarde.
pub struct Session<S: Storage> {
    storage: S,
    book: AddressBook,
    birthdays: BirthdayOptions,
    today: Option<NaiveDate>,
}

impl<S: Storage> Session<S> {
    /// Charge le carnet depuis `storage` (vide si absent).
    pub fn open(storage: S, birthdays: BirthdayOptions) -> anyhow::Result<Self> {
        let book = storage.load()?;
        Ok(Self {
            storage,
            book,
            birthdays,
            today: None,
        })
    }

    /// Fige la date du jour (sinon date locale à chaque commande).
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn respond(&mut self, line: &str) -> Step {
        let ctx = ShellContext {
            today: self.today.unwrap_or_else(|| Local::now().date_naive()),
            birthdays: self.birthdays,
        };
        let outcome = parse_line(line).and_then(|parsed| match parsed {
            Line::Blank => Ok(Step::Silent),
            Line::Exit => Ok(Step::Exit),
            Line::Command(cmd) => {
                tracing::debug!(command = ?cmd, "executing");
                execute(cmd, &mut self.book, &ctx).map(Step::Reply)
            }
        });
        outcome.unwrap_or_else(|err| {
            tracing::debug!(error = ?err, "command failed");
            Step::Reply(err.to_string())
        })
    }

    /// Boucle lecture/réponse ; `close`, `exit` ou fin d'entrée terminent la
    /// session et déclenchent l'unique sauvegarde.
    ///
    /// La sauvegarde a lieu même si la lecture ou l'écriture échoue ; l'erreur
    /// d'entrée/sortie est renvoyée ensuite.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> anyhow::Result<()> {
        tracing::info!(contacts = self.book.len(), "session started");
        let outcome = self.interact(&mut input, &mut output);
        if let Err(err) = &outcome {
            tracing::warn!(error = %err, "session interrupted, saving anyway");
        }

        self.storage.save(&self.book)?;
        outcome?;
        writeln!(output, "{FAREWELL}")?;
        tracing::info!(contacts = self.book.len(), "session closed");
        Ok(())
    }

    fn interact<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> anyhow::Result<()> {
        writeln!(output, "{WELCOME}")?;
        writeln!(output, "{COMMANDS}")?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                return Ok(());
            }
            let step = match std::str::from_utf8(&buf) {
                Ok(line) => self.respond(line),
                // ligne illisible : on répond et la session continue
                Err(err) => {
                    let err = ShellError::from(
                        anyhow::Error::new(err).context("undecodable input line"),
                    );
                    Step::Reply(err.to_string())
                }
            };
            match step {
                Step::Reply(text) => writeln!(output, "{text}")?,
                Step::Silent => {}
                Step::Exit => return Ok(()),
            }
        }
    }
}
