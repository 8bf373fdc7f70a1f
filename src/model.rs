//! Contact (`Record`) et carnet d'adresses (`AddressBook`).

use crate::birthdays::{self, BirthdayOptions, UpcomingBirthday};
use crate::fields::{Birthday, Name, Phone, ValidationError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Un contact : nom (immuable), téléphones ordonnés, anniversaire optionnel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new<S: AsRef<str>>(name: S) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Ajoute un numéro ; les doublons sont acceptés.
    pub fn add_phone<S: AsRef<str>>(&mut self, raw: S) -> Result<(), ValidationError> {
        self.push_phone(Phone::new(raw)?);
        Ok(())
    }

    pub fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Retire la première occurrence de `raw`. Retourne `true` si un numéro a été retiré.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.phone_index(raw) {
            Some(idx) => {
                self.phones.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remplace la première occurrence de `old` par `new`.
    ///
    /// `Ok(false)` si `old` est absent (liste inchangée). Si `new` est invalide,
    /// l'erreur est propagée et rien n'est modifié.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let Some(idx) = self.phone_index(old) else {
            return Ok(false);
        };
        self.phones[idx] = Phone::new(new)?;
        Ok(true)
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Parse `DD.MM.YYYY` et écrase l'anniversaire précédent.
    pub fn add_birthday<S: AsRef<str>>(&mut self, raw: S) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    fn phone_index(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "-".to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join("; ")
        };
        let birthday = self
            .birthday
            .map(|bd| bd.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}

/// Carnet d'adresses : un Record par nom, clé = `record.name()`.
///
/// Itération par ordre alphabétique des noms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BookFile", into = "BookFile")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insère ou remplace (dernier écrit gagne). Retourne l'éventuel record remplacé.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().as_str().to_owned(), record)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Supprime le contact s'il existe ; sans effet sinon.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Anniversaires dans `[aujourd'hui, aujourd'hui + days_ahead]`, date locale.
    pub fn upcoming_birthdays(&self, days_ahead: u32) -> Vec<UpcomingBirthday> {
        let opts = BirthdayOptions {
            days_ahead,
            ..BirthdayOptions::default()
        };
        self.upcoming_birthdays_on(Local::now().date_naive(), &opts)
    }

    pub fn upcoming_birthdays_on(
        &self,
        today: NaiveDate,
        opts: &BirthdayOptions,
    ) -> Vec<UpcomingBirthday> {
        birthdays::upcoming(self, today, opts)
    }
}

/// Forme persistée : liste de contacts, la clé est recalculée au chargement.
#[derive(Serialize, Deserialize)]
struct BookFile {
    #[serde(default)]
    contacts: Vec<Record>,
}

impl From<BookFile> for AddressBook {
    fn from(file: BookFile) -> Self {
        let mut book = AddressBook::new();
        for record in file.contacts {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for BookFile {
    fn from(book: AddressBook) -> Self {
        Self {
            contacts: book.records.into_values().collect(),
        }
    }
}
