//! Champs typés d'un contact : nom, téléphone, anniversaire.
//!
//! Chaque valeur est validée à la construction ; une valeur invalide
//! n'existe jamais en mémoire (ni après désérialisation).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Format d'entrée/affichage des anniversaires.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const PHONE_LEN: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name can't be empty.")]
    EmptyName,
    #[error("Phone must contain exactly 10 digits.")]
    InvalidPhone(String),
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDate(String),
}

/// Nom d'un contact (texte non vide, sans espaces en bordure).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new<S: AsRef<str>>(raw: S) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Numéro de téléphone : exactement 10 chiffres, conservé en texte
/// (les zéros de tête sont préservés).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new<S: AsRef<str>>(raw: S) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidPhone(trimmed.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    fn is_valid(candidate: &str) -> bool {
        candidate.len() == PHONE_LEN && candidate.chars().all(|c| c.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Date d'anniversaire (date calendaire valide).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse `DD.MM.YYYY` ; toute date impossible (31 avril, etc.) est rejetée.
    pub fn parse<S: AsRef<str>>(raw: S) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        NaiveDate::parse_from_str(trimmed, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(trimmed.to_owned()))
    }
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl FromStr for Name {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for Phone {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// serde : représentation texte, revalidée au chargement
impl TryFrom<String> for Name {
    type Error = ValidationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
