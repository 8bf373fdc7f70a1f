#![forbid(unsafe_code)]
//! Carnet — carnet de contacts local avec rappel des anniversaires.
//!
//! - Champs validés à la construction (nom, téléphone 10 chiffres, date `DD.MM.YYYY`).
//! - Stockage fichier JSON (écriture atomique), échange CSV.
//! - Anniversaires à venir sur une fenêtre glissante, week-ends reportés au lundi.
//! - Shell texte interactif en dehors du cœur (module `shell`).

pub mod birthdays;
pub mod fields;
pub mod io;
pub mod model;
pub mod report;
pub mod shell;
pub mod storage;

pub use birthdays::{BirthdayOptions, LeapDayPolicy, UpcomingBirthday};
pub use fields::{Birthday, Name, Phone, ValidationError};
pub use model::{AddressBook, Record};
pub use report::{prepare_report, BirthdayReport, ReportRenderer, TextReport};
pub use shell::{Session, ShellError};
pub use storage::{JsonStorage, Storage};
