use crate::fields::Birthday;
use crate::model::{AddressBook, Record};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de contacts depuis CSV: header `name,phones[,birthday]`
///
/// `phones` : numéros séparés par `;` ; `birthday` : `DD.MM.YYYY`. Cellules vides admises.
pub fn import_contacts_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = rec
            .get(0)
            .with_context(|| format!("missing name on row {}", line + 1))?;
        let mut record =
            Record::new(name).with_context(|| format!("invalid name on row {}", line + 1))?;
        let contact = record.name().as_str().to_owned();

        if let Some(phones) = rec.get(1) {
            for phone in phones.split(';').map(str::trim).filter(|p| !p.is_empty()) {
                record
                    .add_phone(phone)
                    .with_context(|| format!("invalid phone for contact {contact}"))?;
            }
        }
        if let Some(raw) = rec.get(2) {
            let raw = raw.trim();
            if !raw.is_empty() {
                record
                    .add_birthday(raw)
                    .with_context(|| format!("invalid birthday for contact {contact}"))?;
            }
        }
        out.push(record);
    }
    Ok(out)
}

/// Export CSV des contacts: header `name,phones,birthday`
pub fn export_contacts_csv<P: AsRef<Path>>(path: P, book: &AddressBook) -> Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["name", "phones", "birthday"])?;
    for record in book.records() {
        let phones = record
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(";");
        let birthday = record
            .birthday()
            .map(Birthday::to_string)
            .unwrap_or_default();
        w.write_record([record.name().as_str(), phones.as_str(), birthday.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON du carnet (jolie mise en forme)
pub fn export_book_json<P: AsRef<Path>>(path: P, book: &AddressBook) -> Result<()> {
    let s = serde_json::to_string_pretty(book)?;
    fs::write(path, s)?;
    Ok(())
}
