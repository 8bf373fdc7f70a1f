use crate::model::AddressBook;
use anyhow::Context;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge le carnet ; un support absent donne un carnet vide.
    fn load(&self) -> anyhow::Result<AddressBook>;
    /// Sauvegarde de manière atomique.
    fn save(&self, book: &AddressBook) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self { path: path.as_ref().to_path_buf() })
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<AddressBook> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no address book yet, starting empty");
                return Ok(AddressBook::new());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        let book: AddressBook = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), contacts = book.len(), "address book loaded");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(book)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        tracing::debug!(path = %self.path.display(), contacts = book.len(), "address book saved");
        Ok(())
    }
}
