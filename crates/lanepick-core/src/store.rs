// INI-backed persistent store for unowned champions and pick stats.
//
// File layout (configparser compatible):
//
//   [Top]
//   unowned = ["Aatrox", "Gnar"]
//
//   [Stats]
//   ahri = 3
//
// Section names are case-sensitive; option keys are lowercased on read and
// write. Order of sections and keys is preserved. Every save rewrites the
// whole file.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::StoreError;

pub type Section = IndexMap<String, String>;

/// Section/key/value store loaded fully into memory.
#[derive(Debug, Clone, Default)]
pub struct IniStore {
    path: Option<PathBuf>,
    sections: IndexMap<String, Section>,
}

impl IniStore {
    /// Open the store at `path`, creating an empty file if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let io_err = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
            fs::write(&path, "").map_err(io_err)?;
            debug!(path = %path.display(), "created empty store");
        }

        let text = fs::read_to_string(&path).map_err(io_err)?;
        let sections = parse(&text)?;
        debug!(path = %path.display(), sections = sections.len(), "store loaded");
        Ok(Self {
            path: Some(path),
            sections,
        })
    }

    /// A store with no backing file. `save` is a no-op.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Build an in-memory store from INI text.
    pub fn from_ini(text: &str) -> Result<Self, StoreError> {
        Ok(Self {
            path: None,
            sections: parse(text)?,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    pub fn section(&self, section: &str) -> Option<&Section> {
        self.sections.get(section)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)?
            .get(&key.to_lowercase())
            .map(String::as_str)
    }

    /// Set a value, creating the section if needed.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_lowercase(), value.into());
    }

    /// Remove a whole section. Returns whether it existed.
    pub fn remove_section(&mut self, section: &str) -> bool {
        self.sections.shift_remove(section).is_some()
    }

    pub fn get_json<T: DeserializeOwned>(
        &self,
        section: &str,
        key: &str,
    ) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.get(section, key) else {
            return Ok(None);
        };
        serde_json::from_str(raw)
            .map(Some)
            .map_err(|source| StoreError::Json {
                section: section.to_string(),
                key: key.to_lowercase(),
                source,
            })
    }

    pub fn set_json<T: Serialize + ?Sized>(
        &mut self,
        section: &str,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(value).map_err(|source| StoreError::Json {
            section: section.to_string(),
            key: key.to_lowercase(),
            source,
        })?;
        self.set(section, key, encoded);
        Ok(())
    }

    /// Serialize the store in INI form.
    pub fn to_ini(&self) -> String {
        let mut out = String::new();
        for (name, entries) in &self.sections {
            out.push_str(&format!("[{name}]\n"));
            for (key, value) in entries {
                out.push_str(&format!("{key} = {value}\n"));
            }
            out.push('\n');
        }
        out
    }

    /// Rewrite the backing file with the current contents.
    pub fn save(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        fs::write(path, self.to_ini()).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "store saved");
        Ok(())
    }
}

fn parse(text: &str) -> Result<IndexMap<String, Section>, StoreError> {
    let mut sections: IndexMap<String, Section> = IndexMap::new();
    let mut current: Option<String> = None;

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            sections.entry(name.to_string()).or_default();
            current = Some(name.to_string());
            continue;
        }

        let malformed = || StoreError::Malformed {
            line: i + 1,
            content: raw.to_string(),
        };
        let section = current.as_ref().ok_or_else(malformed)?;
        let split_at = line.find(['=', ':']).ok_or_else(malformed)?;
        let key = line[..split_at].trim().to_lowercase();
        let value = line[split_at + 1..].trim().to_string();
        if key.is_empty() {
            return Err(malformed());
        }
        if let Some(entries) = sections.get_mut(section) {
            entries.insert(key, value);
        }
    }

    Ok(sections)
}
