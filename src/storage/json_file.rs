//! JSON file storage: one object mapping keys to their string values.
//!
//! `{"clockState": "{\"clockedIn\":true,...}"}`

use super::Storage;
use crate::errors::{AppError, AppResult};
use serde_json::{Map, Value};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

enum Container {
    Missing,
    Entries(Map<String, Value>),
    /// Not a JSON object; carries the parse problem.
    Corrupt(String),
}

#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Point at `path`, creating its parent directory. The file itself is
    /// only created by the first write (or `create_if_missing`).
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty container if the file does not exist yet.
    pub fn create_if_missing(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.persist(&Map::new())?;
        Ok(true)
    }

    fn load_container(&self) -> AppResult<Container> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Container::Missing),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Container::Missing);
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(entries)) => Ok(Container::Entries(entries)),
            Ok(other) => Ok(Container::Corrupt(format!(
                "storage file holds {} instead of an object",
                json_kind(&other)
            ))),
            Err(e) => Ok(Container::Corrupt(e.to_string())),
        }
    }

    /// Replace the file atomically. Each writer gets its own temp file, so
    /// concurrent writers never share a half-written one.
    fn persist(&self, entries: &Map<String, Value>) -> AppResult<()> {
        let body = serde_json::to_string_pretty(entries)?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(body.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Storage for JsonFileStorage {
    /// A non-string entry, or a file that is not a JSON object, is a
    /// deserialization failure; the next write replaces just that entry
    /// (or the whole file when it is not an object).
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        match self.load_container()? {
            Container::Missing => Ok(None),
            Container::Entries(mut entries) => match entries.remove(key) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::String(s)) => Ok(Some(s)),
                Some(other) => Err(AppError::deserialization(
                    key,
                    format!("expected a string value, found {}", json_kind(&other)),
                )),
            },
            Container::Corrupt(reason) => Err(AppError::deserialization(key, reason)),
        }
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        // Sibling keys survive; a file that is not an object is replaced.
        let mut entries = match self.load_container() {
            Ok(Container::Entries(entries)) => entries,
            Ok(_) => Map::new(),
            Err(e) => return Err(AppError::persistence(key, e)),
        };
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.persist(&entries)
            .map_err(|e| AppError::persistence(key, e))
    }
}
