//! The clock state store.
//!
//! Every mutation is a read-modify-write of the single record under one
//! storage key. Nothing here returns an error: unreadable data resets to the
//! default record and failed writes are reported to the diagnostics sink,
//! while the caller still gets the in-memory result. What the caller sees can
//! therefore differ from what was durably stored.

use super::diagnostics::Diagnostics;
use crate::config::{DEFAULT_STORAGE_KEY, DEFAULT_TIME_FORMAT};
use crate::errors::AppError;
use crate::models::{ClockRecord, Employee};
use crate::storage::Storage;
use crate::utils::time::{localize, to_iso};
use chrono::{DateTime, Utc};

pub struct StateStore {
    storage: Box<dyn Storage>,
    diagnostics: Box<dyn Diagnostics>,
    key: String,
    time_format: String,
}

impl StateStore {
    pub fn new(storage: impl Storage + 'static, diagnostics: impl Diagnostics + 'static) -> Self {
        Self::from_boxed(Box::new(storage), Box::new(diagnostics))
    }

    pub fn from_boxed(storage: Box<dyn Storage>, diagnostics: Box<dyn Diagnostics>) -> Self {
        Self {
            storage,
            diagnostics,
            key: DEFAULT_STORAGE_KEY.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn with_time_format(mut self, fmt: &str) -> Self {
        self.time_format = fmt.to_string();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// Current record; the default record when absent or unreadable.
    pub fn load(&self) -> ClockRecord {
        match self.storage.read(&self.key) {
            Ok(raw) => self.decode(raw.as_deref()),
            Err(e) => {
                self.report_failure(e);
                ClockRecord::default()
            }
        }
    }

    /// Persist `record`. Failures are reported, never returned.
    ///
    /// A plain `load` / modify / `save` sequence is not isolated from other
    /// writers; the mutating operations below go through `Storage::update`.
    pub fn save(&self, record: &ClockRecord) {
        let Some(encoded) = self.encode(record) else {
            return;
        };
        if let Err(e) = self.storage.write(&self.key, &encoded) {
            self.report_failure(e);
        }
    }

    pub fn clock_in(&self, now: DateTime<Utc>) -> ClockRecord {
        let since = to_iso(&now);
        let line = format!("Clocked in at {}", localize(&now, &self.time_format));
        self.mutate(|record| {
            record.clock_in(since.clone(), line.clone());
            true
        })
    }

    pub fn clock_out(&self, now: DateTime<Utc>) -> ClockRecord {
        let line = format!("Clocked out at {}", localize(&now, &self.time_format));
        self.mutate(|record| {
            record.clock_out(line.clone());
            true
        })
    }

    /// Append to the roster. The name is not validated here; see
    /// `Employee::from_input` for the input-side check.
    pub fn add_employee(&self, name: &str, email: &str) -> ClockRecord {
        let employee = Employee::new(name, email);
        self.mutate(|record| {
            record.add_employee(employee.clone());
            true
        })
    }

    /// Remove by position, returning the removed employee alongside the
    /// record. An out-of-range index writes nothing and yields `None`.
    pub fn remove_employee(&self, index: i64) -> (ClockRecord, Option<Employee>) {
        let mut removed = None;
        let record = self.mutate(|record| {
            removed = record.remove_employee(index);
            removed.is_some()
        });
        (record, removed)
    }

    /// Replace whatever is stored with the empty record.
    pub fn reset(&self) -> ClockRecord {
        let record = ClockRecord::default();
        self.save(&record);
        record
    }

    /// Load, apply `op`, and store the result if `op` reports a change.
    fn mutate(&self, mut op: impl FnMut(&mut ClockRecord) -> bool) -> ClockRecord {
        let mut result: Option<ClockRecord> = None;

        let outcome = self.storage.update(&self.key, &mut |raw: Option<String>| {
            let mut record = self.decode(raw.as_deref());
            let changed = op(&mut record);
            let next = if changed { self.encode(&record) } else { None };
            result = Some(record);
            next
        });

        let Err(e) = outcome else {
            return result.unwrap_or_default();
        };
        let unreadable = e.is_deserialization();
        self.report_failure(e);

        if let Some(record) = result {
            return record;
        }

        // The backend failed before handing us the stored value. Data it
        // could not decode is reset like any other unparsable value.
        let mut record = ClockRecord::default();
        if op(&mut record) && unreadable {
            self.save(&record);
        }
        record
    }

    fn decode(&self, raw: Option<&str>) -> ClockRecord {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return ClockRecord::default();
        };
        // Top-level `null` reads as an empty record too.
        match serde_json::from_str::<Option<ClockRecord>>(raw) {
            Ok(record) => record.unwrap_or_default(),
            Err(e) => {
                self.diagnostics
                    .report(&AppError::deserialization(&self.key, e));
                ClockRecord::default()
            }
        }
    }

    fn encode(&self, record: &ClockRecord) -> Option<String> {
        match serde_json::to_string(record) {
            Ok(s) => Some(s),
            Err(e) => {
                self.report_failure(e.into());
                None
            }
        }
    }

    /// Report a storage failure; anything not already classified counts as
    /// a persistence failure.
    fn report_failure(&self, err: AppError) {
        let failure = if err.is_persistence() || err.is_deserialization() {
            err
        } else {
            AppError::persistence(&self.key, err)
        };
        self.diagnostics.report(&failure);
    }
}
