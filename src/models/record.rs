//! The persisted clock record.
//!
//! JSON shape (one value under one storage key):
//! `{"clockedIn": bool, "since": "<ISO-8601>", "logs": [..], "employees": [{"name", "email"}]}`
//! Every field is optional on input; `since` is omitted on output when unset.

use super::Employee;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClockRecord {
    #[serde(deserialize_with = "super::null_as_default")]
    pub clocked_in: bool,

    /// Most recent clock-in. Stale once `clocked_in` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,

    /// Newest first.
    #[serde(deserialize_with = "super::null_as_default")]
    pub logs: Vec<String>,

    #[serde(deserialize_with = "super::null_as_default")]
    pub employees: Vec<Employee>,
}

impl ClockRecord {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Prepend a log line so index 0 stays the newest entry.
    pub fn push_log(&mut self, line: impl Into<String>) {
        self.logs.insert(0, line.into());
    }

    /// Unguarded: clocking in twice overwrites `since` and logs a second line.
    pub fn clock_in(&mut self, since: impl Into<String>, line: impl Into<String>) {
        self.clocked_in = true;
        self.since = Some(since.into());
        self.push_log(line);
    }

    /// Unguarded: no prior clock-in is required. `since` is left as is.
    pub fn clock_out(&mut self, line: impl Into<String>) {
        self.clocked_in = false;
        self.push_log(line);
    }

    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Remove the employee at `index` if `0 <= index < len`; anything else
    /// leaves the roster untouched and returns `None`.
    pub fn remove_employee(&mut self, index: i64) -> Option<Employee> {
        let idx = usize::try_from(index).ok()?;
        if idx < self.employees.len() {
            Some(self.employees.remove(idx))
        } else {
            None
        }
    }

    /// `since`, but only while clocked in.
    pub fn active_since(&self) -> Option<&str> {
        if self.clocked_in {
            self.since.as_deref()
        } else {
            None
        }
    }
}
