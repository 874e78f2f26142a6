use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// One roster entry. `email` is stored as `""` when not given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub email: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Build an employee from raw form input: both fields are trimmed and an
    /// empty name is rejected.
    pub fn from_input(name: &str, email: Option<&str>) -> AppResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidName);
        }
        let email = email.map(str::trim).unwrap_or_default();
        Ok(Self::new(name, email))
    }

    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }
}
