//! Where swallowed store failures go.

use crate::errors::AppError;
use crate::ui::messages;
use std::sync::{Arc, Mutex};

pub trait Diagnostics {
    fn report(&self, failure: &AppError);
}

/// Failure kinds as seen by a diagnostics sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Deserialization,
    Persistence,
    Other,
}

impl From<&AppError> for FailureKind {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Deserialization { .. } => FailureKind::Deserialization,
            AppError::Persistence { .. } => FailureKind::Persistence,
            _ => FailureKind::Other,
        }
    }
}

/// Prints to stderr: warnings for reset data, errors for lost writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn report(&self, failure: &AppError) {
        match FailureKind::from(failure) {
            FailureKind::Deserialization => messages::diagnostic_warning(failure),
            _ => messages::diagnostic_error(failure),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn report(&self, _failure: &AppError) {}
}

/// Keeps every report; clones share the same list.
#[derive(Debug, Default, Clone)]
pub struct MemoryDiagnostics {
    reports: Arc<Mutex<Vec<(FailureKind, String)>>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<(FailureKind, String)> {
        self.reports.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn count(&self, kind: FailureKind) -> usize {
        self.reports().iter().filter(|(k, _)| *k == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.reports().is_empty()
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn report(&self, failure: &AppError) {
        let mut reports = self.reports.lock().unwrap_or_else(|p| p.into_inner());
        reports.push((FailureKind::from(failure), failure.to_string()));
    }
}
