pub mod diagnostics;
pub mod store;

pub use diagnostics::{
    ConsoleDiagnostics, Diagnostics, FailureKind, MemoryDiagnostics, NullDiagnostics,
};
pub use store::StateStore;

use crate::config::Config;
use crate::errors::AppResult;
use crate::storage;

/// Build the store described by `cfg`, reporting to the console.
pub fn open_store(cfg: &Config) -> AppResult<StateStore> {
    let backend = storage::open(cfg.backend, &cfg.storage_path())?;
    Ok(StateStore::from_boxed(backend, Box::new(ConsoleDiagnostics))
        .with_key(&cfg.storage_key)
        .with_time_format(&cfg.time_format))
}
