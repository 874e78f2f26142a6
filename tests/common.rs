#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rclockin::core::{MemoryDiagnostics, StateStore};
use rclockin::storage::MemoryStorage;
use std::path::PathBuf;
use tempfile::TempDir;

pub const KEY: &str = "clockState";

pub fn rci() -> Command {
    cargo_bin_cmd!("rclockin")
}

/// A store over shared in-memory storage, plus handles to inspect both sides.
pub fn memory_store() -> (StateStore, MemoryStorage, MemoryDiagnostics) {
    let storage = MemoryStorage::new();
    let diagnostics = MemoryDiagnostics::new();
    let store = StateStore::new(storage.clone(), diagnostics.clone());
    (store, storage, diagnostics)
}

/// Isolated HOME plus a storage file inside it.
pub struct Sandbox {
    pub dir: TempDir,
    pub store: PathBuf,
}

impl Sandbox {
    pub fn new(file_name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = dir.path().join(file_name);
        Self { dir, store }
    }

    /// Command with HOME redirected and `--store` pointing into the sandbox.
    pub fn cmd(&self) -> Command {
        let store = self.store.to_string_lossy().to_string();
        let mut cmd = rci();
        cmd.env("HOME", self.dir.path())
            .env("APPDATA", self.dir.path())
            .args(["--store", store.as_str()]);
        cmd
    }
}
