use crate::cli::parser::Cli;
use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::storage::{JsonFileStorage, SqliteStorage};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the storage medium for the configured backend
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rClockin…");

    if cli.test {
        info("Test mode: configuration file left untouched.");
    } else {
        let path = cfg.save()?;
        success(format!("Config file: {}", path.display()));
    }

    let storage_path = cfg.storage_path();
    let created = match cfg.backend {
        Backend::Json => JsonFileStorage::open(&storage_path)?.create_if_missing()?,
        Backend::Sqlite => {
            let existed = storage_path.exists();
            SqliteStorage::open(&storage_path)?;
            !existed
        }
    };

    if created {
        success(format!(
            "Storage ({}) created at {}",
            cfg.backend,
            storage_path.display()
        ));
    } else {
        info(format!(
            "Storage ({}) already present at {}",
            cfg.backend,
            storage_path.display()
        ));
    }

    println!("🎉 rClockin initialization completed!");
    Ok(())
}
