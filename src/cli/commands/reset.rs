use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let prompt = "Clear clock status, activity log and employee roster? This action is irreversible.";
        if !*yes && !ask_confirmation(prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = open_store(cfg)?;
        store.reset();
        success("Stored state cleared.");
    }

    Ok(())
}
