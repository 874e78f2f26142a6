//! Path utilities: expand `~/` in user-supplied paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    if let Some(rest) = trimmed.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    if trimmed == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    PathBuf::from(trimmed)
}
