//! Output escaping for free-text fields (log lines, employee name/email).

use regex::Regex;
use std::sync::OnceLock;

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // CSI sequences (colors, cursor movement) and OSC sequences (titles, links).
    RE.get_or_init(|| {
        Regex::new(r"\x1B\[[0-?]*[ -/]*[@-~]|\x1B\][^\x07\x1B]*(?:\x07|\x1B\\)")
            .expect("static regex")
    })
}

pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

/// Make stored text safe to print on a terminal: escape sequences are
/// removed, other control characters become spaces.
pub fn for_terminal(s: &str) -> String {
    strip_ansi(s)
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
