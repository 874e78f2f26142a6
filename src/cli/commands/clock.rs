use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::open_store;
use crate::errors::AppResult;
use crate::ui::render;
use crate::utils::time::parse_optional_timestamp;

/// Handle `in` and `out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (at, clocking_in) = match cmd {
        Commands::In { at } => (at, true),
        Commands::Out { at } => (at, false),
        _ => return Ok(()),
    };

    let now = parse_optional_timestamp(at.as_ref())?;
    let store = open_store(cfg)?;

    let record = if clocking_in {
        store.clock_in(now)
    } else {
        store.clock_out(now)
    };

    if let Some(line) = record.logs.first() {
        println!("{}", crate::utils::escape::for_terminal(line));
    }

    // Re-read: what is shown is what the store holds now.
    render::print_status(&store.load(), store.time_format());
    Ok(())
}
