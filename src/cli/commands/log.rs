use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::open_store;
use crate::errors::AppResult;
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { limit } = cmd {
        let store = open_store(cfg)?;
        render::print_activity(&store.load(), *limit);
    }

    Ok(())
}
