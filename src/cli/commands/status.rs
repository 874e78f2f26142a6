use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::open_store;
use crate::errors::AppResult;
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { json } = cmd {
        let store = open_store(cfg)?;
        let record = store.load();

        if *json {
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else {
            render::print_status(&record, store.time_format());
        }
    }

    Ok(())
}
