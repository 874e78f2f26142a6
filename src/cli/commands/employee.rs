use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::open_store;
use crate::errors::AppResult;
use crate::models::Employee;
use crate::ui::messages::{info, success};
use crate::ui::render;
use crate::utils::escape::for_terminal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };

    match action {
        EmployeeAction::Add { name, email } => {
            // Validate before touching the store.
            let employee = Employee::from_input(name, email.as_deref())?;
            let store = open_store(cfg)?;
            store.add_employee(&employee.name, &employee.email);

            success(format!("Employee '{}' added.", for_terminal(&employee.name)));
            render::print_employees(&store.load());
        }

        EmployeeAction::List => {
            let store = open_store(cfg)?;
            render::print_employees(&store.load());
        }

        EmployeeAction::Remove { index } => {
            let store = open_store(cfg)?;

            match store.remove_employee(*index) {
                (_, Some(_)) => success(format!("Employee #{} removed.", index)),
                (_, None) => info(format!("No employee at index {}.", index)),
            }
            render::print_employees(&store.load());
        }
    }

    Ok(())
}
