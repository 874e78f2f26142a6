use crate::config::Backend;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rClockin
#[derive(Parser)]
#[command(
    name = "rclockin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in/out and keep a minimal employee roster in a local store",
    long_about = None
)]
pub struct Cli {
    /// Override storage path (useful for tests or a shared store)
    #[arg(global = true, long = "store", value_name = "PATH")]
    pub store: Option<String>,

    /// Override storage backend
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<Backend>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the storage file
    Init,

    /// Clock in
    In {
        /// Clock-in time as RFC 3339 (default: now)
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Clock out
    Out {
        /// Clock-out time as RFC 3339 (default: now)
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Show whether you are clocked in
    Status {
        /// Print the stored record as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show the activity log, newest first
    Log {
        /// Show at most N entries
        #[arg(long = "limit", short = 'n', value_name = "N")]
        limit: Option<usize>,
    },

    /// Manage the employee roster
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Clear the stored record (status, activity and roster)
    Reset {
        /// Do not ask for confirmation
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add an employee
    Add {
        /// Full name (required)
        name: String,

        /// Email address
        #[arg(long = "email", short = 'e')]
        email: Option<String>,
    },

    /// List employees with their index
    List,

    /// Remove the employee at INDEX (as shown by `employee list`)
    Remove {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}
