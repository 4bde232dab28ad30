use crate::export::ExportFormat;
use crate::models::day_field::DayField;
use crate::models::day_kind::DayKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkCycle
/// CLI application to track a two-week work cycle with SQLite
#[derive(Parser)]
#[command(
    name = "rworkcycle",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track clock-in/clock-out over a two-week work cycle: hours against a target and core-hours compliance",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend today is the given date (YYYY-MM-DD)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Show the current cycle with its totals
    Status,

    /// Clock in (keeps an existing clock-in time)
    In {
        /// Day: date (YYYY-MM-DD) or record id; default is today
        day: Option<String>,

        #[arg(long = "at", help = "Clock-in time (HH:MM), default is now")]
        at: Option<String>,
    },

    /// Clock out (replaces an existing clock-out time)
    Out {
        /// Day: date (YYYY-MM-DD) or record id; default is today
        day: Option<String>,

        #[arg(long = "at", help = "Clock-out time (HH:MM), default is now")]
        at: Option<String>,
    },

    /// Overwrite a single field of a day
    Edit {
        /// Day: date (YYYY-MM-DD) or record id
        day: String,

        #[arg(long, value_enum, help = "Field to overwrite")]
        field: DayField,

        #[arg(
            long,
            allow_hyphen_values = true,
            help = "New value (HH:MM for start/end, empty to clear)"
        )]
        value: String,
    },

    /// Remove clock-in and clock-out of a day
    Clear {
        /// Day: date (YYYY-MM-DD) or record id
        day: String,
    },

    /// Set the classification of a day
    Kind {
        /// Day: date (YYYY-MM-DD) or record id
        day: String,

        #[arg(value_enum)]
        kind: DayKind,
    },

    /// Show or change the cycle start
    Cycle {
        /// New cycle start (YYYY-MM-DD), taken as given
        #[arg(conflicts_with = "auto")]
        start: Option<String>,

        #[arg(long = "auto", help = "Start the cycle on the Monday of the current week")]
        auto: bool,
    },

    /// Replace every day of the cycle with an empty one
    Reset {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export the current cycle
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
