use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for pillpal
#[derive(Parser)]
#[command(
    name = "pillpal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track your daily pill, note side effects and keep a daily reminder",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Disable ANSI colours in calendar and day output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration values")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "last", help = "Only show the last N rows")]
        last: Option<usize>,
    },

    /// Welcome screen: today's status and your reminders
    Home,

    /// Record that the pill was taken
    Take {
        /// Day (YYYY-MM-DD), defaults to today
        date: Option<String>,
    },

    /// Record that the pill was not taken
    Miss {
        /// Day (YYYY-MM-DD), defaults to today
        date: Option<String>,
    },

    /// Save the side effects noticed on a day
    Note {
        /// Day (YYYY-MM-DD)
        date: String,

        /// Free text; pass an empty string to clear it
        text: String,
    },

    /// Show status and side effects of a day
    Show {
        /// Day (YYYY-MM-DD), defaults to today
        date: Option<String>,
    },

    /// Month calendar with intake status per day
    Calendar {
        #[arg(long, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,

        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Move N months forward (negative: backward)"
        )]
        shift: Option<i32>,

        #[arg(long = "first-weekday", help = "Leftmost column: 1=Sunday .. 7=Saturday")]
        first_weekday: Option<u8>,

        #[arg(long, help = "Locale for month and weekday names, e.g. nl_BE")]
        locale: Option<String>,
    },

    /// Manage the daily reminder
    Remind {
        #[command(subcommand)]
        action: RemindAction,
    },

    /// Export recorded days
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (default: current month)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum RemindAction {
    /// Schedule a daily reminder (HH:MM)
    Add { time: String },

    /// List scheduled reminders
    List,

    /// Remove the reminder at HH:MM
    Del { time: String },

    /// Print the reminder if one is due this minute (for cron / timers)
    Due {
        #[arg(long, value_name = "HH:MM", help = "Check this time instead of now")]
        at: Option<String>,
    },
}
