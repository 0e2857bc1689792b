use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shuttletrack
#[derive(Parser)]
#[command(
    name = "shuttletrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A local shuttle-bus trip simulator: route progress, ETA and rider attendance from the command line",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the current trip: position, ETA and attendance state
    Status,

    /// Follow the trip live, one sample per second
    Watch {
        /// Stop after this many samples (default: run until arrival)
        #[arg(long = "samples")]
        samples: Option<u64>,

        /// Suppress boarding/arrival notices
        #[arg(long = "quiet", short = 'q')]
        quiet: bool,
    },

    /// Request (or cancel) a late boarding for today's trip
    Late {
        #[arg(long = "cancel", help = "Cancel an active late request")]
        cancel: bool,
    },

    /// Request (or cancel) a no-show for today's trip
    Absent {
        #[arg(long = "cancel", help = "Cancel an active no-show request")]
        cancel: bool,
    },

    /// Show the attendance calendar, toggle future absences, edit memos
    Calendar {
        /// Month to display (YYYY-MM, default: current month)
        month: Option<String>,

        /// Toggle the absence mark for a date (YYYY-MM-DD)
        #[arg(long = "absent")]
        absent: Option<String>,

        /// Date of the memo to set or clear (YYYY-MM-DD)
        #[arg(long = "memo")]
        memo: Option<String>,

        /// Memo text (omit to clear the memo)
        #[arg(long = "text", requires = "memo")]
        text: Option<String>,
    },

    /// Driver view: per-stop headcounts for a date
    Roster {
        /// Date to inspect (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(
            long = "notify-late",
            help = "Record a late notice for this date in the event history"
        )]
        notify_late: bool,
    },

    /// List the dates with a recorded absence event
    History,

    /// Show or update the rider profile
    Profile {
        #[arg(long, help = "Role: student, parent or driver")]
        role: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "student-phone")]
        student_phone: Option<String>,

        #[arg(long = "parent-phone")]
        parent_phone: Option<String>,

        #[arg(long = "applied", help = "Mark the shuttle application as active")]
        applied: bool,
    },

    /// Export attendance records or the event history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Dates to export: YYYY[-MM[-DD]] or start:end"
        )]
        range: Option<String>,

        #[arg(long, help = "Export the event history instead of date records")]
        history: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite the destination if it exists")]
        force: bool,
    },

    /// Destroy the current trip session (re-application); --all wipes everything
    Reset {
        #[arg(long, help = "Also remove profile, base counts and date records")]
        all: bool,
    },
}
