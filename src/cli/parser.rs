use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for roomdesk
/// CLI application to track hotel room occupancy with SQLite
#[derive(Parser)]
#[command(
    name = "roomdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple front-desk CLI: track room occupancy, reservations and release history using SQLite",
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
    /// Initialize the database, configuration and room inventory
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,
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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the room board with live status colors
    List,

    /// Show one room in detail
    Show {
        /// Room id
        id: i64,
    },

    /// Book a room with the full reservation form
    Book {
        /// Room id
        id: i64,

        #[arg(long = "occupant", help = "Occupant name")]
        occupant: String,

        #[arg(long = "from", help = "Interval start (YYYY-MM-DDTHH:MM)")]
        from: String,

        #[arg(long = "to", help = "Interval end (YYYY-MM-DDTHH:MM)")]
        to: String,

        #[arg(
            long = "state",
            default_value = "reserved",
            help = "Target state: reserved or occupied"
        )]
        state: String,

        #[arg(long = "rate", help = "Rate (e.g. 15000 or 15000.50; comma accepted)")]
        rate: Option<String>,

        #[arg(long = "identity", help = "Identity document")]
        identity: Option<String>,

        #[arg(long = "address", help = "Occupant address")]
        address: Option<String>,

        #[arg(long = "agent", help = "Booking agent")]
        agent: Option<String>,

        #[arg(long = "notes", help = "Free-form notes")]
        notes: Option<String>,
    },

    /// Quick same-day booking from two times of day; the state is
    /// inferred from how soon the interval starts
    Quick {
        /// Room id
        id: i64,

        #[arg(long = "occupant", help = "Occupant name")]
        occupant: String,

        #[arg(long = "from", help = "Start time of day (HH:MM)")]
        from: String,

        #[arg(long = "to", help = "End time of day (HH:MM)")]
        to: String,
    },

    /// Release a room: archive its booking to history and reset it to free
    Release {
        /// Room id
        id: i64,
    },

    /// Toggle the housekeeping (cleaned) flag of a room
    Clean {
        /// Room id
        id: i64,
    },

    /// List archived bookings, newest first
    History,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the release history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
