use clap::{Parser, Subcommand};

/// Command-line interface definition for worktime
/// CLI application to calculate the end of the working day
#[derive(Parser)]
#[command(
    name = "worktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Calculate when your working day ends, how much is left and how much overtime you made",
    long_about = None
)]
pub struct Cli {
    /// Override the configured timezone (IANA name, e.g. Europe/Vienna)
    #[arg(global = true, long = "tz")]
    pub tz: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate end time and status for today's start time
    Calc {
        /// Start time (HH:MM, 24h)
        start: String,

        /// Custom break hours (enables custom break)
        #[arg(long = "break-hours", allow_negative_numbers = true)]
        break_hours: Option<i64>,

        /// Custom break minutes (enables custom break)
        #[arg(long = "break-minutes", allow_negative_numbers = true)]
        break_minutes: Option<i64>,

        /// Use this as the current time instead of the clock (YYYY-MM-DD HH:MM)
        #[arg(long = "at", value_name = "DATETIME")]
        at: Option<String>,

        /// Print the result as JSON
        #[arg(long = "json")]
        json: bool,

        /// Recalculate every SECS seconds until interrupted
        #[arg(long = "watch", value_name = "SECS", conflicts_with = "at")]
        watch: Option<u64>,
    },

    /// Handle a JSON calculation request (from a file or stdin)
    Request {
        /// Read the payload from FILE instead of stdin
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Use this as the current time instead of the clock (YYYY-MM-DD HH:MM)
        #[arg(long = "at", value_name = "DATETIME")]
        at: Option<String>,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}
