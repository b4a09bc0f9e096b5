//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod attendance;
pub mod belts;
pub mod certificates;
pub mod context;
pub mod dashboard;
pub mod events;
pub mod fees;
pub mod handlers;
pub mod login;
pub mod status;
pub mod students;

pub use args::OutputFormat;
pub use context::CommandContext;

/// Dojo - terminal client for the academy management backend
#[derive(Parser, Debug)]
#[command(name = "dojo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "DOJO_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "DOJO_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "DOJO_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Sign in as this user first (password from DOJO_PASSWORD or a prompt)
    #[arg(long, global = true, env = "DOJO_EMAIL", hide_env = true)]
    pub email: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show configuration, backend reachability and session status
    Status,

    /// Sign in and show the signed-in user
    Login,

    /// List certificates, or verify one
    Certificates {
        /// Verify this certificate ID or number instead of listing
        #[arg(long, value_name = "ID")]
        verify: Option<String>,
    },

    /// List students
    Students,

    /// Show attendance records and summary
    Attendance {
        /// Only this student's attendance
        #[arg(long, value_name = "ID")]
        student: Option<String>,

        /// Only this month
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// Show fees and totals
    Fees {
        /// Only this student's fees
        #[arg(long, value_name = "ID")]
        student: Option<String>,
    },

    /// List academy events
    Events {
        /// Only events from today on
        #[arg(long)]
        upcoming: bool,
    },

    /// Belt levels, promotions and tests
    #[command(subcommand)]
    Belts(BeltCommands),

    /// Summary of certificates, attendance, fees, events and belts
    Dashboard,

    /// Display version information
    Version,
}

/// Belt subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeltCommands {
    /// Belt levels, lowest rank first
    Levels,
    /// Recent promotions
    Promotions,
    /// Scheduled belt tests
    Tests,
}
