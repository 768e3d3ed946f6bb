use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for coachtrack
/// CLI application to track coach attendance against assigned fields
#[derive(Parser)]
#[command(
    name = "coachtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Coach attendance tracker: clock in/out on a field and check it against the master assignment list",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (ledger, reference files, activity log)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and an empty ledger
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Clock a coach in on a field
    In {
        /// Coach name (free text)
        name: String,

        #[arg(long = "field", short = 'f', help = "Field the coach is working at")]
        field: String,

        #[arg(
            long = "at",
            value_name = "TIMESTAMP",
            help = "Use this time instead of now (YYYY-MM-DD HH:MM[:SS])"
        )]
        at: Option<String>,
    },

    /// Clock a coach out, closing the latest open shift
    Out {
        /// Coach name (free text)
        name: String,

        #[arg(long = "field", short = 'f', help = "Field the coach is leaving")]
        field: String,

        #[arg(
            long = "at",
            value_name = "TIMESTAMP",
            help = "Use this time instead of now (YYYY-MM-DD HH:MM[:SS])"
        )]
        at: Option<String>,
    },

    /// Show recorded activities and the summary by field
    List {
        #[arg(long, help = "Only records of this coach")]
        name: Option<String>,

        #[arg(long = "open", help = "Only shifts that are still open")]
        open: bool,

        #[arg(long = "summary", help = "Show only the summary by field")]
        summary: bool,
    },

    /// List the selectable field names
    Fields,

    /// Show the fields assigned to a coach in the master list
    Assigned {
        /// Coach name
        name: String,
    },

    /// Create a backup copy of the ledger
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export the ledger
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal activity log
    Log {
        #[arg(long = "print", help = "Print rows from the internal activity log")]
        print: bool,
    },
}
