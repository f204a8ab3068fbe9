use clap::{Parser, Subcommand};

/// Command-line interface definition for rattendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Paste attendance-log rows and get worked, break and total clock time",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Print debug diagnostics to stderr
    #[arg(global = true, long = "debug")]
    pub debug: bool,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Show or edit the configuration file
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

    /// Compute worked, break and total time from tab-separated rows
    Summary {
        #[arg(long, value_name = "FILE", help = "Read rows from FILE instead of stdin")]
        file: Option<String>,

        #[arg(long, help = "Print the metrics as JSON")]
        json: bool,

        #[arg(long, help = "Show pairs and breaks for every person and day")]
        details: bool,
    },

    /// Print the ingested rows as a table
    Table {
        #[arg(long, value_name = "FILE", help = "Read rows from FILE instead of stdin")]
        file: Option<String>,
    },

    /// Interactive editing session over the grid
    Session {
        #[arg(long, value_name = "FILE", help = "Preload rows from FILE")]
        file: Option<String>,
    },
}
