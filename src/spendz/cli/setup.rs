use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spendz", bin_name = "spendz", version)]
#[command(about = "Personal expense tracker for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to use instead of the configured one
    #[arg(
        short,
        long,
        global = true,
        env = "SPENDZ_FILE",
        value_name = "PATH",
        help_heading = "Options"
    )]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new expense
    #[command(alias = "a")]
    Add {
        /// Amount spent, e.g. 12.50
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category label; falls back to the configured default category
        category: Option<String>,

        /// Free-form note
        #[arg(short, long, default_value = "")]
        note: String,

        /// Date of the expense (defaults to today)
        #[arg(short, long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },

    /// List all expenses, oldest first
    #[command(alias = "ls")]
    List,

    /// Show total spending
    Total,

    /// Show spending per category
    #[command(alias = "by-category")]
    Categories,

    /// Search category, note and date (case-insensitive)
    #[command(alias = "s")]
    Search {
        /// Text to look for; an empty search lists everything
        fragment: Vec<String>,
    },

    /// Delete an expense by id
    #[command(alias = "rm")]
    Delete { id: u64 },

    /// Write all expenses to a JSON file
    Export { path: PathBuf },

    /// Show or set configuration (keys: data-file, default-category)
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}
