use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "ecoscore")]
#[command(about = "Sustainability indicator scoring and grading", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to .ecoscore.toml discovery)
    #[arg(short, long, global = true, env = "ECOSCORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    /// Defaults to the interactive session
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Open the interactive entry form
    Interactive {
        /// Directory exported workbooks are written to
        #[arg(long = "output-dir")]
        output_dir: Option<PathBuf>,

        /// Write logs to this file while the form owns the terminal
        #[arg(long = "log-file")]
        log_file: Option<PathBuf>,
    },

    /// Score entries from a JSON file and print the results
    Score {
        /// JSON array of entries ("-" for stdin)
        #[arg(short, long)]
        entries: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Also export the workbook to this path
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Export entries from a JSON file to a spreadsheet
    Export {
        /// JSON array of entries ("-" for stdin)
        #[arg(short, long)]
        entries: PathBuf,

        /// Output file (defaults to the configured directory and file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the indicator catalog
    Catalog {
        /// Only this category (eje1..eje4 or 1..4)
        #[arg(long)]
        category: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Command run when none is given
    pub fn default_interactive() -> Self {
        Commands::Interactive {
            output_dir: None,
            log_file: None,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
