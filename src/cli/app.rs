//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands::{self, ReportArgs};
use taskreport::output::OutputMode;
use taskreport::paths;

/// taskreport - Custom tabular reports over a task list
#[derive(Parser, Debug)]
#[command(
    name = "taskreport",
    version,
    about = "Custom tabular reports over a task list",
    long_about = "Render configured reports over a task list.\n\n\
                  Each report names its columns, labels, sort order and filter.\n\
                  Extra filter words on the command line narrow the selection."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: $TASKREPORT_CONFIG or ~/.config/taskreport/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Task file (default: $TASKREPORT_DATA or ~/.local/share/taskreport/tasks.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a named report
    Report {
        /// Force colored output
        #[arg(long, conflicts_with = "no_color")]
        color: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Report name (see `taskreport reports`)
        name: String,

        /// Filter words: attr:value, +tag, -tag, ids, limit:N, or description words
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        filter: Vec<String>,
    },

    /// List the columns a report may use
    Columns,

    /// List configured reports
    Reports,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = paths::config_file(cli.config.as_deref());
    log::debug!("config file: {}", config.display());

    match cli.command {
        Some(Command::Report {
            color,
            no_color,
            name,
            filter,
        }) => {
            let args = ReportArgs {
                name,
                filter,
                color: if color {
                    Some(true)
                } else if no_color {
                    Some(false)
                } else {
                    None
                },
                config,
                data: paths::data_file(cli.data.as_deref()),
            };
            commands::report(&args, output_mode)
        },
        Some(Command::Columns) => {
            commands::columns(output_mode);
            Ok(ExitCode::SUCCESS)
        },
        Some(Command::Reports) => {
            commands::reports(&config, output_mode)?;
            Ok(ExitCode::SUCCESS)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": taskreport::VERSION
                    })
                );
            } else {
                println!("taskreport v{}", taskreport::VERSION);
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": taskreport::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("taskreport v{}", taskreport::VERSION);
                println!("\nRun 'taskreport --help' for usage");
                println!("Run 'taskreport reports' to see available reports");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
