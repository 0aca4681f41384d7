use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

mod cli;
mod commands;
mod config;

#[derive(Parser)]
#[command(name = "seedsql")]
#[command(about = "seedsql - Convert PHP reference-data seeders into SQL seed scripts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Configuration file path (.toml, .yaml or .json)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the CREATE TABLE, INSERT and auxiliary seed statements
    Convert {
        /// Source file containing the array literal
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Output SQL file (stdout if omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Start marker where the array data begins
        #[arg(long)]
        marker: Option<String>,
        /// Destination table name
        #[arg(long)]
        table: Option<String>,
    },
    /// Print the extracted rows
    Extract {
        /// Source file containing the array literal
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: cli::OutputFormat,
        /// Start marker where the array data begins
        #[arg(long)]
        marker: Option<String>,
        /// Destination table name
        #[arg(long)]
        table: Option<String>,
    },
    /// Print the CREATE TABLE statement of the destination table
    Schema {
        /// Destination table name
        #[arg(long)]
        table: Option<String>,
    },
    /// Print the effective configuration as TOML
    Config {
        /// Save it to this file instead (format by extension)
        #[arg(long, value_name = "FILE")]
        write: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = config::Config::load(cli.config)?;

    let log_level = cli::log_filter(cli.quiet, cli.verbose, &config.logging.level);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting seedsql v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Convert {
            input,
            output,
            marker,
            table,
        } => commands::convert(
            &config,
            input,
            output,
            &commands::Overrides { marker, table },
        ),
        Commands::Extract {
            input,
            format,
            marker,
            table,
        } => commands::extract(
            &config,
            input,
            format,
            &commands::Overrides { marker, table },
        ),
        Commands::Schema { table } => commands::schema(
            &config,
            &commands::Overrides {
                marker: None,
                table,
            },
        ),
        Commands::Config { write } => commands::show_config(&config, write),
    }
}
