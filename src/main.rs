use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxroute::core::Rate;
use fxroute::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Additional rate as FROM:TO:RATE, may be repeated
    #[arg(short, long = "rate", global = true, value_name = "FROM:TO:RATE")]
    rates: Vec<Rate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxroute::AppCommand {
    fn from(cmd: Commands) -> fxroute::AppCommand {
        match cmd {
            Commands::Convert { from, to, amount } => {
                fxroute::AppCommand::Convert { from, to, amount }
            }
            Commands::Route { from, to } => fxroute::AppCommand::Route { from, to },
            Commands::Rates => fxroute::AppCommand::Rates,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Currency to convert from
        from: String,
        /// Currency to convert to, defaults to the configured currency
        to: Option<String>,
        /// Amount to convert
        #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
        amount: f64,
    },
    /// Show the chain of rates used between two currencies
    Route { from: String, to: String },
    /// List all known rates
    Rates,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxroute::cli::setup::setup(),
        Some(cmd) => fxroute::run_command(cmd.into(), cli.config_path.as_deref(), &cli.rates),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
