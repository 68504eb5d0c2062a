pub mod cli;
pub mod core;

use crate::core::Rate;
use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::debug;

pub enum AppCommand {
    Convert {
        from: String,
        to: Option<String>,
        amount: f64,
    },
    Route {
        from: String,
        to: String,
    },
    Rates,
}

/// Loads the config file and appends `extra_rates` after its rates.
///
/// Without an explicit `config_path` the default location is used; a
/// missing default file is tolerated only when `extra_rates` supplies rates.
pub fn load_config(config_path: Option<&str>, extra_rates: &[Rate]) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None if extra_rates.is_empty() => AppConfig::load()?,
        None => AppConfig::load_or_default(AppConfig::default_config_path()?, true)?,
    };
    let config = config.with_rates(extra_rates.iter().cloned());
    config.validate()?;
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

/// Runs `command` against the rates in the config file plus `extra_rates`.
pub fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    extra_rates: &[Rate],
) -> Result<()> {
    let config = load_config(config_path, extra_rates)?;

    let precision = config.precision();
    match command {
        AppCommand::Convert { from, to, amount } => {
            let to = to.as_deref().unwrap_or(&config.currency);
            cli::convert::run(&config.rates, &from, to, amount, precision)
        }
        AppCommand::Route { from, to } => cli::route::run(&config.rates, &from, &to),
        AppCommand::Rates => cli::rates::run(&config.rates),
    }
}
