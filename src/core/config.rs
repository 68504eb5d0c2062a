use crate::core::rate::Rate;
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

const DEFAULT_PRECISION: usize = 2;

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub rates: Vec<Rate>,
    /// Target currency used when a command does not name one.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Decimal places shown for amounts.
    pub precision: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            rates: Vec::new(),
            currency: default_currency(),
            precision: None,
        }
    }
}

impl AppConfig {
    /// Loads the config file from the default location.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_or_default(&config_path, false)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "fxroute", "fxroute")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    /// Loads `path`, falling back to an empty config when the file is
    /// missing and `allow_missing` is set.
    pub fn load_or_default<P: AsRef<std::path::Path>>(
        path: P,
        allow_missing: bool,
    ) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load_from_path(path);
        }
        if !allow_missing {
            bail!(
                "No configuration file at {}. Run `fxroute setup` or pass rates with --rate",
                path.display()
            );
        }
        debug!("No config at {}, using defaults", path.display());
        Ok(Self::default())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!(rates = config.rates.len(), "Successfully loaded config");
        Ok(config)
    }

    /// Rejects rates the converter would turn into meaningless amounts.
    ///
    /// The conversion core accepts any rate; a zero quote there yields an
    /// infinite reciprocal. User supplied rates are checked here instead.
    pub fn validate(&self) -> Result<()> {
        if self.currency.trim().is_empty() {
            bail!("Default currency must not be empty");
        }
        for rate in &self.rates {
            if rate.from.trim().is_empty() || rate.to.trim().is_empty() {
                bail!("Rate {rate} has an empty currency code");
            }
            if !rate.rate.is_finite() || rate.rate <= 0.0 {
                bail!("Rate {rate} must be a positive number");
            }
        }
        Ok(())
    }

    /// Appends `extra` after the configured rates. Configured quotes keep
    /// precedence when both name the same pair.
    pub fn with_rates(mut self, extra: impl IntoIterator<Item = Rate>) -> Self {
        self.rates.extend(extra);
        self
    }

    pub fn precision(&self) -> usize {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }
}
