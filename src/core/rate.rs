//! Exchange rate triples

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A direct exchange rate: one unit of `from` buys `rate` units of `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub from: String,
    pub to: String,
    pub rate: f64,
}

impl Rate {
    pub fn new(from: impl Into<String>, to: impl Into<String>, rate: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            rate,
        }
    }
}

impl From<(&str, &str, f64)> for Rate {
    fn from((from, to, rate): (&str, &str, f64)) -> Self {
        Rate::new(from, to, rate)
    }
}

impl Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.from, self.to, self.rate)
    }
}

/// Parses the `FROM:TO:RATE` form accepted on the command line.
impl FromStr for Rate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [from, to, rate] = parts.as_slice() else {
            return Err(anyhow!("Invalid rate '{s}', expected FROM:TO:RATE"));
        };
        if from.is_empty() || to.is_empty() {
            return Err(anyhow!("Invalid rate '{s}', currency codes must not be empty"));
        }
        let rate: f64 = rate
            .parse()
            .with_context(|| format!("Invalid rate value in '{s}'"))?;
        Ok(Rate::new(*from, *to, rate))
    }
}
