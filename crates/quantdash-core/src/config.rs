//! Dashboard settings with environment overrides.

use serde::{Deserialize, Serialize};

use crate::forecast::{validate_window, DEFAULT_FORECAST_WINDOW};
use crate::{Symbol, ValidationError};

pub const ENV_DEFAULT_SYMBOL: &str = "QUANTDASH_DEFAULT_SYMBOL";
pub const ENV_FORECAST_WINDOW: &str = "QUANTDASH_FORECAST_WINDOW";

const DEFAULT_SYMBOL: &str = "AAPL";

/// Runtime settings for a dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Symbol selected on first render.
    pub default_symbol: Symbol,
    /// Number of daily points in the chart series.
    pub forecast_window: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_symbol: Symbol::parse(DEFAULT_SYMBOL).expect("default symbol is valid"),
            forecast_window: DEFAULT_FORECAST_WINDOW,
        }
    }
}

impl DashboardConfig {
    /// Defaults overridden by `QUANTDASH_*` environment variables.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DEFAULT_SYMBOL) {
            config.default_symbol =
                Symbol::parse(&raw).map_err(|_| ValidationError::InvalidSetting {
                    key: ENV_DEFAULT_SYMBOL,
                    value: raw.clone(),
                })?;
        }

        if let Some(raw) = lookup(ENV_FORECAST_WINDOW) {
            config.forecast_window = parse_window(&raw)?;
        }

        Ok(config)
    }

    pub fn with_default_symbol(mut self, symbol: Symbol) -> Self {
        self.default_symbol = symbol;
        self
    }

    pub fn with_forecast_window(mut self, window: usize) -> Result<Self, ValidationError> {
        self.forecast_window = validate_window(window)?;
        Ok(self)
    }
}

fn parse_window(raw: &str) -> Result<usize, ValidationError> {
    let window = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| ValidationError::InvalidSetting {
            key: ENV_FORECAST_WINDOW,
            value: raw.to_owned(),
        })?;
    validate_window(window)
}
