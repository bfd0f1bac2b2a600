//! Price/change calculator and its display formatting.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Two-way visual state selected by the sign of the absolute change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Gain,
    Loss,
}

impl Trend {
    pub fn from_change(absolute_change: f64) -> Self {
        if absolute_change >= 0.0 {
            Self::Gain
        } else {
            Self::Loss
        }
    }

    /// Style class applied by renderers.
    pub const fn style(self) -> &'static str {
        match self {
            Self::Gain => "positive",
            Self::Loss => "negative",
        }
    }

    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Gain => "▲",
            Self::Loss => "▼",
        }
    }
}

/// Absolute and percentage change between two prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub absolute: f64,
    pub percent: f64,
}

impl PriceChange {
    /// Computes `current - previous` and its percentage of `previous`.
    ///
    /// A zero `previous_close` yields a percent change of `0.0` instead of
    /// an infinite or NaN value.
    pub fn compute(current_price: f64, previous_close: f64) -> Self {
        let absolute = current_price - previous_close;
        let percent = if previous_close == 0.0 {
            0.0
        } else {
            absolute / previous_close * 100.0
        };

        Self { absolute, percent }
    }

    /// Derived values for a missing company.
    pub const fn zero() -> Self {
        Self {
            absolute: 0.0,
            percent: 0.0,
        }
    }

    pub fn trend(self) -> Trend {
        Trend::from_change(self.absolute)
    }
}

impl Display for PriceChange {
    /// Renders as `+$5.00 (3.45%)` or `-$10.00 (-10.00%)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = match self.trend() {
            Trend::Gain => '+',
            Trend::Loss => '-',
        };
        write!(
            f,
            "{sign}${:.2} ({:.2}%)",
            self.absolute.abs(),
            self.percent
        )
    }
}

/// Formats a price as `$150.00`.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
