//! # Domain Models
//!
//! Canonical domain types for the quantdash dashboard.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CompanyRecord`] | Catalog entry with current price and previous close |
//! | [`ForecastPoint`] | One chart sample (actual, forecast, baseline, confidence) |
//! | [`ForecastSeries`] | Chart-ready series for one symbol |
//! | [`Direction`] | Up/down call attached to a forecast point |
//! | [`Symbol`] | Validated ticker symbol |
//! | [`UtcDateTime`] | UTC timestamp |
//!
//! Construction validates invariants, so a `CompanyRecord` always carries
//! finite, strictly positive prices.

mod models;
mod symbol;
mod timestamp;

pub use models::{CompanyRecord, Direction, ForecastPoint, ForecastSeries};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
