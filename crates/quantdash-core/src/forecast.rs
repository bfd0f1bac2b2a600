//! Forecast series provider used by the chart panel.
//!
//! [`MockForecastGenerator`] produces a synthetic daily series: a seeded
//! random walk ending at the catalog price, with coin-flip direction calls.
//! It carries no predictive content.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    CatalogProvider, Direction, ForecastPoint, ForecastSeries, Symbol, UtcDateTime,
    ValidationError,
};

/// Default number of daily points in a series.
pub const DEFAULT_FORECAST_WINDOW: usize = 30;
/// Longest series, in days, a generator accepts.
pub const MAX_FORECAST_WINDOW: usize = 3650;

const MAX_DAILY_MOVE: f64 = 0.02;
// Confidence is drawn in whole cents from [0.85, 0.98).
const CONFIDENCE_CENTS: std::ops::Range<u32> = 85..98;

/// Forecast series contract.
pub trait ForecastProvider: Send + Sync {
    /// Produces the chart series for `symbol`.
    fn generate(&self, symbol: &Symbol) -> ForecastSeries;
}

/// Deterministic-per-symbol mock series generator.
#[derive(Debug, Clone)]
pub struct MockForecastGenerator {
    window: usize,
    end_date: Option<UtcDateTime>,
    anchors: HashMap<Symbol, f64>,
}

impl MockForecastGenerator {
    pub fn new(window: usize) -> Result<Self, ValidationError> {
        Ok(Self {
            window: validate_window(window)?,
            end_date: None,
            anchors: HashMap::new(),
        })
    }

    /// Anchors each catalog symbol's series at its current price.
    pub fn from_catalog(
        catalog: &dyn CatalogProvider,
        window: usize,
    ) -> Result<Self, ValidationError> {
        let mut generator = Self::new(window)?;
        generator.anchors = catalog
            .list()
            .iter()
            .map(|record| (record.symbol.clone(), record.current_price))
            .collect();
        Ok(generator)
    }

    /// Pins the last point's date instead of using today.
    pub fn with_end_date(mut self, end_date: UtcDateTime) -> Self {
        self.end_date = Some(end_date.start_of_day());
        self
    }

    pub const fn window(&self) -> usize {
        self.window
    }

    fn anchor_price(&self, symbol: &Symbol) -> f64 {
        self.anchors
            .get(symbol)
            .copied()
            .unwrap_or_else(|| 90.0 + (symbol.seed() % 350) as f64 / 10.0)
    }

    fn closes(&self, anchor: f64, rng: &mut fastrand::Rng) -> Vec<f64> {
        let mut closes = vec![anchor; self.window];
        for index in (0..self.window.saturating_sub(1)).rev() {
            let daily_move = (rng.f64() - 0.5) * 2.0 * MAX_DAILY_MOVE;
            closes[index] = round_cents(closes[index + 1] / (1.0 + daily_move));
        }
        closes
    }
}

impl Default for MockForecastGenerator {
    fn default() -> Self {
        Self {
            window: DEFAULT_FORECAST_WINDOW,
            end_date: None,
            anchors: HashMap::new(),
        }
    }
}

impl ForecastProvider for MockForecastGenerator {
    fn generate(&self, symbol: &Symbol) -> ForecastSeries {
        let mut rng = fastrand::Rng::with_seed(symbol.seed());
        let end_date = self
            .end_date
            .unwrap_or_else(|| UtcDateTime::now().start_of_day());
        let closes = self.closes(self.anchor_price(symbol), &mut rng);

        // Points whose date falls outside the calendar range are dropped.
        let points = closes
            .into_iter()
            .enumerate()
            .filter_map(|(index, actual)| {
                let direction = coin_flip(&mut rng);
                let baseline_direction = coin_flip(&mut rng);
                let confidence = f64::from(rng.u32(CONFIDENCE_CENTS)) / 100.0;
                let days_back = (self.window - 1 - index) as u32;

                Some(ForecastPoint {
                    date: end_date.days_before(days_back)?,
                    actual,
                    forecast: round_cents(actual * direction.multiplier()),
                    baseline: round_cents(actual * baseline_direction.multiplier()),
                    confidence,
                    direction,
                })
            })
            .collect::<Vec<_>>();

        debug!(symbol = %symbol, points = points.len(), "generated forecast series");
        ForecastSeries::new(symbol.clone(), points)
    }
}

/// Checks `window` against `1..=MAX_FORECAST_WINDOW`.
pub fn validate_window(window: usize) -> Result<usize, ValidationError> {
    match window {
        0 => Err(ValidationError::EmptyForecastWindow),
        window if window > MAX_FORECAST_WINDOW => Err(ValidationError::ForecastWindowTooLarge {
            window,
            max: MAX_FORECAST_WINDOW,
        }),
        window => Ok(window),
    }
}

fn coin_flip(rng: &mut fastrand::Rng) -> Direction {
    if rng.bool() {
        Direction::Up
    } else {
        Direction::Down
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticCatalog;

    fn generator() -> MockForecastGenerator {
        MockForecastGenerator::from_catalog(&StaticCatalog::builtin(), 30)
            .expect("valid window")
            .with_end_date(UtcDateTime::parse("2024-06-28T16:00:00Z").expect("timestamp"))
    }

    #[test]
    fn rejects_zero_window() {
        let err = MockForecastGenerator::new(0).expect_err("must fail");
        assert_eq!(err, ValidationError::EmptyForecastWindow);
    }

    #[test]
    fn rejects_window_beyond_ten_years() {
        let err = MockForecastGenerator::from_catalog(&StaticCatalog::builtin(), 5_000_000)
            .expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::ForecastWindowTooLarge {
                window: 5_000_000,
                max: MAX_FORECAST_WINDOW,
            }
        );
    }

    #[test]
    fn largest_window_generates_full_series() {
        let generator = MockForecastGenerator::from_catalog(
            &StaticCatalog::builtin(),
            MAX_FORECAST_WINDOW,
        )
        .expect("valid window")
        .with_end_date(UtcDateTime::parse("2024-06-28T00:00:00Z").expect("timestamp"));

        let series = generator.generate(&Symbol::parse("AAPL").expect("symbol"));
        assert_eq!(series.points.len(), MAX_FORECAST_WINDOW);
        assert_eq!(series.points[0].date.date_string(), "2014-07-02");
    }

    #[test]
    fn series_ends_at_catalog_price_on_end_date() {
        let symbol = Symbol::parse("AAPL").expect("symbol");
        let series = generator().generate(&symbol);

        assert_eq!(series.points.len(), 30);
        let last = series.points.last().expect("non-empty");
        assert_eq!(last.actual, 150.0);
        assert_eq!(last.date.format_rfc3339(), "2024-06-28T00:00:00Z");
        assert_eq!(
            series.points[0].date.format_rfc3339(),
            "2024-05-30T00:00:00Z"
        );
    }

    #[test]
    fn same_symbol_yields_identical_series() {
        let symbol = Symbol::parse("NVDA").expect("symbol");
        let generator = generator();
        assert_eq!(generator.generate(&symbol), generator.generate(&symbol));
    }

    #[test]
    fn unknown_symbols_still_get_a_series() {
        let symbol = Symbol::parse("ZZZZ").expect("symbol");
        let series = generator().generate(&symbol);

        assert_eq!(series.points.len(), 30);
        assert!(series.points.iter().all(|point| point.actual > 0.0));
    }

    #[test]
    fn forecast_values_follow_direction_multiplier() {
        let symbol = Symbol::parse("MSFT").expect("symbol");
        for point in generator().generate(&symbol).points {
            let expected = round_cents(point.actual * point.direction.multiplier());
            assert_eq!(point.forecast, expected);
            assert!((0.85..0.98).contains(&point.confidence));
        }
    }
}
