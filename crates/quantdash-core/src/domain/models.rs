use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Symbol, UtcDateTime, ValidationError};

/// Static company snapshot served by the catalog.
///
/// Deserialization goes through [`CompanyRecord::new`], so the same
/// validation applies to records read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CompanyRecordFields")]
pub struct CompanyRecord {
    pub symbol: Symbol,
    pub name: String,
    pub current_price: f64,
    pub previous_close: f64,
    pub sector: String,
}

impl CompanyRecord {
    pub fn new(
        symbol: Symbol,
        name: impl Into<String>,
        current_price: f64,
        previous_close: f64,
        sector: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        validate_positive("current_price", current_price)?;
        validate_positive("previous_close", previous_close)?;

        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "name" });
        }
        let sector = sector.into();
        if sector.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "sector" });
        }

        Ok(Self {
            symbol,
            name,
            current_price,
            previous_close,
            sector,
        })
    }
}

#[derive(Deserialize)]
struct CompanyRecordFields {
    symbol: Symbol,
    name: String,
    current_price: f64,
    previous_close: f64,
    sector: String,
}

impl TryFrom<CompanyRecordFields> for CompanyRecord {
    type Error = ValidationError;

    fn try_from(fields: CompanyRecordFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.symbol,
            fields.name,
            fields.current_price,
            fields.previous_close,
            fields.sector,
        )
    }
}

/// Direction call attached to a forecast point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Price multiplier applied to the actual close for this call.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Up => 1.015,
            Self::Down => 0.985,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sample of a forecast chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: UtcDateTime,
    pub actual: f64,
    pub forecast: f64,
    pub baseline: f64,
    pub confidence: f64,
    pub direction: Direction,
}

/// Chart-ready series for a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub symbol: Symbol,
    pub points: Vec<ForecastPoint>,
    /// Share of direction calls confirmed by the next actual move, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_rate_pct: Option<f64>,
}

impl ForecastSeries {
    pub fn new(symbol: Symbol, points: Vec<ForecastPoint>) -> Self {
        let hit_rate_pct = hit_rate(&points);
        Self {
            symbol,
            points,
            hit_rate_pct,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn hit_rate(points: &[ForecastPoint]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }

    let calls = points.len() - 1;
    let hits = points
        .windows(2)
        .filter(|pair| {
            let moved_up = pair[1].actual >= pair[0].actual;
            match pair[0].direction {
                Direction::Up => moved_up,
                Direction::Down => !moved_up,
            }
        })
        .count();

    let pct = hits as f64 / calls as f64 * 100.0;
    Some((pct * 10.0).round() / 10.0)
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(actual: f64, direction: Direction) -> ForecastPoint {
        ForecastPoint {
            date: UtcDateTime::parse("2024-01-01T00:00:00Z").expect("timestamp"),
            actual,
            forecast: actual * direction.multiplier(),
            baseline: actual,
            confidence: 0.9,
            direction,
        }
    }

    #[test]
    fn deserialization_applies_record_validation() {
        let valid = serde_json::json!({
            "symbol": "aapl",
            "name": "Apple Inc.",
            "current_price": 150.0,
            "previous_close": 145.0,
            "sector": "Technology"
        });
        let record = serde_json::from_value::<CompanyRecord>(valid).expect("valid record");
        assert_eq!(record.symbol.as_str(), "AAPL");

        let negative = serde_json::json!({
            "symbol": "AAPL",
            "name": "Apple Inc.",
            "current_price": -1.0,
            "previous_close": 145.0,
            "sector": "Technology"
        });
        let err = serde_json::from_value::<CompanyRecord>(negative).expect_err("must fail");
        assert!(err.to_string().contains("current_price"));
    }

    #[test]
    fn rejects_non_positive_prices() {
        let symbol = Symbol::parse("AAPL").expect("symbol");
        let err = CompanyRecord::new(symbol, "Apple Inc.", 150.0, 0.0, "Technology")
            .expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::NonPositiveValue {
                field: "previous_close"
            }
        );
    }

    #[test]
    fn rejects_blank_sector() {
        let symbol = Symbol::parse("AAPL").expect("symbol");
        let err = CompanyRecord::new(symbol, "Apple Inc.", 150.0, 145.0, "  ")
            .expect_err("must fail");
        assert_eq!(err, ValidationError::EmptyField { field: "sector" });
    }

    #[test]
    fn hit_rate_counts_confirmed_calls() {
        let symbol = Symbol::parse("AAPL").expect("symbol");
        let series = ForecastSeries::new(
            symbol,
            vec![
                point(100.0, Direction::Up),
                point(101.0, Direction::Up),
                point(100.5, Direction::Down),
                point(99.0, Direction::Up),
            ],
        );

        // up->101 hit, up->100.5 miss, down->99 hit
        assert_eq!(series.hit_rate_pct, Some(66.7));
    }

    #[test]
    fn hit_rate_is_absent_for_single_point() {
        let symbol = Symbol::parse("AAPL").expect("symbol");
        let series = ForecastSeries::new(symbol, vec![point(100.0, Direction::Up)]);
        assert_eq!(series.hit_rate_pct, None);
    }
}
