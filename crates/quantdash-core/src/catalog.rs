//! Company catalog: the static list of symbols the page can select.

use std::collections::HashSet;

use crate::{CompanyRecord, Symbol, ValidationError};

/// Read-only company catalog contract.
///
/// Implementations must be `Send + Sync`; the page controller only reads
/// from them.
pub trait CatalogProvider: Send + Sync {
    /// All records in display order.
    fn list(&self) -> &[CompanyRecord];

    /// Looks up a record by symbol. Matching is exact on the normalized
    /// (uppercase) symbol text, so callers pass already-normalized input.
    fn find(&self, symbol: &str) -> Option<&CompanyRecord> {
        self.list()
            .iter()
            .find(|record| record.symbol.as_str() == symbol)
    }
}

/// In-memory catalog loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCatalog {
    records: Vec<CompanyRecord>,
}

impl StaticCatalog {
    /// Builds a catalog, rejecting duplicate symbols.
    pub fn new(records: Vec<CompanyRecord>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.symbol.as_str()) {
                return Err(ValidationError::DuplicateSymbol {
                    symbol: record.symbol.to_string(),
                });
            }
        }
        Ok(Self { records })
    }

    /// Built-in mock dataset.
    pub fn builtin() -> Self {
        let records = [
            ("AAPL", "Apple Inc.", 150.00, 145.00, "Technology"),
            ("MSFT", "Microsoft Corporation", 378.85, 374.51, "Technology"),
            ("GOOGL", "Alphabet Inc.", 138.21, 139.67, "Communication Services"),
            ("AMZN", "Amazon.com Inc.", 145.86, 143.20, "Consumer Discretionary"),
            ("TSLA", "Tesla Inc.", 238.45, 246.90, "Consumer Discretionary"),
            ("NVDA", "NVIDIA Corporation", 481.12, 470.03, "Technology"),
            ("META", "Meta Platforms Inc.", 326.49, 329.81, "Communication Services"),
            ("JPM", "JPMorgan Chase & Co.", 158.77, 157.40, "Financials"),
        ]
        .into_iter()
        .map(|(symbol, name, current_price, previous_close, sector)| {
            CompanyRecord::new(
                Symbol::parse(symbol).expect("catalog symbols are valid"),
                name,
                current_price,
                previous_close,
                sector,
            )
            .expect("catalog entries are valid")
        })
        .collect::<Vec<_>>();

        Self::new(records).expect("catalog symbols are unique")
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogProvider for StaticCatalog {
    fn list(&self) -> &[CompanyRecord] {
        &self.records
    }
}
