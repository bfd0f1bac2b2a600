use quantdash_core::{format_price, CompanyRecord, MetricsRenderer, PriceChange};

/// Two-column figures block for a company.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMetricsRenderer;

impl MetricsRenderer for TextMetricsRenderer {
    fn render_metrics(&self, company: &CompanyRecord) -> String {
        let change = PriceChange::compute(company.current_price, company.previous_close);
        let trend = change.trend();

        [
            ("Symbol", company.symbol.to_string()),
            ("Sector", company.sector.clone()),
            ("Current price", format_price(company.current_price)),
            ("Previous close", format_price(company.previous_close)),
            ("Change", format!("{} {change}", trend.arrow())),
            ("Trend", trend.style().to_owned()),
        ]
        .iter()
        .map(|(name, value)| format!("  {name:<15}{value}"))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantdash_core::Symbol;

    #[test]
    fn renders_loss_figures() {
        let company = CompanyRecord::new(
            Symbol::parse("IBM").expect("symbol"),
            "IBM",
            90.0,
            100.0,
            "Technology",
        )
        .expect("record");

        let metrics = TextMetricsRenderer.render_metrics(&company);
        assert!(metrics.contains("Previous close $100.00"));
        assert!(metrics.contains("Change         ▼ -$10.00 (-10.00%)"));
        assert!(metrics.contains("Trend          negative"));
    }
}
