use quantdash_core::{
    CatalogProvider, ChartRenderer, DashboardConfig, ForecastProvider, MockForecastGenerator,
    StaticCatalog, Symbol,
};

use crate::cli::ForecastArgs;
use crate::error::CliError;
use crate::output::TextChartRenderer;

use super::{resolve_config, CommandResult};

pub fn run(args: &ForecastArgs, config: &DashboardConfig) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let config = resolve_config(config, args.window)?;

    let catalog = StaticCatalog::builtin();
    let generator = MockForecastGenerator::from_catalog(&catalog, config.forecast_window)?;
    let series = generator.generate(&symbol);

    let mut lines = vec![
        TextChartRenderer.render_chart(&series.points, symbol.as_str()),
        String::new(),
        format!(
            "{:<12}{:>10}{:>10}{:>10}{:>7}  {}",
            "DATE", "ACTUAL", "FORECAST", "BASELINE", "CONF", "DIR"
        ),
    ];
    lines.extend(series.points.iter().map(|point| {
        format!(
            "{:<12}{:>10.2}{:>10.2}{:>10.2}{:>7.2}  {}",
            point.date.date_string(),
            point.actual,
            point.forecast,
            point.baseline,
            point.confidence,
            point.direction
        )
    }));
    if let Some(hit_rate) = series.hit_rate_pct {
        lines.push(format!("hit rate {hit_rate:.1}%"));
    }

    let data = serde_json::to_value(&series)?;
    let result = CommandResult::new(data, lines.join("\n"));
    if catalog.find(symbol.as_str()).is_some() {
        Ok(result)
    } else {
        Ok(result.with_warning(format!(
            "{symbol} is not in the catalog; series anchored to a synthetic price"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(symbol: &str, window: Option<usize>) -> ForecastArgs {
        ForecastArgs {
            symbol: symbol.to_owned(),
            window,
        }
    }

    #[test]
    fn emits_configured_window() {
        let result = run(&args("nvda", Some(6)), &DashboardConfig::default()).expect("forecast");

        assert_eq!(result.data.get("symbol"), Some(&"NVDA".into()));
        let points = result.data.get("points").and_then(|p| p.as_array()).expect("points");
        assert_eq!(points.len(), 6);
        assert!(result.warnings.is_empty());
        assert!(result.text.contains("DATE"));
    }

    #[test]
    fn invalid_symbol_is_validation_error() {
        let error = run(&args("1bad", None), &DashboardConfig::default())
            .err()
            .expect("must fail");
        assert!(matches!(error, CliError::Validation(_)));
    }

    #[test]
    fn unknown_symbol_warns() {
        let result = run(&args("ZZZZ", Some(3)), &DashboardConfig::default()).expect("forecast");
        assert_eq!(result.warnings.len(), 1);
    }
}
