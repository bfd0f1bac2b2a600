use quantdash_core::DashboardConfig;

use crate::cli::DashboardArgs;
use crate::error::CliError;
use crate::output::page::render_page;
use crate::output::{TextChartRenderer, TextMetricsRenderer};

use super::{page_controller, resolve_config, CommandResult};

pub fn run(
    args: &DashboardArgs,
    config: &DashboardConfig,
    seed: Option<u64>,
) -> Result<CommandResult, CliError> {
    let config = resolve_config(config, args.window)?;
    let mut controller = page_controller(&config, args.symbol.as_deref(), seed)?;

    let view = controller.render();
    let text = render_page(&view, &TextChartRenderer, &TextMetricsRenderer);
    let data = serde_json::to_value(&view)?;

    let result = CommandResult::new(data, text);
    if view.has_panels() {
        Ok(result)
    } else {
        Ok(result.with_warning(format!(
            "{} is not in the catalog; company panels omitted",
            controller.selected()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_symbol_renders_without_panels() {
        let args = DashboardArgs {
            symbol: Some(String::from("nope")),
            window: None,
        };
        let result = run(&args, &DashboardConfig::default(), Some(1)).expect("renders");

        assert!(result.data.get("panels").is_none());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.text.contains("Company: Select a company"));
    }

    #[test]
    fn window_override_sizes_chart() {
        let args = DashboardArgs {
            symbol: Some(String::from("tsla")),
            window: Some(4),
        };
        let result = run(&args, &DashboardConfig::default(), Some(1)).expect("renders");

        let points = result
            .data
            .pointer("/panels/chart/series/points")
            .and_then(|points| points.as_array())
            .expect("points");
        assert_eq!(points.len(), 4);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn zero_window_is_rejected() {
        let args = DashboardArgs {
            symbol: None,
            window: Some(0),
        };
        let error = run(&args, &DashboardConfig::default(), None)
            .err()
            .expect("must fail");
        assert_eq!(error.exit_code(), 2);
    }
}
