use quantdash_core::{format_price, ChartRenderer, ForecastPoint};

const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Sparkline chart of the actual, forecast and baseline lines on one shared scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextChartRenderer;

impl ChartRenderer for TextChartRenderer {
    fn render_chart(&self, data: &[ForecastPoint], label: &str) -> String {
        let (Some(first), Some(last)) = (data.first(), data.last()) else {
            return format!("{label}: no data");
        };

        let (low, high) = data
            .iter()
            .flat_map(|point| [point.actual, point.forecast, point.baseline])
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), value| {
                (low.min(value), high.max(value))
            });

        let line = |name: &str, pick: fn(&ForecastPoint) -> f64| {
            format!(
                "  {name:<9}{}  {}",
                sparkline(data.iter().map(pick), low, high),
                format_price(pick(last))
            )
        };

        [
            format!(
                "{label} ({} to {})",
                first.date.date_string(),
                last.date.date_string()
            ),
            line("actual", |point| point.actual),
            line("forecast", |point| point.forecast),
            line("baseline", |point| point.baseline),
        ]
        .join("\n")
    }
}

fn sparkline(values: impl Iterator<Item = f64>, low: f64, high: f64) -> String {
    let span = high - low;
    let top = BLOCKS.len() - 1;
    values
        .map(|value| {
            let index = if span > 0.0 {
                (((value - low) / span) * top as f64).round() as usize
            } else {
                top / 2
            };
            BLOCKS[index.min(top)]
        })
        .collect()
}
