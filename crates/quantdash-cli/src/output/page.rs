use quantdash_core::{ChartRenderer, MetricsRenderer, PageView};

/// Lays out a [`PageView`] for the terminal.
///
/// The header and selector are always printed; the four company panels
/// follow only when the view carries them.
pub fn render_page(
    view: &PageView,
    chart: &impl ChartRenderer,
    metrics: &impl MetricsRenderer,
) -> String {
    let mut lines = vec![
        format!("{}  [{}]", view.header.title, view.header.badge),
        view.header.heading.to_owned(),
        view.header.subtitle.to_owned(),
        String::new(),
    ];

    let current = view
        .selector
        .options
        .iter()
        .find(|option| option.symbol.as_str() == view.selector.selected);
    lines.push(match current {
        Some(option) => format!("Company: {} ({})", option.name, option.symbol),
        None => format!("Company: {}", view.selector.placeholder),
    });
    for option in &view.selector.options {
        let marker = if option.symbol.as_str() == view.selector.selected {
            '>'
        } else {
            ' '
        };
        lines.push(format!("  {marker} {:<6} {}", option.symbol, option.name));
    }

    let Some(panels) = &view.panels else {
        return lines.join("\n");
    };

    let overview = &panels.overview;
    lines.extend([
        String::new(),
        overview.name.clone(),
        overview.subtitle.clone(),
        format!(
            "{}  {} {} [{}]",
            overview.price_display,
            overview.trend.arrow(),
            overview.change_display,
            overview.style
        ),
        String::new(),
        metrics.render_metrics(&panels.company),
        String::new(),
        panels.chart.title.to_owned(),
        chart.render_chart(&panels.chart.series.points, &panels.chart.label),
    ]);
    if let Some(hit_rate) = panels.chart.series.hit_rate_pct {
        lines.push(format!("  hit rate {hit_rate:.1}%"));
    }

    lines.push(String::new());
    lines.push(panels.insights.title.to_owned());
    for card in panels.insights.cards() {
        lines.push(format!(
            "  {:<17}{:<8}{}",
            card.title, card.value, card.caption
        ));
    }

    lines.join("\n")
}
