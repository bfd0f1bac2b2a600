//! Read-only view model produced by the page controller.
//!
//! A [`PageView`] always carries the header and selector. The four
//! company panels travel together in [`DashboardPanels`] and are absent
//! when the selected symbol is not in the catalog.

use serde::Serialize;

use crate::pricing::{format_price, PriceChange, Trend};
use crate::signals::TradingInsights;
use crate::{CompanyRecord, ForecastPoint, ForecastSeries, Symbol};

pub const PAGE_TITLE: &str = "Quantum Live Trading";
pub const PAGE_BADGE: &str = "Real-Time Quantum Trading";
pub const PAGE_HEADING: &str = "Live Trading Dashboard";
pub const PAGE_SUBTITLE: &str = "Select a company to view and trade in real time";
pub const SELECTOR_PLACEHOLDER: &str = "Select a company";
pub const CHART_TITLE: &str = "Live Quantum Trading Chart";
pub const INSIGHTS_TITLE: &str = "Trading Insights";

/// Renders a forecast series for a labelled chart.
pub trait ChartRenderer {
    fn render_chart(&self, data: &[ForecastPoint], label: &str) -> String;
}

/// Renders supplementary figures for a company.
pub trait MetricsRenderer {
    fn render_metrics(&self, company: &CompanyRecord) -> String;
}

/// Static page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub title: &'static str,
    pub badge: &'static str,
    pub heading: &'static str,
    pub subtitle: &'static str,
}

impl Default for HeaderView {
    fn default() -> Self {
        Self {
            title: PAGE_TITLE,
            badge: PAGE_BADGE,
            heading: PAGE_HEADING,
            subtitle: PAGE_SUBTITLE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorOption {
    pub symbol: Symbol,
    pub name: String,
}

/// Company selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorView {
    pub selected: String,
    pub placeholder: &'static str,
    pub options: Vec<SelectorOption>,
}

impl SelectorView {
    pub fn new(selected: impl Into<String>, records: &[CompanyRecord]) -> Self {
        Self {
            selected: selected.into(),
            placeholder: SELECTOR_PLACEHOLDER,
            options: records
                .iter()
                .map(|record| SelectorOption {
                    symbol: record.symbol.clone(),
                    name: record.name.clone(),
                })
                .collect(),
        }
    }
}

/// Company overview card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewPanel {
    pub name: String,
    pub subtitle: String,
    pub price: f64,
    pub price_display: String,
    pub change: PriceChange,
    pub change_display: String,
    pub trend: Trend,
    pub style: &'static str,
}

impl OverviewPanel {
    pub fn new(company: &CompanyRecord, change: PriceChange) -> Self {
        let trend = change.trend();
        Self {
            name: company.name.clone(),
            subtitle: format!("{} • {}", company.symbol, company.sector),
            price: company.current_price,
            price_display: format_price(company.current_price),
            change,
            change_display: change.to_string(),
            trend,
            style: trend.style(),
        }
    }
}

/// Supplementary company figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyMetrics {
    pub symbol: Symbol,
    pub sector: String,
    pub current_price: f64,
    pub previous_close: f64,
    pub change: PriceChange,
    pub trend: Trend,
}

impl CompanyMetrics {
    pub fn from_record(company: &CompanyRecord) -> Self {
        let change = PriceChange::compute(company.current_price, company.previous_close);
        Self {
            symbol: company.symbol.clone(),
            sector: company.sector.clone(),
            current_price: company.current_price,
            previous_close: company.previous_close,
            change,
            trend: change.trend(),
        }
    }
}

/// Forecast chart card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub title: &'static str,
    pub label: String,
    pub series: ForecastSeries,
}

/// One card of the insights panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightCard {
    pub title: &'static str,
    pub value: String,
    pub caption: &'static str,
}

/// Sampled trading insights card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsPanel {
    pub title: &'static str,
    pub insights: TradingInsights,
}

impl InsightsPanel {
    pub fn new(insights: TradingInsights) -> Self {
        Self {
            title: INSIGHTS_TITLE,
            insights,
        }
    }

    pub fn cards(&self) -> [InsightCard; 3] {
        [
            InsightCard {
                title: "Live Signal",
                value: self.insights.action.to_string(),
                caption: "Quantum trading recommendation",
            },
            InsightCard {
                title: "Confidence Level",
                value: self.insights.confidence.to_string(),
                caption: "Quantum certainty",
            },
            InsightCard {
                title: "Risk Factor",
                value: self.insights.risk.to_string(),
                caption: "Market volatility",
            },
        ]
    }
}

/// Panels rendered only for a known company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPanels {
    /// Record the panels were built from, handed to metrics renderers.
    #[serde(skip)]
    pub company: CompanyRecord,
    pub overview: OverviewPanel,
    pub metrics: CompanyMetrics,
    pub chart: ChartPanel,
    pub insights: InsightsPanel,
}

/// Full page snapshot for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub header: HeaderView,
    pub selector: SelectorView,
    /// Derived change; zero when the selection is unknown.
    pub change: PriceChange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panels: Option<DashboardPanels>,
}

impl PageView {
    pub fn has_panels(&self) -> bool {
        self.panels.is_some()
    }

    pub fn company_name(&self) -> Option<&str> {
        self.panels
            .as_ref()
            .map(|panels| panels.overview.name.as_str())
    }
}
