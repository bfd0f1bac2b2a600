//! Page controller: the selected symbol and the views derived from it.

use tracing::debug;

use crate::catalog::{CatalogProvider, StaticCatalog};
use crate::config::DashboardConfig;
use crate::forecast::{ForecastProvider, MockForecastGenerator};
use crate::pricing::PriceChange;
use crate::signals::{FastrandSource, RandomSource, SignalSampler};
use crate::view::{
    ChartPanel, CompanyMetrics, DashboardPanels, HeaderView, InsightsPanel, OverviewPanel,
    PageView, SelectorView, CHART_TITLE,
};
use crate::{CompanyRecord, ValidationError};

/// Holds the selected symbol and composes a [`PageView`] on each render.
///
/// Nothing is cached between renders: price change, forecast series and
/// signals are recomputed every time, and signals are freshly sampled.
pub struct PageController<C, F, R> {
    catalog: C,
    forecasts: F,
    sampler: SignalSampler<R>,
    selected: String,
}

/// Controller wired to the built-in mock collaborators.
pub type MockPageController = PageController<StaticCatalog, MockForecastGenerator, FastrandSource>;

impl<C, F, R> PageController<C, F, R>
where
    C: CatalogProvider,
    F: ForecastProvider,
    R: RandomSource,
{
    pub fn new(catalog: C, forecasts: F, sampler: SignalSampler<R>) -> Self {
        let selected = DashboardConfig::default().default_symbol.to_string();
        Self {
            catalog,
            forecasts,
            sampler,
            selected,
        }
    }

    /// Replaces the current selection. Input is trimmed and uppercased;
    /// symbols outside the catalog are accepted silently.
    pub fn select(&mut self, symbol: &str) {
        let normalized = symbol.trim().to_ascii_uppercase();
        if self.catalog.find(&normalized).is_some() {
            debug!(from = %self.selected, to = %normalized, "symbol selected");
        }
        self.selected = normalized;
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn current_company(&self) -> Option<&CompanyRecord> {
        self.catalog.find(&self.selected)
    }

    /// Change for the current selection, zero when it is unknown.
    pub fn price_change(&self) -> PriceChange {
        self.current_company()
            .map(|company| PriceChange::compute(company.current_price, company.previous_close))
            .unwrap_or_else(PriceChange::zero)
    }

    /// Composes the page for the current selection.
    pub fn render(&mut self) -> PageView {
        let change = self.price_change();
        let selector = SelectorView::new(self.selected.clone(), self.catalog.list());

        let panels = match self.catalog.find(&self.selected) {
            Some(company) => {
                let series = self.forecasts.generate(&company.symbol);
                let insights = self.sampler.sample_insights();
                Some(DashboardPanels {
                    company: company.clone(),
                    overview: OverviewPanel::new(company, change),
                    metrics: CompanyMetrics::from_record(company),
                    chart: ChartPanel {
                        title: CHART_TITLE,
                        label: company.name.clone(),
                        series,
                    },
                    insights: InsightsPanel::new(insights),
                })
            }
            None => None,
        };

        PageView {
            header: HeaderView::default(),
            selector,
            change,
            panels,
        }
    }
}

impl MockPageController {
    /// Built-in catalog and mock forecasts sized by `config`, starting on
    /// `config.default_symbol`.
    pub fn from_config(
        config: &DashboardConfig,
        source: FastrandSource,
    ) -> Result<Self, ValidationError> {
        let catalog = StaticCatalog::builtin();
        let forecasts = MockForecastGenerator::from_catalog(&catalog, config.forecast_window)?;
        let mut controller = Self::new(catalog, forecasts, SignalSampler::new(source));
        controller.select(config.default_symbol.as_str());
        Ok(controller)
    }
}
