//! # quantdash core
//!
//! Domain types and page logic for the quantdash live trading dashboard.
//!
//! The dashboard is a single page: pick a company from a static catalog,
//! see its price change, a mock forecast chart and randomly sampled
//! trading signals. All data is mocked; nothing here forecasts or trades.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Company catalog trait and the built-in static catalog |
//! | [`config`] | Dashboard settings with environment overrides |
//! | [`domain`] | Domain models (CompanyRecord, ForecastSeries, Symbol) |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//! | [`forecast`] | Forecast provider trait and the mock series generator |
//! | [`page`] | Page controller holding the selected symbol |
//! | [`pricing`] | Price/change calculator and formatting |
//! | [`signals`] | Signal sampler over an injectable random source |
//! | [`view`] | Read-only page view model and renderer traits |
//!
//! ## Quick Start
//!
//! ```rust
//! use quantdash_core::{DashboardConfig, FastrandSource, MockPageController};
//!
//! let config = DashboardConfig::default();
//! let mut page = MockPageController::from_config(&config, FastrandSource::with_seed(42))
//!     .expect("default config is valid");
//!
//! let view = page.render();
//! let panels = view.panels.expect("AAPL is in the catalog");
//! assert_eq!(panels.overview.change_display, "+$5.00 (3.45%)");
//!
//! page.select("UNKNOWN");
//! assert!(page.render().panels.is_none());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / Session  │
//! └────────┬────────┘
//!          │ select / render
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Page Controller │────▶│ Signal Sampler   │
//! └────────┬────────┘     │ (RandomSource)   │
//!          │              └──────────────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ CatalogProvider │     │ ForecastProvider │
//! └─────────────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PageView        │
//! └─────────────────┘
//! ```

pub mod catalog;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod forecast;
pub mod page;
pub mod pricing;
pub mod signals;
pub mod view;

// Catalog
pub use catalog::{CatalogProvider, StaticCatalog};

// Configuration
pub use config::DashboardConfig;

// Domain models
pub use domain::{CompanyRecord, Direction, ForecastPoint, ForecastSeries, Symbol, UtcDateTime};

// Envelope types
pub use envelope::{Envelope, EnvelopeMeta};

// Error types
pub use error::ValidationError;

// Forecasts
pub use forecast::{ForecastProvider, MockForecastGenerator, MAX_FORECAST_WINDOW};

// Page controller
pub use page::{MockPageController, PageController};

// Pricing
pub use pricing::{format_price, PriceChange, Trend};

// Signals
pub use signals::{
    Confidence, FastrandSource, RandomSource, RiskLevel, ScriptedSource, SignalSampler,
    TradeAction, TradingInsights,
};

// View model
pub use view::{
    ChartPanel, ChartRenderer, CompanyMetrics, DashboardPanels, HeaderView, InsightCard,
    InsightsPanel, MetricsRenderer, OverviewPanel, PageView, SelectorOption, SelectorView,
};
