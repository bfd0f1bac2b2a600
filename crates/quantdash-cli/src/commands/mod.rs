mod companies;
mod dashboard;
mod forecast;
pub mod session;
mod signals;

use std::io::Write;
use std::time::Instant;

use quantdash_core::{DashboardConfig, Envelope, FastrandSource, MockPageController};
use serde_json::Value;
use tokio::io::BufReader;
use tracing::info;

use self::session::SessionOptions;
use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::Metadata;
use crate::output;

/// Output of a one-shot command: machine data plus its terminal rendering.
pub struct CommandResult {
    pub data: Value,
    pub text: String,
    pub warnings: Vec<String>,
    pub latency_ms: u64,
}

impl CommandResult {
    pub fn new(data: Value, text: impl Into<String>) -> Self {
        Self {
            data,
            text: text.into(),
            warnings: Vec::new(),
            latency_ms: 0,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn into_envelope(self) -> Result<Envelope<Value>, CliError> {
        let mut metadata = Metadata::new(self.latency_ms);
        for warning in self.warnings {
            metadata.push_warning(warning);
        }

        let meta = metadata.into_envelope_meta()?;
        Envelope::new(meta, self.data).map_err(CliError::from)
    }
}

/// Dispatches the parsed command and writes its output to `out`.
pub async fn run<W: Write>(
    cli: &Cli,
    config: &DashboardConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let started = Instant::now();

    let (name, result) = match &cli.command {
        Command::Dashboard(args) => ("dashboard", dashboard::run(args, config, cli.seed)?),
        Command::Companies => ("companies", companies::run()?),
        Command::Forecast(args) => ("forecast", forecast::run(args, config)?),
        Command::Signals(args) => ("signals", signals::run(args, cli.seed)?),
        Command::Session(args) => {
            let options = SessionOptions {
                format: cli.format,
                pretty: cli.pretty,
                seed: cli.seed,
            };
            let stdin = BufReader::new(tokio::io::stdin());
            let summary = session::run(args, options, config, stdin, out).await?;
            info!(renders = summary.renders, "session ended");
            return Ok(());
        }
    };

    let latency_ms = started.elapsed().as_millis() as u64;
    info!(command = name, latency_ms, "command complete");
    output::render(out, result.with_latency(latency_ms), cli.format, cli.pretty)
}

/// Applies a `--window` override on top of the loaded configuration.
pub fn resolve_config(
    config: &DashboardConfig,
    window: Option<usize>,
) -> Result<DashboardConfig, CliError> {
    match window {
        Some(window) => Ok(config.clone().with_forecast_window(window)?),
        None => Ok(config.clone()),
    }
}

pub fn random_source(seed: Option<u64>) -> FastrandSource {
    match seed {
        Some(seed) => FastrandSource::with_seed(seed),
        None => FastrandSource::from_entropy(),
    }
}

/// Page controller over the built-in mocks, optionally starting on `symbol`.
pub fn page_controller(
    config: &DashboardConfig,
    symbol: Option<&str>,
    seed: Option<u64>,
) -> Result<MockPageController, CliError> {
    let mut controller = MockPageController::from_config(config, random_source(seed))?;
    if let Some(symbol) = symbol {
        controller.select(symbol);
    }
    Ok(controller)
}
