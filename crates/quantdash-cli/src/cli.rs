//! CLI argument definitions for quantdash.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dashboard` | Render the live trading page for one symbol |
//! | `companies` | List the selectable companies |
//! | `forecast` | Emit the chart series for a symbol |
//! | `signals` | Sample trading insight placeholders |
//! | `session` | Interactive page: each stdin line selects a symbol |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json, ndjson) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--seed` | random | Seed for signal sampling (`QUANTDASH_SEED`) |
//!
//! # Examples
//!
//! ```bash
//! quantdash dashboard
//! quantdash dashboard --symbol TSLA --format json --pretty
//! quantdash forecast NVDA --window 10
//! printf 'MSFT\nGOOGL\n' | quantdash session --format ndjson
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use quantdash_core::forecast::validate_window;

/// Quantum Live Trading dashboard over mock market data.
#[derive(Debug, Parser)]
#[command(
    name = "quantdash",
    author,
    version,
    about = "Live trading dashboard over mock market data",
    long_about = "quantdash renders a single-page trading dashboard in the terminal:\n\
\n\
  • Company selector over a static catalog\n\
  • Price and change overview with gain/loss styling\n\
  • Mock forecast chart\n\
  • Randomly sampled trading signal placeholders\n\
\n\
All figures are mocked. Signals carry no predictive meaning."
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - table: Human-readable page (default)
    /// - json: Single JSON envelope
    /// - ndjson: One JSON object per line
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Seed for signal sampling; omit for a fresh draw every run.
    #[arg(long, global = true, env = "QUANTDASH_SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal page layout.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the dashboard page once.
    ///
    /// Symbols outside the catalog render the header and selector only.
    ///
    /// # Examples
    ///
    ///   quantdash dashboard
    ///   quantdash dashboard --symbol msft
    Dashboard(DashboardArgs),

    /// List companies available in the selector.
    Companies,

    /// Emit the mock forecast series for a symbol.
    ///
    /// # Examples
    ///
    ///   quantdash forecast AAPL
    ///   quantdash forecast TSLA --window 10 --format json
    Forecast(ForecastArgs),

    /// Sample trading insight placeholders.
    ///
    /// # Examples
    ///
    ///   quantdash signals --count 5 --seed 7
    Signals(SignalsArgs),

    /// Interactive page fed by stdin.
    ///
    /// Each line selects a symbol and re-renders the page. A blank line
    /// re-renders the current selection. `quit`, `exit` or EOF ends the
    /// session.
    Session(SessionArgs),
}

/// Arguments for the `dashboard` command.
#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Symbol to select (defaults to the configured symbol).
    #[arg(long, short)]
    pub symbol: Option<String>,

    /// Number of daily points in the chart (1 to 3650).
    #[arg(long, value_parser = parse_window)]
    pub window: Option<usize>,
}

/// Arguments for the `forecast` command.
#[derive(Debug, Args)]
pub struct ForecastArgs {
    /// Market symbol to chart.
    pub symbol: String,

    /// Number of daily points to generate (1 to 3650).
    #[arg(long, value_parser = parse_window)]
    pub window: Option<usize>,
}

/// Arguments for the `signals` command.
#[derive(Debug, Args)]
pub struct SignalsArgs {
    /// Number of insight triples to sample.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=10_000))]
    pub count: u32,
}

/// Arguments for the `session` command.
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Initial selection (defaults to the configured symbol).
    #[arg(long, short)]
    pub symbol: Option<String>,

    /// Number of daily points in the chart (1 to 3650).
    #[arg(long, value_parser = parse_window)]
    pub window: Option<usize>,
}

fn parse_window(raw: &str) -> Result<usize, String> {
    let window = raw.parse::<usize>().map_err(|error| error.to_string())?;
    validate_window(window).map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "quantdash",
            "dashboard",
            "--symbol",
            "tsla",
            "--format",
            "json",
            "--seed",
            "9",
        ])
        .expect("valid arguments");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.seed, Some(9));
        match cli.command {
            Command::Dashboard(args) => assert_eq!(args.symbol.as_deref(), Some("tsla")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_window_outside_range() {
        for window in ["0", "3651", "5000000"] {
            let result =
                Cli::try_parse_from(["quantdash", "forecast", "AAPL", "--window", window]);
            assert!(result.is_err(), "window {window} must be rejected");
        }

        let cli = Cli::try_parse_from(["quantdash", "dashboard", "--window", "3650"])
            .expect("largest window");
        match cli.command {
            Command::Dashboard(args) => assert_eq!(args.window, Some(3650)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_signal_count() {
        let result = Cli::try_parse_from(["quantdash", "signals", "--count", "0"]);
        assert!(result.is_err());
    }
}
