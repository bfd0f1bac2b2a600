pub mod chart;
pub mod metrics;
pub mod page;
pub mod stream_writer;

use std::io::Write;

use quantdash_core::Envelope;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

pub use self::chart::TextChartRenderer;
pub use self::metrics::TextMetricsRenderer;

/// Writes one command result in the requested format.
pub fn render<W: Write>(
    out: &mut W,
    result: CommandResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => writeln!(out, "{}", result.text)?,
        OutputFormat::Json => write_envelope(out, &result.into_envelope()?, pretty)?,
        OutputFormat::Ndjson => write_envelope(out, &result.into_envelope()?, false)?,
    }

    out.flush()?;
    Ok(())
}

pub fn write_envelope<W: Write>(
    out: &mut W,
    envelope: &Envelope<Value>,
    pretty: bool,
) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(envelope)?
    } else {
        serde_json::to_string(envelope)?
    };
    writeln!(out, "{payload}")?;
    Ok(())
}
