//! Interactive page session.
//!
//! Every input line is a selection event: a symbol selects it, a blank line
//! re-renders the current selection, `quit`/`exit` or end of input stops.
//! Each event triggers exactly one render.

use std::io::Write;

use quantdash_core::{DashboardConfig, PageView};
use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::cli::{OutputFormat, SessionArgs};
use crate::error::CliError;
use crate::metadata::{Metadata, SCHEMA_VERSION};
use crate::output::page::render_page;
use crate::output::stream_writer::NdjsonStreamWriter;
use crate::output::{write_envelope, TextChartRenderer, TextMetricsRenderer};

use super::{page_controller, resolve_config, CommandResult};

#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub format: OutputFormat,
    pub pretty: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub renders: u64,
    pub last_selected: String,
}

enum SessionSink<W: Write> {
    Stream(NdjsonStreamWriter<W>),
    Plain {
        out: W,
        format: OutputFormat,
        pretty: bool,
    },
}

impl<W: Write> SessionSink<W> {
    fn new(out: W, options: SessionOptions) -> Self {
        match options.format {
            OutputFormat::Ndjson => Self::Stream(NdjsonStreamWriter::new(out)),
            format => Self::Plain {
                out,
                format,
                pretty: options.pretty,
            },
        }
    }

    fn start(&mut self) -> Result<(), CliError> {
        if let Self::Stream(writer) = self {
            let metadata = Metadata::new(0);
            writer.emit_start(Some(json!({
                "request_id": metadata.request_id,
                "trace_id": metadata.trace_id,
                "schema_version": SCHEMA_VERSION,
            })))?;
        }
        Ok(())
    }

    fn page(&mut self, view: &PageView) -> Result<(), CliError> {
        match self {
            Self::Stream(writer) => writer.emit_chunk(Some(serde_json::to_value(view)?)),
            Self::Plain {
                out,
                format: OutputFormat::Table,
                ..
            } => {
                let text = render_page(view, &TextChartRenderer, &TextMetricsRenderer);
                writeln!(out, "{text}\n")?;
                out.flush()?;
                Ok(())
            }
            Self::Plain { out, pretty, .. } => {
                let result = CommandResult::new(serde_json::to_value(view)?, String::new());
                write_envelope(out, &result.into_envelope()?, *pretty)?;
                out.flush()?;
                Ok(())
            }
        }
    }

    fn end(&mut self, summary: &SessionSummary) -> Result<(), CliError> {
        if let Self::Stream(writer) = self {
            writer.emit_end(Some(json!({
                "status": "ok",
                "renders": summary.renders,
                "selected": summary.last_selected,
            })))?;
        }
        Ok(())
    }
}

/// Drives the page from `input` until `quit`, `exit` or end of input.
pub async fn run<R, W>(
    args: &SessionArgs,
    options: SessionOptions,
    config: &DashboardConfig,
    input: R,
    output: W,
) -> Result<SessionSummary, CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let config = resolve_config(config, args.window)?;
    let mut controller = page_controller(&config, args.symbol.as_deref(), options.seed)?;
    let mut sink = SessionSink::new(output, options);
    let mut renders = 0_u64;

    sink.start()?;
    sink.page(&controller.render())?;
    renders += 1;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if !line.is_empty() {
            controller.select(line);
        }

        sink.page(&controller.render())?;
        renders += 1;
        debug!(renders, selected = controller.selected(), "session render");
    }

    let summary = SessionSummary {
        renders,
        last_selected: controller.selected().to_owned(),
    };
    sink.end(&summary)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn options(format: OutputFormat) -> SessionOptions {
        SessionOptions {
            format,
            pretty: false,
            seed: Some(5),
        }
    }

    fn args() -> SessionArgs {
        SessionArgs {
            symbol: None,
            window: Some(3),
        }
    }

    #[tokio::test]
    async fn renders_once_per_selection_event() {
        let input: &[u8] = b"msft\n\nZZZZ\nquit\nTSLA\n";
        let mut sink = Vec::<u8>::new();

        let summary = run(
            &args(),
            options(OutputFormat::Ndjson),
            &DashboardConfig::default(),
            input,
            &mut sink,
        )
        .await
        .expect("session");

        assert_eq!(summary.renders, 4);
        assert_eq!(summary.last_selected, "ZZZZ");

        let events = std::str::from_utf8(&sink)
            .expect("utf8")
            .lines()
            .map(|line| serde_json::from_str::<Value>(line).expect("json"))
            .collect::<Vec<_>>();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0].get("event"), Some(&"start".into()));
        assert_eq!(
            events[1].pointer("/data/selector/selected"),
            Some(&"AAPL".into())
        );
        assert_eq!(
            events[2].pointer("/data/selector/selected"),
            Some(&"MSFT".into())
        );
        assert_eq!(
            events[3].pointer("/data/selector/selected"),
            Some(&"MSFT".into())
        );
        assert!(events[4].pointer("/data/panels").is_none());
        assert_eq!(events[5].get("event"), Some(&"end".into()));
        assert_eq!(events[5].pointer("/data/renders"), Some(&4.into()));
    }

    #[tokio::test]
    async fn eof_ends_table_session() {
        let input: &[u8] = b"nvda";
        let mut sink = Vec::<u8>::new();

        let summary = run(
            &args(),
            options(OutputFormat::Table),
            &DashboardConfig::default(),
            input,
            &mut sink,
        )
        .await
        .expect("session");

        let text = String::from_utf8(sink).expect("utf8");
        assert_eq!(summary.renders, 2);
        assert_eq!(text.matches("Live Trading Dashboard").count(), 2);
        assert!(text.contains("NVIDIA Corporation"));
    }

    #[tokio::test]
    async fn json_session_writes_one_envelope_per_render() {
        let input: &[u8] = b"EXIT\n";
        let mut sink = Vec::<u8>::new();

        run(
            &args(),
            options(OutputFormat::Json),
            &DashboardConfig::default(),
            input,
            &mut sink,
        )
        .await
        .expect("session");

        let text = String::from_utf8(sink).expect("utf8");
        assert_eq!(text.lines().count(), 1);
        let envelope = serde_json::from_str::<Value>(&text).expect("json");
        assert!(envelope.pointer("/meta/request_id").is_some());
        assert!(envelope.pointer("/data/panels/insights").is_some());
    }
}
