use quantdash_core::{SignalSampler, TradingInsights};
use serde::Serialize;

use crate::cli::SignalsArgs;
use crate::error::CliError;

use super::{random_source, CommandResult};

#[derive(Debug, Serialize)]
struct SignalsResponseData {
    signals: Vec<TradingInsights>,
}

pub fn run(args: &SignalsArgs, seed: Option<u64>) -> Result<CommandResult, CliError> {
    let mut sampler = SignalSampler::new(random_source(seed));
    let signals = (0..args.count)
        .map(|_| sampler.sample_insights())
        .collect::<Vec<_>>();

    let mut lines = vec![format!("{:<8}{:<12}{}", "ACTION", "CONFIDENCE", "RISK")];
    lines.extend(signals.iter().map(|insights| {
        format!(
            "{:<8}{:<12}{}",
            insights.action.as_str(),
            insights.confidence.to_string(),
            insights.risk
        )
    }));

    let data = serde_json::to_value(SignalsResponseData { signals })?;
    Ok(CommandResult::new(data, lines.join("\n"))
        .with_warning("signals are randomly sampled placeholders"))
}
