//! Display-only signal sampling.
//!
//! Signals are placeholders: every render draws a fresh action, confidence
//! and risk label. Randomness comes from an injected [`RandomSource`], so
//! callers can swap the process RNG for a seeded or scripted one.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Lower bound of the sampled confidence, in percent.
pub const CONFIDENCE_MIN: f64 = 85.0;
/// Width of the sampled confidence range, in percent.
pub const CONFIDENCE_SPAN: f64 = 10.0;

// 85 + u * 10 rounds up to 95.0 for u within a few ulps of 1.0.
const CONFIDENCE_CEILING: f64 = CONFIDENCE_MIN + CONFIDENCE_SPAN - 1e-9;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// [`RandomSource`] backed by `fastrand`.
#[derive(Debug, Clone)]
pub struct FastrandSource {
    rng: fastrand::Rng,
}

impl FastrandSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastrandSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for FastrandSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.f64()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Values are clamped into `[0, 1)`. An empty script always yields `0.0`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|value| value.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Sampled trade action label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl TradeAction {
    pub const ALL: [Self; 3] = [Self::Buy, Self::Sell, Self::Hold];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
            Self::Hold => "Hold",
        }
    }
}

impl Display for TradeAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sampled risk label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sampled confidence percentage in `[85, 95)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whole-number percentage shown on the insights panel.
    pub fn rounded(self) -> u8 {
        // Range is [85, 95), so the rounded value always fits.
        self.0.round() as u8
    }
}

impl Display for Confidence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.rounded())
    }
}

/// One render's worth of sampled signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradingInsights {
    pub action: TradeAction,
    pub confidence: Confidence,
    pub risk: RiskLevel,
}

/// Draws signal labels from an injected random source.
#[derive(Debug, Clone)]
pub struct SignalSampler<R> {
    source: R,
}

impl<R: RandomSource> SignalSampler<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn sample_action(&mut self) -> TradeAction {
        TradeAction::ALL[self.pick_index(TradeAction::ALL.len())]
    }

    pub fn sample_confidence(&mut self) -> Confidence {
        let value = CONFIDENCE_MIN + self.source.next_unit() * CONFIDENCE_SPAN;
        Confidence(value.min(CONFIDENCE_CEILING))
    }

    pub fn sample_risk(&mut self) -> RiskLevel {
        RiskLevel::ALL[self.pick_index(RiskLevel::ALL.len())]
    }

    /// Samples action, confidence and risk in panel order.
    pub fn sample_insights(&mut self) -> TradingInsights {
        let action = self.sample_action();
        let confidence = self.sample_confidence();
        let risk = self.sample_risk();
        TradingInsights {
            action,
            confidence,
            risk,
        }
    }

    fn pick_index(&mut self, len: usize) -> usize {
        let index = (self.source.next_unit() * len as f64).floor() as usize;
        index.min(len - 1)
    }
}

impl Default for SignalSampler<FastrandSource> {
    fn default() -> Self {
        Self::new(FastrandSource::from_entropy())
    }
}
