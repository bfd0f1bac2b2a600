//! Behavior tests for the price/change calculator.
//!
//! Covers the arithmetic contract, the zero-previous-close guard and the
//! display strings the overview card shows.

use quantdash_core::{format_price, PriceChange, Trend};

// =============================================================================
// Arithmetic
// =============================================================================

#[test]
fn when_previous_close_is_nonzero_percent_follows_the_formula() {
    // Given: A spread of price pairs, including gains, losses and flat moves
    let mut rng = fastrand::Rng::with_seed(2024);
    let pairs = (0..1_000)
        .map(|_| (rng.f64() * 1_000.0 + 0.01, rng.f64() * 1_000.0 + 0.01))
        .chain([(100.0, 100.0), (0.5, 400.0), (400.0, 0.5)]);

    for (current, previous) in pairs {
        // When: The change is computed
        let change = PriceChange::compute(current, previous);

        // Then: Absolute and percent changes match their definitions
        let expected_percent = (current - previous) / previous * 100.0;
        assert!((change.absolute - (current - previous)).abs() < 1e-9);
        assert!(
            (change.percent - expected_percent).abs() < 1e-9,
            "percent mismatch for {current}/{previous}"
        );

        // And: The sign of the absolute change tracks the move
        assert_eq!(change.absolute < 0.0, current < previous);
        assert_eq!(change.percent < 0.0, current < previous);
    }
}

#[test]
fn when_previous_close_is_zero_percent_is_zero() {
    // Given: A degenerate previous close
    // When: The change is computed
    let change = PriceChange::compute(12.0, 0.0);

    // Then: The absolute change is kept and the percent is defined as zero
    assert_eq!(change.absolute, 12.0);
    assert_eq!(change.percent, 0.0);
    assert!(change.percent.is_finite());
}

// =============================================================================
// Trend and display
// =============================================================================

#[test]
fn when_apple_gains_overview_strings_show_positive_change() {
    // Given: AAPL at 150 with a previous close of 145
    let change = PriceChange::compute(150.0, 145.0);

    // Then: Change is 5 and roughly 3.45 percent, styled as a gain
    assert!((change.absolute - 5.0).abs() < 1e-9);
    assert!((change.percent - 3.448_275_862).abs() < 1e-6);
    assert_eq!(change.trend(), Trend::Gain);
    assert_eq!(change.trend().style(), "positive");
    assert_eq!(change.to_string(), "+$5.00 (3.45%)");
    assert_eq!(format_price(150.0), "$150.00");
}

#[test]
fn when_price_falls_change_renders_with_negative_style() {
    // Given: A drop from 100 to 90
    let change = PriceChange::compute(90.0, 100.0);

    // Then: Change is -10 / -10.00% with the loss style
    assert!((change.absolute + 10.0).abs() < 1e-9);
    assert!((change.percent + 10.0).abs() < 1e-9);
    assert_eq!(change.trend(), Trend::Loss);
    assert_eq!(change.trend().style(), "negative");
    assert_eq!(change.to_string(), "-$10.00 (-10.00%)");
}

#[test]
fn when_price_is_unchanged_trend_counts_as_gain() {
    // Given: No move at all
    let change = PriceChange::compute(42.0, 42.0);

    // Then: Non-negative change selects the positive state
    assert_eq!(change.trend(), Trend::Gain);
    assert_eq!(change.to_string(), "+$0.00 (0.00%)");
}
