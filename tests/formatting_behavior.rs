//! Behavior-driven tests for metric formatting
//!
//! These tests verify HOW raw API values are turned into display strings:
//! which rule a key selects, how signs and magnitudes render, and how
//! missing data degrades to `N/A`.

use stockdash_core::format::format_axis_value;
use stockdash_core::{
    classify, format_metric, format_value, value_tone, Block, Language, Metric, MetricCategory,
    MetricValue, ValueTone, NOT_AVAILABLE,
};

fn num(value: f64) -> MetricValue {
    MetricValue::Number(value)
}

fn text(value: &str) -> MetricValue {
    MetricValue::text(value)
}

// =============================================================================
// Formatting: Missing Data
// =============================================================================

#[test]
fn when_value_is_missing_every_category_renders_not_available() {
    // Given: One key from each display category
    let keys = [
        "Price",
        "PriceDifference",
        "ChangePercent",
        "MarketCapitalization",
        "PERatio",
        "Sector",
    ];

    for key in keys {
        // When: The value is null or the "None" sentinel
        let from_null = format_value(&MetricValue::Null, key);
        let from_sentinel = format_value(&text("None"), key);

        // Then: Both render as N/A regardless of the rule
        assert_eq!(from_null, NOT_AVAILABLE, "null for {key}");
        assert_eq!(from_sentinel, NOT_AVAILABLE, "sentinel for {key}");
    }
}

#[test]
fn when_numeric_rule_gets_unparseable_text_it_renders_not_available() {
    // Given: Text that carries no leading number
    let garbage = text("n/a yet");

    // When / Then: Every numeric rule degrades to N/A
    assert_eq!(format_value(&garbage, "Price"), "N/A");
    assert_eq!(format_value(&garbage, "ChangePercent"), "N/A");
    assert_eq!(format_value(&garbage, "EBITDA"), "N/A");
    assert_eq!(format_value(&garbage, "Beta"), "N/A");
}

// =============================================================================
// Formatting: Prices and Changes
// =============================================================================

#[test]
fn when_key_is_price_like_value_renders_as_dollars_with_two_decimals() {
    assert_eq!(format_value(&num(123.4), "Price"), "$123.40");
    assert_eq!(format_value(&text("199.62"), "52WeekHigh"), "$199.62");
    assert_eq!(format_value(&num(-3.0), "EPS"), "$-3.00");
    assert_eq!(format_value(&text("215"), "AnalystTargetPrice"), "$215.00");
}

#[test]
fn when_price_difference_is_positive_it_gets_a_plus_sign() {
    // Given: A gain and a flat day
    // Then: Both carry an explicit plus sign
    assert_eq!(format_value(&num(2.0), "PriceDifference"), "+$2.00");
    assert_eq!(format_value(&num(0.0), "PriceDifference"), "+$0.00");
}

#[test]
fn when_price_difference_is_negative_it_shows_the_magnitude_only() {
    // Given: A loss of five dollars
    let loss = num(-5.0);

    // When: It is formatted
    let rendered = format_value(&loss, "PriceDifference");

    // Then: The magnitude is shown without any sign; color carries direction
    assert_eq!(rendered, "$5.00");
    assert_eq!(value_tone("PriceDifference", &loss), ValueTone::Negative);
}

#[test]
fn when_price_difference_is_not_numeric_the_text_passes_through() {
    assert_eq!(format_value(&text("halted"), "PriceDifference"), "halted");
}

// =============================================================================
// Formatting: Percentages
// =============================================================================

#[test]
fn when_percent_is_numeric_it_gets_a_sign_and_suffix() {
    assert_eq!(format_value(&num(1.234), "ChangePercent"), "+1.23%");
    assert_eq!(format_value(&num(-0.5), "ChangePercent"), "-0.50%");
    assert_eq!(format_value(&text("0.66"), "ProfitMargin"), "+0.66%");
}

#[test]
fn when_percent_text_already_has_a_percent_sign_it_is_kept_verbatim() {
    // Given: The server pre-formatted the percentage
    let preformatted = text("-0.66%");

    // Then: No second sign or suffix is added
    assert_eq!(format_value(&preformatted, "ChangePercent"), "-0.66%");
}

// =============================================================================
// Formatting: Large Amounts and Ratios
// =============================================================================

#[test]
fn when_amount_is_large_the_suffix_follows_its_magnitude() {
    assert_eq!(format_value(&text("2950000000000"), "MarketCapitalization"), "$2.95T");
    assert_eq!(format_value(&num(125_820_000_000.0), "EBITDA"), "$125.82B");
    assert_eq!(format_value(&num(4_500_000.0), "TotalCash"), "$4.50M");
    assert_eq!(format_value(&num(1_234.0), "TotalDebt"), "$1.23K");
    assert_eq!(format_value(&num(999.0), "TotalDebt"), "$999.00");
}

#[test]
fn when_amount_is_negative_the_suffix_uses_its_absolute_value() {
    // Given: A loss of one and a half billion
    // Then: The sign stays on the scaled quotient
    assert_eq!(format_value(&num(-1.5e9), "GrossProfitTTM"), "$-1.50B");
}

#[test]
fn when_key_is_a_ratio_it_renders_with_two_decimals_and_no_unit() {
    assert_eq!(format_value(&text("29.4123"), "PERatio"), "29.41");
    assert_eq!(format_value(&num(1.0), "Beta"), "1.00");
}

// =============================================================================
// Formatting: Unknown Keys
// =============================================================================

#[test]
fn when_key_is_unknown_numbers_are_grouped_and_text_is_verbatim() {
    assert_eq!(classify("Volume"), MetricCategory::Plain);
    assert_eq!(format_value(&num(51_234_567.0), "Volume"), "51,234,567");
    assert_eq!(format_value(&num(1_234.5678), "Volume"), "1,234.568");
    assert_eq!(format_value(&text("Technology"), "Sector"), "Technology");
}

#[test]
fn every_known_key_selects_exactly_one_rule() {
    for category in MetricCategory::ALL {
        for key in category.keys() {
            // Then: The key classifies to the category that lists it
            assert_eq!(classify(key), category, "{key} is listed under {category:?}");
        }
    }
}

// =============================================================================
// Formatting: Full Metric Rows and Chart Axes
// =============================================================================

#[test]
fn when_metric_is_formatted_label_follows_language_with_key_fallback() {
    // Given: A metric with both labels and one with none
    let labelled = Metric::new("ChangePercent", 1.5, Block::MarketSummary)
        .with_labels("Change %", "Зміна %")
        .primary();
    let bare = Metric::new("Beta", "1.24", Block::FinancialHealth);

    // When: They are formatted for each language
    let en = format_metric(&labelled, Language::En);
    let uk = format_metric(&labelled, Language::Uk);
    let fallback = format_metric(&bare, Language::Uk);

    // Then: Labels switch, values and tone do not
    assert_eq!(en.label, "Change %");
    assert_eq!(uk.label, "Зміна %");
    assert_eq!(en.value, uk.value);
    assert_eq!(en.value, "+1.50%");
    assert_eq!(en.tone, ValueTone::Positive);
    assert!(en.is_primary);

    assert_eq!(fallback.label, "Beta");
    assert_eq!(fallback.tone, ValueTone::Neutral);
}

#[test]
fn when_axis_value_is_scaled_it_uses_short_suffixes() {
    assert_eq!(format_axis_value(383_285_000_000.0), "383.3B");
    assert_eq!(format_axis_value(-2_500_000.0), "-2.5M");
    assert_eq!(format_axis_value(250_000.0), "250K");
    assert_eq!(format_axis_value(42.0), "42");
}
