//! Metric value formatting.
//!
//! A metric's key selects exactly one [`MetricCategory`]; the category decides
//! how the raw value is rendered. Formatting never fails: missing or
//! unparseable numbers render as [`NOT_AVAILABLE`], and plain text passes
//! through untouched.
//!
//! | Category | Example input | Output |
//! |----------|---------------|--------|
//! | Price | `123.4` | `$123.40` |
//! | PriceDifference | `-1.2` | `$1.20` |
//! | Percent | `-1.5` / `"3.2%"` | `-1.50%` / `3.2%` |
//! | LargeNumber | `2.5e12` | `$2.50T` |
//! | Ratio | `"28.1"` | `28.10` |
//! | Plain | `1234567` / `"Technology"` | `1,234,567` / `Technology` |

use serde::Serialize;

use crate::{Language, Metric, MetricValue};

/// Placeholder rendered for absent or unparseable values.
pub const NOT_AVAILABLE: &str = "N/A";

const PRICE_KEYS: &[&str] = &[
    "Price",
    "ClosePrice",
    "52WeekHigh",
    "52WeekLow",
    "50DayMovingAverage",
    "200DayMovingAverage",
    "EPS",
    "BookValue",
    "DividendPerShare",
    "AnalystTargetPrice",
];

const PRICE_DIFFERENCE_KEYS: &[&str] = &["PriceDifference"];

const PERCENT_KEYS: &[&str] = &[
    "ChangePercent",
    "DividendYield",
    "PayoutRatio",
    "ProfitMargin",
    "OperatingMarginTTM",
    "ReturnOnAssetsTTM",
    "ReturnOnEquityTTM",
    "RevenueGrowth",
    "EarningsGrowth",
    "QuarterlyRevenueGrowthYOY",
    "QuarterlyEarningsGrowthYOY",
];

const LARGE_NUMBER_KEYS: &[&str] = &[
    "MarketCapitalization",
    "EBITDA",
    "RevenueTTM",
    "GrossProfitTTM",
    "TotalRevenue",
    "TotalDebt",
    "TotalCash",
    "TotalAssets",
    "TotalLiabilities",
    "SharesOutstanding",
];

const RATIO_KEYS: &[&str] = &[
    "PERatio",
    "ForwardPE",
    "TrailingPE",
    "PEGRatio",
    "PriceToSalesRatioTTM",
    "PriceToBookRatio",
    "EVToRevenue",
    "EVToEBITDA",
    "DebtToEquity",
    "CurrentRatio",
    "QuickRatio",
    "Beta",
];

/// Keys whose sign is meaningful to the reader (day-over-day change).
const CHANGE_KEYS: &[&str] = &["PriceDifference", "ChangePercent"];

const MAGNITUDES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Display rule selected by a metric key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    Price,
    PriceDifference,
    Percent,
    LargeNumber,
    Ratio,
    Plain,
}

impl MetricCategory {
    pub const ALL: [Self; 6] = [
        Self::Price,
        Self::PriceDifference,
        Self::Percent,
        Self::LargeNumber,
        Self::Ratio,
        Self::Plain,
    ];

    /// Keys routed to this category. `Plain` is the fallback and lists none.
    pub const fn keys(self) -> &'static [&'static str] {
        match self {
            Self::Price => PRICE_KEYS,
            Self::PriceDifference => PRICE_DIFFERENCE_KEYS,
            Self::Percent => PERCENT_KEYS,
            Self::LargeNumber => LARGE_NUMBER_KEYS,
            Self::Ratio => RATIO_KEYS,
            Self::Plain => &[],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::PriceDifference => "price_difference",
            Self::Percent => "percent",
            Self::LargeNumber => "large_number",
            Self::Ratio => "ratio",
            Self::Plain => "plain",
        }
    }
}

/// Sign coloring hint for change-like metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueTone {
    Positive,
    Negative,
    Neutral,
}

/// Presentation-ready metric row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedMetric {
    pub key: String,
    pub label: String,
    pub value: String,
    pub tone: ValueTone,
    pub is_primary: bool,
}

pub fn classify(key: &str) -> MetricCategory {
    MetricCategory::ALL
        .into_iter()
        .find(|category| category.keys().contains(&key))
        .unwrap_or(MetricCategory::Plain)
}

/// Render `value` according to the rule selected by `key`.
pub fn format_value(value: &MetricValue, key: &str) -> String {
    if value.is_missing() {
        return String::from(NOT_AVAILABLE);
    }

    match classify(key) {
        MetricCategory::Price => value.as_number().map_or_else(not_available, format_price),
        MetricCategory::PriceDifference => match value.as_number() {
            Some(number) => format_price_difference(number),
            None => value.to_string(),
        },
        MetricCategory::Percent => match value {
            MetricValue::Text(text) if text.contains('%') => text.clone(),
            _ => value.as_number().map_or_else(not_available, format_percent),
        },
        MetricCategory::LargeNumber => value
            .as_number()
            .map_or_else(not_available, format_large_number),
        MetricCategory::Ratio => value.as_number().map_or_else(not_available, format_ratio),
        MetricCategory::Plain => match value {
            MetricValue::Number(number) if number.is_finite() => group_thousands(*number),
            other => other.to_string(),
        },
    }
}

pub fn format_price(value: f64) -> String {
    format!("${}", to_fixed(value, 2))
}

/// `+$1.20` for gains, `$1.20` for losses; the magnitude is always absolute.
pub fn format_price_difference(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}${}", to_fixed(value.abs(), 2))
}

pub fn format_percent(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{}%", to_fixed(value, 2))
}

/// Currency amount with a T/B/M/K suffix picked from the absolute value.
pub fn format_large_number(value: f64) -> String {
    let magnitude = value.abs();
    for (divisor, suffix) in MAGNITUDES {
        if magnitude >= divisor {
            return format!("${}{suffix}", to_fixed(value / divisor, 2));
        }
    }
    format_price(value)
}

pub fn format_ratio(value: f64) -> String {
    to_fixed(value, 2)
}

/// Short axis label for chart scales (`1.5B`, `-250K`, `42`).
pub fn format_axis_value(value: f64) -> String {
    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    let (scaled, suffix, digits) = if magnitude >= 1e12 {
        (magnitude / 1e12, "T", 1)
    } else if magnitude >= 1e9 {
        (magnitude / 1e9, "B", 1)
    } else if magnitude >= 1e6 {
        (magnitude / 1e6, "M", 1)
    } else if magnitude >= 1e3 {
        (magnitude / 1e3, "K", 0)
    } else {
        (magnitude, "", 0)
    };

    format!("{sign}{}{suffix}", to_fixed(scaled, digits))
}

/// Sign coloring for change-like keys; everything else is neutral.
pub fn value_tone(key: &str, value: &MetricValue) -> ValueTone {
    if !CHANGE_KEYS.contains(&key) {
        return ValueTone::Neutral;
    }
    match value.as_number() {
        Some(number) if number >= 0.0 => ValueTone::Positive,
        Some(_) => ValueTone::Negative,
        None => ValueTone::Neutral,
    }
}

pub fn format_metric(metric: &Metric, language: Language) -> FormattedMetric {
    FormattedMetric {
        key: metric.key.clone(),
        label: metric.label(language).to_owned(),
        value: format_value(&metric.value, &metric.key),
        tone: value_tone(&metric.key, &metric.value),
        is_primary: metric.is_primary,
    }
}

/// en-US digit grouping with at most three fraction digits.
pub fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 1);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = integer.bytes().all(|b| b == b'0') && fraction.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

fn to_fixed(value: f64, digits: usize) -> String {
    // Collapse -0.0 so zero never renders with a sign.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.digits$}")
}

fn not_available() -> String {
    String::from(NOT_AVAILABLE)
}
