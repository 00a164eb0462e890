use std::fmt::{Display, Formatter};

use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Block, Language};

/// Sentinel the upstream API uses in place of a missing number.
pub const NONE_SENTINEL: &str = "None";

/// Raw metric value as received from the API.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MetricValue {
    Number(f64),
    Text(String),
    #[default]
    Null,
}

impl MetricValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// `true` for `null` and the `"None"` sentinel.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text == NONE_SENTINEL,
            Self::Number(_) => false,
        }
    }

    /// Numeric reading of the value, if there is one.
    ///
    /// Text is read leniently: the longest leading decimal literal wins, so
    /// `"12.5%"` yields `12.5`. Non-finite numbers count as absent.
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            Self::Null => return None,
            Self::Number(value) => *value,
            Self::Text(text) if text == NONE_SENTINEL => return None,
            Self::Text(text) => parse_float_prefix(text)?,
        };
        number.is_finite().then_some(number)
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<MetricValue>> From<Option<T>> for MetricValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl Display for MetricValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Null => f.write_str("null"),
        }
    }
}

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for MetricValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self::Null),
            Value::Number(number) => number
                .as_f64()
                .map(Self::Number)
                .ok_or_else(|| D::Error::custom("metric number is not representable as f64")),
            Value::String(text) => Ok(Self::Text(text)),
            Value::Bool(flag) => Ok(Self::Text(flag.to_string())),
            other => Ok(Self::Text(other.to_string())),
        }
    }
}

/// Single labeled data point of a ticker response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub key: String,
    #[serde(default)]
    pub value: MetricValue,
    #[serde(default)]
    pub block: String,
    #[serde(default)]
    pub label_en: String,
    #[serde(default)]
    pub label_uk: String,
    #[serde(default)]
    pub is_primary: bool,
}

impl Metric {
    pub fn new(key: impl Into<String>, value: impl Into<MetricValue>, block: Block) -> Self {
        let key = key.into();
        Self {
            label_en: key.clone(),
            label_uk: key.clone(),
            key,
            value: value.into(),
            block: block.as_str().to_owned(),
            is_primary: false,
        }
    }

    pub fn with_labels(mut self, en: impl Into<String>, uk: impl Into<String>) -> Self {
        self.label_en = en.into();
        self.label_uk = uk.into();
        self
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    /// Label for `language`, falling back to the key when the label is blank.
    pub fn label(&self, language: Language) -> &str {
        let label = match language {
            Language::En => &self.label_en,
            Language::Uk => &self.label_uk,
        };
        if label.trim().is_empty() {
            &self.key
        } else {
            label
        }
    }

    /// Parsed block name; `None` for blocks outside the known set.
    pub fn block_kind(&self) -> Option<Block> {
        Block::parse(&self.block).ok()
    }
}

/// Parse the longest leading decimal literal of `input`, the way a lenient
/// float reader would (`"  -3.5e2abc"` -> `-350.0`).
pub(crate) fn parse_float_prefix(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let rest = &text[end..];
    if rest.starts_with("Infinity") {
        let infinity = f64::INFINITY;
        return Some(if text.starts_with('-') { -infinity } else { infinity });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}
