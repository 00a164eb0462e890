use thiserror::Error;

use crate::client::ApiError;

/// Validation errors exposed by `stockdash-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker must start with an ASCII letter: '{ch}'")]
    TickerInvalidStart { ch: char },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },

    #[error("invalid language '{value}', expected one of en, uk")]
    InvalidLanguage { value: String },
    #[error(
        "invalid block '{value}', expected one of market_summary, valuation, profitability, \
         dividends, forecasts, balance_sheet, financial_health"
    )]
    InvalidBlock { value: String },
    #[error("invalid report period '{value}', expected one of annual, quarterly")]
    InvalidPeriod { value: String },

    #[error("timeout_ms must be greater than zero")]
    InvalidTimeout,
    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
