//! # Stockdash Core
//!
//! Formatting and grouping of stock metrics for the stockdash ticker lookup.
//!
//! ## Overview
//!
//! A lookup returns a flat set of labeled metrics, pre-grouped by block. This
//! crate turns that payload into something a presentation layer can draw
//! without making decisions of its own:
//!
//! - **Formatting**: each metric key selects one display rule (price, price
//!   difference, percent, large currency amount, ratio, plain) and the raw
//!   value is rendered through it. Missing data renders as `N/A`.
//! - **Grouping**: metrics split into primary and secondary, and blocks are
//!   visited in the fixed [`BLOCK_ORDER`], skipping empty ones.
//! - **Lookup**: an HTTP client for the ticker API and a session that keeps
//!   exactly one visible result.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Ticker API client and the [`StockSource`] seam |
//! | [`config`] | Environment-driven API settings |
//! | [`domain`] | Ticker, metric, block, and response types |
//! | [`error`] | Core error types |
//! | [`financials`] | Revenue / net income / free cash flow chart series |
//! | [`format`] | Key classification and value formatting |
//! | [`grouping`] | Primary/secondary partition and block sections |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`session`] | One-shot lookup state |
//!
//! ## Quick Start
//!
//! ```rust
//! use stockdash_core::{format_value, partition_metrics, Block, Metric, MetricValue};
//!
//! assert_eq!(format_value(&MetricValue::Number(123.4), "Price"), "$123.40");
//! assert_eq!(format_value(&MetricValue::text("None"), "PERatio"), "N/A");
//!
//! let metrics = vec![
//!     Metric::new("Price", 189.5, Block::MarketSummary).primary(),
//!     Metric::new("Beta", "1.24", Block::MarketSummary),
//! ];
//! let partition = partition_metrics(&metrics);
//! assert_eq!(partition.primary.len(), 1);
//! assert_eq!(partition.secondary.len(), 1);
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod financials;
pub mod format;
pub mod grouping;
pub mod http_client;
pub mod session;

pub use client::{ApiError, ApiErrorKind, StockApiClient, StockSource};
pub use config::ApiConfig;
pub use domain::{
    ApiErrorBody, Block, BlockTitle, Language, Metric, MetricValue, StockApiResponse, StockData,
    Ticker, BLOCK_ORDER,
};
pub use error::{CoreError, ValidationError};
pub use financials::{ChartPoint, ChartSeries, FinancialStatements, ReportPeriod};
pub use format::{
    classify, format_metric, format_value, value_tone, FormattedMetric, MetricCategory,
    ValueTone, NOT_AVAILABLE,
};
pub use grouping::{
    block_sections, metric_by_key, metric_value, partition_metrics, render_sections,
    BlockSection, Disclosure, MetricPartition, RenderedSection,
};
pub use http_client::{
    CannedHttpClient, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
    ReqwestHttpClient,
};
pub use session::{LookupError, LookupSession, LookupTicket};
