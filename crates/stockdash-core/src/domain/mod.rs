//! # Domain Models
//!
//! Typed view of the ticker lookup API payload.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Ticker`] | Validated, uppercase ticker |
//! | [`Metric`] | Labeled data point with a raw [`MetricValue`] |
//! | [`Block`] | Closed set of dashboard sections, rendered in [`BLOCK_ORDER`] |
//! | [`Language`] | Label locale (`en`, `uk`) |
//! | [`StockData`] | Metrics pre-grouped by block |
//! | [`StockApiResponse`] | Envelope of a successful lookup |
//!
//! Metric values arrive as numbers, numeric strings, `null`, or the literal
//! `"None"`. Nothing is coerced at parse time; interpretation happens in
//! [`crate::format`].

mod block;
mod language;
mod metric;
mod response;
mod ticker;

pub use block::{Block, BlockTitle, BLOCK_ORDER};
pub use language::Language;
pub(crate) use metric::parse_float_prefix;
pub use metric::{Metric, MetricValue, NONE_SENTINEL};
pub use response::{ApiErrorBody, StockApiResponse, StockData};
pub use ticker::Ticker;
