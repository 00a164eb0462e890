use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::client::ApiError;
use crate::error::CoreError;
use crate::{Block, Metric};

/// Ticker payload pre-grouped by block on the server side.
///
/// Every block is optional so a response that omits a section still parses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_summary: Option<Vec<Metric>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valuation: Option<Vec<Metric>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profitability: Option<Vec<Metric>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividends: Option<Vec<Metric>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecasts: Option<Vec<Metric>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_sheet: Option<Vec<Metric>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_health: Option<Vec<Metric>>,
}

impl StockData {
    /// Metrics of `block`; empty when the block is absent.
    pub fn block(&self, block: Block) -> &[Metric] {
        let metrics = match block {
            Block::MarketSummary => &self.market_summary,
            Block::Valuation => &self.valuation,
            Block::Profitability => &self.profitability,
            Block::Dividends => &self.dividends,
            Block::Forecasts => &self.forecasts,
            Block::BalanceSheet => &self.balance_sheet,
            Block::FinancialHealth => &self.financial_health,
        };
        metrics.as_deref().unwrap_or_default()
    }

    pub fn block_mut(&mut self, block: Block) -> &mut Option<Vec<Metric>> {
        match block {
            Block::MarketSummary => &mut self.market_summary,
            Block::Valuation => &mut self.valuation,
            Block::Profitability => &mut self.profitability,
            Block::Dividends => &mut self.dividends,
            Block::Forecasts => &mut self.forecasts,
            Block::BalanceSheet => &mut self.balance_sheet,
            Block::FinancialHealth => &mut self.financial_health,
        }
    }

    pub fn with_block(mut self, block: Block, metrics: Vec<Metric>) -> Self {
        *self.block_mut(block) = Some(metrics);
        self
    }

    /// Total metric count across all blocks.
    pub fn metric_count(&self) -> usize {
        crate::BLOCK_ORDER
            .iter()
            .map(|block| self.block(*block).len())
            .sum()
    }
}

/// Successful body of `POST /ticker`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockApiResponse {
    pub success: bool,
    pub ticker: String,
    #[serde(default)]
    pub data: StockData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StockApiResponse {
    /// Parse a `/ticker` body, e.g. one saved to disk.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Turn a `success: false` payload into a rejection naming `requested`
    /// unless the server supplied its own message.
    pub fn ensure_success(self, requested: &str) -> Result<Self, ApiError> {
        if self.success {
            return Ok(self);
        }
        let message = self
            .message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Failed to fetch data for {requested}"));
        Err(ApiError::rejected(message))
    }
}

/// Error body returned alongside non-2xx statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiErrorBody {
    /// Message with field-level errors appended, if any.
    pub fn describe(&self) -> Option<String> {
        let message = self
            .message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())?;

        let details = self
            .errors
            .iter()
            .flatten()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |message| format!("{field}: {message}"))
            })
            .collect::<Vec<_>>();

        if details.is_empty() {
            Some(message.to_owned())
        } else {
            Some(format!("{message} ({})", details.join("; ")))
        }
    }
}
