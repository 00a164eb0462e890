//! Ticker lookup API client.
//!
//! One call, one response: `POST {base_url}/ticker` with `{"ticker": "AAPL"}`
//! and an `X-API-Token` header. There is no retry and no cache; every failure
//! is mapped to an [`ApiError`] whose message is fit to show a user.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;

use crate::config::{ApiConfig, TOKEN_VAR};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{ApiErrorBody, StockApiResponse, Ticker};

/// Failure classification for a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    MissingToken,
    Transport,
    Status,
    Malformed,
    Rejected,
}

/// Lookup failure with a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    status: Option<u16>,
}

impl ApiError {
    pub fn missing_token() -> Self {
        Self {
            kind: ApiErrorKind::MissingToken,
            message: format!("API token is not configured. Set {TOKEN_VAR}."),
            status: None,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            message: message.into(),
            status: None,
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Status,
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Malformed,
            message: message.into(),
            status: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Rejected,
            message: message.into(),
            status: None,
        }
    }

    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn http_status(&self) -> Option<u16> {
        self.status
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::MissingToken => "api.missing_token",
            ApiErrorKind::Transport => "api.transport",
            ApiErrorKind::Status => "api.status",
            ApiErrorKind::Malformed => "api.malformed",
            ApiErrorKind::Rejected => "api.rejected",
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ApiError {}

/// Anything that can resolve a ticker into a metric payload.
pub trait StockSource: Send + Sync {
    fn fetch_ticker<'a>(
        &'a self,
        ticker: &'a Ticker,
    ) -> Pin<Box<dyn Future<Output = Result<StockApiResponse, ApiError>> + Send + 'a>>;
}

#[derive(Debug, Serialize)]
struct TickerRequestBody<'a> {
    ticker: &'a str,
}

/// HTTP-backed [`StockSource`].
#[derive(Clone)]
pub struct StockApiClient {
    config: ApiConfig,
    http_client: Arc<dyn HttpClient>,
}

impl StockApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(config: ApiConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn lookup(&self, ticker: &Ticker) -> Result<StockApiResponse, ApiError> {
        let token = self
            .config
            .token
            .as_deref()
            .ok_or_else(ApiError::missing_token)?;

        let body = serde_json::to_string(&TickerRequestBody {
            ticker: ticker.as_str(),
        })
        .map_err(|e| ApiError::malformed(format!("failed to encode request: {e}")))?;

        let request = HttpRequest::post(self.config.ticker_url())
            .with_header("x-api-token", token)
            .with_json_body(body)
            .with_timeout_ms(self.config.timeout_ms);

        tracing::debug!(%ticker, url = %request.url, "requesting ticker data");

        let response = self.http_client.execute(request).await.map_err(|e| {
            tracing::warn!(%ticker, error = %e, "ticker request failed in transport");
            ApiError::transport(e.message())
        })?;

        if !response.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&response.body)
                .ok()
                .and_then(|body| body.describe())
                .unwrap_or_else(|| format!("API request failed with status {}", response.status));
            tracing::warn!(%ticker, status = response.status, %message, "ticker request rejected");
            return Err(ApiError::status(response.status, message));
        }

        let payload: StockApiResponse = serde_json::from_str(&response.body).map_err(|e| {
            tracing::warn!(%ticker, error = %e, "ticker response did not parse");
            ApiError::malformed(format!("failed to parse response for {ticker}: {e}"))
        })?;

        let payload = payload.ensure_success(ticker.as_str()).map_err(|e| {
            tracing::warn!(%ticker, message = e.message(), "ticker lookup rejected");
            e
        })?;

        tracing::debug!(
            %ticker,
            metrics = payload.data.metric_count(),
            "ticker data received"
        );
        Ok(payload)
    }
}

impl StockSource for StockApiClient {
    fn fetch_ticker<'a>(
        &'a self,
        ticker: &'a Ticker,
    ) -> Pin<Box<dyn Future<Output = Result<StockApiResponse, ApiError>> + Send + 'a>> {
        Box::pin(self.lookup(ticker))
    }
}
