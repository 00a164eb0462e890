//! One-shot lookup state.
//!
//! A session holds at most one visible result. Starting a lookup issues a
//! [`LookupTicket`]; completing a ticket that is no longer the latest is a
//! no-op, so a slow earlier response can never overwrite a newer one.

use thiserror::Error;

use crate::client::{ApiError, StockSource};
use crate::grouping::{block_sections, BlockSection, Disclosure};
use crate::{StockApiResponse, Ticker, ValidationError};

pub const EMPTY_TICKER_MESSAGE: &str = "Please enter a ticker symbol";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Please enter a ticker symbol")]
    EmptyTicker,
    #[error(transparent)]
    Validation(ValidationError),
    #[error("{}", .0.message())]
    Api(ApiError),
}

/// Handle for an in-flight lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    generation: u64,
    ticker: Ticker,
}

impl LookupTicket {
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct LookupSession<S> {
    source: S,
    generation: u64,
    loading: bool,
    data: Option<StockApiResponse>,
    error: Option<String>,
    disclosure: Disclosure,
}

impl<S: StockSource> LookupSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            generation: 0,
            loading: false,
            data: None,
            error: None,
            disclosure: Disclosure::collapsed(),
        }
    }

    /// Validate `raw` and mark a new lookup as in flight.
    pub fn begin(&mut self, raw: &str) -> Result<LookupTicket, LookupError> {
        if raw.trim().is_empty() {
            self.reject(String::from(EMPTY_TICKER_MESSAGE));
            return Err(LookupError::EmptyTicker);
        }

        let ticker = Ticker::parse(raw).map_err(|e| {
            self.reject(e.to_string());
            LookupError::Validation(e)
        })?;

        self.generation += 1;
        self.loading = true;
        self.error = None;
        tracing::debug!(%ticker, generation = self.generation, "lookup started");

        Ok(LookupTicket {
            generation: self.generation,
            ticker,
        })
    }

    /// A search that failed before reaching the source still replaces the
    /// current result and supersedes any lookup in flight.
    fn reject(&mut self, message: String) {
        self.generation += 1;
        self.loading = false;
        self.data = None;
        self.error = Some(message);
        self.disclosure.reset();
    }

    /// Apply the outcome of `ticket`. Returns `false` when the ticket was
    /// superseded and the outcome was dropped.
    pub fn complete(
        &mut self,
        ticket: &LookupTicket,
        outcome: Result<StockApiResponse, ApiError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticker = %ticket.ticker,
                stale = ticket.generation,
                current = self.generation,
                "dropping superseded lookup result"
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(response) => {
                self.data = Some(response);
                self.error = None;
                self.disclosure.reset();
            }
            Err(error) => {
                tracing::warn!(ticker = %ticket.ticker, error = %error, "lookup failed");
                self.data = None;
                self.error = Some(error.message().to_owned());
            }
        }
        true
    }

    /// Run a full lookup against the session's source.
    pub async fn search(&mut self, raw: &str) -> Result<&StockApiResponse, LookupError> {
        let ticket = self.begin(raw)?;
        let outcome = self.source.fetch_ticker(&ticket.ticker).await;
        let failure = outcome.as_ref().err().cloned();
        self.complete(&ticket, outcome);

        match (failure, self.data.as_ref()) {
            (Some(error), _) => Err(LookupError::Api(error)),
            (None, Some(data)) => Ok(data),
            (None, None) => Err(LookupError::Api(ApiError::malformed(
                "lookup completed without data",
            ))),
        }
    }

    /// Forget the current result and drop any in-flight lookup.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.data = None;
        self.error = None;
        self.disclosure.reset();
    }

    pub fn data(&self) -> Option<&StockApiResponse> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn disclosure(&self) -> Disclosure {
        self.disclosure
    }

    pub fn disclosure_mut(&mut self) -> &mut Disclosure {
        &mut self.disclosure
    }

    /// Sections of the current result, empty when nothing is loaded.
    pub fn sections(&self) -> Vec<BlockSection<'_>> {
        self.data
            .as_ref()
            .map(|response| block_sections(&response.data))
            .unwrap_or_default()
    }
}
