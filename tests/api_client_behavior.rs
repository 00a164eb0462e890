//! Behavior-driven tests for the ticker API client
//!
//! These tests verify HOW the client talks to the lookup endpoint and how
//! each failure mode maps to a user-facing message. The transport is a
//! canned client, so no network is involved.

use std::collections::HashMap;
use std::sync::Arc;

use stockdash_core::{
    ApiConfig, ApiErrorKind, Block, CannedHttpClient, HttpError, HttpMethod, HttpResponse,
    StockApiClient, Ticker, ValidationError,
};

const AAPL_FIXTURE: &str = include_str!("fixtures/aapl.json");

fn config() -> ApiConfig {
    ApiConfig::default()
        .with_base_url("https://stocks.test/api/v1/")
        .expect("valid base url")
        .with_token("test-token")
}

fn client_with(http: Arc<CannedHttpClient>) -> StockApiClient {
    StockApiClient::with_http_client(config(), http)
}

fn ticker(raw: &str) -> Ticker {
    Ticker::parse(raw).expect("valid ticker")
}

// =============================================================================
// API Client: Request Shape
// =============================================================================

#[tokio::test]
async fn when_ticker_is_looked_up_a_single_post_carries_token_and_body() {
    // Given: An API that answers with the fixture
    let http = Arc::new(CannedHttpClient::new().with_response(HttpResponse::ok_json(AAPL_FIXTURE)));
    let client = client_with(Arc::clone(&http));

    // When: A lowercase ticker is looked up
    let response = client.lookup(&ticker("aapl")).await.expect("lookup");

    // Then: One POST went to /ticker with the token header and JSON body
    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "https://stocks.test/api/v1/ticker");
    assert_eq!(
        request.headers.get("x-api-token").map(String::as_str),
        Some("test-token")
    );
    assert_eq!(
        request.headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
    let body: serde_json::Value =
        serde_json::from_str(request.body.as_deref().unwrap_or_default()).expect("json body");
    assert_eq!(body, serde_json::json!({ "ticker": "AAPL" }));

    // And: The payload is available block by block
    assert_eq!(response.ticker, "AAPL");
    assert_eq!(response.data.block(Block::MarketSummary).len(), 7);
}

#[tokio::test]
async fn when_token_is_not_configured_no_request_is_sent() {
    // Given: A config without a token
    let http = Arc::new(CannedHttpClient::new());
    let client = StockApiClient::with_http_client(ApiConfig::default(), http.clone());

    // When: A lookup is attempted
    let error = client.lookup(&ticker("MSFT")).await.expect_err("missing token");

    // Then: It fails fast without touching the transport
    assert_eq!(error.kind(), ApiErrorKind::MissingToken);
    assert!(http.requests().is_empty());
}

// =============================================================================
// API Client: Error Mapping
// =============================================================================

#[tokio::test]
async fn when_api_returns_404_with_message_that_message_is_surfaced() {
    // Given: The API rejects an unknown ticker
    let http = Arc::new(CannedHttpClient::new().with_response(HttpResponse::new(
        404,
        r#"{"message":"Ticker not found"}"#,
    )));
    let client = client_with(http);

    // When: The lookup runs
    let error = client.lookup(&ticker("ZZZZ")).await.expect_err("404");

    // Then: The server's message is what the user sees
    assert_eq!(error.kind(), ApiErrorKind::Status);
    assert_eq!(error.message(), "Ticker not found");
    assert_eq!(error.http_status(), Some(404));
}

#[tokio::test]
async fn when_error_body_has_field_errors_they_are_appended() {
    let http = Arc::new(CannedHttpClient::new().with_response(HttpResponse::new(
        422,
        r#"{"message":"Invalid request","errors":{"ticker":["is too long"]}}"#,
    )));
    let client = client_with(http);

    let error = client.lookup(&ticker("ABC")).await.expect_err("422");
    assert_eq!(error.message(), "Invalid request (ticker: is too long)");
}

#[tokio::test]
async fn when_error_body_is_not_json_a_generic_status_message_is_used() {
    // Given: A gateway error page
    let http = Arc::new(
        CannedHttpClient::new().with_response(HttpResponse::new(502, "<html>Bad Gateway</html>")),
    );
    let client = client_with(http);

    // When / Then: The status code is reported
    let error = client.lookup(&ticker("AAPL")).await.expect_err("502");
    assert_eq!(error.message(), "API request failed with status 502");
    assert_eq!(error.code(), "api.status");
}

#[tokio::test]
async fn when_api_reports_failure_in_a_200_the_ticker_is_named() {
    // Given: A 200 response whose body says it failed
    let http = Arc::new(CannedHttpClient::new().with_response(HttpResponse::ok_json(
        r#"{"success":false,"ticker":"AAPL","data":{}}"#,
    )));
    let client = client_with(http);

    // When / Then
    let error = client.lookup(&ticker("AAPL")).await.expect_err("rejected");
    assert_eq!(error.kind(), ApiErrorKind::Rejected);
    assert_eq!(error.message(), "Failed to fetch data for AAPL");
}

#[tokio::test]
async fn when_success_body_does_not_parse_the_error_is_malformed() {
    let http = Arc::new(CannedHttpClient::new().with_response(HttpResponse::ok_json("[1, 2, 3]")));
    let client = client_with(http);

    let error = client.lookup(&ticker("AAPL")).await.expect_err("malformed");
    assert_eq!(error.kind(), ApiErrorKind::Malformed);
}

#[tokio::test]
async fn when_transport_times_out_the_error_is_a_transport_error() {
    // Given: A transport that times out
    let http = Arc::new(
        CannedHttpClient::new().with_error(HttpError::timeout("request timed out after 5000ms")),
    );
    let client = client_with(http);

    // When / Then
    let error = client.lookup(&ticker("AAPL")).await.expect_err("timeout");
    assert_eq!(error.kind(), ApiErrorKind::Transport);
    assert!(error.message().contains("timed out"));
}

// =============================================================================
// API Client: Configuration
// =============================================================================

#[test]
fn when_environment_overrides_settings_they_are_validated() {
    // Given: A variable source with every setting present
    let vars: HashMap<&str, &str> = HashMap::from([
        ("STOCKDASH_API_BASE_URL", "http://localhost:8080/api/v1/"),
        ("STOCKDASH_API_TOKEN", "  secret  "),
        ("STOCKDASH_TIMEOUT_MS", "2500"),
    ]);

    // When: Config is loaded
    let config = ApiConfig::from_lookup(|name: &str| vars.get(name).map(|v| (*v).to_owned()))
        .expect("valid config");

    // Then: Values are normalized and the token never shows in debug output
    assert_eq!(config.ticker_url(), "http://localhost:8080/api/v1/ticker");
    assert_eq!(config.token.as_deref(), Some("secret"));
    assert_eq!(config.timeout_ms, 2500);
    assert!(!format!("{config:?}").contains("secret"));
}

#[test]
fn when_environment_has_bad_values_loading_fails() {
    let zero_timeout = ApiConfig::from_lookup(|name: &str| {
        (name == "STOCKDASH_TIMEOUT_MS").then(|| String::from("0"))
    });
    assert_eq!(zero_timeout, Err(ValidationError::InvalidTimeout));

    let bad_url = ApiConfig::from_lookup(|name: &str| {
        (name == "STOCKDASH_API_BASE_URL").then(|| String::from("ftp://example.com"))
    });
    assert!(matches!(bad_url, Err(ValidationError::InvalidBaseUrl { .. })));
}
