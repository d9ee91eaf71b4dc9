//! A client for the remote payment API.
//!
//! [`ApiClient`] sends JSON requests relative to a configured base URL,
//! adds bearer authentication when an API key is set, and maps every failure
//! into an [`ApiClientError`] tagged with a short context string. Payment
//! creation and lookup go through the [`RequestShape`] of the configured
//! [`ApiVersion`].
//!
//! Calls are independent: there is no retry and no deduplication. Repeat a
//! creation with the same `orderId` to make it idempotent on the backend.

use std::fmt::Display;
use std::time::Duration;

use http::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use http::{HeaderMap, Method, StatusCode};
use intentpay::proto::{PaymentRequest, RawPaymentRecord};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

#[cfg(feature = "telemetry")]
use tracing::{Span, instrument};

use crate::constants::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
use crate::error::ApiClientError;
use crate::version::{ApiVersion, RequestShape};

/// Connection settings for an [`ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Root of the API. Version prefixes are resolved against it.
    pub base_url: Url,
    /// Bearer token, sent as `Authorization: Bearer <key>`.
    pub api_key: Option<String>,
    /// API version used for payment endpoints.
    pub version: ApiVersion,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// A config for `base_url` with no key, the default version and the
    /// default timeout.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
            version: ApiVersion::V2,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Parses a base URL, normalizing it to end with exactly one `/`.
impl TryFrom<&str> for ApiConfig {
    type Error = ApiClientError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut normalized = value.trim_end_matches('/').to_string();
        normalized.push('/');
        let url = Url::parse(&normalized).map_err(|e| ApiClientError::UrlParse {
            context: "Failed to parse base url",
            source: e,
        })?;
        Ok(Self::new(url))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::try_from(DEFAULT_API_URL).expect("default API URL is valid")
    }
}

/// Per-call options for [`ApiClient::request`].
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method.
    pub method: Method,
    /// Extra headers, applied after the client's own.
    pub headers: HeaderMap,
    /// JSON body.
    pub body: Option<serde_json::Value>,
    /// Query string pairs.
    pub query: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
            query: Vec::new(),
        }
    }
}

impl RequestOptions {
    /// A `GET` with no body.
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    /// A `POST` carrying `body`.
    #[must_use]
    pub fn post(body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::default()
        }
    }

    /// Adds a query pair.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// A successful response.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Response status (always 2xx).
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Decoded body.
    pub data: T,
}

/// Payment operations, abstracted so callers can swap in a fake.
#[async_trait::async_trait]
pub trait PaymentsApi: Send + Sync {
    /// Creates a payment and returns the record the backend stored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport, status or decoding failures,
    /// and [`ApiClientError::MissingPaymentId`] when the record has no id.
    async fn create_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<RawPaymentRecord, ApiClientError>;

    /// Fetches a payment by id.
    ///
    /// The id is sent as a single escaped path segment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidPaymentId`] for an empty, `.` or `..`
    /// id, and [`ApiClientError`] on transport, status or decoding failures.
    async fn get_payment(&self, id: &str) -> Result<RawPaymentRecord, ApiClientError>;
}

/// A client for the remote payment API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
    client: Client,
    headers: HeaderMap,
}

impl ApiClient {
    /// Builds a client from an explicit config.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidHeader`] if the API key cannot be
    /// sent as a header value.
    pub fn try_new(config: ApiConfig) -> Result<Self, ApiClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = &config.api_key {
            let mut value = HeaderValue::from_str(&format!("Bearer {key}")).map_err(|e| {
                ApiClientError::InvalidHeader {
                    context: "Failed to build Authorization header",
                    source: e,
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(Self {
            config,
            client: Client::new(),
            headers,
        })
    }

    /// Returns the config this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Returns the request shape of the configured version.
    #[must_use]
    pub fn shape(&self) -> &'static dyn RequestShape {
        self.config.version.shape()
    }

    /// Sends a request to `path`, resolved against the base URL, and decodes
    /// a JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the URL cannot be built, the transport
    /// fails, the status is not 2xx, or the body does not decode as `T`.
    pub async fn request<T>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.resolve(path)?;
        self.send_json(url, "API request", options).await
    }

    /// Creates a payment using the configured version's body and path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Serialize`] if the body cannot be encoded,
    /// any transport or status error, and
    /// [`ApiClientError::MissingPaymentId`] if the response has no id.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "intentpay.api.create_payment", skip_all, fields(version = %self.config.version), err)
    )]
    pub async fn create_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<RawPaymentRecord, ApiClientError> {
        let shape = self.shape();
        let body = shape
            .create_body(request)
            .map_err(|e| ApiClientError::Serialize {
                context: "Failed to encode payment request",
                source: e,
            })?;
        let url = self.resolve(&shape.create_path())?;
        let response: ApiResponse<RawPaymentRecord> = self
            .send_json(url, "POST payment", RequestOptions::post(body))
            .await?;
        match response.data.id.as_deref() {
            Some(id) if !id.is_empty() => Ok(response.data),
            _ => Err(ApiClientError::MissingPaymentId),
        }
    }

    /// Fetches a payment by id.
    ///
    /// The id is sent as a single escaped path segment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidPaymentId`] for an empty, `.` or `..`
    /// id, and [`ApiClientError`] on transport, status or decoding failures.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "intentpay.api.get_payment", skip(self), err)
    )]
    pub async fn get_payment(&self, id: &str) -> Result<RawPaymentRecord, ApiClientError> {
        if matches!(id, "" | "." | "..") {
            return Err(ApiClientError::InvalidPaymentId(id.to_owned()));
        }
        let url = self
            .shape()
            .payment_url(&self.config.base_url, id)
            .map_err(|e| ApiClientError::UrlParse {
                context: "Failed to construct payment URL",
                source: e,
            })?;
        let response = self
            .send_json(url, "GET payment", RequestOptions::get())
            .await?;
        Ok(response.data)
    }

    /// Resolves a path against the base URL.
    fn resolve(&self, path: &str) -> Result<Url, ApiClientError> {
        self.config
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiClientError::UrlParse {
                context: "Failed to construct request URL",
                source: e,
            })
    }

    /// Shared request helper: headers, timeout, error mapping and span
    /// recording.
    async fn send_json<T>(
        &self,
        url: Url,
        context: &'static str,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let mut req = self.client.request(options.method, url);
        for (key, value) in &self.headers {
            req = req.header(key, value);
        }
        for (key, value) in &options.headers {
            req = req.header(key, value);
        }
        if !options.query.is_empty() {
            req = req.query(&options.query);
        }
        if let Some(body) = &options.body {
            req = req.json(body);
        }
        if let Some(timeout) = self.config.timeout {
            req = req.timeout(timeout);
        }

        let http_response = req
            .send()
            .await
            .map_err(|e| ApiClientError::Http { context, source: e })?;

        let status = http_response.status();
        let result = if status.is_success() {
            let headers = http_response.headers().clone();
            http_response
                .json::<T>()
                .await
                .map(|data| ApiResponse {
                    status,
                    headers,
                    data,
                })
                .map_err(|e| ApiClientError::JsonDeserialization { context, source: e })
        } else {
            let body = http_response
                .text()
                .await
                .map_err(|e| ApiClientError::ResponseBodyRead { context, source: e })?;
            Err(ApiClientError::HttpStatus {
                context,
                status,
                body,
            })
        };

        record_result_on_span(&result);

        result
    }
}

#[async_trait::async_trait]
impl PaymentsApi for ApiClient {
    async fn create_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<RawPaymentRecord, ApiClientError> {
        Self::create_payment(self, request).await
    }

    async fn get_payment(&self, id: &str) -> Result<RawPaymentRecord, ApiClientError> {
        Self::get_payment(self, id).await
    }
}

/// Records the outcome of a request on the current span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R, E: Display>(result: &Result<R, E>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "Request to payment API failed");
        }
    }
}

/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result_on_span<R, E: Display>(_result: &Result<R, E>) {}

#[cfg(test)]
mod tests {
    use super::*;
    use intentpay::proto::{DestinationSpec, PaymentDisplay, PaymentStatus, SourceSpec};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payment_request() -> PaymentRequest {
        PaymentRequest {
            display: PaymentDisplay::usd("Order 9"),
            source: SourceSpec {
                chain_id: 137,
                token_symbol: "USDC".into(),
                token_address: Some("0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359".into()),
                amount: None,
            },
            destination: DestinationSpec {
                chain_id: 8453,
                token_symbol: "USDC".into(),
                token_address: Some("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913".into()),
                amount: "9".into(),
                receiver_address: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".into(),
                receiver_memo: None,
            },
            metadata: None,
            order_id: Some("order-9".into()),
            fee_type: None,
            webhook_url: None,
            webhook_secret: None,
        }
    }

    fn record_json() -> serde_json::Value {
        json!({
            "id": "pay_9",
            "status": "payment_unpaid",
            "destination": {
                "chainId": "8453",
                "tokenAddress": "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
                "amount": "9",
                "receiverAddress": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
            },
            "source": { "chainId": 137, "amount": "9.01" }
        })
    }

    async fn client_for(server: &MockServer, version: ApiVersion) -> ApiClient {
        let config = ApiConfig::try_from(server.uri().as_str())
            .unwrap()
            .with_api_key("sk_test")
            .with_version(version);
        ApiClient::try_new(config).unwrap()
    }

    #[tokio::test]
    async fn test_create_payment_v2() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/payments"))
            .and(header("authorization", "Bearer sk_test"))
            .and(body_partial_json(json!({
                "orderId": "order-9",
                "destination": { "chainId": 8453, "amount": "9" }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(record_json()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, ApiVersion::V2).await;
        let record = client.create_payment(&payment_request()).await.unwrap();
        assert_eq!(record.id.as_deref(), Some("pay_9"));
        assert_eq!(record.status, Some(PaymentStatus::PaymentUnpaid));
        assert_eq!(record.destination.chain_id, Some(8453));
    }

    #[tokio::test]
    async fn test_create_payment_v1_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/payment-api/payment"))
            .and(body_partial_json(json!({
                "preferredChain": "137",
                "destination": { "amountUnits": "9" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(record_json()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, ApiVersion::V1).await;
        let record = client.create_payment(&payment_request()).await.unwrap();
        assert_eq!(record.id.as_deref(), Some("pay_9"));
    }

    #[tokio::test]
    async fn test_create_payment_without_id_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v4/payments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "payment_unpaid" })))
            .mount(&server)
            .await;

        let client = client_for(&server, ApiVersion::V4).await;
        let err = client.create_payment(&payment_request()).await.unwrap_err();
        assert!(matches!(err, ApiClientError::MissingPaymentId));
    }

    #[tokio::test]
    async fn test_error_status_keeps_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/payments/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let client = client_for(&server, ApiVersion::V2).await;
        let err = client.get_payment("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        match err {
            ApiClientError::HttpStatus { body, context, .. } => {
                assert_eq!(body, "not found");
                assert_eq!(context, "GET payment");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_get_payment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/payments/pay_9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(record_json()))
            .mount(&server)
            .await;

        let client = client_for(&server, ApiVersion::V2).await;
        let record = client.get_payment("pay_9").await.unwrap();
        assert_eq!(record.source.amount.as_deref(), Some("9.01"));
    }

    #[tokio::test]
    async fn test_get_payment_escapes_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/payments/a%2Fb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(record_json()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, ApiVersion::V2).await;
        client.get_payment("a/b").await.unwrap();
        for id in ["", ".", ".."] {
            assert!(matches!(
                client.get_payment(id).await,
                Err(ApiClientError::InvalidPaymentId(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_generic_request_with_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/payments"))
            .and(query_param("status", "payment_unpaid"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "a" }, { "id": "b" }])))
            .mount(&server)
            .await;

        let client = client_for(&server, ApiVersion::V2).await;
        let response: ApiResponse<Vec<RawPaymentRecord>> = client
            .request(
                "/v2/payments",
                RequestOptions::get().with_query("status", "payment_unpaid"),
            )
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.data.len(), 2);
    }

    #[tokio::test]
    async fn test_bad_json_is_deserialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/payments/pay_9"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, ApiVersion::V2).await;
        let err = client.get_payment("pay_9").await.unwrap_err();
        assert!(matches!(err, ApiClientError::JsonDeserialization { .. }));
    }

    #[test]
    fn test_no_api_key_sends_no_authorization() {
        let client = ApiClient::try_new(ApiConfig::try_from("http://localhost:1").unwrap()).unwrap();
        assert!(client.headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_base_url_normalized() {
        let config = ApiConfig::try_from("https://api.example.com/root//").unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.example.com/root/");
        assert!(ApiConfig::try_from("not a url").is_err());
    }

    #[test]
    fn test_api_key_with_newline_rejected() {
        let config = ApiConfig::default().with_api_key("bad\nkey");
        assert!(matches!(
            ApiClient::try_new(config),
            Err(ApiClientError::InvalidHeader { .. })
        ));
    }
}
