use crate::telemetry::error_chain_fmt;
use bytes::Bytes;
use reqwest::header::{ACCEPT, COOKIE, HeaderValue};
use reqwest::{Client, Method, StatusCode};

/// Immutable request template shared by every call against the service:
/// base URL, default headers and a pre-configured HTTP client.
#[derive(Clone, Debug)]
pub struct RequestSpec {
    http_client: Client,
    base_url: String,
}

impl RequestSpec {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Self {
        let mut default_headers = reqwest::header::HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http_client = Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .unwrap();
        Self {
            http_client,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start building a request against `path` (leading slash included).
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest {
            builder: self
                .http_client
                .request(method, format!("{}{}", self.base_url, path)),
        }
    }
}

/// A single request under construction. Consumed by `send`.
#[must_use]
pub struct ApiRequest {
    builder: reqwest::RequestBuilder,
}

impl ApiRequest {
    pub fn header(self, name: &'static str, value: &str) -> Self {
        Self {
            builder: self.builder.header(name, value),
        }
    }

    /// Attach the auth token the way mutating endpoints expect it:
    /// a `Cookie: token=<value>` header.
    pub fn auth_cookie(self, token: &str) -> Self {
        Self {
            builder: self.builder.header(COOKIE, format!("token={}", token)),
        }
    }

    pub fn query<T: serde::Serialize>(self, params: &T) -> Self {
        Self {
            builder: self.builder.query(params),
        }
    }

    /// Attach a JSON body. Sets `Content-Type: application/json`.
    pub fn json<T: serde::Serialize>(self, body: &T) -> Self {
        Self {
            builder: self.builder.json(body),
        }
    }

    /// Issue the request and buffer the response.
    ///
    /// Every HTTP status resolves to an `ApiResponse` value; only transport
    /// failures (connection, timeout) surface as errors. Expected 4xx/5xx
    /// outcomes are asserted at the call site, not smuggled through error
    /// control flow.
    pub async fn send(self) -> Result<ApiResponse, ApiError> {
        let response = self.builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok(ApiResponse { status, body })
    }
}

/// A buffered response: status plus raw body bytes.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    status: StatusCode,
    body: Bytes,
}

impl ApiResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Assert the status, keeping the offending status and body in the error
    /// when the service answered something else.
    pub fn expect_status(self, expected: StatusCode) -> Result<Self, ApiError> {
        if self.status == expected {
            Ok(self)
        } else {
            Err(ApiError::UnexpectedStatus {
                expected,
                actual: self.status,
                body: self.text(),
            })
        }
    }

    /// Deserialize the body. A malformed body is a hard failure, never a
    /// default value.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(ApiError::Deserialization)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(thiserror::Error)]
pub enum ApiError {
    #[error("Failed to reach the booking service.")]
    Transport(#[from] reqwest::Error),
    #[error("Expected status {expected}, got {actual}.")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },
    #[error("Failed to deserialize the response body.")]
    Deserialization(#[source] serde_json::Error),
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
