// HTTP layer for the Scaledrone REST API
// One request per call, no retries, anything but 200 is an API error

use crate::auth::AuthMode;
use crate::error::{ScaledroneError, ScaledroneResult};
use crate::logging::request_span;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn, Instrument};

pub use self::config::{HttpConfig, HttpConfigBuilder, DEFAULT_BASE_URL};

mod config;

/// HTTP methods used by the Scaledrone REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Authenticated HTTP client bound to one channel and one base URL
#[derive(Debug, Clone)]
pub struct ScaledroneHttpClient {
    client: Client,
    channel_id: String,
    auth_mode: AuthMode,
    base_url: String,
}

impl ScaledroneHttpClient {
    /// Create a new HTTP client from configuration and the channel's credentials
    pub fn new(
        config: HttpConfig,
        channel_id: impl Into<String>,
        auth_mode: AuthMode,
    ) -> ScaledroneResult<Self> {
        // paths are appended as "/{channel}/...", so no trailing slash here
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            ScaledroneError::configuration(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                ScaledroneError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            channel_id: channel_id.into(),
            auth_mode,
            base_url,
        })
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Get the authentication mode
    pub fn auth_mode(&self) -> &AuthMode {
        &self.auth_mode
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a GET request builder for a path relative to the base URL
    pub fn get(&self, path: &str) -> HttpRequestBuilder<'_> {
        HttpRequestBuilder::new(self, HttpMethod::Get, path)
    }

    /// Create a POST request builder for a path relative to the base URL
    pub fn post(&self, path: &str) -> HttpRequestBuilder<'_> {
        HttpRequestBuilder::new(self, HttpMethod::Post, path)
    }
}

/// HTTP request builder for fluent API
pub struct HttpRequestBuilder<'a> {
    client: &'a ScaledroneHttpClient,
    method: HttpMethod,
    path: String,
    query_params: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl<'a> HttpRequestBuilder<'a> {
    fn new(client: &'a ScaledroneHttpClient, method: HttpMethod, path: &str) -> Self {
        Self {
            client,
            method,
            path: path.to_string(),
            query_params: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter. Repeated keys are kept in insertion order.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    /// Set the raw request body, sent without any encoding
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Send the request and return the body of a 200 response
    pub async fn send(self) -> ScaledroneResult<Vec<u8>> {
        let span = request_span(self.method.as_str(), &self.path);
        self.execute().instrument(span).await
    }

    /// Send the request and parse a 200 response body as JSON
    pub async fn send_json<T: DeserializeOwned>(self) -> ScaledroneResult<T> {
        let body = self.send().await?;
        serde_json::from_slice(&body).map_err(ScaledroneError::from)
    }

    async fn execute(self) -> ScaledroneResult<Vec<u8>> {
        let url = format!("{}{}", self.client.base_url, self.path);
        let http = &self.client.client;
        let mut request = match self.method {
            HttpMethod::Get => http.get(&url),
            HttpMethod::Post => http.post(&url),
        };

        request = self.client.auth_mode.apply(request, &self.client.channel_id);

        if !self.query_params.is_empty() {
            request = request.query(&self.query_params);
        }

        if let Some(body) = self.body {
            request = request.body(body);
        }

        debug!(auth = self.client.auth_mode.scheme(), "Dispatching request");
        let response = request.send().await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();
        debug!(status = status.as_u16(), bytes = body.len(), "Response received");

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Request rejected by API");
            return Err(ScaledroneError::api(status.as_u16(), body));
        }

        Ok(body)
    }
}
