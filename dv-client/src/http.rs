//! Request descriptors and the transport seam.
//!
//! Operations on [`DVClient`](crate::client::DVClient) never touch the wire
//! directly. They produce a [`ServiceRequest`] describing the call and hand it
//! to a [`Transport`], which owns URL resolution, credentials, and the HTTP
//! exchange. Tests substitute their own transport to observe exactly what an
//! operation asked for.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// A fully described service call: everything needed to put the request on
/// the wire except the base URL and credentials.
#[derive(Debug, Clone)]
pub struct ServiceRequest {
    pub method: Method,
    /// Route template with `{name}` placeholders, e.g.
    /// `/v2/datasource/connections/{connection_id}`.
    pub path: &'static str,
    pub operation_id: &'static str,
    pub path_params: HashMap<&'static str, String>,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
    pub headers: HeaderMap,
}

impl ServiceRequest {
    pub fn new(method: Method, path: &'static str, operation_id: &'static str) -> Self {
        Self {
            method,
            path,
            operation_id,
            path_params: HashMap::new(),
            query: Vec::new(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    /// Binds a `{name}` placeholder in the route template. Absent values are
    /// left unbound and surface as [`Error::UnresolvedPathParameter`] when the
    /// URL is resolved.
    pub fn with_path_param(mut self, name: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.path_params.insert(name, value);
        }
        self
    }

    /// Appends a query pair. Absent values are omitted entirely.
    pub fn with_query(mut self, name: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.query.push((name, value));
        }
        self
    }

    pub fn with_json_body<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn with_accept_json(mut self) -> Self {
        self.headers
            .insert(ACCEPT, HeaderValue::from_static("application/json"));
        self
    }

    pub fn with_content_type_json(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    /// Applies caller-supplied headers last, so they win over anything the
    /// operation set.
    pub fn with_header_overrides(
        mut self,
        overrides: Option<&HashMap<String, String>>,
    ) -> Result<Self> {
        if let Some(overrides) = overrides {
            for (name, value) in overrides {
                self.headers.insert(
                    HeaderName::from_bytes(name.as_bytes())?,
                    HeaderValue::from_str(value)?,
                );
            }
        }
        Ok(self)
    }

    /// Resolves the route template against a base URL. Path parameter values
    /// are pushed as whole segments, so slashes and other reserved characters
    /// in values are percent-encoded rather than splitting the path. Any path
    /// prefix already present on the base URL is preserved.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::InvalidConfiguration("service URL cannot be a base".to_string())
            })?;
            segments.pop_if_empty();
            for segment in self.path.split('/').filter(|s| !s.is_empty()) {
                match segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                {
                    Some(name) => {
                        let value = self
                            .path_params
                            .get(name)
                            .ok_or_else(|| Error::UnresolvedPathParameter(name.to_string()))?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }
        for (name, value) in &self.query {
            url.query_pairs_mut().append_pair(name, value);
        }
        Ok(url)
    }
}

/// Response body for operations that return no content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Empty {}

/// Status line, headers, and raw body as they came off the wire.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Decodes the body into `T` and wraps it with the response metadata.
    /// A zero-length body decodes as an empty JSON object, so operations
    /// returning no content can still produce an [`Empty`] result.
    pub fn json<T: DeserializeOwned>(self) -> Result<ServiceResponse<T>> {
        let result = if self.body.is_empty() {
            serde_json::from_slice(b"{}")?
        } else {
            serde_json::from_slice(&self.body)?
        };
        Ok(ServiceResponse {
            result,
            status: self.status.as_u16(),
            status_text: self
                .status
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
            headers: self.headers,
        })
    }
}

/// Decoded result plus the response metadata every operation returns.
#[derive(Debug, Clone)]
pub struct ServiceResponse<T> {
    pub result: T,
    pub status: u16,
    pub status_text: String,
    pub headers: HeaderMap,
}

/// Puts a [`ServiceRequest`] on the wire. [`HttpTransport`] is the production
/// implementation; tests provide their own to capture requests in memory.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ServiceRequest) -> Result<RawResponse>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ServiceRequest) -> Result<RawResponse> {
        let url = request.url(&self.config.service_url)?;

        let mut builder = self
            .client
            .request(request.method, url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            // Raw bytes rather than RequestBuilder::json, so the merged
            // header set stays exactly as the operation built it.
            builder = builder.body(serde_json::to_vec(body)?);
        }
        let builder = self.config.authenticator.apply(builder);

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        if status.is_success() {
            Ok(RawResponse {
                status,
                headers,
                body,
            })
        } else {
            let message = String::from_utf8_lossy(&body).into_owned();
            warn!(
                "{} failed with status {}: {}",
                request.operation_id, status, message
            );
            match status {
                StatusCode::UNAUTHORIZED => Err(Error::AuthenticationFailed),
                StatusCode::NOT_FOUND => Err(Error::ApiError {
                    status: status.as_u16(),
                    message: format!("Resource not found: {}", message),
                }),
                _ => Err(Error::ApiError {
                    status: status.as_u16(),
                    message,
                }),
            }
        }
    }
}
