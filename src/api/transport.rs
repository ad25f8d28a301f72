//! Sending requests.

use super::Endpoint;
use crate::error::{Error, ParameterError};
use crate::types::Parameters;
use std::future::Future;
use std::time::Duration;
use bytes::Bytes;
use reqwest::{header, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

pub(crate) const USER_AGENT_STRING: &str = concat!("dota-webapi/", env!("CARGO_PKG_VERSION"));
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// A response as received, before its status is checked.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Sends a request for an endpoint and returns the raw response.
///
/// Implementations only move bytes. Status checking and parsing happen in
/// [`DotaAPI`](super::DotaAPI).
pub trait Transport {
    /// Requests `endpoint` with `parameters` as the query string.
    fn fetch(
        &self,
        endpoint: Endpoint,
        parameters: &Parameters,
    ) -> impl Future<Output = Result<RawResponse, Error>> + Send;
}

/// Sends requests over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: ClientWithMiddleware,
}

impl HttpTransport {
    /// Creates a transport using the given client.
    pub fn new(client: ClientWithMiddleware) -> Self {
        Self {
            client,
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(get_default_middleware(USER_AGENT_STRING, DEFAULT_TIMEOUT))
    }
}

impl Transport for HttpTransport {
    async fn fetch(
        &self,
        endpoint: Endpoint,
        parameters: &Parameters,
    ) -> Result<RawResponse, Error> {
        let url = reqwest::Url::parse_with_params(&endpoint.url(), parameters)
            .map_err(ParameterError::UrlParse)?;
        let response = self.client.get(url)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(RawResponse {
            status,
            body,
        })
    }
}

/// Builds a client without retries. Requests are sent once.
pub fn get_default_middleware(
    user_agent_string: &str,
    timeout: Duration,
) -> ClientWithMiddleware {
    let mut headers = header::HeaderMap::new();

    if let Ok(user_agent) = header::HeaderValue::from_str(user_agent_string) {
        headers.insert(header::USER_AGENT, user_agent);
    }

    let client = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .unwrap_or_default();

    ClientBuilder::new(client).build()
}
