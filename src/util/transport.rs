//! Transport trait and the blocking HTTP implementation.

use std::time::Duration;

use anyhow::Context;
use thiserror::Error;

/// Failure while talking to a remote endpoint.
#[derive(Debug, Error)]
#[error("transport request failed: {0}")]
pub struct TransportError(#[from] anyhow::Error);

/// Minimal synchronous transport used for the diagnostic endpoint query.
///
/// No retry and no engine-level timeout: callers and implementations own
/// that policy.
pub trait Transport {
    /// Fetch the body of the given URL as a string.
    fn get(&self, url: &str) -> Result<String, TransportError>;
}

/// Production [`Transport`] backed by a blocking reqwest client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Default request timeout applied by the underlying client.
    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a transport with the default client settings.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Self::DEFAULT_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        let url: url::Url = url
            .parse()
            .with_context(|| format!("invalid URL `{}`", url))?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .with_context(|| format!("request to `{}` failed", url))?
            .error_for_status()
            .with_context(|| format!("`{}` returned an error status", url))?;

        let body = response
            .text()
            .with_context(|| format!("failed to read response body from `{}`", url))?;

        Ok(body)
    }
}
