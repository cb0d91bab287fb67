//! Outbound HTTP access
//!
//! The repository only ever needs a single capability from the transport:
//! issue a GET for a base URL, a path and some query parameters and hand back
//! the raw response body. Timeouts and connection handling are left to the
//! transport's defaults.

use thiserror::Error;

/// Errors that can occur while talking to the upstream API.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The request could not be sent or no response was received
    #[error("Request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    /// The upstream answered with a non-success status code
    #[error("Request to {url} failed: HTTP {status} {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    /// The response body could not be read
    #[error("Failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// A minimal blocking HTTP GET capability.
pub trait HttpClient {
    /// Performs `GET {base_url}{path}?{query}` and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures and on any non-2xx status.
    fn get(&self, base_url: &str, path: &str, query: &[(&str, &str)])
    -> Result<Vec<u8>, HttpError>;
}

/// `HttpClient` implementation on top of `reqwest`'s blocking client.
#[derive(Debug, Clone)]
pub struct BlockingHttpClient {
    client: reqwest::blocking::Client,
}

impl BlockingHttpClient {
    /// Creates a client sending the given `User-Agent` header.
    pub fn new(user_agent: &str) -> Result<Self, HttpError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(HttpError::ClientBuild)?;

        Ok(Self { client })
    }
}

impl HttpClient for BlockingHttpClient {
    fn get(
        &self,
        base_url: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<u8>, HttpError> {
        // Build the API URL
        let url = format!("{}{}", base_url.trim_end_matches('/'), path);
        tracing::debug!(%url, ?query, "GET");

        // Make the HTTP request with query parameters
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|e| HttpError::Request {
                url: url.clone(),
                source: e,
            })?;

        // Ensure request was successful
        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status {
                url,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        // Hand back the raw body, decoding is up to the caller
        let body = response.bytes().map_err(|e| HttpError::Body {
            url: url.clone(),
            source: e,
        })?;

        tracing::trace!(%url, bytes = body.len(), "response received");
        Ok(body.to_vec())
    }
}
