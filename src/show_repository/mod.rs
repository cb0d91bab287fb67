//! Read access to the TVMaze public API.
//!
//! The repository builds request paths, decodes the JSON bodies into the
//! types of [`tvmaze_types`] and keeps show details in a cache so repeat
//! views of the same show cost no upstream calls.
mod tvmaze_types;

pub use tvmaze_types::{CastMember, Character, Image, Person, SearchResult, Show};

use crate::cache::CacheBackend;
use crate::http_client::{HttpClient, HttpError};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Base URL of the public TVMaze API
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Errors that can occur while querying the show repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The upstream request failed
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The upstream response did not match the expected shape
    #[error("Failed to parse API response for {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },
}

/// Searches shows and fetches show details, caching the latter.
///
/// Both the transport and the cache are injected so that callers decide
/// which backend stores show details and for how long.
#[derive(Debug)]
pub struct ShowRepository<H, C> {
    client: H,
    cache: C,
    base_url: String,
}

impl<H, C> ShowRepository<H, C>
where
    H: HttpClient,
    C: CacheBackend<Show>,
{
    /// Creates a repository talking to the public TVMaze API.
    pub fn new(client: H, cache: C) -> Self {
        Self::with_base_url(client, cache, DEFAULT_BASE_URL)
    }

    /// Creates a repository talking to the API at `base_url`.
    pub fn with_base_url(client: H, cache: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            cache,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &H {
        &self.client
    }

    /// Returns the cache used for show details
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Cache key under which the details of show `id` are stored
    pub fn cache_key(id: u64) -> String {
        format!("show:{}", id)
    }

    /// Sends a GET request to the API and decodes the JSON response.
    fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RepositoryError> {
        let body = self.client.get(&self.base_url, path, query)?;

        serde_json::from_slice(&body).map_err(|e| RepositoryError::Decode {
            path: path.to_string(),
            source: e,
        })
    }

    /// Returns the list of shows matching `keywords`, in upstream order.
    ///
    /// # Arguments
    ///
    /// * `keywords` - Search keywords, forwarded as-is. An empty string is a
    ///                valid query.
    ///
    /// # Returns
    ///
    /// The decoded search results, unfiltered, or a RepositoryError if the
    /// request fails or the response cannot be parsed
    pub fn search_shows(&self, keywords: &str) -> Result<Vec<SearchResult>, RepositoryError> {
        let results: Vec<SearchResult> = self.request("/search/shows", &[("q", keywords)])?;
        tracing::debug!(keywords, count = results.len(), "search completed");
        Ok(results)
    }

    /// Returns the details of show `id` together with its cast.
    ///
    /// A cached entry is returned verbatim. Otherwise the show and its cast
    /// are fetched, merged and stored before being returned. If either call
    /// fails nothing is cached.
    ///
    /// # Arguments
    ///
    /// * `id` - The TVMaze show ID
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let repository = ShowRepository::new(BlockingHttpClient::new("ua")?, MemoryCache::new());
    /// let show = repository.get_show(1)?;
    /// println!("{} ({} cast members)", show.name, show.cast.len());
    /// ```
    pub fn get_show(&self, id: u64) -> Result<Show, RepositoryError> {
        // Generate cache key
        let key = Self::cache_key(id);

        // Try to load from cache
        match self.cache.get(&key) {
            Ok(Some(show)) => {
                tracing::debug!(%key, "cache hit");
                return Ok(show);
            }
            Ok(None) => {
                tracing::debug!(%key, "cache miss");
            }
            Err(e) => {
                // Unreadable entries are refetched and overwritten below
                tracing::warn!(%key, error = %e, "cache read failed");
            }
        }

        // Fetch the show itself, then merge in its cast
        let mut show: Show = self.request(&format!("/shows/{}", id), &[])?;
        show.cast = self.request(&format!("/shows/{}/cast", id), &[])?;

        // Store in cache (a failed write still returns the show)
        if let Err(e) = self.cache.set(&key, &show) {
            tracing::warn!(%key, error = %e, "cache write failed");
        }

        Ok(show)
    }
}
