//! tvmaze_browse - Search for TV shows and browse their details
//!
//! This library wraps the public TVMaze API behind a small repository with a
//! read-through cache for show details, and maps search results and show
//! details onto display-ready pages.

mod browse;
mod cache;
mod http_client;
mod render;
mod show_repository;

#[cfg(test)]
mod test_support;

pub use browse::{
    BrowseController, Markup, Page, Redirect, ResultRow, ResultsTable, Route, SHOW_TEMPLATE,
    SearchForm, SearchPage, ShowPage, SummaryPolicy,
};
pub use cache::{CacheBackend, FileCache, MemoryCache};
pub use http_client::{BlockingHttpClient, HttpClient};
pub use render::{Renderer, TextRenderer};
pub use show_repository::{
    CastMember, Character, DEFAULT_BASE_URL, Image, Person, SearchResult, Show, ShowRepository,
};

// Re-export error types
pub use cache::CacheError;
pub use http_client::HttpError;
pub use show_repository::RepositoryError;

use thiserror::Error;

/// Name of the persistent cache holding show details
const SHOW_CACHE_NAME: &str = "shows";

/// Which cache backend stores show details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheKind {
    /// JSON files in the system cache directory, kept across runs
    #[default]
    File,
    /// In-process only, gone when the program exits
    Memory,
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the TVMaze API
    pub base_url: String,
    /// `User-Agent` header sent upstream
    pub user_agent: String,
    pub cache: CacheKind,
    pub summary_policy: SummaryPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            cache: CacheKind::default(),
            summary_policy: SummaryPolicy::default(),
        }
    }
}

/// Top-level error type for tvmaze_browse operations
#[derive(Debug, Error)]
pub enum BrowseError {
    /// Error talking to the upstream API
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Error setting up or accessing the cache
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Error querying the show repository
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// The search form could not be read from the user
    #[error("Search form error: {0}")]
    Form(#[from] dialoguer::Error),
}

/// Controller wired with the real transport and the configured cache
pub type DefaultController = BrowseController<BlockingHttpClient, Box<dyn CacheBackend<Show>>>;

/// Builds a browse controller from `settings`
///
/// # Examples
///
/// ```no_run
/// use tvmaze_browse::{Page, Renderer, Settings, TextRenderer, open_controller};
///
/// let controller = open_controller(&Settings::default()).unwrap();
/// let page = controller.index(Some("girls")).unwrap();
/// println!("{}", TextRenderer.render(&Page::Search(page)));
/// ```
pub fn open_controller(settings: &Settings) -> Result<DefaultController, BrowseError> {
    let client = BlockingHttpClient::new(&settings.user_agent)?;

    let cache: Box<dyn CacheBackend<Show>> = match settings.cache {
        CacheKind::File => {
            let cache = FileCache::<Show>::open(SHOW_CACHE_NAME)?;
            tracing::debug!(dir = %cache.cache_dir().display(), "using file cache");
            Box::new(cache)
        }
        CacheKind::Memory => Box::new(MemoryCache::<Show>::new()),
    };

    let repository = ShowRepository::with_base_url(client, cache, settings.base_url.clone());
    Ok(BrowseController::new(repository, settings.summary_policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.base_url, "https://api.tvmaze.com");
        assert!(settings.user_agent.starts_with("tvmaze_browse/"));
        assert_eq!(settings.cache, CacheKind::File);
        assert_eq!(settings.summary_policy, SummaryPolicy::PlainText);
    }

    #[test]
    fn test_open_controller_with_memory_cache() {
        let settings = Settings {
            base_url: "http://localhost:9".to_string(),
            cache: CacheKind::Memory,
            ..Settings::default()
        };

        let controller = open_controller(&settings).unwrap();
        assert_eq!(controller.repository().base_url(), "http://localhost:9");
    }

    #[test]
    fn test_error_conversion() {
        let err: BrowseError = RepositoryError::Http(HttpError::Status {
            url: "http://x/shows/1".to_string(),
            status: 503,
            reason: "Service Unavailable".to_string(),
        })
        .into();
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_form_error_conversion() {
        let prompt_error = dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::NotConnected,
            "not a terminal",
        ));

        let err: BrowseError = prompt_error.into();

        assert!(matches!(err, BrowseError::Form(dialoguer::Error::IO(_))));
        assert!(err.to_string().starts_with("Search form error: "));
        assert!(err.to_string().contains("not a terminal"));
    }
}
