//! Search for and view details of TV shows.
//!
//! The controller turns inbound route parameters into repository calls and
//! maps the returned records into display-ready pages. Rendering the pages
//! is left to a [`crate::render::Renderer`].
mod routes;
mod search_form;

pub use routes::{Redirect, Route};
pub use search_form::SearchForm;

use crate::cache::CacheBackend;
use crate::http_client::HttpClient;
use crate::show_repository::{RepositoryError, SearchResult, Show, ShowRepository};

/// Display template used for show detail pages
pub const SHOW_TEMPLATE: &str = "tvmaze_show";

/// How upstream-provided summary HTML is handled before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryPolicy {
    /// Strip the markup and display plain text
    #[default]
    PlainText,
    /// Pass the upstream HTML through unescaped
    TrustUpstream,
}

/// Display-ready text content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// Plain text, to be escaped by any HTML renderer
    Text(String),
    /// Markup to be emitted as-is
    Raw(String),
}

impl Markup {
    pub fn as_str(&self) -> &str {
        match self {
            Markup::Text(s) | Markup::Raw(s) => s,
        }
    }
}

/// Any page the controller produces
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Search(SearchPage),
    Show(ShowPage),
}

/// The search page: the form and, when keywords were given, the results
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub form: SearchForm,
    pub results: Option<ResultsTable>,
}

/// Table of search results
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsTable {
    pub header: [&'static str; 3],
    /// Shown instead of the table when there are no rows
    pub empty: &'static str,
    pub rows: Vec<ResultRow>,
}

impl ResultsTable {
    pub const HEADER: [&'static str; 3] = ["Thumbnail", "ID", "Title"];
    pub const EMPTY: &'static str = "No results.";

    fn from_results(results: Vec<SearchResult>) -> Self {
        Self {
            header: Self::HEADER,
            empty: Self::EMPTY,
            rows: results.into_iter().map(ResultRow::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A single search result row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// URL of the medium-sized image, if the show has one
    pub thumbnail: Option<String>,
    pub id: u64,
    pub title: String,
    /// Link target of the title
    pub link: Route,
}

impl From<SearchResult> for ResultRow {
    fn from(result: SearchResult) -> Self {
        let show = result.show;
        Self {
            thumbnail: show.image.map(|image| image.medium),
            id: show.id,
            link: Route::Show { id: show.id },
            title: show.name,
        }
    }
}

/// Detail page of a single show
#[derive(Debug, Clone, PartialEq)]
pub struct ShowPage {
    /// Name of the display template
    pub template: &'static str,
    pub show: Show,
    /// The show summary after applying the summary policy
    pub summary: Markup,
}

/// Maps the search and show routes to pages.
#[derive(Debug)]
pub struct BrowseController<H, C> {
    repository: ShowRepository<H, C>,
    summary_policy: SummaryPolicy,
}

impl<H, C> BrowseController<H, C>
where
    H: HttpClient,
    C: CacheBackend<Show>,
{
    pub fn new(repository: ShowRepository<H, C>, summary_policy: SummaryPolicy) -> Self {
        Self {
            repository,
            summary_policy,
        }
    }

    pub fn repository(&self) -> &ShowRepository<H, C> {
        &self.repository
    }

    /// Renders the search form, plus the list of results if keywords were
    /// given.
    ///
    /// Empty keywords count as none and cause no upstream call.
    pub fn index(&self, keywords: Option<&str>) -> Result<SearchPage, RepositoryError> {
        let keywords = keywords.filter(|k| !k.is_empty());
        let form = SearchForm::build(keywords);

        let results = match keywords {
            Some(keywords) => Some(ResultsTable::from_results(
                self.repository.search_shows(keywords)?,
            )),
            None => None,
        };

        Ok(SearchPage { form, results })
    }

    /// Displays a specific show by ID.
    pub fn show(&self, id: u64) -> Result<ShowPage, RepositoryError> {
        let show = self.repository.get_show(id)?;
        let summary = self.summary_markup(show.summary.as_deref().unwrap_or_default());

        Ok(ShowPage {
            template: SHOW_TEMPLATE,
            show,
            summary,
        })
    }

    /// Page title of the show route.
    pub fn show_title(&self, id: u64) -> Result<String, RepositoryError> {
        Ok(self.repository.get_show(id)?.name)
    }

    fn summary_markup(&self, html: &str) -> Markup {
        match self.summary_policy {
            SummaryPolicy::PlainText => {
                Markup::Text(nanohtml2text::html2text(html).trim().to_string())
            }
            SummaryPolicy::TrustUpstream => Markup::Raw(html.to_string()),
        }
    }
}
