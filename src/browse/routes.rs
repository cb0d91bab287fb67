//! The two inbound routes and redirects between them.

use std::fmt;

/// An inbound route exposed by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Search page, optionally with keywords
    Search { keywords: Option<String> },
    /// Detail page of a single show
    Show { id: u64 },
}

impl Route {
    /// Machine name of the route
    pub fn name(&self) -> &'static str {
        match self {
            Route::Search { .. } => "tvmaze.search",
            Route::Show { .. } => "tvmaze.show",
        }
    }

    /// Host-relative URL of the route, query string included
    pub fn path(&self) -> String {
        match self {
            Route::Search { keywords: None } => "/tvmaze".to_string(),
            Route::Search {
                keywords: Some(keywords),
            } => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("keywords", keywords)
                    .finish();
                format!("/tvmaze?{}", query)
            }
            Route::Show { id } => format!("/tvmaze/show/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Instruction to the host to continue at another route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub route: Route,
}

impl Redirect {
    pub fn to(route: Route) -> Self {
        Self { route }
    }
}
