//! The search form.

use super::routes::{Redirect, Route};

/// A form with a single `keywords` text field and a search action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    /// Value the field is pre-filled with
    pub default_keywords: Option<String>,
}

impl SearchForm {
    pub const FORM_ID: &'static str = "tvmaze_search";
    pub const FIELD_LABEL: &'static str = "Keywords";
    pub const SUBMIT_LABEL: &'static str = "Search";

    /// Builds the form, pre-filled with the keywords of the current request.
    pub fn build(request_keywords: Option<&str>) -> Self {
        Self {
            default_keywords: request_keywords.map(str::to_string),
        }
    }

    /// Handles a submission by redirecting to the search route.
    ///
    /// The keywords are passed along untouched.
    pub fn submit(&self, keywords: &str) -> Redirect {
        Redirect::to(Route::Search {
            keywords: Some(keywords.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prefills_keywords() {
        assert_eq!(SearchForm::build(None).default_keywords, None);
        assert_eq!(
            SearchForm::build(Some("girls")).default_keywords.as_deref(),
            Some("girls")
        );
    }

    #[test]
    fn test_submit_redirects_to_search_route() {
        let redirect = SearchForm::build(None).submit("  Breaking Bad!  ");

        assert_eq!(
            redirect.route,
            Route::Search {
                keywords: Some("  Breaking Bad!  ".to_string())
            }
        );
        assert_eq!(redirect.route.name(), "tvmaze.search");
    }
}
