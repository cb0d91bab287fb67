//! Shared fakes for unit tests.

use crate::http_client::{HttpClient, HttpError};
use std::collections::HashMap;
use std::sync::Mutex;

/// A recorded outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedRequest {
    pub base_url: String,
    pub path: String,
    pub query: Vec<(String, String)>,
}

/// `HttpClient` answering from canned bodies keyed by path.
///
/// Paths without a canned body answer with HTTP 500. Every call is
/// recorded, including failing ones.
#[derive(Debug, Default)]
pub(crate) struct FakeHttpClient {
    responses: Mutex<HashMap<String, String>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, path: &str, body: &str) -> Self {
        self.set_response(path, body);
        self
    }

    pub fn set_response(&self, path: &str, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), body.to_string());
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }
}

impl HttpClient for FakeHttpClient {
    fn get(
        &self,
        base_url: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<u8>, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            base_url: base_url.to_string(),
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        match self.responses.lock().unwrap().get(path) {
            Some(body) => Ok(body.clone().into_bytes()),
            None => Err(HttpError::Status {
                url: format!("{}{}", base_url, path),
                status: 500,
                reason: "Internal Server Error".to_string(),
            }),
        }
    }
}

pub(crate) const SHOW_1_JSON: &str = r#"{
    "id": 1,
    "name": "Under the Dome",
    "language": "English",
    "genres": ["Drama", "Science-Fiction", "Thriller"],
    "status": "Ended",
    "premiered": "2013-06-24",
    "image": {
        "medium": "https://static.tvmaze.com/uploads/images/medium_portrait/81/202627.jpg",
        "original": "https://static.tvmaze.com/uploads/images/original_untouched/81/202627.jpg"
    },
    "summary": "<p><b>Under the Dome</b> is the story of a small town that is suddenly cut off.</p>"
}"#;

pub(crate) const SHOW_1_CAST_JSON: &str = r#"[
    {
        "person": {"id": 1, "name": "Mike Vogel", "image": null},
        "character": {"id": 1, "name": "Dale \"Barbie\" Barbara", "image": null},
        "self": false,
        "voice": false
    },
    {
        "person": {"id": 2, "name": "Rachelle Lefevre", "image": null},
        "character": {"id": 2, "name": "Julia Shumway", "image": null},
        "self": false,
        "voice": false
    }
]"#;

pub(crate) const SEARCH_GIRLS_JSON: &str = r#"[
    {
        "score": 0.9,
        "show": {
            "id": 139,
            "name": "Girls",
            "image": {
                "medium": "https://static.tvmaze.com/uploads/images/medium_portrait/31/78286.jpg",
                "original": "https://static.tvmaze.com/uploads/images/original_untouched/31/78286.jpg"
            },
            "summary": "<p>This Emmy winning series is a comic look at twenty-somethings.</p>"
        }
    },
    {
        "score": 0.7,
        "show": {
            "id": 23542,
            "name": "Good Girls",
            "image": null,
            "summary": null
        }
    }
]"#;
