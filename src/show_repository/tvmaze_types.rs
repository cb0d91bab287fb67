/// TVMaze API response types.
///
/// These structures mirror the JSON response format from the TVMaze API,
/// limited to the fields this crate displays. Unknown fields are ignored;
/// a missing `id` or `name` is a decode error.
use serde::{Deserialize, Serialize};

/// A TV show, optionally carrying its cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Premiere date as `YYYY-MM-DD`
    #[serde(default)]
    pub premiered: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    /// Summary in HTML format (may be null)
    #[serde(default)]
    pub summary: Option<String>,
    /// Filled in by `ShowRepository::get_show`, empty in search results
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

/// Image URLs in two sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub medium: String,
    pub original: String,
}

/// One entry of the `/shows/:id/cast` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub person: Person,
    pub character: Character,
    /// The person plays themselves
    #[serde(rename = "self", default)]
    pub as_self: bool,
    /// Voice-only role
    #[serde(default)]
    pub voice: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image: Option<Image>,
}

/// One entry of the `/search/shows` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Relevance score assigned by TVMaze
    pub score: f64,
    pub show: Show,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_with_nulls_decodes() {
        let json = r#"{
            "id": 1,
            "url": "https://www.tvmaze.com/shows/1/under-the-dome",
            "name": "Under the Dome",
            "language": null,
            "genres": [],
            "status": "Ended",
            "premiered": null,
            "image": null,
            "summary": null
        }"#;

        let show: Show = serde_json::from_str(json).unwrap();
        assert_eq!(show.id, 1);
        assert_eq!(show.name, "Under the Dome");
        assert_eq!(show.status.as_deref(), Some("Ended"));
        assert!(show.image.is_none());
        assert!(show.cast.is_empty());
    }

    #[test]
    fn test_show_missing_name_fails() {
        let result = serde_json::from_str::<Show>(r#"{"id": 1, "summary": "<p>x</p>"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_cast_member_self_field() {
        let json = r#"{
            "person": {"id": 1, "name": "Mike Vogel", "image": null},
            "character": {"id": 2, "name": "Dale \"Barbie\" Barbara", "image": null},
            "self": true,
            "voice": false
        }"#;

        let member: CastMember = serde_json::from_str(json).unwrap();
        assert!(member.as_self);
        assert!(!member.voice);
        assert_eq!(member.person.name, "Mike Vogel");
    }
}
