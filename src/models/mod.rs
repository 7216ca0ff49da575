use serde::{Deserialize, Serialize};

pub mod profile;
pub mod recommendation;
pub mod selection;

pub use profile::{FeedbackEvent, UserProfile};
pub use recommendation::Recommendation;
pub use selection::{Genre, GenreMood, Mood, Selection, ViewMode};

// ============================================================================
// Recommendation Service Wire Types
// ============================================================================

/// Body of `POST /recommend`; unset fields are sent as ""
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendRequest {
    /// Display name of the genre, e.g. "Sci-Fi"
    pub genre: String,
    /// Lowercase mood name
    pub mood: String,
}

impl From<&Selection> for RecommendRequest {
    fn from(selection: &Selection) -> Self {
        let pair = selection.genre_mood();
        Self {
            genre: pair.genre_str().to_string(),
            mood: pair.mood_str().to_string(),
        }
    }
}

/// Success body of `POST /recommend`
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    /// Absent on some successful responses; treated as an empty list
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
}

/// Success body of `GET /favorites`
#[derive(Debug, Clone, Deserialize)]
pub struct FavoritesResponse {
    /// Full authoritative list; absent or null means none
    #[serde(default)]
    pub favorites: Option<Vec<Recommendation>>,
}

/// Structured failure body shared by the service's endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure reason, shown to the user when present
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteAction {
    Add,
    Remove,
}

impl FavoriteAction {
    /// Toggling removes a current favorite and adds anything else
    pub fn for_toggle(is_currently_favorite: bool) -> Self {
        if is_currently_favorite {
            FavoriteAction::Remove
        } else {
            FavoriteAction::Add
        }
    }
}

/// Body of `POST /favorite`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteRequest {
    pub title: String,
    /// Serialized as "add" or "remove"
    pub action: FavoriteAction,
}

/// A successful favorites read, with the exact status the service sent
#[derive(Debug, Clone, PartialEq)]
pub struct FavoritesSnapshot {
    /// HTTP status of the read, always 2xx
    pub status: u16,
    pub favorites: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recommend_request_from_empty_selection() {
        let request = RecommendRequest::from(&Selection::default());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"genre": "", "mood": ""})
        );
    }

    #[test]
    fn test_recommend_request_from_selection() {
        let selection = Selection {
            genre: Some(Genre::SciFi),
            mood: Some(Mood::Excited),
            ..Default::default()
        };
        let request = RecommendRequest::from(&selection);
        assert_eq!(request.genre, "Sci-Fi");
        assert_eq!(request.mood, "excited");
    }

    #[test]
    fn test_favorite_action_for_toggle() {
        assert_eq!(FavoriteAction::for_toggle(true), FavoriteAction::Remove);
        assert_eq!(FavoriteAction::for_toggle(false), FavoriteAction::Add);

        let body = FavoriteRequest {
            title: "M".to_string(),
            action: FavoriteAction::Add,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"title": "M", "action": "add"})
        );
    }

    #[test]
    fn test_missing_list_fields_decode_as_none() {
        let recs: RecommendationsResponse = serde_json::from_str("{}").unwrap();
        assert!(recs.recommendations.is_none());

        let favs: FavoritesResponse = serde_json::from_str(r#"{"favorites": null}"#).unwrap();
        assert!(favs.favorites.is_none());

        let err: ErrorBody = serde_json::from_str(r#"{"status": "oops"}"#).unwrap();
        assert!(err.error.is_none());
    }
}
