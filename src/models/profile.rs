use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::GenreMood;

/// Preference profile pushed to the service whenever the selection changes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Configured identity, "default" unless overridden
    pub user_id: String,
    /// Always a single element: the selected genre, or "" when unset
    pub preferred_genres: Vec<String>,
    /// Lowercase mood name, or "" when unset
    pub mood: String,
}

impl UserProfile {
    pub fn from_selection(user_id: impl Into<String>, pair: &GenreMood) -> Self {
        Self {
            user_id: user_id.into(),
            preferred_genres: vec![pair.genre_str().to_string()],
            mood: pair.mood_str().to_string(),
        }
    }
}

/// A per-title rating; not retained after submission
///
/// The score is unvalidated: whatever the input widget yields reaches the
/// service, which owns the 1-5 range check. Fractional and non-numeric
/// values are carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackEvent {
    /// Title being rated, the identity key
    pub title: String,
    /// Raw score as entered
    pub score: Value,
}

impl FeedbackEvent {
    /// Converts raw widget text into a score value
    ///
    /// Numeric text becomes a JSON number (`"4"` → `4`, `"4.5"` → `4.5`);
    /// anything else is sent as the original string.
    pub fn score_from_input(raw: &str) -> Value {
        match serde_json::from_str::<Value>(raw.trim()) {
            Ok(number @ Value::Number(_)) => number,
            _ => Value::String(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Genre, Mood};
    use serde_json::json;

    #[test]
    fn test_profile_payload_shape() {
        let pair = GenreMood {
            genre: Some(Genre::Comedy),
            mood: Some(Mood::Happy),
        };
        let profile = UserProfile::from_selection("default", &pair);
        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            json!({"user_id": "default", "preferred_genres": ["Comedy"], "mood": "happy"})
        );
    }

    #[test]
    fn test_profile_with_mood_only_sends_empty_genre() {
        let pair = GenreMood {
            genre: None,
            mood: Some(Mood::Calm),
        };
        let profile = UserProfile::from_selection("default", &pair);
        assert_eq!(profile.preferred_genres, vec![String::new()]);
        assert_eq!(profile.mood, "calm");
    }

    #[test]
    fn test_feedback_payload_keeps_out_of_range_score() {
        let event = FeedbackEvent {
            title: "Heat (1995)".to_string(),
            score: json!(9),
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"title": "Heat (1995)", "score": 9})
        );
    }

    #[test]
    fn test_score_from_numeric_input() {
        assert_eq!(FeedbackEvent::score_from_input("4"), json!(4));
        assert_eq!(FeedbackEvent::score_from_input(" 4.5 "), json!(4.5));
        assert_eq!(FeedbackEvent::score_from_input("-1"), json!(-1));
    }

    #[test]
    fn test_score_from_non_numeric_input_is_kept_as_text() {
        assert_eq!(FeedbackEvent::score_from_input("four"), json!("four"));
        assert_eq!(FeedbackEvent::score_from_input(""), json!(""));
        // Valid JSON but not a number still goes out as the raw text
        assert_eq!(FeedbackEvent::score_from_input("true"), json!("true"));
    }
}
