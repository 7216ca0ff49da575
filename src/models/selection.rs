use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::error::ClientError;

/// Genres offered by the selection form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Comedy,
    Action,
    Drama,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Romance,
}

impl Genre {
    pub const ALL: [Genre; 5] = [
        Genre::Comedy,
        Genre::Action,
        Genre::Drama,
        Genre::SciFi,
        Genre::Romance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Comedy => "Comedy",
            Genre::Action => "Action",
            Genre::Drama => "Drama",
            Genre::SciFi => "Sci-Fi",
            Genre::Romance => "Romance",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| ClientError::InvalidSelection(format!("unknown genre '{}'", s)))
    }
}

/// Moods offered by the selection form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    Calm,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Excited, Mood::Calm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Excited => "excited",
            Mood::Calm => "calm",
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| ClientError::InvalidSelection(format!("unknown mood '{}'", s)))
    }
}

/// Which list the view layer is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Recommendations,
    Favorites,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Recommendations => ViewMode::Favorites,
            ViewMode::Favorites => ViewMode::Recommendations,
        }
    }
}

/// The (genre, mood) pair observed by profile sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenreMood {
    pub genre: Option<Genre>,
    pub mood: Option<Mood>,
}

impl GenreMood {
    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.mood.is_none()
    }

    /// Wire form of the genre; unset is the empty string
    pub fn genre_str(&self) -> &'static str {
        self.genre.map(|g| g.as_str()).unwrap_or("")
    }

    /// Wire form of the mood; unset is the empty string
    pub fn mood_str(&self) -> &'static str {
        self.mood.map(|m| m.as_str()).unwrap_or("")
    }
}

/// Ephemeral form state, never persisted
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub genre: Option<Genre>,
    pub mood: Option<Mood>,
    pub search_query: String,
    pub view_mode: ViewMode,
}

impl Selection {
    pub fn genre_mood(&self) -> GenreMood {
        GenreMood {
            genre: self.genre,
            mood: self.mood,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_round_trips_through_wire_names() {
        for genre in Genre::ALL {
            assert_eq!(genre.as_str().parse::<Genre>().unwrap(), genre);
        }
        assert_eq!(serde_json::to_string(&Genre::SciFi).unwrap(), "\"Sci-Fi\"");
    }

    #[test]
    fn test_unknown_genre_is_rejected() {
        let err = "Horror".parse::<Genre>().unwrap_err();
        assert_eq!(
            err,
            ClientError::InvalidSelection("unknown genre 'Horror'".to_string())
        );
        // Option sets are case-sensitive
        assert!("comedy".parse::<Genre>().is_err());
    }

    #[test]
    fn test_mood_parsing() {
        assert_eq!("calm".parse::<Mood>().unwrap(), Mood::Calm);
        assert!("angry".parse::<Mood>().is_err());
        assert_eq!(serde_json::to_string(&Mood::Excited).unwrap(), "\"excited\"");
    }

    #[test]
    fn test_default_selection_is_empty() {
        let selection = Selection::default();
        assert!(selection.genre_mood().is_empty());
        assert_eq!(selection.search_query, "");
        assert_eq!(selection.view_mode, ViewMode::Recommendations);
    }

    #[test]
    fn test_genre_mood_wire_strings() {
        let pair = GenreMood {
            genre: None,
            mood: Some(Mood::Sad),
        };
        assert!(!pair.is_empty());
        assert_eq!(pair.genre_str(), "");
        assert_eq!(pair.mood_str(), "sad");
    }

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::Recommendations.toggled(), ViewMode::Favorites);
        assert_eq!(ViewMode::Favorites.toggled(), ViewMode::Recommendations);
    }
}
