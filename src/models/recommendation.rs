use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

/// A movie suggestion as returned by the recommendation service
///
/// Favorites share this shape; `title` is the only identity key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Recommendation {
    /// Display title, usually with the year in parentheses
    pub title: String,
    /// Missing or unparseable years decode as `None`
    #[serde(default, deserialize_with = "deserialize_release_year")]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Average audience rating, when known
    #[serde(default)]
    pub rating: Option<f64>,
    /// Plot summary; null decodes as ""
    #[serde(default, deserialize_with = "deserialize_overview")]
    pub overview: String,
    /// Poster image URL
    #[serde(default)]
    pub poster: Option<String>,
    /// Trailer URL
    #[serde(default)]
    pub trailer: Option<String>,
    /// Whether the title is already a favorite; absent means no
    #[serde(default)]
    pub is_favorite: Option<bool>,
}

impl Recommendation {
    /// Creates a recommendation carrying only a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite.unwrap_or(false)
    }
}

/// The service reports years as integers, numeric strings ("2010") or null.
fn deserialize_release_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearRepr {
        Number(i64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<YearRepr>::deserialize(deserializer)? {
        Some(YearRepr::Number(year)) => i32::try_from(year).ok(),
        Some(YearRepr::Text(text)) => text.trim().parse().ok(),
        Some(YearRepr::Other(_)) | None => None,
    })
}

fn deserialize_overview<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
