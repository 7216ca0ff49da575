use crate::models::{Recommendation, ViewMode};

/// Narrows recommendations to titles containing `query`, ignoring case
///
/// An empty query keeps the whole list. Order is always preserved.
pub fn filter_recommendations(
    recommendations: &[Recommendation],
    query: &str,
) -> Vec<Recommendation> {
    if query.is_empty() {
        return recommendations.to_vec();
    }

    let needle = query.to_lowercase();
    recommendations
        .iter()
        .filter(|rec| rec.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Items the view layer should render for the active view
///
/// Search text only narrows the recommendations view; favorites are shown
/// as mirrored.
pub fn visible_items(
    view_mode: ViewMode,
    recommendations: &[Recommendation],
    favorites: &[Recommendation],
    query: &str,
) -> Vec<Recommendation> {
    match view_mode {
        ViewMode::Recommendations => filter_recommendations(recommendations, query),
        ViewMode::Favorites => favorites.to_vec(),
    }
}
