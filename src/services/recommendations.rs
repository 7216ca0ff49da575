use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::instrument;

use crate::{
    api::MovieApi,
    models::{RecommendRequest, Recommendation, Selection},
};

/// Shown when the service fails without saying why
pub const DEFAULT_FETCH_ERROR: &str = "Failed to fetch recommendations";

/// Loading, error and result state of the recommendations view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchState {
    pub recommendations: Vec<Recommendation>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Issues one recommendation request per form submission
///
/// Submissions are neither de-duplicated nor cancelled. When several are in
/// flight, whichever response resolves last determines the final state,
/// regardless of the order the requests were made in.
#[derive(Clone)]
pub struct RecommendationFetcher {
    api: Arc<dyn MovieApi>,
    state: Arc<RwLock<FetchState>>,
}

impl RecommendationFetcher {
    pub fn new(api: Arc<dyn MovieApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(FetchState::default())),
        }
    }

    pub async fn state(&self) -> FetchState {
        self.state.read().await.clone()
    }

    /// Clears the previous result, then fetches recommendations for `selection`
    ///
    /// Never fails: errors become visible text in the state. A resolved
    /// success clears any error and a resolved failure clears the list, so a
    /// non-empty error always comes with an empty list.
    #[instrument(skip(self))]
    pub async fn request_recommendations(&self, selection: &Selection) {
        let request = RecommendRequest::from(selection);

        {
            let mut state = self.state.write().await;
            state.error = None;
            state.recommendations.clear();
            state.loading = true;
        }

        tracing::info!(
            genre = %request.genre,
            mood = %request.mood,
            "Requesting recommendations"
        );

        let result = self.api.recommend(&request).await;

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(recommendations) => {
                tracing::info!(
                    genre = %request.genre,
                    results = recommendations.len(),
                    "Recommendations received"
                );
                state.error = None;
                state.recommendations = recommendations;
            }
            Err(e) => {
                tracing::warn!(genre = %request.genre, error = %e, "Recommendation fetch failed");
                state.recommendations.clear();
                state.error = Some(e.user_message(DEFAULT_FETCH_ERROR));
            }
        }
    }
}
