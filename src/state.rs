use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinHandle;

use crate::{
    api::MovieApi,
    config::Config,
    models::{Recommendation, Selection},
    services::{
        visible_items, FavoritesSynchronizer, FeedbackSubmitter, FormStateController, Notifier,
        ProfileSyncEffect, RecommendationFetcher, RetryPolicy,
    },
};

/// Everything the view layer needs to render one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub selection: Selection,
    pub loading: bool,
    pub error: Option<String>,
    /// Raw, unfiltered result of the last resolved fetch
    pub recommendations: Vec<Recommendation>,
    pub favorites: Vec<Recommendation>,
    /// What the active view shows after search filtering
    pub visible: Vec<Recommendation>,
}

/// Explicit state container handed to the view layer by reference
///
/// Each component owns its slice of state; this type only wires them to
/// one service client and exposes the user-facing operations.
#[derive(Clone)]
pub struct AppState {
    pub form: FormStateController,
    pub recommendations: RecommendationFetcher,
    pub favorites: FavoritesSynchronizer,
    pub feedback: FeedbackSubmitter,
}

impl AppState {
    /// Builds the container; must be called from within a tokio runtime
    pub fn new(api: Arc<dyn MovieApi>, notifier: Arc<dyn Notifier>, config: &Config) -> Self {
        let profile_sync = ProfileSyncEffect::new(api.clone(), config.user_id.clone());
        let bootstrap_policy = RetryPolicy::new(
            config.favorites_retry_attempts,
            config.favorites_retry_delay(),
        );

        Self {
            form: FormStateController::new().with_observer(Arc::new(profile_sync)),
            recommendations: RecommendationFetcher::new(api.clone()),
            favorites: FavoritesSynchronizer::new(api.clone(), bootstrap_policy),
            feedback: FeedbackSubmitter::new(api, notifier),
        }
    }

    /// Kicks off the one-time favorites bootstrap
    pub fn start(&self) -> JoinHandle<()> {
        let favorites = self.favorites.clone();
        tokio::spawn(async move { favorites.bootstrap().await })
    }

    /// Submits the form with the current selection
    pub async fn submit(&self) -> JoinHandle<()> {
        let selection = self.form.selection().await;
        let fetcher = self.recommendations.clone();
        tokio::spawn(async move { fetcher.request_recommendations(&selection).await })
    }

    pub fn toggle_favorite(
        &self,
        title: impl Into<String>,
        is_currently_favorite: bool,
    ) -> JoinHandle<()> {
        let title = title.into();
        let favorites = self.favorites.clone();
        tokio::spawn(async move {
            favorites
                .toggle_favorite(&title, is_currently_favorite)
                .await
        })
    }

    /// Submits a rating; the score is forwarded without validation
    pub fn rate(&self, title: impl Into<String>, score: impl Into<Value>) -> JoinHandle<()> {
        let title = title.into();
        let score = score.into();
        let feedback = self.feedback.clone();
        tokio::spawn(async move { feedback.submit(&title, score).await })
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        let selection = self.form.selection().await;
        let fetch = self.recommendations.state().await;
        let favorites = self.favorites.favorites().await;
        let visible = visible_items(
            selection.view_mode,
            &fetch.recommendations,
            &favorites,
            &selection.search_query,
        );

        ViewSnapshot {
            selection,
            loading: fetch.loading,
            error: fetch.error,
            recommendations: fetch.recommendations,
            favorites,
            visible,
        }
    }
}
