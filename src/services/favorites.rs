use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::instrument;

use crate::{
    api::MovieApi,
    error::ClientResult,
    models::{FavoriteAction, FavoriteRequest, Recommendation},
    services::retry::RetryPolicy,
};

/// The only status the bootstrap accepts as a successful read
const BOOTSTRAP_SUCCESS_STATUS: u16 = 200;

/// Keeps a local mirror of the server's favorites list
///
/// The server is authoritative. The mirror is only ever replaced wholesale
/// from a full read, never patched locally. Toggles are not serialized:
/// when several resyncs overlap, the mirror reflects whichever resolves last.
#[derive(Clone)]
pub struct FavoritesSynchronizer {
    api: Arc<dyn MovieApi>,
    mirror: Arc<RwLock<Vec<Recommendation>>>,
    bootstrap_policy: RetryPolicy,
}

impl FavoritesSynchronizer {
    pub fn new(api: Arc<dyn MovieApi>, bootstrap_policy: RetryPolicy) -> Self {
        Self {
            api,
            mirror: Arc::new(RwLock::new(Vec::new())),
            bootstrap_policy,
        }
    }

    pub async fn favorites(&self) -> Vec<Recommendation> {
        self.mirror.read().await.clone()
    }

    /// Initial load with bounded retry
    ///
    /// Failures only reach the log. If every attempt fails the mirror stays
    /// empty and nothing is surfaced to the user.
    #[instrument(skip(self))]
    pub async fn bootstrap(&self) {
        let api = self.api.clone();
        let snapshot = self
            .bootstrap_policy
            .run(
                "favorites_bootstrap",
                |_attempt| {
                    let api = api.clone();
                    async move { api.fetch_favorites().await }
                },
                |snapshot| snapshot.status == BOOTSTRAP_SUCCESS_STATUS,
            )
            .await;

        match snapshot {
            Some(snapshot) => {
                tracing::info!(count = snapshot.favorites.len(), "Favorites loaded");
                *self.mirror.write().await = snapshot.favorites;
            }
            None => tracing::warn!(
                attempts = self.bootstrap_policy.max_attempts,
                "Favorites unavailable, starting with an empty list"
            ),
        }
    }

    /// Adds or removes `title`, then resyncs the whole mirror
    ///
    /// The two steps are not transactional: if the mutation lands but the
    /// resync fails, the mirror stays stale until the next successful resync.
    #[instrument(skip(self))]
    pub async fn toggle_favorite(&self, title: &str, is_currently_favorite: bool) {
        if let Err(e) = self.try_toggle(title, is_currently_favorite).await {
            tracing::error!(title = %title, error = %e, "Favorite error");
        }
    }

    async fn try_toggle(&self, title: &str, is_currently_favorite: bool) -> ClientResult<()> {
        let request = FavoriteRequest {
            title: title.to_string(),
            action: FavoriteAction::for_toggle(is_currently_favorite),
        };

        self.api.mutate_favorite(&request).await?;
        tracing::debug!(title = %title, action = ?request.action, "Favorite mutated");

        self.resync().await
    }

    /// Replaces the mirror with the server's current list
    pub async fn resync(&self) -> ClientResult<()> {
        let snapshot = self.api.fetch_favorites().await?;
        tracing::debug!(count = snapshot.favorites.len(), "Favorites resynced");
        *self.mirror.write().await = snapshot.favorites;
        Ok(())
    }
}
