use std::sync::Arc;

use tokio::{runtime::Handle, task::JoinHandle};

use crate::{
    api::MovieApi,
    models::{GenreMood, UserProfile},
    services::form::SelectionObserver,
};

/// Pushes genre/mood transitions to the server-side profile
///
/// Each qualifying transition spawns its own push. Pushes are neither
/// debounced nor cancelled, so overlapping pushes may land out of order and
/// an older selection can overwrite a newer one on the server.
#[derive(Clone)]
pub struct ProfileSyncEffect {
    api: Arc<dyn MovieApi>,
    user_id: String,
    runtime: Handle,
}

impl ProfileSyncEffect {
    /// Must be called from within a tokio runtime
    pub fn new(api: Arc<dyn MovieApi>, user_id: impl Into<String>) -> Self {
        Self {
            api,
            user_id: user_id.into(),
            runtime: Handle::current(),
        }
    }

    /// Dispatches a push when `current` differs from `previous` and is not empty
    ///
    /// Returns the push task so tests can await it; production callers drop it.
    pub fn observe(&self, previous: GenreMood, current: GenreMood) -> Option<JoinHandle<()>> {
        if previous == current || current.is_empty() {
            return None;
        }

        let profile = UserProfile::from_selection(self.user_id.as_str(), &current);
        let api = self.api.clone();

        Some(self.runtime.spawn(async move {
            match api.push_profile(&profile).await {
                Ok(()) => tracing::debug!(
                    user_id = %profile.user_id,
                    mood = %profile.mood,
                    "Profile pushed"
                ),
                Err(e) => tracing::error!(
                    user_id = %profile.user_id,
                    error = %e,
                    "Profile update failed"
                ),
            }
        }))
    }
}

impl SelectionObserver for ProfileSyncEffect {
    fn selection_changed(&self, previous: GenreMood, current: GenreMood) {
        // fire-and-forget
        let _ = self.observe(previous, current);
    }
}
