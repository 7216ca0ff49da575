use std::sync::Arc;

use serde_json::Value;
use tracing::instrument;

use crate::{api::MovieApi, models::FeedbackEvent};

pub const FEEDBACK_ACKNOWLEDGEMENT: &str = "Feedback submitted!";

/// View-layer hook for blocking acknowledgements
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn acknowledge(&self, message: &str);
}

/// Posts per-title ratings; touches no local state
#[derive(Clone)]
pub struct FeedbackSubmitter {
    api: Arc<dyn MovieApi>,
    notifier: Arc<dyn Notifier>,
}

impl FeedbackSubmitter {
    pub fn new(api: Arc<dyn MovieApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }

    /// Sends `score` for `title` as-is; range checking is left to the service
    #[instrument(skip(self))]
    pub async fn submit(&self, title: &str, score: Value) {
        let event = FeedbackEvent {
            title: title.to_string(),
            score,
        };

        match self.api.submit_feedback(&event).await {
            Ok(()) => {
                tracing::info!("Feedback submitted");
                self.notifier.acknowledge(FEEDBACK_ACKNOWLEDGEMENT);
            }
            Err(e) => tracing::error!(error = %e, "Feedback error"),
        }
    }
}
