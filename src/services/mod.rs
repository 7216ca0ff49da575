pub mod favorites;
pub mod feedback;
pub mod filter;
pub mod form;
pub mod profile_sync;
pub mod recommendations;
pub mod retry;

pub use favorites::FavoritesSynchronizer;
pub use feedback::{FeedbackSubmitter, Notifier};
pub use filter::{filter_recommendations, visible_items};
pub use form::{FormStateController, SelectionObserver};
pub use profile_sync::ProfileSyncEffect;
pub use recommendations::{FetchState, RecommendationFetcher, DEFAULT_FETCH_ERROR};
pub use retry::RetryPolicy;
