/// Recommendation service abstraction
///
/// Everything the orchestration layer knows about the remote service goes
/// through `MovieApi`. Components hold it as `Arc<dyn MovieApi>` so tests can
/// swap in mocks or gated fakes that control response ordering.
use crate::{
    error::ClientResult,
    models::{
        FavoriteRequest, FavoritesSnapshot, FeedbackEvent, Recommendation, RecommendRequest,
        UserProfile,
    },
};

pub mod http;

pub use http::HttpMovieApi;

/// Operations consumed from the recommendation service
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieApi: Send + Sync {
    /// Fetch recommendations for a genre/mood pair
    ///
    /// A success body without a `recommendations` field yields an empty list.
    async fn recommend(&self, request: &RecommendRequest) -> ClientResult<Vec<Recommendation>>;

    /// Post a rating for a title
    async fn submit_feedback(&self, event: &FeedbackEvent) -> ClientResult<()>;

    /// Add or remove a title from the server-side favorites
    ///
    /// The response body is never read; only the status matters.
    async fn mutate_favorite(&self, request: &FavoriteRequest) -> ClientResult<()>;

    /// Read the authoritative favorites list
    ///
    /// Any 2xx status is returned as a snapshot carrying that status, so
    /// callers can apply stricter success predicates of their own.
    async fn fetch_favorites(&self) -> ClientResult<FavoritesSnapshot>;

    /// Replace the user's preference profile
    async fn push_profile(&self, profile: &UserProfile) -> ClientResult<()>;
}
