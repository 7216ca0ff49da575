/// reqwest-backed implementation of `MovieApi`
///
/// Endpoints are fixed paths under one base URL. No authentication headers
/// are sent; each request carries an `x-request-id` purely so client and
/// server logs can be correlated.
use crate::{
    api::MovieApi,
    error::{ClientError, ClientResult},
    models::{
        ErrorBody, FavoriteRequest, FavoritesResponse, FavoritesSnapshot, FeedbackEvent,
        Recommendation, RecommendRequest, RecommendationsResponse, UserProfile,
    },
};
use reqwest::{Client as HttpClient, RequestBuilder, Response};
use uuid::Uuid;

/// HTTP header name for the request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct HttpMovieApi {
    http_client: HttpClient,
    api_url: String,
}

impl HttpMovieApi {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Sends a request tagged with a fresh request ID
    async fn send(&self, builder: RequestBuilder, path: &str) -> ClientResult<Response> {
        let request_id = Uuid::new_v4();
        tracing::debug!(request_id = %request_id, path = %path, "Sending request");

        let response = builder
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(
                    request_id = %request_id,
                    path = %path,
                    error = %e,
                    "Transport failure"
                );
                ClientError::from(e)
            })?;

        tracing::debug!(
            request_id = %request_id,
            path = %path,
            status = %response.status(),
            "Response received"
        );

        Ok(response)
    }

    /// Converts a non-success response, reading the structured `error` field when present
    async fn server_error(response: Response) -> ClientError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error);
        ClientError::Server { status, message }
    }
}

#[async_trait::async_trait]
impl MovieApi for HttpMovieApi {
    async fn recommend(&self, request: &RecommendRequest) -> ClientResult<Vec<Recommendation>> {
        let path = "/recommend";
        let response = self
            .send(self.http_client.post(self.url(path)).json(request), path)
            .await?;

        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        let body: RecommendationsResponse = response.json().await?;
        Ok(body.recommendations.unwrap_or_default())
    }

    async fn submit_feedback(&self, event: &FeedbackEvent) -> ClientResult<()> {
        let path = "/feedback";
        let response = self
            .send(self.http_client.post(self.url(path)).json(event), path)
            .await?;

        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        Ok(())
    }

    async fn mutate_favorite(&self, request: &FavoriteRequest) -> ClientResult<()> {
        let path = "/favorite";
        let response = self
            .send(self.http_client.post(self.url(path)).json(request), path)
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Server {
                status: response.status().as_u16(),
                message: None,
            });
        }

        Ok(())
    }

    async fn fetch_favorites(&self) -> ClientResult<FavoritesSnapshot> {
        let path = "/favorites";
        let response = self.send(self.http_client.get(self.url(path)), path).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: None,
            });
        }

        let body: FavoritesResponse = response.json().await?;
        Ok(FavoritesSnapshot {
            status: status.as_u16(),
            favorites: body.favorites.unwrap_or_default(),
        })
    }

    async fn push_profile(&self, profile: &UserProfile) -> ClientResult<()> {
        let path = "/profile";
        let response = self
            .send(self.http_client.post(self.url(path)).json(profile), path)
            .await?;

        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        Ok(())
    }
}
