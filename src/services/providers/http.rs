/// HTTP client for the game recommender service
///
/// API Flow:
/// 1. Search: GET /games?query=... → { "results": [Game] }
/// 2. Recommend: POST /recommend { "games": [...], "top_n": n } → { "recommendations": [Game] }
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{Game, RecommendRequest, RecommendResponse, SearchResponse},
    services::providers::GameCatalog,
};
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct HttpCatalog {
    http_client: HttpClient,
    api_url: String,
}

impl HttpCatalog {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http_client,
            api_url: config.recommender_api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Checks the status and decodes the body, keeping the raw text for diagnostics
    async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Recommender API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize recommender response"
            );
            AppError::Decode(e)
        })
    }
}

#[async_trait::async_trait]
impl GameCatalog for HttpCatalog {
    #[tracing::instrument(skip(self))]
    async fn search_games(&self, query: &str) -> AppResult<Vec<Game>> {
        let url = format!("{}/games", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await?;

        let search: SearchResponse = Self::decode(response).await?;

        tracing::info!(
            query = %query,
            results = search.results.len(),
            catalog = self.name(),
            "Game search completed"
        );

        Ok(search.results)
    }

    #[tracing::instrument(skip(self, names), fields(favorites = names.len()))]
    async fn recommend(&self, names: &[String], top_n: usize) -> AppResult<Vec<Game>> {
        let url = format!("{}/recommend", self.api_url);
        let body = RecommendRequest {
            games: names.to_vec(),
            top_n,
        };

        let response = self.http_client.post(&url).json(&body).send().await?;
        let recommended: RecommendResponse = Self::decode(response).await?;

        tracing::info!(
            results = recommended.recommendations.len(),
            catalog = self.name(),
            "Recommendations fetched"
        );

        Ok(recommended.recommendations)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
