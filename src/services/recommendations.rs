use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Game,
    services::providers::GameCatalog,
};

/// Turns a snapshot of favorite names into a ranked recommendation list
#[derive(Clone)]
pub struct RecommendationClient {
    catalog: Arc<dyn GameCatalog>,
    default_top_n: usize,
}

impl RecommendationClient {
    pub fn new(catalog: Arc<dyn GameCatalog>, default_top_n: usize) -> Self {
        Self {
            catalog,
            default_top_n,
        }
    }

    pub fn default_top_n(&self) -> usize {
        self.default_top_n
    }

    /// Requests recommendations for the given favorites
    ///
    /// An empty favorites list or a zero `top_n` is rejected before any
    /// request is made. The result keeps the catalog's order and never holds
    /// more than `top_n` games.
    pub async fn recommend(&self, names: &[String], top_n: usize) -> AppResult<Vec<Arc<Game>>> {
        if names.is_empty() {
            return Err(AppError::GuardViolation(
                "Cannot recommend without favorites".to_string(),
            ));
        }
        if top_n == 0 {
            return Err(AppError::GuardViolation(
                "Recommendation count must be positive".to_string(),
            ));
        }

        let games = self.catalog.recommend(names, top_n).await?;
        if games.len() > top_n {
            tracing::debug!(
                requested = top_n,
                returned = games.len(),
                "Catalog returned extra recommendations, truncating"
            );
        }

        Ok(games.into_iter().take(top_n).map(Arc::new).collect())
    }
}
