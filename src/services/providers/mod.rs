/// Game catalog abstraction
///
/// The widget never owns search or scoring logic. Both live behind a remote
/// service, and this module provides the pluggable seam to it: the real HTTP
/// client in production and mocks/fakes in tests.
use crate::{error::AppResult, models::Game};

pub mod http;

pub use http::HttpCatalog;

/// Trait for search/recommendation collaborators
///
/// Both operations are single attempts. Callers decide what a failure means
/// for the interface; implementations only report it.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GameCatalog: Send + Sync {
    /// Search games whose name matches the query, best match first
    async fn search_games(&self, query: &str) -> AppResult<Vec<Game>>;

    /// Ask for up to `top_n` games similar to the named favorites
    async fn recommend(&self, names: &[String], top_n: usize) -> AppResult<Vec<Game>>;

    /// Catalog name for logging and debugging
    fn name(&self) -> &'static str;
}
