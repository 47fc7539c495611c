use serde::{Deserialize, Serialize};

mod game;

pub use game::Game;

// ============================================================================
// Recommender Service Wire Types
// ============================================================================

/// Response from GET /games?query=...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Game>,
}

/// Body of POST /recommend
///
/// Only names travel to the service; it is the source of truth for covers
/// and genres in the response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendRequest {
    pub games: Vec<String>,
    pub top_n: usize,
}

/// Response from POST /recommend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Game>,
}
