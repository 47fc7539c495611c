pub mod providers;
pub mod recommendations;
pub mod suggestions;

pub use providers::{GameCatalog, HttpCatalog};
pub use recommendations::RecommendationClient;
pub use suggestions::{
    SuggestionFetcher, SuggestionOutcome, SuggestionTicket, Suggestions, MAX_SUGGESTIONS,
    MIN_QUERY_LEN,
};
