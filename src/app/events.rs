use std::sync::Arc;

use crate::{
    error::AppResult,
    models::Game,
    services::{SuggestionTicket, Suggestions},
};

/// Everything that can happen to the widget
#[derive(Debug)]
pub enum Event {
    /// The search field now holds this text
    Input(String),
    /// A suggestion was clicked, by its position in the shown list
    SelectSuggestion(usize),
    AddClicked,
    RecommendClicked,
    ClearClicked,
    RemoveFavorite(String),
    /// A click landed outside the search area
    ClickOutside,
    SuggestionsArrived(Suggestions),
    BestMatchArrived {
        request: u64,
        epoch: u64,
        query: String,
        result: AppResult<Option<Arc<Game>>>,
    },
    RecommendationsArrived {
        request: u64,
        result: AppResult<Vec<Arc<Game>>>,
    },
    /// Stops the runtime loop
    Shutdown,
}

/// Asynchronous work requested by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchSuggestions(SuggestionTicket),
    ResolveBestMatch {
        request: u64,
        epoch: u64,
        query: String,
    },
    Recommend {
        request: u64,
        names: Vec<String>,
        top_n: usize,
    },
}
