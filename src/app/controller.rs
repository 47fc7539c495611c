use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    app::events::{Effect, Event},
    error::AppError,
    models::Game,
    services::{SuggestionFetcher, SuggestionOutcome, Suggestions},
    store::FavoritesStore,
    view::{render_favorites, render_results, render_suggestions, Region, RegionKind, Surface},
};

const SEARCH_UNAVAILABLE: &str = "Search unavailable, try again";
const ADD_UNAVAILABLE: &str = "Could not look up that game, try again";
const RECOMMEND_UNAVAILABLE: &str = "Recommendations unavailable, try again";

/// What the widget is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    /// A search request (suggestions or add-by-query) is in flight
    Suggesting,
    AwaitingRecommendation,
}

/// Turns user events into state changes, renders and effects
///
/// Every asynchronous result comes back as an event tagged with the request
/// that produced it. Results whose tag is no longer current are dropped, so a
/// slow response can never overwrite a newer one.
pub struct InteractionController {
    fetcher: SuggestionFetcher,
    favorites: FavoritesStore,
    top_n: usize,
    suggestions: Vec<Arc<Game>>,
    results: Vec<Arc<Game>>,
    surface: Surface,
    pending_suggestions: Option<u64>,
    pending_adds: HashSet<u64>,
    next_add: u64,
    pending_recommendation: Option<u64>,
    next_recommendation: u64,
    /// Bumped on clear so an add resolved after it is discarded
    favorites_epoch: u64,
}

impl InteractionController {
    pub fn new(fetcher: SuggestionFetcher, top_n: usize) -> Self {
        Self {
            fetcher,
            favorites: FavoritesStore::new(),
            top_n,
            suggestions: Vec::new(),
            results: Vec::new(),
            surface: Surface::default(),
            pending_suggestions: None,
            pending_adds: HashSet::new(),
            next_add: 0,
            pending_recommendation: None,
            next_recommendation: 0,
            favorites_epoch: 0,
        }
    }

    pub fn state(&self) -> ControllerState {
        if self.pending_recommendation.is_some() {
            ControllerState::AwaitingRecommendation
        } else if self.pending_suggestions.is_some() || !self.pending_adds.is_empty() {
            ControllerState::Suggesting
        } else {
            ControllerState::Idle
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn handle(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::Input(text) => self.on_input(text),
            Event::SelectSuggestion(index) => {
                self.on_select(index);
                None
            }
            Event::AddClicked => self.on_add(),
            Event::RecommendClicked => self.on_recommend(),
            Event::ClearClicked => {
                self.on_clear();
                None
            }
            Event::RemoveFavorite(name) => {
                if self.favorites.remove(&name) {
                    self.render_favorites();
                }
                None
            }
            Event::ClickOutside => {
                if !self.suggestions.is_empty() || self.pending_suggestions.is_some() {
                    self.dismiss_suggestions();
                }
                None
            }
            Event::SuggestionsArrived(suggestions) => {
                self.on_suggestions(suggestions);
                None
            }
            Event::BestMatchArrived {
                request,
                epoch,
                query,
                result,
            } => {
                self.on_best_match(request, epoch, &query, result);
                None
            }
            Event::RecommendationsArrived { request, result } => {
                self.on_recommendations(request, result);
                None
            }
            Event::Shutdown => None,
        }
    }

    fn on_input(&mut self, text: String) -> Option<Effect> {
        let ticket = self.fetcher.issue(&text);
        self.surface.search_field = text;

        if !ticket.is_searchable() {
            self.pending_suggestions = None;
            self.replace_suggestions(Vec::new());
            return None;
        }

        self.pending_suggestions = Some(ticket.seq());
        Some(Effect::FetchSuggestions(ticket))
    }

    fn on_suggestions(&mut self, suggestions: Suggestions) {
        let seq = suggestions.seq();
        if !self.fetcher.accepts(&suggestions) || self.pending_suggestions != Some(seq) {
            tracing::debug!(seq, "Discarding stale suggestions");
            return;
        }

        self.pending_suggestions = None;
        match suggestions.outcome() {
            SuggestionOutcome::Unavailable => {
                self.surface.notice = Some(SEARCH_UNAVAILABLE.to_string());
                self.replace_suggestions(Vec::new());
            }
            SuggestionOutcome::Matches | SuggestionOutcome::Skipped => {
                self.clear_notice(SEARCH_UNAVAILABLE);
                self.replace_suggestions(suggestions.collect());
            }
        }
    }

    fn on_select(&mut self, index: usize) {
        let Some(game) = self.suggestions.get(index).cloned() else {
            tracing::debug!(index, "Ignoring selection outside the suggestion list");
            return;
        };

        self.add_favorite(game);
    }

    fn on_add(&mut self) -> Option<Effect> {
        let query = self.surface.search_field.trim().to_string();
        if query.is_empty() {
            tracing::debug!("Ignoring add with an empty search field");
            return None;
        }

        self.dismiss_suggestions();
        self.next_add += 1;
        self.pending_adds.insert(self.next_add);
        Some(Effect::ResolveBestMatch {
            request: self.next_add,
            epoch: self.favorites_epoch,
            query,
        })
    }

    /// Applies one add-by-query result
    ///
    /// Overlapping adds all land as long as no clear happened since their
    /// click. The search field is only reset while it still shows the query
    /// that was looked up.
    fn on_best_match(
        &mut self,
        request: u64,
        epoch: u64,
        query: &str,
        result: Result<Option<Arc<Game>>, AppError>,
    ) {
        if epoch != self.favorites_epoch || !self.pending_adds.remove(&request) {
            tracing::debug!(request, epoch, query = %query, "Discarding stale add");
            return;
        }

        match result {
            Ok(Some(game)) => {
                self.clear_notice(ADD_UNAVAILABLE);
                if self.favorites.contains(&game.name) {
                    tracing::info!(
                        name = %game.name,
                        query = %query,
                        "Best match already a favorite"
                    );
                } else if self.favorites.add(game) {
                    self.render_favorites();
                }
                self.reset_field_if_showing(query);
            }
            Ok(None) => {
                tracing::info!(query = %query, "No game matched, nothing added");
                self.clear_notice(ADD_UNAVAILABLE);
                self.reset_field_if_showing(query);
            }
            Err(e) => {
                tracing::warn!(error = %e, query = %query, "Add by query failed");
                if e.is_transient() {
                    self.surface.notice = Some(ADD_UNAVAILABLE.to_string());
                }
            }
        }
    }

    fn on_recommend(&mut self) -> Option<Effect> {
        if self.favorites.is_empty() {
            tracing::debug!("Ignoring recommend with no favorites");
            return None;
        }

        self.next_recommendation += 1;
        self.pending_recommendation = Some(self.next_recommendation);
        Some(Effect::Recommend {
            request: self.next_recommendation,
            names: self.favorites.names(),
            top_n: self.top_n,
        })
    }

    fn on_recommendations(&mut self, request: u64, result: Result<Vec<Arc<Game>>, AppError>) {
        if self.pending_recommendation != Some(request) {
            tracing::debug!(request, "Discarding stale recommendations");
            return;
        }

        self.pending_recommendation = None;
        match result {
            Ok(games) => {
                self.clear_notice(RECOMMEND_UNAVAILABLE);
                self.results = games;
                self.surface.results = render_results(&self.results);
            }
            Err(e) => {
                tracing::warn!(error = %e, request, "Recommendation request failed");
                self.surface.notice = Some(RECOMMEND_UNAVAILABLE.to_string());
            }
        }
    }

    fn on_clear(&mut self) {
        self.favorites.clear();
        self.favorites_epoch += 1;
        self.pending_adds.clear();
        self.pending_recommendation = None;

        self.results.clear();
        self.surface.results = Region::empty(RegionKind::Results);
        self.surface.search_field.clear();
        self.surface.notice = None;
        self.dismiss_suggestions();
        self.render_favorites();
    }

    fn add_favorite(&mut self, game: Arc<Game>) {
        if self.favorites.add(game) {
            self.render_favorites();
        }
        self.surface.search_field.clear();
        self.dismiss_suggestions();
    }

    fn reset_field_if_showing(&mut self, query: &str) {
        if self.surface.search_field.trim() == query {
            self.surface.search_field.clear();
            self.dismiss_suggestions();
        }
    }

    fn dismiss_suggestions(&mut self) {
        self.fetcher.invalidate();
        self.pending_suggestions = None;
        self.replace_suggestions(Vec::new());
    }

    fn replace_suggestions(&mut self, games: Vec<Arc<Game>>) {
        self.suggestions = games;
        self.surface.suggestions = render_suggestions(&self.suggestions);
    }

    fn render_favorites(&mut self) {
        self.surface.favorites = render_favorites(self.favorites.list());
    }

    fn clear_notice(&mut self, notice: &str) {
        if self.surface.notice.as_deref() == Some(notice) {
            self.surface.notice = None;
        }
    }
}
