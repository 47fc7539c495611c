use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::{
    error::{AppError, AppResult},
    models::Game,
    services::providers::GameCatalog,
};

/// Queries shorter than this never leave the widget
pub const MIN_QUERY_LEN: usize = 3;

/// Most suggestions ever shown for one query
pub const MAX_SUGGESTIONS: usize = 10;

/// A query tagged with its position in the keystroke sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionTicket {
    seq: u64,
    query: String,
}

impl SuggestionTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the query is long enough to be sent to the catalog
    pub fn is_searchable(&self) -> bool {
        self.query.chars().count() >= MIN_QUERY_LEN
    }
}

/// How a suggestion fetch ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// The catalog answered (possibly with zero games)
    Matches,
    /// The query was too short to send
    Skipped,
    /// The catalog could not be reached or answered garbage
    Unavailable,
}

/// Suggestions for one ticket
///
/// A single-pass iterator over at most [`MAX_SUGGESTIONS`] games. Consuming
/// it cannot be restarted; the next keystroke produces a fresh one.
#[derive(Debug)]
pub struct Suggestions {
    seq: u64,
    outcome: SuggestionOutcome,
    games: std::iter::Take<std::vec::IntoIter<Arc<Game>>>,
}

impl Suggestions {
    fn new(seq: u64, outcome: SuggestionOutcome, games: Vec<Game>) -> Self {
        let games: Vec<Arc<Game>> = games.into_iter().map(Arc::new).collect();
        Self {
            seq,
            outcome,
            games: games.into_iter().take(MAX_SUGGESTIONS),
        }
    }

    fn empty(seq: u64, outcome: SuggestionOutcome) -> Self {
        Self::new(seq, outcome, Vec::new())
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn outcome(&self) -> SuggestionOutcome {
        self.outcome
    }
}

impl Iterator for Suggestions {
    type Item = Arc<Game>;

    fn next(&mut self) -> Option<Self::Item> {
        self.games.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.games.size_hint()
    }
}

/// Fetches search suggestions and tracks which query is the latest
///
/// Clones share the sequence counter, so a ticket issued through one clone
/// supersedes tickets issued through any other.
#[derive(Clone)]
pub struct SuggestionFetcher {
    catalog: Arc<dyn GameCatalog>,
    latest: Arc<AtomicU64>,
}

impl SuggestionFetcher {
    pub fn new(catalog: Arc<dyn GameCatalog>) -> Self {
        Self {
            catalog,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Tags a query as the newest one, superseding every earlier ticket
    pub fn issue(&self, query: &str) -> SuggestionTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        SuggestionTicket {
            seq,
            query: query.trim().to_string(),
        }
    }

    /// Supersedes any in-flight ticket without starting a new query
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: &SuggestionTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.seq
    }

    /// Whether a resolved result still belongs to the latest query
    pub fn accepts(&self, suggestions: &Suggestions) -> bool {
        self.latest.load(Ordering::SeqCst) == suggestions.seq
    }

    /// Resolves a ticket into suggestions
    ///
    /// Never fails: short queries are skipped locally and catalog errors are
    /// logged and reported as [`SuggestionOutcome::Unavailable`].
    pub async fn fetch(&self, ticket: &SuggestionTicket) -> Suggestions {
        if !ticket.is_searchable() {
            return Suggestions::empty(ticket.seq, SuggestionOutcome::Skipped);
        }

        match self.catalog.search_games(&ticket.query).await {
            Ok(games) => Suggestions::new(ticket.seq, SuggestionOutcome::Matches, games),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    query = %ticket.query,
                    seq = ticket.seq,
                    catalog = self.catalog.name(),
                    "Suggestion fetch failed"
                );
                Suggestions::empty(ticket.seq, SuggestionOutcome::Unavailable)
            }
        }
    }

    /// Issues and resolves a query in one step
    ///
    /// For callers without an event loop. The runtime issues and fetches
    /// separately so it can debounce in between.
    pub async fn fetch_suggestions(&self, query: &str) -> Suggestions {
        let ticket = self.issue(query);
        self.fetch(&ticket).await
    }

    /// Best catalog match for an explicit add, or `None` when nothing matches
    ///
    /// Unlike suggestions, any non-empty query is searched and failures are
    /// returned to the caller.
    pub async fn best_match(&self, query: &str) -> AppResult<Option<Arc<Game>>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::GuardViolation(
                "Search query cannot be empty".to_string(),
            ));
        }

        let games = self.catalog.search_games(query).await?;
        Ok(games.into_iter().next().map(Arc::new))
    }
}
