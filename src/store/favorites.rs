use std::collections::HashSet;
use std::sync::Arc;

use crate::models::Game;

/// The user's favorite games, in the order they were added
///
/// Unique by name: adding a game whose name is already present keeps the
/// first payload and reports that nothing changed.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    games: Vec<Arc<Game>>,
    names: HashSet<String>,
}

impl FavoritesStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a game unless one with the same name is already stored
    pub fn add(&mut self, game: Arc<Game>) -> bool {
        if !self.names.insert(game.name.clone()) {
            tracing::debug!(name = %game.name, "Favorite already present, keeping first");
            return false;
        }

        self.games.push(game);
        true
    }

    /// Removes the favorite with this name, if any
    pub fn remove(&mut self, name: &str) -> bool {
        if !self.names.remove(name) {
            return false;
        }

        self.games.retain(|game| game.name != name);
        true
    }

    pub fn clear(&mut self) {
        self.games.clear();
        self.names.clear();
    }

    /// Read-only view in insertion order
    pub fn list(&self) -> &[Arc<Game>] {
        &self.games
    }

    /// Owned snapshot of the favorite names, safe to hold across an await
    pub fn names(&self) -> Vec<String> {
        self.games.iter().map(|game| game.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
