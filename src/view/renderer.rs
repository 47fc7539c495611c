use std::fmt;
use std::sync::Arc;

use crate::{models::Game, services::MAX_SUGGESTIONS};

/// Which display region a list belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Suggestions,
    Favorites,
    Results,
}

impl RegionKind {
    pub fn title(&self) -> &'static str {
        match self {
            RegionKind::Suggestions => "Suggestions",
            RegionKind::Favorites => "Favorites",
            RegionKind::Results => "Recommended for you",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    pub src: String,
    pub alt: String,
}

/// One rendered game entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCard {
    pub name: String,
    pub cover: Option<Cover>,
    /// Comma-joined genres, present only when the region shows genres
    pub genres: Option<String>,
}

/// The full content of one display region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub kind: RegionKind,
    pub cards: Vec<GameCard>,
}

impl Region {
    pub fn empty(kind: RegionKind) -> Self {
        Self {
            kind,
            cards: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.name.as_str()).collect()
    }
}

fn card(game: &Game, show_genres: bool) -> GameCard {
    let cover = game.cover_url.as_ref().map(|src| Cover {
        src: src.clone(),
        alt: format!("Cover of {}", game.name),
    });

    let genres = show_genres.then(|| match &game.genres {
        Some(genres) if !genres.is_empty() => genres.join(", "),
        _ => "No genres".to_string(),
    });

    GameCard {
        name: game.name.clone(),
        cover,
        genres,
    }
}

/// Builds a complete replacement for a region from the given games
pub fn render_list(kind: RegionKind, games: &[Arc<Game>], show_genres: bool) -> Region {
    Region {
        kind,
        cards: games.iter().map(|game| card(game, show_genres)).collect(),
    }
}

pub fn render_suggestions(games: &[Arc<Game>]) -> Region {
    let shown = &games[..games.len().min(MAX_SUGGESTIONS)];
    render_list(RegionKind::Suggestions, shown, false)
}

pub fn render_favorites(games: &[Arc<Game>]) -> Region {
    render_list(RegionKind::Favorites, games, false)
}

pub fn render_results(games: &[Arc<Game>]) -> Region {
    render_list(RegionKind::Results, games, true)
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.kind.title(), self.cards.len())?;
        for (index, card) in self.cards.iter().enumerate() {
            write!(f, "  {:>2}. {}", index + 1, card.name)?;
            if let Some(genres) = &card.genres {
                write!(f, " [{}]", genres)?;
            }
            if let Some(cover) = &card.cover {
                write!(f, " <{}>", cover.src)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Everything the widget shows at once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub search_field: String,
    pub suggestions: Region,
    pub favorites: Region,
    pub results: Region,
    /// One-line hint after a recoverable failure
    pub notice: Option<String>,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            search_field: String::new(),
            suggestions: Region::empty(RegionKind::Suggestions),
            favorites: Region::empty(RegionKind::Favorites),
            results: Region::empty(RegionKind::Results),
            notice: None,
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search: {}", self.search_field)?;
        if !self.suggestions.is_empty() {
            write!(f, "{}", self.suggestions)?;
        }
        write!(f, "{}", self.favorites)?;
        write!(f, "{}", self.results)?;
        if let Some(notice) = &self.notice {
            writeln!(f, "! {}", notice)?;
        }
        Ok(())
    }
}
