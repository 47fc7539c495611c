//! Pure mapping from widget state to display regions.
//!
//! Every render call builds a whole region from scratch; callers replace the
//! previous region wholesale instead of patching it.

pub mod renderer;

pub use renderer::{
    render_favorites, render_list, render_results, render_suggestions, Cover, GameCard, Region,
    RegionKind, Surface,
};
