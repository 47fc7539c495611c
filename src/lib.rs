//! Favorite-games widget: search suggestions, a deduplicated favorites list
//! and recommendations from a remote scoring service.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod view;
