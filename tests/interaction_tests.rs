use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use game_picks::{
    app::{Event, Runtime, SurfaceSink},
    config::Config,
    error::{AppError, AppResult},
    models::Game,
    services::GameCatalog,
    view::Surface,
};

/// In-memory catalog answering each query after a scripted delay
#[derive(Default)]
struct ScriptedCatalog {
    delays: HashMap<String, Duration>,
    recommendations: Vec<Game>,
    search_calls: Mutex<Vec<String>>,
    recommend_calls: Mutex<Vec<(Vec<String>, usize)>>,
    offline: bool,
}

impl ScriptedCatalog {
    fn with_delay(mut self, query: &str, millis: u64) -> Self {
        self.delays.insert(query.to_string(), Duration::from_millis(millis));
        self
    }

    fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    fn recommend_calls(&self) -> Vec<(Vec<String>, usize)> {
        self.recommend_calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl GameCatalog for ScriptedCatalog {
    async fn search_games(&self, query: &str) -> AppResult<Vec<Game>> {
        self.search_calls.lock().unwrap().push(query.to_string());
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        if self.offline {
            return Err(AppError::ExternalApi("status 503".to_string()));
        }

        let cover = |n: u32| format!("https://img/{}-{}.jpg", query, n);
        Ok(vec![
            Game::new(format!("{} one", query)).with_cover(cover(1)),
            Game::new(format!("{} two", query)).with_cover(cover(2)),
        ])
    }

    async fn recommend(&self, names: &[String], top_n: usize) -> AppResult<Vec<Game>> {
        self.recommend_calls
            .lock()
            .unwrap()
            .push((names.to_vec(), top_n));
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok(self.recommendations.clone())
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

#[derive(Default)]
struct RecordingSink {
    surfaces: Vec<Surface>,
}

impl SurfaceSink for RecordingSink {
    fn show(&mut self, surface: &Surface) {
        self.surfaces.push(surface.clone());
    }
}

impl RecordingSink {
    fn last(&self) -> &Surface {
        self.surfaces.last().expect("at least the initial render")
    }
}

fn config(debounce_ms: u64) -> Config {
    Config {
        suggest_debounce_ms: debounce_ms,
        ..Config::default()
    }
}

/// Feeds events with a pause after each, then shuts down and returns the sink
async fn drive(
    catalog: Arc<ScriptedCatalog>,
    config: Config,
    script: Vec<(Event, u64)>,
) -> RecordingSink {
    let runtime = Runtime::new(catalog, &config, RecordingSink::default());
    let events = runtime.events();
    let handle = tokio::spawn(runtime.run());

    for (event, pause_ms) in script {
        events.send(event).unwrap();
        tokio::time::sleep(Duration::from_millis(pause_ms)).await;
    }
    tokio::time::sleep(Duration::from_secs(5)).await;
    events.send(Event::Shutdown).unwrap();

    handle.await.unwrap()
}

fn input(text: &str) -> Event {
    Event::Input(text.to_string())
}

#[tokio::test(start_paused = true)]
async fn test_short_queries_never_reach_catalog() {
    let catalog = Arc::new(ScriptedCatalog::default());

    let sink = drive(
        Arc::clone(&catalog),
        config(0),
        vec![(input("d"), 10), (input("dr"), 10), (input(""), 10)],
    )
    .await;

    assert!(catalog.search_calls().is_empty());
    assert!(sink.surfaces.iter().all(|s| s.suggestions.is_empty()));
}

#[tokio::test(start_paused = true)]
async fn test_stale_suggestions_never_render() {
    // "dre" answers long after "dred" does
    let catalog = Arc::new(
        ScriptedCatalog::default()
            .with_delay("dre", 500)
            .with_delay("dred", 100),
    );

    let sink = drive(
        Arc::clone(&catalog),
        config(0),
        vec![(input("dr"), 10), (input("dre"), 10), (input("dred"), 10)],
    )
    .await;

    assert_eq!(catalog.search_calls(), vec!["dre", "dred"]);
    assert!(sink
        .surfaces
        .iter()
        .all(|s| !s.suggestions.names().contains(&"dre one")));
    assert_eq!(
        sink.last().suggestions.names(),
        vec!["dred one", "dred two"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_debounce_skips_superseded_keystrokes() {
    let catalog = Arc::new(ScriptedCatalog::default());

    let sink = drive(
        Arc::clone(&catalog),
        config(250),
        vec![
            (input("hol"), 50),
            (input("holl"), 50),
            (input("hollo"), 50),
            (input("hollow"), 400),
        ],
    )
    .await;

    assert_eq!(catalog.search_calls(), vec!["hollow"]);
    assert_eq!(
        sink.last().suggestions.names(),
        vec!["hollow one", "hollow two"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_duplicate_add_keeps_first_payload() {
    let catalog = Arc::new(ScriptedCatalog::default());

    let sink = drive(
        Arc::clone(&catalog),
        config(0),
        vec![
            (input("Dredge"), 10),
            (Event::SelectSuggestion(0), 10),
            (input("Dredge"), 10),
            (Event::AddClicked, 10),
        ],
    )
    .await;

    let favorites = &sink.last().favorites;
    assert_eq!(favorites.names(), vec!["Dredge one"]);
    assert_eq!(
        favorites.cards[0].cover.as_ref().map(|c| c.src.as_str()),
        Some("https://img/Dredge-1.jpg")
    );
    assert!(sink.last().search_field.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_adds_both_land() {
    // The first lookup is still in flight when the second add is clicked
    let catalog = Arc::new(ScriptedCatalog::default().with_delay("Dredge", 300));

    let sink = drive(
        Arc::clone(&catalog),
        config(0),
        vec![
            (input("Dr"), 10),
            (input("Dredge"), 10),
            (Event::AddClicked, 10),
            (input("Hades"), 10),
            (Event::AddClicked, 10),
            (input("Hol"), 10),
        ],
    )
    .await;

    let last = sink.last();
    assert_eq!(last.favorites.names(), vec!["Hades one", "Dredge one"]);
    assert_eq!(last.search_field, "Hol");
    assert_eq!(last.suggestions.names(), vec!["Hol one", "Hol two"]);
}

#[tokio::test(start_paused = true)]
async fn test_recommend_renders_collaborator_order() {
    let catalog = Arc::new(ScriptedCatalog {
        recommendations: vec![
            Game::new("Sunless Sea").with_genres(["Adventure"]),
            Game::new("Pyre"),
        ],
        ..ScriptedCatalog::default()
    });

    let sink = drive(
        Arc::clone(&catalog),
        config(0),
        vec![
            (Event::RecommendClicked, 10),
            (input("Dredge"), 10),
            (Event::AddClicked, 10),
            (input("Hades"), 10),
            (Event::AddClicked, 10),
            (Event::RecommendClicked, 10),
        ],
    )
    .await;

    assert_eq!(
        catalog.recommend_calls(),
        vec![(vec!["Dredge one".to_string(), "Hades one".to_string()], 5)]
    );

    let results = &sink.last().results;
    assert_eq!(results.names(), vec!["Sunless Sea", "Pyre"]);
    assert_eq!(results.cards[0].genres.as_deref(), Some("Adventure"));
    assert_eq!(results.cards[1].genres.as_deref(), Some("No genres"));
}

#[tokio::test(start_paused = true)]
async fn test_clear_empties_favorites_and_results() {
    let catalog = Arc::new(ScriptedCatalog {
        recommendations: vec![Game::new("Pyre")],
        ..ScriptedCatalog::default()
    });

    let sink = drive(
        Arc::clone(&catalog),
        config(0),
        vec![
            (input("Hades"), 10),
            (Event::AddClicked, 10),
            (Event::RecommendClicked, 100),
            (input("Celeste"), 10),
            (Event::ClearClicked, 10),
        ],
    )
    .await;

    assert!(sink
        .surfaces
        .iter()
        .any(|s| s.results.names() == vec!["Pyre"]));

    let last = sink.last();
    assert!(last.favorites.is_empty());
    assert!(last.results.is_empty());
    assert!(last.suggestions.is_empty());
    assert!(last.search_field.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_offline_catalog_keeps_widget_interactive() {
    let catalog = Arc::new(ScriptedCatalog {
        offline: true,
        ..ScriptedCatalog::default()
    });

    let sink = drive(
        Arc::clone(&catalog),
        config(0),
        vec![
            (input("Dredge"), 10),
            (Event::AddClicked, 10),
            (Event::RecommendClicked, 10),
        ],
    )
    .await;

    let last = sink.last();
    assert!(last.favorites.is_empty());
    assert!(last.notice.is_some());
    assert_eq!(last.search_field, "Dredge");
    assert!(catalog.recommend_calls().is_empty());
}
