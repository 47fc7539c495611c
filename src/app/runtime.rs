use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::{
    app::{
        controller::InteractionController,
        events::{Effect, Event},
    },
    config::Config,
    services::{GameCatalog, RecommendationClient, SuggestionFetcher},
    view::Surface,
};

/// Destination for rendered surfaces
pub trait SurfaceSink: Send {
    fn show(&mut self, surface: &Surface);
}

/// Event loop driving the controller
///
/// Events are handled one at a time. Effects run as spawned tasks whose
/// results are posted back into the same queue, so the controller itself is
/// never touched concurrently.
pub struct Runtime<S: SurfaceSink> {
    controller: InteractionController,
    fetcher: SuggestionFetcher,
    recommender: RecommendationClient,
    debounce: Duration,
    sink: S,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
}

impl<S: SurfaceSink + 'static> Runtime<S> {
    pub fn new(catalog: Arc<dyn GameCatalog>, config: &Config, sink: S) -> Self {
        let fetcher = SuggestionFetcher::new(Arc::clone(&catalog));
        let recommender = RecommendationClient::new(catalog, config.recommend_top_n);
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            controller: InteractionController::new(fetcher.clone(), recommender.default_top_n()),
            fetcher,
            recommender,
            debounce: config.debounce(),
            sink,
            events_tx,
            events_rx,
        }
    }

    /// Sender for user events; clone it into whatever produces input
    pub fn events(&self) -> mpsc::UnboundedSender<Event> {
        self.events_tx.clone()
    }

    /// Runs until [`Event::Shutdown`] arrives, then hands back the sink
    pub async fn run(mut self) -> S {
        self.sink.show(self.controller.surface());

        while let Some(event) = self.events_rx.recv().await {
            if matches!(event, Event::Shutdown) {
                tracing::debug!("Runtime shutting down");
                break;
            }

            if let Some(effect) = self.controller.handle(event) {
                self.execute(effect);
            }
            self.sink.show(self.controller.surface());
        }

        self.sink
    }

    fn execute(&self, effect: Effect) {
        let events_tx = self.events_tx.clone();

        match effect {
            Effect::FetchSuggestions(ticket) => {
                let fetcher = self.fetcher.clone();
                let debounce = self.debounce;
                tokio::spawn(async move {
                    if !debounce.is_zero() {
                        tokio::time::sleep(debounce).await;
                    }
                    if !fetcher.is_current(&ticket) {
                        tracing::trace!(seq = ticket.seq(), "Skipping superseded query");
                        return;
                    }

                    let suggestions = fetcher.fetch(&ticket).await;
                    let _ = events_tx.send(Event::SuggestionsArrived(suggestions));
                });
            }
            Effect::ResolveBestMatch {
                request,
                epoch,
                query,
            } => {
                let fetcher = self.fetcher.clone();
                tokio::spawn(async move {
                    let result = fetcher.best_match(&query).await;
                    let _ = events_tx.send(Event::BestMatchArrived {
                        request,
                        epoch,
                        query,
                        result,
                    });
                });
            }
            Effect::Recommend {
                request,
                names,
                top_n,
            } => {
                let recommender = self.recommender.clone();
                tokio::spawn(async move {
                    let result = recommender.recommend(&names, top_n).await;
                    let _ = events_tx.send(Event::RecommendationsArrived { request, result });
                });
            }
        }
    }
}

/// Prints each surface to stdout
pub struct StdoutSink;

impl SurfaceSink for StdoutSink {
    fn show(&mut self, surface: &Surface) {
        println!("{}", surface);
    }
}
