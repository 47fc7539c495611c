use std::sync::Arc;

use game_picks::{
    app::{commands::HELP, parse_command, Event, Runtime, StdoutSink},
    config::Config,
    services::HttpCatalog,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("game_picks=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let catalog = HttpCatalog::new(&config)?;
    tracing::info!(api_url = %config.recommender_api_url, "Starting game picks");

    let runtime = Runtime::new(Arc::new(catalog), &config, StdoutSink);
    let events = runtime.events();

    // Forward terminal lines as widget events
    tokio::spawn(async move {
        println!("{}", HELP);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => match parse_command(&line) {
                    Some(event) => {
                        let quit = matches!(event, Event::Shutdown);
                        if events.send(event).is_err() || quit {
                            break;
                        }
                    }
                    None => println!("{}", HELP),
                },
                Ok(None) => {
                    let _ = events.send(Event::Shutdown);
                    break;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read input");
                    let _ = events.send(Event::Shutdown);
                    break;
                }
            }
        }
    });

    runtime.run().await;
    Ok(())
}
