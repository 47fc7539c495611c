use serde::Deserialize;
use std::time::Duration;

/// Widget configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the search/recommendation service
    #[serde(default = "default_recommender_api_url")]
    pub recommender_api_url: String,

    /// How many recommendations to ask for per request
    #[serde(default = "default_recommend_top_n")]
    pub recommend_top_n: usize,

    /// Quiet period after a keystroke before suggestions are requested
    #[serde(default = "default_suggest_debounce_ms")]
    pub suggest_debounce_ms: u64,

    /// Per-request timeout for collaborator calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_recommender_api_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_recommend_top_n() -> usize {
    5
}

fn default_suggest_debounce_ms() -> u64 {
    250
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recommender_api_url: default_recommender_api_url(),
            recommend_top_n: default_recommend_top_n(),
            suggest_debounce_ms: default_suggest_debounce_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.suggest_debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
