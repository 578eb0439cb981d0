use std::time::Duration;

pub const DEFAULT_FEED_URL: &str = "https://news.google.com/rss/search";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "llama3";
pub const DEFAULT_CHUNK_SIZE: usize = 25;

/// Settings for the feed query and its HTTP client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub base_url: String,
    /// `hl` query parameter
    pub language: String,
    /// `gl` query parameter
    pub region: String,
    /// `ceid` query parameter
    pub edition: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FEED_URL.to_string(),
            language: "en-IN".to_string(),
            region: "IN".to_string(),
            edition: "IN:en".to_string(),
            timeout: Duration::from_secs(15),
            user_agent: "Mozilla/5.0 (compatible; news-digest/0.1)".to_string(),
        }
    }
}

/// Settings for the local generation endpoint.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub endpoint: String,
    pub model: String,
    /// Maximum number of headlines per generate request
    pub chunk_size: usize,
    pub timeout: Duration,
    /// Time allowed to establish the connection before the server counts as unreachable
    pub connect_timeout: Duration,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            timeout: Duration::from_secs(180),
            connect_timeout: Duration::from_secs(10),
        }
    }
}
