//! Google News RSS headline fetcher
//!
//! Builds a search query from a free-text topic, fetches the RSS document and
//! reduces it to an ordered list of unique, trimmed headlines.

use std::collections::HashSet;

use reqwest::Client;
use rss::Channel;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::FeedConfig;
use crate::error::FeedError;

/// Separator substituted for whitespace in the `q` parameter
pub const QUERY_SEPARATOR: &str = "+";

pub struct FeedReader {
    client: Client,
    config: FeedConfig,
}

impl FeedReader {
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, config })
    }

    /// Build the search URL for `topic`
    ///
    /// The topic is used verbatim: every whitespace character, leading and
    /// trailing ones included, becomes [`QUERY_SEPARATOR`] and everything else
    /// is percent-encoded.
    pub fn feed_url(&self, topic: &str) -> Result<Url, FeedError> {
        if topic.is_empty() {
            return Err(FeedError::EmptyTopic);
        }

        let query = topic
            .split(char::is_whitespace)
            .map(|part| urlencoding::encode(part).into_owned())
            .collect::<Vec<_>>()
            .join(QUERY_SEPARATOR);

        let url = format!(
            "{}?q={}&hl={}&gl={}&ceid={}",
            self.config.base_url,
            query,
            self.config.language,
            self.config.region,
            self.config.edition
        );

        Ok(Url::parse(&url)?)
    }

    /// Fetch headlines for `topic`, treating every failure as "no headlines".
    pub async fn fetch_headlines(&self, topic: &str) -> Vec<String> {
        match self.try_fetch_headlines(topic).await {
            Ok(headlines) => headlines,
            Err(e) => {
                warn!("Error fetching RSS for '{}': {}", topic, e);
                Vec::new()
            }
        }
    }

    /// Fetch headlines for `topic`, keeping fetch failures apart from an
    /// empty feed.
    pub async fn try_fetch_headlines(&self, topic: &str) -> Result<Vec<String>, FeedError> {
        let url = self.feed_url(topic)?;

        info!("Fetching Google News RSS: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FeedError::ApiError {
                status: response.status().as_u16(),
                message: format!("Feed returned status {}", response.status()),
            });
        }

        let content = response.bytes().await?;
        let headlines = parse_headlines(&content[..])?;

        info!("Feed returned {} headlines for '{}'", headlines.len(), topic);

        Ok(headlines)
    }
}

/// Parse an RSS document and extract its item titles as headlines
pub fn parse_headlines(content: &[u8]) -> Result<Vec<String>, FeedError> {
    let channel = Channel::read_from(content)?;
    debug!("Parsed channel with {} items", channel.items().len());

    Ok(extract_headlines(
        channel.items().iter().filter_map(|item| item.title()),
    ))
}

/// Trim, drop blanks and deduplicate, keeping first-seen order
pub fn extract_headlines<'a, I>(titles: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();

    titles
        .into_iter()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .filter(|title| seen.insert(*title))
        .map(str::to_string)
        .collect()
}
