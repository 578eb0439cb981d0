//! Fetch news headlines for a topic and summarize them with a local LLM.

pub mod config;
pub mod error;
pub mod rss;
pub mod summarizer;

pub use config::{FeedConfig, SummarizerConfig};
pub use error::{FeedError, SummarizeError};
pub use rss::FeedReader;
pub use summarizer::Summarizer;
