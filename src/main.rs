use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use news_digest::config::{DEFAULT_CHUNK_SIZE, DEFAULT_MODEL, DEFAULT_OLLAMA_URL};
use news_digest::{FeedConfig, FeedReader, Summarizer, SummarizerConfig};

#[derive(Parser, Debug)]
#[command(name = "news-digest", about = "Summarize Google News headlines with a local Ollama model")]
struct Args {
    /// Topic to search for (e.g. AI, politics, climate change, finance)
    #[arg(env = "NEWS_DIGEST_TOPIC", default_value = "world")]
    topic: String,

    /// Ollama model used for summaries
    #[arg(long, env = "NEWS_DIGEST_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Ollama generate endpoint
    #[arg(long, env = "NEWS_DIGEST_OLLAMA_URL", default_value = DEFAULT_OLLAMA_URL)]
    ollama_url: String,

    /// Headlines per summarization request
    #[arg(long, env = "NEWS_DIGEST_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Keep only the first N headlines
    #[arg(
        long,
        env = "NEWS_DIGEST_MAX_HEADLINES",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    max_headlines: Option<u64>,

    /// Feed request timeout in seconds
    #[arg(long, env = "NEWS_DIGEST_FEED_TIMEOUT", default_value_t = 15)]
    feed_timeout: u64,

    /// Generate request timeout in seconds
    #[arg(long, env = "NEWS_DIGEST_GENERATE_TIMEOUT", default_value_t = 180)]
    generate_timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,news_digest=info")),
        )
        .init();

    let args = Args::parse();

    let feed_reader = FeedReader::new(FeedConfig {
        timeout: Duration::from_secs(args.feed_timeout),
        ..FeedConfig::default()
    })?;

    let summarizer = Summarizer::new(SummarizerConfig {
        endpoint: args.ollama_url,
        model: args.model,
        chunk_size: args.chunk_size,
        timeout: Duration::from_secs(args.generate_timeout),
        ..SummarizerConfig::default()
    })?;

    println!("Fetching latest Google News articles related to '{}'...", args.topic);

    let mut headlines = match feed_reader.try_fetch_headlines(&args.topic).await {
        Ok(headlines) => headlines,
        Err(e) => {
            println!("Could not fetch news: {}", e);
            Vec::new()
        }
    };

    if let Some(max) = args.max_headlines {
        headlines.truncate(usize::try_from(max).unwrap_or(usize::MAX));
    }

    if headlines.is_empty() {
        println!("No news found. Try a different topic or check your internet connection.");
        return Ok(());
    }

    println!("\nFound {} related articles:", headlines.len());
    for (i, headline) in headlines.iter().enumerate() {
        println!("{}. {}", i + 1, headline);
    }

    println!(
        "\nSummarizing all headlines using local {}...",
        summarizer.config().model
    );
    let summary = summarizer.summarize(&headlines, &args.topic).await;
    info!("Summary ready ({} chars)", summary.len());

    println!("\nConsolidated Summary:\n");
    println!("{}", summary);

    Ok(())
}
