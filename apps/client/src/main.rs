use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use codecraft_client::{ChannelObserver, Config, ContentClient, RateLimiter};

/// One-shot prompt runner: `codecraft <prompt>`.
///
/// Stands in for the tool pages as a caller of the client; with no
/// GEMINI_API_KEY configured it serves demo output.
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let prompt = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if prompt.trim().is_empty() {
        bail!("usage: codecraft <prompt>");
    }

    let limiter = Arc::new(RateLimiter::default());
    let client = ContentClient::new(config.gemini_api_key.clone(), limiter);
    info!("content client initialized ({})", client.key_status().message);

    let (observer, mut updates) = ChannelObserver::new();
    let progress = tokio::spawn(async move {
        while let Some(update) = updates.recv().await {
            info!("{}", update.message());
        }
    });

    let text = client.generate_with_status(&prompt, &observer).await?;

    drop(observer);
    progress.await.ok();

    println!("{text}");

    Ok(())
}
