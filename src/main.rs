// src/main.rs
// Thin CLI around the gateway: one sentence in, one JSON result out.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use sentiment_gateway::{ClassificationRequest, GatewayConfig, SentimentGateway};

#[derive(Parser, Debug)]
#[command(
    name = "sentiment-gateway",
    about = "Classify a sentence via the external sentiment API"
)]
struct Args {
    /// Sentence to classify (non-blank, at most 1000 characters)
    sentence: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::from_env();

    let level = config.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let request = ClassificationRequest::new(args.sentence)?;

    info!("Sentiment gateway targeting {}", config.api_base_url);

    let gateway = SentimentGateway::new(&config)?;
    let result = gateway.classify(&request).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
