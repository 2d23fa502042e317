// src/lib.rs

pub mod config;
pub mod sentiment;

pub use config::GatewayConfig;
pub use sentiment::gateway::SentimentGateway;
pub use sentiment::{ClassificationRequest, ClassificationResult};
