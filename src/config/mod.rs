// src/config/mod.rs
// All values come from the environment (or a .env file); defaults live here
// and nowhere else in the crate.

use std::str::FromStr;

/// Configuration for the sentiment gateway. Built once by the caller and
/// passed explicitly into constructors; there is no global config state.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the external classification service.
    pub api_base_url: String,
    /// Bearer token sent with every outbound call.
    pub api_token: String,
    /// Outbound request timeout in seconds.
    pub request_timeout: u64,
    /// Max tracing level for the CLI binary.
    pub log_level: String,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        // Missing .env is not an error; plain environment variables still apply.
        let _ = dotenvy::dotenv();

        Self {
            api_base_url: env_var_or("SENTIMENT_API_URL", "http://localhost:8088".to_string()),
            api_token: env_var_or(
                "SENTIMENT_API_TOKEN",
                "05ac3793-8a82-4e5e-9e24-b084a77042b7".to_string(),
            ),
            request_timeout: env_var_or("SENTIMENT_API_TIMEOUT", 30),
            log_level: env_var_or("SENTIMENT_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Full URL of the classification endpoint.
    pub fn classification_url(&self) -> String {
        format!("{}/classification/sentiment", self.api_base_url)
    }
}
