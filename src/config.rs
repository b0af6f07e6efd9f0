// config.rs
use anyhow::Context;
use std::env;

/// Process configuration, built once in `main` and shared through `AppState`.
/// The shared secret is required; the process refuses to start without it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("API_KEY").context("API_KEY must be set")?;
        if api_key.is_empty() {
            anyhow::bail!("API_KEY must not be empty");
        }

        Ok(AppConfig {
            api_key,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://payments.db".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        })
    }
}
