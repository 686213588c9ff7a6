use std::path::PathBuf;

use anyhow::{Context, Result};

/// Process configuration loaded from environment variables.
///
/// Scoring weights and the similarity threshold are not read from here; they are
/// code constants handed to the pipeline through `MatchOptions`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Where the embedding model files are cached. `None` uses the fastembed default.
    pub embedding_cache_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            embedding_cache_dir: optional_env("EMBEDDING_CACHE_DIR").map(PathBuf::from),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
