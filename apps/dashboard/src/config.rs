use anyhow::{Context, Result};
use reqwest::Url;

use crate::recommend_client::RECOMMEND_PATH;

/// Origin of the recommendation backend when `RECOMMEND_BASE_URL` is unset.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Dashboard configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fully resolved `POST` target, e.g. `http://127.0.0.1:5000/api/recommend`.
    pub recommend_endpoint: Url,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let base_url =
            std::env::var("RECOMMEND_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Config {
            recommend_endpoint: resolve_endpoint(&base_url)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Joins the fixed recommendation path onto the configured backend origin.
fn resolve_endpoint(base_url: &str) -> Result<Url> {
    let base = Url::parse(base_url)
        .with_context(|| format!("RECOMMEND_BASE_URL '{base_url}' is not a valid URL"))?;
    base.join(RECOMMEND_PATH)
        .with_context(|| format!("Cannot join '{RECOMMEND_PATH}' onto '{base_url}'"))
}
