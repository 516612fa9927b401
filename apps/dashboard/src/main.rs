mod config;
mod dashboard;
mod errors;
mod models;
mod recommend_client;
mod skills;

use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::dashboard::terminal::TerminalPage;
use crate::dashboard::widget::{PendingRequest, RecommendWidget};
use crate::recommend_client::HttpRecommendClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with the rendered list
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting skills dashboard v{}", env!("CARGO_PKG_VERSION"));

    let backend = Arc::new(HttpRecommendClient::new(config.recommend_endpoint.clone()));
    info!("Recommendation endpoint: {}", config.recommend_endpoint);

    let page = TerminalPage::new();
    let Some(widget) = RecommendWidget::mount(page.elements(), backend) else {
        warn!("Recommendation widget unavailable on this page");
        return Ok(());
    };

    println!("Enter your skills separated by commas, one request per line (Ctrl-D to quit).");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Vec<PendingRequest> = Vec::new();

    while let Some(line) = lines.next_line().await? {
        page.set_input(&line);
        pending.retain(|request| !request.is_finished());
        if let Some(request) = widget.trigger() {
            pending.push(request);
        }
    }

    for request in pending {
        if let Err(e) = request.await {
            warn!("Recommendation task did not complete: {e}");
        }
    }

    info!("Input closed, shutting down");
    Ok(())
}
