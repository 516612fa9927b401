//! Recommendation client — the only place the dashboard talks to the backend.
//!
//! One trigger, one `POST`. No retries, no timeout, no cancellation: the
//! request either completes or fails exactly once.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Url};
use tracing::debug;

use crate::errors::RecommendError;
use crate::models::recommend::{RecommendRequest, Recommendations};
use crate::skills::SkillList;

/// Fixed path of the recommendation endpoint on the backend origin.
pub const RECOMMEND_PATH: &str = "/api/recommend";

/// Maps a skill list to ordered job titles.
///
/// The widget holds an `Arc<dyn RecommendBackend>`; tests swap in fakes.
#[async_trait]
pub trait RecommendBackend: Send + Sync {
    async fn recommend(&self, skills: &SkillList) -> Result<Vec<String>, RecommendError>;
}

/// HTTP implementation against `POST /api/recommend`.
#[derive(Clone)]
pub struct HttpRecommendClient {
    client: Client,
    endpoint: Url,
}

impl HttpRecommendClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl RecommendBackend for HttpRecommendClient {
    async fn recommend(&self, skills: &SkillList) -> Result<Vec<String>, RecommendError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&RecommendRequest { skills })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecommendError::Status {
                status: status.as_u16(),
            });
        }

        // Read the raw body first so a bad payload surfaces as a parse error,
        // not a transport error.
        let body = response.bytes().await?;
        let titles = serde_json::from_slice::<Recommendations>(&body)?.into_titles();

        debug!("Received {} recommendations", titles.len());
        Ok(titles)
    }
}
