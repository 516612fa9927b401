use thiserror::Error;

use crate::dashboard::messages::{EMPTY_INPUT_NOTICE, REQUEST_FAILED_ITEM};

/// Everything that can end a recommendation trigger early.
///
/// `EmptyInput` is handled locally with a blocking notice. The remaining
/// variants all reach the page as the same generic list item; their detail
/// only goes to the log.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("No skills entered")]
    EmptyInput,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! Status: {status}")]
    Status { status: u16 },

    #[error("Malformed recommendation response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl RecommendError {
    /// Text shown to the user for this error. Request failures are logged
    /// here so the page never carries more than the generic message.
    pub fn user_message(&self) -> &'static str {
        match self {
            RecommendError::EmptyInput => EMPTY_INPUT_NOTICE,
            RecommendError::Transport(e) => {
                tracing::error!("Error fetching recommendations: {e}");
                REQUEST_FAILED_ITEM
            }
            RecommendError::Status { status } => {
                tracing::error!("Error fetching recommendations: HTTP error! Status: {status}");
                REQUEST_FAILED_ITEM
            }
            RecommendError::MalformedResponse(e) => {
                tracing::error!("Error fetching recommendations: {e}");
                REQUEST_FAILED_ITEM
            }
        }
    }
}
