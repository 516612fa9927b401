//! Recommendation widget — reads skills, calls the backend, renders titles.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::dashboard::messages::NO_RECOMMENDATIONS_ITEM;
use crate::dashboard::page::{
    LoadingIndicator, Notice, PageElements, ResultsList, SkillsInput, UiState,
};
use crate::errors::RecommendError;
use crate::recommend_client::RecommendBackend;
use crate::skills::SkillList;

/// Handle to an in-flight recommendation request. Resolves to the titles
/// received, or the error already rendered on the page.
pub type PendingRequest = JoinHandle<Result<Vec<String>, RecommendError>>;

/// The recommend button's click handler, bound to the page elements it drives.
///
/// Overlapping triggers are not guarded: each one issues its own request and
/// the last to complete decides what the list shows.
#[derive(Clone)]
pub struct RecommendWidget {
    input: Arc<dyn SkillsInput>,
    results: Arc<dyn ResultsList>,
    spinner: Arc<dyn LoadingIndicator>,
    notice: Arc<dyn Notice>,
    backend: Arc<dyn RecommendBackend>,
}

impl RecommendWidget {
    /// Binds the widget to a page. Returns `None`, leaving the page inert,
    /// unless the recommend button and every element it drives are present.
    pub fn mount(elements: PageElements, backend: Arc<dyn RecommendBackend>) -> Option<Self> {
        if !elements.has_recommend_button {
            debug!("No recommend button on page, recommendation widget not mounted");
            return None;
        }

        let PageElements {
            skills_input: Some(input),
            results_list: Some(results),
            loading_spinner: Some(spinner),
            notice: Some(notice),
            ..
        } = elements
        else {
            warn!("Recommend button found but page is missing widget elements, not mounted");
            return None;
        };

        Some(Self {
            input,
            results,
            spinner,
            notice,
            backend,
        })
    }

    /// Handles one press of the recommend button.
    ///
    /// Input is read and validated synchronously. Blank input raises the
    /// blocking notice and returns `None` without touching the network.
    /// Otherwise the spinner is shown, the list cleared, and the request
    /// spawned onto the runtime.
    pub fn trigger(&self) -> Option<PendingRequest> {
        let skills = match SkillList::parse(&self.input.value()) {
            Ok(skills) => skills,
            Err(e) => {
                self.notice.alert(e.user_message());
                return None;
            }
        };

        self.show(UiState::Loading);
        self.results.clear();

        let widget = self.clone();
        Some(tokio::spawn(async move { widget.request(skills).await }))
    }

    async fn request(&self, skills: SkillList) -> Result<Vec<String>, RecommendError> {
        info!("Requesting recommendations for {} skills", skills.len());

        let outcome = self.backend.recommend(&skills).await;

        self.show(UiState::Idle);
        match &outcome {
            Ok(titles) if titles.is_empty() => {
                self.results.replace_items(&[NO_RECOMMENDATIONS_ITEM.to_string()]);
            }
            Ok(titles) => self.results.replace_items(titles),
            Err(e) => self.results.replace_items(&[e.user_message().to_string()]),
        }

        outcome
    }

    fn show(&self, state: UiState) {
        self.spinner.set_visible(state == UiState::Loading);
    }
}
