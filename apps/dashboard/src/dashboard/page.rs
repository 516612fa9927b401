//! Page elements the recommendation widget reads from and writes to.
//!
//! Each element is a trait so the same widget drives the terminal page in
//! the binary and the in-memory page in tests.

use std::sync::Arc;

/// Free-text field holding comma-separated skills.
pub trait SkillsInput: Send + Sync {
    fn value(&self) -> String;
}

/// Ordered list the recommendations are rendered into.
pub trait ResultsList: Send + Sync {
    fn clear(&self);

    /// Replaces the whole list with `items`, in order, as one write.
    fn replace_items(&self, items: &[String]);
}

/// Progress indicator shown while a request is in flight.
pub trait LoadingIndicator: Send + Sync {
    fn set_visible(&self, visible: bool);
}

/// Blocking notice shown to the user (the page's alert box).
pub trait Notice: Send + Sync {
    fn alert(&self, message: &str);
}

/// Loading/idle flag, reflected by the loading indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Loading,
    Idle,
}

/// Elements looked up on a page. Any of them may be missing; the widget
/// only mounts when every one is present.
#[derive(Clone, Default)]
pub struct PageElements {
    pub skills_input: Option<Arc<dyn SkillsInput>>,
    pub has_recommend_button: bool,
    pub results_list: Option<Arc<dyn ResultsList>>,
    pub loading_spinner: Option<Arc<dyn LoadingIndicator>>,
    pub notice: Option<Arc<dyn Notice>>,
}
