//! In-memory page used to observe what the widget renders.

use std::sync::{Arc, Mutex};

use crate::dashboard::page::{LoadingIndicator, Notice, PageElements, ResultsList, SkillsInput};

#[derive(Default)]
pub struct MemoryPage {
    input: Mutex<String>,
    items: Mutex<Vec<String>>,
    spinner: Mutex<Vec<bool>>,
    notices: Mutex<Vec<String>>,
}

impl MemoryPage {
    pub fn new(input: &str) -> Arc<Self> {
        let page = Self::default();
        page.type_skills(input);
        Arc::new(page)
    }

    pub fn type_skills(&self, raw: &str) {
        *self.input.lock().unwrap() = raw.to_string();
    }

    pub fn items(&self) -> Vec<String> {
        self.items.lock().unwrap().clone()
    }

    /// Every visibility change, in order.
    pub fn spinner_history(&self) -> Vec<bool> {
        self.spinner.lock().unwrap().clone()
    }

    pub fn spinner_visible(&self) -> bool {
        self.spinner.lock().unwrap().last().copied().unwrap_or(false)
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    pub fn elements(self: &Arc<Self>) -> PageElements {
        PageElements {
            skills_input: Some(self.clone()),
            has_recommend_button: true,
            results_list: Some(self.clone()),
            loading_spinner: Some(self.clone()),
            notice: Some(self.clone()),
        }
    }
}

impl SkillsInput for MemoryPage {
    fn value(&self) -> String {
        self.input.lock().unwrap().clone()
    }
}

impl ResultsList for MemoryPage {
    fn clear(&self) {
        self.items.lock().unwrap().clear();
    }

    fn replace_items(&self, items: &[String]) {
        *self.items.lock().unwrap() = items.to_vec();
    }
}

impl LoadingIndicator for MemoryPage {
    fn set_visible(&self, visible: bool) {
        self.spinner.lock().unwrap().push(visible);
    }
}

impl Notice for MemoryPage {
    fn alert(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}
