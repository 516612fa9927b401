//! Terminal rendition of the dashboard page.
//!
//! Each stdin line becomes the skills input value and presses the recommend
//! button. Results and the spinner go to stdout, the blocking notice to
//! stderr.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use crate::dashboard::page::{LoadingIndicator, Notice, PageElements, ResultsList, SkillsInput};

#[derive(Default)]
pub struct TerminalPage {
    input: Mutex<String>,
}

impl TerminalPage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_input(&self, raw: &str) {
        *self.input.lock().unwrap_or_else(PoisonError::into_inner) = raw.to_string();
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

impl SkillsInput for TerminalPage {
    fn value(&self) -> String {
        self.input
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ResultsList for TerminalPage {
    // Nothing stays on screen to clear; the next render prints a fresh list.
    fn clear(&self) {}

    fn replace_items(&self, items: &[String]) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "Recommendations:");
        for item in items {
            let _ = writeln!(out, "  - {item}");
        }
        let _ = out.flush();
    }
}

impl LoadingIndicator for TerminalPage {
    fn set_visible(&self, visible: bool) {
        if visible {
            println!("Loading recommendations...");
        }
    }
}

impl Notice for TerminalPage {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}
