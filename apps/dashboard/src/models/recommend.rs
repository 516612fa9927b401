use serde::{Deserialize, Serialize};

use crate::skills::SkillList;

/// Body of `POST /api/recommend`.
#[derive(Debug, Serialize)]
pub struct RecommendRequest<'a> {
    pub skills: &'a SkillList,
}

/// Body of a successful recommendation response: a JSON array of job
/// titles. `null` is accepted and read as no recommendations.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Recommendations(Option<Vec<String>>);

impl Recommendations {
    pub fn into_titles(self) -> Vec<String> {
        self.0.unwrap_or_default()
    }
}
