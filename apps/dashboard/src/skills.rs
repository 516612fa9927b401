use serde::Serialize;

use crate::errors::RecommendError;

/// Ordered skills typed by the user: trimmed, non-empty, duplicates kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillList(Vec<String>);

impl SkillList {
    /// Splits comma-separated input into a skill list.
    ///
    /// Blank input is the only rejection. Input made of separators alone
    /// (e.g. `" , "`) passes and yields an empty list.
    pub fn parse(raw: &str) -> Result<Self, RecommendError> {
        if raw.trim().is_empty() {
            return Err(RecommendError::EmptyInput);
        }

        let skills = raw
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect();

        Ok(SkillList(skills))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
