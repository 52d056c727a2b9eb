use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Upper bound enforced by the question form.
pub const MAX_QUESTION_CHARS: usize = 500;

/// A visitor-submitted question awaiting review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NewQuestion {
    #[must_use]
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            email: None,
            name: None,
        }
    }

    /// Check the question is non-blank and within [`MAX_QUESTION_CHARS`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] describing the first violation.
    pub fn validate(&self) -> Result<(), CoreError> {
        let trimmed = self.question.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("question cannot be empty".into()));
        }
        let chars = trimmed.chars().count();
        if chars > MAX_QUESTION_CHARS {
            return Err(CoreError::Validation(format!(
                "question is {chars} characters, limit is {MAX_QUESTION_CHARS}"
            )));
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            if !email.contains('@') {
                return Err(CoreError::Validation(format!("invalid email '{email}'")));
            }
        }
        Ok(())
    }
}
