use serde::{Deserialize, Serialize};

use crate::CoreError;

/// One question/answer pair. Both sides are non-empty and fixed once built.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Flashcard {
    question: String,
    answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Result<Self, CoreError> {
        let question = question.into();
        let answer = answer.into();
        if question.is_empty() {
            return Err(CoreError::Invalid("flashcard question is empty"));
        }
        if answer.is_empty() {
            return Err(CoreError::Invalid("flashcard answer is empty"));
        }
        Ok(Self { question, answer })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }
}
