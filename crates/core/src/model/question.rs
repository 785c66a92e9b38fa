use thiserror::Error;

use crate::model::ids::QuestionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least two options, got {count}")]
    TooFewOptions { count: usize },

    #[error("correct option {index} is out of range for {count} options")]
    CorrectOptionOutOfRange { index: usize, count: usize },
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: String,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, fewer than two options
    /// are given, or `correct_option` does not index into `options`.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                count: options.len(),
            });
        }
        if correct_option >= options.len() {
            return Err(QuestionError::CorrectOptionOutOfRange {
                index: correct_option,
                count: options.len(),
            });
        }

        Ok(Self {
            id,
            prompt,
            options,
            correct_option,
            explanation: explanation.into(),
        })
    }

    /// Copy of this question under a new id and prompt, used when padding a level.
    #[must_use]
    pub fn relabeled(&self, id: QuestionId, prompt: String) -> Self {
        Self {
            id,
            prompt,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Returns true when `selected` is the correct option.
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_option
    }
}
