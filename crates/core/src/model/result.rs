use crate::model::question::Question;

/// How a single question ended up in a finished attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOutcome {
    Correct,
    Incorrect,
    Unanswered,
}

impl QuestionOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Scored outcome of one finished level attempt.
///
/// Transient: handed to the results screen and the progress store once, then
/// dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    correct_count: u32,
    total_questions: u32,
    score_percentage: f64,
    elapsed_seconds: u64,
    answer_selections: Vec<Option<usize>>,
}

impl ResultSummary {
    /// Score `selections` against `questions`.
    ///
    /// A position counts as correct only when a selection is present and equals
    /// that question's correct option. Missing selections count as wrong.
    #[must_use]
    pub fn score(
        questions: &[Question],
        selections: &[Option<usize>],
        elapsed_seconds: u64,
    ) -> Self {
        let correct = questions
            .iter()
            .zip(selections)
            .filter(|(question, selected)| selected.is_some_and(|s| question.is_correct(s)))
            .count();

        Self::from_parts(
            u32::try_from(correct).unwrap_or(u32::MAX),
            u32::try_from(questions.len()).unwrap_or(u32::MAX),
            elapsed_seconds,
            selections.to_vec(),
        )
    }

    /// Build a summary from already-counted values.
    ///
    /// The percentage is derived here and left unrounded.
    #[must_use]
    pub fn from_parts(
        correct_count: u32,
        total_questions: u32,
        elapsed_seconds: u64,
        answer_selections: Vec<Option<usize>>,
    ) -> Self {
        let score_percentage = if total_questions == 0 {
            0.0
        } else {
            100.0 * f64::from(correct_count) / f64::from(total_questions)
        };

        Self {
            correct_count,
            total_questions,
            score_percentage,
            elapsed_seconds,
            answer_selections,
        }
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn incorrect_count(&self) -> u32 {
        self.total_questions.saturating_sub(self.correct_count)
    }

    #[must_use]
    pub fn score_percentage(&self) -> f64 {
        self.score_percentage
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn answer_selections(&self) -> &[Option<usize>] {
        &self.answer_selections
    }

    /// Per-question outcome, in question order.
    #[must_use]
    pub fn outcomes(&self, questions: &[Question]) -> Vec<QuestionOutcome> {
        questions
            .iter()
            .enumerate()
            .map(|(i, question)| match self.answer_selections.get(i).copied().flatten() {
                None => QuestionOutcome::Unanswered,
                Some(selected) if question.is_correct(selected) => QuestionOutcome::Correct,
                Some(_) => QuestionOutcome::Incorrect,
            })
            .collect()
    }
}
