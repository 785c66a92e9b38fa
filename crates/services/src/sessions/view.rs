use chrono::{DateTime, Utc};

use quiz_core::session::QuizSession;

use super::progress::SessionProgress;

/// Snapshot of the question on screen.
///
/// Answer data (`correct_option`, `explanation`) is only present once the
/// learner's answer has been revealed.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub progress: SessionProgress,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
    pub correct_option: Option<usize>,
    pub is_correct: Option<bool>,
    pub explanation: Option<String>,
    pub is_last: bool,
    pub question_elapsed_seconds: u64,
}

impl QuestionView {
    /// Build the view for the current question; `None` once the session is complete.
    #[must_use]
    pub fn of(session: &QuizSession, now: DateTime<Utc>) -> Option<Self> {
        let question = session.current_question()?;
        let feedback = session.feedback();

        Some(Self {
            progress: SessionProgress::of(session),
            prompt: question.prompt().to_owned(),
            options: question.options().to_vec(),
            selected: feedback.as_ref().map(|f| f.selected),
            correct_option: feedback.as_ref().map(|f| f.correct_option),
            is_correct: feedback.as_ref().map(|f| f.is_correct),
            explanation: feedback.as_ref().map(|f| f.explanation.to_owned()),
            is_last: session.is_last_question(),
            question_elapsed_seconds: session.question_elapsed_seconds(now),
        })
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::Catalogue;
    use quiz_core::model::CategoryId;
    use quiz_core::time::fixed_now;

    fn session() -> QuizSession {
        let catalogue = Catalogue::builtin().unwrap();
        let level = catalogue.find_level("beginner", "beginner-level-1").unwrap();
        QuizSession::start(CategoryId::new("beginner"), level, fixed_now()).unwrap()
    }

    #[test]
    fn hides_answer_until_revealed() {
        let session = session();
        let view = QuestionView::of(&session, fixed_now() + Duration::seconds(4)).unwrap();

        assert_eq!(view.prompt, "What does AI stand for?");
        assert_eq!(view.options.len(), 4);
        assert_eq!(view.progress.question_number, 1);
        assert_eq!(view.progress.total, 20);
        assert!(!view.is_revealed());
        assert!(view.correct_option.is_none());
        assert_eq!(view.question_elapsed_seconds, 4);
    }

    #[test]
    fn reveals_feedback_after_answer() {
        let mut session = session();
        session.select_answer(1).unwrap();
        let view = QuestionView::of(&session, fixed_now()).unwrap();

        assert_eq!(view.selected, Some(1));
        assert_eq!(view.correct_option, Some(0));
        assert_eq!(view.is_correct, Some(false));
        assert!(view.explanation.unwrap().starts_with("AI stands for"));
        assert_eq!(view.progress.answered, 1);
    }
}
