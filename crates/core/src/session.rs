use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{CategoryId, Level, LevelId, Question, ResultSummary};
use crate::time::whole_seconds_between;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("level has no questions")]
    Empty,

    #[error("session already completed")]
    Completed,

    #[error("option {index} does not exist (question has {count} options)")]
    InvalidOption { index: usize, count: usize },

    #[error("answer must be revealed before advancing")]
    AnswerNotRevealed,
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where an attempt currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    AwaitingAnswer { question_index: usize },
    AnswerRevealed { question_index: usize, selected: usize },
    Completed(ResultSummary),
}

/// Result of `QuizSession::select_answer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The selection was recorded and the answer is now revealed.
    Recorded,
    /// An answer was already revealed for this question; nothing changed.
    AlreadyAnswered,
}

/// Result of `QuizSession::advance`.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    NextQuestion { question_index: usize },
    Completed(ResultSummary),
}

/// Feedback shown once an answer is revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback<'a> {
    pub selected: usize,
    pub correct_option: usize,
    pub is_correct: bool,
    pub explanation: &'a str,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One in-progress attempt at a level.
///
/// Plain value: created fresh per attempt, discarded when finished or
/// abandoned. Nothing here touches storage; the caller persists the
/// `ResultSummary` returned by the final `advance`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    category_id: CategoryId,
    level_id: LevelId,
    questions: Vec<Question>,
    selections: Vec<Option<usize>>,
    phase: SessionPhase,
    started_at: DateTime<Utc>,
    question_started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Start an attempt at `level` on the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the level has no questions.
    pub fn start(
        category_id: CategoryId,
        level: &Level,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if level.questions().is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            category_id,
            level_id: level.id().clone(),
            questions: level.questions().to_vec(),
            selections: vec![None; level.question_count()],
            phase: SessionPhase::AwaitingAnswer { question_index: 0 },
            started_at,
            question_started_at: started_at,
        })
    }

    #[must_use]
    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    #[must_use]
    pub fn level_id(&self) -> &LevelId {
        &self.level_id
    }

    #[must_use]
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn selections(&self) -> &[Option<usize>] {
        &self.selections
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Index of the question on screen, or `None` once completed.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            SessionPhase::AwaitingAnswer { question_index }
            | SessionPhase::AnswerRevealed { question_index, .. } => Some(question_index),
            SessionPhase::Completed(_) => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    /// 1-based position for "Question N of M" displays.
    #[must_use]
    pub fn question_number(&self) -> Option<usize> {
        self.current_index().map(|i| i + 1)
    }

    /// Fraction of the level reached, counting the current question.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f64 {
        let reached = self.question_number().unwrap_or(self.questions.len());
        reached as f64 / self.questions.len() as f64
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index() == Some(self.questions.len() - 1)
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self.phase, SessionPhase::AnswerRevealed { .. })
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, SessionPhase::Completed(_))
    }

    #[must_use]
    pub fn result(&self) -> Option<&ResultSummary> {
        match &self.phase {
            SessionPhase::Completed(summary) => Some(summary),
            _ => None,
        }
    }

    /// Feedback for the revealed answer, if one is revealed.
    #[must_use]
    pub fn feedback(&self) -> Option<AnswerFeedback<'_>> {
        let SessionPhase::AnswerRevealed {
            question_index,
            selected,
        } = self.phase
        else {
            return None;
        };
        let question = self.questions.get(question_index)?;
        Some(AnswerFeedback {
            selected,
            correct_option: question.correct_option(),
            is_correct: question.is_correct(selected),
            explanation: question.explanation(),
        })
    }

    /// Seconds spent on the current question so far.
    #[must_use]
    pub fn question_elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        whole_seconds_between(self.question_started_at, now)
    }

    /// Seconds since the attempt started.
    #[must_use]
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        whole_seconds_between(self.started_at, now)
    }

    /// Record an answer for the current question and reveal it.
    ///
    /// Answers are final: once revealed, further calls for the same question
    /// return `SelectOutcome::AlreadyAnswered` and leave the selection as is.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after the last question was advanced.
    /// Returns `SessionError::InvalidOption` if `index` is not an option.
    pub fn select_answer(&mut self, index: usize) -> Result<SelectOutcome, SessionError> {
        let question_index = match self.phase {
            SessionPhase::AwaitingAnswer { question_index } => question_index,
            SessionPhase::AnswerRevealed { .. } => return Ok(SelectOutcome::AlreadyAnswered),
            SessionPhase::Completed(_) => return Err(SessionError::Completed),
        };

        let count = self.questions[question_index].options().len();
        if index >= count {
            return Err(SessionError::InvalidOption { index, count });
        }

        self.selections[question_index] = Some(index);
        self.phase = SessionPhase::AnswerRevealed {
            question_index,
            selected: index,
        };
        Ok(SelectOutcome::Recorded)
    }

    /// Move past a revealed answer.
    ///
    /// On the last question this scores the attempt and completes the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AnswerNotRevealed` if no answer is revealed yet.
    /// Returns `SessionError::Completed` if the session already finished.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Advance, SessionError> {
        let question_index = match self.phase {
            SessionPhase::AnswerRevealed { question_index, .. } => question_index,
            SessionPhase::AwaitingAnswer { .. } => return Err(SessionError::AnswerNotRevealed),
            SessionPhase::Completed(_) => return Err(SessionError::Completed),
        };

        let next = question_index + 1;
        if next < self.questions.len() {
            self.phase = SessionPhase::AwaitingAnswer {
                question_index: next,
            };
            self.question_started_at = now;
            return Ok(Advance::NextQuestion {
                question_index: next,
            });
        }

        let summary = ResultSummary::score(
            &self.questions,
            &self.selections,
            self.elapsed_seconds(now),
        );
        self.phase = SessionPhase::Completed(summary.clone());
        Ok(Advance::Completed(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionId;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn level(correct: &[usize]) -> Level {
        let questions = correct
            .iter()
            .enumerate()
            .map(|(i, c)| {
                Question::new(
                    QuestionId::new(format!("q{i}")),
                    format!("Question {i}"),
                    vec!["a".into(), "b".into(), "c".into()],
                    *c,
                    format!("Because {i}"),
                )
                .unwrap()
            })
            .collect();
        Level::new(LevelId::new("test-level-1"), 1, "Level 1", questions)
    }

    fn start(correct: &[usize]) -> QuizSession {
        QuizSession::start(CategoryId::new("test"), &level(correct), fixed_now()).unwrap()
    }

    #[test]
    fn starts_awaiting_first_answer() {
        let session = start(&[0, 1]);
        assert_eq!(
            session.phase(),
            &SessionPhase::AwaitingAnswer { question_index: 0 }
        );
        assert_eq!(session.selections(), &[None, None]);
        assert_eq!(session.question_number(), Some(1));
        assert!((session.progress_fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_level_cannot_start() {
        let empty = Level::new(LevelId::new("x"), 1, "Level 1", Vec::new());
        let err = QuizSession::start(CategoryId::new("test"), &empty, fixed_now()).unwrap_err();
        assert_eq!(err, SessionError::Empty);
    }

    #[test]
    fn second_selection_after_reveal_is_ignored() {
        let mut session = start(&[0, 1]);
        assert_eq!(session.select_answer(2).unwrap(), SelectOutcome::Recorded);
        assert_eq!(
            session.select_answer(0).unwrap(),
            SelectOutcome::AlreadyAnswered
        );
        assert_eq!(session.selections()[0], Some(2));
        assert_eq!(
            session.phase(),
            &SessionPhase::AnswerRevealed {
                question_index: 0,
                selected: 2
            }
        );
    }

    #[test]
    fn feedback_reports_correctness() {
        let mut session = start(&[1]);
        assert!(session.feedback().is_none());
        session.select_answer(0).unwrap();
        let feedback = session.feedback().unwrap();
        assert!(!feedback.is_correct);
        assert_eq!(feedback.correct_option, 1);
        assert_eq!(feedback.explanation, "Because 0");
    }

    #[test]
    fn rejects_unknown_option() {
        let mut session = start(&[0]);
        let err = session.select_answer(3).unwrap_err();
        assert_eq!(err, SessionError::InvalidOption { index: 3, count: 3 });
        assert!(!session.is_revealed());
    }

    #[test]
    fn cannot_advance_before_reveal() {
        let mut session = start(&[0, 1]);
        assert_eq!(
            session.advance(fixed_now()).unwrap_err(),
            SessionError::AnswerNotRevealed
        );
    }

    #[test]
    fn advance_moves_to_next_question_and_resets_timer() {
        let mut session = start(&[0, 1]);
        session.select_answer(0).unwrap();
        let later = fixed_now() + Duration::seconds(12);
        assert_eq!(
            session.advance(later).unwrap(),
            Advance::NextQuestion { question_index: 1 }
        );
        assert!(session.is_last_question());
        assert_eq!(session.question_elapsed_seconds(later + Duration::seconds(3)), 3);
        assert_eq!(session.elapsed_seconds(later + Duration::seconds(3)), 15);
    }

    #[test]
    fn final_advance_scores_and_completes() {
        let mut session = start(&[0, 1, 2, 0]);
        let answers = [0, 2, 2, 1];
        let mut now = fixed_now();
        for answer in answers {
            session.select_answer(answer).unwrap();
            now += Duration::milliseconds(2_600);
            let _ = session.advance(now).unwrap();
        }

        let summary = session.result().unwrap();
        assert_eq!(summary.correct_count(), 2);
        assert_eq!(summary.total_questions(), 4);
        assert!((summary.score_percentage() - 50.0).abs() < f64::EPSILON);
        assert_eq!(summary.elapsed_seconds(), 10);
        assert_eq!(
            summary.answer_selections(),
            &[Some(0), Some(2), Some(2), Some(1)]
        );
        assert!(session.current_question().is_none());
    }

    #[test]
    fn completed_session_rejects_further_input() {
        let mut session = start(&[0]);
        session.select_answer(1).unwrap();
        let Advance::Completed(summary) = session.advance(fixed_now()).unwrap() else {
            panic!("expected completion");
        };
        assert_eq!(summary.correct_count(), 0);
        assert_eq!(session.select_answer(0).unwrap_err(), SessionError::Completed);
        assert_eq!(session.advance(fixed_now()).unwrap_err(), SessionError::Completed);
    }
}
