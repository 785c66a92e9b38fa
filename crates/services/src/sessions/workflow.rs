use std::sync::Arc;

use tracing::{debug, info, warn};

use quiz_core::Catalogue;
use quiz_core::model::ProgressRecord;
use quiz_core::progression::CategoryProgress;
use quiz_core::session::{Advance, QuizSession, SelectOutcome};
use storage::ProgressStore;

use super::handoff::ResultHandoff;
use super::view::QuestionView;
use crate::Clock;
use crate::error::{Missing, QuizError};

/// A freshly started attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct StartedQuiz {
    pub session: QuizSession,
    /// True when the level already has a completed record.
    pub is_retake: bool,
}

/// Outcome of finishing the last question.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedQuiz {
    pub handoff: ResultHandoff,
    /// False when the progress write was dropped; the result is still valid.
    pub persisted: bool,
}

/// Result of advancing past a revealed answer.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult {
    NextQuestion { question_index: usize },
    Completed(CompletedQuiz),
}

/// Orchestrates session start, answering and the end-of-level progress write.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    catalogue: Arc<Catalogue>,
    progress: ProgressStore,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, catalogue: Arc<Catalogue>, progress: ProgressStore) -> Self {
        Self {
            clock,
            catalogue,
            progress,
        }
    }

    /// Start an attempt at a level.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotFound` for an unknown category or level.
    /// Returns `QuizError::LevelLocked` if the previous level is not completed.
    pub async fn start_quiz(
        &self,
        category_id: &str,
        level_id: &str,
    ) -> Result<StartedQuiz, QuizError> {
        let category = self
            .catalogue
            .find_category(category_id)
            .ok_or_else(|| QuizError::NotFound(Missing::Category(category_id.to_owned())))?;
        let level = category.find_level(level_id).ok_or_else(|| {
            QuizError::NotFound(Missing::Level {
                category: category_id.to_owned(),
                level: level_id.to_owned(),
            })
        })?;

        let records = self.progress.load().await;
        let progress = CategoryProgress::new(category, &records);
        if !progress.is_level_unlocked(level.id()) {
            return Err(QuizError::LevelLocked {
                category: category_id.to_owned(),
                level: level_id.to_owned(),
            });
        }
        let is_retake = progress
            .record_for(level.id())
            .is_some_and(|record| record.completed);

        let session = QuizSession::start(category.id().clone(), level, self.clock.now())?;
        info!(category = category_id, level = level_id, is_retake, "quiz started");
        Ok(StartedQuiz { session, is_retake })
    }

    /// Snapshot of the current question.
    #[must_use]
    pub fn question_view(&self, session: &QuizSession) -> Option<QuestionView> {
        QuestionView::of(session, self.clock.now())
    }

    /// Record an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` for invalid options or a finished session.
    pub fn select_answer(
        &self,
        session: &mut QuizSession,
        index: usize,
    ) -> Result<SelectOutcome, QuizError> {
        let outcome = session.select_answer(index)?;
        if outcome == SelectOutcome::AlreadyAnswered {
            debug!(index, "answer already revealed; ignoring selection");
        }
        Ok(outcome)
    }

    /// Move to the next question, or finish the level.
    ///
    /// Finishing writes a completed progress record whatever the score. A
    /// failed write is logged and reported through `CompletedQuiz::persisted`;
    /// it never fails the call.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if no answer is revealed or the session
    /// already finished.
    pub async fn advance(&self, session: &mut QuizSession) -> Result<AdvanceResult, QuizError> {
        let summary = match session.advance(self.clock.now())? {
            Advance::NextQuestion { question_index } => {
                return Ok(AdvanceResult::NextQuestion { question_index });
            }
            Advance::Completed(summary) => summary,
        };

        let record = ProgressRecord::completed(
            session.category_id().clone(),
            session.level_id().clone(),
            &summary,
            self.clock.now_millis(),
        );
        let persisted = match self.progress.upsert(record).await {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    error = %err,
                    category = %session.category_id(),
                    level = %session.level_id(),
                    "could not save progress; result kept in memory only"
                );
                false
            }
        };

        info!(
            category = %session.category_id(),
            level = %session.level_id(),
            correct = summary.correct_count(),
            total = summary.total_questions(),
            persisted,
            "quiz completed"
        );

        Ok(AdvanceResult::Completed(CompletedQuiz {
            handoff: ResultHandoff {
                category_id: session.category_id().clone(),
                level_id: session.level_id().clone(),
                summary,
            },
            persisted,
        }))
    }

    /// Abandon an attempt. Nothing is written; earlier records are untouched.
    pub fn abandon(&self, session: QuizSession) {
        debug!(
            category = %session.category_id(),
            level = %session.level_id(),
            "quiz abandoned"
        );
        drop(session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Duration;
    use quiz_core::time::fixed_now;
    use storage::{InMemoryKeyValueStore, KeyValueStore, StorageError};

    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get_value(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        async fn put_value(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk gone".into()))
        }
    }

    fn service_with(kv: Arc<dyn KeyValueStore>) -> QuizLoopService {
        QuizLoopService::new(
            Clock::fixed(fixed_now()),
            Arc::new(Catalogue::builtin().unwrap()),
            ProgressStore::new(kv),
        )
    }

    async fn finish(service: &QuizLoopService, session: &mut QuizSession, answer: usize) -> AdvanceResult {
        loop {
            service.select_answer(session, answer).unwrap();
            let result = service.advance(session).await.unwrap();
            if matches!(result, AdvanceResult::Completed(_)) {
                return result;
            }
        }
    }

    #[tokio::test]
    async fn zero_score_still_marks_level_completed() {
        let kv = InMemoryKeyValueStore::new();
        let service = service_with(Arc::new(kv.clone()));
        let store = ProgressStore::new(Arc::new(kv));

        let mut started = service.start_quiz("beginner", "beginner-level-1").await.unwrap();
        assert!(!started.is_retake);

        // option 3 is never correct in the beginner set
        let AdvanceResult::Completed(done) = finish(&service, &mut started.session, 3).await else {
            panic!("expected completion");
        };
        assert!(done.persisted);
        assert_eq!(done.handoff.summary.correct_count(), 0);

        let records = store.load().await;
        assert_eq!(records.len(), 1);
        assert!(records[0].completed);
        assert_eq!(records[0].score, Some(0));
        assert_eq!(records[0].timestamp, fixed_now().timestamp_millis());
    }

    #[tokio::test]
    async fn completion_unlocks_next_level_and_flags_retake() {
        let service = service_with(Arc::new(InMemoryKeyValueStore::new()));

        let err = service
            .start_quiz("beginner", "beginner-level-2")
            .await
            .unwrap_err();
        assert!(matches!(err, QuizError::LevelLocked { .. }));

        let mut started = service.start_quiz("beginner", "beginner-level-1").await.unwrap();
        finish(&service, &mut started.session, 0).await;

        assert!(service.start_quiz("beginner", "beginner-level-2").await.is_ok());
        let again = service.start_quiz("beginner", "beginner-level-1").await.unwrap();
        assert!(again.is_retake);
    }

    #[tokio::test]
    async fn write_failure_still_returns_result() {
        let service = service_with(Arc::new(BrokenStore));
        let mut started = service.start_quiz("advanced", "advanced-level-1").await.unwrap();

        let AdvanceResult::Completed(done) = finish(&service, &mut started.session, 1).await else {
            panic!("expected completion");
        };
        assert!(!done.persisted);
        assert_eq!(done.handoff.summary.total_questions(), 20);
    }

    #[tokio::test]
    async fn abandoned_attempt_leaves_prior_record() {
        let kv = InMemoryKeyValueStore::new();
        let service = service_with(Arc::new(kv.clone()));
        let store = ProgressStore::new(Arc::new(kv));

        let mut first = service.start_quiz("beginner", "beginner-level-1").await.unwrap();
        finish(&service, &mut first.session, 0).await;
        let before = store.load().await;

        let mut retry = service.start_quiz("beginner", "beginner-level-1").await.unwrap();
        service.select_answer(&mut retry.session, 2).unwrap();
        service.advance(&mut retry.session).await.unwrap();
        service.abandon(retry.session);

        assert_eq!(store.load().await, before);
    }

    #[tokio::test]
    async fn elapsed_time_comes_from_session_start() {
        let mut clock = Clock::fixed(fixed_now());
        let catalogue = Arc::new(Catalogue::builtin().unwrap());
        let store = ProgressStore::new(Arc::new(InMemoryKeyValueStore::new()));

        let service = QuizLoopService::new(clock, Arc::clone(&catalogue), store.clone());
        let mut started = service.start_quiz("beginner", "beginner-level-1").await.unwrap();

        clock.advance(Duration::seconds(125));
        let later = QuizLoopService::new(clock, catalogue, store);
        let AdvanceResult::Completed(done) = finish(&later, &mut started.session, 0).await else {
            panic!("expected completion");
        };
        assert_eq!(done.handoff.summary.elapsed_seconds(), 125);
    }

    #[tokio::test]
    async fn unknown_level_is_not_found() {
        let service = service_with(Arc::new(InMemoryKeyValueStore::new()));
        let err = service
            .start_quiz("beginner", "beginner-level-42")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
