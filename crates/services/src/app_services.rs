use std::sync::Arc;

use quiz_core::Catalogue;
use storage::{ProgressStore, Storage};

use crate::Clock;
use crate::error::AppServicesError;
use crate::overview::OverviewService;
use crate::sessions::QuizLoopService;

/// Assembles app-facing services over one storage backend and the built-in catalogue.
#[derive(Clone)]
pub struct AppServices {
    catalogue: Arc<Catalogue>,
    overview: Arc<OverviewService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or catalogue
    /// generation fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage, clock)
    }

    /// Build services over a process-local store; progress is lost on exit.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if catalogue generation fails.
    pub fn in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        Self::from_storage(&Storage::in_memory(), clock)
    }

    /// Build services over an existing storage backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if catalogue generation fails.
    pub fn from_storage(storage: &Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let catalogue = Arc::new(Catalogue::builtin()?);
        let progress = ProgressStore::new(Arc::clone(&storage.kv));

        let overview = Arc::new(OverviewService::new(
            Arc::clone(&catalogue),
            progress.clone(),
        ));
        let quiz_loop = Arc::new(QuizLoopService::new(
            clock,
            Arc::clone(&catalogue),
            progress,
        ));

        Ok(Self {
            catalogue,
            overview,
            quiz_loop,
        })
    }

    #[must_use]
    pub fn catalogue(&self) -> Arc<Catalogue> {
        Arc::clone(&self.catalogue)
    }

    #[must_use]
    pub fn overview(&self) -> Arc<OverviewService> {
        Arc::clone(&self.overview)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}
