use std::sync::Arc;

use quiz_core::Catalogue;
use quiz_core::model::{Category, CategoryId, CategoryTheme, DifficultyTier, LevelId};
use quiz_core::progression::{CategoryProgress, LevelAction, LevelStatus};
use storage::ProgressStore;

use crate::error::{Missing, QuizError};

/// Presentation-agnostic summary of a category for the home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub difficulty: DifficultyTier,
    pub theme: CategoryTheme,
    pub level_count: usize,
    pub question_count: usize,
    pub completed_levels: usize,
}

impl CategorySummary {
    fn from_progress(progress: &CategoryProgress<'_>) -> Self {
        let category: &Category = progress.category();
        Self {
            id: category.id().clone(),
            name: category.name().to_owned(),
            description: category.description().to_owned(),
            difficulty: category.difficulty(),
            theme: category.theme(),
            level_count: category.levels().len(),
            question_count: category.question_count(),
            completed_levels: progress.completed_levels(),
        }
    }
}

/// One entry of a category's level list.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelCard {
    pub level_id: LevelId,
    pub level_number: u32,
    pub title: String,
    pub question_count: usize,
    pub status: LevelStatus,
    pub action: LevelAction,
}

/// Level list of one category with unlock state.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOverview {
    pub summary: CategorySummary,
    pub levels: Vec<LevelCard>,
}

/// Read-only views over the catalogue joined with stored progress.
#[derive(Clone)]
pub struct OverviewService {
    catalogue: Arc<Catalogue>,
    progress: ProgressStore,
}

impl OverviewService {
    #[must_use]
    pub fn new(catalogue: Arc<Catalogue>, progress: ProgressStore) -> Self {
        Self {
            catalogue,
            progress,
        }
    }

    /// Every category with its completion count.
    pub async fn home(&self) -> Vec<CategorySummary> {
        let records = self.progress.load().await;
        self.catalogue
            .categories()
            .iter()
            .map(|category| CategorySummary::from_progress(&CategoryProgress::new(category, &records)))
            .collect()
    }

    /// Level list for one category.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotFound` if the category does not exist.
    pub async fn category(&self, category_id: &str) -> Result<CategoryOverview, QuizError> {
        let category = self
            .catalogue
            .find_category(category_id)
            .ok_or_else(|| QuizError::NotFound(Missing::Category(category_id.to_owned())))?;

        let records = self.progress.load().await;
        let progress = CategoryProgress::new(category, &records);

        let levels = category
            .levels()
            .iter()
            .zip(progress.statuses())
            .map(|(level, status)| LevelCard {
                level_id: level.id().clone(),
                level_number: level.level_number(),
                title: level.title().to_owned(),
                question_count: level.question_count(),
                status,
                action: status.action(),
            })
            .collect();

        Ok(CategoryOverview {
            summary: CategorySummary::from_progress(&progress),
            levels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::ProgressRecord;
    use storage::InMemoryKeyValueStore;

    fn service() -> OverviewService {
        let catalogue = Arc::new(Catalogue::builtin().unwrap());
        let store = ProgressStore::new(Arc::new(InMemoryKeyValueStore::new()));
        OverviewService::new(catalogue, store)
    }

    #[tokio::test]
    async fn fresh_learner_sees_only_first_levels_open() {
        let service = service();

        let home = service.home().await;
        assert_eq!(home.len(), 3);
        assert!(home.iter().all(|c| c.completed_levels == 0));
        assert_eq!(home[0].question_count, 200);

        let overview = service.category("advanced").await.unwrap();
        assert_eq!(overview.levels.len(), 10);
        assert_eq!(overview.levels[0].action, LevelAction::Start);
        assert!(
            overview.levels[1..]
                .iter()
                .all(|card| card.action == LevelAction::Locked)
        );
    }

    #[tokio::test]
    async fn completed_level_shows_retake_and_unlocks_next() {
        let service = service();
        let category = CategoryId::new("beginner");
        service
            .progress
            .upsert(ProgressRecord {
                level_id: LevelId::for_level(&category, 1),
                category_id: category,
                completed: true,
                score: Some(4),
                percentage: Some(20.0),
                timestamp: 1,
            })
            .await
            .unwrap();

        let overview = service.category("beginner").await.unwrap();
        assert_eq!(overview.summary.completed_levels, 1);
        assert_eq!(overview.levels[0].action, LevelAction::Retake);
        assert_eq!(
            overview.levels[0].status,
            LevelStatus::Completed {
                percentage: Some(20.0)
            }
        );
        assert_eq!(overview.levels[1].action, LevelAction::Start);
        assert_eq!(overview.levels[2].action, LevelAction::Locked);
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let err = service().category("expert").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
