//! Level unlocking and result-screen gating.
//!
//! Two separate rules live here:
//! - structural unlock: a level is reachable once the level before it (by
//!   position) has a completed record, whatever its score;
//! - forward shortcut: the results screen offers "next level" only at
//!   `FORWARD_SHORTCUT_THRESHOLD` percent or better.
//!
//! A low-scoring completion therefore still unlocks the next level for direct
//! navigation even though no shortcut is offered.

use crate::model::{Category, Level, LevelId, ProgressRecord};

/// Minimum score percentage for the "next level" shortcut.
pub const FORWARD_SHORTCUT_THRESHOLD: f64 = 60.0;

//
// ─── LEVEL STATUS ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LevelStatus {
    Locked,
    Available,
    Completed { percentage: Option<f64> },
}

/// What the level list offers for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelAction {
    Start,
    Retake,
    Locked,
}

impl LevelStatus {
    #[must_use]
    pub fn action(self) -> LevelAction {
        match self {
            Self::Locked => LevelAction::Locked,
            Self::Available => LevelAction::Start,
            Self::Completed { .. } => LevelAction::Retake,
        }
    }

    #[must_use]
    pub fn is_unlocked(self) -> bool {
        !matches!(self, Self::Locked)
    }
}

//
// ─── CATEGORY PROGRESS ─────────────────────────────────────────────────────────
//

/// Progress records of one category, viewed against that category's levels.
#[derive(Debug, Clone)]
pub struct CategoryProgress<'a> {
    category: &'a Category,
    records: Vec<&'a ProgressRecord>,
}

impl<'a> CategoryProgress<'a> {
    /// Keep only the records that belong to `category`.
    #[must_use]
    pub fn new(category: &'a Category, records: &'a [ProgressRecord]) -> Self {
        let records = records
            .iter()
            .filter(|record| &record.category_id == category.id())
            .collect();
        Self { category, records }
    }

    #[must_use]
    pub fn category(&self) -> &'a Category {
        self.category
    }

    #[must_use]
    pub fn record_for(&self, level_id: &LevelId) -> Option<&'a ProgressRecord> {
        self.records
            .iter()
            .copied()
            .find(|record| &record.level_id == level_id)
    }

    fn is_completed(&self, level: &Level) -> bool {
        self.record_for(level.id())
            .is_some_and(|record| record.completed)
    }

    /// Whether the level at `level_index` may be opened.
    ///
    /// The first level is always open. Any other level needs a completed
    /// record for the level directly before it. Out-of-range indexes are locked.
    #[must_use]
    pub fn is_unlocked(&self, level_index: usize) -> bool {
        let levels = self.category.levels();
        if level_index >= levels.len() {
            return false;
        }
        if level_index == 0 {
            return true;
        }
        self.is_completed(&levels[level_index - 1])
    }

    /// Unlock check by level id; unknown ids are locked.
    #[must_use]
    pub fn is_level_unlocked(&self, level_id: &LevelId) -> bool {
        self.category
            .level_index(level_id)
            .is_some_and(|index| self.is_unlocked(index))
    }

    #[must_use]
    pub fn status(&self, level_index: usize) -> LevelStatus {
        let Some(level) = self.category.levels().get(level_index) else {
            return LevelStatus::Locked;
        };
        match self.record_for(level.id()) {
            Some(record) if record.completed => LevelStatus::Completed {
                percentage: record.percentage,
            },
            _ if self.is_unlocked(level_index) => LevelStatus::Available,
            _ => LevelStatus::Locked,
        }
    }

    /// Status of every level, in order.
    #[must_use]
    pub fn statuses(&self) -> Vec<LevelStatus> {
        (0..self.category.levels().len())
            .map(|index| self.status(index))
            .collect()
    }

    #[must_use]
    pub fn completed_levels(&self) -> usize {
        self.category
            .levels()
            .iter()
            .filter(|level| self.is_completed(level))
            .count()
    }
}

//
// ─── RESULT SCREEN ─────────────────────────────────────────────────────────────
//

/// The level offered as a "next level" shortcut after finishing `level_id`.
///
/// `None` when the score is below the threshold or `level_id` is the last level.
#[must_use]
pub fn forward_shortcut<'a>(
    category: &'a Category,
    level_id: &LevelId,
    score_percentage: f64,
) -> Option<&'a Level> {
    if score_percentage < FORWARD_SHORTCUT_THRESHOLD {
        return None;
    }
    category.next_level(level_id)
}

/// Headline band for a finished attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Outstanding,
    Excellent,
    GoodJob,
    NotBad,
    KeepPracticing,
}

impl ScoreBand {
    #[must_use]
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Outstanding
        } else if percentage >= 80.0 {
            Self::Excellent
        } else if percentage >= 70.0 {
            Self::GoodJob
        } else if percentage >= 60.0 {
            Self::NotBad
        } else {
            Self::KeepPracticing
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding!",
            Self::Excellent => "Excellent work!",
            Self::GoodJob => "Good job!",
            Self::NotBad => "Not bad!",
            Self::KeepPracticing => "Keep practicing!",
        }
    }
}

/// Colour tone for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTone {
    Success,
    Warning,
    Destructive,
}

impl ScoreTone {
    #[must_use]
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::Success
        } else if percentage >= 60.0 {
            Self::Warning
        } else {
            Self::Destructive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::model::CategoryId;

    fn record(level: u32, completed: bool, percentage: f64) -> ProgressRecord {
        let category = CategoryId::new("beginner");
        ProgressRecord {
            level_id: LevelId::for_level(&category, level),
            category_id: category,
            completed,
            score: Some(0),
            percentage: Some(percentage),
            timestamp: 0,
        }
    }

    fn beginner(catalogue: &Catalogue) -> &Category {
        catalogue.find_category("beginner").unwrap()
    }

    #[test]
    fn first_level_is_always_unlocked() {
        let catalogue = Catalogue::builtin().unwrap();
        for category in catalogue.categories() {
            let progress = CategoryProgress::new(category, &[]);
            assert!(progress.is_unlocked(0));
        }

        let records = vec![record(1, false, 0.0)];
        let progress = CategoryProgress::new(beginner(&catalogue), &records);
        assert!(progress.is_unlocked(0));
    }

    #[test]
    fn later_levels_need_previous_completion() {
        let catalogue = Catalogue::builtin().unwrap();
        let records = vec![record(1, true, 10.0), record(2, false, 0.0)];
        let progress = CategoryProgress::new(beginner(&catalogue), &records);

        assert!(progress.is_unlocked(1));
        assert!(!progress.is_unlocked(2));
        assert!(!progress.is_unlocked(3));
        assert!(!progress.is_unlocked(99));
    }

    #[test]
    fn records_from_other_categories_do_not_unlock() {
        let catalogue = Catalogue::builtin().unwrap();
        let mut foreign = record(1, true, 100.0);
        foreign.category_id = CategoryId::new("advanced");
        let records = vec![foreign];
        let progress = CategoryProgress::new(beginner(&catalogue), &records);

        assert!(!progress.is_unlocked(1));
        assert_eq!(progress.completed_levels(), 0);
    }

    #[test]
    fn low_score_completion_still_unlocks_next_level() {
        let catalogue = Catalogue::builtin().unwrap();
        let category = beginner(&catalogue);
        let records = vec![record(1, true, 5.0)];
        let progress = CategoryProgress::new(category, &records);

        assert!(progress.is_level_unlocked(&LevelId::new("beginner-level-2")));
        assert!(forward_shortcut(category, &LevelId::new("beginner-level-1"), 5.0).is_none());
    }

    #[test]
    fn statuses_map_to_actions() {
        let catalogue = Catalogue::builtin().unwrap();
        let records = vec![record(1, true, 75.0)];
        let progress = CategoryProgress::new(beginner(&catalogue), &records);
        let statuses = progress.statuses();

        assert_eq!(statuses.len(), 10);
        assert_eq!(
            statuses[0],
            LevelStatus::Completed {
                percentage: Some(75.0)
            }
        );
        assert_eq!(statuses[0].action(), LevelAction::Retake);
        assert_eq!(statuses[1].action(), LevelAction::Start);
        assert_eq!(statuses[2].action(), LevelAction::Locked);
        assert_eq!(progress.completed_levels(), 1);
    }

    #[test]
    fn shortcut_needs_threshold_and_next_level() {
        let catalogue = Catalogue::builtin().unwrap();
        let category = beginner(&catalogue);
        let first = LevelId::new("beginner-level-1");
        let last = LevelId::new("beginner-level-10");

        assert_eq!(
            forward_shortcut(category, &first, 60.0).map(|l| l.id().as_str()),
            Some("beginner-level-2")
        );
        assert!(forward_shortcut(category, &first, 59.99).is_none());
        assert!(forward_shortcut(category, &last, 100.0).is_none());
    }

    #[test]
    fn bands_and_tones() {
        assert_eq!(ScoreBand::for_percentage(95.0), ScoreBand::Outstanding);
        assert_eq!(ScoreBand::for_percentage(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_percentage(70.0), ScoreBand::GoodJob);
        assert_eq!(ScoreBand::for_percentage(60.0), ScoreBand::NotBad);
        assert_eq!(ScoreBand::for_percentage(59.0).message(), "Keep practicing!");
        assert_eq!(ScoreTone::for_percentage(85.0), ScoreTone::Success);
        assert_eq!(ScoreTone::for_percentage(65.0), ScoreTone::Warning);
        assert_eq!(ScoreTone::for_percentage(10.0), ScoreTone::Destructive);
    }
}
