use serde::{Deserialize, Serialize};

use crate::model::ids::{CategoryId, LevelId};
use crate::model::result::ResultSummary;

/// Persisted outcome of the most recent attempt at one level.
///
/// Field names follow the stored JSON shape (`categoryId`, `levelId`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub category_id: CategoryId,
    pub level_id: LevelId,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

impl ProgressRecord {
    /// Record written when a learner reaches the end of a level.
    ///
    /// Always `completed`, whatever the score.
    #[must_use]
    pub fn completed(
        category_id: CategoryId,
        level_id: LevelId,
        summary: &ResultSummary,
        timestamp: i64,
    ) -> Self {
        Self {
            category_id,
            level_id,
            completed: true,
            score: Some(summary.correct_count()),
            percentage: Some(summary.score_percentage()),
            timestamp,
        }
    }

    /// True when this record belongs to the given (category, level) pair.
    #[must_use]
    pub fn is_for(&self, category_id: &CategoryId, level_id: &LevelId) -> bool {
        &self.category_id == category_id && &self.level_id == level_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_and_omits_missing_scores() {
        let record = ProgressRecord {
            category_id: CategoryId::new("beginner"),
            level_id: LevelId::new("beginner-level-1"),
            completed: false,
            score: None,
            percentage: None,
            timestamp: 42,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"categoryId":"beginner","levelId":"beginner-level-1","completed":false,"timestamp":42}"#
        );
    }

    #[test]
    fn completed_record_is_completed_even_at_zero() {
        let summary = ResultSummary::from_parts(0, 20, 12, vec![Some(3); 20]);
        let record = ProgressRecord::completed(
            CategoryId::new("advanced"),
            LevelId::new("advanced-level-2"),
            &summary,
            1_000,
        );
        assert!(record.completed);
        assert_eq!(record.score, Some(0));
        assert_eq!(record.percentage, Some(0.0));
    }
}
