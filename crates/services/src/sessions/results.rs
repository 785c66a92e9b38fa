use quiz_core::Catalogue;
use quiz_core::model::{CategoryId, LevelId, QuestionOutcome, ResultSummary};
use quiz_core::progression::{ScoreBand, ScoreTone, forward_shortcut};

use crate::error::{Missing, QuizError};

/// One square of the per-question review grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionReviewItem {
    pub number: usize,
    pub outcome: QuestionOutcome,
}

/// Everything the results screen shows for a finished attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub category_id: CategoryId,
    pub category_name: String,
    pub level_id: LevelId,
    pub level_number: u32,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub total_questions: u32,
    pub score_percentage: f64,
    pub elapsed_seconds: u64,
    pub band: ScoreBand,
    pub tone: ScoreTone,
    pub review: Vec<QuestionReviewItem>,
    /// Offered only at the shortcut threshold and when a next level exists.
    pub next_level: Option<LevelId>,
}

/// Build the results screen from a handed-off summary.
///
/// The summary is never reconstructed from stored progress: without it the
/// results are simply not found.
///
/// # Errors
///
/// Returns `QuizError::NotFound` if the category, level or summary is missing.
pub fn build_results_view(
    catalogue: &Catalogue,
    category_id: &str,
    level_id: &str,
    summary: Option<ResultSummary>,
) -> Result<ResultsView, QuizError> {
    let category = catalogue
        .find_category(category_id)
        .ok_or_else(|| QuizError::NotFound(Missing::Category(category_id.to_owned())))?;
    let level = category.find_level(level_id).ok_or_else(|| {
        QuizError::NotFound(Missing::Level {
            category: category_id.to_owned(),
            level: level_id.to_owned(),
        })
    })?;
    let summary = summary.ok_or_else(|| {
        QuizError::NotFound(Missing::Results {
            category: category_id.to_owned(),
            level: level_id.to_owned(),
        })
    })?;

    let percentage = summary.score_percentage();
    let review = summary
        .outcomes(level.questions())
        .into_iter()
        .enumerate()
        .map(|(i, outcome)| QuestionReviewItem {
            number: i + 1,
            outcome,
        })
        .collect();

    Ok(ResultsView {
        category_id: category.id().clone(),
        category_name: category.name().to_owned(),
        level_id: level.id().clone(),
        level_number: level.level_number(),
        correct_count: summary.correct_count(),
        incorrect_count: summary.incorrect_count(),
        total_questions: summary.total_questions(),
        score_percentage: percentage,
        elapsed_seconds: summary.elapsed_seconds(),
        band: ScoreBand::for_percentage(percentage),
        tone: ScoreTone::for_percentage(percentage),
        review,
        next_level: forward_shortcut(category, level.id(), percentage).map(|l| l.id().clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(correct: u32) -> ResultSummary {
        let selections = (0..20)
            .map(|i| Some(if i < correct { 0 } else { 3 }))
            .collect();
        ResultSummary::from_parts(correct, 20, 95, selections)
    }

    #[test]
    fn passing_score_offers_next_level() {
        let catalogue = Catalogue::builtin().unwrap();
        let view = build_results_view(
            &catalogue,
            "intermediate",
            "intermediate-level-1",
            Some(summary(12)),
        )
        .unwrap();

        assert!((view.score_percentage - 60.0).abs() < f64::EPSILON);
        assert_eq!(view.band, ScoreBand::NotBad);
        assert_eq!(view.tone, ScoreTone::Warning);
        assert_eq!(
            view.next_level.as_ref().map(LevelId::as_str),
            Some("intermediate-level-2")
        );
        assert_eq!(view.review.len(), 20);
        assert_eq!(view.review[0].number, 1);
    }

    #[test]
    fn failing_score_has_no_shortcut() {
        let catalogue = Catalogue::builtin().unwrap();
        let view =
            build_results_view(&catalogue, "beginner", "beginner-level-3", Some(summary(11)))
                .unwrap();
        assert!(view.next_level.is_none());
        assert_eq!(view.incorrect_count, 9);
    }

    #[test]
    fn last_level_has_no_shortcut() {
        let catalogue = Catalogue::builtin().unwrap();
        let view =
            build_results_view(&catalogue, "beginner", "beginner-level-10", Some(summary(20)))
                .unwrap();
        assert!(view.next_level.is_none());
        assert_eq!(view.band, ScoreBand::Outstanding);
    }

    #[test]
    fn missing_handoff_is_not_found() {
        let catalogue = Catalogue::builtin().unwrap();
        let err = build_results_view(&catalogue, "beginner", "beginner-level-1", None).unwrap_err();
        assert!(matches!(err, QuizError::NotFound(Missing::Results { .. })));
    }

    #[test]
    fn unknown_level_is_not_found() {
        let catalogue = Catalogue::builtin().unwrap();
        let err = build_results_view(&catalogue, "beginner", "nope", Some(summary(20)))
            .unwrap_err();
        assert!(matches!(err, QuizError::NotFound(Missing::Level { .. })));
    }
}
