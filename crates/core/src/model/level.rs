use crate::model::ids::LevelId;
use crate::model::question::Question;

/// An ordered stage within a category holding a fixed question set.
///
/// `level_number` is 1-based and dense within its category; the catalogue
/// enforces this when it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    id: LevelId,
    level_number: u32,
    title: String,
    questions: Vec<Question>,
}

impl Level {
    #[must_use]
    pub fn new(
        id: LevelId,
        level_number: u32,
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            id,
            level_number,
            title: title.into(),
            questions,
        }
    }

    #[must_use]
    pub fn id(&self) -> &LevelId {
        &self.id
    }

    #[must_use]
    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
