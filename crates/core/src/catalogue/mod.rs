//! Static quiz content: categories, their levels and the questions in each.
//!
//! The catalogue is built once from seed data and never mutated. Building is
//! deterministic: the same settings always yield the same ids and prompts.

mod seed;

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Category, CategoryId, Level, LevelId, Question, QuestionError, QuestionId};

/// Questions in every generated level.
pub const QUESTIONS_PER_LEVEL: usize = 20;

/// Levels generated for every category.
pub const LEVELS_PER_CATEGORY: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogueError {
    #[error("duplicate category id: {0}")]
    DuplicateCategory(String),

    #[error("category {0} has no levels")]
    EmptyCategory(String),

    #[error("category {category} level at position {position} is numbered {found}")]
    NonDenseLevels {
        category: String,
        position: usize,
        found: u32,
    },

    #[error("duplicate level id {level} in category {category}")]
    DuplicateLevel { category: String, level: String },

    #[error("level {0} has no questions")]
    EmptyLevel(String),

    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Sizes used when generating the built-in catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogueSettings {
    pub questions_per_level: usize,
    pub levels_per_category: u32,
}

impl Default for CatalogueSettings {
    fn default() -> Self {
        Self {
            questions_per_level: QUESTIONS_PER_LEVEL,
            levels_per_category: LEVELS_PER_CATEGORY,
        }
    }
}

/// Read-only set of categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    categories: Vec<Category>,
}

impl Catalogue {
    /// Wrap a list of categories after checking structural invariants.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError` when category ids repeat, a category or level
    /// is empty, level ids repeat, or level numbers are not `1..=n` in order.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id().as_str()) {
                return Err(CatalogueError::DuplicateCategory(category.id().to_string()));
            }
            validate_levels(category)?;
        }
        Ok(Self { categories })
    }

    /// The built-in catalogue with default sizes.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError` if the seed data is malformed.
    pub fn builtin() -> Result<Self, CatalogueError> {
        Self::generate(CatalogueSettings::default())
    }

    /// Generate the built-in catalogue with custom sizes.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError` if the seed data is malformed or a size is zero.
    pub fn generate(settings: CatalogueSettings) -> Result<Self, CatalogueError> {
        let categories = seed::CATEGORIES
            .iter()
            .map(|def| -> Result<Category, CatalogueError> {
                let id = CategoryId::new(def.id);
                let levels = (1..=settings.levels_per_category)
                    .map(|number| -> Result<Level, CatalogueError> {
                        let base = seed_questions(seed::base_questions(def.difficulty, number))?;
                        let questions =
                            pad_questions(&base, &id, number, settings.questions_per_level);
                        Ok(Level::new(
                            LevelId::for_level(&id, number),
                            number,
                            format!("Level {number}"),
                            questions,
                        ))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Category::new(
                    id,
                    def.name,
                    def.description,
                    def.difficulty,
                    levels,
                ))
            })
            .collect::<Result<Vec<_>, CatalogueError>>()?;

        Self::new(categories)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn find_category(&self, category_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.id().as_str() == category_id)
    }

    #[must_use]
    pub fn find_level(&self, category_id: &str, level_id: &str) -> Option<&Level> {
        self.find_category(category_id)
            .and_then(|category| category.find_level(level_id))
    }
}

/// Stretch or cut `base` to exactly `count` questions.
///
/// Positions past the authored set cycle through `base` again. Each copy gets
/// the id `{first letter of category}{level}q{position + 1}` and its prompt is
/// suffixed with `(Variation N)`, where `N` is the 1-based cycle.
#[must_use]
pub fn pad_questions(
    base: &[Question],
    category_id: &CategoryId,
    level_number: u32,
    count: usize,
) -> Vec<Question> {
    if base.is_empty() {
        return Vec::new();
    }

    let prefix = category_id.as_str().chars().next().unwrap_or('q');
    let mut questions: Vec<Question> = base.iter().take(count).cloned().collect();
    while questions.len() < count {
        let position = questions.len();
        let source = &base[position % base.len()];
        let cycle = position / base.len() + 1;
        questions.push(source.relabeled(
            QuestionId::new(format!("{prefix}{level_number}q{}", position + 1)),
            format!("{} (Variation {cycle})", source.prompt()),
        ));
    }
    questions
}

fn seed_questions(seed: &[seed::SeedQuestion]) -> Result<Vec<Question>, CatalogueError> {
    seed.iter()
        .map(|q| {
            Question::new(
                QuestionId::new(q.id),
                q.prompt,
                q.options.iter().map(|o| (*o).to_owned()).collect(),
                q.correct,
                q.explanation,
            )
            .map_err(CatalogueError::from)
        })
        .collect()
}

fn validate_levels(category: &Category) -> Result<(), CatalogueError> {
    if category.levels().is_empty() {
        return Err(CatalogueError::EmptyCategory(category.id().to_string()));
    }

    let mut seen = HashSet::new();
    for (position, level) in category.levels().iter().enumerate() {
        let expected = u32::try_from(position + 1).unwrap_or(u32::MAX);
        if level.level_number() != expected {
            return Err(CatalogueError::NonDenseLevels {
                category: category.id().to_string(),
                position,
                found: level.level_number(),
            });
        }
        if !seen.insert(level.id().as_str()) {
            return Err(CatalogueError::DuplicateLevel {
                category: category.id().to_string(),
                level: level.id().to_string(),
            });
        }
        if level.questions().is_empty() {
            return Err(CatalogueError::EmptyLevel(level.id().to_string()));
        }
    }
    Ok(())
}
