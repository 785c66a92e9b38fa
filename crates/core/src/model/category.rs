use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::{CategoryId, LevelId};
use crate::model::level::Level;

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyTier {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Presentation theme for categories of this tier.
    #[must_use]
    pub fn theme(self) -> CategoryTheme {
        match self {
            Self::Beginner => CategoryTheme {
                icon: CategoryIcon::GraduationCap,
                accent: Accent::Success,
            },
            Self::Intermediate => CategoryTheme {
                icon: CategoryIcon::Brain,
                accent: Accent::Warning,
            },
            Self::Advanced => CategoryTheme {
                icon: CategoryIcon::Rocket,
                accent: Accent::Primary,
            },
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── THEME ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryIcon {
    GraduationCap,
    Brain,
    Rocket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Success,
    Warning,
    Primary,
}

/// Icon and accent colour, resolved once when the catalogue is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryTheme {
    pub icon: CategoryIcon,
    pub accent: Accent,
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Top-level topic grouping: an ordered run of levels at one difficulty tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    difficulty: DifficultyTier,
    theme: CategoryTheme,
    levels: Vec<Level>,
}

impl Category {
    #[must_use]
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        description: impl Into<String>,
        difficulty: DifficultyTier,
        levels: Vec<Level>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            difficulty,
            theme: difficulty.theme(),
            levels,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn difficulty(&self) -> DifficultyTier {
        self.difficulty
    }

    #[must_use]
    pub fn theme(&self) -> CategoryTheme {
        self.theme
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Total questions across every level.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.levels.iter().map(Level::question_count).sum()
    }

    #[must_use]
    pub fn find_level(&self, level_id: &str) -> Option<&Level> {
        self.levels.iter().find(|level| level.id().as_str() == level_id)
    }

    /// Position of a level within this category.
    #[must_use]
    pub fn level_index(&self, level_id: &LevelId) -> Option<usize> {
        self.levels.iter().position(|level| level.id() == level_id)
    }

    /// The level after `level_id`, if there is one.
    #[must_use]
    pub fn next_level(&self, level_id: &LevelId) -> Option<&Level> {
        self.level_index(level_id)
            .and_then(|index| self.levels.get(index + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(levels: u32) -> Category {
        let id = CategoryId::new("beginner");
        let levels = (1..=levels)
            .map(|n| Level::new(LevelId::for_level(&id, n), n, format!("Level {n}"), Vec::new()))
            .collect();
        Category::new(id, "Beginner", "", DifficultyTier::Beginner, levels)
    }

    #[test]
    fn theme_follows_tier() {
        let c = category(1);
        assert_eq!(c.theme().icon, CategoryIcon::GraduationCap);
        assert_eq!(c.theme().accent, Accent::Success);
        assert_eq!(DifficultyTier::Advanced.theme().icon, CategoryIcon::Rocket);
    }

    #[test]
    fn next_level_stops_at_the_end() {
        let c = category(2);
        let first = LevelId::new("beginner-level-1");
        let last = LevelId::new("beginner-level-2");
        assert_eq!(c.next_level(&first).map(Level::level_number), Some(2));
        assert!(c.next_level(&last).is_none());
        assert!(c.next_level(&LevelId::new("missing")).is_none());
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&DifficultyTier::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");
    }
}
