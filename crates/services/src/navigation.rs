//! Logical routes of the quiz front-end.

use std::fmt;

/// A parsed location.
///
/// Parsing never fails: anything unrecognised becomes `Route::NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Category { category_id: String },
    Quiz { category_id: String, level_id: String },
    Results { category_id: String, level_id: String },
    NotFound { path: String },
}

impl Route {
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["category", category] => Route::Category {
                category_id: (*category).to_owned(),
            },
            ["quiz", category, level] => Route::Quiz {
                category_id: (*category).to_owned(),
                level_id: (*level).to_owned(),
            },
            ["results", category, level] => Route::Results {
                category_id: (*category).to_owned(),
                level_id: (*level).to_owned(),
            },
            _ => Route::NotFound {
                path: trimmed.to_owned(),
            },
        }
    }

    #[must_use]
    pub fn category(category_id: impl Into<String>) -> Self {
        Route::Category {
            category_id: category_id.into(),
        }
    }

    #[must_use]
    pub fn quiz(category_id: impl Into<String>, level_id: impl Into<String>) -> Self {
        Route::Quiz {
            category_id: category_id.into(),
            level_id: level_id.into(),
        }
    }

    #[must_use]
    pub fn results(category_id: impl Into<String>, level_id: impl Into<String>) -> Self {
        Route::Results {
            category_id: category_id.into(),
            level_id: level_id.into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Category { category_id } => write!(f, "/category/{category_id}"),
            Route::Quiz {
                category_id,
                level_id,
            } => write!(f, "/quiz/{category_id}/{level_id}"),
            Route::Results {
                category_id,
                level_id,
            } => write!(f, "/results/{category_id}/{level_id}"),
            Route::NotFound { path } => f.write_str(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/category/beginner"), Route::category("beginner"));
        assert_eq!(
            Route::parse("/quiz/beginner/beginner-level-2"),
            Route::quiz("beginner", "beginner-level-2")
        );
        assert_eq!(
            Route::parse("/results/advanced/advanced-level-1/"),
            Route::results("advanced", "advanced-level-1")
        );
    }

    #[test]
    fn unmatched_paths_are_not_found() {
        for path in ["/category", "/quiz/beginner", "/settings", "/results/a/b/c", "nowhere"] {
            assert!(
                matches!(Route::parse(path), Route::NotFound { .. }),
                "{path} should not match"
            );
        }
    }

    #[test]
    fn display_round_trips_paths() {
        let route = Route::quiz("intermediate", "intermediate-level-5");
        assert_eq!(Route::parse(&route.to_string()), route);
    }
}
