mod category;
mod ids;
mod level;
mod progress;
mod question;
mod result;

pub use ids::{CategoryId, LevelId, QuestionId};

pub use category::{Accent, Category, CategoryIcon, CategoryTheme, DifficultyTier};
pub use level::Level;
pub use progress::ProgressRecord;
pub use question::{Question, QuestionError};
pub use result::{QuestionOutcome, ResultSummary};
