mod handoff;
mod progress;
mod results;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::QuizError;
pub use handoff::{ResultHandoff, ResultsSlot};
pub use progress::SessionProgress;
pub use results::{QuestionReviewItem, ResultsView, build_results_view};
pub use view::QuestionView;
pub use workflow::{AdvanceResult, CompletedQuiz, QuizLoopService, StartedQuiz};
