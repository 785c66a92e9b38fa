#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod navigation;
pub mod overview;
pub mod sessions;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, Missing, QuizError};
pub use navigation::Route;
pub use overview::{CategoryOverview, CategorySummary, LevelCard, OverviewService};
pub use sessions::{
    AdvanceResult, CompletedQuiz, QuestionView, QuizLoopService, ResultHandoff, ResultsSlot,
    ResultsView, StartedQuiz,
};
