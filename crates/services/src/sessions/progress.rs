use quiz_core::session::QuizSession;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionProgress {
    /// 1-based number of the question on screen (equals `total` once complete).
    pub question_number: usize,
    pub total: usize,
    pub answered: usize,
    pub fraction: f64,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn of(session: &QuizSession) -> Self {
        let total = session.total_questions();
        Self {
            question_number: session.question_number().unwrap_or(total),
            total,
            answered: session.selections().iter().filter(|s| s.is_some()).count(),
            fraction: session.progress_fraction(),
            is_complete: session.is_complete(),
        }
    }
}
