use quiz_core::model::{CategoryId, LevelId, ResultSummary};

/// A finished attempt's result on its way to the results screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultHandoff {
    pub category_id: CategoryId,
    pub level_id: LevelId,
    pub summary: ResultSummary,
}

/// One-shot slot carrying a `ResultHandoff` from the quiz screen to the
/// results screen.
///
/// Taking the result empties the slot, so revisiting the results screen
/// without a fresh attempt finds nothing.
#[derive(Debug, Default)]
pub struct ResultsSlot {
    pending: Option<ResultHandoff>,
}

impl ResultsSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a handoff, replacing any unclaimed one.
    pub fn put(&mut self, handoff: ResultHandoff) {
        self.pending = Some(handoff);
    }

    /// Take the pending summary if it belongs to this category and level.
    ///
    /// A handoff for a different level stays in the slot.
    pub fn take_for(&mut self, category_id: &str, level_id: &str) -> Option<ResultSummary> {
        let matches = self.pending.as_ref().is_some_and(|h| {
            h.category_id.as_str() == category_id && h.level_id.as_str() == level_id
        });
        if !matches {
            return None;
        }
        self.pending.take().map(|h| h.summary)
    }

    /// Drop any unclaimed handoff.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}
