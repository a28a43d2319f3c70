//! Error type reported by [SearchEngine::try_calculate](crate::SearchEngine::try_calculate).

use crate::Position;

/// Why a search did not produce a path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Every reachable cell was expanded without reaching the goal.
    #[error("no path found from {start:?} to {goal:?}")]
    NoPathFound {
        /// Where the search started.
        start: Position,
        /// The goal that could not be reached.
        goal: Position,
    },

    /// The goal cell itself is not walkable.
    #[error("goal position {0:?} is not walkable")]
    GoalBlocked(Position),

    /// The search was cancelled before it finished.
    #[error("search was cancelled")]
    Cancelled,

    /// The node pool ran out of room.
    #[error("node pool exhausted after {capacity} nodes")]
    OutOfMemory {
        /// Capacity of the exhausted pool.
        capacity: usize,
    },

    /// The step loop ended outside a terminal state.
    #[error("search ended without reaching a terminal state")]
    NotTerminated,

    /// A [SearchConfig](crate::SearchConfig) value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SearchError {
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` if the goal could not be reached, whether because it is
    /// walled off or not walkable at all.
    #[must_use]
    pub const fn is_no_path_found(&self) -> bool {
        matches!(self, Self::NoPathFound { .. } | Self::GoalBlocked(_))
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
