use crate::error::SearchError;
use crate::NON_WALKABLE_THRESHOLD;

/// Tunables of a [SearchEngine](crate::SearchEngine).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Oracle values at or above this mark a cell as impassable.
    pub non_walkable_threshold: i32,
    /// Scales the Euclidean heuristic. Values above 1.0 give Weighted A*, which
    /// expands fewer nodes but no longer guarantees an optimal path.
    pub heuristic_factor: f32,
    /// Upper bound on the number of search nodes alive in one search. Running
    /// out ends the search in [SearchState::OutOfMemory](crate::SearchState::OutOfMemory).
    /// `None` lets the node pool grow on demand.
    pub node_capacity: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            non_walkable_threshold: NON_WALKABLE_THRESHOLD,
            heuristic_factor: 1.0,
            node_capacity: None,
        }
    }
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        SearchConfig::default()
    }

    #[must_use]
    pub fn with_non_walkable_threshold(mut self, threshold: i32) -> Self {
        self.non_walkable_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_heuristic_factor(mut self, factor: f32) -> Self {
        self.heuristic_factor = factor;
        self
    }

    #[must_use]
    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = Some(capacity);
        self
    }

    /// Checks the configuration for values the engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [SearchError::InvalidConfig] if the threshold is not positive,
    /// the heuristic factor is negative or not finite, or the node capacity
    /// cannot hold the start and goal nodes.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.non_walkable_threshold <= 0 {
            return Err(SearchError::invalid_config(format!(
                "non_walkable_threshold must be positive, got {}",
                self.non_walkable_threshold
            )));
        }
        if !self.heuristic_factor.is_finite() || self.heuristic_factor < 0.0 {
            return Err(SearchError::invalid_config(format!(
                "heuristic_factor must be finite and non-negative, got {}",
                self.heuristic_factor
            )));
        }
        match self.node_capacity {
            Some(capacity) if capacity < 2 => Err(SearchError::invalid_config(format!(
                "node_capacity must hold at least the start and goal nodes, got {capacity}"
            ))),
            _ => Ok(()),
        }
    }
}
