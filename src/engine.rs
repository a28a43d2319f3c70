use log::{debug, info, trace, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::closed::ClosedSet;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::{NodeId, NodePool};
use crate::oracle::GridOracle;
use crate::path::follow_children;
use crate::successors::neighbourhood_and_cost;
use crate::Position;

/// Where a search currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// No search has been seeded yet.
    NotInitialized,
    /// Seeded; [step](SearchEngine::step) advances the search.
    Searching,
    /// A path to the goal was found.
    Succeeded,
    Failed(FailReason),
    /// The node pool was exhausted before the search could finish.
    OutOfMemory,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SearchState::Succeeded | SearchState::Failed(_) | SearchState::OutOfMemory
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailReason {
    /// The frontier ran empty: the goal cannot be reached.
    Exhausted,
    /// The goal cell is not walkable.
    GoalBlocked,
    Cancelled,
}

/// Counters of the most recent search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of nodes popped from the frontier.
    pub steps: usize,
    pub nodes_allocated: usize,
    pub open_high_water: usize,
    pub closed_high_water: usize,
}

/// Shared flag to abort a running search. Clones refer to the same flag, so a
/// handle can be passed to another thread or captured by an oracle.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> CancelHandle {
        CancelHandle::default()
    }

    /// Requests cancellation. The search fails at its next step.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// A* search bound to one [GridOracle].
///
/// Either call [calculate](Self::calculate) to run a whole search, or drive it
/// manually with [seed](Self::seed) followed by [step](Self::step) until
/// [SearchState::is_terminal] holds, then read [solution](Self::solution).
/// Node storage is kept between searches and reused.
pub struct SearchEngine<O> {
    oracle: O,
    config: SearchConfig,
    state: SearchState,
    pool: NodePool,
    frontier: Frontier,
    closed: ClosedSet,
    successors: Vec<(Position, i32)>,
    start: Option<NodeId>,
    goal: Option<NodeId>,
    cancel: CancelHandle,
    steps: usize,
    /// Pool size when the last search ended; the pool itself is emptied on failure.
    nodes_allocated: usize,
}

impl<O: GridOracle> SearchEngine<O> {
    pub fn new(oracle: O) -> SearchEngine<O> {
        SearchEngine::from_valid_config(oracle, SearchConfig::default())
    }

    /// # Errors
    ///
    /// Returns [SearchError::InvalidConfig] if `config` does not pass
    /// [SearchConfig::validate].
    pub fn with_config(oracle: O, config: SearchConfig) -> Result<SearchEngine<O>, SearchError> {
        config.validate()?;
        Ok(SearchEngine::from_valid_config(oracle, config))
    }

    fn from_valid_config(oracle: O, config: SearchConfig) -> SearchEngine<O> {
        SearchEngine {
            oracle,
            pool: NodePool::new(config.node_capacity),
            config,
            state: SearchState::NotInitialized,
            frontier: Frontier::default(),
            closed: ClosedSet::default(),
            successors: Vec::with_capacity(4),
            start: None,
            goal: None,
            cancel: CancelHandle::new(),
            steps: 0,
            nodes_allocated: 0,
        }
    }

    /// Replaces the engine's cancel flag with `handle`.
    #[must_use]
    pub fn with_cancel_handle(mut self, handle: CancelHandle) -> Self {
        self.cancel = handle;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            steps: self.steps,
            nodes_allocated: self.pool.len().max(self.nodes_allocated),
            open_high_water: self.frontier.high_water(),
            closed_high_water: self.closed.high_water(),
        }
    }

    /// Asks the running search to stop. It ends in
    /// `SearchState::Failed(FailReason::Cancelled)` at its next step; a search
    /// that already finished is not affected.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Positions expanded so far in the running search, in expansion order.
    pub fn visited(&self) -> impl Iterator<Item = &Position> + '_ {
        self.closed.positions()
    }

    /// Number of nodes waiting on the frontier.
    pub fn open_len(&self) -> usize {
        self.frontier.len()
    }

    fn heuristic(&self, from: &Position, goal: &Position) -> f32 {
        let dx = f64::from(from.x) - f64::from(goal.x);
        let dy = f64::from(from.y) - f64::from(goal.y);
        dx.hypot(dy) as f32 * self.config.heuristic_factor
    }

    /// Starts a new search, discarding whatever the previous one left behind
    /// and clearing any pending cancellation.
    pub fn seed(&mut self, start: Position, goal: Position) -> SearchState {
        self.cancel.reset();
        self.pool.reset();
        self.frontier.reset();
        self.closed.reset();
        self.start = None;
        self.goal = None;
        self.steps = 0;
        self.nodes_allocated = 0;

        if self.oracle.cost_at(&goal) >= self.config.non_walkable_threshold {
            debug!("Goal {} is not walkable", goal);
            self.state = SearchState::Failed(FailReason::GoalBlocked);
            return self.state;
        }
        let (Some(start_node), Some(goal_node)) =
            (self.pool.allocate(start), self.pool.allocate(goal))
        else {
            warn!("Node pool cannot hold the start and goal nodes");
            self.state = SearchState::OutOfMemory;
            return self.state;
        };

        let distance = self.heuristic(&start, &goal);
        let node = self.pool.get_mut(start_node);
        node.cost = 0.0;
        node.distance = distance;
        node.cost_distance_sum = distance;
        node.parent = None;
        let cost_distance_sum = node.cost_distance_sum;
        self.frontier.push(start_node, start, cost_distance_sum);

        self.start = Some(start_node);
        self.goal = Some(goal_node);
        self.state = SearchState::Searching;
        debug!("Searching from {} to {}", start, goal);
        self.state
    }

    /// Expands one node. Returns the state after the step; calling this in a
    /// terminal state returns that state without doing anything.
    pub fn step(&mut self) -> SearchState {
        match self.state {
            SearchState::Searching => {}
            SearchState::NotInitialized => {
                warn!("step called before the search was seeded");
                return self.state;
            }
            terminal => return terminal,
        }
        let (Some(start), Some(goal)) = (self.start, self.goal) else {
            return self.finish(SearchState::NotInitialized);
        };

        if self.cancel.is_cancelled() {
            debug!("Search cancelled after {} steps", self.steps);
            return self.finish(SearchState::Failed(FailReason::Cancelled));
        }
        let Some(node) = self.frontier.pop() else {
            debug!("Frontier exhausted after {} steps", self.steps);
            return self.finish(SearchState::Failed(FailReason::Exhausted));
        };
        self.steps += 1;

        let goal_position = self.pool.get(goal).position;
        let (position, cost, distance, parent) = {
            let n = self.pool.get(node);
            (n.position, n.cost, n.distance, n.parent)
        };
        trace!(
            "Step {}: expanding {} (g {}, h {}), {} open, {} closed",
            self.steps,
            position,
            cost,
            distance,
            self.frontier.len(),
            self.closed.len()
        );

        if position == goal_position {
            self.link_solution(node, start, goal);
            info!(
                "Found path to {} with cost {} after {} steps",
                goal_position, cost, self.steps
            );
            return self.finish(SearchState::Succeeded);
        }

        let came_from = parent.map(|p| self.pool.get(p).position);
        let mut successors = std::mem::take(&mut self.successors);
        neighbourhood_and_cost(
            &self.oracle,
            self.config.non_walkable_threshold,
            &position,
            came_from.as_ref(),
            &mut successors,
        );

        let mut pool_exhausted = false;
        for &(successor, entry_cost) in &successors {
            let new_cost = cost + entry_cost as f32;

            // Keep the successor only if it beats every node already found at
            // the same position.
            let open = self.frontier.find(&successor);
            if open.is_some_and(|id| self.pool.get(id).cost <= new_cost) {
                continue;
            }
            let closed = self.closed.find(&successor);
            if closed.is_some_and(|id| self.pool.get(id).cost <= new_cost) {
                continue;
            }

            let Some(id) = self.pool.allocate(successor) else {
                pool_exhausted = true;
                break;
            };
            let distance = self.heuristic(&successor, &goal_position);
            let s = self.pool.get_mut(id);
            s.parent = Some(node);
            s.cost = new_cost;
            s.distance = distance;
            s.cost_distance_sum = new_cost + distance;
            let cost_distance_sum = s.cost_distance_sum;

            if closed.is_some() {
                self.closed.remove(&successor);
            }
            if open.is_some() {
                self.frontier.remove(&successor);
            }
            self.frontier.push(id, successor, cost_distance_sum);
        }

        self.successors = successors;
        if pool_exhausted {
            warn!(
                "Node pool exhausted after {} nodes and {} steps",
                self.pool.len(),
                self.steps
            );
            return self.finish(SearchState::OutOfMemory);
        }
        self.closed.insert(position, node);
        self.state
    }

    /// Hands the found node's parent and cost to the goal node and links every
    /// node on the way back to the start to its successor.
    fn link_solution(&mut self, found: NodeId, start: NodeId, goal: NodeId) {
        let (parent, cost) = {
            let n = self.pool.get(found);
            (n.parent, n.cost)
        };
        let goal_node = self.pool.get_mut(goal);
        goal_node.parent = parent;
        goal_node.cost = cost;

        if found == start {
            return;
        }
        let mut child = goal;
        while let Some(parent) = self.pool.get(child).parent {
            self.pool.get_mut(parent).child = Some(child);
            child = parent;
        }
        debug_assert_eq!(child, start);
    }

    /// Moves to a terminal state, dropping the working lists. The nodes survive
    /// a success so the solution can still be read.
    fn finish(&mut self, state: SearchState) -> SearchState {
        self.frontier.clear();
        self.closed.clear();
        self.successors.clear();
        self.nodes_allocated = self.pool.len();
        if state != SearchState::Succeeded {
            self.pool.reset();
            self.start = None;
            self.goal = None;
        }
        self.state = state;
        state
    }

    /// The path found by the last search, start and goal included. Empty unless
    /// the search succeeded.
    pub fn solution(&self) -> Vec<Position> {
        match (self.state, self.start) {
            (SearchState::Succeeded, Some(start)) => follow_children(&self.pool, start),
            _ => Vec::new(),
        }
    }

    /// Accumulated cost of the path found by the last search.
    pub fn solution_cost(&self) -> Option<f32> {
        match (self.state, self.goal) {
            (SearchState::Succeeded, Some(goal)) => Some(self.pool.get(goal).cost),
            _ => None,
        }
    }

    /// Runs a complete search and reports why it failed if it did.
    ///
    /// # Errors
    ///
    /// Returns the [SearchError] matching the terminal state the search ended
    /// in. No partial path is ever returned.
    pub fn try_calculate(
        &mut self,
        start: Position,
        goal: Position,
    ) -> Result<Vec<Position>, SearchError> {
        let mut state = self.seed(start, goal);
        while state == SearchState::Searching {
            state = self.step();
        }
        match state {
            SearchState::Succeeded => Ok(self.solution()),
            SearchState::Failed(FailReason::Exhausted) => {
                Err(SearchError::NoPathFound { start, goal })
            }
            SearchState::Failed(FailReason::GoalBlocked) => Err(SearchError::GoalBlocked(goal)),
            SearchState::Failed(FailReason::Cancelled) => Err(SearchError::Cancelled),
            SearchState::OutOfMemory => Err(SearchError::OutOfMemory {
                capacity: self.pool.capacity().unwrap_or(u32::MAX as usize),
            }),
            SearchState::NotInitialized | SearchState::Searching => {
                Err(SearchError::NotTerminated)
            }
        }
    }

    /// Computes a path from `start` to `goal`, both included. Returns an empty
    /// path if the goal cannot be reached, the search was cancelled or the node
    /// pool ran out.
    pub fn calculate(&mut self, start: Position, goal: Position) -> Vec<Position> {
        match self.try_calculate(start, goal) {
            Ok(path) => path,
            Err(err) => {
                debug!("No path from {} to {}: {}", start, goal, err);
                Vec::new()
            }
        }
    }
}
