//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of routes to return.
    pub max_routes: usize,

    /// Maximum number of line changes allowed.
    pub max_transfers: usize,

    /// Paths with more hops than this are abandoned.
    pub max_path_hops: usize,

    /// Maximum number of queue entries processed per search.
    /// Bounds worst-case latency on large or disconnected networks.
    pub max_iterations: usize,

    /// How many extra hops a line-switching extension may take over the
    /// best known path to the same (station, line) state and still be
    /// explored.
    pub transfer_tolerance_hops: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_routes: usize,
        max_transfers: usize,
        max_path_hops: usize,
        max_iterations: usize,
        transfer_tolerance_hops: usize,
    ) -> Self {
        Self {
            max_routes,
            max_transfers,
            max_path_hops,
            max_iterations,
            transfer_tolerance_hops,
        }
    }

    /// Same limits with a different route and transfer budget.
    pub fn with_budget(&self, max_routes: usize, max_transfers: usize) -> Self {
        Self {
            max_routes,
            max_transfers,
            ..self.clone()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_routes: 5,
            max_transfers: 3,
            max_path_hops: 30,
            max_iterations: 5000,
            transfer_tolerance_hops: 5,
        }
    }
}
