//! Solution and violation types.

use super::Route;
use serde::{Deserialize, Serialize};

/// A breach of the visit-once partition invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A customer does not appear in any route.
    UnvisitedCustomer {
        /// Customer that was never visited.
        customer_id: usize,
    },
    /// A customer appears more than once across all routes.
    DuplicateVisit {
        /// Customer visited repeatedly.
        customer_id: usize,
        /// Total number of visits.
        count: usize,
    },
    /// The depot appears inside a route.
    MisplacedDepot {
        /// Route index in the solution.
        route_index: usize,
        /// Position within the stop sequence.
        position: usize,
    },
    /// A route does not start and end at the depot.
    OpenRoute {
        /// Route index in the solution.
        route_index: usize,
    },
    /// A stop refers to an index outside `0..=num_customers`.
    UnknownLocation {
        /// Route index in the solution.
        route_index: usize,
        /// Out-of-range location index.
        location: usize,
    },
}

/// A partition violation found in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A multi-vehicle solution: one route per vehicle.
///
/// # Examples
///
/// ```
/// use u_aco::models::{Route, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::from_stops(0, vec![0, 1, 0]).unwrap());
/// sol.add_route(Route::from_stops(1, vec![0, 2, 3, 0]).unwrap());
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 3);
/// assert_eq!(sol.to_index_lists(), vec![vec![0, 1, 0], vec![0, 2, 3, 0]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Creates a solution from the given routes.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Adds a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes (one per vehicle).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Every `(from, to)` edge traversed by any route.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.routes.iter().flat_map(|r| r.edges())
    }

    /// Routes as plain index sequences, depot ends included.
    pub fn to_index_lists(&self) -> Vec<Vec<usize>> {
        self.routes.iter().map(|r| r.stops().to_vec()).collect()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}
