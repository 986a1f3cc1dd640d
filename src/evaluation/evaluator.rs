//! Route length evaluation and partition checking.

use crate::distance::DistanceMatrix;
use crate::models::{Route, Solution, Violation, ViolationType, DEPOT};

/// Length of a single route: sum of distances between consecutive stops.
pub fn route_length(route: &Route, distances: &DistanceMatrix) -> f64 {
    route.edges().map(|(from, to)| distances.get(from, to)).sum()
}

/// Total length of a solution: the sum of its route lengths.
///
/// # Examples
///
/// ```
/// use u_aco::models::{Location, Route, Solution};
/// use u_aco::distance::DistanceMatrix;
/// use u_aco::evaluation::evaluate;
///
/// let locations = Location::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
/// let sol = Solution::from_routes(vec![Route::from_stops(0, vec![0, 1, 2, 3, 0]).unwrap()]);
/// assert!((evaluate(&sol, &dm) - 6.0).abs() < 1e-10);
/// ```
pub fn evaluate(solution: &Solution, distances: &DistanceMatrix) -> f64 {
    solution
        .routes()
        .iter()
        .map(|r| route_length(r, distances))
        .sum()
}

/// Checks that every customer `1..=num_customers` is visited exactly once
/// and that every route is a closed depot-to-depot sequence.
///
/// Returns all violations found; an empty list means the solution is a
/// valid partition.
pub fn check_partition(solution: &Solution, num_customers: usize) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut visits = vec![0usize; num_customers + 1];

    for (route_index, route) in solution.routes().iter().enumerate() {
        let stops = route.stops();
        if !route.is_closed() || stops[0] != DEPOT {
            violations.push(Violation::new(ViolationType::OpenRoute { route_index }));
        }

        let interior_end = if route.is_closed() {
            stops.len() - 1
        } else {
            stops.len()
        };
        for (position, &loc) in stops.iter().enumerate().take(interior_end).skip(1) {
            if loc == DEPOT {
                violations.push(Violation::new(ViolationType::MisplacedDepot {
                    route_index,
                    position,
                }));
            } else if loc > num_customers {
                violations.push(Violation::new(ViolationType::UnknownLocation {
                    route_index,
                    location: loc,
                }));
            } else {
                visits[loc] += 1;
            }
        }
    }

    for (customer_id, &count) in visits.iter().enumerate().skip(1) {
        match count {
            1 => {}
            0 => violations.push(Violation::new(ViolationType::UnvisitedCustomer { customer_id })),
            _ => violations.push(Violation::new(ViolationType::DuplicateVisit {
                customer_id,
                count,
            })),
        }
    }

    violations
}
