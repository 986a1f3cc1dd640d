//! Probabilistic multi-vehicle solution construction.
//!
//! Vehicles take turns in round-robin order. On its turn a vehicle standing
//! at location `c` picks the next customer `u` from the shared unvisited set
//! with probability proportional to `τ(c, u)^α · η(c, u)^β`. Once a customer
//! is claimed by any vehicle it is gone for all of them, so every
//! constructed solution is a partition of the customers.

use super::PheromoneMatrix;
use crate::distance::HeuristicMatrix;
use crate::models::{Route, Solution};
use rand::Rng;
use tracing::trace;

/// Customers not yet claimed by any vehicle during one construction.
///
/// This is the single resource contended by all vehicles of an ant.
///
/// # Examples
///
/// ```
/// use u_aco::aco::UnvisitedSet;
///
/// let mut set = UnvisitedSet::new(3);
/// assert_eq!(set.len(), 3);
/// assert!(set.claim(2));
/// assert!(!set.claim(2));
/// assert!(!set.contains(2));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct UnvisitedSet {
    remaining: Vec<usize>,
    // Index of each customer in `remaining`, `None` once claimed.
    slot: Vec<Option<usize>>,
}

impl UnvisitedSet {
    /// Creates the set `{1, …, num_customers}`.
    pub fn new(num_customers: usize) -> Self {
        let mut slot = vec![None; num_customers + 1];
        for (pos, s) in slot.iter_mut().skip(1).enumerate() {
            *s = Some(pos);
        }
        Self {
            remaining: (1..=num_customers).collect(),
            slot,
        }
    }

    /// Customers still available, in no particular order.
    pub fn candidates(&self) -> &[usize] {
        &self.remaining
    }

    /// Returns `true` if the customer has not been claimed yet.
    pub fn contains(&self, customer_id: usize) -> bool {
        matches!(self.slot.get(customer_id), Some(Some(_)))
    }

    /// Removes the customer from the set in constant time.
    ///
    /// Returns `false` if it was already claimed (or never present).
    pub fn claim(&mut self, customer_id: usize) -> bool {
        let Some(pos) = self.slot.get_mut(customer_id).and_then(Option::take) else {
            return false;
        };
        self.remaining.swap_remove(pos);
        if let Some(&moved) = self.remaining.get(pos) {
            self.slot[moved] = Some(pos);
        }
        true
    }

    /// Number of unclaimed customers.
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Returns `true` once every customer has been claimed.
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Draws an index with probability proportional to its weight.
///
/// Uses cumulative-distribution sampling. Degenerate inputs still make
/// progress:
///
/// - weights summing to zero (or NaN) fall back to a uniform draw,
/// - infinite weights win uniformly among themselves.
///
/// Returns `None` only for an empty slice.
///
/// # Examples
///
/// ```
/// use u_aco::aco::weighted_choice;
///
/// let mut rng = u_numflow::random::create_rng(42);
/// assert_eq!(weighted_choice(&[0.0, 3.0, 0.0], &mut rng), Some(1));
/// assert!(weighted_choice(&[0.0, 0.0], &mut rng).is_some());
/// assert_eq!(weighted_choice(&[], &mut rng), None);
/// ```
pub fn weighted_choice<R: Rng>(weights: &[f64], rng: &mut R) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let total: f64 = weights.iter().filter(|w| !w.is_nan()).sum();

    if total.is_infinite() {
        let infinite: Vec<usize> = weights
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_infinite())
            .map(|(i, _)| i)
            .collect();
        if infinite.is_empty() {
            // Finite weights whose sum overflowed: rescale and retry.
            let max = weights
                .iter()
                .copied()
                .filter(|w| !w.is_nan())
                .fold(0.0, f64::max);
            let scaled: Vec<f64> = weights.iter().map(|w| w / max).collect();
            return weighted_choice(&scaled, rng);
        }
        return Some(infinite[rng.random_range(0..infinite.len())]);
    }

    if total <= 0.0 || total.is_nan() {
        trace!(candidates = weights.len(), "zero weight mass, sampling uniformly");
        return Some(rng.random_range(0..weights.len()));
    }

    let target = rng.random_range(0.0..1.0) * total;
    let mut cumulative = 0.0;
    let mut last_positive = 0;
    for (i, &w) in weights.iter().enumerate() {
        if w.is_nan() || w <= 0.0 {
            continue;
        }
        cumulative += w;
        last_positive = i;
        if target < cumulative {
            return Some(i);
        }
    }
    // Rounding can leave `target` at the very top of the distribution.
    Some(last_positive)
}

/// Builds one multi-vehicle solution from a read-only pheromone snapshot.
///
/// # Examples
///
/// ```
/// use u_aco::aco::{PheromoneMatrix, SolutionConstructor};
/// use u_aco::distance::{DistanceMatrix, HeuristicMatrix};
/// use u_aco::models::Location;
///
/// let locations = Location::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 2.0)]);
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
/// let eta = HeuristicMatrix::from_distances(&dm);
/// let tau = PheromoneMatrix::new(dm.size(), 1.0).unwrap();
///
/// let constructor = SolutionConstructor::new(&tau, &eta, 1.0, 2.0);
/// let mut rng = u_numflow::random::create_rng(7);
/// let solution = constructor.construct(2, &mut rng);
/// assert_eq!(solution.num_routes(), 2);
/// assert_eq!(solution.num_served(), 3);
/// ```
pub struct SolutionConstructor<'a> {
    pheromone: &'a PheromoneMatrix,
    heuristic: &'a HeuristicMatrix,
    alpha: f64,
    beta: f64,
}

impl<'a> SolutionConstructor<'a> {
    /// Creates a constructor over the given matrices and exponents.
    pub fn new(
        pheromone: &'a PheromoneMatrix,
        heuristic: &'a HeuristicMatrix,
        alpha: f64,
        beta: f64,
    ) -> Self {
        Self {
            pheromone,
            heuristic,
            alpha,
            beta,
        }
    }

    /// Selection weight `τ(from, to)^α · η(from, to)^β`.
    pub fn weight(&self, from: usize, to: usize) -> f64 {
        self.pheromone.get(from, to).powf(self.alpha) * self.heuristic.get(from, to).powf(self.beta)
    }

    /// Picks the next customer for a vehicle standing at `current`.
    ///
    /// Returns `None` if no candidates remain.
    pub fn choose_next<R: Rng>(
        &self,
        current: usize,
        unvisited: &UnvisitedSet,
        rng: &mut R,
    ) -> Option<usize> {
        let candidates = unvisited.candidates();
        let weights: Vec<f64> = candidates.iter().map(|&u| self.weight(current, u)).collect();
        weighted_choice(&weights, rng).map(|i| candidates[i])
    }

    /// Constructs a solution with exactly `num_vehicles` closed routes.
    ///
    /// Vehicles that find the unvisited set empty on their turn are closed
    /// as they are, possibly as the empty route `[0, 0]`.
    ///
    /// # Panics
    ///
    /// Panics if `num_vehicles` is zero.
    pub fn construct<R: Rng>(&self, num_vehicles: usize, rng: &mut R) -> Solution {
        assert!(num_vehicles > 0, "at least one vehicle is required");
        let num_customers = self.heuristic.size().saturating_sub(1);
        let mut unvisited = UnvisitedSet::new(num_customers);
        let mut routes: Vec<Route> = (0..num_vehicles).map(Route::open).collect();

        // Turns continue until a vehicle finds no candidate left.
        'turns: loop {
            for route in routes.iter_mut() {
                let Some(next) = self.choose_next(route.last(), &unvisited, rng) else {
                    break 'turns;
                };
                let claimed = unvisited.claim(next);
                debug_assert!(claimed, "customer {next} offered twice");
                route.push(next);
            }
        }

        for route in routes.iter_mut() {
            route.close();
        }

        let solution = Solution::from_routes(routes);
        debug_assert!(
            crate::evaluation::check_partition(&solution, num_customers).is_empty(),
            "constructed solution is not a partition of the customers"
        );
        solution
    }
}
