//! Colony state carried across iterations.
//!
//! [`Colony`] owns the read-only distance and heuristic matrices, the
//! mutable pheromone matrix, and the global best solution. Each call to
//! [`Colony::step`] runs one iteration:
//!
//! 1. every ant constructs a solution from the same pheromone snapshot,
//! 2. solutions are evaluated and the iteration best is selected,
//! 3. the global best is replaced only by a strictly shorter solution,
//! 4. all trails evaporate, then the iteration best is reinforced.

use super::construct::SolutionConstructor;
use super::{AcoConfig, PheromoneMatrix};
use crate::distance::{DistanceMatrix, HeuristicMatrix};
use crate::error::AcoError;
use crate::evaluation::evaluate;
use crate::models::Solution;
use rand::Rng;
use tracing::{debug, trace};
use u_numflow::random::create_rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of one colony iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationSummary {
    /// 1-based iteration index.
    pub iteration: usize,
    /// Length of the best solution constructed in this iteration.
    pub iteration_best_length: f64,
    /// Global best length after this iteration.
    pub best_length: f64,
    /// Whether this iteration improved the global best.
    pub improved: bool,
}

/// Ant colony state for one optimization run.
///
/// Independent colonies share nothing, so several runs can execute side by
/// side without interfering.
///
/// # Examples
///
/// ```
/// use u_aco::aco::{AcoConfig, Colony};
/// use u_aco::distance::DistanceMatrix;
/// use u_aco::models::Location;
///
/// let locations = Location::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
/// let mut colony = Colony::new(dm, AcoConfig::default().with_num_vehicles(1)).unwrap();
/// assert!(colony.best_solution().is_none());
///
/// let mut rng = u_numflow::random::create_rng(1);
/// let summary = colony.step(&mut rng);
/// assert_eq!(summary.iteration, 1);
/// assert!((colony.best_length() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Colony {
    config: AcoConfig,
    distances: DistanceMatrix,
    heuristic: HeuristicMatrix,
    pheromone: PheromoneMatrix,
    best: Option<(Solution, f64)>,
    iteration: usize,
}

impl Colony {
    /// Validates the configuration and sets up the matrices.
    ///
    /// The pheromone matrix starts uniform at `config.initial_pheromone`.
    pub fn new(distances: DistanceMatrix, config: AcoConfig) -> Result<Self, AcoError> {
        config.validate()?;
        let heuristic = HeuristicMatrix::from_distances(&distances);
        let pheromone = PheromoneMatrix::new(distances.size(), config.initial_pheromone)?;
        Ok(Self {
            config,
            distances,
            heuristic,
            pheromone,
            best: None,
            iteration: 0,
        })
    }

    /// Runs one iteration and updates the pheromone matrix.
    ///
    /// Each ant draws its own seed from `rng` before construction starts,
    /// so sequential and parallel construction give identical results.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> IterationSummary {
        self.iteration += 1;

        let seeds: Vec<u64> = (0..self.config.num_ants).map(|_| rng.random()).collect();
        let ants = self.construct_ants(&seeds);

        // First minimum wins ties.
        let mut iteration_best = 0;
        for (k, (_, length)) in ants.iter().enumerate().skip(1) {
            if *length < ants[iteration_best].1 {
                iteration_best = k;
            }
        }
        let (iteration_solution, iteration_length) = &ants[iteration_best];

        let improved = *iteration_length < self.best_length();
        if improved {
            debug!(
                iteration = self.iteration,
                length = *iteration_length,
                previous = self.best_length(),
                "new best solution"
            );
            self.best = Some((iteration_solution.clone(), *iteration_length));
        }

        self.pheromone.evaporate(self.config.rho);
        self.pheromone.reinforce(iteration_solution, *iteration_length);

        trace!(
            iteration = self.iteration,
            iteration_best = *iteration_length,
            best = self.best_length(),
            "iteration complete"
        );

        IterationSummary {
            iteration: self.iteration,
            iteration_best_length: *iteration_length,
            best_length: self.best_length(),
            improved,
        }
    }

    fn construct_ants(&self, seeds: &[u64]) -> Vec<(Solution, f64)> {
        let constructor = SolutionConstructor::new(
            &self.pheromone,
            &self.heuristic,
            self.config.alpha,
            self.config.beta,
        );
        let num_vehicles = self.config.num_vehicles;
        let distances = &self.distances;
        let build = |&seed: &u64| {
            let mut ant_rng = create_rng(seed);
            let solution = constructor.construct(num_vehicles, &mut ant_rng);
            let length = evaluate(&solution, distances);
            (solution, length)
        };

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                return seeds.par_iter().map(build).collect();
            }
        }

        seeds.iter().map(build).collect()
    }

    /// The best solution found so far, if any iteration has run.
    pub fn best_solution(&self) -> Option<&Solution> {
        self.best.as_ref().map(|(s, _)| s)
    }

    /// Length of the best solution so far (`+∞` before the first iteration).
    pub fn best_length(&self) -> f64 {
        self.best.as_ref().map_or(f64::INFINITY, |(_, l)| *l)
    }

    /// Number of iterations run so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Current pheromone matrix.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// Distance matrix of the instance.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Configuration of this colony.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Consumes the colony, returning the best solution and its length.
    pub fn into_best(self) -> Option<(Solution, f64)> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::check_partition;
    use crate::models::Location;

    fn sample_distances() -> DistanceMatrix {
        let locations = Location::from_coords(&[
            (40.0, 50.0),
            (45.0, 68.0),
            (50.0, 30.0),
            (55.0, 20.0),
            (60.0, 80.0),
            (65.0, 60.0),
            (70.0, 40.0),
        ]);
        DistanceMatrix::from_locations(&locations).expect("valid")
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = Colony::new(sample_distances(), AcoConfig::default().with_num_ants(0)).unwrap_err();
        assert_eq!(err, AcoError::NoAnts);
    }

    #[test]
    fn test_initial_state() {
        let colony = Colony::new(sample_distances(), AcoConfig::default()).expect("valid");
        assert_eq!(colony.iteration(), 0);
        assert!(colony.best_solution().is_none());
        assert!(colony.best_length().is_infinite());
        assert_eq!(colony.pheromone().size(), 7);
        assert_eq!(colony.pheromone().min_value(), 1.0);
    }

    #[test]
    fn test_best_is_monotone() {
        let mut colony = Colony::new(sample_distances(), AcoConfig::default()).expect("valid");
        let mut rng = create_rng(42);
        let mut previous = f64::INFINITY;
        for _ in 0..40 {
            let summary = colony.step(&mut rng);
            assert!(summary.best_length <= previous);
            assert!(summary.best_length <= summary.iteration_best_length);
            assert_eq!(summary.improved, summary.best_length < previous);
            previous = summary.best_length;
        }
        let best = colony.best_solution().expect("ran");
        assert!((evaluate(best, colony.distances()) - colony.best_length()).abs() < 1e-9);
        assert!(check_partition(best, 6).is_empty());
        assert_eq!(best.num_routes(), 2);
    }

    #[test]
    fn test_pheromone_stays_positive() {
        let config = AcoConfig::default().with_rho(1.0).with_num_ants(3);
        let mut colony = Colony::new(sample_distances(), config).expect("valid");
        let mut rng = create_rng(3);
        for _ in 0..25 {
            colony.step(&mut rng);
            assert!(colony.pheromone().min_value() > 0.0);
        }
    }

    #[test]
    fn test_step_evaporates_then_reinforces() {
        let config = AcoConfig::default().with_num_ants(1).with_rho(0.5);
        let mut colony = Colony::new(sample_distances(), config).expect("valid");
        let summary = colony.step(&mut create_rng(8));
        let best = colony.best_solution().expect("ran").clone();
        let deposit = 1.0 / summary.iteration_best_length;

        let mut traversed = vec![vec![false; 7]; 7];
        for (i, j) in best.edges() {
            traversed[i][j] = true;
            traversed[j][i] = true;
        }
        for (i, row) in traversed.iter().enumerate() {
            for (j, &on_route) in row.iter().enumerate() {
                let tau = colony.pheromone().get(i, j);
                if on_route {
                    assert!(tau >= 0.5 + deposit - 1e-12);
                } else {
                    assert!((tau - 0.5).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let run = |seed| {
            let mut colony = Colony::new(sample_distances(), AcoConfig::default()).expect("valid");
            let mut rng = create_rng(seed);
            (0..10).map(|_| colony.step(&mut rng).best_length).collect::<Vec<_>>()
        };
        assert_eq!(run(5), run(5));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let run = |parallel| {
            let config = AcoConfig::default().with_parallel(parallel);
            let mut colony = Colony::new(sample_distances(), config).expect("valid");
            let mut rng = create_rng(21);
            for _ in 0..15 {
                colony.step(&mut rng);
            }
            colony.into_best().expect("ran")
        };
        assert_eq!(run(true), run(false));
    }
}
