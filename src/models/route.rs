//! Route type.

use super::DEPOT;
use serde::{Deserialize, Serialize};

/// An ordered sequence of location indices driven by one vehicle.
///
/// A route is opened at the depot, grows by appending customers, and is
/// closed by appending the depot again. `stops()` includes both depot ends
/// once closed.
///
/// # Examples
///
/// ```
/// use u_aco::models::Route;
///
/// let mut route = Route::open(0);
/// route.push(2);
/// route.push(1);
/// route.close();
/// assert_eq!(route.stops(), &[0, 2, 1, 0]);
/// assert_eq!(route.customer_ids(), &[2, 1]);
/// assert!(route.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    vehicle_id: usize,
    stops: Vec<usize>,
    closed: bool,
}

impl Route {
    /// Starts a route for the given vehicle at the depot.
    pub fn open(vehicle_id: usize) -> Self {
        Self {
            vehicle_id,
            stops: vec![DEPOT],
            closed: false,
        }
    }

    /// Builds a closed route from a full stop sequence (depot at both ends).
    ///
    /// Returns `None` if the sequence does not start and end at the depot.
    pub fn from_stops(vehicle_id: usize, stops: Vec<usize>) -> Option<Self> {
        if stops.len() < 2 || stops[0] != DEPOT || stops[stops.len() - 1] != DEPOT {
            return None;
        }
        Some(Self {
            vehicle_id,
            stops,
            closed: true,
        })
    }

    /// Appends a customer.
    ///
    /// # Panics
    ///
    /// Panics if the route is already closed.
    pub fn push(&mut self, customer_id: usize) {
        assert!(!self.closed, "cannot extend a closed route");
        self.stops.push(customer_id);
    }

    /// Returns the route to the depot. Closing twice is a no-op.
    pub fn close(&mut self) {
        if !self.closed {
            self.stops.push(DEPOT);
            self.closed = true;
        }
    }

    /// Whether the route has returned to the depot.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Vehicle driving this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// The current (last visited) location.
    pub fn last(&self) -> usize {
        self.stops[self.stops.len() - 1]
    }

    /// Full stop sequence, depot ends included.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Customer ids in visit order, depot ends excluded.
    pub fn customer_ids(&self) -> &[usize] {
        let end = if self.closed {
            self.stops.len() - 1
        } else {
            self.stops.len()
        };
        &self.stops[1..end]
    }

    /// Number of customers on the route.
    pub fn len(&self) -> usize {
        self.customer_ids().len()
    }

    /// Returns `true` if the route serves no customer.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consecutive `(from, to)` pairs traversed by this route.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_open() {
        let r = Route::open(1);
        assert_eq!(r.vehicle_id(), 1);
        assert_eq!(r.stops(), &[0]);
        assert_eq!(r.last(), 0);
        assert!(r.is_empty());
        assert!(!r.is_closed());
    }

    #[test]
    fn test_route_push_and_close() {
        let mut r = Route::open(0);
        r.push(5);
        r.push(3);
        assert_eq!(r.last(), 3);
        assert_eq!(r.customer_ids(), &[5, 3]);
        r.close();
        r.close();
        assert_eq!(r.stops(), &[0, 5, 3, 0]);
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_empty_closed_route() {
        let mut r = Route::open(2);
        r.close();
        assert_eq!(r.stops(), &[0, 0]);
        assert!(r.is_empty());
        assert_eq!(r.edges().collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn test_edges() {
        let r = Route::from_stops(0, vec![0, 1, 2, 0]).expect("valid");
        assert_eq!(r.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_from_stops_rejects_open_sequence() {
        assert!(Route::from_stops(0, vec![0, 1, 2]).is_none());
        assert!(Route::from_stops(0, vec![1, 0]).is_none());
        assert!(Route::from_stops(0, vec![0]).is_none());
    }

    #[test]
    #[should_panic(expected = "closed route")]
    fn test_push_after_close_panics() {
        let mut r = Route::open(0);
        r.close();
        r.push(1);
    }
}
