//! Location type.

use serde::{Deserialize, Serialize};

/// Index of the depot in every location list, matrix, and route.
pub const DEPOT: usize = 0;

/// A depot or customer position in the plane.
///
/// Location 0 is the depot; locations `1..=N` are customers.
///
/// # Examples
///
/// ```
/// use u_aco::models::{Location, DEPOT};
///
/// let depot = Location::depot(40.0, 50.0);
/// assert_eq!(depot.id(), DEPOT);
/// assert!(depot.is_depot());
///
/// let c = Location::new(1, 43.0, 54.0);
/// assert!((depot.distance_to(&c) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: usize,
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a location with the given index and coordinates.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Creates the depot at the given coordinates (id = 0).
    pub fn depot(x: f64, y: f64) -> Self {
        Self::new(DEPOT, x, y)
    }

    /// Builds a location list from raw coordinates, the first being the depot.
    pub fn from_coords(coords: &[(f64, f64)]) -> Vec<Self> {
        coords
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Self::new(id, x, y))
            .collect()
    }

    /// Location index (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` for the depot.
    pub fn is_depot(&self) -> bool {
        self.id == DEPOT
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_new() {
        let l = Location::new(3, 10.0, 20.0);
        assert_eq!(l.id(), 3);
        assert_eq!(l.x(), 10.0);
        assert_eq!(l.y(), 20.0);
        assert!(!l.is_depot());
    }

    #[test]
    fn test_location_depot() {
        let d = Location::depot(35.0, 35.0);
        assert_eq!(d.id(), 0);
        assert!(d.is_depot());
    }

    #[test]
    fn test_from_coords_assigns_ids() {
        let locs = Location::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(locs.len(), 3);
        assert!(locs[0].is_depot());
        assert_eq!(locs[2].id(), 2);
        assert_eq!(locs[2].x(), 2.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Location::new(0, 1.0, 2.0);
        let b = Location::new(1, 4.0, 6.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }
}
