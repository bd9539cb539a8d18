//! Placement representation for positioned circles.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the accepted position of a circle within a region.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Index of the circle in the caller's input sequence.
    pub index: usize,

    /// Position in placement order (0 = largest circle).
    pub order: usize,

    /// Circle radius.
    pub radius: f64,

    /// Centre x coordinate.
    pub x: f64,

    /// Centre y coordinate.
    pub y: f64,

    /// Number of samples drawn before this circle was accepted.
    pub attempts: u64,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(
        index: usize,
        order: usize,
        radius: f64,
        center: Point2<f64>,
        attempts: u64,
    ) -> Self {
        Self {
            index,
            order,
            radius,
            x: center.x,
            y: center.y,
            attempts,
        }
    }

    /// Returns the centre as a point.
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Returns the distance of the centre from the origin.
    pub fn distance_from_origin(&self) -> f64 {
        self.center().coords.norm()
    }

    /// Returns the centre-to-centre distance to another placement.
    pub fn distance_to(&self, other: &Placement) -> f64 {
        nalgebra::distance(&self.center(), &other.center())
    }
}

/// Attempt statistics for a set of placements.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Total samples drawn across all placements.
    pub total_attempts: u64,
    /// Largest number of samples any single circle needed.
    pub max_attempts: u64,
    /// Mean samples per placement.
    pub mean_attempts: f64,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[Placement]) -> Self {
        let total_attempts: u64 = placements.iter().map(|p| p.attempts).sum();
        let max_attempts = placements.iter().map(|p| p.attempts).max().unwrap_or(0);
        let mean_attempts = if placements.is_empty() {
            0.0
        } else {
            total_attempts as f64 / placements.len() as f64
        };

        Self {
            count: placements.len(),
            total_attempts,
            max_attempts,
            mean_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_placement_geometry() {
        let a = Placement::new(0, 0, 1.0, Point2::new(3.0, 4.0), 1);
        let b = Placement::new(1, 1, 1.0, Point2::new(0.0, 0.0), 7);
        assert_relative_eq!(a.distance_from_origin(), 5.0);
        assert_relative_eq!(a.distance_to(&b), 5.0);
        assert_eq!(a.center(), Point2::new(3.0, 4.0));
    }

    #[test]
    fn test_placement_stats() {
        let placements = vec![
            Placement::new(2, 0, 3.0, Point2::origin(), 1),
            Placement::new(0, 1, 2.0, Point2::origin(), 4),
            Placement::new(1, 2, 1.0, Point2::origin(), 10),
        ];

        let stats = PlacementStats::from_placements(&placements);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_attempts, 15);
        assert_eq!(stats.max_attempts, 10);
        assert_relative_eq!(stats.mean_attempts, 5.0);
    }

    #[test]
    fn test_placement_stats_empty() {
        let stats = PlacementStats::from_placements(&[]);
        assert_eq!(stats, PlacementStats::default());
    }
}
