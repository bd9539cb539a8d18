//! Packing result representation.

use crate::geometry::RegionKind;
use crate::placement::{Placement, PlacementStats};
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The circles placed into one region, together with the region's bounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionLayout {
    /// Shape of the region.
    pub kind: RegionKind,

    /// Inner radius (0 for a disk).
    pub inner_radius: f64,

    /// Outer radius.
    pub outer_radius: f64,

    /// Accepted placements, in placement order (largest circle first).
    pub placements: Vec<Placement>,

    /// Number of times the region's placement pass was restarted.
    pub restarts: u32,
}

impl RegionLayout {
    /// Creates an empty layout for a region.
    pub fn new(kind: RegionKind, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            kind,
            inner_radius,
            outer_radius,
            placements: Vec::new(),
            restarts: 0,
        }
    }

    /// Returns the number of placed circles.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if nothing was placed in this region.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns the area of the region.
    pub fn region_area(&self) -> f64 {
        PI * (self.outer_radius * self.outer_radius - self.inner_radius * self.inner_radius)
    }

    /// Returns the total area covered by placed circles.
    pub fn circle_area(&self) -> f64 {
        self.placements
            .iter()
            .map(|p| PI * p.radius * p.radius)
            .sum()
    }

    /// Utilization ratio (0.0 - 1.0); 0 for a zero-area region.
    pub fn utilization(&self) -> f64 {
        let area = self.region_area();
        if area > 0.0 {
            self.circle_area() / area
        } else {
            0.0
        }
    }

    /// Returns the placements ordered by the caller's input index.
    pub fn by_input_index(&self) -> Vec<Placement> {
        let mut placements = self.placements.clone();
        placements.sort_by_key(|p| p.index);
        placements
    }

    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.placements)
    }
}

/// Result of a two-stage packing: confirmed circles in a disk and, optionally,
/// candidate circles in the surrounding annulus.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveResult {
    /// Layout of the inner disk.
    pub confirmed: RegionLayout,

    /// Layout of the surrounding annulus, when candidates were packed.
    pub candidates: Option<RegionLayout>,

    /// Seed of the random stream that produced this layout.
    pub seed: u64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl SolveResult {
    /// Returns the layouts of all packed regions, inner first.
    pub fn regions(&self) -> impl Iterator<Item = &RegionLayout> {
        std::iter::once(&self.confirmed).chain(self.candidates.iter())
    }

    /// Returns the total number of placed circles.
    pub fn placed_count(&self) -> usize {
        self.regions().map(RegionLayout::placed_count).sum()
    }

    /// Returns the radius of the outermost boundary.
    pub fn outer_radius(&self) -> f64 {
        self.regions()
            .map(|r| r.outer_radius)
            .fold(0.0, f64::max)
    }

    /// Returns the total number of restarts across regions.
    pub fn total_restarts(&self) -> u32 {
        self.regions().map(|r| r.restarts).sum()
    }

    /// Utilization of the full outer disk (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        let outer = self.outer_radius();
        let area = PI * outer * outer;
        if area > 0.0 {
            self.regions().map(RegionLayout::circle_area).sum::<f64>() / area
        } else {
            0.0
        }
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }
}

/// Summary statistics for a solve result.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveSummary {
    /// Circles placed in the disk.
    pub confirmed_placed: usize,
    /// Circles placed in the annulus.
    pub candidates_placed: usize,
    /// Disk radius.
    pub disk_radius: f64,
    /// Annulus outer radius, if an annulus was packed.
    pub annulus_radius: Option<f64>,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Total restarts.
    pub restarts: u32,
    /// Total samples drawn.
    pub attempts: u64,
    /// Computation time in milliseconds.
    pub time_ms: u64,
    /// Seed used.
    pub seed: u64,
}

impl From<&SolveResult> for SolveSummary {
    fn from(result: &SolveResult) -> Self {
        Self {
            confirmed_placed: result.confirmed.placed_count(),
            candidates_placed: result
                .candidates
                .as_ref()
                .map_or(0, RegionLayout::placed_count),
            disk_radius: result.confirmed.outer_radius,
            annulus_radius: result.candidates.as_ref().map(|r| r.outer_radius),
            utilization_percent: result.utilization() * 100.0,
            restarts: result.total_restarts(),
            attempts: result
                .regions()
                .map(|r| r.placement_stats().total_attempts)
                .sum(),
            time_ms: result.computation_time_ms,
            seed: result.seed,
        }
    }
}
