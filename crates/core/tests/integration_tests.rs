//! Integration tests for exopack-core.

use exopack_core::geometry::{Boundary, RadiusSet, RegionKind};
use exopack_core::placement::{Placement, PlacementStats};
use exopack_core::result::{RegionLayout, SolveResult, SolveSummary};
use exopack_core::solver::Config;
use exopack_core::Error;
use nalgebra::Point2;

/// Minimal boundary used to exercise the trait's provided methods.
struct Ring {
    inner: f64,
    outer: f64,
}

impl Boundary for Ring {
    fn kind(&self) -> RegionKind {
        if self.inner > 0.0 {
            RegionKind::Annulus
        } else {
            RegionKind::Disk
        }
    }

    fn inner_radius(&self) -> f64 {
        self.inner
    }

    fn outer_radius(&self) -> f64 {
        self.outer
    }

    fn radial_range(&self, radius: f64) -> Option<(f64, f64)> {
        let lo = if self.inner > 0.0 { self.inner + radius } else { 0.0 };
        let hi = self.outer - radius;
        (lo <= hi).then_some((lo, hi))
    }

    fn validate(&self) -> exopack_core::Result<()> {
        Ok(())
    }
}

mod boundary_tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_disk_contains_circle_over_origin() {
        let disk = Ring {
            inner: 0.0,
            outer: 5.0,
        };
        // A circle straddling the origin is fine inside a disk.
        assert!(disk.contains(&Point2::new(0.5, 0.0), 2.0));
        assert!(disk.contains(&Point2::new(3.0, 0.0), 2.0));
        assert!(!disk.contains(&Point2::new(3.1, 0.0), 2.0));
    }

    #[test]
    fn test_annulus_rejects_inner_overlap() {
        let ring = Ring {
            inner: 3.0,
            outer: 8.0,
        };
        assert!(ring.contains(&Point2::new(0.0, 4.0), 1.0));
        assert!(!ring.contains(&Point2::new(0.0, 3.5), 1.0));
        assert!(!ring.contains(&Point2::new(0.0, 7.5), 1.0));
    }

    #[test]
    fn test_measure() {
        let ring = Ring {
            inner: 1.0,
            outer: 2.0,
        };
        assert_relative_eq!(ring.measure(), 3.0 * PI, epsilon = 1e-12);
    }
}

mod radius_set_tests {
    use super::*;

    #[test]
    fn test_invalid_radius_reports_index() {
        let err = RadiusSet::new(&[1.0, 2.0, -0.5]).unwrap_err();
        match err {
            Error::InvalidRadius(msg) => assert!(msg.contains("index 2"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_iteration_order_is_largest_first() {
        let set = RadiusSet::new(&[0.5, 4.0, 1.5, 2.5]).unwrap();
        let radii: Vec<f64> = (&set).into_iter().map(|c| c.radius).collect();
        assert_eq!(radii, vec![4.0, 2.5, 1.5, 0.5]);
    }

    #[test]
    fn test_random_radii_sorted() {
        use rand::prelude::*;

        let mut rng = StdRng::seed_from_u64(42);
        let radii: Vec<f64> = (0..200).map(|_| rng.gen_range(0.1..20.0)).collect();
        let set = RadiusSet::new(&radii).unwrap();

        assert_eq!(set.len(), 200);
        for pair in set.circles().windows(2) {
            assert!(pair[0].radius >= pair[1].radius);
        }
        for circle in set.iter() {
            assert_eq!(radii[circle.index], circle.radius);
        }
    }
}

mod result_tests {
    use super::*;

    #[test]
    fn test_solve_result_without_annulus() {
        let mut disk = RegionLayout::new(RegionKind::Disk, 0.0, 4.0);
        disk.placements
            .push(Placement::new(0, 0, 2.0, Point2::new(1.0, 1.0), 5));

        let result = SolveResult {
            confirmed: disk,
            candidates: None,
            seed: 1,
            computation_time_ms: 0,
        };

        assert_eq!(result.regions().count(), 1);
        assert_eq!(result.outer_radius(), 4.0);
        assert_eq!(result.utilization_percent(), "25.0%");

        let summary = SolveSummary::from(&result);
        assert_eq!(summary.candidates_placed, 0);
        assert!(summary.annulus_radius.is_none());

        let stats: PlacementStats = result.confirmed.placement_stats();
        assert_eq!(stats.max_attempts, 5);
    }

    #[test]
    fn test_config_roundtrip_defaults_valid() {
        let config = Config::default().with_seed(9);
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, Some(9));
    }
}
