//! Area-budget sizing of containers.
//!
//! Sizing only guarantees that a container has enough area for its circles
//! (inflated by a slack factor), not that a packing exists.

use exopack_core::geometry::RadiusSet;

/// Radius `R` of the disk with `pi R^2 = inflation * sum(pi r_i^2)`.
///
/// An empty set gives `R = 0`.
pub fn disk_radius(circles: &RadiusSet, inflation: f64) -> f64 {
    (inflation * circles.sum_of_squares()).sqrt()
}

/// Outer radius of the annulus around a disk of radius `inner` whose own
/// area is `inflation` times the circles' total area.
///
/// If the resulting ring is thinner than the largest circle's diameter, the
/// outer radius is widened to `margin * 2 r_max + inner`. An empty set gives
/// a zero-width annulus (`outer == inner`).
pub fn annulus_outer_radius(inner: f64, circles: &RadiusSet, inflation: f64, margin: f64) -> f64 {
    if circles.is_empty() {
        return inner;
    }

    let outer = (inner * inner + inflation * circles.sum_of_squares()).sqrt();

    match circles.largest() {
        Some(largest) if 2.0 * largest > outer - inner => {
            let widened = margin * 2.0 * largest + inner;
            log::info!(
                "Annulus thickness {:.4} is below the largest diameter {:.4}; \
                 outer radius enlarged to {:.4}",
                outer - inner,
                2.0 * largest,
                widened
            );
            widened
        }
        _ => outer,
    }
}
