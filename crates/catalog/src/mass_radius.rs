//! Piecewise power-law radius estimate for bodies with only a mass.
//!
//! Masses are in Earth masses, radii in Earth radii. The segments are not
//! smoothed, so the estimate jumps at the 200 Earth-mass boundary.

/// Upper mass bound of the rocky segment.
const ROCKY_LIMIT: f64 = 1.0;

/// Upper mass bound of the volatile-rich segment.
const GASEOUS_LIMIT: f64 = 200.0;

/// Estimates a radius from a mass.
///
/// `m <= 1` gives `m^0.3`, `1 < m <= 200` gives `m^0.5` and heavier bodies
/// give `22.6 m^-0.0086`.
pub fn radius_from_mass(mass: f64) -> f64 {
    if mass <= ROCKY_LIMIT {
        mass.powf(0.3)
    } else if mass <= GASEOUS_LIMIT {
        mass.powf(0.5)
    } else {
        22.6 * mass.powf(-0.0086)
    }
}

/// Applies [`radius_from_mass`] to every mass.
pub fn radii_from_masses(masses: &[f64]) -> Vec<f64> {
    masses.iter().copied().map(radius_from_mass).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segments() {
        assert_relative_eq!(radius_from_mass(1.0), 1.0);
        assert_relative_eq!(radius_from_mass(100.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(radius_from_mass(1000.0), 22.6 * 1000.0_f64.powf(-0.0086));
        assert_relative_eq!(radius_from_mass(1000.0), 21.30, epsilon = 0.01);
        assert_relative_eq!(radius_from_mass(0.5), 0.5_f64.powf(0.3));
    }

    #[test]
    fn test_discontinuity_at_segment_boundary() {
        let below = radius_from_mass(200.0);
        let above = radius_from_mass(200.0 + 1e-9);
        assert_relative_eq!(below, 200.0_f64.sqrt(), epsilon = 1e-12);
        assert!(above - below > 5.0);
    }

    #[test]
    fn test_elementwise() {
        let radii = radii_from_masses(&[1.0, 4.0, 0.0]);
        assert_eq!(radii.len(), 3);
        assert_relative_eq!(radii[1], 2.0, epsilon = 1e-12);
        assert_eq!(radii[2], 0.0);
    }
}
