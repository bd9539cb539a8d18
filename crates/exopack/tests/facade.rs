//! Tests of the top-level re-exports.

use approx::assert_relative_eq;
use exopack::{CirclePacker, Config, RadiusSet, Solver};

#[test]
fn test_solve_through_facade() {
    let confirmed = RadiusSet::new(&[3.0, 2.0, 1.0]).unwrap();
    let candidates = RadiusSet::new(&[5.0]).unwrap();
    let packer = CirclePacker::new(Config::default().with_seed(11));

    let result = packer.solve(&confirmed, &candidates).unwrap();
    let disk = &result.confirmed;
    let annulus = result.candidates.as_ref().unwrap();

    assert_relative_eq!(disk.outer_radius, 28.0_f64.sqrt(), epsilon = 1e-12);
    assert_eq!(annulus.inner_radius, disk.outer_radius);
    assert_relative_eq!(annulus.outer_radius, 1.1 * 10.0 + disk.outer_radius, epsilon = 1e-12);
    assert_eq!(result.placed_count(), 4);
    assert!(exopack::circle::verify_result(&result, 1.1, 1e-9).is_empty());
}
