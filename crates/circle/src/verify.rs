//! Post-hoc checks of a layout against the containment and separation rules.

use exopack_core::geometry::RegionKind;
use exopack_core::result::{RegionLayout, SolveResult};
use std::fmt;

/// A rule broken by a layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// Circle extends past the outer boundary by `excess`.
    OutsideOuter { index: usize, excess: f64 },
    /// Circle reaches `depth` into the excluded inner disk of an annulus.
    InsideInner { index: usize, depth: f64 },
    /// Two circles are `gap` closer than the minimum separation.
    Overlap { first: usize, second: usize, gap: f64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::OutsideOuter { index, excess } => {
                write!(f, "circle {} exceeds the outer boundary by {:.6}", index, excess)
            }
            Violation::InsideInner { index, depth } => {
                write!(f, "circle {} crosses the inner boundary by {:.6}", index, depth)
            }
            Violation::Overlap { first, second, gap } => write!(
                f,
                "circles {} and {} are {:.6} short of the minimum separation",
                first, second, gap
            ),
        }
    }
}

/// Checks every placement of `layout` against its own bounds and the
/// pairwise separation `spacing_factor * (r_i + r_j)`.
///
/// Differences up to `tolerance` are accepted. Indices in the returned
/// violations are the caller's input indices.
pub fn verify_layout(layout: &RegionLayout, spacing_factor: f64, tolerance: f64) -> Vec<Violation> {
    let mut violations = Vec::new();
    let check_inner = layout.kind == RegionKind::Annulus && layout.inner_radius > 0.0;

    for p in &layout.placements {
        let d = p.distance_from_origin();
        let excess = d + p.radius - layout.outer_radius;
        if excess > tolerance {
            violations.push(Violation::OutsideOuter {
                index: p.index,
                excess,
            });
        }
        if check_inner {
            let depth = layout.inner_radius - (d - p.radius);
            if depth > tolerance {
                violations.push(Violation::InsideInner {
                    index: p.index,
                    depth,
                });
            }
        }
    }

    for (i, a) in layout.placements.iter().enumerate() {
        for b in &layout.placements[i + 1..] {
            let gap = spacing_factor * (a.radius + b.radius) - a.distance_to(b);
            if gap > tolerance {
                violations.push(Violation::Overlap {
                    first: a.index,
                    second: b.index,
                    gap,
                });
            }
        }
    }

    violations
}

/// Verifies every region of a solve result.
pub fn verify_result(result: &SolveResult, spacing_factor: f64, tolerance: f64) -> Vec<Violation> {
    result
        .regions()
        .flat_map(|layout| verify_layout(layout, spacing_factor, tolerance))
        .collect()
}
