//! Accept/reject placement of circles into a single region.
//!
//! Circles are taken largest first. For each one a centre is sampled in
//! polar coordinates (distance uniform over the boundary's radial range,
//! angle uniform over a full turn) until the candidate lies inside the region
//! and keeps the minimum separation from every circle already accepted in
//! this pass. Accepted positions are never revisited.

use exopack_core::geometry::{Boundary, RadiusSet};
use exopack_core::placement::Placement;
use exopack_core::result::RegionLayout;
use exopack_core::solver::{Config, ProgressCallback, ProgressInfo};
use exopack_core::{Error, Result};
use nalgebra::Point2;
use rand::Rng;
use std::f64::consts::TAU;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Number of samples between wall-clock checks.
const CLOCK_CHECK_INTERVAL: u64 = 256;

/// Runs one placement pass over a region.
pub struct Placer<'a> {
    spacing_factor: f64,
    max_attempts: u64,
    deadline: Option<(Instant, u64)>,
    cancelled: Option<&'a AtomicBool>,
    progress: Option<&'a ProgressCallback>,
}

impl<'a> Placer<'a> {
    /// Creates a placer using the spacing and attempt limit from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            spacing_factor: config.spacing_factor,
            max_attempts: config.max_attempts_per_circle,
            deadline: None,
            cancelled: None,
            progress: None,
        }
    }

    /// Fails with `Error::Timeout` once `limit_ms` have passed since `start`
    /// (0 = unlimited).
    pub fn with_time_limit(mut self, start: Instant, limit_ms: u64) -> Self {
        self.deadline = (limit_ms > 0).then_some((start, limit_ms));
        self
    }

    /// Fails with `Error::Cancelled` once `flag` is set.
    pub fn with_cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancelled = Some(flag);
        self
    }

    /// Reports every accepted circle to `callback`.
    pub fn with_progress(mut self, callback: &'a ProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }

    /// Places every circle of `circles` inside `boundary`.
    ///
    /// Fails with `Error::NoPlacement` if a circle exhausts its attempt budget
    /// or cannot fit the region at all; the partial layout is discarded.
    pub fn place<B, R>(
        &self,
        circles: &RadiusSet,
        boundary: &B,
        rng: &mut R,
    ) -> Result<RegionLayout>
    where
        B: Boundary,
        R: Rng + ?Sized,
    {
        boundary.validate()?;

        let start = Instant::now();
        let total = circles.len();
        let mut layout = RegionLayout::new(
            boundary.kind(),
            boundary.inner_radius(),
            boundary.outer_radius(),
        );

        for (order, circle) in circles.iter().enumerate() {
            let (lo, hi) = boundary
                .radial_range(circle.radius)
                .ok_or(Error::NoPlacement {
                    index: order,
                    radius: circle.radius,
                    attempts: 0,
                })?;

            let mut attempts = 0u64;
            let center = loop {
                if self.max_attempts > 0 && attempts >= self.max_attempts {
                    return Err(Error::NoPlacement {
                        index: order,
                        radius: circle.radius,
                        attempts,
                    });
                }
                attempts += 1;
                self.check_interrupts(attempts)?;

                let candidate = sample_polar(rng, lo, hi);
                if !boundary.contains(&candidate, circle.radius) {
                    continue;
                }
                if violates_separation(
                    &candidate,
                    circle.radius,
                    &layout.placements,
                    self.spacing_factor,
                ) {
                    continue;
                }
                break candidate;
            };

            layout.placements.push(Placement::new(
                circle.index,
                order,
                circle.radius,
                center,
                attempts,
            ));

            log::debug!(
                "{} circle {} of {} placed after {} attempts",
                boundary.kind(),
                order + 1,
                total,
                attempts
            );

            if let Some(callback) = self.progress {
                callback(ProgressInfo {
                    region: boundary.kind(),
                    placed: order + 1,
                    total,
                    attempts,
                    elapsed_ms: start.elapsed().as_millis() as u64,
                });
            }
        }

        Ok(layout)
    }

    fn check_interrupts(&self, attempts: u64) -> Result<()> {
        if let Some(flag) = self.cancelled {
            if flag.load(Ordering::Relaxed) {
                return Err(Error::Cancelled);
            }
        }

        if attempts % CLOCK_CHECK_INTERVAL == 1 {
            if let Some((start, limit_ms)) = self.deadline {
                if start.elapsed().as_millis() as u64 >= limit_ms {
                    return Err(Error::Timeout(limit_ms));
                }
            }
        }

        Ok(())
    }
}

/// Samples a point at a uniform distance in `[lo, hi]` and a uniform angle.
fn sample_polar<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> Point2<f64> {
    let rho = rng.gen_range(lo..=hi);
    let phi = rng.gen_range(0.0..TAU);
    Point2::new(rho * phi.cos(), rho * phi.sin())
}

/// Returns true if a circle at `candidate` comes closer to any placed circle
/// than `spacing_factor` times the sum of their radii.
fn violates_separation(
    candidate: &Point2<f64>,
    radius: f64,
    placed: &[Placement],
    spacing_factor: f64,
) -> bool {
    placed.iter().any(|other| {
        let min_sep = spacing_factor * (radius + other.radius);
        nalgebra::distance_squared(candidate, &other.center()) < min_sep * min_sep
    })
}
