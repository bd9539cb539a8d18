//! Two-stage circle packer: confirmed circles in a disk, candidates in the
//! annulus around it.

use crate::boundary::{Annulus, Disk};
use crate::placer::Placer;
use exopack_core::geometry::{Boundary, RadiusSet};
use exopack_core::result::{RegionLayout, SolveResult};
use exopack_core::solver::{Config, ProgressCallback, Solver};
use exopack_core::Result;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Randomized accept/reject circle packer.
pub struct CirclePacker {
    config: Config,
    cancelled: Arc<AtomicBool>,
}

impl CirclePacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a handle that cancels the running solve when set.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }

    /// Packs `circles` into a disk only; the result has no annulus.
    pub fn pack_disk(&self, circles: &RadiusSet) -> Result<SolveResult> {
        self.run(circles, None, None)
    }

    fn run(
        &self,
        confirmed: &RadiusSet,
        candidates: Option<&RadiusSet>,
        progress: Option<&ProgressCallback>,
    ) -> Result<SolveResult> {
        self.config.validate()?;

        // Reset cancellation flag
        self.cancelled.store(false, Ordering::Relaxed);

        let start = Instant::now();
        let seed = self.config.seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);
        log::info!("Packing with seed {}", seed);

        let inflation = self.config.area_inflation;
        let disk = Disk::sized_for(confirmed, inflation);
        log::info!(
            "Total area of {} confirmed circles is {:.4}, giving a disk of radius {:.4}",
            confirmed.len(),
            confirmed.total_area() * inflation,
            disk.radius()
        );

        let confirmed_layout = self.place_region(confirmed, &disk, &mut rng, start, progress)?;

        let candidates_layout = match candidates {
            Some(candidates) => {
                let annulus = Annulus::sized_around(
                    disk.radius(),
                    candidates,
                    inflation,
                    self.config.annulus_margin,
                )
                .with_sampling(self.config.annulus_sampling);
                log::info!(
                    "Total area of {} candidate circles is {:.4}, \
                     giving an annulus of outer radius {:.4}",
                    candidates.len(),
                    candidates.total_area() * inflation,
                    annulus.outer_radius()
                );
                Some(self.place_region(candidates, &annulus, &mut rng, start, progress)?)
            }
            None => None,
        };

        Ok(SolveResult {
            confirmed: confirmed_layout,
            candidates: candidates_layout,
            seed,
            computation_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Places one region, restarting the whole pass when a circle cannot be placed.
    fn place_region<B: Boundary>(
        &self,
        circles: &RadiusSet,
        boundary: &B,
        rng: &mut StdRng,
        start: Instant,
        progress: Option<&ProgressCallback>,
    ) -> Result<RegionLayout> {
        let mut placer = Placer::new(&self.config)
            .with_time_limit(start, self.config.time_limit_ms)
            .with_cancel_flag(&self.cancelled);
        if let Some(callback) = progress {
            placer = placer.with_progress(callback);
        }

        let mut restarts = 0u32;
        loop {
            match placer.place(circles, boundary, rng) {
                Ok(mut layout) => {
                    layout.restarts = restarts;
                    log::info!(
                        "Placed {} circles in {} (restarts: {})",
                        layout.placed_count(),
                        boundary.kind(),
                        restarts
                    );
                    return Ok(layout);
                }
                Err(err) if err.is_retryable() && restarts < self.config.max_restarts => {
                    restarts += 1;
                    log::warn!(
                        "{}; restarting {} placement ({}/{})",
                        err,
                        boundary.kind(),
                        restarts,
                        self.config.max_restarts
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for CirclePacker {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Solver for CirclePacker {
    fn solve(&self, confirmed: &RadiusSet, candidates: &RadiusSet) -> Result<SolveResult> {
        self.run(confirmed, Some(candidates), None)
    }

    fn solve_with_progress(
        &self,
        confirmed: &RadiusSet,
        candidates: &RadiusSet,
        callback: ProgressCallback,
    ) -> Result<SolveResult> {
        self.run(confirmed, Some(candidates), Some(&callback))
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}
