//! Solver traits and configuration.

use crate::geometry::{RadiusSet, RegionKind};
use crate::result::SolveResult;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How centre distances are sampled inside an annulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnnulusSampling {
    /// Sample from `[inner + r, outer - r]`, so every sample clears the inner edge.
    #[default]
    Clearance,
    /// Sample from `[inner, outer - r]` and reject samples crossing the inner edge.
    FullRange,
}

/// Common configuration for packers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Multiplier on the summed circle area used to size each container.
    pub area_inflation: f64,

    /// Multiplier on `r_i + r_j` giving the minimum centre separation.
    /// 1.0 lets circles touch.
    pub spacing_factor: f64,

    /// Safety factor applied to the largest candidate diameter when the
    /// area-sized annulus is too thin for it.
    pub annulus_margin: f64,

    /// Annulus sampling variant.
    pub annulus_sampling: AnnulusSampling,

    /// Maximum samples per circle before the pass fails (0 = unlimited).
    pub max_attempts_per_circle: u64,

    /// Number of times a failed region pass is retried.
    pub max_restarts: u32,

    /// Maximum computation time in milliseconds (0 = unlimited).
    pub time_limit_ms: u64,

    /// Seed for the random stream. `None` draws a fresh seed per solve.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            area_inflation: 2.0,
            spacing_factor: 1.1,
            annulus_margin: 1.1,
            annulus_sampling: AnnulusSampling::default(),
            max_attempts_per_circle: 10_000,
            max_restarts: 5_000,
            time_limit_ms: 0,
            seed: None,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the area inflation factor.
    pub fn with_area_inflation(mut self, factor: f64) -> Self {
        self.area_inflation = factor;
        self
    }

    /// Sets the spacing factor between circles.
    pub fn with_spacing_factor(mut self, factor: f64) -> Self {
        self.spacing_factor = factor;
        self
    }

    /// Sets the thin-annulus safety factor.
    pub fn with_annulus_margin(mut self, margin: f64) -> Self {
        self.annulus_margin = margin;
        self
    }

    /// Sets the annulus sampling variant.
    pub fn with_annulus_sampling(mut self, sampling: AnnulusSampling) -> Self {
        self.annulus_sampling = sampling;
        self
    }

    /// Sets the per-circle attempt limit (0 = unlimited).
    pub fn with_max_attempts(mut self, attempts: u64) -> Self {
        self.max_attempts_per_circle = attempts;
        self
    }

    /// Sets the number of restarts allowed per region.
    pub fn with_max_restarts(mut self, restarts: u32) -> Self {
        self.max_restarts = restarts;
        self
    }

    /// Sets the time limit in milliseconds.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that all factors are finite and at least 1.
    pub fn validate(&self) -> Result<()> {
        let factors = [
            ("area_inflation", self.area_inflation),
            ("spacing_factor", self.spacing_factor),
            ("annulus_margin", self.annulus_margin),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value < 1.0 {
                return Err(Error::ConfigError(format!(
                    "{} must be a finite value >= 1.0, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Progress callback for long-running operations.
pub type ProgressCallback = Box<dyn Fn(ProgressInfo) + Send + Sync>;

/// Progress information, emitted once per accepted circle.
#[derive(Debug, Clone)]
pub struct ProgressInfo {
    /// Region being packed.
    pub region: RegionKind,
    /// Circles placed so far in this region.
    pub placed: usize,
    /// Circles to place in this region.
    pub total: usize,
    /// Samples drawn for the circle just placed.
    pub attempts: u64,
    /// Elapsed time in milliseconds.
    pub elapsed_ms: u64,
}

/// Trait for circle packers.
pub trait Solver {
    /// Packs `confirmed` into a disk and `candidates` into the surrounding annulus.
    fn solve(&self, confirmed: &RadiusSet, candidates: &RadiusSet) -> Result<SolveResult>;

    /// Solves with a progress callback.
    fn solve_with_progress(
        &self,
        confirmed: &RadiusSet,
        candidates: &RadiusSet,
        callback: ProgressCallback,
    ) -> Result<SolveResult>;

    /// Cancels an ongoing solve operation.
    fn cancel(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.area_inflation, 2.0);
        assert_eq!(config.spacing_factor, 1.1);
        assert_eq!(config.annulus_margin, 1.1);
        assert_eq!(config.annulus_sampling, AnnulusSampling::Clearance);
        assert_eq!(config.max_attempts_per_circle, 10_000);
        assert_eq!(config.max_restarts, 5_000);
        assert_eq!(config.time_limit_ms, 0);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_area_inflation(3.0)
            .with_spacing_factor(1.05)
            .with_max_attempts(500)
            .with_max_restarts(0)
            .with_time_limit(2000)
            .with_seed(42)
            .with_annulus_sampling(AnnulusSampling::FullRange);

        assert_eq!(config.area_inflation, 3.0);
        assert_eq!(config.spacing_factor, 1.05);
        assert_eq!(config.max_attempts_per_circle, 500);
        assert_eq!(config.max_restarts, 0);
        assert_eq!(config.time_limit_ms, 2000);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.annulus_sampling, AnnulusSampling::FullRange);
    }

    #[test]
    fn test_config_validation() {
        assert!(Config::new().with_area_inflation(0.5).validate().is_err());
        assert!(Config::new().with_spacing_factor(0.99).validate().is_err());
        assert!(Config::new().with_annulus_margin(f64::NAN).validate().is_err());
        assert!(Config::new().with_spacing_factor(1.0).validate().is_ok());
    }
}
