//! Disk and annulus containers.

use crate::sizing;
use exopack_core::geometry::{Boundary, RadiusSet, RegionKind};
use exopack_core::solver::AnnulusSampling;
use exopack_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A disk container centred at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Disk {
    radius: f64,
}

impl Disk {
    /// Creates a disk with the given radius.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Creates the disk whose area is `inflation` times the circles' total area.
    pub fn sized_for(circles: &RadiusSet, inflation: f64) -> Self {
        Self::new(sizing::disk_radius(circles, inflation))
    }

    /// Returns the disk radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Boundary for Disk {
    fn kind(&self) -> RegionKind {
        RegionKind::Disk
    }

    fn inner_radius(&self) -> f64 {
        0.0
    }

    fn outer_radius(&self) -> f64 {
        self.radius
    }

    fn radial_range(&self, radius: f64) -> Option<(f64, f64)> {
        (radius <= self.radius).then(|| (0.0, self.radius - radius))
    }

    fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(Error::InvalidBoundary(format!(
                "disk radius must be finite and non-negative, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

/// An annulus container centred at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Annulus {
    inner: f64,
    outer: f64,
    sampling: AnnulusSampling,
}

impl Annulus {
    /// Creates an annulus with the given inner and outer radii.
    pub fn new(inner: f64, outer: f64) -> Self {
        Self {
            inner,
            outer,
            sampling: AnnulusSampling::default(),
        }
    }

    /// Creates the annulus around a disk of radius `inner` whose own area is
    /// `inflation` times the circles' total area, widened if it is too thin
    /// for the largest circle.
    pub fn sized_around(inner: f64, circles: &RadiusSet, inflation: f64, margin: f64) -> Self {
        Self::new(
            inner,
            sizing::annulus_outer_radius(inner, circles, inflation, margin),
        )
    }

    /// Sets the sampling variant.
    pub fn with_sampling(mut self, sampling: AnnulusSampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Returns the sampling variant.
    pub fn sampling(&self) -> AnnulusSampling {
        self.sampling
    }

    /// Returns the radial thickness.
    pub fn thickness(&self) -> f64 {
        self.outer - self.inner
    }
}

impl Boundary for Annulus {
    fn kind(&self) -> RegionKind {
        RegionKind::Annulus
    }

    fn inner_radius(&self) -> f64 {
        self.inner
    }

    fn outer_radius(&self) -> f64 {
        self.outer
    }

    fn radial_range(&self, radius: f64) -> Option<(f64, f64)> {
        let lo = self.inner + radius;
        let hi = self.outer - radius;
        if lo > hi {
            return None;
        }
        match self.sampling {
            AnnulusSampling::Clearance => Some((lo, hi)),
            AnnulusSampling::FullRange => Some((self.inner, hi)),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.inner.is_finite() || !self.outer.is_finite() {
            return Err(Error::InvalidBoundary(
                "annulus radii must be finite".into(),
            ));
        }
        if self.inner < 0.0 || self.outer < self.inner {
            return Err(Error::InvalidBoundary(format!(
                "annulus requires 0 <= inner <= outer, got inner {} and outer {}",
                self.inner, self.outer
            )));
        }
        Ok(())
    }
}
