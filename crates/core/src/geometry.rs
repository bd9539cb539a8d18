//! Circle, radius set and container abstractions.

use crate::{Error, Result};
use nalgebra::Point2;
use std::f64::consts::PI;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shape of a packing region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RegionKind {
    /// Full disk centred at the origin.
    Disk,
    /// Ring bounded by an inner and an outer circle centred at the origin.
    Annulus,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionKind::Disk => write!(f, "disk"),
            RegionKind::Annulus => write!(f, "annulus"),
        }
    }
}

/// A circle to be packed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    /// Index of the circle in the caller's input sequence.
    pub index: usize,
    /// Circle radius.
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle.
    pub fn new(index: usize, radius: f64) -> Self {
        Self { index, radius }
    }

    /// Returns the area of the circle.
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

/// An immutable set of circle radii, sorted largest first.
///
/// Construction is the validation point for radii: every value must be
/// positive and finite. An empty set is valid and means "nothing to place".
/// Ties keep their input order, so placement order is fully determined by
/// the input.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadiusSet {
    circles: Vec<Circle>,
}

impl RadiusSet {
    /// Builds a radius set from raw radii, validating and sorting them.
    pub fn new(radii: &[f64]) -> Result<Self> {
        for (index, &radius) in radii.iter().enumerate() {
            validate_radius(index, radius)?;
        }

        let mut circles: Vec<Circle> = radii
            .iter()
            .enumerate()
            .map(|(index, &radius)| Circle::new(index, radius))
            .collect();
        circles.sort_by(|a, b| b.radius.total_cmp(&a.radius));

        Ok(Self { circles })
    }

    /// Creates an empty radius set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the circles in placement order (largest first).
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Returns an iterator over the circles in placement order.
    pub fn iter(&self) -> std::slice::Iter<'_, Circle> {
        self.circles.iter()
    }

    /// Returns the number of circles.
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// Returns true if there is nothing to place.
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Returns the largest radius, if any.
    pub fn largest(&self) -> Option<f64> {
        self.circles.first().map(|c| c.radius)
    }

    /// Returns the sum of squared radii.
    pub fn sum_of_squares(&self) -> f64 {
        self.circles.iter().map(|c| c.radius * c.radius).sum()
    }

    /// Returns the exact total area of all circles.
    pub fn total_area(&self) -> f64 {
        PI * self.sum_of_squares()
    }

    /// Returns the radii in placement order.
    pub fn radii(&self) -> Vec<f64> {
        self.circles.iter().map(|c| c.radius).collect()
    }
}

impl<'a> IntoIterator for &'a RadiusSet {
    type Item = &'a Circle;
    type IntoIter = std::slice::Iter<'a, Circle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_radius(index: usize, radius: f64) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(Error::InvalidRadius(format!(
            "radius at index {} is {}; radii must be positive and finite",
            index, radius
        )));
    }
    Ok(())
}

/// Trait for circular packing containers centred at the origin.
pub trait Boundary {
    /// Returns the shape of this region.
    fn kind(&self) -> RegionKind;

    /// Returns the inner radius (0 for a disk).
    fn inner_radius(&self) -> f64;

    /// Returns the outer radius.
    fn outer_radius(&self) -> f64;

    /// Returns the area of the region.
    fn measure(&self) -> f64 {
        let inner = self.inner_radius();
        let outer = self.outer_radius();
        PI * (outer * outer - inner * inner)
    }

    /// Returns the interval from which the centre distance of a circle with
    /// the given radius is sampled, or `None` if such a circle cannot fit.
    fn radial_range(&self, radius: f64) -> Option<(f64, f64)>;

    /// Returns true if a circle of `radius` centred at `center` lies fully
    /// inside the region.
    fn contains(&self, center: &Point2<f64>, radius: f64) -> bool {
        let distance = center.coords.norm();
        if distance + radius > self.outer_radius() {
            return false;
        }
        let inner = self.inner_radius();
        !(inner > 0.0 && distance - radius < inner)
    }

    /// Validates the region.
    fn validate(&self) -> Result<()>;
}
