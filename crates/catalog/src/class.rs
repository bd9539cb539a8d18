//! Size classes of bodies by radius, and their display colours.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Radius class of a body (radius in Earth radii).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadiusClass {
    SubEarth,
    Earth,
    SuperEarth,
    Neptune,
    Jupiter,
}

/// Exclusive upper bound of each class, smallest first. Anything at or
/// above the last bound is a Jupiter.
const CLASS_BOUNDS: [(f64, RadiusClass); 4] = [
    (0.8, RadiusClass::SubEarth),
    (1.25, RadiusClass::Earth),
    (2.6, RadiusClass::SuperEarth),
    (6.0, RadiusClass::Neptune),
];

impl RadiusClass {
    /// All classes, smallest first.
    pub const ALL: [RadiusClass; 5] = [
        RadiusClass::SubEarth,
        RadiusClass::Earth,
        RadiusClass::SuperEarth,
        RadiusClass::Neptune,
        RadiusClass::Jupiter,
    ];

    /// Classifies a radius.
    pub fn classify(radius: f64) -> Self {
        CLASS_BOUNDS
            .iter()
            .find(|(bound, _)| radius < *bound)
            .map_or(RadiusClass::Jupiter, |(_, class)| *class)
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            RadiusClass::SubEarth => "Subearth",
            RadiusClass::Earth => "Earth",
            RadiusClass::SuperEarth => "Superearth",
            RadiusClass::Neptune => "Neptune",
            RadiusClass::Jupiter => "Jupiter",
        }
    }

    /// Radius interval `[lower, upper)` covered by this class.
    pub fn bounds(&self) -> (f64, f64) {
        let position = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        let lower = if position == 0 {
            0.0
        } else {
            CLASS_BOUNDS[position - 1].0
        };
        let upper = CLASS_BOUNDS
            .get(position)
            .map_or(f64::INFINITY, |(bound, _)| *bound);
        (lower, upper)
    }

    /// Fill colour used when drawing bodies of this class.
    pub fn colour(&self) -> Rgb {
        match self {
            RadiusClass::SubEarth => Rgb::from_bytes(29, 166, 97),
            RadiusClass::Earth => Rgb::from_bytes(20, 107, 135),
            RadiusClass::SuperEarth => Rgb::from_bytes(135, 99, 21),
            RadiusClass::Neptune => Rgb::from_bytes(84, 53, 16),
            RadiusClass::Jupiter => Rgb::from_bytes(135, 40, 21),
        }
    }
}

impl fmt::Display for RadiusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An RGB colour with channels in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Builds a colour from byte channels, each divided by 256.
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 256.0,
            g: f64::from(g) / 256.0,
            b: f64::from(b) / 256.0,
        }
    }

    /// Returns the colour as `#rrggbb`.
    pub fn hex(&self) -> String {
        let channel = |v: f64| (v * 256.0).round().clamp(0.0, 255.0) as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(RadiusClass::classify(0.1), RadiusClass::SubEarth);
        assert_eq!(RadiusClass::classify(0.79), RadiusClass::SubEarth);
        assert_eq!(RadiusClass::classify(0.8), RadiusClass::Earth);
        assert_eq!(RadiusClass::classify(1.25), RadiusClass::SuperEarth);
        assert_eq!(RadiusClass::classify(2.59), RadiusClass::SuperEarth);
        assert_eq!(RadiusClass::classify(2.6), RadiusClass::Neptune);
        assert_eq!(RadiusClass::classify(6.0), RadiusClass::Jupiter);
        assert_eq!(RadiusClass::classify(25.0), RadiusClass::Jupiter);
    }

    #[test]
    fn test_bounds_cover_classification() {
        for class in RadiusClass::ALL {
            let (lower, upper) = class.bounds();
            assert_eq!(RadiusClass::classify(lower), class);
            if upper.is_finite() {
                assert_ne!(RadiusClass::classify(upper), class);
            }
        }
    }

    #[test]
    fn test_colours() {
        let earth = RadiusClass::Earth.colour();
        assert_eq!(earth.r, 20.0 / 256.0);
        assert_eq!(earth.hex(), "#146b87");
        assert_eq!(RadiusClass::SubEarth.colour().hex(), "#1da661");
        assert_eq!(RadiusClass::Jupiter.colour().hex(), "#872815");
    }

    #[test]
    fn test_labels() {
        assert_eq!(RadiusClass::SuperEarth.to_string(), "Superearth");
        assert_eq!(
            serde_json::to_string(&RadiusClass::SuperEarth).unwrap(),
            "\"super-earth\""
        );
    }
}
