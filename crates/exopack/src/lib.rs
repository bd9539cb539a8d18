//! # exopack
//!
//! Randomized accept/reject circle packing, built to lay out exoplanet radii:
//! confirmed planets in a disk, unconfirmed candidates in the annulus around
//! it.
//!
//! ## Quick Start
//!
//! ```rust
//! use exopack::circle::CirclePacker;
//! use exopack::core::{Config, RadiusSet, Solver};
//!
//! let confirmed = RadiusSet::new(&[1.0, 0.8, 0.5])?;
//! let candidates = RadiusSet::new(&[0.6, 0.3])?;
//!
//! let packer = CirclePacker::new(Config::default().with_seed(7).with_area_inflation(4.0));
//! let result = packer.solve(&confirmed, &candidates)?;
//! assert_eq!(result.placed_count(), 5);
//! # Ok::<(), exopack::core::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `circle` (default): disk and annulus packing
//! - `catalog`: exoplanet catalogs, radius classes and layout export
//! - `serde`: Serialization support

/// Core traits and abstractions.
pub use exopack_core as core;

/// Disk and annulus packing.
#[cfg(feature = "circle")]
pub use exopack_circle as circle;

/// Exoplanet catalogs and layout export.
#[cfg(feature = "catalog")]
pub use exopack_catalog as catalog;

// Re-export commonly used types at root level
pub use exopack_core::{Config, Error, Placement, RadiusSet, Result, SolveResult, Solver};

#[cfg(feature = "circle")]
pub use exopack_circle::CirclePacker;
