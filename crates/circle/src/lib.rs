//! # exopack Circle
//!
//! Randomized accept/reject packing of circles into a disk and the annulus
//! around it.
//!
//! Containers are sized from an area budget, then circles are placed largest
//! first by sampling polar coordinates until a position clears the boundary
//! and every circle already placed. A region whose pass gets stuck is
//! restarted from scratch on the same random stream.

pub mod boundary;
pub mod packer;
pub mod placer;
pub mod sizing;
pub mod verify;

// Re-exports
pub use boundary::{Annulus, Disk};
pub use packer::CirclePacker;
pub use placer::Placer;
pub use sizing::{annulus_outer_radius, disk_radius};
pub use verify::{verify_layout, verify_result, Violation};
pub use exopack_core::{
    AnnulusSampling, Config, Error, Placement, RadiusSet, Result, SolveResult, Solver,
};
