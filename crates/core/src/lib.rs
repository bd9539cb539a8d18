//! # exopack Core
//!
//! Core traits and abstractions for the exopack circle packing engine.
//!
//! This crate provides the foundational types shared by the placement
//! engine, the catalog tooling and the command line front-end.
//!
//! ## Core Components
//!
//! - **Geometry**: `Circle`, `RadiusSet` (validated, largest first) and the
//!   `Boundary` trait implemented by the disk and annulus containers
//! - **Solver trait**: common interface for packers, with `Config` and
//!   progress reporting
//! - **Results**: `Placement`, `RegionLayout` and `SolveResult`
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Boundary, Circle, RadiusSet, RegionKind};
pub use placement::{Placement, PlacementStats};
pub use result::{RegionLayout, SolveResult, SolveSummary};
pub use solver::{AnnulusSampling, Config, ProgressCallback, ProgressInfo, Solver};
