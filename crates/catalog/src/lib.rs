//! # exopack Catalog
//!
//! Turns exoplanet catalogs into radius sets for the packer and packed
//! layouts into plottable records.
//!
//! - **Catalog**: confirmed planets and candidates read from JSON or from
//!   single-column archive tables, with optional radius estimates for
//!   planets that only have a mass
//! - **Classes**: size classes and their display colours
//! - **Frames**: one disk packing per discovery year
//! - **Export**: per-circle records as JSON or CSV

pub mod class;
pub mod dataset;
pub mod export;
pub mod frames;
pub mod mass_radius;
pub mod parser;

pub use class::{RadiusClass, Rgb};
pub use dataset::{radius_set, BodyRecord, Catalog, SelectedBody, SelectionOptions};
pub use export::{
    records, view_extent, write_csv, LayoutDocument, LayoutRecord, DEFAULT_GRAPHIC_BORDER,
};
pub use frames::{date_seed, year_range, Frame, FrameSequence, FIRST_FRAME_YEAR};
pub use mass_radius::{radii_from_masses, radius_from_mass};
pub use parser::{CatalogParser, ParseError};
