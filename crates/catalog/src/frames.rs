//! One disk packing per discovery year, for animating catalog growth.

use crate::dataset::{radius_set, Catalog, SelectedBody, SelectionOptions};
use exopack_circle::CirclePacker;
use exopack_core::{Config, Result, SolveResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// First year of the default frame range.
pub const FIRST_FRAME_YEAR: i32 = 2003;

/// Half-open range of years `[begin, end)`.
pub fn year_range(begin: i32, end: i32) -> Range<i32> {
    begin..end
}

/// Seed derived from a calendar date as `day * year * month`.
pub fn date_seed(year: i32, month: u32, day: u32) -> u64 {
    u64::from(day) * u64::from(year.unsigned_abs()) * u64::from(month)
}

/// Packing of the planets known by the end of one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Discovery year cut-off (inclusive)
    pub year: i32,
    /// Bodies packed in this frame; placement indices refer to this list
    pub bodies: Vec<SelectedBody>,
    /// Disk packing of `bodies`
    pub result: SolveResult,
}

impl Frame {
    /// Returns true if no planet was known by this year.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Builds a sequence of yearly disk packings.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    config: Config,
}

impl FrameSequence {
    /// Creates a sequence using `config` for every frame.
    ///
    /// With a fixed seed every frame reuses it, so each frame is reproducible
    /// on its own regardless of how frames are scheduled.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Packs the confirmed planets discovered up to each year of `years`.
    ///
    /// Frames are computed in parallel and returned in year order. The
    /// `discovered_before` filter of `options` is replaced per frame.
    pub fn frames(
        &self,
        catalog: &Catalog,
        years: Range<i32>,
        options: &SelectionOptions,
    ) -> Result<Vec<Frame>> {
        log::info!(
            "Generating frames for years {} to {}",
            years.start,
            years.end
        );

        years
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|year| self.frame(catalog, year, options))
            .collect()
    }

    /// Packs a single frame.
    pub fn frame(&self, catalog: &Catalog, year: i32, options: &SelectionOptions) -> Result<Frame> {
        let options = options.up_to_year(year);
        let bodies = catalog.confirmed_bodies(&options);
        log::info!("Year {}: {} planets", year, bodies.len());

        let circles = radius_set(&bodies)?;
        let result = CirclePacker::new(self.config.clone()).pack_disk(&circles)?;

        Ok(Frame {
            year,
            bodies,
            result,
        })
    }
}
