//! Flat per-circle export of a packing, for plotting tools.

use crate::class::RadiusClass;
use crate::dataset::SelectedBody;
use exopack_core::{RegionKind, RegionLayout, SolveResult};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Default ratio of the view extent to the outermost radius.
pub const DEFAULT_GRAPHIC_BORDER: f64 = 1.4;

/// One placed circle with its display attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRecord {
    pub region: RegionKind,
    /// Position of the body in the list it was selected into
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub class: RadiusClass,
    /// Fill colour as `#rrggbb`
    pub colour: String,
}

/// A complete layout ready to be written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub seed: u64,
    pub disk_radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annulus_radius: Option<f64>,
    /// Half-width of the suggested square view around the origin
    pub view_extent: f64,
    pub circles: Vec<LayoutRecord>,
}

impl LayoutDocument {
    /// Builds a document from a solve result and the bodies of each region.
    pub fn new(
        result: &SolveResult,
        confirmed: &[SelectedBody],
        candidates: &[SelectedBody],
        graphic_border: f64,
    ) -> Self {
        Self {
            seed: result.seed,
            disk_radius: result.confirmed.outer_radius,
            annulus_radius: result.candidates.as_ref().map(|c| c.outer_radius),
            view_extent: view_extent(result, graphic_border),
            circles: records(result, confirmed, candidates),
        }
    }
}

/// Returns one record per placed circle, disk first, in placement order.
///
/// Names are looked up in `confirmed` or `candidates` by placement index.
pub fn records(
    result: &SolveResult,
    confirmed: &[SelectedBody],
    candidates: &[SelectedBody],
) -> Vec<LayoutRecord> {
    let mut out = region_records(&result.confirmed, confirmed);
    if let Some(layout) = &result.candidates {
        out.extend(region_records(layout, candidates));
    }
    out
}

fn region_records(layout: &RegionLayout, bodies: &[SelectedBody]) -> Vec<LayoutRecord> {
    layout
        .placements
        .iter()
        .map(|p| {
            let class = RadiusClass::classify(p.radius);
            LayoutRecord {
                region: layout.kind,
                index: p.index,
                name: bodies.get(p.index).and_then(|b| b.name.clone()),
                x: p.x,
                y: p.y,
                radius: p.radius,
                class,
                colour: class.colour().hex(),
            }
        })
        .collect()
}

/// Half-width of the square view that frames the whole layout.
pub fn view_extent(result: &SolveResult, graphic_border: f64) -> f64 {
    graphic_border * result.outer_radius()
}

/// Writes records as CSV with a header row.
pub fn write_csv<W: Write>(mut writer: W, records: &[LayoutRecord]) -> io::Result<()> {
    writeln!(writer, "region,index,name,x,y,radius,class,colour")?;
    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            record.region,
            record.index,
            csv_field(record.name.as_deref().unwrap_or_default()),
            record.x,
            record.y,
            record.radius,
            record.class.label(),
            record.colour
        )?;
    }
    writer.flush()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
