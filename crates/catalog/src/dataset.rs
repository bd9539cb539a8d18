//! Catalog types for confirmed planets and candidates.

use crate::mass_radius::radius_from_mass;
use exopack_core::{RadiusSet, Result};
use serde::{Deserialize, Serialize};

/// One catalog row. Radius is in Earth radii, mass in Earth masses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    /// Designation, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Measured radius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Measured (or minimum) mass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    /// Year of discovery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_year: Option<i32>,
}

impl BodyRecord {
    /// Creates a record with only a radius.
    pub fn with_radius(radius: f64) -> Self {
        Self {
            radius: Some(radius),
            ..Self::default()
        }
    }

    /// Creates a record with only a mass.
    pub fn with_mass(mass: f64) -> Self {
        Self {
            mass: Some(mass),
            ..Self::default()
        }
    }

    /// Sets the name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the discovery year.
    pub fn discovered(mut self, year: i32) -> Self {
        self.discovery_year = Some(year);
        self
    }
}

/// A body chosen for packing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedBody {
    /// Row index in the catalog list it came from
    pub source_index: usize,
    /// Designation, if known
    pub name: Option<String>,
    /// Radius used for packing
    pub radius: f64,
    /// True if the radius was estimated from the mass
    pub estimated: bool,
}

/// Filters applied when selecting confirmed planets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionOptions {
    /// Include planets lacking a radius by estimating it from their mass.
    pub estimate_from_mass: bool,
    /// Keep only bodies discovered in or before this year.
    pub discovered_before: Option<i32>,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            estimate_from_mass: true,
            discovered_before: None,
        }
    }
}

impl SelectionOptions {
    /// Sets whether masses are used for planets without a radius.
    pub fn with_mass_estimates(mut self, enabled: bool) -> Self {
        self.estimate_from_mass = enabled;
        self
    }

    /// Keeps only bodies discovered up to and including `year`.
    pub fn up_to_year(mut self, year: i32) -> Self {
        self.discovered_before = Some(year);
        self
    }
}

/// A catalog of confirmed planets and unconfirmed candidates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog name
    #[serde(default)]
    pub name: String,
    /// Confirmed planets
    #[serde(default)]
    pub planets: Vec<BodyRecord>,
    /// Unconfirmed candidates
    #[serde(default)]
    pub candidates: Vec<BodyRecord>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builds a catalog from bare radius lists.
    pub fn from_radii(name: impl Into<String>, planets: &[f64], candidates: &[f64]) -> Self {
        Self {
            name: name.into(),
            planets: planets.iter().copied().map(BodyRecord::with_radius).collect(),
            candidates: candidates
                .iter()
                .copied()
                .map(BodyRecord::with_radius)
                .collect(),
        }
    }

    /// Selects the confirmed planets to pack.
    ///
    /// Planets with a measured radius come first, in catalog order, followed
    /// by planets whose radius was estimated from their mass.
    pub fn confirmed_bodies(&self, options: &SelectionOptions) -> Vec<SelectedBody> {
        let in_window = |record: &BodyRecord| {
            match (options.discovered_before, record.discovery_year) {
                (Some(limit), Some(year)) => year <= limit,
                (Some(_), None) => false,
                (None, _) => true,
            }
        };

        let mut measured = Vec::new();
        let mut estimated = Vec::new();

        for (index, record) in self.planets.iter().enumerate() {
            if !in_window(record) {
                continue;
            }
            match (record.radius, record.mass) {
                (Some(radius), _) => {
                    if is_valid(radius) {
                        measured.push(select(index, record, radius, false));
                    } else {
                        log::warn!(
                            "Skipping planet {} with invalid radius {}",
                            describe(index, record),
                            radius
                        );
                    }
                }
                (None, Some(mass)) if options.estimate_from_mass => {
                    let radius = radius_from_mass(mass);
                    if is_valid(mass) && is_valid(radius) {
                        estimated.push(select(index, record, radius, true));
                    } else {
                        log::warn!(
                            "Skipping planet {} with invalid mass {}",
                            describe(index, record),
                            mass
                        );
                    }
                }
                _ => {}
            }
        }

        log::debug!(
            "Selected {} planets with radii and {} with radii estimated from mass",
            measured.len(),
            estimated.len()
        );
        measured.extend(estimated);
        measured
    }

    /// Selects candidates with a valid measured radius.
    pub fn candidate_bodies(&self) -> Vec<SelectedBody> {
        self.candidates
            .iter()
            .enumerate()
            .filter_map(|(index, record)| match record.radius {
                Some(radius) if is_valid(radius) => Some(select(index, record, radius, false)),
                Some(radius) => {
                    log::warn!(
                        "Skipping candidate {} with invalid radius {}",
                        describe(index, record),
                        radius
                    );
                    None
                }
                None => None,
            })
            .collect()
    }

    /// Latest discovery year among confirmed planets.
    pub fn latest_discovery(&self) -> Option<i32> {
        self.planets.iter().filter_map(|p| p.discovery_year).max()
    }
}

/// Builds the radius set for a list of selected bodies. Input indices of the
/// set are positions in `bodies`.
pub fn radius_set(bodies: &[SelectedBody]) -> Result<RadiusSet> {
    let radii: Vec<f64> = bodies.iter().map(|b| b.radius).collect();
    RadiusSet::new(&radii)
}

fn is_valid(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn select(index: usize, record: &BodyRecord, radius: f64, estimated: bool) -> SelectedBody {
    SelectedBody {
        source_index: index,
        name: record.name.clone(),
        radius,
        estimated,
    }
}

fn describe(index: usize, record: &BodyRecord) -> String {
    match &record.name {
        Some(name) => format!("{} (row {})", name, index),
        None => format!("row {}", index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn catalog() -> Catalog {
        Catalog {
            name: "test".into(),
            planets: vec![
                BodyRecord::with_radius(1.0).named("a").discovered(2005),
                BodyRecord::with_mass(100.0).named("b").discovered(2010),
                BodyRecord::with_radius(-2.0).named("bad").discovered(2004),
                BodyRecord::with_radius(11.0).named("c"),
                BodyRecord::default().named("nothing").discovered(2003),
                BodyRecord::with_radius(2.0).named("d").discovered(2012),
            ],
            candidates: vec![
                BodyRecord::with_radius(0.7),
                BodyRecord::with_mass(5.0),
                BodyRecord::with_radius(f64::NAN),
                BodyRecord::with_radius(3.1),
            ],
        }
    }

    #[test]
    fn test_confirmed_with_estimates() {
        let bodies = catalog().confirmed_bodies(&SelectionOptions::default());
        let names: Vec<&str> = bodies.iter().filter_map(|b| b.name.as_deref()).collect();
        assert_eq!(names, vec!["a", "c", "d", "b"]);

        let estimated = &bodies[3];
        assert!(estimated.estimated);
        assert_eq!(estimated.source_index, 1);
        assert_relative_eq!(estimated.radius, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_confirmed_without_estimates() {
        let options = SelectionOptions::default().with_mass_estimates(false);
        let bodies = catalog().confirmed_bodies(&options);
        assert_eq!(bodies.len(), 3);
        assert!(bodies.iter().all(|b| !b.estimated));
    }

    #[test]
    fn test_discovery_year_filter() {
        let options = SelectionOptions::default().up_to_year(2010);
        let bodies = catalog().confirmed_bodies(&options);
        let names: Vec<&str> = bodies.iter().filter_map(|b| b.name.as_deref()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_candidates() {
        let bodies = catalog().candidate_bodies();
        let radii: Vec<f64> = bodies.iter().map(|b| b.radius).collect();
        assert_eq!(radii, vec![0.7, 3.1]);
        assert_eq!(bodies[1].source_index, 3);
    }

    #[test]
    fn test_radius_set_keeps_selection_order_as_index() {
        let bodies = catalog().confirmed_bodies(&SelectionOptions::default());
        let set = radius_set(&bodies).unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(set.circles()[0].index, 1);
        assert_eq!(set.largest(), Some(11.0));
    }

    #[test]
    fn test_latest_discovery_and_json() {
        let catalog = catalog();
        assert_eq!(catalog.latest_discovery(), Some(2012));

        let parsed: Catalog = serde_json::from_str(
            r#"{"name": "x", "planets": [{"radius": 1.5, "discovery_year": 2009}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.planets[0].radius, Some(1.5));
        assert!(parsed.candidates.is_empty());
    }
}
