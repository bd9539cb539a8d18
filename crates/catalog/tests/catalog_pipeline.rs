//! End-to-end tests: catalog file to packed, exported layout.

use exopack_catalog::{
    radius_set, records, write_csv, CatalogParser, LayoutDocument, RadiusClass,
    SelectionOptions, DEFAULT_GRAPHIC_BORDER,
};
use exopack_circle::{verify_result, CirclePacker};
use exopack_core::{Config, Solver};
use std::fs;
use std::path::PathBuf;

const CATALOG: &str = r#"{
    "name": "sample",
    "planets": [
        {"name": "p1", "radius": 11.2, "discovery_year": 2004},
        {"name": "p2", "radius": 2.1, "discovery_year": 2009},
        {"name": "p3", "mass": 5.2, "discovery_year": 2011},
        {"name": "p4", "radius": 0.7, "discovery_year": 2014},
        {"name": "p5", "radius": 1.1, "discovery_year": 2014},
        {"name": "p6", "mass": 410.0, "discovery_year": 2016}
    ],
    "candidates": [
        {"name": "c1", "radius": 3.3},
        {"name": "c2", "radius": 1.0},
        {"name": "c3", "radius": 0.9},
        {"name": "c4", "radius": 14.0}
    ]
}"#;

fn temp_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("exopack-catalog-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_json_catalog_pack_and_export() {
    let path = temp_file("sample.json", CATALOG);
    let catalog = CatalogParser::new().parse_file(&path).unwrap();

    let confirmed = catalog.confirmed_bodies(&SelectionOptions::default());
    let candidates = catalog.candidate_bodies();
    assert_eq!(confirmed.len(), 6);
    assert_eq!(candidates.len(), 4);

    let config = Config::default().with_seed(2016).with_area_inflation(4.0);
    let result = CirclePacker::new(config)
        .solve(&radius_set(&confirmed).unwrap(), &radius_set(&candidates).unwrap())
        .unwrap();
    assert!(verify_result(&result, 1.1, 1e-9).is_empty());

    let document = LayoutDocument::new(&result, &confirmed, &candidates, DEFAULT_GRAPHIC_BORDER);
    assert_eq!(document.circles.len(), 10);
    assert!(document.view_extent > document.annulus_radius.unwrap());

    let biggest_candidate = document
        .circles
        .iter()
        .find(|c| c.name.as_deref() == Some("c4"))
        .unwrap();
    assert_eq!(biggest_candidate.class, RadiusClass::Jupiter);
    assert_eq!(biggest_candidate.radius, 14.0);

    let mut csv = Vec::new();
    write_csv(&mut csv, &records(&result, &confirmed, &candidates)).unwrap();
    assert_eq!(String::from_utf8(csv).unwrap().lines().count(), 11);
}

#[test]
fn test_ascii_table_reads_planet_radii() {
    let table = "\\fixlen = T\n|  pl_rade|\n|   double|\n  1.2\n  0.4\n  3.0\n";
    let path = temp_file("planetradii.dat", table);

    let catalog = CatalogParser::new().parse_file(&path).unwrap();
    assert_eq!(catalog.name, "planetradii");
    assert!(catalog.candidates.is_empty());

    let bodies = catalog.confirmed_bodies(&SelectionOptions::default());
    let radii: Vec<f64> = bodies.iter().map(|b| b.radius).collect();
    assert_eq!(radii, vec![1.2, 0.4, 3.0]);
}

#[test]
fn test_missing_file() {
    let err = CatalogParser::new()
        .parse_file("/nonexistent/exopack/catalog.json")
        .unwrap_err();
    assert!(err.to_string().starts_with("Failed to read file"));
}
