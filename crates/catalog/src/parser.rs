//! Catalog and radius list parser.

use crate::dataset::Catalog;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when reading catalogs.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid catalog format: {0}")]
    InvalidFormat(String),
}

/// Parser for catalog JSON files and single-column archive tables.
#[derive(Debug, Default)]
pub struct CatalogParser;

impl CatalogParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a catalog file. `.json` files are read as a full catalog; any
    /// other file is read as a column of planet radii.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Catalog, ParseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            self.parse_json(&content)
        } else {
            let name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default();
            let radii = self.parse_ascii_column(&content)?;
            Ok(Catalog::from_radii(name, &radii, &[]))
        }
    }

    /// Parses a catalog from a JSON string.
    pub fn parse_json(&self, json: &str) -> Result<Catalog, ParseError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        log::debug!(
            "Parsed catalog '{}' with {} planets and {} candidates",
            catalog.name,
            catalog.planets.len(),
            catalog.candidates.len()
        );
        Ok(catalog)
    }

    /// Reads the first column of an ASCII table as numbers.
    ///
    /// Blank lines, `#` comments and IPAC header lines (starting with `\` or
    /// `|`) are skipped.
    pub fn parse_ascii_column(&self, content: &str) -> Result<Vec<f64>, ParseError> {
        content
            .lines()
            .enumerate()
            .filter_map(|(number, line)| {
                let trimmed = line.trim();
                let skip = trimmed.is_empty()
                    || trimmed.starts_with('#')
                    || trimmed.starts_with('\\')
                    || trimmed.starts_with('|');
                (!skip).then_some((number, trimmed))
            })
            .map(|(number, line)| {
                let token = line.split_whitespace().next().unwrap_or(line);
                token.parse::<f64>().map_err(|_| {
                    ParseError::InvalidFormat(format!(
                        "line {}: expected a number, found '{}'",
                        number + 1,
                        token
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_catalog() {
        let json = r#"{
            "name": "archive",
            "planets": [
                {"name": "b", "radius": 1.1, "discovery_year": 2009},
                {"mass": 300.0}
            ],
            "candidates": [
                {"radius": 2.5}
            ]
        }"#;

        let catalog = CatalogParser::new().parse_json(json).unwrap();
        assert_eq!(catalog.name, "archive");
        assert_eq!(catalog.planets.len(), 2);
        assert_eq!(catalog.planets[0].name.as_deref(), Some("b"));
        assert_eq!(catalog.planets[1].mass, Some(300.0));
        assert_eq!(catalog.candidates[0].radius, Some(2.5));
    }

    #[test]
    fn test_parse_ascii_column() {
        let table = "\\fixlen = T\n\
                     \\RowsRetrieved = 3\n\
                     |  pl_rade |\n\
                     |   double |\n\
                     # comment\n\
                     \n\
                     0.64\n\
                     1.9   extra\n\
                     12.0\n";

        let radii = CatalogParser::new().parse_ascii_column(table).unwrap();
        assert_eq!(radii, vec![0.64, 1.9, 12.0]);
    }

    #[test]
    fn test_parse_ascii_invalid_line() {
        let err = CatalogParser::new()
            .parse_ascii_column("1.0\nnull\n")
            .unwrap_err();
        match err {
            ParseError::InvalidFormat(message) => assert!(message.contains("line 2")),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = CatalogParser::new().parse_json("{ not json").unwrap_err();
        assert!(matches!(err, ParseError::JsonError(_)));
    }
}
