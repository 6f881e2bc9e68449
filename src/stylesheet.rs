//! Stylesheet system for schematic colors
//!
//! A stylesheet maps drawing roles (wire, resistor body, labels, ...) to
//! concrete colors. Roles missing from a custom stylesheet fall back to the
//! built-in palette, which mimics a plain black-on-white plot.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping drawing roles to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: role name -> color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

const DEFAULT_PALETTE: &str = r##"
[colors]
background = "#ffffff"
wire = "#000000"
resistor-fill = "#d3d3d3"
resistor-stroke = "#000000"
capacitor = "#000000"
label = "#000000"
title = "#000000"
font-family = "DejaVu Sans, Arial, sans-serif"
"##;

static BUILTIN: LazyLock<Stylesheet> = LazyLock::new(Stylesheet::default);

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a role to a concrete value
    ///
    /// Returns None if the role is not defined in this stylesheet.
    pub fn resolve(&self, role: &str) -> Option<&str> {
        self.colors.get(role).map(|s| s.as_str())
    }

    /// Resolve a role with fallback to the default palette
    ///
    /// Unknown roles resolve to black so a typo never hides a shape.
    pub fn resolve_or_default(&self, role: &str) -> String {
        if let Some(color) = self.resolve(role) {
            return color.to_string();
        }

        if let Some(color) = BUILTIN.resolve(role) {
            return color.to_string();
        }

        "#000000".to_string()
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

/// The built-in palette as TOML, a starting point for custom stylesheets
pub fn default_palette_toml() -> &'static str {
    DEFAULT_PALETTE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stylesheet() {
        let stylesheet = Stylesheet::default();
        assert!(stylesheet.colors.contains_key("wire"));
        assert!(stylesheet.colors.contains_key("resistor-fill"));
        assert!(stylesheet.colors.contains_key("title"));
    }

    #[test]
    fn test_default_palette_toml_matches_default() {
        let parsed = Stylesheet::from_str(default_palette_toml()).expect("Should parse");
        assert_eq!(parsed.colors, Stylesheet::default().colors);
    }

    #[test]
    fn test_resolve_existing_role() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("resistor-fill"), Some("#d3d3d3"));
        assert_eq!(stylesheet.resolve("background"), Some("#ffffff"));
    }

    #[test]
    fn test_resolve_missing_role() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("nonexistent"), None);
    }

    #[test]
    fn test_empty_stylesheet_resolves_every_builtin_role() {
        let empty = Stylesheet::from_str("").expect("Should parse");
        assert_eq!(BUILTIN.colors, Stylesheet::default().colors);
        for (role, color) in &BUILTIN.colors {
            assert_eq!(&empty.resolve_or_default(role), color);
        }
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        let partial = Stylesheet::from_str(
            r##"
[colors]
wire = "#ff0000"
"##,
        )
        .expect("Should parse");
        assert_eq!(partial.resolve_or_default("wire"), "#ff0000");
        assert_eq!(partial.resolve_or_default("resistor-fill"), "#d3d3d3");
        assert_eq!(partial.resolve_or_default("no-such-role"), "#000000");
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Blueprint"
description = "White on blue"

[colors]
background = "#1f3a93"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, Some("Blueprint".to_string()));
        assert_eq!(stylesheet.description, Some("White on blue".to_string()));
        assert_eq!(stylesheet.resolve("background"), Some("#1f3a93"));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Stylesheet::from_str(invalid);
        assert!(matches!(result, Err(StylesheetError::ParseError(_))));
    }
}
