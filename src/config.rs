//! Application settings loaded from TOML
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration. Command-line flags override what is read here.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::circuit::ZeroBranchPolicy;
use crate::layout::LayoutConfig;
use crate::renderer::PngConfig;
use crate::stylesheet::{Stylesheet, StylesheetError};
use crate::RenderConfig;

/// Errors that can occur when loading settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to load stylesheet '{path}': {source}")]
    Stylesheet {
        path: PathBuf,
        #[source]
        source: StylesheetError,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub calculator: CalculatorSettings,
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: SocketAddr,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    pub zero_branch: ZeroBranchPolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub scale: f32,
    pub load_system_fonts: bool,
    /// Requests with more resistors are rejected before drawing
    pub max_resistors: usize,
    pub max_pixels: u64,
    /// Stylesheet TOML; relative paths resolve against the working directory
    pub stylesheet: Option<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        let png = PngConfig::default();
        Self {
            scale: png.scale,
            load_system_fonts: png.load_system_fonts,
            max_resistors: LayoutConfig::default().max_resistors,
            max_pixels: png.max_pixels,
            stylesheet: None,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the render pipeline configuration, loading the stylesheet if one is set
    pub fn render_config(&self) -> Result<RenderConfig, ConfigError> {
        let stylesheet = match &self.render.stylesheet {
            Some(path) => {
                Stylesheet::from_file(path).map_err(|source| ConfigError::Stylesheet {
                    path: path.clone(),
                    source,
                })?
            }
            None => Stylesheet::default(),
        };

        Ok(RenderConfig::new()
            .with_stylesheet(stylesheet)
            .with_zero_branch(self.calculator.zero_branch)
            .with_layout(LayoutConfig::new().with_max_resistors(self.render.max_resistors))
            .with_png(
                PngConfig::new()
                    .with_scale(self.render.scale)
                    .with_system_fonts(self.render.load_system_fonts)
                    .with_max_pixels(self.render.max_pixels),
            ))
    }
}
