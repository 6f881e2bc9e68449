//! Renderers for schematic layouts
//!
//! `svg` turns a [`Schematic`](crate::layout::Schematic) into an SVG string
//! with concrete colors from a stylesheet; `png` rasterizes that SVG.

pub mod config;
pub mod png;
pub mod svg;

pub use config::{PngConfig, SvgConfig};
pub use png::{RasterError, Rasterizer};
pub use svg::render_svg;
