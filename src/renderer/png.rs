//! PNG rasterization of rendered SVG

use std::sync::Arc;

use resvg::tiny_skia;
use resvg::usvg;
use thiserror::Error;

use super::PngConfig;

/// Errors that can occur while turning SVG into PNG bytes
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to parse generated SVG: {0}")]
    Svg(#[from] usvg::Error),

    #[error("failed to allocate a {width}x{height} pixmap")]
    Allocate { width: u32, height: u32 },

    #[error("a {width}x{height} image exceeds the {limit} pixel limit")]
    TooLarge { width: u32, height: u32, limit: u64 },

    #[error("failed to encode PNG: {0}")]
    Encode(String),
}

/// SVG to PNG converter holding a shared font database
///
/// Loading system fonts scans the filesystem, so the database is built once
/// and shared by every conversion.
#[derive(Clone)]
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
    scale: f32,
    max_pixels: u64,
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("faces", &self.fontdb.len())
            .field("scale", &self.scale)
            .field("max_pixels", &self.max_pixels)
            .finish()
    }
}

impl Rasterizer {
    pub fn new(config: &PngConfig) -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        if config.load_system_fonts {
            fontdb.load_system_fonts();
            tracing::debug!(faces = fontdb.len(), "loaded system fonts");
        }
        Self {
            fontdb: Arc::new(fontdb),
            scale: config.scale,
            max_pixels: config.max_pixels,
        }
    }

    /// Rasterize an SVG document into PNG bytes
    pub fn rasterize(&self, svg: &str) -> Result<Vec<u8>, RasterError> {
        let mut opt = usvg::Options::default();
        opt.fontdb = Arc::clone(&self.fontdb);

        let tree = usvg::Tree::from_str(svg, &opt)?;
        let size = tree.size().to_int_size();
        let width = (size.width() as f32 * self.scale).ceil() as u32;
        let height = (size.height() as f32 * self.scale).ceil() as u32;
        if u64::from(width) * u64::from(height) > self.max_pixels {
            return Err(RasterError::TooLarge {
                width,
                height,
                limit: self.max_pixels,
            });
        }

        let mut pixmap =
            tiny_skia::Pixmap::new(width, height).ok_or(RasterError::Allocate { width, height })?;

        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(self.scale, self.scale),
            &mut pixmap.as_mut(),
        );

        pixmap
            .encode_png()
            .map_err(|e| RasterError::Encode(e.to_string()))
    }
}
