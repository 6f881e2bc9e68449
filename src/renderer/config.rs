//! Configuration for SVG and PNG output

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Padding around the viewBox
    pub viewbox_padding: f64,

    /// Whether to include XML declaration and standalone attributes
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "cp-" for "cp-wire")
    pub class_prefix: Option<String>,

    /// Stroke width for wires
    pub wire_width: f64,

    /// Stroke width for capacitor plates
    pub plate_width: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 20.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("cp-".to_string()),
            wire_width: 1.5,
            plate_width: 3.0,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewBox padding
    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}

/// Configuration options for PNG rasterization
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Output pixels per SVG pixel
    pub scale: f32,

    /// Load installed fonts so labels are drawn; without fonts text is skipped
    pub load_system_fonts: bool,

    /// Largest pixmap, in pixels, the rasterizer will allocate
    pub max_pixels: u64,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            load_system_fonts: true,
            max_pixels: 16_000_000,
        }
    }
}

impl PngConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_system_fonts(mut self, load: bool) -> Self {
        self.load_system_fonts = load;
        self
    }

    pub fn with_max_pixels(mut self, max: u64) -> Self {
        self.max_pixels = max;
        self
    }
}
