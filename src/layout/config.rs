//! Configuration for schematic layout
//!
//! Geometry is expressed in grid units: each component occupies one unit
//! along its wire. `unit` converts units to pixels.

/// Configuration options for layout computation
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Pixels per grid unit
    pub unit: f64,

    /// Resistor body size in units (width, height)
    pub resistor_size: (f64, f64),

    /// Distance between the two capacitor plates, in units
    pub plate_gap: f64,

    /// Capacitor plate length, in units
    pub plate_length: f64,

    /// Distance from the wire down to a component label baseline, in units
    pub label_offset: f64,

    /// How far below the top wire the series loop closes, in units
    pub loop_depth: f64,

    /// Font size for component labels
    pub label_font_size: f64,

    /// Font size for the title
    pub title_font_size: f64,

    /// Gap between the title's last line and the drawing
    pub title_gap: f64,

    /// Largest resistor count that will be laid out; bounds the canvas size
    pub max_resistors: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unit: 100.0,
            resistor_size: (0.5, 0.2),
            plate_gap: 0.1,
            plate_length: 0.2,
            label_offset: 0.4,
            loop_depth: 1.0,
            label_font_size: 12.0,
            title_font_size: 14.0,
            title_gap: 20.0,
            max_resistors: 100,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pixels per grid unit
    pub fn with_unit(mut self, unit: f64) -> Self {
        self.unit = unit;
        self
    }

    /// Set the resistor body size in units
    pub fn with_resistor_size(mut self, width: f64, height: f64) -> Self {
        self.resistor_size = (width, height);
        self
    }

    /// Set the series loop depth in units
    pub fn with_loop_depth(mut self, depth: f64) -> Self {
        self.loop_depth = depth;
        self
    }

    /// Set the largest resistor count accepted for drawing
    pub fn with_max_resistors(mut self, max: usize) -> Self {
        self.max_resistors = max;
        self
    }

    /// Set the label and title font sizes
    pub fn with_font_sizes(mut self, label: f64, title: f64) -> Self {
        self.label_font_size = label;
        self.title_font_size = title;
        self
    }
}
