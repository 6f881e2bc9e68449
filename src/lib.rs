//! Circuit Plotter - resistor network calculator and schematic renderer
//!
//! This library parses a comma-separated list of resistances, computes the
//! equivalent resistance of a series or parallel network, and draws the
//! circuit (resistors plus one trailing capacitor) as SVG or PNG.
//!
//! # Example
//!
//! ```rust,no_run
//! use circuit_plotter::render;
//!
//! let png = render("10,20,30", "series").unwrap();
//! assert!(png.starts_with(b"\x89PNG"));
//! ```

pub mod circuit;
pub mod config;
pub mod error;
pub mod layout;
pub mod parser;
pub mod renderer;
pub mod server;
pub mod stylesheet;

pub use circuit::{compute_total, Circuit, CircuitError, Component, Topology, ZeroBranchPolicy};
pub use error::ParseError;
pub use layout::{LayoutConfig, Schematic};
pub use parser::{parse, ResistanceList};
pub use renderer::{render_svg, PngConfig, RasterError, Rasterizer, SvgConfig};

use std::sync::LazyLock;

use thiserror::Error;

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

/// Errors that can occur during the plot pipeline
#[derive(Debug, Error)]
pub enum PlotError {
    /// Error while reading the resistance list
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// Error raised by the calculator
    #[error(transparent)]
    Circuit(#[from] CircuitError),

    /// Error while producing the PNG
    #[error("rasterization failed: {0}")]
    Raster(#[from] RasterError),
}

impl From<Vec<ParseError>> for PlotError {
    fn from(errors: Vec<ParseError>) -> Self {
        PlotError::Parse(errors)
    }
}

impl PlotError {
    /// Whether the error was caused by the request rather than the server
    pub fn is_user_error(&self) -> bool {
        !matches!(self, PlotError::Raster(_))
    }

    /// Message suitable for showing to the person who submitted the form
    pub fn user_message(&self) -> String {
        match self {
            PlotError::Parse(errors) if errors.iter().all(|e| matches!(e, ParseError::Empty)) => {
                "Please enter at least one resistance value.".to_string()
            }
            PlotError::Parse(errors) => {
                let details = errors
                    .iter()
                    .map(|e| match e {
                        ParseError::Syntax { message, .. } => message.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
                format!(
                    "Invalid resistance values: {}. Please enter numeric values separated by commas.",
                    details
                )
            }
            PlotError::Circuit(CircuitError::InvalidTopology(tag)) => format!(
                "Invalid circuit type '{}'. Choose either 'series' or 'parallel'.",
                tag
            ),
            PlotError::Circuit(CircuitError::DivisionByZero) => {
                "Cannot compute the parallel total: every resistance is zero.".to_string()
            }
            PlotError::Circuit(CircuitError::EmptyCircuit) => {
                "Please enter at least one resistance value.".to_string()
            }
            PlotError::Circuit(CircuitError::TooManyResistors { count, limit }) => format!(
                "Too many resistance values: {} given, at most {} can be drawn.",
                count, limit
            ),
            PlotError::Raster(_) => "Failed to render the circuit image.".to_string(),
        }
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// PNG output configuration
    pub png: PngConfig,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
    /// Treatment of zero-ohm parallel branches
    pub zero_branch: ZeroBranchPolicy,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the PNG configuration
    pub fn with_png(mut self, config: PngConfig) -> Self {
        self.png = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Set the zero-branch policy for parallel totals
    pub fn with_zero_branch(mut self, policy: ZeroBranchPolicy) -> Self {
        self.zero_branch = policy;
        self
    }
}

/// Parse form-style input into a circuit
///
/// The resistance list is checked before the topology, so a request with both
/// wrong reports the bad numbers.
pub fn parse_circuit(resistances: &str, circuit_type: &str) -> Result<Circuit, PlotError> {
    let list = parse(resistances)?;
    let topology = circuit_type.parse::<Topology>()?;
    Ok(Circuit::new(list.ohms(), topology))
}

/// The render pipeline with its fonts loaded
///
/// Build one per process and share it; every method is a pure function of
/// its arguments and the immutable configuration.
#[derive(Debug, Clone)]
pub struct Plotter {
    config: RenderConfig,
    rasterizer: Rasterizer,
}

impl Plotter {
    pub fn new(config: RenderConfig) -> Self {
        let rasterizer = Rasterizer::new(&config.png);
        Self { config, rasterizer }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Lay out a circuit; fails before drawing if the calculator rejects it
    pub fn schematic(&self, circuit: &Circuit) -> Result<Schematic, PlotError> {
        Ok(layout::compute(
            circuit,
            &self.config.layout,
            self.config.zero_branch,
        )?)
    }

    /// Render a circuit to an SVG document
    pub fn svg(&self, circuit: &Circuit) -> Result<String, PlotError> {
        let schematic = self.schematic(circuit)?;
        Ok(render_svg(
            &schematic,
            &self.config.svg,
            &self.config.stylesheet,
        ))
    }

    /// Render a circuit to PNG bytes
    pub fn png(&self, circuit: &Circuit) -> Result<Vec<u8>, PlotError> {
        let svg = self.svg(circuit)?;
        Ok(self.rasterizer.rasterize(&svg)?)
    }

    /// Parse form-style input and render it to PNG bytes
    pub fn plot(&self, resistances: &str, circuit_type: &str) -> Result<Vec<u8>, PlotError> {
        let circuit = parse_circuit(resistances, circuit_type)?;
        self.png(&circuit)
    }
}

/// Render an already parsed circuit to PNG bytes
///
/// Builds a fresh [`Plotter`] on every call, which loads the system fonts
/// again when `config.png.load_system_fonts` is set. Keep a `Plotter` around
/// when rendering more than once.
pub fn render_png(circuit: &Circuit, config: &RenderConfig) -> Result<Vec<u8>, PlotError> {
    Plotter::new(config.clone()).png(circuit)
}

static DEFAULT_PLOTTER: LazyLock<Plotter> =
    LazyLock::new(|| Plotter::new(RenderConfig::default()));

/// Render form-style input to PNG with default configuration
///
/// This is the main entry point for the library. It parses the input,
/// computes the total, lays out the schematic and rasterizes it. The default
/// plotter, fonts included, is built on first use and shared afterwards.
pub fn render(resistances: &str, circuit_type: &str) -> Result<Vec<u8>, PlotError> {
    default_plotter().plot(resistances, circuit_type)
}

fn default_plotter() -> &'static Plotter {
    &DEFAULT_PLOTTER
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plotter() -> Plotter {
        Plotter::new(RenderConfig::new().with_png(PngConfig::new().with_system_fonts(false)))
    }

    #[test]
    fn test_parse_circuit() {
        let circuit = parse_circuit("10, 20", "series").unwrap();
        assert_eq!(circuit, Circuit::new(vec![10.0, 20.0], Topology::Series));
    }

    #[test]
    fn test_parse_circuit_checks_numbers_first() {
        let err = parse_circuit("abc", "bogus").unwrap_err();
        assert!(matches!(err, PlotError::Parse(_)));
    }

    #[test]
    fn test_invalid_topology_error() {
        let err = parse_circuit("10", "short-circuit").unwrap_err();
        assert!(matches!(
            err,
            PlotError::Circuit(CircuitError::InvalidTopology(_))
        ));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_render_png() {
        let png = plotter().plot("10,20", "series").unwrap();
        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn test_render_svg() {
        let circuit = Circuit::new(vec![10.0, 20.0], Topology::Series);
        let svg = plotter().svg(&circuit).unwrap();
        assert!(svg.contains("Total Resistance: 30.00 Ω"));
    }

    #[test]
    fn test_render_png_with_config() {
        let config = RenderConfig::new().with_png(PngConfig::new().with_system_fonts(false));
        let circuit = Circuit::new(vec![4.7], Topology::Parallel);
        let png = render_png(&circuit, &config).unwrap();
        assert!(png.starts_with(b"\x89PNG"));
    }

    #[test]
    fn test_oversized_circuit_is_a_user_error() {
        let plotter = Plotter::new(
            RenderConfig::new()
                .with_layout(LayoutConfig::new().with_max_resistors(5))
                .with_png(PngConfig::new().with_system_fonts(false)),
        );
        assert!(plotter.plot(&vec!["1"; 5].join(","), "series").is_ok());

        let err = plotter.plot(&vec!["1"; 6].join(","), "series").unwrap_err();
        assert!(err.is_user_error());
        insta::assert_snapshot!(err.user_message(), @"Too many resistance values: 6 given, at most 5 can be drawn.");
    }

    #[test]
    fn test_default_limit_keeps_canvas_in_budget() {
        let limit = LayoutConfig::default().max_resistors;
        let values = vec!["1"; limit].join(",");
        for topology in ["series", "parallel"] {
            let png = plotter().plot(&values, topology).unwrap();
            assert!(png.starts_with(b"\x89PNG"), "{topology}");
        }
    }

    #[test]
    fn test_default_plotter_is_shared() {
        assert!(std::ptr::eq(default_plotter(), default_plotter()));
    }

    #[test]
    fn test_degenerate_parallel_is_not_rendered() {
        let err = plotter().plot("0,0", "parallel").unwrap_err();
        assert!(matches!(err, PlotError::Circuit(CircuitError::DivisionByZero)));
    }

    #[test]
    fn test_zero_branch_policy_flows_through() {
        let plotter = Plotter::new(
            RenderConfig::new()
                .with_zero_branch(ZeroBranchPolicy::Short)
                .with_png(PngConfig::new().with_system_fonts(false)),
        );
        let circuit = parse_circuit("0,10", "parallel").unwrap();
        let schematic = plotter.schematic(&circuit).unwrap();
        assert_eq!(schematic.total, 0.0);
    }

    #[test]
    fn test_user_messages() {
        let msg = parse_circuit("abc,10", "series").unwrap_err().user_message();
        insta::assert_snapshot!(msg, @"Invalid resistance values: invalid numeric value 'abc'. Please enter numeric values separated by commas.");

        let msg = parse_circuit("", "series").unwrap_err().user_message();
        insta::assert_snapshot!(msg, @"Please enter at least one resistance value.");

        let msg = parse_circuit("10", "loop").unwrap_err().user_message();
        insta::assert_snapshot!(msg, @"Invalid circuit type 'loop'. Choose either 'series' or 'parallel'.");
    }
}
