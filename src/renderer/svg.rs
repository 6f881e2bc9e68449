//! SVG generation from schematic layouts

use crate::layout::{BoundingBox, LabelLayout, Point, Schematic, Shape, TextAnchor};
use crate::stylesheet::Stylesheet;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    background: Option<String>,
    elements: Vec<String>,
    labels: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            background: None,
            elements: vec![],
            labels: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Fill the whole viewBox with a solid color
    pub fn set_background(&mut self, color: &str) {
        self.background = Some(color.to_string());
    }

    /// Add a straight line
    pub fn add_line(&mut self, from: Point, to: Point, class: &str, stroke: &str, width: f64) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<line class="{}{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="square"/>"#,
            self.indent_str(),
            prefix,
            class,
            from.x,
            from.y,
            to.x,
            to.y,
            escape_xml(stroke),
            width
        ));
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, bounds: &BoundingBox, class: &str, fill: &str, stroke: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}{}" x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}"/>"#,
            self.indent_str(),
            prefix,
            class,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            escape_xml(fill),
            escape_xml(stroke)
        ));
    }

    /// Add a text element
    pub fn add_text(&mut self, label: &LabelLayout, class: &str, fill: &str, font_family: &str) {
        let prefix = self.prefix();
        let anchor_str = match label.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };

        self.labels.push(format!(
            r#"{}<text class="{}{}" x="{}" y="{}" text-anchor="{}" font-size="{}" font-family="{}" fill="{}">{}</text>"#,
            self.indent_str(),
            prefix,
            class,
            label.position.x,
            label.position.y,
            anchor_str,
            label.font_size,
            escape_xml(font_family),
            escape_xml(fill),
            escape_xml(&label.text)
        ));
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: BoundingBox) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = viewbox.x - padding;
        let vb_y = viewbox.y - padding;
        let vb_w = viewbox.width + 2.0 * padding;
        let vb_h = viewbox.height + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        // Explicit width/height so rasterizers size the canvas from the viewBox
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            vb_w.ceil(),
            vb_h.ceil(),
            vb_x,
            vb_y,
            vb_w,
            vb_h
        ));
        svg.push_str(nl);

        if let Some(color) = &self.background {
            svg.push_str(&format!(
                r#"{}<rect class="{}background" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                self.indent_str(),
                self.prefix(),
                vb_x,
                vb_y,
                vb_w,
                vb_h,
                escape_xml(color)
            ));
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        // Text on top of symbols
        for label in &self.labels {
            svg.push_str(label);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a schematic to an SVG string
pub fn render_svg(schematic: &Schematic, config: &SvgConfig, stylesheet: &Stylesheet) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    let wire = stylesheet.resolve_or_default("wire");
    let body_fill = stylesheet.resolve_or_default("resistor-fill");
    let body_stroke = stylesheet.resolve_or_default("resistor-stroke");
    let plate = stylesheet.resolve_or_default("capacitor");
    let label = stylesheet.resolve_or_default("label");
    let title = stylesheet.resolve_or_default("title");
    let font_family = stylesheet.resolve_or_default("font-family");

    builder.set_background(&stylesheet.resolve_or_default("background"));

    for shape in &schematic.shapes {
        match shape {
            Shape::Wire { from, to } => {
                builder.add_line(*from, *to, "wire", &wire, config.wire_width);
            }
            Shape::ResistorBody { bounds } => {
                builder.add_rect(bounds, "resistor", &body_fill, &body_stroke);
            }
            Shape::CapacitorPlate { from, to } => {
                builder.add_line(*from, *to, "capacitor", &plate, config.plate_width);
            }
            Shape::Label(l) => builder.add_text(l, "label", &label, &font_family),
        }
    }

    for line in &schematic.title {
        builder.add_text(line, "title", &title, &font_family);
    }

    builder.build(schematic.bounds)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{Circuit, Topology, ZeroBranchPolicy};
    use crate::layout::{self, LayoutConfig};

    fn schematic(resistances: &[f64], topology: Topology) -> Schematic {
        layout::compute(
            &Circuit::new(resistances.to_vec(), topology),
            &LayoutConfig::default(),
            ZeroBranchPolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_render_series() {
        let svg = render_svg(
            &schematic(&[10.0, 20.0], Topology::Series),
            &SvgConfig::default(),
            &Stylesheet::default(),
        );
        assert!(svg.starts_with("<?xml"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches(r#"class="cp-resistor""#).count(), 2);
        assert_eq!(svg.matches(r#"class="cp-capacitor""#).count(), 2);
        assert!(svg.contains("R1 = 10Ω"));
        assert!(svg.contains("R2 = 20Ω"));
        assert!(svg.contains(">C</text>"));
        assert!(svg.contains("Series Circuit"));
        assert!(svg.contains("Total Resistance: 30.00 Ω"));
    }

    #[test]
    fn test_resistor_fill_from_stylesheet() {
        let svg = render_svg(
            &schematic(&[10.0], Topology::Parallel),
            &SvgConfig::default(),
            &Stylesheet::default(),
        );
        assert!(svg.contains(r##"fill="#d3d3d3""##));
        assert!(svg.contains(r#"class="cp-background""#));
    }

    #[test]
    fn test_no_axis_chrome() {
        let svg = render_svg(
            &schematic(&[10.0], Topology::Series),
            &SvgConfig::default(),
            &Stylesheet::default(),
        );
        // Only wires, symbols, labels and the background
        for line in svg.lines().map(str::trim) {
            if line.starts_with("<line") {
                assert!(line.contains("cp-wire") || line.contains("cp-capacitor"));
            }
        }
        assert_eq!(svg.matches("<rect").count(), 2);
    }

    #[test]
    fn test_compact_output_without_prefix() {
        let config = SvgConfig::new()
            .with_pretty_print(false)
            .with_standalone(false)
            .without_class_prefix();
        let svg = render_svg(
            &schematic(&[10.0], Topology::Series),
            &config,
            &Stylesheet::default(),
        );
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains('\n'));
        assert!(svg.contains(r#"class="resistor""#));
    }

    #[test]
    fn test_viewbox_includes_padding() {
        let s = schematic(&[10.0], Topology::Series);
        let svg = render_svg(&s, &SvgConfig::default(), &Stylesheet::default());
        let expected = format!(
            r#"viewBox="{} {} {} {}""#,
            s.bounds.x - 20.0,
            s.bounds.y - 20.0,
            s.bounds.width + 40.0,
            s.bounds.height + 40.0
        );
        assert!(svg.contains(&expected));
    }
}
