//! Core types for schematic layout

use crate::circuit::{Component, Topology};

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding box representing the spatial extent of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Degenerate box covering a single point
    pub fn at(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Compute the union of two bounding boxes (smallest box containing both)
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        BoundingBox::new(x, y, right - x, bottom - y)
    }
}

/// Horizontal text anchor, mirrors SVG `text-anchor`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// A piece of text placed on the schematic
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub text: String,
    /// Anchor point on the text baseline
    pub position: Point,
    pub anchor: TextAnchor,
    pub font_size: f64,
}

impl LabelLayout {
    /// Approximate extent of the rendered text
    ///
    /// Glyph metrics are not known at layout time; an average advance of
    /// 0.6 em is close enough to keep labels inside the viewBox.
    pub fn estimated_bounds(&self) -> BoundingBox {
        let width = self.text.chars().count() as f64 * self.font_size * 0.6;
        let x = match self.anchor {
            TextAnchor::Start => self.position.x,
            TextAnchor::Middle => self.position.x - width / 2.0,
            TextAnchor::End => self.position.x - width,
        };
        BoundingBox::new(x, self.position.y - self.font_size, width, self.font_size * 1.25)
    }
}

/// A primitive the renderer knows how to draw
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Straight conductor between two points
    Wire { from: Point, to: Point },
    /// Rectangular resistor body
    ResistorBody { bounds: BoundingBox },
    /// One plate of the capacitor symbol
    CapacitorPlate { from: Point, to: Point },
    /// Component label
    Label(LabelLayout),
}

impl Shape {
    pub fn bounds(&self) -> BoundingBox {
        match self {
            Shape::Wire { from, to } | Shape::CapacitorPlate { from, to } => {
                BoundingBox::at(*from).expand_to_include(*to)
            }
            Shape::ResistorBody { bounds } => *bounds,
            Shape::Label(label) => label.estimated_bounds(),
        }
    }
}

/// A fully laid out circuit, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct Schematic {
    pub topology: Topology,
    /// Equivalent resistance shown in the title
    pub total: f64,
    pub components: Vec<Component>,
    pub shapes: Vec<Shape>,
    /// Title lines, top to bottom
    pub title: Vec<LabelLayout>,
    pub bounds: BoundingBox,
}

impl Schematic {
    /// Title text with lines joined by '\n'
    pub fn title_text(&self) -> String {
        self.title
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn resistor_count(&self) -> usize {
        self.components
            .iter()
            .filter(|c| matches!(c, Component::Resistor { .. }))
            .count()
    }
}
