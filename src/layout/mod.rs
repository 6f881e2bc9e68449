//! Layout of circuit schematics
//!
//! Turns a [`Circuit`](crate::circuit::Circuit) into positioned wires,
//! component symbols, labels and a title. Coordinates are SVG pixels with
//! y growing downwards; the top wire of a series loop and the first parallel
//! branch sit on y = 0.

pub mod config;
mod engine;
pub mod types;

pub use config::LayoutConfig;
pub use engine::compute;
pub use types::*;
