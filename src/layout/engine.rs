//! Component placement for series and parallel schematics

use crate::circuit::{Circuit, CircuitError, Component, Topology, ZeroBranchPolicy};

use super::{BoundingBox, LabelLayout, LayoutConfig, Point, Schematic, Shape, TextAnchor};

/// Lay out a circuit as a schematic
///
/// The size limit and the total are checked first: a circuit that fails
/// either is never drawn, not even partially.
pub fn compute(
    circuit: &Circuit,
    config: &LayoutConfig,
    policy: ZeroBranchPolicy,
) -> Result<Schematic, CircuitError> {
    let count = circuit.resistances.len();
    if count > config.max_resistors {
        return Err(CircuitError::TooManyResistors {
            count,
            limit: config.max_resistors,
        });
    }

    let total = circuit.total(policy)?;
    let components = circuit.components();

    let mut shapes = Vec::new();
    match circuit.topology {
        Topology::Series => layout_series(&components, config, &mut shapes),
        Topology::Parallel => layout_parallel(&components, config, &mut shapes),
    }

    let diagram = shapes
        .iter()
        .map(Shape::bounds)
        .reduce(|acc, b| acc.union(&b))
        .unwrap_or_else(|| BoundingBox::at(Point::new(0.0, 0.0)));

    let title = title_lines(circuit.topology, total, &diagram, config);
    let bounds = title
        .iter()
        .map(LabelLayout::estimated_bounds)
        .fold(diagram, |acc, b| acc.union(&b));

    tracing::debug!(
        topology = %circuit.topology,
        components = components.len(),
        total,
        "schematic laid out"
    );

    Ok(Schematic {
        topology: circuit.topology,
        total,
        components,
        shapes,
        title,
        bounds,
    })
}

/// Components left to right on one wire, loop closed underneath
fn layout_series(components: &[Component], config: &LayoutConfig, shapes: &mut Vec<Shape>) {
    let u = config.unit;
    for (i, component) in components.iter().enumerate() {
        place_component(component, Point::new(i as f64 * u, 0.0), config, shapes);
    }

    // Lead-out, then down both sides and back along the bottom
    let n = components.len() as f64;
    let right = (n + 1.0) * u;
    let depth = config.loop_depth * u;
    shapes.push(Shape::Wire {
        from: Point::new(n * u, 0.0),
        to: Point::new(right, 0.0),
    });
    shapes.push(Shape::Wire {
        from: Point::new(0.0, 0.0),
        to: Point::new(0.0, depth),
    });
    shapes.push(Shape::Wire {
        from: Point::new(right, 0.0),
        to: Point::new(right, depth),
    });
    shapes.push(Shape::Wire {
        from: Point::new(0.0, depth),
        to: Point::new(right, depth),
    });
}

/// One branch per component, stacked between two vertical rails
fn layout_parallel(components: &[Component], config: &LayoutConfig, shapes: &mut Vec<Shape>) {
    let u = config.unit;
    for (i, component) in components.iter().enumerate() {
        place_component(component, Point::new(0.0, i as f64 * u), config, shapes);
    }

    let last = components.len().saturating_sub(1) as f64 * u;
    for x in [0.0, u] {
        shapes.push(Shape::Wire {
            from: Point::new(x, 0.0),
            to: Point::new(x, last),
        });
    }
}

/// Draw one component on the unit-long horizontal segment starting at `origin`
fn place_component(
    component: &Component,
    origin: Point,
    config: &LayoutConfig,
    shapes: &mut Vec<Shape>,
) {
    let u = config.unit;
    let mid = origin.x + 0.5 * u;
    let y = origin.y;

    // The symbol interrupts the wire between `gap_start` and `gap_end`
    let (gap_start, gap_end) = match component {
        Component::Resistor { .. } => {
            let (w, h) = config.resistor_size;
            shapes.push(Shape::ResistorBody {
                bounds: BoundingBox::new(mid - w * u / 2.0, y - h * u / 2.0, w * u, h * u),
            });
            (mid - w * u / 2.0, mid + w * u / 2.0)
        }
        Component::Capacitor => {
            let half_gap = config.plate_gap * u / 2.0;
            let half_len = config.plate_length * u / 2.0;
            for x in [mid - half_gap, mid + half_gap] {
                shapes.push(Shape::CapacitorPlate {
                    from: Point::new(x, y - half_len),
                    to: Point::new(x, y + half_len),
                });
            }
            (mid - half_gap, mid + half_gap)
        }
    };

    shapes.push(Shape::Wire {
        from: origin,
        to: Point::new(gap_start, y),
    });
    shapes.push(Shape::Wire {
        from: Point::new(gap_end, y),
        to: Point::new(origin.x + u, y),
    });
    shapes.push(Shape::Label(LabelLayout {
        text: component.label(),
        position: Point::new(mid, y + config.label_offset * u),
        anchor: TextAnchor::Middle,
        font_size: config.label_font_size,
    }));
}

/// "{Topology} Circuit" over "Total Resistance: {total} Ω", centered above the drawing
fn title_lines(
    topology: Topology,
    total: f64,
    diagram: &BoundingBox,
    config: &LayoutConfig,
) -> Vec<LabelLayout> {
    let texts = [
        format!("{} Circuit", topology.title()),
        format!("Total Resistance: {:.2} Ω", total),
    ];
    let line_height = config.title_font_size * 1.3;
    let center_x = diagram.center().x;
    let last_baseline = diagram.y - config.title_gap;
    let first_baseline = last_baseline - line_height * (texts.len() - 1) as f64;

    texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| LabelLayout {
            text,
            position: Point::new(center_x, first_baseline + i as f64 * line_height),
            anchor: TextAnchor::Middle,
            font_size: config.title_font_size,
        })
        .collect()
}
