use super::primitives::{Paint, Primitive, Scene, Stroke, TextAnchor, ViewBox};
use crate::core::models::circuit::CircuitLayout;
use crate::core::models::energy::CircuitDisplayModel;
use crate::core::models::gate::GatePlacement;
use nalgebra::Point2;

pub const MIN_CANVAS_WIDTH: f64 = 800.0;
pub const QUBIT_SPACING: f64 = 80.0;
pub const GATE_SPACING: f64 = 120.0;
pub const WIRE_MARGIN: f64 = 40.0;
pub const FIRST_GATE_X: f64 = 80.0;

const GATE_WIDTH: f64 = 40.0;
const GATE_HEIGHT: f64 = 30.0;
const CORNER_RADIUS: f64 = 4.0;
const CONTROL_RADIUS: f64 = 8.0;
const TARGET_RADIUS: f64 = 15.0;
const TARGET_CROSS: f64 = 10.0;
const METER_WIDTH: f64 = 50.0;
const STROKE_WIDTH: f64 = 2.0;
const GATE_FILL: Paint = Paint::Hex("#E6EEFF");

/// Canvas dimensions and coordinates of a circuit diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitGeometry {
    pub qubit_count: usize,
    pub depth: usize,
}

impl CircuitGeometry {
    pub fn of(layout: &CircuitLayout) -> Self {
        Self {
            qubit_count: layout.qubit_count(),
            depth: layout.depth(),
        }
    }

    /// Wide enough for every column plus the measurement glyphs, never below 800.
    pub fn width(&self) -> f64 {
        MIN_CANVAS_WIDTH.max(FIRST_GATE_X + GATE_SPACING * self.depth as f64)
    }

    pub fn height(&self) -> f64 {
        QUBIT_SPACING * self.qubit_count as f64 + WIRE_MARGIN
    }

    pub fn wire_y(&self, qubit: usize) -> f64 {
        WIRE_MARGIN + QUBIT_SPACING * qubit as f64
    }

    pub fn column_x(&self, column: usize) -> f64 {
        FIRST_GATE_X + GATE_SPACING * column as f64
    }

    pub fn meter_x(&self) -> f64 {
        self.width() - 100.0
    }

    pub fn view_box(&self) -> ViewBox {
        ViewBox::new(0.0, 0.0, self.width(), self.height())
    }
}

/// Draws the wires, every gate of the matrix and one measurement glyph per wire.
pub fn draw_circuit(layout: &CircuitLayout) -> Scene {
    let geometry = CircuitGeometry::of(layout);
    let mut scene = Scene::new(geometry.view_box());

    for qubit in 0..geometry.qubit_count {
        let y = geometry.wire_y(qubit);
        scene.push(Primitive::Line {
            from: Point2::new(WIRE_MARGIN, y),
            to: Point2::new(geometry.width() - WIRE_MARGIN, y),
            stroke: Stroke::foreground(STROKE_WIDTH),
            opacity: 0.3,
        });
        scene.push(Primitive::label(Point2::new(20.0, y), format!("q{qubit}"), 12.0));
    }

    for gate in layout.iter() {
        if gate.kind.is_two_qubit() {
            draw_controlled(&mut scene, &geometry, gate);
        } else {
            draw_boxed(&mut scene, &geometry, gate);
        }
    }

    for qubit in 0..geometry.qubit_count {
        draw_meter(&mut scene, geometry.meter_x(), geometry.wire_y(qubit));
    }
    scene
}

/// Draws the circuit and its energy label, right-aligned above the first wire.
pub fn draw_circuit_display(model: &CircuitDisplayModel) -> Scene {
    let mut scene = draw_circuit(&model.layout);
    let geometry = CircuitGeometry::of(&model.layout);
    scene.push(Primitive::Text {
        position: Point2::new(geometry.width() - WIRE_MARGIN, 14.0),
        content: model.energy.label(),
        font_size: 12.0,
        bold: false,
        fill: Paint::Foreground,
        anchor: TextAnchor::End,
    });
    scene
}

fn draw_boxed(scene: &mut Scene, geometry: &CircuitGeometry, gate: &GatePlacement) {
    let x = geometry.column_x(gate.column);
    let y = geometry.wire_y(gate.qubit_index);
    scene.push(Primitive::Rect {
        origin: Point2::new(x - GATE_WIDTH / 2.0, y - GATE_HEIGHT / 2.0),
        width: GATE_WIDTH,
        height: GATE_HEIGHT,
        corner_radius: CORNER_RADIUS,
        fill: GATE_FILL,
        stroke: Some(Stroke::foreground(STROKE_WIDTH)),
    });
    scene.push(Primitive::Text {
        position: Point2::new(x, y),
        content: gate.kind.label().to_string(),
        font_size: 12.0,
        bold: true,
        fill: Paint::Foreground,
        anchor: TextAnchor::Middle,
    });
    if let Some(label) = gate.parameter_label() {
        scene.push(Primitive::label(Point2::new(x, y + 25.0), label, 8.0));
    }
}

fn draw_controlled(scene: &mut Scene, geometry: &CircuitGeometry, gate: &GatePlacement) {
    let x = geometry.column_x(gate.column);
    let y = geometry.wire_y(gate.qubit_index);
    let target = gate.target_qubit_index.unwrap_or(gate.qubit_index);
    let target_y = geometry.wire_y(target);
    let stroke = Stroke::foreground(STROKE_WIDTH);

    scene.push(Primitive::line(
        Point2::new(x, y),
        Point2::new(x, target_y),
        stroke,
    ));
    scene.push(Primitive::Circle {
        center: Point2::new(x, y),
        radius: CONTROL_RADIUS,
        fill: Paint::Foreground,
        stroke: None,
        opacity: 1.0,
    });
    scene.push(Primitive::Circle {
        center: Point2::new(x, target_y),
        radius: TARGET_RADIUS,
        fill: Paint::None,
        stroke: Some(stroke),
        opacity: 1.0,
    });
    scene.push(Primitive::line(
        Point2::new(x, target_y - TARGET_CROSS),
        Point2::new(x, target_y + TARGET_CROSS),
        stroke,
    ));
    scene.push(Primitive::line(
        Point2::new(x - TARGET_CROSS, target_y),
        Point2::new(x + TARGET_CROSS, target_y),
        stroke,
    ));
}

fn draw_meter(scene: &mut Scene, x: f64, y: f64) {
    let stroke = Stroke::foreground(STROKE_WIDTH);
    scene.push(Primitive::Rect {
        origin: Point2::new(x, y - GATE_HEIGHT / 2.0),
        width: METER_WIDTH,
        height: GATE_HEIGHT,
        corner_radius: CORNER_RADIUS,
        fill: Paint::None,
        stroke: Some(stroke),
    });
    scene.push(Primitive::QuadPath {
        from: Point2::new(x + 10.0, y + 5.0),
        control: Point2::new(x + 25.0, y - 10.0),
        to: Point2::new(x + 40.0, y + 5.0),
        stroke,
    });
    scene.push(Primitive::line(
        Point2::new(x + 25.0, y - 10.0),
        Point2::new(x + 30.0, y - 5.0),
        stroke,
    ));
}
