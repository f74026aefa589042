use super::palette::{element_color, element_radius};
use super::primitives::{Paint, Primitive, Scene, Stroke, TextAnchor, ViewBox};
use super::projection::Projection;
use crate::core::models::molecule::MoleculeModel;
use std::cmp::Ordering;

pub const MOLECULE_VIEW_BOX: ViewBox = ViewBox {
    min_x: -250.0,
    min_y: -250.0,
    width: 500.0,
    height: 500.0,
};

const BOND_WIDTH: f64 = 2.0;
const BOND_OPACITY: f64 = 0.3;
const ATOM_OPACITY: f64 = 0.9;
const LABEL_SIZE: f64 = 10.0;

/// Draws a molecule model.
///
/// Bonds are emitted first, as faint segments between projected atom centers. Atoms
/// follow, sorted back to front by projected depth, each as an element-colored disc
/// with its symbol on top.
pub fn draw_molecule(model: &MoleculeModel, projection: &Projection) -> Scene {
    let mut scene = Scene::new(MOLECULE_VIEW_BOX);
    let projected: Vec<_> = model
        .atoms()
        .iter()
        .map(|atom| (atom, projection.project(&atom.position)))
        .collect();

    scene.extend(model.bonds().iter().filter_map(|bond| {
        let (_, a) = projected.get(bond.a.index())?;
        let (_, b) = projected.get(bond.b.index())?;
        Some(Primitive::Line {
            from: a.point,
            to: b.point,
            stroke: Stroke::foreground(BOND_WIDTH),
            opacity: BOND_OPACITY,
        })
    }));

    let mut ordered = projected;
    ordered.sort_by(|(_, a), (_, b)| a.depth.partial_cmp(&b.depth).unwrap_or(Ordering::Equal));

    for (atom, at) in ordered {
        scene.push(Primitive::Circle {
            center: at.point,
            radius: element_radius(atom.element),
            fill: Paint::Hex(element_color(atom.element)),
            stroke: Some(Stroke::foreground(1.0)),
            opacity: ATOM_OPACITY,
        });
        scene.push(Primitive::Text {
            position: at.point,
            content: atom.element.symbol().to_string(),
            font_size: LABEL_SIZE,
            bold: true,
            fill: Paint::Hex("#FFFFFF"),
            anchor: TextAnchor::Middle,
        });
    }
    scene
}
