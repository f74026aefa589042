//! # Render Module
//!
//! The projection/draw adapter. It maps a [`MoleculeModel`](crate::core::models::molecule::MoleculeModel)
//! or a [`CircuitLayout`](crate::core::models::circuit::CircuitLayout) to a flat list of
//! 2-D [`Primitive`](primitives::Primitive)s and holds no state between calls.
//!
//! - **Primitives** ([`primitives`]) - Circles, lines, rects, text and quadratic paths
//!   collected in a [`Scene`](primitives::Scene)
//! - **Palette** ([`palette`]) - Per-element colors and radii
//! - **Projection** ([`projection`]) - Fixed axis rotation from 3-D to canvas coordinates
//! - **Drawing** ([`molecule`], [`circuit`]) - Model to scene mappings
//! - **SVG** ([`svg`]) - Serializes a scene as a standalone SVG document

pub mod circuit;
pub mod molecule;
pub mod palette;
pub mod primitives;
pub mod projection;
pub mod svg;
