//! # Core Models Module
//!
//! Data structures handed from the generators to the rendering surface.
//!
//! ## Key Components
//!
//! - [`ids`] - Contiguous atom identifiers
//! - [`atom`] - Element vocabulary and typed 3-D points
//! - [`topology`] - Unordered bond pairs
//! - [`molecule`] - The molecule display model (`atoms` + `bonds`)
//! - [`gate`] - Gate vocabulary and single cells of the circuit matrix
//! - [`circuit`] - The dense `depth × qubitCount` gate matrix and its statistics
//! - [`energy`] - Energy readings and the circuit display model
//! - [`error`] - Validation failures of models loaded from outside the generators
//!
//! ## Usage
//!
//! ```ignore
//! use qmview::core::models::{atom::{Atom, Element}, ids::AtomId};
//! use nalgebra::Point3;
//!
//! let atom = Atom::new(AtomId(0), Element::Carbon, Point3::new(1.0, 2.0, 3.0));
//! ```

pub mod atom;
pub mod circuit;
pub mod energy;
pub mod error;
pub mod gate;
pub mod ids;
pub mod molecule;
pub mod topology;
