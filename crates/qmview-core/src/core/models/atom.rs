use super::ids::AtomId;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The element vocabulary an atom cloud is drawn from.
///
/// The set is deliberately small: the generated cloud is a visual stand-in for a
/// molecule, not a chemically valid structure. Elements serialize as their one-letter
/// symbols so the JSON hand-off stays compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "C")]
    Carbon,
    #[serde(rename = "O")]
    Oxygen,
    #[serde(rename = "N")]
    Nitrogen,
    #[serde(rename = "H")]
    Hydrogen,
}

impl Element {
    /// Every element, in the order the default vocabulary lists them.
    pub const ALL: [Element; 4] = [
        Element::Carbon,
        Element::Oxygen,
        Element::Nitrogen,
        Element::Hydrogen,
    ];

    /// Returns the chemical symbol of the element (e.g., `"C"`).
    pub fn symbol(self) -> &'static str {
        match self {
            Element::Carbon => "C",
            Element::Oxygen => "O",
            Element::Nitrogen => "N",
            Element::Hydrogen => "H",
        }
    }

    /// Returns the full English name of the element.
    pub fn name(self) -> &'static str {
        match self {
            Element::Carbon => "Carbon",
            Element::Oxygen => "Oxygen",
            Element::Nitrogen => "Nitrogen",
            Element::Hydrogen => "Hydrogen",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown element '{0}'. Expected one of C, O, N, H (or their full names)")]
pub struct ParseElementError(pub String);

impl FromStr for Element {
    type Err = ParseElementError;

    /// Parses a symbol or a full element name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ParseElementError`] if the input names none of the supported elements.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "carbon" => Ok(Element::Carbon),
            "o" | "oxygen" => Ok(Element::Oxygen),
            "n" | "nitrogen" => Ok(Element::Nitrogen),
            "h" | "hydrogen" => Ok(Element::Hydrogen),
            _ => Err(ParseElementError(s.to_string())),
        }
    }
}

/// A typed point of a generated atom cloud.
///
/// Atoms are created in a single generation pass and never mutated afterwards; when
/// the molecule identifier changes the whole cloud is discarded and regenerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Contiguous id within the cloud, assigned in generation order.
    pub id: AtomId,
    /// The element this point stands in for.
    pub element: Element,
    /// Coordinates inside the generation cube, serialized as `[x, y, z]`.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom`.
    ///
    /// # Arguments
    ///
    /// * `id` - The id of the atom within its cloud.
    /// * `element` - The element drawn for the atom.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(id: AtomId, element: Element, position: Point3<f64>) -> Self {
        Self {
            id,
            element,
            position,
        }
    }

    /// Euclidean distance between the positions of two atoms.
    #[inline]
    pub fn distance_to(&self, other: &Atom) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }
}
