use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The gate vocabulary a circuit layout is drawn from.
///
/// Single-qubit gates (`H`, `X`, `Y`, `Z`), parametrized rotations (`RY`, `RZ`) and the
/// two-qubit `CNOT`. Kinds serialize as their display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GateKind {
    #[serde(rename = "H")]
    H,
    #[serde(rename = "X")]
    X,
    #[serde(rename = "Y")]
    Y,
    #[serde(rename = "Z")]
    Z,
    #[serde(rename = "RY")]
    Ry,
    #[serde(rename = "RZ")]
    Rz,
    #[serde(rename = "CNOT")]
    Cnot,
}

impl GateKind {
    /// The dashboard's default vocabulary, in its display order.
    pub const DEFAULT_VOCABULARY: [GateKind; 7] = [
        GateKind::H,
        GateKind::Ry,
        GateKind::Rz,
        GateKind::Cnot,
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::Ry => "RY",
            GateKind::Rz => "RZ",
            GateKind::Cnot => "CNOT",
        }
    }

    /// Whether the kind carries a rotation angle.
    pub fn is_rotation(self) -> bool {
        matches!(self, GateKind::Ry | GateKind::Rz)
    }

    /// Whether the kind acts on a control and a target qubit.
    pub fn is_two_qubit(self) -> bool {
        matches!(self, GateKind::Cnot)
    }

    pub fn arity(self) -> usize {
        if self.is_two_qubit() { 2 } else { 1 }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown gate kind '{0}'. Expected one of H, X, Y, Z, RY, RZ, CNOT")]
pub struct ParseGateKindError(pub String);

impl FromStr for GateKind {
    type Err = ParseGateKindError;

    /// Parses a gate label, case-insensitively. `CX` is accepted as an alias of `CNOT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H" => Ok(GateKind::H),
            "X" => Ok(GateKind::X),
            "Y" => Ok(GateKind::Y),
            "Z" => Ok(GateKind::Z),
            "RY" => Ok(GateKind::Ry),
            "RZ" => Ok(GateKind::Rz),
            "CNOT" | "CX" => Ok(GateKind::Cnot),
            _ => Err(ParseGateKindError(s.to_string())),
        }
    }
}

/// One cell of the dense circuit matrix.
///
/// `parameter` is only present for rotation kinds and `target_qubit_index` only for the
/// two-qubit kind; the constructors are the only way the engine builds placements, so
/// those pairings always hold for generated layouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatePlacement {
    pub qubit_index: usize,
    pub column: usize,
    pub kind: GateKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_qubit_index: Option<usize>,
}

impl GatePlacement {
    /// `true` when the optional fields match the kind: an angle on rotations only, and
    /// the wraparound target on the two-qubit kind only.
    pub fn is_consistent(&self, qubit_count: usize) -> bool {
        let parameter_ok = self.parameter.is_some() == self.kind.is_rotation();
        let target_ok = match self.target_qubit_index {
            Some(target) => {
                self.kind.is_two_qubit()
                    && qubit_count > 0
                    && target == (self.qubit_index + 1) % qubit_count
            }
            None => !self.kind.is_two_qubit(),
        };
        parameter_ok && target_ok
    }

    /// Creates a placement of a plain single-qubit kind.
    pub fn single(kind: GateKind, qubit_index: usize, column: usize) -> Self {
        debug_assert!(!kind.is_rotation() && !kind.is_two_qubit());
        Self {
            qubit_index,
            column,
            kind,
            parameter: None,
            target_qubit_index: None,
        }
    }

    /// Creates a rotation placement carrying the angle `theta` in radians.
    pub fn rotation(kind: GateKind, qubit_index: usize, column: usize, theta: f64) -> Self {
        debug_assert!(kind.is_rotation());
        Self {
            qubit_index,
            column,
            kind,
            parameter: Some(theta),
            target_qubit_index: None,
        }
    }

    /// Creates a CNOT whose control is `qubit_index` and whose target is the next qubit,
    /// wrapping around at `qubit_count`.
    ///
    /// # Arguments
    ///
    /// * `qubit_index` - The control qubit (the row this placement occupies).
    /// * `column` - The time column of the placement.
    /// * `qubit_count` - Number of qubit rows in the layout; must be non-zero.
    pub fn controlled(qubit_index: usize, column: usize, qubit_count: usize) -> Self {
        Self {
            qubit_index,
            column,
            kind: GateKind::Cnot,
            parameter: None,
            target_qubit_index: Some(wraparound_target(qubit_index, qubit_count)),
        }
    }

    /// The angle label shown under rotation gates, e.g. `θ=1.23`.
    pub fn parameter_label(&self) -> Option<String> {
        self.parameter.map(|theta| format!("θ={:.2}", theta))
    }
}

/// Target qubit of a two-qubit gate controlled by `control`: the next row, wrapping
/// back to row 0 after the last one.
#[inline]
pub fn wraparound_target(control: usize, qubit_count: usize) -> usize {
    (control + 1) % qubit_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_classified() {
        assert!(GateKind::Ry.is_rotation());
        assert!(GateKind::Rz.is_rotation());
        assert!(!GateKind::H.is_rotation());
        assert!(GateKind::Cnot.is_two_qubit());
        assert_eq!(GateKind::Cnot.arity(), 2);
        assert_eq!(GateKind::X.arity(), 1);
    }

    #[test]
    fn from_str_round_trips_labels_and_aliases() {
        for kind in GateKind::DEFAULT_VOCABULARY {
            assert_eq!(GateKind::from_str(kind.label()), Ok(kind));
        }
        assert_eq!(GateKind::from_str("cx"), Ok(GateKind::Cnot));
        assert_eq!(GateKind::from_str(" ry "), Ok(GateKind::Ry));
        assert_eq!(
            GateKind::from_str("SWAP"),
            Err(ParseGateKindError("SWAP".to_string()))
        );
    }

    #[test]
    fn wraparound_target_points_to_next_row() {
        assert_eq!(wraparound_target(0, 4), 1);
        assert_eq!(wraparound_target(3, 4), 0);
        assert_eq!(wraparound_target(0, 1), 0);
    }

    #[test]
    fn controlled_placement_carries_target_only() {
        let gate = GatePlacement::controlled(3, 2, 4);
        assert_eq!(gate.kind, GateKind::Cnot);
        assert_eq!(gate.target_qubit_index, Some(0));
        assert_eq!(gate.parameter, None);
    }

    #[test]
    fn rotation_placement_formats_parameter_label() {
        let gate = GatePlacement::rotation(GateKind::Ry, 0, 0, 1.234_56);
        assert_eq!(gate.parameter_label().as_deref(), Some("θ=1.23"));
        assert_eq!(GatePlacement::single(GateKind::H, 0, 0).parameter_label(), None);
    }

    #[test]
    fn placement_serializes_with_camel_case_and_omits_absent_fields() {
        let value = serde_json::to_value(GatePlacement::controlled(1, 0, 4)).unwrap();
        assert_eq!(value["qubitIndex"], 1);
        assert_eq!(value["targetQubitIndex"], 2);
        assert_eq!(value["kind"], "CNOT");
        assert!(value.get("parameter").is_none());
    }
}
