use super::error::ModelError;
use super::gate::{GateKind, GatePlacement};
use serde::{Deserialize, Serialize};

/// A dense `depth × qubit_count` matrix of gate placements.
///
/// `placements[column][qubit]` holds exactly one placement per cell; every column
/// therefore places `qubit_count` gates and the layout as a whole places
/// `depth × qubit_count`. Layouts are generated atomically and never patched: a change
/// of either dimension means a brand new layout. Deserialized layouts go through the
/// same checks as [`from_columns`](Self::from_columns).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCircuitLayout")]
pub struct CircuitLayout {
    qubit_count: usize,
    depth: usize,
    placements: Vec<Vec<GatePlacement>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCircuitLayout {
    qubit_count: usize,
    depth: usize,
    placements: Vec<Vec<GatePlacement>>,
}

impl TryFrom<RawCircuitLayout> for CircuitLayout {
    type Error = ModelError;

    fn try_from(raw: RawCircuitLayout) -> Result<Self, Self::Error> {
        if raw.qubit_count == 0 || raw.depth == 0 {
            return Err(ModelError::EmptyLayout {
                qubits: raw.qubit_count,
                depth: raw.depth,
            });
        }
        if raw.placements.len() != raw.depth {
            return Err(ModelError::DepthMismatch {
                declared: raw.depth,
                actual: raw.placements.len(),
            });
        }
        CircuitLayout::from_columns(raw.qubit_count, raw.placements).ok_or(
            ModelError::MalformedLayout {
                qubits: raw.qubit_count,
            },
        )
    }
}

/// Summary figures shown next to the circuit diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitStats {
    pub qubits: usize,
    pub gates: usize,
    pub depth: usize,
    pub two_qubit_gates: usize,
    pub rotation_gates: usize,
}

impl CircuitLayout {
    /// Wraps a column-major matrix of placements.
    ///
    /// Returns `None` unless the matrix is dense (exactly `qubit_count` placements in
    /// every column), every placement sits at the cell it claims and its optional
    /// fields match its kind.
    pub fn from_columns(qubit_count: usize, placements: Vec<Vec<GatePlacement>>) -> Option<Self> {
        let dense = placements.iter().enumerate().all(|(column, cells)| {
            cells.len() == qubit_count
                && cells
                    .iter()
                    .enumerate()
                    .all(|(qubit, gate)| {
                        gate.column == column
                            && gate.qubit_index == qubit
                            && gate.is_consistent(qubit_count)
                    })
        });
        if !dense {
            return None;
        }
        Some(Self {
            qubit_count,
            depth: placements.len(),
            placements,
        })
    }

    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Column-major access: `placements()[column][qubit]`.
    pub fn placements(&self) -> &[Vec<GatePlacement>] {
        &self.placements
    }

    pub fn column(&self, column: usize) -> Option<&[GatePlacement]> {
        self.placements.get(column).map(Vec::as_slice)
    }

    pub fn get(&self, column: usize, qubit: usize) -> Option<&GatePlacement> {
        self.placements.get(column)?.get(qubit)
    }

    /// All placements, column by column and top to bottom within a column.
    pub fn iter(&self) -> impl Iterator<Item = &GatePlacement> {
        self.placements.iter().flatten()
    }

    pub fn gate_count(&self) -> usize {
        self.depth * self.qubit_count
    }

    pub fn count_of(&self, kind: GateKind) -> usize {
        self.iter().filter(|gate| gate.kind == kind).count()
    }

    pub fn stats(&self) -> CircuitStats {
        CircuitStats {
            qubits: self.qubit_count,
            gates: self.gate_count(),
            depth: self.depth,
            two_qubit_gates: self.iter().filter(|g| g.kind.is_two_qubit()).count(),
            rotation_gates: self.iter().filter(|g| g.kind.is_rotation()).count(),
        }
    }

    pub fn into_placements(self) -> Vec<Vec<GatePlacement>> {
        self.placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_three() -> CircuitLayout {
        let columns = (0..3)
            .map(|column| {
                vec![
                    GatePlacement::controlled(0, column, 2),
                    GatePlacement::rotation(GateKind::Rz, 1, column, 0.5),
                ]
            })
            .collect();
        CircuitLayout::from_columns(2, columns).unwrap()
    }

    #[test]
    fn from_columns_accepts_dense_matrix() {
        let layout = two_by_three();
        assert_eq!(layout.qubit_count(), 2);
        assert_eq!(layout.depth(), 3);
        assert_eq!(layout.gate_count(), 6);
        assert_eq!(layout.iter().count(), 6);
    }

    #[test]
    fn from_columns_rejects_gaps_and_misplaced_cells() {
        let ragged = vec![vec![GatePlacement::single(GateKind::H, 0, 0)]];
        assert!(CircuitLayout::from_columns(2, ragged).is_none());

        let misplaced = vec![vec![
            GatePlacement::single(GateKind::H, 1, 0),
            GatePlacement::single(GateKind::X, 0, 0),
        ]];
        assert!(CircuitLayout::from_columns(2, misplaced).is_none());
    }

    #[test]
    fn from_columns_rejects_inconsistent_placements() {
        let mut wrong_target = GatePlacement::controlled(0, 0, 3);
        wrong_target.target_qubit_index = Some(2);
        let columns = vec![vec![
            wrong_target,
            GatePlacement::single(GateKind::H, 1, 0),
            GatePlacement::single(GateKind::H, 2, 0),
        ]];
        assert!(CircuitLayout::from_columns(3, columns).is_none());

        let mut missing_angle = GatePlacement::rotation(GateKind::Ry, 0, 0, 1.0);
        missing_angle.parameter = None;
        assert!(CircuitLayout::from_columns(1, vec![vec![missing_angle]]).is_none());
    }

    #[test]
    fn deserialization_accepts_a_dense_layout() {
        let layout = two_by_three();
        let json = serde_json::to_string(&layout).unwrap();
        let loaded: CircuitLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, layout);
    }

    #[test]
    fn deserialization_rejects_layouts_that_disagree_with_their_dimensions() {
        let empty_columns = r#"{"qubitCount":2,"depth":5,"placements":[]}"#;
        let err = serde_json::from_str::<CircuitLayout>(empty_columns).unwrap_err();
        assert!(err.to_string().contains("declares depth 5 but carries 0 columns"));

        let ragged = r#"{"qubitCount":2,"depth":1,"placements":[[{"qubitIndex":0,"column":0,"kind":"H"}]]}"#;
        let err = serde_json::from_str::<CircuitLayout>(ragged).unwrap_err();
        assert!(err.to_string().contains("not a dense matrix"));

        let zero = r#"{"qubitCount":0,"depth":0,"placements":[]}"#;
        assert!(serde_json::from_str::<CircuitLayout>(zero).is_err());
    }

    #[test]
    fn get_addresses_column_then_qubit() {
        let layout = two_by_three();
        assert_eq!(layout.get(2, 1).unwrap().kind, GateKind::Rz);
        assert_eq!(layout.get(2, 0).unwrap().target_qubit_index, Some(1));
        assert!(layout.get(3, 0).is_none());
        assert!(layout.column(5).is_none());
    }

    #[test]
    fn stats_count_kinds() {
        let stats = two_by_three().stats();
        assert_eq!(
            stats,
            CircuitStats {
                qubits: 2,
                gates: 6,
                depth: 3,
                two_qubit_gates: 3,
                rotation_gates: 3,
            }
        );
        assert_eq!(two_by_three().count_of(GateKind::Cnot), 3);
    }
}
