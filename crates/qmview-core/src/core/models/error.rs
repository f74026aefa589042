use super::ids::AtomId;
use thiserror::Error;

/// Reasons a display model read from outside the generators is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Circuit layout needs at least one qubit and one column (got {qubits} x {depth})")]
    EmptyLayout { qubits: usize, depth: usize },

    #[error("Circuit layout declares depth {declared} but carries {actual} columns")]
    DepthMismatch { declared: usize, actual: usize },

    #[error("Circuit layout is not a dense matrix of well-formed {qubits}-qubit columns")]
    MalformedLayout { qubits: usize },

    #[error("Atom at index {index} carries id {id}; ids must run contiguously from 0")]
    NonContiguousIds { index: usize, id: AtomId },

    #[error("Bond {a}-{b} refers to an atom outside the cloud of {atoms}")]
    DanglingBond { a: AtomId, b: AtomId, atoms: usize },

    #[error("Bond joins atom {0} to itself")]
    SelfBond(AtomId),
}
