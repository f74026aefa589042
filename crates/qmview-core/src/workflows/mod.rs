//! # Workflows Module
//!
//! Top-level entry points of the library. Each workflow sequences the engine tasks for
//! one display model, reports progress phases, and either returns a complete model or
//! fails before producing anything.
//!
//! - **Molecule Workflow** ([`molecule`]) - Atom cloud synthesis followed by bond inference
//! - **Circuit Workflow** ([`circuit`]) - Dense gate-matrix layout
//! - **Display Session** ([`session`]) - Externally held display state that decides when
//!   to regenerate: on a molecule id change, or on a qubit count / depth change (which
//!   also restarts the energy settling window)

pub mod circuit;
pub mod molecule;
pub mod session;
