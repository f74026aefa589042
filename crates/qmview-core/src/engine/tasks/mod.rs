//! Generation tasks.
//!
//! Each task is one pure step of a generation pass: it borrows its configuration and
//! the injected random source, consumes draws in a fixed order, and returns a freshly
//! owned result. The workflows sequence these tasks; the tasks never call each other.

pub mod atom_cloud;
pub mod bond_inference;
pub mod circuit_layout;
pub mod energy_sample;
