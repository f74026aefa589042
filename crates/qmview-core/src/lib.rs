//! # qmview Core Library
//!
//! Procedural structure-and-layout engine behind a molecule / quantum-circuit
//! presentation dashboard. It fabricates display-ready models: a typed 3-D atom
//! cloud with a distance-inferred bond graph, a dense qubit × depth gate matrix, and
//! a jittered ground-state energy estimate that only becomes final after a settling
//! window.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Stateless display models (`MoleculeModel`,
//!   `CircuitLayout`, `CircuitDisplayModel`), geometry helpers and JSON I/O.
//!
//! - **[`engine`]: The Logic Core.** Configuration and validation, the injected random
//!   source, the generation tasks (atom cloud, bond inference, circuit layout, energy
//!   sampling) and the cancellable settling timer behind the `EnergyEstimator`.
//!
//! - **[`workflows`]: The Public API.** Pure `generate(config, rng)` entry points and a
//!   `DisplaySession` that regenerates only when its keys (molecule id, qubit count,
//!   depth) change.
//!
//! - **[`render`]: The Draw Adapter.** Maps the display models to 2-D primitives and
//!   serializes drawn scenes as SVG. The library never rasterizes anything itself.

pub mod core;
pub mod engine;
pub mod render;
pub mod workflows;
