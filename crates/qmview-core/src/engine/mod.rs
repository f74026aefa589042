//! # Engine Module
//!
//! The generative half of the crate: configuration and its validation, the injected
//! random source, the generation tasks, and the timed energy estimator.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Presentation-tuned parameters for clouds, circuits
//!   and energy estimates, with builders that fail fast on invalid input
//! - **Random Source** ([`random`]) - Seeded and entropy-backed generators
//! - **Tasks** ([`tasks`]) - Atom cloud synthesis, bond inference, circuit layout and
//!   energy sampling, each a pure function of its configuration and the random source
//! - **Settling** ([`timer`], [`energy`]) - The cancellable settling window and the
//!   estimator built on it
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod context;
pub mod energy;
pub mod error;
pub mod progress;
pub mod random;
pub mod tasks;
pub mod timer;
pub(crate) mod utils;
