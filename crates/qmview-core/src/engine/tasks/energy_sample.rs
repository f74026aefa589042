use crate::engine::config::EnergyConfig;
use crate::engine::error::EngineError;
use crate::engine::utils::sampling::symmetric_jitter;
use rand::Rng;
use tracing::{instrument, trace};

/// Draws one ground-state energy: the reference plus a symmetric, bounded jitter.
#[instrument(level = "debug", skip_all, name = "energy_sample_task")]
pub fn run(config: &EnergyConfig, rng: &mut impl Rng) -> Result<f64, EngineError> {
    config.validate()?;
    let jitter = symmetric_jitter(config.jitter_bound, rng);
    let value = config.reference + jitter;
    trace!(reference = config.reference, jitter, value, "Energy sampled.");
    Ok(value)
}
