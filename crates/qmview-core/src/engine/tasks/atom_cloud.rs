use crate::core::models::atom::Atom;
use crate::core::models::ids::AtomId;
use crate::engine::config::MoleculeConfig;
use crate::engine::context::GenerationContext;
use crate::engine::error::EngineError;
use crate::engine::progress::Progress;
use crate::engine::utils::sampling;
use rand::Rng;
use tracing::{debug, instrument};

/// Synthesizes a cloud of typed points.
///
/// The cloud size is drawn once from the configured inclusive range. Each atom then
/// consumes three coordinate draws (x, y, z) followed by one element draw, and takes
/// its loop index as id, so ids are exactly `0..size`.
#[instrument(skip_all, name = "atom_cloud_task")]
pub fn run(
    context: &GenerationContext<MoleculeConfig>,
    rng: &mut impl Rng,
) -> Result<Vec<Atom>, EngineError> {
    let config = context.config;
    config.validate()?;

    let size = sampling::uniform_count(config.size_range(), rng)?;
    debug!(size, "Drew atom cloud size.");

    context.reporter.report(Progress::TaskStart {
        total_steps: size as u64,
    });

    let mut atoms = Vec::with_capacity(size);
    for index in 0..size {
        let position = sampling::uniform_point(config.extent, rng)?;
        let element = *sampling::choose(&config.elements, "element", rng)?;
        atoms.push(Atom::new(AtomId(index), element, position));
        context.reporter.report(Progress::TaskIncrement);
    }

    context.reporter.report(Progress::TaskFinish);
    Ok(atoms)
}
