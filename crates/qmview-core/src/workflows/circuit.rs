use crate::core::models::circuit::CircuitLayout;
use crate::engine::config::CircuitConfig;
use crate::engine::context::GenerationContext;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks;
use rand::Rng;
use tracing::{info, instrument};

/// Generates a complete circuit layout for the configured dimensions.
#[instrument(skip_all, name = "circuit_workflow", fields(qubits = config.qubit_count, depth = config.depth))]
pub fn run(
    config: &CircuitConfig,
    rng: &mut impl Rng,
    reporter: &ProgressReporter,
) -> Result<CircuitLayout, EngineError> {
    let context = GenerationContext::new(config, reporter);

    reporter.report(Progress::PhaseStart {
        name: "Circuit Layout",
    });
    let layout = tasks::circuit_layout::run(&context, rng)?;
    reporter.report(Progress::PhaseFinish);

    let stats = layout.stats();
    info!(
        gates = stats.gates,
        two_qubit = stats.two_qubit_gates,
        rotations = stats.rotation_gates,
        "Circuit layout generated."
    );
    Ok(layout)
}
