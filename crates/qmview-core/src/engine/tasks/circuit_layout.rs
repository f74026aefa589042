use crate::core::models::circuit::CircuitLayout;
use crate::core::models::gate::GatePlacement;
use crate::engine::config::CircuitConfig;
use crate::engine::context::GenerationContext;
use crate::engine::error::EngineError;
use crate::engine::progress::Progress;
use crate::engine::utils::sampling;
use rand::Rng;
use tracing::{debug, instrument};

/// Fills a dense `depth × qubit_count` gate matrix.
///
/// Cells are visited column by column and, inside a column, qubit row by qubit row.
/// Each cell draws one kind from the effective vocabulary; rotations then draw an angle
/// from the configured range and the two-qubit kind targets the next row, wrapping
/// around.
#[instrument(skip_all, name = "circuit_layout_task")]
pub fn run(
    context: &GenerationContext<CircuitConfig>,
    rng: &mut impl Rng,
) -> Result<CircuitLayout, EngineError> {
    let config = context.config;
    config.validate()?;
    let vocabulary = config.effective_gates()?;
    let (qubits, depth) = (config.qubit_count, config.depth);

    context.reporter.report(Progress::TaskStart {
        total_steps: depth as u64,
    });

    let mut columns = Vec::with_capacity(depth);
    for column in 0..depth {
        let mut cells = Vec::with_capacity(qubits);
        for qubit in 0..qubits {
            let kind = *sampling::choose(&vocabulary, "gate", rng)?;
            let placement = if kind.is_rotation() {
                let theta = sampling::uniform_value(&config.rotation_range, rng)?;
                GatePlacement::rotation(kind, qubit, column, theta)
            } else if kind.is_two_qubit() {
                GatePlacement::controlled(qubit, column, qubits)
            } else {
                GatePlacement::single(kind, qubit, column)
            };
            cells.push(placement);
        }
        columns.push(cells);
        context.reporter.report(Progress::TaskIncrement);
    }
    context.reporter.report(Progress::TaskFinish);

    let layout = CircuitLayout::from_columns(qubits, columns)
        .ok_or(EngineError::MalformedLayout { qubits, depth })?;
    debug!(
        qubits,
        depth,
        gates = layout.gate_count(),
        "Circuit layout generated."
    );
    Ok(layout)
}
