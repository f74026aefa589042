use crate::core::models::circuit::CircuitLayout;
use crate::core::models::energy::{CircuitDisplayModel, EnergyReading};
use crate::core::models::molecule::MoleculeModel;
use crate::engine::config::{CircuitConfig, EnergyConfig, MoleculeConfig};
use crate::engine::energy::{EnergyEstimator, EnergyKey};
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::workflows::{circuit, molecule};
use rand::Rng;
use tracing::{debug, instrument};

/// Display state held on behalf of a rendering surface.
///
/// The session owns the current models and the random source, and regenerates a
/// model only when its key changes: the molecule identifier for the molecule model,
/// the `(qubit_count, depth)` pair for the circuit layout. A circuit regeneration
/// also restarts the energy settling window. Repeating the same key is a no-op, so
/// callers may forward every re-render without churning the models.
///
/// Molecule identifiers are opaque keys; they are never parsed.
pub struct DisplaySession<R> {
    molecule_config: MoleculeConfig,
    circuit_config: CircuitConfig,
    rng: R,
    molecule: Option<(String, MoleculeModel)>,
    circuit: Option<CircuitLayout>,
    estimator: EnergyEstimator,
}

impl<R: Rng> DisplaySession<R> {
    pub fn new(
        molecule_config: MoleculeConfig,
        circuit_config: CircuitConfig,
        energy_config: EnergyConfig,
        rng: R,
    ) -> Result<Self, EngineError> {
        molecule_config.validate()?;
        circuit_config.validate()?;
        Ok(Self {
            molecule_config,
            circuit_config,
            rng,
            molecule: None,
            circuit: None,
            estimator: EnergyEstimator::new(energy_config)?,
        })
    }

    /// Shows the molecule identified by `id`, regenerating only if `id` changed.
    #[instrument(skip(self, reporter))]
    pub fn show_molecule(
        &mut self,
        id: &str,
        reporter: &ProgressReporter,
    ) -> Result<&MoleculeModel, EngineError> {
        let stale = self
            .molecule
            .as_ref()
            .is_none_or(|(current, _)| current != id);
        if stale {
            let model = molecule::run(&self.molecule_config, &mut self.rng, reporter)?;
            self.molecule = Some((id.to_string(), model));
        } else {
            debug!("Molecule id unchanged; keeping the current model.");
        }
        match &self.molecule {
            Some((_, model)) => Ok(model),
            None => Err(EngineError::Internal(
                "molecule model missing after generation".to_string(),
            )),
        }
    }

    /// Shows a circuit of the given dimensions.
    ///
    /// A change of either dimension generates a brand new layout and re-triggers the
    /// energy estimator; unchanged dimensions keep both. Must be called from within a
    /// Tokio runtime, since the settling window is a scheduled completion.
    #[instrument(skip(self, reporter))]
    pub fn show_circuit(
        &mut self,
        qubit_count: usize,
        depth: usize,
        reporter: &ProgressReporter,
    ) -> Result<&CircuitLayout, EngineError> {
        let key = EnergyKey::new(qubit_count, depth);
        if self.estimator.key() != Some(key) || self.circuit.is_none() {
            let config = self.circuit_config.with_dimensions(qubit_count, depth)?;
            let layout = circuit::run(&config, &mut self.rng, reporter)?;
            self.estimator.trigger(key, &mut self.rng)?;
            self.circuit_config = config;
            self.circuit = Some(layout);
        } else {
            debug!("Circuit dimensions unchanged; keeping the current layout.");
        }
        self.circuit.as_ref().ok_or_else(|| {
            EngineError::Internal("circuit layout missing after generation".to_string())
        })
    }

    pub fn molecule(&self) -> Option<&MoleculeModel> {
        self.molecule.as_ref().map(|(_, model)| model)
    }

    pub fn molecule_id(&self) -> Option<&str> {
        self.molecule.as_ref().map(|(id, _)| id.as_str())
    }

    pub fn circuit(&self) -> Option<&CircuitLayout> {
        self.circuit.as_ref()
    }

    pub fn energy(&self) -> EnergyReading {
        self.estimator.reading()
    }

    pub fn estimator(&self) -> &EnergyEstimator {
        &self.estimator
    }

    /// The circuit display model with the energy reading as of now.
    pub fn circuit_display_model(&self) -> Option<CircuitDisplayModel> {
        self.circuit
            .as_ref()
            .map(|layout| CircuitDisplayModel::new(layout.clone(), self.energy()))
    }
}
