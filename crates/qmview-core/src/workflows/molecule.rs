use crate::core::models::molecule::MoleculeModel;
use crate::engine::config::MoleculeConfig;
use crate::engine::context::GenerationContext;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks;
use rand::Rng;
use tracing::{info, instrument};

/// Generates a molecule display model: a fresh atom cloud and its inferred bonds.
#[instrument(skip_all, name = "molecule_workflow")]
pub fn run(
    config: &MoleculeConfig,
    rng: &mut impl Rng,
    reporter: &ProgressReporter,
) -> Result<MoleculeModel, EngineError> {
    let context = GenerationContext::new(config, reporter);

    reporter.report(Progress::PhaseStart { name: "Atom Cloud" });
    let atoms = tasks::atom_cloud::run(&context, rng)?;
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Bond Inference",
    });
    let bonds = tasks::bond_inference::run(&atoms, config.bond_threshold, reporter);
    reporter.report(Progress::PhaseFinish);

    info!(
        atoms = atoms.len(),
        bonds = bonds.len(),
        "Molecule model generated."
    );
    Ok(MoleculeModel::new(atoms, bonds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ids::AtomId;
    use crate::engine::random;
    use nalgebra::distance;
    use std::sync::{Arc, Mutex};

    #[test]
    fn model_satisfies_cloud_and_bond_properties() {
        let config = MoleculeConfig::default();
        for seed in 0..16 {
            let model = run(&config, &mut random::seeded(seed), &ProgressReporter::new()).unwrap();
            assert!(config.size_range().contains(&model.atom_count()));
            let ids: Vec<AtomId> = model.atoms().iter().map(|a| a.id).collect();
            let expected: Vec<AtomId> = (0..model.atom_count()).map(AtomId).collect();
            assert_eq!(ids, expected);

            for bond in model.bonds() {
                let (a, b) = (model.atom(bond.a).unwrap(), model.atom(bond.b).unwrap());
                assert!(bond.a < bond.b);
                assert!(distance(&a.position, &b.position) < config.bond_threshold);
            }
        }
    }

    #[test]
    fn same_seed_reproduces_atoms_and_bonds() {
        let config = MoleculeConfig::default();
        let reporter = ProgressReporter::new();
        let first = run(&config, &mut random::seeded(15), &reporter).unwrap();
        let second = run(&config, &mut random::seeded(15), &reporter).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn reports_both_phases() {
        let phases = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&phases);
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            if let Progress::PhaseStart { name } = event {
                sink.lock().unwrap().push(name);
            }
        }));
        run(&MoleculeConfig::default(), &mut random::seeded(1), &reporter).unwrap();
        assert_eq!(*phases.lock().unwrap(), vec!["Atom Cloud", "Bond Inference"]);
    }

    #[test]
    fn invalid_config_produces_no_model() {
        let config = MoleculeConfig {
            elements: vec![],
            ..MoleculeConfig::default()
        };
        assert!(run(&config, &mut random::seeded(0), &ProgressReporter::new()).is_err());
    }
}
