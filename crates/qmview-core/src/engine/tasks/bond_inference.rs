use crate::core::models::atom::Atom;
use crate::core::models::topology::Bond;
use crate::core::utils::geometry::is_within;
use crate::engine::progress::{Progress, ProgressReporter};
use itertools::Itertools;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Derives the bond list of an atom cloud.
///
/// Every unordered pair `(i, j)` with `i < j` is tested once; it is bonded iff the
/// distance is strictly below `threshold`. Bonds come out in pair order (`i` major,
/// `j` minor), so the same atom list always yields the same list.
#[instrument(skip_all, name = "bond_inference_task", fields(atoms = atoms.len()))]
pub fn run(atoms: &[Atom], threshold: f64, reporter: &ProgressReporter) -> Vec<Bond> {
    let pairs: Vec<(&Atom, &Atom)> = atoms.iter().tuple_combinations().collect();
    if pairs.is_empty() {
        return Vec::new();
    }

    reporter.report(Progress::TaskStart {
        total_steps: pairs.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = pairs.iter();

    #[cfg(feature = "parallel")]
    let iterator = pairs.par_iter();

    let bonds: Vec<Bond> = iterator
        .filter_map(|(first, second)| {
            reporter.report(Progress::TaskIncrement);
            is_within(&first.position, &second.position, threshold)
                .then(|| Bond::new(first.id, second.id))
        })
        .collect();

    reporter.report(Progress::TaskFinish);
    debug!(pairs = pairs.len(), bonds = bonds.len(), "Bond inference complete.");
    bonds
}
