use super::atom::{Atom, Element};
use super::error::ModelError;
use super::ids::AtomId;
use super::topology::Bond;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The molecule display model: a generated atom cloud plus its inferred bonds.
///
/// This is one of the two hand-off artifacts consumed by the rendering surface. It is
/// produced fresh by every generation pass and owned by whoever requested it; the
/// engine never mutates a model it has already returned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawMoleculeModel")]
pub struct MoleculeModel {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

#[derive(Deserialize)]
struct RawMoleculeModel {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl TryFrom<RawMoleculeModel> for MoleculeModel {
    type Error = ModelError;

    fn try_from(raw: RawMoleculeModel) -> Result<Self, Self::Error> {
        let model = MoleculeModel {
            atoms: raw.atoms,
            bonds: raw.bonds,
        };
        model.validate()?;
        Ok(model)
    }
}

impl MoleculeModel {
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        Self { atoms, bonds }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id.index()).filter(|atom| atom.id == id)
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_bonded(&self, first: AtomId, second: AtomId) -> bool {
        first != second && self.bonds.contains(&Bond::new(first, second))
    }

    /// Ids of every atom bonded to `id`, in bond order.
    pub fn neighbors(&self, id: AtomId) -> Vec<AtomId> {
        self.bonds
            .iter()
            .filter_map(|bond| bond.partner(id))
            .collect()
    }

    /// Number of atoms per element, keyed in the vocabulary's canonical order.
    pub fn composition(&self) -> BTreeMap<Element, usize> {
        let mut counts = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.element).or_insert(0) += 1;
        }
        counts
    }

    /// Checks that ids run contiguously from 0 and that every bond joins two distinct
    /// atoms of this cloud, stored lower id first.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (index, atom) in self.atoms.iter().enumerate() {
            if atom.id.index() != index {
                return Err(ModelError::NonContiguousIds { index, id: atom.id });
            }
        }
        for bond in &self.bonds {
            if bond.a == bond.b {
                return Err(ModelError::SelfBond(bond.a));
            }
            let atoms = self.atoms.len();
            if bond.a > bond.b || bond.b.index() >= atoms {
                return Err(ModelError::DanglingBond {
                    a: bond.a,
                    b: bond.b,
                    atoms,
                });
            }
        }
        Ok(())
    }

    pub fn into_parts(self) -> (Vec<Atom>, Vec<Bond>) {
        (self.atoms, self.bonds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn sample_model() -> MoleculeModel {
        let atoms = vec![
            Atom::new(AtomId(0), Element::Carbon, Point3::origin()),
            Atom::new(AtomId(1), Element::Oxygen, Point3::new(10.0, 0.0, 0.0)),
            Atom::new(AtomId(2), Element::Carbon, Point3::new(0.0, 10.0, 0.0)),
            Atom::new(AtomId(3), Element::Hydrogen, Point3::new(500.0, 0.0, 0.0)),
        ];
        let bonds = vec![
            Bond::new(AtomId(0), AtomId(1)),
            Bond::new(AtomId(0), AtomId(2)),
            Bond::new(AtomId(1), AtomId(2)),
        ];
        MoleculeModel::new(atoms, bonds)
    }

    #[test]
    fn counts_report_atoms_and_bonds() {
        let model = sample_model();
        assert_eq!(model.atom_count(), 4);
        assert_eq!(model.bond_count(), 3);
    }

    #[test]
    fn atom_lookup_by_id() {
        let model = sample_model();
        assert_eq!(model.atom(AtomId(1)).unwrap().element, Element::Oxygen);
        assert!(model.atom(AtomId(10)).is_none());
    }

    #[test]
    fn is_bonded_ignores_argument_order_and_self_pairs() {
        let model = sample_model();
        assert!(model.is_bonded(AtomId(2), AtomId(0)));
        assert!(!model.is_bonded(AtomId(0), AtomId(3)));
        assert!(!model.is_bonded(AtomId(0), AtomId(0)));
    }

    #[test]
    fn neighbors_lists_partners() {
        let model = sample_model();
        assert_eq!(model.neighbors(AtomId(0)), vec![AtomId(1), AtomId(2)]);
        assert!(model.neighbors(AtomId(3)).is_empty());
    }

    #[test]
    fn composition_counts_each_element() {
        let composition = sample_model().composition();
        assert_eq!(composition.get(&Element::Carbon), Some(&2));
        assert_eq!(composition.get(&Element::Oxygen), Some(&1));
        assert_eq!(composition.get(&Element::Hydrogen), Some(&1));
        assert_eq!(composition.get(&Element::Nitrogen), None);
    }

    #[test]
    fn generated_shape_passes_validation() {
        assert_eq!(sample_model().validate(), Ok(()));
        assert_eq!(MoleculeModel::default().validate(), Ok(()));
    }

    #[test]
    fn deserialization_rejects_gapped_ids_and_dangling_bonds() {
        let gapped = r#"{"atoms":[{"id":0,"element":"C","position":[0.0,0.0,0.0]},{"id":2,"element":"H","position":[1.0,0.0,0.0]}],"bonds":[]}"#;
        let err = serde_json::from_str::<MoleculeModel>(gapped).unwrap_err();
        assert!(err.to_string().contains("contiguously"));

        let dangling = r#"{"atoms":[{"id":0,"element":"C","position":[0.0,0.0,0.0]}],"bonds":[{"a":0,"b":7}]}"#;
        let err = serde_json::from_str::<MoleculeModel>(dangling).unwrap_err();
        assert!(err.to_string().contains("outside the cloud"));

        let self_bond = r#"{"atoms":[{"id":0,"element":"C","position":[0.0,0.0,0.0]}],"bonds":[{"a":0,"b":0}]}"#;
        assert!(serde_json::from_str::<MoleculeModel>(self_bond).is_err());
    }

    #[test]
    fn serializes_in_hand_off_shape() {
        let model = MoleculeModel::new(
            vec![Atom::new(AtomId(0), Element::Nitrogen, Point3::new(1.0, 2.0, 3.0))],
            vec![],
        );
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["atoms"][0]["id"], 0);
        assert_eq!(value["atoms"][0]["element"], "N");
        assert_eq!(value["atoms"][0]["position"][2], 3.0);
        assert!(value["bonds"].as_array().unwrap().is_empty());
    }
}
