use super::ids::AtomId;
use serde::{Deserialize, Serialize};

/// An inferred, unordered connection between two atoms of the same cloud.
///
/// Bonds are a derived relation: they are recomputed whenever the cloud is
/// regenerated and are never edited on their own. The pair is stored with `a < b`
/// so that the same two atoms always compare equal regardless of argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Bond {
    pub a: AtomId, // lower id of the pair
    pub b: AtomId, // higher id of the pair
}

impl Bond {
    pub fn new(first: AtomId, second: AtomId) -> Self {
        debug_assert_ne!(first, second, "an atom cannot bond to itself");
        if first <= second {
            Self {
                a: first,
                b: second,
            }
        } else {
            Self {
                a: second,
                b: first,
            }
        }
    }

    pub fn contains(&self, atom_id: AtomId) -> bool {
        self.a == atom_id || self.b == atom_id
    }

    /// Returns the partner of `atom_id` in this bond, if `atom_id` takes part in it.
    pub fn partner(&self, atom_id: AtomId) -> Option<AtomId> {
        if self.a == atom_id {
            Some(self.b)
        } else if self.b == atom_id {
            Some(self.a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_pair_order() {
        let forward = Bond::new(AtomId(1), AtomId(4));
        let backward = Bond::new(AtomId(4), AtomId(1));
        assert_eq!(forward, backward);
        assert_eq!(forward.a, AtomId(1));
        assert_eq!(forward.b, AtomId(4));
    }

    #[test]
    fn contains_checks_both_ends() {
        let bond = Bond::new(AtomId(2), AtomId(7));
        assert!(bond.contains(AtomId(2)));
        assert!(bond.contains(AtomId(7)));
        assert!(!bond.contains(AtomId(3)));
    }

    #[test]
    fn partner_returns_other_end() {
        let bond = Bond::new(AtomId(0), AtomId(5));
        assert_eq!(bond.partner(AtomId(0)), Some(AtomId(5)));
        assert_eq!(bond.partner(AtomId(5)), Some(AtomId(0)));
        assert_eq!(bond.partner(AtomId(9)), None);
    }

    #[test]
    fn bond_serializes_as_plain_ids() {
        let json = serde_json::to_string(&Bond::new(AtomId(3), AtomId(1))).unwrap();
        assert_eq!(json, r#"{"a":1,"b":3}"#);
    }
}
