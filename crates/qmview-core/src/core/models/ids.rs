use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of an atom inside its generated cloud.
///
/// Ids are assigned in generation order, so a cloud of `n` atoms always carries
/// exactly the ids `0..n`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AtomId(pub usize);

impl AtomId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for AtomId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}
