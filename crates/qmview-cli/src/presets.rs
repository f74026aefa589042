/// A quick-example molecule offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub smiles: &'static str,
}

pub const PRESETS: [Preset; 4] = [
    Preset {
        name: "Aspirin",
        smiles: "CC(=O)Oc1ccccc1C(=O)O",
    },
    Preset {
        name: "Caffeine",
        smiles: "CN1C=NC2=C1C(=O)N(C(=O)N2C)C",
    },
    Preset {
        name: "Ibuprofen",
        smiles: "CC(C)Cc1ccc(cc1)C(C)C(=O)O",
    },
    Preset {
        name: "Penicillin",
        smiles: "CC1(C)SC2C(NC(=O)Cc3ccccc3)C(=O)N2C1C(=O)O",
    },
];

/// The molecule shown when no identifier is given.
pub const DEFAULT_PRESET: Preset = PRESETS[0];

/// Looks a preset up by name, ignoring case.
pub fn find(name: &str) -> Option<Preset> {
    PRESETS
        .iter()
        .copied()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("caffeine").map(|p| p.smiles), Some(PRESETS[1].smiles));
        assert_eq!(find(" IBUPROFEN ").map(|p| p.name), Some("Ibuprofen"));
        assert!(find("water").is_none());
    }

    #[test]
    fn default_is_aspirin() {
        assert_eq!(DEFAULT_PRESET.name, "Aspirin");
    }
}
