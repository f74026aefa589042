use crate::core::models::atom::Element;
use crate::core::models::gate::GateKind;
use std::f64::consts::PI;
use std::ops::{Range, RangeInclusive};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_MIN_ATOMS: usize = 15;
pub const DEFAULT_MAX_ATOMS: usize = 24;
pub const DEFAULT_COORDINATE_EXTENT: f64 = 100.0;
pub const DEFAULT_BOND_THRESHOLD: f64 = 100.0;

pub const DEFAULT_QUBIT_COUNT: usize = 4;
pub const DEFAULT_DEPTH: usize = 6;

pub const DEFAULT_REFERENCE_ENERGY: f64 = -1.8562;
pub const DEFAULT_JITTER_BOUND: f64 = 0.05;
pub const DEFAULT_SETTLING: Duration = Duration::from_millis(2000);

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid qubit count {0}: a circuit needs at least one qubit")]
    InvalidQubitCount(usize),

    #[error("Invalid circuit depth {0}: a circuit needs at least one column")]
    InvalidDepth(usize),

    #[error("The {0} vocabulary is empty")]
    EmptyVocabulary(&'static str),

    #[error("Invalid atom count range {min}..={max}: bounds must satisfy 1 <= min <= max")]
    InvalidSizeRange { min: usize, max: usize },

    #[error("Invalid value for '{name}': {value}")]
    InvalidValue { name: &'static str, value: f64 },

    #[error("Invalid rotation range {start}..{end}: must be finite and non-empty")]
    InvalidRotationRange { start: f64, end: f64 },
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { name, value })
    }
}

/// Parameters of the atom cloud generator and the bond inference engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeConfig {
    pub min_atoms: usize,
    pub max_atoms: usize,
    pub elements: Vec<Element>,
    /// Half edge length of the generation cube; each axis is drawn from `[-extent, extent)`.
    pub extent: f64,
    /// Pairs strictly closer than this are bonded.
    pub bond_threshold: f64,
}

impl MoleculeConfig {
    pub fn builder() -> MoleculeConfigBuilder {
        MoleculeConfigBuilder::new()
    }

    pub fn size_range(&self) -> RangeInclusive<usize> {
        self.min_atoms..=self.max_atoms
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_atoms == 0 || self.min_atoms > self.max_atoms {
            return Err(ConfigError::InvalidSizeRange {
                min: self.min_atoms,
                max: self.max_atoms,
            });
        }
        if self.elements.is_empty() {
            return Err(ConfigError::EmptyVocabulary("element"));
        }
        require_positive("extent", self.extent)?;
        require_positive("bond_threshold", self.bond_threshold)?;
        Ok(())
    }
}

impl Default for MoleculeConfig {
    fn default() -> Self {
        Self {
            min_atoms: DEFAULT_MIN_ATOMS,
            max_atoms: DEFAULT_MAX_ATOMS,
            elements: Element::ALL.to_vec(),
            extent: DEFAULT_COORDINATE_EXTENT,
            bond_threshold: DEFAULT_BOND_THRESHOLD,
        }
    }
}

#[derive(Default)]
pub struct MoleculeConfigBuilder {
    min_atoms: Option<usize>,
    max_atoms: Option<usize>,
    elements: Option<Vec<Element>>,
    extent: Option<f64>,
    bond_threshold: Option<f64>,
}

impl MoleculeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom_count_range(mut self, range: RangeInclusive<usize>) -> Self {
        self.min_atoms = Some(*range.start());
        self.max_atoms = Some(*range.end());
        self
    }
    pub fn min_atoms(mut self, n: usize) -> Self {
        self.min_atoms = Some(n);
        self
    }
    pub fn max_atoms(mut self, n: usize) -> Self {
        self.max_atoms = Some(n);
        self
    }
    pub fn elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = Some(elements);
        self
    }
    pub fn extent(mut self, extent: f64) -> Self {
        self.extent = Some(extent);
        self
    }
    pub fn bond_threshold(mut self, threshold: f64) -> Self {
        self.bond_threshold = Some(threshold);
        self
    }

    pub fn build(self) -> Result<MoleculeConfig, ConfigError> {
        let config = MoleculeConfig {
            min_atoms: self
                .min_atoms
                .ok_or(ConfigError::MissingParameter("min_atoms"))?,
            max_atoms: self
                .max_atoms
                .ok_or(ConfigError::MissingParameter("max_atoms"))?,
            elements: self
                .elements
                .ok_or(ConfigError::MissingParameter("elements"))?,
            extent: self.extent.ok_or(ConfigError::MissingParameter("extent"))?,
            bond_threshold: self
                .bond_threshold
                .ok_or(ConfigError::MissingParameter("bond_threshold"))?,
        };
        config.validate()?;
        Ok(config)
    }
}

impl From<MoleculeConfig> for MoleculeConfigBuilder {
    fn from(config: MoleculeConfig) -> Self {
        Self {
            min_atoms: Some(config.min_atoms),
            max_atoms: Some(config.max_atoms),
            elements: Some(config.elements),
            extent: Some(config.extent),
            bond_threshold: Some(config.bond_threshold),
        }
    }
}

/// Parameters of the circuit layout generator.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitConfig {
    pub qubit_count: usize,
    pub depth: usize,
    pub gates: Vec<GateKind>,
    /// Half-open interval rotation angles are drawn from, in radians.
    pub rotation_range: Range<f64>,
}

impl CircuitConfig {
    pub fn builder() -> CircuitConfigBuilder {
        CircuitConfigBuilder::new()
    }

    /// Copy of this configuration with new dimensions, validated.
    pub fn with_dimensions(&self, qubit_count: usize, depth: usize) -> Result<Self, ConfigError> {
        let config = Self {
            qubit_count,
            depth,
            ..self.clone()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.qubit_count < 1 {
            return Err(ConfigError::InvalidQubitCount(self.qubit_count));
        }
        if self.depth < 1 {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        let (start, end) = (self.rotation_range.start, self.rotation_range.end);
        if !(start.is_finite() && end.is_finite() && start < end) {
            return Err(ConfigError::InvalidRotationRange { start, end });
        }
        self.effective_gates().map(|_| ())
    }

    /// The vocabulary actually drawn from for this qubit count.
    ///
    /// Two-qubit kinds need a distinct target, so they are dropped when the layout has
    /// a single qubit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyVocabulary`] if no kind is left to draw.
    pub fn effective_gates(&self) -> Result<Vec<GateKind>, ConfigError> {
        let gates: Vec<GateKind> = if self.qubit_count < 2 {
            self.gates
                .iter()
                .copied()
                .filter(|kind| !kind.is_two_qubit())
                .collect()
        } else {
            self.gates.clone()
        };
        if gates.len() != self.gates.len() {
            debug!(
                qubit_count = self.qubit_count,
                "Dropping two-qubit gates from a single-qubit vocabulary."
            );
        }
        if gates.is_empty() {
            return Err(ConfigError::EmptyVocabulary("gate"));
        }
        Ok(gates)
    }
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            qubit_count: DEFAULT_QUBIT_COUNT,
            depth: DEFAULT_DEPTH,
            gates: GateKind::DEFAULT_VOCABULARY.to_vec(),
            rotation_range: 0.0..PI,
        }
    }
}

#[derive(Default)]
pub struct CircuitConfigBuilder {
    qubit_count: Option<usize>,
    depth: Option<usize>,
    gates: Option<Vec<GateKind>>,
    rotation_range: Option<Range<f64>>,
}

impl CircuitConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn qubit_count(mut self, n: usize) -> Self {
        self.qubit_count = Some(n);
        self
    }
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }
    pub fn gates(mut self, gates: Vec<GateKind>) -> Self {
        self.gates = Some(gates);
        self
    }
    pub fn rotation_range(mut self, range: Range<f64>) -> Self {
        self.rotation_range = Some(range);
        self
    }

    pub fn build(self) -> Result<CircuitConfig, ConfigError> {
        let config = CircuitConfig {
            qubit_count: self
                .qubit_count
                .ok_or(ConfigError::MissingParameter("qubit_count"))?,
            depth: self.depth.ok_or(ConfigError::MissingParameter("depth"))?,
            gates: self.gates.ok_or(ConfigError::MissingParameter("gates"))?,
            rotation_range: self
                .rotation_range
                .ok_or(ConfigError::MissingParameter("rotation_range"))?,
        };
        config.validate()?;
        Ok(config)
    }
}

impl From<CircuitConfig> for CircuitConfigBuilder {
    fn from(config: CircuitConfig) -> Self {
        Self {
            qubit_count: Some(config.qubit_count),
            depth: Some(config.depth),
            gates: Some(config.gates),
            rotation_range: Some(config.rotation_range),
        }
    }
}

/// Parameters of the energy estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyConfig {
    /// Reference ground-state energy in Hartree.
    pub reference: f64,
    /// Samples fall in `[reference - jitter_bound, reference + jitter_bound]`.
    pub jitter_bound: f64,
    /// Length of the window during which a fresh sample stays provisional.
    pub settling: Duration,
}

impl EnergyConfig {
    pub fn builder() -> EnergyConfigBuilder {
        EnergyConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.reference.is_finite() {
            return Err(ConfigError::InvalidValue {
                name: "reference",
                value: self.reference,
            });
        }
        if !(self.jitter_bound.is_finite() && self.jitter_bound >= 0.0) {
            return Err(ConfigError::InvalidValue {
                name: "jitter_bound",
                value: self.jitter_bound,
            });
        }
        Ok(())
    }
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            reference: DEFAULT_REFERENCE_ENERGY,
            jitter_bound: DEFAULT_JITTER_BOUND,
            settling: DEFAULT_SETTLING,
        }
    }
}

#[derive(Default)]
pub struct EnergyConfigBuilder {
    reference: Option<f64>,
    jitter_bound: Option<f64>,
    settling: Option<Duration>,
}

impl EnergyConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference(mut self, energy: f64) -> Self {
        self.reference = Some(energy);
        self
    }
    pub fn jitter_bound(mut self, bound: f64) -> Self {
        self.jitter_bound = Some(bound);
        self
    }
    pub fn settling(mut self, window: Duration) -> Self {
        self.settling = Some(window);
        self
    }

    pub fn build(self) -> Result<EnergyConfig, ConfigError> {
        let config = EnergyConfig {
            reference: self
                .reference
                .ok_or(ConfigError::MissingParameter("reference"))?,
            jitter_bound: self
                .jitter_bound
                .ok_or(ConfigError::MissingParameter("jitter_bound"))?,
            settling: self
                .settling
                .ok_or(ConfigError::MissingParameter("settling"))?,
        };
        config.validate()?;
        Ok(config)
    }
}

impl From<EnergyConfig> for EnergyConfigBuilder {
    fn from(config: EnergyConfig) -> Self {
        Self {
            reference: Some(config.reference),
            jitter_bound: Some(config.jitter_bound),
            settling: Some(config.settling),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(MoleculeConfig::default().validate().is_ok());
        assert!(CircuitConfig::default().validate().is_ok());
        assert!(EnergyConfig::default().validate().is_ok());
    }

    #[test]
    fn molecule_builder_requires_every_parameter() {
        let result = MoleculeConfig::builder()
            .atom_count_range(15..=24)
            .elements(Element::ALL.to_vec())
            .extent(100.0)
            .build();
        assert_eq!(
            result,
            Err(ConfigError::MissingParameter("bond_threshold"))
        );
    }

    #[test]
    fn molecule_builder_rejects_inverted_range() {
        let result = MoleculeConfigBuilder::from(MoleculeConfig::default())
            .atom_count_range(10..=5)
            .build();
        assert_eq!(
            result,
            Err(ConfigError::InvalidSizeRange { min: 10, max: 5 })
        );
    }

    #[test]
    fn molecule_builder_rejects_zero_sized_cloud() {
        let result = MoleculeConfigBuilder::from(MoleculeConfig::default())
            .atom_count_range(0..=0)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidSizeRange { .. })));
    }

    #[test]
    fn molecule_builder_rejects_empty_elements() {
        let result = MoleculeConfigBuilder::from(MoleculeConfig::default())
            .elements(vec![])
            .build();
        assert_eq!(result, Err(ConfigError::EmptyVocabulary("element")));
    }

    #[test]
    fn molecule_builder_rejects_non_positive_threshold() {
        let result = MoleculeConfigBuilder::from(MoleculeConfig::default())
            .bond_threshold(0.0)
            .build();
        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                name: "bond_threshold",
                value: 0.0
            })
        );
    }

    #[test]
    fn circuit_builder_rejects_zero_dimensions() {
        let base = CircuitConfig::default();
        assert_eq!(
            CircuitConfigBuilder::from(base.clone()).qubit_count(0).build(),
            Err(ConfigError::InvalidQubitCount(0))
        );
        assert_eq!(
            CircuitConfigBuilder::from(base).depth(0).build(),
            Err(ConfigError::InvalidDepth(0))
        );
    }

    #[test]
    fn circuit_builder_rejects_empty_vocabulary() {
        let result = CircuitConfig::builder()
            .qubit_count(2)
            .depth(2)
            .gates(vec![])
            .rotation_range(0.0..PI)
            .build();
        assert_eq!(result, Err(ConfigError::EmptyVocabulary("gate")));
    }

    #[test]
    fn circuit_builder_requires_every_parameter() {
        let result = CircuitConfig::builder()
            .qubit_count(2)
            .depth(2)
            .gates(GateKind::DEFAULT_VOCABULARY.to_vec())
            .build();
        assert_eq!(
            result,
            Err(ConfigError::MissingParameter("rotation_range"))
        );
    }

    #[test]
    fn circuit_builder_rejects_empty_rotation_range() {
        let result = CircuitConfigBuilder::from(CircuitConfig::default())
            .rotation_range(1.0..1.0)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRotationRange { .. })
        ));
    }

    #[test]
    fn single_qubit_vocabulary_drops_two_qubit_gates() {
        let config = CircuitConfig::default().with_dimensions(1, 3).unwrap();
        let gates = config.effective_gates().unwrap();
        assert!(!gates.contains(&GateKind::Cnot));
        assert_eq!(gates.len(), GateKind::DEFAULT_VOCABULARY.len() - 1);
    }

    #[test]
    fn cnot_only_vocabulary_fails_for_single_qubit() {
        let config = CircuitConfig {
            qubit_count: 1,
            depth: 1,
            gates: vec![GateKind::Cnot],
            rotation_range: 0.0..PI,
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyVocabulary("gate"))
        );
        assert!(config.with_dimensions(2, 1).is_ok());
    }

    #[test]
    fn energy_builder_rejects_negative_jitter() {
        let result = EnergyConfigBuilder::from(EnergyConfig::default())
            .jitter_bound(-0.1)
            .build();
        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                name: "jitter_bound",
                value: -0.1
            })
        );
    }

    #[test]
    fn energy_defaults_match_dashboard_constants() {
        let config = EnergyConfig::default();
        assert_eq!(config.reference, -1.8562);
        assert_eq!(config.jitter_bound, 0.05);
        assert_eq!(config.settling, Duration::from_secs(2));
    }
}
