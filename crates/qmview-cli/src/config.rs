use crate::cli::{CircuitArgs, MoleculeArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;
use qmview::engine::config::{CircuitConfig, EnergyConfig, MoleculeConfig};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialMoleculeConfig {
    min_atoms: Option<usize>,
    max_atoms: Option<usize>,
    elements: Option<Vec<String>>,
    extent: Option<f64>,
    bond_threshold: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialCircuitConfig {
    qubits: Option<usize>,
    depth: Option<usize>,
    gates: Option<Vec<String>>,
    rotation_min: Option<f64>,
    rotation_max: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialEnergyConfig {
    reference: Option<f64>,
    jitter_bound: Option<f64>,
    settling_ms: Option<u64>,
}

/// Settings read from the optional TOML file, layered with CLI flags and `-S` overrides.
///
/// Every field is optional; whatever is still unset when [`resolve`](Self::resolve) runs
/// falls back to the library defaults.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PartialDashboardConfig {
    molecule: Option<PartialMoleculeConfig>,
    circuit: Option<PartialCircuitConfig>,
    energy: Option<PartialEnergyConfig>,
}

/// Fully resolved configuration handed to the library.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub molecule: MoleculeConfig,
    pub circuit: CircuitConfig,
    pub energy: EnergyConfig,
}

impl PartialDashboardConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` when given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply_molecule_args(&mut self, args: &MoleculeArgs) {
        let molecule = self.molecule.get_or_insert_with(Default::default);
        if args.min_atoms.is_some() {
            molecule.min_atoms = args.min_atoms;
        }
        if args.max_atoms.is_some() {
            molecule.max_atoms = args.max_atoms;
        }
        if let Some(list) = &args.elements {
            molecule.elements = Some(split_list(list));
        }
        if args.bond_threshold.is_some() {
            molecule.bond_threshold = args.bond_threshold;
        }
    }

    pub fn apply_circuit_args(&mut self, args: &CircuitArgs) {
        let circuit = self.circuit.get_or_insert_with(Default::default);
        if args.qubits.is_some() {
            circuit.qubits = args.qubits;
        }
        if args.depth.is_some() {
            circuit.depth = args.depth;
        }
        if let Some(list) = &args.gates {
            circuit.gates = Some(split_list(list));
        }
    }

    /// Applies `KEY=VALUE` overrides; these win over both the file and the flags.
    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let (key, value_str) = (key.trim(), value_str.trim());

            match key {
                "molecule.min-atoms" => {
                    self.molecule_mut().min_atoms = Some(parse_value(key, value_str)?);
                }
                "molecule.max-atoms" => {
                    self.molecule_mut().max_atoms = Some(parse_value(key, value_str)?);
                }
                "molecule.elements" => {
                    self.molecule_mut().elements = Some(split_list(value_str));
                }
                "molecule.extent" => {
                    self.molecule_mut().extent = Some(parse_value(key, value_str)?);
                }
                "molecule.bond-threshold" => {
                    self.molecule_mut().bond_threshold = Some(parse_value(key, value_str)?);
                }
                "circuit.qubits" => {
                    self.circuit_mut().qubits = Some(parse_value(key, value_str)?);
                }
                "circuit.depth" => {
                    self.circuit_mut().depth = Some(parse_value(key, value_str)?);
                }
                "circuit.gates" => {
                    self.circuit_mut().gates = Some(split_list(value_str));
                }
                "circuit.rotation-min" => {
                    self.circuit_mut().rotation_min = Some(parse_value(key, value_str)?);
                }
                "circuit.rotation-max" => {
                    self.circuit_mut().rotation_max = Some(parse_value(key, value_str)?);
                }
                "energy.reference" => {
                    self.energy_mut().reference = Some(parse_value(key, value_str)?);
                }
                "energy.jitter-bound" => {
                    self.energy_mut().jitter_bound = Some(parse_value(key, value_str)?);
                }
                "energy.settling-ms" => {
                    self.energy_mut().settling_ms = Some(parse_value(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    /// Fills the gaps with library defaults and validates the result.
    pub fn resolve(self) -> Result<DashboardConfig> {
        let molecule = self.molecule.unwrap_or_default();
        let circuit = self.circuit.unwrap_or_default();
        let energy = self.energy.unwrap_or_default();

        let defaults = MoleculeConfig::default();
        let molecule = MoleculeConfig {
            min_atoms: molecule.min_atoms.unwrap_or(defaults.min_atoms),
            max_atoms: molecule.max_atoms.unwrap_or(defaults.max_atoms),
            elements: match molecule.elements {
                Some(items) => parser::parse_element_list(&items.join(","))
                    .map_err(|e| CliError::Config(e.to_string()))?,
                None => defaults.elements,
            },
            extent: molecule.extent.unwrap_or(defaults.extent),
            bond_threshold: molecule.bond_threshold.unwrap_or(defaults.bond_threshold),
        };
        molecule.validate().map_err(|e| CliError::Config(e.to_string()))?;

        let defaults = CircuitConfig::default();
        let circuit = CircuitConfig {
            qubit_count: circuit.qubits.unwrap_or(defaults.qubit_count),
            depth: circuit.depth.unwrap_or(defaults.depth),
            gates: match circuit.gates {
                Some(items) => parser::parse_gate_list(&items.join(","))
                    .map_err(|e| CliError::Config(e.to_string()))?,
                None => defaults.gates,
            },
            rotation_range: circuit.rotation_min.unwrap_or(defaults.rotation_range.start)
                ..circuit.rotation_max.unwrap_or(defaults.rotation_range.end),
        };
        circuit.validate().map_err(|e| CliError::Config(e.to_string()))?;

        let defaults = EnergyConfig::default();
        let energy = EnergyConfig {
            reference: energy.reference.unwrap_or(defaults.reference),
            jitter_bound: energy.jitter_bound.unwrap_or(defaults.jitter_bound),
            settling: energy
                .settling_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.settling),
        };
        energy.validate().map_err(|e| CliError::Config(e.to_string()))?;

        Ok(DashboardConfig {
            molecule,
            circuit,
            energy,
        })
    }

    fn molecule_mut(&mut self) -> &mut PartialMoleculeConfig {
        self.molecule.get_or_insert_with(Default::default)
    }

    fn circuit_mut(&mut self) -> &mut PartialCircuitConfig {
        self.circuit.get_or_insert_with(Default::default)
    }

    fn energy_mut(&mut self) -> &mut PartialEnergyConfig {
        self.energy.get_or_insert_with(Default::default)
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid value for {}: '{}'", key, value_str)))
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
