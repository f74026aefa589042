use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "qmview CLI - Generates molecule and quantum-circuit display models and writes them as SVG or JSON.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub shared: SharedArgs,
}

/// Options every generating command understands.
#[derive(Args, Debug, Clone, Default)]
pub struct SharedArgs {
    /// Seed the random source for reproducible output.
    #[arg(long, global = true, value_name = "INT")]
    pub seed: Option<u64>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file and flags.
    /// Can be used multiple times. Example: -S circuit.depth=8
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a molecule display model (atom cloud plus inferred bonds).
    Molecule(MoleculeArgs),
    /// Generate a circuit display model (gate matrix plus energy estimate).
    Circuit(CircuitArgs),
    /// List the quick-example molecules.
    Presets,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Json,
}

impl OutputFormat {
    /// Explicit choice first, then the output extension, then SVG.
    pub fn resolve(explicit: Option<Self>, output: &Path) -> Self {
        explicit.unwrap_or_else(|| {
            match output.extension().and_then(|e| e.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
                _ => OutputFormat::Svg,
            }
        })
    }
}

/// Arguments for the `molecule` subcommand.
#[derive(Args, Debug)]
pub struct MoleculeArgs {
    #[command(flatten)]
    pub source: MoleculeSource,

    /// Path of the file to write.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Output format. Inferred from the output extension when omitted.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Override the smallest cloud size.
    #[arg(long, value_name = "INT")]
    pub min_atoms: Option<usize>,

    /// Override the largest cloud size.
    #[arg(long, value_name = "INT")]
    pub max_atoms: Option<usize>,

    /// Override the element vocabulary, e.g. 'C,O,N'.
    #[arg(long, value_name = "LIST")]
    pub elements: Option<String>,

    /// Override the bond-distance threshold.
    #[arg(long, value_name = "FLOAT")]
    pub bond_threshold: Option<f64>,
}

/// Which molecule to show. Identifiers are opaque keys and are never parsed.
#[derive(Args, Debug, Clone, Default)]
#[group(required = false, multiple = false)]
pub struct MoleculeSource {
    /// Molecule identifier, e.g. a SMILES string.
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Name of a quick-example molecule (see `qmview presets`).
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,
}

/// Arguments for the `circuit` subcommand.
#[derive(Args, Debug)]
pub struct CircuitArgs {
    /// Number of qubit wires.
    #[arg(long, value_name = "INT")]
    pub qubits: Option<usize>,

    /// Number of gate columns.
    #[arg(long, value_name = "INT")]
    pub depth: Option<usize>,

    /// Override the gate vocabulary, e.g. 'H,RY,CNOT'.
    #[arg(long, value_name = "LIST")]
    pub gates: Option<String>,

    /// Path of the file to write.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Output format. Inferred from the output extension when omitted.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write immediately instead of waiting for the energy estimate to settle.
    #[arg(long)]
    pub no_wait: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_circuit_command_with_global_flags() {
        let cli = Cli::try_parse_from([
            "qmview", "circuit", "--qubits", "3", "--depth", "5", "-o", "out.svg", "--seed",
            "42", "-S", "energy.settling-ms=10", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.shared.seed, Some(42));
        assert_eq!(cli.shared.set_values, vec!["energy.settling-ms=10"]);
        match cli.command {
            Commands::Circuit(args) => {
                assert_eq!(args.qubits, Some(3));
                assert_eq!(args.depth, Some(5));
                assert!(!args.no_wait);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn id_and_preset_are_mutually_exclusive() {
        let result = Cli::try_parse_from([
            "qmview", "molecule", "--id", "CCO", "--preset", "aspirin", "-o", "m.svg",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["qmview", "presets", "-q", "-v"]).is_err());
    }

    #[test]
    fn output_format_falls_back_to_extension() {
        assert_eq!(
            OutputFormat::resolve(None, Path::new("model.JSON")),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::resolve(None, Path::new("model.svg")),
            OutputFormat::Svg
        );
        assert_eq!(
            OutputFormat::resolve(Some(OutputFormat::Json), Path::new("model.svg")),
            OutputFormat::Json
        );
    }
}
