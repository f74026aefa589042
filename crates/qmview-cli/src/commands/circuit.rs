use super::write_svg;
use crate::cli::{CircuitArgs, OutputFormat, SharedArgs};
use crate::config::PartialDashboardConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::{CliProgressHandler, SettlingSpinner};
use qmview::core::io::json::CircuitJson;
use qmview::core::io::traits::ModelFile;
use qmview::engine::progress::ProgressReporter;
use qmview::engine::random;
use qmview::render::circuit::draw_circuit_display;
use qmview::workflows::session::DisplaySession;
use tracing::{debug, info, warn};

pub async fn run(args: CircuitArgs, shared: &SharedArgs, quiet: bool) -> Result<()> {
    let mut partial = PartialDashboardConfig::load(shared.config.as_deref())?;
    partial.apply_circuit_args(&args);
    partial.apply_set_values(&shared.set_values)?;
    let config = partial.resolve()?;
    debug!("Resolved configuration: {:?}", config);

    let (qubit_count, depth) = (config.circuit.qubit_count, config.circuit.depth);
    let mut session = DisplaySession::new(
        config.molecule,
        config.circuit,
        config.energy,
        random::source(shared.seed),
    )?;

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let stats = tokio::task::block_in_place(|| {
        session
            .show_circuit(qubit_count, depth, &reporter)
            .map(|layout| layout.stats())
    })?;

    if args.no_wait {
        info!("Skipping the settling window; the energy is written as converging.");
    } else {
        let spinner = SettlingSpinner::start("Converging energy estimate...", !quiet);
        match session.estimator().settled().await {
            Ok(value) => {
                info!(value, "Energy estimate settled.");
                spinner.finish(session.energy().label());
            }
            Err(e) => {
                spinner.abandon();
                warn!("Energy estimate did not settle: {}", e);
                return Err(e.into());
            }
        }
    }

    let model = session.circuit_display_model().ok_or_else(|| {
        CliError::Other(anyhow::anyhow!("No circuit layout was generated."))
    })?;

    match OutputFormat::resolve(args.format, &args.output) {
        OutputFormat::Svg => write_svg(&draw_circuit_display(&model), &args.output)?,
        OutputFormat::Json => {
            CircuitJson::write_to_path(&model, &args.output).map_err(|source| {
                CliError::Output {
                    path: args.output.clone(),
                    source,
                }
            })?;
        }
    }

    println!(
        "✓ {} qubits x {} columns: {} gates ({} two-qubit, {} rotations), {}",
        stats.qubits,
        stats.depth,
        stats.gates,
        stats.two_qubit_gates,
        stats.rotation_gates,
        model.energy.label()
    );
    println!("  Written to: {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn parse(argv: &[&str]) -> (CircuitArgs, SharedArgs) {
        let mut full = vec!["qmview", "circuit"];
        full.extend_from_slice(argv);
        let cli = Cli::try_parse_from(full).unwrap();
        match cli.command {
            Commands::Circuit(args) => (args, cli.shared),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn waits_for_the_settled_energy_before_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("circuit.json");
        let (args, shared) = parse(&[
            "--qubits",
            "3",
            "--depth",
            "5",
            "-o",
            path.to_str().unwrap(),
            "--seed",
            "11",
            "-S",
            "energy.settling-ms=20",
        ]);
        run(args, &shared, true).await.unwrap();

        let model = CircuitJson::read_from_path(&path).unwrap();
        assert_eq!(model.layout.qubit_count(), 3);
        assert_eq!(model.layout.depth(), 5);
        assert_eq!(model.layout.gate_count(), 15);
        assert!(!model.energy.converging);
        assert!((model.energy.value + 1.8562).abs() <= 0.05 + 1e-12);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn no_wait_writes_a_converging_label() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("circuit.svg");
        let (args, shared) = parse(&["-o", path.to_str().unwrap(), "--no-wait"]);
        run(args, &shared, true).await.unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("E = ... Ha"));
        assert!(svg.contains(">q3</text>"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn zero_qubits_is_a_configuration_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("circuit.svg");
        let (args, shared) = parse(&["--qubits", "0", "-o", path.to_str().unwrap()]);
        assert!(matches!(
            run(args, &shared, true).await,
            Err(CliError::Config(_))
        ));
    }
}
