use super::write_svg;
use crate::cli::{MoleculeArgs, OutputFormat, SharedArgs};
use crate::config::PartialDashboardConfig;
use crate::error::{CliError, Result};
use crate::presets;
use crate::utils::progress::CliProgressHandler;
use qmview::core::io::json::MoleculeJson;
use qmview::core::io::traits::ModelFile;
use qmview::core::models::molecule::MoleculeModel;
use qmview::engine::progress::ProgressReporter;
use qmview::engine::random;
use qmview::render::molecule::draw_molecule;
use qmview::render::projection::Projection;
use qmview::workflows::session::DisplaySession;
use tracing::{debug, info};

pub async fn run(args: MoleculeArgs, shared: &SharedArgs, quiet: bool) -> Result<()> {
    let id = molecule_id(&args)?;
    info!("Showing molecule '{}'.", id);

    let mut partial = PartialDashboardConfig::load(shared.config.as_deref())?;
    partial.apply_molecule_args(&args);
    partial.apply_set_values(&shared.set_values)?;
    let config = partial.resolve()?;
    debug!("Resolved configuration: {:?}", config);

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

    let model =
        tokio::task::block_in_place(|| session.show_molecule(&id, &reporter).cloned())?;

    match OutputFormat::resolve(args.format, &args.output) {
        OutputFormat::Svg => {
            let scene = draw_molecule(&model, &Projection::default());
            write_svg(&scene, &args.output)?;
        }
        OutputFormat::Json => {
            MoleculeJson::write_to_path(&model, &args.output).map_err(|source| {
                CliError::Output {
                    path: args.output.clone(),
                    source,
                }
            })?;
        }
    }

    println!(
        "✓ {} atoms, {} bonds ({}) written to: {}",
        model.atom_count(),
        model.bond_count(),
        composition_summary(&model),
        args.output.display()
    );
    Ok(())
}

/// `--id` wins, then `--preset`, then the default quick example.
fn molecule_id(args: &MoleculeArgs) -> Result<String> {
    if let Some(id) = &args.source.id {
        return Ok(id.clone());
    }
    match &args.source.preset {
        Some(name) => presets::find(name)
            .map(|preset| preset.smiles.to_string())
            .ok_or_else(|| {
                CliError::Argument(format!(
                    "Unknown preset '{}'. Run `qmview presets` to list them.",
                    name
                ))
            }),
        None => Ok(presets::DEFAULT_PRESET.smiles.to_string()),
    }
}

fn composition_summary(model: &MoleculeModel) -> String {
    model
        .composition()
        .into_iter()
        .map(|(element, count)| format!("{}{}", element, count))
        .collect::<Vec<_>>()
        .join(" ")
}
