pub mod circuit;
pub mod molecule;
pub mod presets;

use crate::error::Result;
use qmview::render::primitives::Scene;
use qmview::render::svg::SvgWriter;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

fn write_svg(scene: &Scene, path: &Path) -> Result<()> {
    info!(primitives = scene.len(), "Writing SVG to {:?}", path);
    let mut writer = BufWriter::new(File::create(path)?);
    SvgWriter::new().write_to(scene, &mut writer)?;
    Ok(())
}
