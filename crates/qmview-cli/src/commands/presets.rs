use crate::error::Result;
use crate::presets::{DEFAULT_PRESET, PRESETS};

pub fn run() -> Result<()> {
    println!("Quick examples (use with `qmview molecule --preset NAME`):");
    for preset in PRESETS {
        let marker = if preset == DEFAULT_PRESET { "*" } else { " " };
        println!("{} {:<12} {}", marker, preset.name, preset.smiles);
    }
    Ok(())
}
