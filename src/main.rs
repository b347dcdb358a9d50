//! Perlin Fog - Perlin noise texture generator
//!
//! Builds the solid base texture and the tiled noise layers of the fog scene
//! and writes them out as PNG files.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use perlin_fog::cli::Args;
use perlin_fog::export::save_texture_set;
use perlin_fog::texture::TextureSynthesizer;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let scene = args
        .scene()
        .context("failed to load scene configuration")?;

    tracing::info!(
        "Generating {}x{} textures: base {:?}, noise repeats {:?}",
        scene.textures.width,
        scene.textures.height,
        scene.textures.base_color,
        scene
            .textures
            .layers
            .iter()
            .map(|layer| layer.repeat)
            .collect::<Vec<_>>()
    );

    let start = Instant::now();

    let synthesizer = TextureSynthesizer::new();
    let set = synthesizer
        .texture_set(&scene.textures)
        .context("failed to generate textures")?;

    let written = save_texture_set(&set, &scene.export).with_context(|| {
        format!(
            "failed to write textures to {}",
            scene.export.output_dir.display()
        )
    })?;

    tracing::info!(
        "Wrote {} textures in {:.2}ms",
        written.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
