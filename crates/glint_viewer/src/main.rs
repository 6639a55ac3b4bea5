use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::SceneDescription;
use glint_renderer::{render, Camera, ImageBuffer, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cli;
mod demo;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();

    log::info!("Starting Glint Viewer");

    let config = load_config(&args)?;
    log::info!(
        "{}x{}, {} bounces, {} samples per pixel",
        config.width,
        config.height,
        config.bounce_limit,
        config.sample_count
    );

    let description = match &args.scene {
        Some(path) => SceneDescription::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the demo scene");
            demo::demo_scene()
        }
    };
    let (mut scene, animation) = description.build().context("Invalid scene")?;
    log::info!(
        "Scene has {} shapes and {} orbits",
        scene.len(),
        animation.orbits().len()
    );

    let camera = Camera::new().with_resolution(config.width, config.height);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let total = Instant::now();
    for frame in 0..args.frames {
        animation.apply(&mut scene, frame as f32 * args.time_step);

        let start = Instant::now();
        let image = render(&camera, &scene, &config, &mut rng);
        let path = args.output.join(format!("frame_{:04}.png", frame));
        save_png(&image, &path)?;

        log::info!(
            "Frame {} rendered in {:.2?} -> {}",
            frame,
            start.elapsed(),
            path.display()
        );
    }

    log::info!("Rendered {} frame(s) in {:.2?}", args.frames, total.elapsed());
    Ok(())
}

/// Resolve the render settings: file or preset, then command line overrides.
fn load_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None if args.preview => RenderConfig::preview(),
        None => RenderConfig::default(),
    };

    args.apply_overrides(&mut config);
    config.validate().context("Invalid render settings")?;
    Ok(config)
}

fn save_png(image: &ImageBuffer, path: &Path) -> Result<()> {
    let buffer = image::RgbaImage::from_raw(image.width, image.height, image.to_rgba())
        .context("Image buffer does not match its dimensions")?;
    buffer
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
