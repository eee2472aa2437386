use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{demo_scene, load_scene, SceneDescription};
use glint_renderer::{render, Camera, RenderConfig, Scene};

/// Render a scene to a PNG image with the glint ray tracer.
#[derive(Debug, Parser)]
#[command(name = "glint_render", version, about)]
struct Args {
    /// Scene description file (JSON); the built-in demo scene is rendered
    /// when omitted
    scene: Option<PathBuf>,

    /// Output image path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Override the scene's image width
    #[arg(long)]
    width: Option<u32>,

    /// Override the scene's image height
    #[arg(long)]
    height: Option<u32>,
}

fn build_camera(description: &SceneDescription, args: &Args) -> Camera {
    let settings = &description.camera;
    let width = args.width.unwrap_or(settings.width);
    let height = args.height.unwrap_or(settings.height);

    let mut camera = Camera::new()
        .with_resolution(width, height)
        .with_position(settings.look_from, settings.look_at, settings.up)
        .with_lens(settings.vfov, 1.0, 10000.0);
    camera.initialize();
    camera
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let description = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("failed to load scene '{}'", path.display()))?,
        None => {
            log::info!("No scene file given, rendering the built-in demo scene");
            demo_scene()
        }
    };

    let scene = Scene::from_description(&description).context("failed to build scene")?;
    let camera = build_camera(&description, &args);
    let config = RenderConfig::default();

    log::info!(
        "Rendering {}x{} ({} primitives)...",
        camera.image_width,
        camera.image_height,
        scene.len()
    );
    let start = Instant::now();
    let image = render(&camera, &scene, &config);
    log::info!("Rendered in {:.2?}", start.elapsed());

    image
        .save_png(&args.output)
        .with_context(|| format!("failed to write '{}'", args.output.display()))?;
    log::info!("Saved to '{}'", args.output.display());

    Ok(())
}
