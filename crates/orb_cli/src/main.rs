//! Offline renderer entry point.
//!
//! Usage: `orb_cli [settings.json]`. With no argument the built-in
//! defaults render the cover scene to `out.ppm`.

mod scene;
mod settings;

use anyhow::{Context, Result};
use log::info;
use orb_renderer::{render, save_png, save_ppm, Camera, RenderConfig, Vec3};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use settings::Settings;

fn main() -> Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => {
            Settings::load(&path).with_context(|| format!("loading settings from {path}"))?
        }
        None => Settings::default(),
    };

    let mut camera = Camera::new()
        .with_resolution(settings.width, settings.height)
        .with_position(
            Vec3::from(settings.camera.look_from),
            Vec3::from(settings.camera.look_at),
            Vec3::from(settings.camera.vup),
        )
        .with_lens(
            settings.camera.vfov,
            settings.camera.aperture,
            settings.camera.focus_dist,
        );
    camera.initialize();

    let mut rng = SmallRng::seed_from_u64(settings.seed);
    let world = scene::cover_scene(&mut rng);
    info!("scene ready: {} objects", world.len());

    let config = RenderConfig {
        samples_per_pixel: settings.samples_per_pixel,
        max_depth: settings.max_depth,
        seed: settings.seed,
        ..Default::default()
    };

    info!(
        "rendering {}x{} @ {} spp, depth {}",
        settings.width, settings.height, config.samples_per_pixel, config.max_depth
    );
    let start = std::time::Instant::now();
    let image = render(&camera, &world, &config);
    info!("rendered in {:.2?}", start.elapsed());

    if settings.output.ends_with(".png") {
        save_png(&image, &settings.output)
    } else {
        save_ppm(&image, &settings.output)
    }
    .with_context(|| format!("writing {}", settings.output))?;
    info!("wrote {}", settings.output);

    Ok(())
}
