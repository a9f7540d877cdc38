//! Plexus demo driver
//!
//! Headless exercise of the engine: build a field, run the tick loop for a
//! fixed span, and log per-frame draw statistics. Pass a JSON config path to
//! override the dense preset, and optionally a numeric seed:
//!
//! ```text
//! plexus [config.json] [seed]
//! ```

use plexus::renderer::tessellate;
use plexus::{FieldConfig, ParticleField, Viewport, renderables, tick};

/// Ticks simulated by the demo (~12s at the dense preset's 30ms interval)
const DEMO_TICKS: u64 = 400;

/// Portrait phone viewport, the layout this effect usually backs
const VIEWPORT: Viewport = Viewport::new(1080.0, 1920.0);

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("failed to load config from {}: {}", path, err);
                std::process::exit(1);
            }
        },
        None => FieldConfig::dense(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut field = match ParticleField::new(seed, config) {
        Ok(field) => field,
        Err(err) => {
            log::error!("invalid config: {}", err);
            std::process::exit(1);
        }
    };
    log::info!(
        "plexus demo: {} particles, seed {}, {}x{} viewport",
        field.particles.len(),
        seed,
        VIEWPORT.width,
        VIEWPORT.height
    );

    for _ in 0..DEMO_TICKS {
        tick(&mut field);
        if field.time_ticks % 100 == 0 {
            let frame = renderables(&mut field, VIEWPORT);
            log::info!(
                "tick {:4}: {} circles, {} connections, fade {:.2}",
                field.time_ticks,
                frame.circles.len(),
                frame.lines.len(),
                field.fade_in_opacity()
            );
        }
    }

    let frame = renderables(&mut field, VIEWPORT);
    let vertices = tessellate(&frame);
    println!(
        "final frame: {} circles, {} connections, {} vertices",
        frame.circles.len(),
        frame.lines.len(),
        vertices.len()
    );
}

fn load_config(path: &str) -> Result<FieldConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(FieldConfig::from_json(&json)?)
}
