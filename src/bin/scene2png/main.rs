// scene2png - Render the scene offline to a PNG
//
// Pipeline:
//   1. Build a scene from defaults or a JSON config, then apply overrides
//   2. Run N frames at a simulated 60 Hz
//   3. Write the final canvas as RGBA PNG
//
// Usage: cargo run --bin scene2png -- [--frames 120] [--weather rainy] [--out scene.png]

mod args;

use std::{env, fs};

use anyhow::{Context, Result};
use rainbow_engine::{DebugInfo, SceneConfig, SceneEngine};

use args::{Args, USAGE};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let argv: Vec<String> = env::args().skip(1).collect();
    if argv.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return Ok(());
    }
    let args = Args::parse(&argv)?;

    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SceneConfig::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SceneConfig::default(),
    };
    if let Some(hour) = args.time {
        config.time_of_day = hour;
    }
    if let Some(weather) = args.weather {
        config.weather = weather;
    }

    let mut engine = SceneEngine::with_seed(args.width, args.height, args.seed, config);
    log::info!("rendering {} frames at {}x{}", args.frames, args.width, args.height);

    for frame in 0..args.frames.max(1) {
        engine.tick(frame as f64 * FRAME_MS);
    }
    log::info!("{}", DebugInfo::from_scene(engine.scene()));

    let img = image::RgbaImage::from_raw(args.width, args.height, engine.canvas().pixels().to_vec())
        .context("canvas size does not match image size")?;
    img.save(&args.out).with_context(|| format!("writing {}", args.out.display()))?;

    log::info!("wrote {}", args.out.display());
    Ok(())
}
