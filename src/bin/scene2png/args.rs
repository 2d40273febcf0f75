// args.rs - Command-line options

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use rainbow_engine::Weather;

pub const USAGE: &str = "Usage: scene2png [--width N] [--height N] [--frames N] [--seed N] \
[--config FILE] [--time H] [--weather NAME] [--out FILE]";

#[derive(Debug, PartialEq)]
pub struct Args {
    pub width: u32,
    pub height: u32,
    pub frames: u32,
    pub seed: u32,
    pub config: Option<PathBuf>,
    pub time: Option<f32>,
    pub weather: Option<Weather>,
    pub out: PathBuf,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            frames: 60,
            seed: 1,
            config: None,
            time: None,
            weather: None,
            out: PathBuf::from("scene.png"),
        }
    }
}

impl Args {
    /// Parse everything after the program name.
    pub fn parse(argv: &[String]) -> Result<Self> {
        let mut args = Args::default();

        let mut i = 0;
        while i < argv.len() {
            let flag = argv[i].as_str();
            let value = || {
                argv.get(i + 1)
                    .map(String::as_str)
                    .with_context(|| format!("{flag} needs a value"))
            };

            match flag {
                "--width" => args.width = value()?.parse().context("--width")?,
                "--height" => args.height = value()?.parse().context("--height")?,
                "--frames" => args.frames = value()?.parse().context("--frames")?,
                "--seed" => args.seed = value()?.parse().context("--seed")?,
                "--config" => args.config = Some(PathBuf::from(value()?)),
                "--time" => args.time = Some(value()?.parse().context("--time")?),
                "--weather" => args.weather = Some(value()?.parse()?),
                "--out" => args.out = PathBuf::from(value()?),
                other => bail!("unknown option {other}\n{USAGE}"),
            }
            i += 2;
        }

        if args.width == 0 || args.height == 0 {
            bail!("image size must be non-zero");
        }
        Ok(args)
    }
}
