// scene/ - Scene state
//
// One owned record: scalar config, storm countdowns, pointer state, the RNG,
// and the entity collections. Input operations live in `input.rs`, the
// per-frame update in `sim/`.

mod config;
mod storm;

pub use config::*;
pub use storm::*;

use crate::sim::{Birds, Clouds, Leaves, Raindrops, Stars, TreeMarkers};

const INITIAL_CLOUDS: usize = 8;
const INITIAL_BIRDS: usize = 5;

pub const RAINDROPS_PER_SHOWER: usize = 200;
pub const LEAVES_PER_STORM: usize = 50;

const FALLBACK_SEED: u32 = 0xDEADBEEF;

/// Pointer held state and the cloud being dragged, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub dragged_cloud: Option<usize>,
}

pub struct Scene {
    pub(crate) w: u32,
    pub(crate) h: u32,

    pub(crate) config: SceneConfig,
    pub(crate) click_mode: ClickMode,
    pub(crate) storm: StormEffect,
    pub(crate) pointer: Pointer,

    // Entities
    pub(crate) birds: Birds,
    pub(crate) clouds: Clouds,
    pub(crate) raindrops: Raindrops,
    pub(crate) leaves: Leaves,
    pub(crate) stars: Stars,
    pub(crate) trees: TreeMarkers,

    // RNG state
    pub(crate) rng: u32,
}

impl Scene {
    pub fn new(w: u32, h: u32, seed: u32) -> Self {
        Self::with_config(w, h, seed, SceneConfig::default())
    }

    /// Build a scene from a (possibly out-of-range) config. Weather
    /// collections are populated as if the weather had just been picked.
    pub fn with_config(w: u32, h: u32, seed: u32, config: SceneConfig) -> Self {
        let config = config.sanitized();
        let weather = config.weather;

        let mut scene = Self {
            w,
            h,
            config,
            click_mode: ClickMode::default(),
            storm: StormEffect::default(),
            pointer: Pointer::default(),
            birds: Birds::new(),
            clouds: Clouds::new(),
            raindrops: Raindrops::new(),
            leaves: Leaves::new(),
            stars: Stars::new(),
            trees: TreeMarkers::new(),
            rng: if seed == 0 { FALLBACK_SEED } else { seed },
        };

        scene.populate();
        scene.fill_weather(weather);
        scene
    }

    fn populate(&mut self) {
        let (w, h) = (self.w as f32, self.h as f32);
        let rng = &mut self.rng;

        for _ in 0..INITIAL_CLOUDS {
            let x = crate::sim::rand(rng) * w;
            let y = crate::sim::range(rng, 50.0, 200.0);
            self.clouds.spawn(x, y, rng);
        }

        for _ in 0..INITIAL_BIRDS {
            let x = crate::sim::rand(rng) * w;
            let y = crate::sim::rand(rng) * h * 0.6;
            self.birds.spawn(x, y, rng);
        }
    }

    /// Replace raindrops and leaves with the set for `weather`.
    pub(crate) fn fill_weather(&mut self, weather: Weather) {
        let (w, h) = (self.w as f32, self.h as f32);

        self.raindrops.clear();
        self.leaves.clear();

        if weather.is_raining() {
            self.raindrops.scatter(RAINDROPS_PER_SHOWER, w, h, &mut self.rng);
        }
        if weather == Weather::Stormy {
            self.leaves.scatter(LEAVES_PER_STORM, w, h, &mut self.rng);
        }
    }

    /// Track a new surface size. Entities keep their positions.
    pub fn resize(&mut self, w: u32, h: u32) {
        log::info!("scene resized to {w}x{h}");
        self.w = w;
        self.h = h;
    }

    // Accessors
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
    pub fn config(&self) -> &SceneConfig { &self.config }
    pub fn weather(&self) -> Weather { self.config.weather }
    pub fn time_of_day(&self) -> f32 { self.config.time_of_day }
    pub fn zoom(&self) -> f32 { self.config.zoom }
    pub fn click_mode(&self) -> ClickMode { self.click_mode }
    pub fn storm(&self) -> &StormEffect { &self.storm }
    pub fn pointer(&self) -> &Pointer { &self.pointer }
    pub fn birds(&self) -> &Birds { &self.birds }
    pub fn clouds(&self) -> &Clouds { &self.clouds }
    pub fn raindrops(&self) -> &Raindrops { &self.raindrops }
    pub fn leaves(&self) -> &Leaves { &self.leaves }
    pub fn stars(&self) -> &Stars { &self.stars }
    pub fn trees(&self) -> &TreeMarkers { &self.trees }

    pub fn is_visible(&self, layer: Layer) -> bool {
        self.config.layers.is_visible(layer)
    }
}
