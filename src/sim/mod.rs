// sim/ - Entity updater
//
// Entity storage uses Structure-of-Arrays, one module per kind. `step`
// advances every active collection and the storm effect by one frame.

mod bird;
mod cloud;
mod leaf;
mod marker;
mod raindrop;

pub use bird::{Birds, FLOOR_FRAC, MIN_ALTITUDE};
pub use cloud::{Clouds, GRAB_HALF_H, GRAB_HALF_W};
pub use leaf::Leaves;
pub use marker::{Stars, TreeMarkers};
pub use raindrop::Raindrops;

use crate::scene::{Scene, Weather};
use crate::world::is_daytime;

// Capacity limits
pub const MAX_BIRDS: usize = 512;
pub const MAX_CLOUDS: usize = 256;
pub const MAX_RAINDROPS: usize = 3000;
pub const MAX_LEAVES: usize = 256;
pub const MAX_STARS: usize = 1024;
pub const MAX_TREES: usize = 512;

/// Advance the scene by one frame. Collections that are not on screen this
/// frame hold still.
pub fn step(scene: &mut Scene) {
    let w = scene.width() as f32;
    let h = scene.height() as f32;

    let Scene {
        config,
        birds,
        clouds,
        raindrops,
        leaves,
        storm,
        rng,
        ..
    } = scene;

    let layers = &config.layers;
    let weather = config.weather;
    let wind = config.wind_speed;

    if layers.clouds && matches!(weather, Weather::Rainy | Weather::Cloudy) {
        clouds.update(w, wind);
    }

    if layers.rain && weather.is_raining() {
        raindrops.update(w, h, rng);
    }

    if weather == Weather::Stormy {
        leaves.update(w, h, wind);
    }

    if layers.birds && is_daytime(config.time_of_day) {
        birds.update(w, h);
    }

    if weather == Weather::Stormy {
        let roll = rand(rng);
        storm.step(roll);
    }
}

// Random number generator (xorshift32), uniform in [0, 1)
#[inline(always)]
pub fn rand(rng: &mut u32) -> f32 {
    *rng ^= *rng << 13;
    *rng ^= *rng >> 17;
    *rng ^= *rng << 5;
    (*rng >> 8) as f32 * (1.0 / 16777216.0)
}

/// Uniform in [lo, hi).
#[inline(always)]
pub fn range(rng: &mut u32, lo: f32, hi: f32) -> f32 {
    lo + rand(rng) * (hi - lo)
}
