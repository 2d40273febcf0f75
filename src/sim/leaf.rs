// leaf.rs - Storm-blown leaves
//
// Leaves tumble with the wind and wrap around every edge, so a storm never
// runs out of them.

use std::f32::consts::TAU;

use super::{MAX_LEAVES, rand, range};

const WIND_DRIFT: f32 = 0.5;
const WIND_SPIN: f32 = 0.01;

#[derive(Default)]
pub struct Leaves {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub vx: Vec<f32>,
    pub vy: Vec<f32>,
    pub rotation: Vec<f32>,
    pub rotation_speed: Vec<f32>,
    pub size: Vec<f32>,
}

impl Leaves {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.vx.clear();
        self.vy.clear();
        self.rotation.clear();
        self.rotation_speed.clear();
        self.size.clear();
    }

    /// Scatter `count` leaves over the lower half of the screen.
    pub fn scatter(&mut self, count: usize, screen_w: f32, screen_h: f32, rng: &mut u32) {
        for _ in 0..count {
            if self.len() >= MAX_LEAVES {
                return;
            }
            self.x.push(rand(rng) * screen_w);
            self.y.push(screen_h * 0.5 + rand(rng) * screen_h * 0.5);
            self.vx.push((rand(rng) - 0.5) * 4.0);
            self.vy.push((rand(rng) - 0.5) * 2.0);
            self.rotation.push(rand(rng) * TAU);
            self.rotation_speed.push((rand(rng) - 0.5) * 0.1);
            self.size.push(range(rng, 5.0, 15.0));
        }
    }

    pub fn update(&mut self, screen_w: f32, screen_h: f32, wind: f32) {
        for i in 0..self.len() {
            self.x[i] += self.vx[i] + wind * WIND_DRIFT;
            self.y[i] += self.vy[i];
            self.rotation[i] += self.rotation_speed[i] + wind * WIND_SPIN;

            let s = self.size[i];
            self.x[i] = wrap(self.x[i], s, screen_w);
            self.y[i] = wrap(self.y[i], s, screen_h);
        }
    }
}

/// Wrap a coordinate that left [-margin, extent + margin] to the far side.
#[inline]
fn wrap(v: f32, margin: f32, extent: f32) -> f32 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}
