// raindrop.rs - Falling rain streaks
//
// Drops fall straight down at their own speed and are recycled to just
// above the top edge at a fresh column once they leave the bottom.

use super::{MAX_RAINDROPS, rand, range};

#[derive(Default)]
pub struct Raindrops {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub speed: Vec<f32>,
    pub length: Vec<f32>,
}

impl Raindrops {
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
        self.speed.clear();
        self.length.clear();
    }

    /// Add one drop at a fixed point with random speed and length.
    pub fn spawn(&mut self, x: f32, y: f32, rng: &mut u32) -> bool {
        if self.len() >= MAX_RAINDROPS {
            return false;
        }
        self.x.push(x);
        self.y.push(y);
        self.speed.push(range(rng, 3.0, 8.0));
        self.length.push(range(rng, 10.0, 30.0));
        true
    }

    /// Scatter `count` drops across the screen width, staggered over one
    /// screen height above the top edge.
    pub fn scatter(&mut self, count: usize, screen_w: f32, screen_h: f32, rng: &mut u32) {
        for _ in 0..count {
            let x = rand(rng) * screen_w;
            let y = rand(rng) * screen_h - screen_h;
            if !self.spawn(x, y, rng) {
                return;
            }
        }
    }

    pub fn update(&mut self, screen_w: f32, screen_h: f32, rng: &mut u32) {
        for i in 0..self.len() {
            self.y[i] += self.speed[i];
            if self.y[i] > screen_h {
                self.y[i] = -self.length[i];
                self.x[i] = rand(rng) * screen_w;
            }
        }
    }
}
