// cloud.rs - Drifting clouds
//
// Clouds drift with their own speed plus a share of the wind. A cloud fully
// off one edge re-enters from the other.

use super::{MAX_CLOUDS, range};

const WIND_FACTOR: f32 = 0.1;

/// Half-extents of the grab box around a cloud's anchor.
pub const GRAB_HALF_W: f32 = 100.0;
pub const GRAB_HALF_H: f32 = 50.0;

#[derive(Default)]
pub struct Clouds {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub size: Vec<f32>,
    pub speed: Vec<f32>,
    pub opacity: Vec<f32>,
}

impl Clouds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn spawn(&mut self, x: f32, y: f32, rng: &mut u32) -> bool {
        if self.len() >= MAX_CLOUDS {
            return false;
        }
        self.x.push(x);
        self.y.push(y);
        self.size.push(range(rng, 50.0, 150.0));
        self.speed.push(range(rng, 0.5, 1.5));
        self.opacity.push(range(rng, 0.3, 0.7));
        true
    }

    /// First cloud (in insertion order) whose grab box holds the point.
    pub fn hit_test(&self, px: f32, py: f32) -> Option<usize> {
        (0..self.len()).find(|&i| {
            (self.x[i] - px).abs() < GRAB_HALF_W && (self.y[i] - py).abs() < GRAB_HALF_H
        })
    }

    pub fn move_to(&mut self, i: usize, x: f32, y: f32) {
        if i < self.len() {
            self.x[i] = x;
            self.y[i] = y;
        }
    }

    pub fn update(&mut self, screen_w: f32, wind: f32) {
        let drift = wind * WIND_FACTOR;
        for i in 0..self.len() {
            self.x[i] += self.speed[i] + drift;
            if self.x[i] > screen_w + self.size[i] {
                self.x[i] = -self.size[i];
            } else if self.x[i] < -self.size[i] {
                self.x[i] = screen_w + self.size[i];
            }
        }
    }
}
