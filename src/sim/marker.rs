// marker.rs - Placed scenery that never moves
//
// Stars twinkle at draw time from their phase; tree markers are just anchors.

use std::f32::consts::TAU;

use super::{MAX_STARS, MAX_TREES, rand, range};

#[derive(Default)]
pub struct Stars {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub size: Vec<f32>,
    pub twinkle_phase: Vec<f32>,
}

impl Stars {
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
        if self.len() >= MAX_STARS {
            return false;
        }
        self.x.push(x);
        self.y.push(y);
        self.size.push(range(rng, 1.0, 3.0));
        self.twinkle_phase.push(rand(rng) * TAU);
        true
    }
}

#[derive(Default)]
pub struct TreeMarkers {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
}

impl TreeMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn push(&mut self, x: f32, y: f32) -> bool {
        if self.len() >= MAX_TREES {
            return false;
        }
        self.x.push(x);
        self.y.push(y);
        true
    }
}
