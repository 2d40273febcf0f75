// bird.rs - Flocking-free birds
//
// Straight-line flight with a flapping phase. Birds stay inside the upper
// sky band by turning back whenever they cross its edge.

use std::f32::consts::TAU;

use super::{MAX_BIRDS, rand, range};

/// Birds never fly above this line.
pub const MIN_ALTITUDE: f32 = 50.0;
/// Lowest flight line, as a fraction of surface height.
pub const FLOOR_FRAC: f32 = 0.7;

#[derive(Default)]
pub struct Birds {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub vx: Vec<f32>,
    pub vy: Vec<f32>,
    pub wing_phase: Vec<f32>,
    pub wing_speed: Vec<f32>,
}

impl Birds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Add a bird heading in a random direction. Returns false at capacity.
    pub fn spawn(&mut self, x: f32, y: f32, rng: &mut u32) -> bool {
        if self.len() >= MAX_BIRDS {
            return false;
        }
        self.x.push(x);
        self.y.push(y);
        self.vx.push((rand(rng) - 0.5) * 4.0);
        self.vy.push((rand(rng) - 0.5) * 2.0);
        self.wing_phase.push(rand(rng) * TAU);
        self.wing_speed.push(range(rng, 0.2, 0.5));
        true
    }

    pub fn update(&mut self, screen_w: f32, screen_h: f32) {
        let floor = screen_h * FLOOR_FRAC;

        for i in 0..self.len() {
            self.x[i] += self.vx[i];
            self.y[i] += self.vy[i];
            self.wing_phase[i] += self.wing_speed[i];

            // Once past a bound, velocity points back inside
            if self.x[i] < 0.0 {
                self.vx[i] = self.vx[i].abs();
            } else if self.x[i] > screen_w {
                self.vx[i] = -self.vx[i].abs();
            }

            if self.y[i] < MIN_ALTITUDE {
                self.vy[i] = self.vy[i].abs();
            } else if self.y[i] > floor {
                self.vy[i] = -self.vy[i].abs();
            }
        }
    }
}
