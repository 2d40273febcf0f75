// input.rs - Input controller
//
// Named operations the host wires its sliders, buttons, pointer and wheel
// events to. Nothing here fails: out-of-range values are clamped, non-finite
// ones and impossible actions are ignored.

use crate::scene::{ClickMode, Layer, MAX_ZOOM, MIN_ZOOM, Scene, Weather, wrap_hour};
use crate::world::{ground_y, is_daytime};

/// Zoom change per wheel delta unit.
const SCROLL_ZOOM_RATE: f32 = 0.001;

impl Scene {
    pub fn set_time_of_day(&mut self, hour: f32) {
        if hour.is_finite() {
            self.config.time_of_day = wrap_hour(hour);
        }
    }

    /// Switch weather. Raindrops and leaves are always rebuilt from scratch.
    pub fn set_weather(&mut self, weather: Weather) {
        let previous = self.config.weather;
        self.config.weather = weather;
        self.fill_weather(weather);

        if previous == Weather::Stormy && weather != Weather::Stormy {
            self.storm.reset();
        }

        log::info!(
            "weather changed to {weather} ({} raindrops, {} leaves)",
            self.raindrops.len(),
            self.leaves.len()
        );
    }

    pub fn set_rainbow_intensity(&mut self, v: f32) {
        if v.is_finite() {
            self.config.rainbow_intensity = v.clamp(0.0, 1.0);
        }
    }

    pub fn set_rainbow_position(&mut self, v: f32) {
        if v.is_finite() {
            self.config.rainbow_position = v.clamp(0.0, 1.0);
        }
    }

    pub fn set_wind(&mut self, v: f32) {
        if v.is_finite() {
            self.config.wind_speed = v;
        }
    }

    pub fn set_hilliness(&mut self, v: f32) {
        if v.is_finite() {
            self.config.hilliness = v.clamp(0.0, 1.0);
        }
    }

    /// Returns the layer's new visibility.
    pub fn toggle_layer(&mut self, layer: Layer) -> bool {
        let visible = self.config.layers.toggle(layer);
        log::debug!("layer {} {}", layer.name(), if visible { "shown" } else { "hidden" });
        visible
    }

    pub fn cycle_click_mode(&mut self) -> ClickMode {
        self.click_mode = self.click_mode.next();
        self.click_mode
    }

    pub fn set_click_mode(&mut self, mode: ClickMode) {
        self.click_mode = mode;
    }

    /// Grab a cloud under the pointer, or act on the current click mode.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.pointer.x = x;
        self.pointer.y = y;
        self.pointer.down = true;

        if let Some(i) = self.clouds.hit_test(x, y) {
            log::debug!("dragging cloud {i}");
            self.pointer.dragged_cloud = Some(i);
            return;
        }

        let placed = match self.click_mode {
            ClickMode::Bird => {
                // Birds only come out by day
                is_daytime(self.config.time_of_day) && self.birds.spawn(x, y, &mut self.rng)
            }
            ClickMode::Tree => {
                let gy = ground_y(self.h as f32);
                self.trees.push(x, gy)
            }
            ClickMode::Star => self.stars.spawn(x, y, &mut self.rng),
            ClickMode::Rain => self.raindrops.spawn(x, y, &mut self.rng),
            ClickMode::Cloud => self.clouds.spawn(x, y, &mut self.rng),
        };

        if placed {
            log::debug!("placed {} at ({x:.0}, {y:.0})", self.click_mode);
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.x = x;
        self.pointer.y = y;

        if self.pointer.down {
            if let Some(i) = self.pointer.dragged_cloud {
                self.clouds.move_to(i, x, y);
            }
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.pointer.down = false;
        self.pointer.dragged_cloud = None;
    }

    pub fn on_scroll(&mut self, delta_y: f32) {
        if delta_y.is_finite() {
            let zoom = self.config.zoom + delta_y * SCROLL_ZOOM_RATE;
            self.config.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }
}
