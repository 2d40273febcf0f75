use wasm_bindgen::prelude::*;

pub mod debug;
pub mod error;
pub mod input;
pub mod render;
pub mod scene;
pub mod sim;
pub mod world;

pub use debug::DebugInfo;
pub use error::SceneError;
pub use render::{Canvas, Surface, draw_frame};
pub use scene::{ClickMode, Layer, Scene, SceneConfig, Weather};

// ============================================================================
// SCENE ENGINE - Animated weather scene rendered into an RGBA buffer
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_SEED: u32 = 0x9E3779B9;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rainbow-engine starting");
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u32 {
    (js_sys::Math::random() * u32::MAX as f64) as u32
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_seed() -> u32 {
    NATIVE_SEED
}

#[wasm_bindgen]
pub struct SceneEngine {
    scene: Scene,
    canvas: Canvas,
}

#[wasm_bindgen]
impl SceneEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32) -> Self {
        Self::from_scene(Scene::new(w, h, entropy_seed()))
    }

    /// Start from a JSON `SceneConfig`. Missing fields take their defaults.
    pub fn with_config(w: u32, h: u32, json: &str) -> Result<SceneEngine, JsValue> {
        let config = SceneConfig::from_json(json)?;
        Ok(Self::from_scene(Scene::with_config(w, h, entropy_seed(), config)))
    }

    /// Advance one frame, then redraw into the output buffer.
    pub fn tick(&mut self, now_ms: f64) {
        sim::step(&mut self.scene);
        draw_frame(&self.scene, &mut self.canvas, now_ms / 1000.0);
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.scene.resize(w, h);
        self.canvas.resize(w, h);
    }

    pub fn set_time_of_day(&mut self, hour: f32) {
        self.scene.set_time_of_day(hour);
    }

    pub fn set_weather(&mut self, name: &str) {
        match name.parse::<Weather>() {
            Ok(weather) => self.scene.set_weather(weather),
            Err(err) => log::warn!("{err}; keeping {}", self.scene.weather()),
        }
    }

    pub fn set_rainbow_intensity(&mut self, v: f32) {
        self.scene.set_rainbow_intensity(v);
    }

    pub fn set_rainbow_position(&mut self, v: f32) {
        self.scene.set_rainbow_position(v);
    }

    pub fn set_wind(&mut self, v: f32) {
        self.scene.set_wind(v);
    }

    pub fn set_hilliness(&mut self, v: f32) {
        self.scene.set_hilliness(v);
    }

    /// Returns the layer's new visibility, or `None` for an unknown name.
    pub fn toggle_layer(&mut self, name: &str) -> Option<bool> {
        match name.parse::<Layer>() {
            Ok(layer) => Some(self.scene.toggle_layer(layer)),
            Err(err) => {
                log::warn!("{err}");
                None
            }
        }
    }

    pub fn cycle_click_mode(&mut self) -> String {
        self.scene.cycle_click_mode().name().to_string()
    }

    pub fn set_click_mode(&mut self, name: &str) {
        match name.parse::<ClickMode>() {
            Ok(mode) => self.scene.set_click_mode(mode),
            Err(err) => log::warn!("{err}; keeping {}", self.scene.click_mode()),
        }
    }

    pub fn click_mode(&self) -> String {
        self.scene.click_mode().name().to_string()
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.scene.on_pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.scene.on_pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.scene.on_pointer_up();
    }

    pub fn scroll(&mut self, delta_y: f32) {
        self.scene.on_scroll(delta_y);
    }

    pub fn debug_json(&self) -> String {
        DebugInfo::from_scene(&self.scene).to_json()
    }

    pub fn output_ptr(&self) -> *const u8 { self.canvas.ptr() }
    pub fn output_len(&self) -> usize { self.canvas.len() }
    pub fn width(&self) -> u32 { self.scene.width() }
    pub fn height(&self) -> u32 { self.scene.height() }
}

impl SceneEngine {
    fn from_scene(scene: Scene) -> Self {
        let canvas = Canvas::new(scene.width(), scene.height());
        Self { scene, canvas }
    }

    /// Native constructor with a caller-chosen seed.
    pub fn with_seed(w: u32, h: u32, seed: u32, config: SceneConfig) -> Self {
        Self::from_scene(Scene::with_config(w, h, seed, config))
    }

    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn canvas(&self) -> &Canvas { &self.canvas }
}
