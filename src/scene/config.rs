// config.rs - Scalar scene parameters
//
// Everything the controls panel can change lives here. The struct is also
// the JSON shape accepted by `SceneEngine::with_config` and `scene2png`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 2.0;
pub const HOURS_PER_DAY: f32 = 24.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    Sunny,
    Rainy,
    Cloudy,
    Stormy,
}

impl Weather {
    pub const ALL: [Weather; 4] = [Weather::Sunny, Weather::Rainy, Weather::Cloudy, Weather::Stormy];

    pub fn name(self) -> &'static str {
        match self {
            Weather::Sunny => "sunny",
            Weather::Rainy => "rainy",
            Weather::Cloudy => "cloudy",
            Weather::Stormy => "stormy",
        }
    }

    /// Rain falls in both rainy and stormy weather.
    pub fn is_raining(self) -> bool {
        matches!(self, Weather::Rainy | Weather::Stormy)
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weather {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weather::ALL
            .into_iter()
            .find(|w| w.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SceneError::UnknownWeather(s.to_string()))
    }
}

/// Drawable layers, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Sky,
    Stars,
    Sun,
    Moon,
    Clouds,
    Rain,
    Leaves,
    Hills,
    Rainbow,
    Trees,
    Birds,
}

impl Layer {
    /// Back to front. The rainbow sits in front of the hills and behind the trees.
    pub const DRAW_ORDER: [Layer; 11] = [
        Layer::Sky,
        Layer::Stars,
        Layer::Sun,
        Layer::Moon,
        Layer::Clouds,
        Layer::Rain,
        Layer::Leaves,
        Layer::Hills,
        Layer::Rainbow,
        Layer::Trees,
        Layer::Birds,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Sky => "sky",
            Layer::Stars => "stars",
            Layer::Sun => "sun",
            Layer::Moon => "moon",
            Layer::Clouds => "clouds",
            Layer::Rain => "rain",
            Layer::Leaves => "leaves",
            Layer::Hills => "hills",
            Layer::Rainbow => "rainbow",
            Layer::Trees => "trees",
            Layer::Birds => "birds",
        }
    }
}

impl FromStr for Layer {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layer::DRAW_ORDER
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SceneError::UnknownLayer(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayerVisibility {
    pub sky: bool,
    pub stars: bool,
    pub sun: bool,
    pub moon: bool,
    pub clouds: bool,
    pub rain: bool,
    pub leaves: bool,
    pub hills: bool,
    pub rainbow: bool,
    pub trees: bool,
    pub birds: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            sky: true,
            stars: true,
            sun: true,
            moon: true,
            clouds: true,
            rain: true,
            leaves: true,
            hills: true,
            rainbow: true,
            trees: true,
            birds: true,
        }
    }
}

impl LayerVisibility {
    fn slot(&mut self, layer: Layer) -> &mut bool {
        match layer {
            Layer::Sky => &mut self.sky,
            Layer::Stars => &mut self.stars,
            Layer::Sun => &mut self.sun,
            Layer::Moon => &mut self.moon,
            Layer::Clouds => &mut self.clouds,
            Layer::Rain => &mut self.rain,
            Layer::Leaves => &mut self.leaves,
            Layer::Hills => &mut self.hills,
            Layer::Rainbow => &mut self.rainbow,
            Layer::Trees => &mut self.trees,
            Layer::Birds => &mut self.birds,
        }
    }

    pub fn is_visible(&self, layer: Layer) -> bool {
        match layer {
            Layer::Sky => self.sky,
            Layer::Stars => self.stars,
            Layer::Sun => self.sun,
            Layer::Moon => self.moon,
            Layer::Clouds => self.clouds,
            Layer::Rain => self.rain,
            Layer::Leaves => self.leaves,
            Layer::Hills => self.hills,
            Layer::Rainbow => self.rainbow,
            Layer::Trees => self.trees,
            Layer::Birds => self.birds,
        }
    }

    /// Flip a layer, returning its new visibility.
    pub fn toggle(&mut self, layer: Layer) -> bool {
        let slot = self.slot(layer);
        *slot = !*slot;
        *slot
    }
}

/// What a click on empty sky does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickMode {
    #[default]
    Bird,
    Tree,
    Star,
    Rain,
    Cloud,
}

impl ClickMode {
    pub const CYCLE: [ClickMode; 5] = [
        ClickMode::Bird,
        ClickMode::Tree,
        ClickMode::Star,
        ClickMode::Rain,
        ClickMode::Cloud,
    ];

    pub fn next(self) -> ClickMode {
        let i = Self::CYCLE.iter().position(|m| *m == self).unwrap_or(0);
        Self::CYCLE[(i + 1) % Self::CYCLE.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            ClickMode::Bird => "bird",
            ClickMode::Tree => "tree",
            ClickMode::Star => "star",
            ClickMode::Rain => "rain",
            ClickMode::Cloud => "cloud",
        }
    }
}

impl fmt::Display for ClickMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClickMode {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CYCLE
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SceneError::UnknownClickMode(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Hour of day, [0, 24).
    pub time_of_day: f32,
    pub weather: Weather,
    pub rainbow_intensity: f32,
    /// Vertical centre of the rainbow as a fraction of surface height.
    pub rainbow_position: f32,
    pub hilliness: f32,
    pub wind_speed: f32,
    pub zoom: f32,
    pub layers: LayerVisibility,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            time_of_day: 12.0,
            weather: Weather::Sunny,
            rainbow_intensity: 0.8,
            rainbow_position: 0.9,
            hilliness: 0.5,
            wind_speed: 3.0,
            zoom: 1.0,
            layers: LayerVisibility::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Bring every field back inside its range. Non-finite values fall back
    /// to the defaults.
    pub fn sanitized(self) -> Self {
        let d = SceneConfig::default();
        let finite_or = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };

        Self {
            time_of_day: wrap_hour(finite_or(self.time_of_day, d.time_of_day)),
            rainbow_intensity: finite_or(self.rainbow_intensity, d.rainbow_intensity).clamp(0.0, 1.0),
            rainbow_position: finite_or(self.rainbow_position, d.rainbow_position).clamp(0.0, 1.0),
            hilliness: finite_or(self.hilliness, d.hilliness).clamp(0.0, 1.0),
            wind_speed: finite_or(self.wind_speed, d.wind_speed),
            zoom: finite_or(self.zoom, d.zoom).clamp(MIN_ZOOM, MAX_ZOOM),
            ..self
        }
    }
}

/// Fold any finite hour into [0, 24).
#[inline]
pub fn wrap_hour(h: f32) -> f32 {
    let w = h.rem_euclid(HOURS_PER_DAY);
    // rem_euclid can round up to exactly 24.0 for tiny negative inputs
    if w >= HOURS_PER_DAY { 0.0 } else { w }
}
