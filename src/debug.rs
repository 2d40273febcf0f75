// debug.rs - Per-frame readout of scene state for the host's debug panel

use std::fmt;

use serde::Serialize;

use crate::scene::{ClickMode, Scene, Weather};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DebugInfo {
    pub weather: Weather,
    pub rainbow_intensity: f32,
    pub rainbow_position: f32,
    pub hilliness: f32,
    pub click_mode: ClickMode,
    pub time_of_day: f32,
    pub time_label: String,
    pub raindrops: usize,
    pub leaves: usize,
    pub birds: usize,
    pub clouds: usize,
    pub stars: usize,
    pub trees: usize,
    pub lightning: bool,
    pub thunder: bool,
    pub zoom: f32,
}

impl DebugInfo {
    pub fn from_scene(scene: &Scene) -> Self {
        let config = scene.config();
        let storm = scene.storm();
        Self {
            weather: config.weather,
            rainbow_intensity: config.rainbow_intensity,
            rainbow_position: config.rainbow_position,
            hilliness: config.hilliness,
            click_mode: scene.click_mode(),
            time_of_day: config.time_of_day,
            time_label: time_label(config.time_of_day),
            raindrops: scene.raindrops().len(),
            leaves: scene.leaves().len(),
            birds: scene.birds().len(),
            clouds: scene.clouds().len(),
            stars: scene.stars().len(),
            trees: scene.trees().len(),
            lightning: storm.lightning.active,
            thunder: storm.thunder.is_rumbling(),
            zoom: config.zoom,
        }
    }

    pub fn to_json(&self) -> String {
        // Only plain numbers, bools and strings; serialization can't fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Clock face for an hour in [0, 24): "H:MM", minutes truncated.
pub fn time_label(hour: f32) -> String {
    let h = hour.floor();
    let minutes = ((hour - h) * 60.0).floor() as u32;
    format!("{}:{:02}", h as u32, minutes.min(59))
}

impl fmt::Display for DebugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} | rainbow {:.2}@{:.2} | hills {:.1} | mode {} | rain {} leaves {} birds {} clouds {} | lightning {} thunder {} | zoom {:.2}",
            self.weather,
            self.time_label,
            self.rainbow_intensity,
            self.rainbow_position,
            self.hilliness,
            self.click_mode,
            self.raindrops,
            self.leaves,
            self.birds,
            self.clouds,
            if self.lightning { "on" } else { "off" },
            if self.thunder { "on" } else { "off" },
            self.zoom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_pad_minutes() {
        assert_eq!(time_label(0.0), "0:00");
        assert_eq!(time_label(6.25), "6:15");
        assert_eq!(time_label(12.5), "12:30");
        assert_eq!(time_label(23.99), "23:59");
    }

    #[test]
    fn snapshot_tracks_weather_populations() {
        let mut scene = Scene::new(800, 600, 9);
        scene.set_weather(Weather::Stormy);
        let info = DebugInfo::from_scene(&scene);
        assert_eq!(info.weather, Weather::Stormy);
        assert_eq!(info.raindrops, 200);
        assert_eq!(info.leaves, 50);
        assert_eq!(info.clouds, 8);
        assert!(!info.lightning);
    }

    #[test]
    fn json_uses_lowercase_names() {
        let scene = Scene::new(800, 600, 9);
        let json: serde_json::Value = serde_json::from_str(&DebugInfo::from_scene(&scene).to_json()).unwrap();
        assert_eq!(json["weather"], "sunny");
        assert_eq!(json["click_mode"], "bird");
        assert_eq!(json["time_label"], "12:00");
        assert_eq!(json["birds"], 5);
    }

    #[test]
    fn display_is_one_line() {
        let scene = Scene::new(800, 600, 9);
        let line = DebugInfo::from_scene(&scene).to_string();
        assert!(!line.contains('\n'));
        assert!(line.starts_with("sunny at 12:00"));
    }
}
