// sky.rs - Day/night cycle and celestial arcs
//
// Daytime is the closed interval [6, 18]. The sun crosses the sky once over
// the day; the moon crosses once before dawn and once after dusk.

use std::f32::consts::PI;

pub const DAWN: f32 = 6.0;
pub const DUSK: f32 = 18.0;

/// Horizon line for sunrise/sunset, as a fraction of height.
const HORIZON_FRAC: f32 = 0.8;
/// Peak rise above the horizon, as a fraction of height.
const ARC_RISE_FRAC: f32 = 0.5;
/// Horizontal sweep, as a fraction of width.
const ARC_SPAN_FRAC: f32 = 0.8;

#[inline]
pub fn is_daytime(hour: f32) -> bool {
    (DAWN..=DUSK).contains(&hour)
}

/// 0 at dawn, 1 at dusk.
#[inline]
pub fn day_progress(hour: f32) -> f32 {
    ((hour - DAWN) / (DUSK - DAWN)).clamp(0.0, 1.0)
}

/// 0 → 1 over [0, 6) before dawn and again over (18, 24) after dusk.
#[inline]
pub fn night_progress(hour: f32) -> f32 {
    let p = if hour < DAWN { hour / DAWN } else { (hour - DUSK) / (24.0 - DUSK) };
    p.clamp(0.0, 1.0)
}

/// Horizon-to-horizon arc: x linear in progress, y a sine arc peaking at
/// mid-progress.
pub fn celestial_arc(progress: f32, w: f32, h: f32) -> (f32, f32) {
    let x = w * 0.5 + (progress - 0.5) * w * ARC_SPAN_FRAC;
    let y = h * HORIZON_FRAC - (progress * PI).sin() * h * ARC_RISE_FRAC;
    (x, y)
}

pub fn sun_position(hour: f32, w: f32, h: f32) -> Option<(f32, f32)> {
    is_daytime(hour).then(|| celestial_arc(day_progress(hour), w, h))
}

pub fn moon_position(hour: f32, w: f32, h: f32) -> Option<(f32, f32)> {
    (!is_daytime(hour)).then(|| celestial_arc(night_progress(hour), w, h))
}
