// storm.rs - Lightning and thunder countdowns
//
// Both effects are frame-counted. A strike resets them; each frame they
// decay until their countdowns run out.

use serde::Serialize;

pub const STRIKE_CHANCE: f32 = 0.02;

const LIGHTNING_INTENSITY: f32 = 0.8;
const LIGHTNING_FRAMES: u32 = 5;
const LIGHTNING_DECAY: f32 = 0.1;

const THUNDER_VOLUME: f32 = 0.8;
const THUNDER_FRAMES: u32 = 30;
const THUNDER_DECAY: f32 = 0.02;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Lightning {
    pub active: bool,
    pub intensity: f32,
    pub remaining_frames: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Thunder {
    pub remaining_frames: u32,
    pub volume: f32,
}

impl Thunder {
    pub fn is_rumbling(&self) -> bool {
        self.remaining_frames > 0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct StormEffect {
    pub lightning: Lightning,
    pub thunder: Thunder,
}

impl StormEffect {
    /// Start a lightning flash and the thunder that follows it.
    pub fn strike(&mut self) {
        self.lightning = Lightning {
            active: true,
            intensity: LIGHTNING_INTENSITY,
            remaining_frames: LIGHTNING_FRAMES,
        };
        self.thunder = Thunder {
            remaining_frames: THUNDER_FRAMES,
            volume: THUNDER_VOLUME,
        };
    }

    /// Advance both countdowns by one frame.
    pub fn decay(&mut self) {
        let l = &mut self.lightning;
        if l.active {
            l.remaining_frames = l.remaining_frames.saturating_sub(1);
            l.intensity = (l.intensity - LIGHTNING_DECAY).max(0.0);
            if l.remaining_frames == 0 {
                l.active = false;
                l.intensity = 0.0;
            }
        }

        let t = &mut self.thunder;
        if t.remaining_frames > 0 {
            t.remaining_frames -= 1;
            t.volume = (t.volume - THUNDER_DECAY).max(0.0);
        }
    }

    /// One storm frame: maybe strike (`roll` is uniform in [0, 1)), then decay.
    pub fn step(&mut self, roll: f32) {
        if roll < STRIKE_CHANCE {
            self.strike();
        }
        self.decay();
    }

    pub fn reset(&mut self) {
        *self = StormEffect::default();
    }
}
