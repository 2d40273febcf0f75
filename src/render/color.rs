// color.rs - Colour types and interpolation
//
// Palette entries are `const` so a malformed colour can't exist at runtime.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a 0xRRGGBB literal.
    pub const fn hex(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xFF) as u8,
            g: ((v >> 8) & 0xFF) as u8,
            b: (v & 0xFF) as u8,
        }
    }

    pub const fn alpha(self, a: f32) -> Rgba {
        Rgba { r: self.r, g: self.g, b: self.b, a }
    }

    /// Per-channel linear interpolation, rounded to the nearest integer.
    /// `t = 0` returns `self`, `t = 1` returns `other` exactly.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgb> for Rgba {
    fn from(c: Rgb) -> Self {
        c.alpha(1.0)
    }
}

#[inline]
fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    let v = a as f32 + (b as f32 - a as f32) * t;
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKY: Rgb = Rgb::hex(0x87CEEB);
    const DUSK: Rgb = Rgb::hex(0xFFB347);

    #[test]
    fn hex_unpacks_channels() {
        assert_eq!(SKY, Rgb::from_rgb(0x87, 0xCE, 0xEB));
    }

    #[test]
    fn lerp_hits_endpoints_exactly() {
        assert_eq!(SKY.lerp(DUSK, 0.0), SKY);
        assert_eq!(SKY.lerp(DUSK, 1.0), DUSK);
    }

    #[test]
    fn lerp_rounds_midpoint() {
        let c = Rgb::from_rgb(0, 0, 0).lerp(Rgb::from_rgb(255, 1, 3), 0.5);
        assert_eq!(c, Rgb::from_rgb(128, 1, 2));
    }
}
