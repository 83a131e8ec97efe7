//! sRGB color values and the HSL arithmetic used by decal shifts.
//!
//! Components are stored in sRGB space in the \[0, 1\] range, which is the
//! space paint swatches are authored in. HSL offsets are applied in the same
//! space; the renderer converts to linear only when packing GPU data.

use crate::error::ConfigError;
use glam::Vec3;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Hue, saturation and lightness, each in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        let (r, g, b) = match hex.len() {
            3 => (
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            ),
            6 => (
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            ),
            _ => return Err(invalid()),
        };
        Ok(Self::from_bytes([r, g, b]))
    }

    pub fn from_bytes(rgb: [u8; 3]) -> Self {
        Self::new(
            rgb[0] as f32 / 255.0,
            rgb[1] as f32 / 255.0,
            rgb[2] as f32 / 255.0,
        )
    }

    pub fn to_bytes(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn to_hsl(self) -> Hsl {
        let Rgb { r, g, b } = self;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (min + max) / 2.0;
        if min == max {
            return Hsl { h: 0.0, s: 0.0, l };
        }
        let delta = max - min;
        let s = if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };
        let h = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        Hsl { h: h / 6.0, s, l }
    }

    /// Build a color from HSL. Hue wraps into \[0, 1); saturation and
    /// lightness are clamped.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = hsl.h.rem_euclid(1.0);
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);
        if s == 0.0 {
            return Self::new(l, l, l);
        }
        let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let q = 2.0 * l - p;
        Self::new(
            hue_to_channel(q, p, h + 1.0 / 3.0),
            hue_to_channel(q, p, h),
            hue_to_channel(q, p, h - 1.0 / 3.0),
        )
    }

    /// Shift hue, saturation and lightness by the given amounts.
    pub fn offset_hsl(self, dh: f32, ds: f32, dl: f32) -> Self {
        let hsl = self.to_hsl();
        Self::from_hsl(Hsl {
            h: hsl.h + dh,
            s: hsl.s + ds,
            l: hsl.l + dl,
        })
    }

    /// Linear-light components for shading.
    pub fn to_linear(self) -> Vec3 {
        Vec3::new(
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        )
    }
}

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * 6.0 * (2.0 / 3.0 - t);
    }
    p
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_map_to_expected_hues() {
        let red = Rgb::new(1.0, 0.0, 0.0).to_hsl();
        assert_eq!(red, Hsl { h: 0.0, s: 1.0, l: 0.5 });
        let green = Rgb::new(0.0, 1.0, 0.0).to_hsl();
        assert!((green.h - 1.0 / 3.0).abs() < 1e-6);
        let blue = Rgb::new(0.0, 0.0, 1.0).to_hsl();
        assert!((blue.h - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn grey_has_no_saturation() {
        let hsl = Rgb::new(0.4, 0.4, 0.4).to_hsl();
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.h, 0.0);
        assert!((hsl.l - 0.4).abs() < 1e-6);
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert_eq!(Rgb::BLACK.to_linear(), Vec3::ZERO);
        let white = Rgb::WHITE.to_linear();
        assert!((white - Vec3::ONE).abs().max_element() < 1e-6);
    }
}
