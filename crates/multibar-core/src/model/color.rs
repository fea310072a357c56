/// RGBA colour value used by every part of the chart.
///
/// Channels are `f32` in `[0, 1]` so the core stays independent of any
/// UI toolkit's colour type. Hosts convert at the painting boundary.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A colour with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Returned when a string is not a `#RRGGBB` or `#RRGGBBAA` hex colour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex colour {input:?}: expected #RRGGBB or #RRGGBBAA")]
pub struct ColorParseError {
    pub input: String,
}

impl Color {
    pub const BLACK: Self = Self::rgb8(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb8(0xff, 0xff, 0xff);

    // System-style defaults for the palette and the aggregate bar.
    pub const BLUE: Self = Self::rgb8(0x00, 0x7a, 0xff);
    pub const GREEN: Self = Self::rgb8(0x34, 0xc7, 0x59);
    pub const ORANGE: Self = Self::rgb8(0xff, 0x95, 0x00);
    pub const RED: Self = Self::rgb8(0xff, 0x3b, 0x30);
    pub const PURPLE: Self = Self::rgb8(0xaf, 0x52, 0xde);
    pub const GRAY: Self = Self::rgb8(0x8e, 0x8e, 0x93);

    /// Create a colour, clamping every channel into `[0, 1]`.
    ///
    /// NaN channels become 0.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// Opaque colour from float channels.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Opaque colour from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 0xff)
    }

    /// Colour from 8-bit channels including alpha.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: clamp_unit(a),
            ..self
        }
    }

    /// Channels rounded to 8 bits, in `[r, g, b, a]` order.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            to_u8(self.r),
            to_u8(self.g),
            to_u8(self.b),
            to_u8(self.a),
        ]
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`. The leading `#` is optional.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError {
            input: input.to_string(),
        };
        let hex = input.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let a = if hex.len() == 8 { channel(6)? } else { 0xff };
        Ok(Self::rgba8(r, g, b, a))
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 0xff {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

fn to_u8(v: f32) -> u8 {
    (clamp_unit(v) * 255.0).round() as u8
}
