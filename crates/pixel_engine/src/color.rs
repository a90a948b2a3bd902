use std::fmt::Display;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::EngineError;

lazy_static::lazy_static! {
    static ref HEX_COLOR_REGEX: Regex = Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// An 8-bit-per-channel RGB color. Immutable value type; the canonical
/// external representation is a `#rrggbb` hex string.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Color: r={:02X}, g={:02X}, b={:02X}}}", self.r, self.g, self.b)
    }
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn get_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses a `#rrggbb` hex string (the leading `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidHexColor` if the string is not a
    /// 6-digit hex triple.
    pub fn from_hex(hex: &str) -> crate::EngineResult<Self> {
        if let Some(cap) = HEX_COLOR_REGEX.captures(hex) {
            let (_, [r, g, b]) = cap.extract();
            let r = u32::from_str_radix(r, 16)?;
            let g = u32::from_str_radix(g, 16)?;
            let b = u32::from_str_radix(b, 16)?;
            Ok(Color::new(r as u8, g as u8, b as u8))
        } else {
            Err(EngineError::InvalidHexColor { value: hex.to_string() }.into())
        }
    }

    /// Composites `overlay` over `base` at the given opacity, per channel
    /// `round(overlay * opacity + base * (1 - opacity))`.
    ///
    /// Pure and total. `opacity == 1.0` returns exactly `overlay`,
    /// `opacity == 0.0` returns exactly `base`; the convex combination of
    /// two 8-bit channels never leaves the 8-bit range, so no clamping is
    /// needed.
    pub fn blend(base: Color, overlay: Color, opacity: f32) -> Color {
        let mix = |b: u8, o: u8| (o as f32 * opacity + b as f32 * (1.0 - opacity)).round() as u8;
        Color {
            r: mix(base.r, overlay.r),
            g: mix(base.g, overlay.g),
            b: mix(base.b, overlay.b),
        }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Color {
            r: value.0,
            g: value.1,
            b: value.2,
        }
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(value: Color) -> (u8, u8, u8) {
        (value.r, value.g, value.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Color {
            r: value[0],
            g: value[1],
            b: value[2],
        }
    }
}

impl From<Color> for [u8; 3] {
    fn from(value: Color) -> [u8; 3] {
        [value.r, value.g, value.b]
    }
}
