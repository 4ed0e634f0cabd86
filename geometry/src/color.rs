use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An RGBA color with components in `0..=1`.
///
/// Serialized as a `#rrggbbaa` hex string.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    pub fn rgba_u8([r, g, b, a]: [u8; 4]) -> Self {
        let c = |v: u8| v as f32 / 255.0;
        Self::new(c(r), c(g), c(b), c(a))
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Composes this color over `dst` (non-premultiplied source-over).
    pub fn over(self, dst: Self) -> Self {
        let alpha = self.alpha + dst.alpha * (1.0 - self.alpha);
        if alpha <= 0.0 {
            return Self::TRANSPARENT;
        }
        let mix = |s: f32, d: f32| (s * self.alpha + d * dst.alpha * (1.0 - self.alpha)) / alpha;
        Self::new(
            mix(self.red, dst.red),
            mix(self.green, dst.green),
            mix(self.blue, dst.blue),
            alpha,
        )
    }

    /// Quantizes the color to 8 bits per channel, clamping out of range components.
    pub fn to_rgba_u8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.red), q(self.green), q(self.blue), q(self.alpha)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{0}`, expected `#rrggbb` or `#rrggbbaa`")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(err());
        }

        let mut rgba = [0xff_u8; 4];
        for (i, component) in rgba.iter_mut().enumerate().take(hex.len() / 2) {
            *component = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| err())?;
        }
        Ok(Self::rgba_u8(rgba))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba_u8();
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
