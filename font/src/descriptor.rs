use std::str::FromStr;

use cosmic_text::{Style, Weight};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifies a font on the host: family, style and point size.
///
/// Point sizes map 1:1 onto pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub family: String,
    #[serde(default)]
    pub style: FontStyle,
    pub point_size: u32,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, style: FontStyle, point_size: u32) -> Self {
        Self {
            family: family.into(),
            style,
            point_size,
        }
    }

    pub fn font_size(&self) -> f32 {
        self.point_size as f32
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    #[display("plain")]
    Plain,
    #[display("bold")]
    Bold,
    #[display("italic")]
    Italic,
}

impl FontStyle {
    pub const VARIANTS: [&'static str; 3] = ["plain", "bold", "italic"];

    pub fn weight(&self) -> Weight {
        match self {
            FontStyle::Bold => Weight::BOLD,
            FontStyle::Plain | FontStyle::Italic => Weight::NORMAL,
        }
    }

    pub fn style(&self) -> Style {
        match self {
            FontStyle::Italic => Style::Italic,
            FontStyle::Plain | FontStyle::Bold => Style::Normal,
        }
    }
}

impl FromStr for FontStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(FontStyle::Plain),
            "bold" => Ok(FontStyle::Bold),
            "italic" => Ok(FontStyle::Italic),
            _ => Err(format!(
                "unknown font style `{s}`, expected one of {}",
                Self::VARIANTS.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_parses_case_insensitive() {
        assert_eq!("Bold".parse(), Ok(FontStyle::Bold));
        assert_eq!("ITALIC".parse(), Ok(FontStyle::Italic));
        assert!("oblique".parse::<FontStyle>().is_err());
    }

    #[test]
    fn style_display_roundtrips_through_from_str() {
        for style in [FontStyle::Plain, FontStyle::Bold, FontStyle::Italic] {
            assert_eq!(style.to_string().parse(), Ok(style));
        }
    }

    #[test]
    fn bold_maps_to_bold_weight() {
        assert_eq!(FontStyle::Bold.weight(), Weight::BOLD);
        assert_eq!(FontStyle::Italic.weight(), Weight::NORMAL);
        assert_eq!(FontStyle::Italic.style(), Style::Italic);
    }
}
