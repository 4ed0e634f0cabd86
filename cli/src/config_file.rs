use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use texfont_font::FontStyle;
use texfont_geometry::Color;

use crate::args::parse_start_character;

/// Intermediate representation of a TOML configuration file.
///
/// Everything is optional, command line arguments take precedence over what is set here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    pub style: Option<FontStyle>,
    pub size: Option<u32>,
    pub tiles: Option<u32>,
    pub start: Option<StartCharacter>,
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub grid_lines: Option<Color>,
    pub kerning: Option<bool>,
    pub anti_alias: Option<bool>,
    /// Font files to load in addition to the system fonts.
    #[serde(default)]
    pub font_files: Vec<PathBuf>,
}

/// Either a codepoint (`start = 32`) or a character / codepoint notation (`start = "A"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StartCharacter {
    Codepoint(u32),
    Text(String),
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration `{}`", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Failed to parse configuration `{}`", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        // Surface bad start characters early.
        file.start_character()?;
        Ok(file)
    }

    pub fn start_character(&self) -> Result<Option<u32>> {
        match &self.start {
            None => Ok(None),
            Some(StartCharacter::Codepoint(codepoint)) => Ok(Some(*codepoint)),
            Some(StartCharacter::Text(text)) => {
                parse_start_character(text).map(Some).map_err(anyhow::Error::msg)
            }
        }
    }
}
