use std::path::PathBuf;

use anyhow::Result;
use structopt::StructOpt;
use texfont_font::{FontDescriptor, FontStyle};
use texfont_generator::GenerationConfig;
use texfont_geometry::Color;

use crate::config_file::ConfigFile;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "texturefont",
    about = "Generates the image grid and associated metadata for a texture font"
)]
pub struct Args {
    /// Name of the font family to be generated
    pub font_name: String,

    /// Point size
    pub point_size: u32,

    /// Font style
    #[structopt(long, possible_values = &FontStyle::VARIANTS, case_insensitive = true)]
    pub style: Option<FontStyle>,

    /// Disables kerning pairs
    #[structopt(short = "K", long)]
    pub no_kerning: bool,

    /// Renders glyphs with hard edges
    #[structopt(short = "A", long)]
    pub no_anti_alias: bool,

    /// Texture size in pixels [default: 512]
    #[structopt(long)]
    pub size: Option<u32>,

    /// Number of rows and columns [default: 16]
    #[structopt(long)]
    pub tiles: Option<u32>,

    /// Starting character: a character, a decimal codepoint, `0x..` or `U+..` [default: space]
    #[structopt(long, parse(try_from_str = parse_start_character))]
    pub start: Option<u32>,

    /// Output filename without extension [default: font name, style and point size]
    #[structopt(short = "f", long, parse(from_os_str))]
    pub filename: Option<PathBuf>,

    /// Background color, `#rrggbb` or `#rrggbbaa` [default: #00000000]
    #[structopt(long)]
    pub background: Option<Color>,

    /// Text color, `#rrggbb` or `#rrggbbaa` [default: #ffffffff]
    #[structopt(long)]
    pub text_color: Option<Color>,

    /// Draws the cell boundaries in this color
    #[structopt(long)]
    pub grid_lines: Option<Color>,

    /// TOML configuration file, command line arguments override its settings
    #[structopt(long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Additional font file to load, may be repeated
    #[structopt(long = "font-file", number_of_values = 1, parse(from_os_str))]
    pub font_files: Vec<PathBuf>,
}

impl Args {
    /// Combines the arguments with a configuration file. Arguments win over the file, the file
    /// over the defaults.
    pub fn generation_config(&self, file: &ConfigFile) -> Result<GenerationConfig> {
        let style = self.style.or(file.style).unwrap_or_default();
        let font = FontDescriptor::new(self.font_name.clone(), style, self.point_size);
        let defaults = GenerationConfig::new(font);

        let start_character = match self.start {
            Some(start) => start,
            None => file
                .start_character()?
                .unwrap_or(defaults.start_character),
        };

        Ok(GenerationConfig {
            atlas_size: self.size.or(file.size).unwrap_or(defaults.atlas_size),
            tile_count: self.tiles.or(file.tiles).unwrap_or(defaults.tile_count),
            start_character,
            background: self
                .background
                .or(file.background)
                .unwrap_or(defaults.background),
            text_color: self
                .text_color
                .or(file.text_color)
                .unwrap_or(defaults.text_color),
            anti_alias: !self.no_anti_alias && file.anti_alias.unwrap_or(defaults.anti_alias),
            kerning: !self.no_kerning && file.kerning.unwrap_or(defaults.kerning),
            grid_lines: self.grid_lines.or(file.grid_lines),
            ..defaults
        })
    }

    /// Font files from the configuration file first, then the ones from the command line.
    pub fn font_files<'a>(&'a self, file: &'a ConfigFile) -> impl Iterator<Item = &'a PathBuf> {
        file.font_files.iter().chain(&self.font_files)
    }
}

/// Parses a start character given as the character itself, a decimal codepoint, or a hexadecimal
/// codepoint prefixed with `0x` or `U+`.
pub fn parse_start_character(s: &str) -> Result<u32, String> {
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("U+"))
        .or_else(|| s.strip_prefix("u+"));

    let parsed = match hex {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(ch as u32),
                _ => s.parse().ok(),
            }
        }
    };

    parsed.ok_or_else(|| {
        format!("invalid start character `{s}`, expected a character or a codepoint")
    })
}

/// The output base name for a font: family without whitespace, style and point size.
pub fn default_filename(font: &FontDescriptor) -> PathBuf {
    let family: String = font.family.split_whitespace().collect();
    let style = match font.style {
        FontStyle::Plain => "",
        FontStyle::Bold => "Bold",
        FontStyle::Italic => "Italic",
    };
    format!("{family}{style}{}", font.point_size).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Args {
        Args::from_iter_safe(["texturefont"].iter().chain(args)).unwrap()
    }

    #[test]
    fn positional_arguments_only() {
        let args = args(&["DejaVu Sans", "16"]);
        let config = args.generation_config(&ConfigFile::default()).unwrap();

        let expected =
            GenerationConfig::new(FontDescriptor::new("DejaVu Sans", FontStyle::Plain, 16));
        assert_eq!(config, expected);
        assert!(args.filename.is_none());
    }

    #[test]
    fn all_options() {
        let args = args(&[
            "Mono",
            "12",
            "--style",
            "Bold",
            "--no-kerning",
            "--no-anti-alias",
            "--size",
            "256",
            "--tiles",
            "8",
            "--start",
            "0x41",
            "-f",
            "out/mono",
            "--background",
            "#000000ff",
            "--text-color",
            "#ff0000",
            "--grid-lines",
            "#00ffff",
            "--font-file",
            "a.ttf",
            "--font-file",
            "b.otf",
        ]);
        let config = args.generation_config(&ConfigFile::default()).unwrap();

        assert_eq!(config.font, FontDescriptor::new("Mono", FontStyle::Bold, 12));
        assert!(!config.kerning);
        assert!(!config.anti_alias);
        assert_eq!(config.atlas_size, 256);
        assert_eq!(config.tile_count, 8);
        assert_eq!(config.start_character, 'A' as u32);
        assert_eq!(config.background, Color::BLACK);
        assert_eq!(config.text_color, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(config.grid_lines, Some(Color::rgb(0.0, 1.0, 1.0)));
        assert_eq!(args.filename, Some(PathBuf::from("out/mono")));
        assert_eq!(args.font_files, [PathBuf::from("a.ttf"), PathBuf::from("b.otf")]);
    }

    #[test]
    fn missing_point_size_is_rejected() {
        assert!(Args::from_iter_safe(["texturefont", "Mono"]).is_err());
        assert!(Args::from_iter_safe(["texturefont", "Mono", "twelve"]).is_err());
        assert!(Args::from_iter_safe(["texturefont", "Mono", "12", "--style", "oblique"]).is_err());
    }

    #[test]
    fn arguments_override_the_configuration_file() {
        let file = ConfigFile::parse(
            r#"
style = "italic"
size = 1024
tiles = 4
start = 48
kerning = false
font-files = ["file.ttf"]
            "#,
        )
        .unwrap();
        let args = args(&["Serif", "20", "--tiles", "2", "--font-file", "arg.ttf"]);

        let config = args.generation_config(&file).unwrap();
        assert_eq!(config.font.style, FontStyle::Italic);
        assert_eq!(config.atlas_size, 1024);
        assert_eq!(config.tile_count, 2);
        assert_eq!(config.start_character, 48);
        assert!(!config.kerning);
        assert!(config.anti_alias);

        let font_files: Vec<_> = args.font_files(&file).collect();
        assert_eq!(font_files, [&PathBuf::from("file.ttf"), &PathBuf::from("arg.ttf")]);
    }

    #[test]
    fn start_character_notations() {
        assert_eq!(parse_start_character("A"), Ok(65));
        assert_eq!(parse_start_character(" "), Ok(32));
        assert_eq!(parse_start_character("7"), Ok('7' as u32));
        assert_eq!(parse_start_character("32"), Ok(32));
        assert_eq!(parse_start_character("0x20"), Ok(32));
        assert_eq!(parse_start_character("U+00C0"), Ok(0xC0));
        assert_eq!(parse_start_character("é"), Ok(0xE9));
        assert!(parse_start_character("").is_err());
        assert!(parse_start_character("AB").is_err());
        assert!(parse_start_character("0xZZ").is_err());
    }

    #[test]
    fn default_filename_from_font() {
        let plain = FontDescriptor::new("DejaVu Sans", FontStyle::Plain, 16);
        let bold = FontDescriptor::new("DejaVu Sans", FontStyle::Bold, 16);
        assert_eq!(default_filename(&plain), PathBuf::from("DejaVuSans16"));
        assert_eq!(default_filename(&bold), PathBuf::from("DejaVuSansBold16"));
    }
}
