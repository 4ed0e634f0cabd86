mod args;
mod config_file;

use anyhow::{Context, Result};
use structopt::StructOpt;
use texfont_font::{CosmicFont, FontManager};
use texfont_generator::generate;

use args::{Args, default_filename};
use config_file::ConfigFile;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(Args::from_args())
}

fn run(args: Args) -> Result<()> {
    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };

    let config = args.generation_config(&file)?;
    config.validate()?;

    let manager = FontManager::system();
    for path in args.font_files(&file) {
        manager.load_font_file(path)?;
    }

    let font = CosmicFont::resolve(manager, config.font.clone())?;

    log::info!("Generating texture font");
    let generated = generate(&config, &font)?;

    let base = args
        .filename
        .clone()
        .unwrap_or_else(|| default_filename(&config.font));

    let (image_path, metadata_path) = generated
        .write(&base)
        .with_context(|| format!("Failed to write texture font `{}`", base.display()))?;

    log::info!(
        "Wrote `{}` and `{}`",
        image_path.display(),
        metadata_path.display()
    );
    if config.kerning {
        log::info!("Kerning pairs: {}", generated.kerning.pairs);
    }

    Ok(())
}
