use anyhow::{Context, Result};
use clap::Parser;
use whitted_core::{load_scene_file, SceneFile};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Load the scene file (or the demo scene) and apply command-line overrides.
fn build_scene_file(args: &Args) -> Result<SceneFile> {
    let mut file = match &args.scene {
        Some(path) => load_scene_file(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => SceneFile::default_scene(),
    };

    if let Some(width) = args.width {
        file.settings.width = width;
    }
    if let Some(height) = args.height {
        file.settings.height = height;
    }
    if let Some(depth) = args.depth {
        file.settings.depth = depth;
    }

    for name in &args.enable {
        file.catalog
            .set_enabled(name, true)
            .with_context(|| format!("Cannot enable {}", name))?;
    }
    for name in &args.disable {
        file.catalog
            .set_enabled(name, false)
            .with_context(|| format!("Cannot disable {}", name))?;
    }

    file.validate().context("Invalid render settings")?;
    Ok(file)
}

fn print_catalog(file: &SceneFile) {
    for entry in &file.catalog.primitives {
        let mark = if entry.enabled { "x" } else { " " };
        println!("[{}] {:<16} {}", mark, entry.name, entry.item.kind());
    }
    for entry in &file.catalog.lights {
        let mark = if entry.enabled { "x" } else { " " };
        println!("[{}] {:<16} light", mark, entry.name);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let file = build_scene_file(&args)?;

    if args.list {
        print_catalog(&file);
        return Ok(());
    }

    if let Some(path) = &args.dump_scene {
        file.save(path)
            .with_context(|| format!("Failed to write scene {}", path.display()))?;
        log::info!("Wrote scene to {}", path.display());
        return Ok(());
    }

    let scene = file.catalog.scene();
    let image = whitted_renderer::render_parallel(&scene, &file.settings, args.bucket_size);

    image
        .save_png(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply() {
        let args = Args::try_parse_from([
            "whitted", "--depth", "1", "--height", "100", "--enable", "light2", "--disable",
            "red_sphere",
        ])
        .unwrap();

        let file = build_scene_file(&args).unwrap();
        assert_eq!(file.settings.depth, 1);
        assert_eq!(file.settings.height, 100);
        assert_eq!(file.settings.width, 600);

        let scene = file.catalog.scene();
        assert_eq!(scene.primitive_count(), 4);
        assert_eq!(scene.light_count(), 2);
    }

    #[test]
    fn test_unknown_toggle_fails() {
        let args = Args::try_parse_from(["whitted", "--disable", "moon"]).unwrap();
        let err = build_scene_file(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("moon"));
    }

    #[test]
    fn test_zero_size_rejected() {
        let args = Args::try_parse_from(["whitted", "--width", "0"]).unwrap();
        assert!(build_scene_file(&args).is_err());
    }
}
