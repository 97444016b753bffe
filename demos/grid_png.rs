//! Render a wall preview to a PNG file.
//!
//! ```text
//! cargo run --features demo --bin demo_grid_png -- [config.json] [output.png] [preview_max_px]
//! ```
//!
//! Without a config file the stock 1920×1080 wall is rendered. When `preview_max_px` is
//! given, a scaled copy is written next to the full-size image.

use std::error::Error;
use std::path::PathBuf;

use ledwall_grid::to_png::{DEFAULT_FILE_NAME, write_png, write_preview_png};
use ledwall_grid::{GridConfig, compute_resolution, synthesize};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) if path != "-" => GridConfig::load(&path)?,
        _ => GridConfig::default(),
    };
    let output_path = args.next().map_or_else(|| PathBuf::from(DEFAULT_FILE_NAME), PathBuf::from);
    let preview_max_dimension = args.next().map(|text| text.parse::<u32>()).transpose()?;

    println!("Current LED resolution is: {}", compute_resolution(&config)?);
    let image = synthesize(&config)?;
    write_png(&image, &output_path)?;

    if let Some(target_max_dimension) = preview_max_dimension {
        let preview_path = output_path.with_extension("preview.png");
        write_preview_png(&image, &preview_path, target_max_dimension)?;
    }
    Ok(())
}
