//! Render the stock wall once per background pattern, with reproducible border colors.
//!
//! ```text
//! cargo run --features demo --bin demo_patterns -- [output_dir] [seed]
//! ```

use std::error::Error;
use std::path::PathBuf;

use ledwall_grid::color::SeededColors;
use ledwall_grid::to_png::write_png;
use ledwall_grid::{BackgroundPattern, GridConfig, synthesize_with};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let output_dir = args.next().map_or_else(|| PathBuf::from("patterns"), PathBuf::from);
    let seed = args.next().map(|text| text.parse::<u64>()).transpose()?.unwrap_or(0);

    for background_pattern in BackgroundPattern::ALL {
        let config = GridConfig {
            background_pattern,
            cabinet_stroke_width: 4.0,
            ..GridConfig::default()
        };
        // Same seed for every pattern, so only the background differs between files.
        let image = synthesize_with(&config, &mut SeededColors::new(seed))?;
        let mut output_path = output_dir.clone();
        output_path.push(format!("{}.png", background_pattern.name()));
        write_png(&image, &output_path)?;
    }
    Ok(())
}
