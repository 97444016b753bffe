#![allow(missing_docs)]
//! Resolution arithmetic and configuration validation.

use ledwall_grid::grid_config::MAX_PIXELS;
use ledwall_grid::{Error, GridConfig, PixelSize, Resolution, compute_resolution, synthesize};
use std::error::Error as _;

#[test]
fn default_wall_is_full_hd() -> Result<(), Box<dyn std::error::Error>> {
    let resolution = compute_resolution(&GridConfig::default())?;
    assert_eq!(
        resolution,
        Resolution {
            width: 1920.0,
            height: 1080.0
        }
    );
    assert_eq!(resolution.to_string(), "1920 x 1080");
    assert_eq!(resolution.pixel_size().pixel_count(), 1920 * 1080);
    assert!((resolution.aspect_ratio() - 16.0 / 9.0).abs() < 1e-12);
    Ok(())
}

#[test]
fn resolution_is_product_of_geometry_fields() -> Result<(), Box<dyn std::error::Error>> {
    let config = GridConfig {
        module_width: 128.0,
        module_height: 96.0,
        modules_x: 3.0,
        modules_y: 5.0,
        cabinets_x: 7.0,
        cabinets_y: 2.0,
        ..GridConfig::default()
    };
    let resolution = compute_resolution(&config)?;
    assert_eq!(resolution.width, f64::from(128 * 3 * 7));
    assert_eq!(resolution.height, f64::from(96 * 5 * 2));
    Ok(())
}

#[test]
fn fractional_module_sizes_give_exact_products() -> Result<(), Box<dyn std::error::Error>> {
    let config = GridConfig {
        module_width: 160.5,
        ..GridConfig::default()
    };
    let resolution = compute_resolution(&config)?;
    assert_eq!(resolution.width, 1926.0);
    assert_eq!(resolution.to_string(), "1926 x 1080");

    let config = GridConfig {
        module_width: 100.5,
        module_height: 90.25,
        modules_x: 1.0,
        modules_y: 1.0,
        cabinets_x: 1.0,
        cabinets_y: 1.0,
        ..GridConfig::default()
    };
    let resolution = compute_resolution(&config)?;
    assert_eq!(resolution.to_string(), "100.5 x 90.25");
    // The raster truncates, like assigning to a canvas size.
    assert_eq!(
        resolution.pixel_size(),
        PixelSize {
            width: 100,
            height: 90
        }
    );
    Ok(())
}

#[test]
fn fractional_wall_renders_at_truncated_size() -> Result<(), Box<dyn std::error::Error>> {
    let config = GridConfig {
        module_width: 160.5,
        module_height: 180.3,
        ..GridConfig::default()
    };
    let image = synthesize(&config)?;
    assert_eq!(image.pixel_size(), compute_resolution(&config)?.pixel_size());
    assert_eq!(image.width(), 1926);
    assert_eq!(image.height(), 1081);
    Ok(())
}

#[test]
fn wall_below_one_pixel_is_invalid_geometry() {
    let config = GridConfig {
        module_width: 0.25,
        modules_x: 1.0,
        cabinets_x: 1.0,
        ..GridConfig::default()
    };
    assert_eq!(geometry_error_field(&config), "moduleWidth");
}

#[test]
fn four_k_wall() -> Result<(), Box<dyn std::error::Error>> {
    let config = GridConfig {
        cabinets_x: 6.0,
        cabinets_y: 6.0,
        ..GridConfig::default()
    };
    assert_eq!(compute_resolution(&config)?.to_string(), "3840 x 2160");
    Ok(())
}

#[test]
fn resolution_ignores_style_fields() -> Result<(), Box<dyn std::error::Error>> {
    let config = GridConfig {
        font_color: "not a color".to_owned(),
        font_size: -3.0,
        ..GridConfig::default()
    };
    assert_eq!(compute_resolution(&config)?.width, 1920.0);
    Ok(())
}

fn geometry_error_field(config: &GridConfig) -> &'static str {
    match compute_resolution(config) {
        Err(Error::InvalidGeometry { field, .. }) => field,
        other => panic!("expected InvalidGeometry, got {other:?}"),
    }
}

#[test]
fn zero_count_is_invalid_geometry() {
    let config = GridConfig {
        modules_x: 0.0,
        ..GridConfig::default()
    };
    assert_eq!(geometry_error_field(&config), "modulesX");
}

#[test]
fn negative_size_is_invalid_geometry() {
    let config = GridConfig {
        module_height: -180.0,
        ..GridConfig::default()
    };
    assert_eq!(geometry_error_field(&config), "moduleHeight");
}

#[test]
fn fractional_count_is_invalid_geometry() {
    let config = GridConfig {
        cabinets_y: 2.5,
        ..GridConfig::default()
    };
    assert_eq!(geometry_error_field(&config), "cabinetsY");

    let config = GridConfig {
        modules_x: 4.5,
        ..GridConfig::default()
    };
    assert_eq!(geometry_error_field(&config), "modulesX");
}

#[test]
fn non_finite_values_are_invalid_geometry() {
    let config = GridConfig {
        module_width: f64::NAN,
        ..GridConfig::default()
    };
    assert_eq!(geometry_error_field(&config), "moduleWidth");

    let config = GridConfig {
        cabinets_x: f64::INFINITY,
        ..GridConfig::default()
    };
    assert_eq!(geometry_error_field(&config), "cabinetsX");
}

#[test]
fn overflowing_wall_is_invalid_geometry() {
    let config = GridConfig {
        module_width: 4_000_000_000.0,
        modules_x: 2.0,
        ..GridConfig::default()
    };
    assert_eq!(geometry_error_field(&config), "cabinetsX");
}

#[test]
fn oversized_wall_is_invalid_geometry() {
    let config = GridConfig {
        module_width: 10_000.0,
        module_height: 10_000.0,
        ..GridConfig::default()
    };
    let pixels = 10_000_u64 * 4 * 3 * 10_000 * 2 * 3;
    assert!(pixels > MAX_PIXELS);
    assert!(matches!(
        compute_resolution(&config),
        Err(Error::InvalidGeometry { .. })
    ));
}

#[test]
fn geometry_is_reported_before_style() {
    let config = GridConfig {
        modules_y: 0.0,
        font_color: "nope".to_owned(),
        ..GridConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(Error::InvalidGeometry {
            field: "modulesY",
            ..
        })
    ));
}

#[test]
fn bad_style_fields_are_invalid_style() {
    let cases = [
        (
            GridConfig {
                font_size: 0.0,
                ..GridConfig::default()
            },
            "fontSize",
        ),
        (
            GridConfig {
                cabinet_stroke_width: -1.0,
                ..GridConfig::default()
            },
            "cabinetStrokeWidth",
        ),
        (
            GridConfig {
                font_color: "#12345".to_owned(),
                ..GridConfig::default()
            },
            "fontColor",
        ),
        (
            GridConfig {
                background_color: "white".to_owned(),
                ..GridConfig::default()
            },
            "backgroundColor",
        ),
        (
            GridConfig {
                module_stroke_color: "#gg0000".to_owned(),
                ..GridConfig::default()
            },
            "moduleStrokeColor",
        ),
    ];
    for (config, expected_field) in cases {
        match synthesize(&config) {
            Err(Error::InvalidStyle { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected InvalidStyle for {expected_field}, got {other:?}"),
        }
    }
}

#[test]
fn error_messages_name_the_field() {
    let config = GridConfig {
        modules_x: 1.5,
        ..GridConfig::default()
    };
    let error = compute_resolution(&config).expect_err("fractional modulesX must fail");
    let message = error.to_string();
    assert!(message.starts_with("invalid geometry: `modulesX`"), "{message}");
    assert!(error.source().is_none());
}
