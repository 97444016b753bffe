#![allow(missing_docs)]
//! JSON configuration documents and background pattern names.

use ledwall_grid::{BackgroundExtent, BackgroundPattern, Error, GridConfig};
use std::error::Error as StdError;
use std::fs;

#[test]
fn empty_document_is_default_config() -> Result<(), Box<dyn StdError>> {
    assert_eq!(GridConfig::from_json("{}")?, GridConfig::default());
    Ok(())
}

#[test]
fn camel_case_fields_are_read() -> Result<(), Box<dyn StdError>> {
    let config = GridConfig::from_json(
        r##"{
            "moduleWidth": 128,
            "moduleHeight": 128,
            "modulesX": 5,
            "modulesY": 5,
            "cabinetsX": 4,
            "cabinetsY": 2,
            "cabinetStrokeWidth": 6,
            "moduleStrokeColor": "#000000",
            "showModules": false,
            "fontSize": 120,
            "fontColor": "#ff0000",
            "backgroundColor": "#202020",
            "backgroundPattern": "verticalCabinet",
            "backgroundExtent": "squareModules"
        }"##,
    )?;
    assert_eq!(config.module_width, 128.0);
    assert_eq!(config.cabinets_x, 4.0);
    assert_eq!(config.cabinet_stroke_width, 6.0);
    assert!(!config.show_modules);
    assert_eq!(config.font_color, "#ff0000");
    assert_eq!(config.background_pattern, BackgroundPattern::VerticalCabinet);
    assert_eq!(config.background_extent, BackgroundExtent::SquareModules);
    Ok(())
}

#[test]
fn stroke_width_alias_is_accepted() -> Result<(), Box<dyn StdError>> {
    let config = GridConfig::from_json(r#"{ "strokeWidthCabinet": 4 }"#)?;
    assert_eq!(config.cabinet_stroke_width, 4.0);
    Ok(())
}

#[test]
fn unknown_pattern_falls_back_to_solid_fill() -> Result<(), Box<dyn StdError>> {
    let config = GridConfig::from_json(r#"{ "backgroundPattern": "checkerboard" }"#)?;
    assert_eq!(config.background_pattern, BackgroundPattern::None);
    Ok(())
}

#[test]
fn pattern_names_parse_case_insensitively() {
    for pattern in BackgroundPattern::ALL {
        assert_eq!(pattern.name().parse(), Ok(pattern));
        assert_eq!(pattern.name().to_uppercase().parse(), Ok(pattern));
    }
    assert_eq!(" radial ".parse(), Ok(BackgroundPattern::Radial));
    assert_eq!("".parse(), Ok(BackgroundPattern::None));
}

#[test]
fn config_serializes_with_form_field_names() -> Result<(), Box<dyn StdError>> {
    let config = GridConfig {
        background_pattern: BackgroundPattern::VerticalModule,
        ..GridConfig::default()
    };
    let value = serde_json::to_value(&config)?;
    assert_eq!(value["moduleWidth"], 160.0);
    assert_eq!(value["cabinetStrokeWidth"], 1.0);
    assert_eq!(value["backgroundPattern"], "verticalModule");
    assert_eq!(value["backgroundExtent"], "geometric");

    let round_trip = GridConfig::from_json(&value.to_string())?;
    assert_eq!(round_trip, config);
    Ok(())
}

#[test]
fn malformed_document_is_config_error() {
    assert!(matches!(
        GridConfig::from_json(r#"{ "moduleWidth": "wide" }"#),
        Err(Error::Config(_))
    ));
    assert!(matches!(GridConfig::from_json("{"), Err(Error::Config(_))));
}

#[test]
fn config_loads_from_file() -> Result<(), Box<dyn StdError>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("wall.json");
    fs::write(&path, r#"{ "cabinetsX": 6, "cabinetsY": 6 }"#)?;
    let config = GridConfig::load(&path)?;
    assert_eq!(ledwall_grid::compute_resolution(&config)?.to_string(), "3840 x 2160");

    assert!(matches!(
        GridConfig::load(dir.path().join("missing.json")),
        Err(Error::Io(_))
    ));
    Ok(())
}
