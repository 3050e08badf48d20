// Host-side tests for hex color parsing and sRGB decoding.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod color {
    include!("../src/core/color.rs");
}

use color::*;

#[test]
fn parses_material_default() {
    let c = Rgb::from_hex("#ffeded").unwrap();
    assert_eq!(c.r, 1.0);
    assert!((c.g - 237.0 / 255.0).abs() < 1e-6);
    assert!((c.b - 237.0 / 255.0).abs() < 1e-6);
}

#[test]
fn parses_without_hash_and_any_case() {
    assert_eq!(Rgb::from_hex("FF8800"), Rgb::from_hex("#ff8800"));
    let c: Rgb = " #00ff00 ".parse().unwrap();
    assert_eq!(c, Rgb::new(0.0, 1.0, 0.0));
}

#[test]
fn rejects_malformed_input() {
    assert!(matches!(Rgb::from_hex("#fff"), Err(ColorParseError::BadLength(_))));
    assert!(matches!(Rgb::from_hex(""), Err(ColorParseError::BadLength(_))));
    assert!(matches!(Rgb::from_hex("#gg0000"), Err(ColorParseError::BadDigit(_))));
    assert!(matches!(Rgb::from_hex("#ff00ééé"), Err(_)));
    assert!(matches!(Rgb::from_hex("+f+f+f"), Err(ColorParseError::BadDigit(_))));
    assert!(matches!(Rgb::from_hex("##ffeded"), Err(ColorParseError::BadDigit(_))));
}

#[test]
fn hex_formatting() {
    assert_eq!(Rgb::new(1.0, 237.0 / 255.0, 237.0 / 255.0).to_hex(), "#ffeded");
    assert_eq!(Rgb::new(2.0, -1.0, 0.5).to_hex(), "#ff0080");
    assert_eq!(format!("{}", Rgb::WHITE), "#ffffff");
}

#[test]
fn srgb_decode_endpoints_and_midpoint() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    assert!((srgb_to_linear(0.5) - 0.2140).abs() < 1e-3);
    // linear segment near black
    assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-7);
    let lin = Rgb::new(1.0, 0.5, 0.0).to_linear();
    assert!(lin[1] < 0.5 && lin[0] == 1.0 && lin[2] == 0.0);
}
