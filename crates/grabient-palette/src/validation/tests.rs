//! Validation tests.

use super::*;
use crate::coeffs::{render_hex, DEFAULT_STEPS};
use crate::seed::encode_seed;

fn make_valid_palette(id: &str) -> StagedPalette {
    let coeffs = CosineCoeffs::default();
    StagedPalette {
        id: id.to_string(),
        seed: encode_seed(&coeffs, &Globals::IDENTITY),
        colors: render_hex(&coeffs, DEFAULT_STEPS),
        themes: vec!["rainbow".to_string()],
        tag: "bright".to_string(),
    }
}

#[test]
fn test_valid_palette() {
    let palette = make_valid_palette("p1");
    let result = validate_palette(&palette);
    assert!(result.is_ok(), "errors: {:?}", result.errors);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_empty_colors() {
    let mut palette = make_valid_palette("p1");
    palette.colors.clear();
    assert!(!is_valid_palette_colors(&palette.colors));

    let result = validate_palette(&palette);
    assert!(result.has_error(ErrorCode::EmptyColors));
}

#[test]
fn test_malformed_colors() {
    let test_cases = vec![
        ("#12345", "five digits"),
        ("#zzzzzz", "not hex"),
        ("", "empty string"),
        ("red", "named color"),
    ];

    for (color, desc) in test_cases {
        let mut palette = make_valid_palette("p1");
        palette.colors[3] = color.to_string();
        assert!(
            !is_valid_palette_colors(&palette.colors),
            "expected invalid for {}: {:?}",
            desc,
            color
        );
        let result = validate_palette(&palette);
        let err = result
            .errors
            .iter()
            .find(|e| e.code == ErrorCode::MalformedColor)
            .expect("malformed color error");
        assert_eq!(err.path.as_deref(), Some("colors[3]"));
    }
}

#[test]
fn test_malformed_seed() {
    let mut palette = make_valid_palette("p1");
    palette.seed = "definitely-not-a-seed".to_string();
    let result = validate_palette(&palette);
    assert!(result.has_error(ErrorCode::MalformedSeed));
    assert_eq!(result.errors.len(), 1);
}

#[test]
fn test_non_finite_coefficients() {
    let mut coeffs = CosineCoeffs::default();
    coeffs.0[1][2] = f64::INFINITY;
    assert!(!is_valid_palette_coeffs(&coeffs));

    let mut palette = make_valid_palette("p1");
    palette.seed = encode_seed(&coeffs, &Globals::IDENTITY);
    let result = validate_palette(&palette);
    let err = result
        .errors
        .iter()
        .find(|e| e.code == ErrorCode::NonFiniteCoefficient)
        .expect("non-finite error");
    assert_eq!(err.path.as_deref(), Some("coeffs[1][2]"));
}

#[test]
fn test_non_finite_globals_only_warn() {
    let mut palette = make_valid_palette("p1");
    palette.seed = encode_seed(&CosineCoeffs::default(), &Globals([f64::NAN, 1.0, 1.0, 0.0]));
    let result = validate_palette(&palette);
    assert!(result.is_ok(), "errors: {:?}", result.errors);
    let warning = result
        .warnings
        .iter()
        .find(|w| w.code == WarningCode::NonFiniteGlobal)
        .expect("non-finite global warning");
    assert_eq!(warning.path.as_deref(), Some("globals[0]"));

    let prepared = prepare_palettes(vec![palette]);
    assert_eq!(prepared.corrupted_count(), 0);
    assert_eq!(prepared.valid.len(), 1);
}

#[test]
fn test_label_warnings() {
    let mut palette = make_valid_palette("p1");
    palette.themes = vec!["dusk".to_string(), "dusk".to_string()];
    let result = validate_palette(&palette);
    assert!(result.is_ok());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].code, WarningCode::RepeatedTheme);
    assert_eq!(result.warnings[0].path.as_deref(), Some("themes[1]"));

    palette.themes.clear();
    palette.tag.clear();
    let result = validate_palette(&palette);
    assert!(result.is_ok());
    assert!(result
        .warnings
        .iter()
        .any(|w| w.code == WarningCode::MissingLabels));
}

#[test]
fn test_prepare_isolates_corrupted_items() {
    let mut broken = make_valid_palette("broken");
    broken.seed = "???".to_string();

    let palettes = vec![make_valid_palette("a"), broken, make_valid_palette("b")];
    let prepared = prepare_palettes(palettes);

    assert_eq!(prepared.corrupted_count(), 1);
    assert_eq!(prepared.corrupted[0].id, "broken");
    let ids: Vec<&str> = prepared.valid.iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_prepare_keeps_raw_coeffs_and_globals() {
    let mut palette = make_valid_palette("p1");
    let globals = Globals([0.25, 1.0, 1.0, 0.0]);
    palette.seed = encode_seed(&CosineCoeffs::default(), &globals);

    let item = prepare_palette(palette).expect("valid palette");
    assert_eq!(item.globals, globals);
    assert!((item.coeffs.0[0][0] - 0.5).abs() < 1e-6);
}
