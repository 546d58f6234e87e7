//! Palette validity gate.
//!
//! Palettes with malformed colors, undecodable seeds or non-finite
//! coefficients are excluded from similarity analysis. Each palette is checked
//! on its own; one corrupted record never stops the rest of a page from being
//! processed.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use tracing::warn;

use crate::coeffs::{CosineCoeffs, Globals};
use crate::color::Color;
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::palette::{CorruptedPalette, PaletteWithCoeffs, StagedPalette};
use crate::seed::decode_seed;

/// Returns true if the color list is non-empty and every entry parses.
pub fn is_valid_palette_colors(colors: &[String]) -> bool {
    !colors.is_empty() && colors.iter().all(|c| Color::from_hex(c).is_ok())
}

/// Returns true if every coefficient is finite.
///
/// The 4x4 shape is guaranteed by [`CosineCoeffs`] itself.
pub fn is_valid_palette_coeffs(coeffs: &CosineCoeffs) -> bool {
    coeffs.values().all(f64::is_finite)
}

/// Checks the color list, recording `P001`/`P002` errors.
pub fn validate_colors(colors: &[String], result: &mut ValidationResult) {
    if colors.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyColors,
            "palette has no colors",
            "colors",
        ));
        return;
    }
    for (i, color) in colors.iter().enumerate() {
        if let Err(e) = Color::from_hex(color) {
            result.add_error(ValidationError::with_path(
                ErrorCode::MalformedColor,
                e.to_string(),
                format!("colors[{}]", i),
            ));
        }
    }
}

/// Checks coefficients for non-finite values (`P003`).
pub fn validate_coeffs(coeffs: &CosineCoeffs, result: &mut ValidationResult) {
    for (r, row) in coeffs.rows().iter().enumerate() {
        for (c, v) in row.iter().enumerate() {
            if !v.is_finite() {
                result.add_error(ValidationError::with_path(
                    ErrorCode::NonFiniteCoefficient,
                    format!("coefficient is {}", v),
                    format!("coeffs[{}][{}]", r, c),
                ));
            }
        }
    }
}

/// Records a `W003` warning for each non-finite global modifier.
///
/// Globals only affect rendering, so they never make a palette corrupted.
pub fn validate_globals(globals: &Globals, result: &mut ValidationResult) {
    for (i, v) in globals.0.iter().enumerate() {
        if !v.is_finite() {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::NonFiniteGlobal,
                format!("global modifier is {}", v),
                format!("globals[{}]", i),
            ));
        }
    }
}

/// Records label warnings (`W001`, `W002`). Never adds errors.
pub fn validate_labels(palette: &StagedPalette, result: &mut ValidationResult) {
    if palette.themes.is_empty() && palette.tag.is_empty() {
        result.add_warning(ValidationWarning::new(
            WarningCode::MissingLabels,
            "palette has neither themes nor a tag",
        ));
    }

    let mut seen = HashSet::new();
    for (i, theme) in palette.themes.iter().enumerate() {
        if !seen.insert(theme.as_str()) {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::RepeatedTheme,
                format!("theme {:?} appears more than once", theme),
                format!("themes[{}]", i),
            ));
        }
    }
}

/// Validates a staged palette end to end: colors, labels, seed and coefficients.
pub fn validate_palette(palette: &StagedPalette) -> ValidationResult {
    check_palette(palette).0
}

/// Runs every check and returns the decoded coefficients and globals when the
/// palette passed.
fn check_palette(palette: &StagedPalette) -> (ValidationResult, Option<(CosineCoeffs, Globals)>) {
    let mut result = ValidationResult::default();

    validate_colors(&palette.colors, &mut result);
    validate_labels(palette, &mut result);

    let decoded = match decode_seed(&palette.seed) {
        Ok(decoded) => decoded,
        Err(e) => {
            result.add_error(ValidationError::with_path(
                ErrorCode::MalformedSeed,
                e.to_string(),
                "seed",
            ));
            return (result, None);
        }
    };

    validate_coeffs(&decoded.coeffs, &mut result);
    validate_globals(&decoded.globals, &mut result);

    if result.is_ok() {
        (result, Some((decoded.coeffs, decoded.globals)))
    } else {
        (result, None)
    }
}

/// Palettes split into the usable set and the corrupted set.
#[derive(Debug, Clone, Default)]
pub struct PreparedPalettes {
    /// Valid palettes in input order.
    pub valid: Vec<PaletteWithCoeffs>,
    /// Rejected palettes in input order.
    pub corrupted: Vec<CorruptedPalette>,
}

impl PreparedPalettes {
    pub fn corrupted_count(&self) -> usize {
        self.corrupted.len()
    }
}

/// Decodes and validates every palette, isolating failures per item.
pub fn prepare_palettes(palettes: Vec<StagedPalette>) -> PreparedPalettes {
    let mut prepared = PreparedPalettes::default();

    for palette in palettes {
        match prepare_palette(palette) {
            Ok(item) => prepared.valid.push(item),
            Err(corrupted) => {
                warn!(
                    id = corrupted.id.as_str(),
                    errors = corrupted.errors.len(),
                    "Skipping corrupted palette"
                );
                prepared.corrupted.push(corrupted);
            }
        }
    }

    prepared
}

/// Decodes and validates a single palette.
pub fn prepare_palette(palette: StagedPalette) -> Result<PaletteWithCoeffs, CorruptedPalette> {
    match check_palette(&palette) {
        (_, Some((coeffs, globals))) => Ok(PaletteWithCoeffs {
            palette,
            coeffs,
            globals,
        }),
        (result, None) => Err(CorruptedPalette {
            id: palette.id,
            errors: result.errors,
        }),
    }
}
