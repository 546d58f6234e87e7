//! Cosine gradient coefficient model.
//!
//! A palette is the curve `color(t) = offset + amplitude * cos(2π (frequency * t + phase))`
//! evaluated per RGB channel. The four rows of [`CosineCoeffs`] hold offset,
//! amplitude, frequency and phase; each row is `[R, G, B, A]` with alpha fixed
//! at 1.0 and carried only so every row has the same shape.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Number of samples used when rendering a palette to hex colors.
pub const DEFAULT_STEPS: usize = 11;

/// Row index of the offset vector.
pub const OFFSET: usize = 0;
/// Row index of the amplitude vector.
pub const AMPLITUDE: usize = 1;
/// Row index of the frequency vector.
pub const FREQUENCY: usize = 2;
/// Row index of the phase vector.
pub const PHASE: usize = 3;

/// 4x4 cosine gradient coefficient matrix.
///
/// Serializes as a nested array `[[r, g, b, a]; 4]`. Any other shape fails
/// to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CosineCoeffs(pub [[f64; 4]; 4]);

impl CosineCoeffs {
    /// Builds a matrix from the RGB part of each row; alpha is set to 1.0.
    pub fn from_rgb(
        offset: [f64; 3],
        amplitude: [f64; 3],
        frequency: [f64; 3],
        phase: [f64; 3],
    ) -> Self {
        let row = |v: [f64; 3]| [v[0], v[1], v[2], 1.0];
        Self([row(offset), row(amplitude), row(frequency), row(phase)])
    }

    /// Returns the rows in offset, amplitude, frequency, phase order.
    pub fn rows(&self) -> &[[f64; 4]; 4] {
        &self.0
    }

    /// Iterates over every entry, alpha included.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().flat_map(|row| row.iter().copied())
    }

    /// Evaluates the gradient at `t`, clamped to the displayable range.
    pub fn sample(&self, t: f64) -> Color {
        let rows = &self.0;
        let channel = |c: usize| {
            let v = rows[OFFSET][c]
                + rows[AMPLITUDE][c] * (TAU * (rows[FREQUENCY][c] * t + rows[PHASE][c])).cos();
            v.clamp(0.0, 1.0)
        };
        Color::rgb(channel(0), channel(1), channel(2))
    }
}

impl Default for CosineCoeffs {
    /// The classic rainbow palette.
    fn default() -> Self {
        Self::from_rgb(
            [0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
            [1.0, 1.0, 1.0],
            [0.0, 0.333, 0.667],
        )
    }
}

/// Global modifiers stored alongside the coefficients in a seed.
///
/// `[exposure, contrast, frequency, phase]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Globals(pub [f64; 4]);

impl Globals {
    /// Modifiers that leave the coefficients unchanged.
    pub const IDENTITY: Globals = Globals([0.0, 1.0, 1.0, 0.0]);

    pub fn exposure(&self) -> f64 {
        self.0[0]
    }

    pub fn contrast(&self) -> f64 {
        self.0[1]
    }

    pub fn frequency(&self) -> f64 {
        self.0[2]
    }

    pub fn phase(&self) -> f64 {
        self.0[3]
    }
}

impl Default for Globals {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Folds the global modifiers into the coefficients.
///
/// Exposure shifts the offset, contrast scales the amplitude, frequency scales
/// the frequency and phase shifts the phase. Alpha entries are left as-is.
pub fn apply_globals(coeffs: &CosineCoeffs, globals: &Globals) -> CosineCoeffs {
    let mut out = *coeffs;
    for c in 0..3 {
        out.0[OFFSET][c] += globals.exposure();
        out.0[AMPLITUDE][c] *= globals.contrast();
        out.0[FREQUENCY][c] *= globals.frequency();
        out.0[PHASE][c] += globals.phase();
    }
    out
}

/// Samples `steps` evenly spaced colors from `t = 0` to `t = 1`.
pub fn cosine_gradient(coeffs: &CosineCoeffs, steps: usize) -> Vec<Color> {
    match steps {
        0 => Vec::new(),
        1 => vec![coeffs.sample(0.0)],
        n => (0..n)
            .map(|i| coeffs.sample(i as f64 / (n - 1) as f64))
            .collect(),
    }
}

/// Renders the gradient as lowercase `#rrggbb` strings.
pub fn render_hex(coeffs: &CosineCoeffs, steps: usize) -> Vec<String> {
    cosine_gradient(coeffs, steps)
        .iter()
        .map(Color::to_hex)
        .collect()
}
