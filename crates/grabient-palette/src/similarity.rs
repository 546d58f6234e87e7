//! Feature vectors and the palette distance metric.
//!
//! The metric is plain Euclidean distance over the raw R, G, B coefficients.
//! There is no perceptual weighting; callers wanting different similarity
//! semantics need a different projection or a weighted variant.

use crate::coeffs::CosineCoeffs;

/// Length of a flattened coefficient vector (4 rows x 3 channels).
pub const FEATURE_LEN: usize = 12;

/// Row-major R, G, B entries of the four coefficient rows.
pub type FeatureVector = [f64; FEATURE_LEN];

/// Projects coefficients onto the 12-dimensional feature space.
///
/// Order: row0.R, row0.G, row0.B, row1.R, ..., row3.B. Alpha is dropped.
pub fn flatten_coeffs(coeffs: &CosineCoeffs) -> FeatureVector {
    let mut out = [0.0; FEATURE_LEN];
    for (r, row) in coeffs.rows().iter().enumerate() {
        out[r * 3..r * 3 + 3].copy_from_slice(&row[..3]);
    }
    out
}

/// Euclidean distance between two feature vectors.
#[inline]
pub fn coeff_distance(a: &FeatureVector, b: &FeatureVector) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
