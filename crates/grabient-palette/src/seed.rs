//! Seed string codec.
//!
//! A seed is URL-safe base64 (no padding) over a 65-byte payload:
//!
//! ```text
//! [version: u8 = 1]
//! [12 x f32 LE]  R, G, B of offset, amplitude, frequency, phase rows
//! [4 x f32 LE]   exposure, contrast, frequency, phase globals
//! ```
//!
//! Alpha is not stored; decoding restores it as 1.0. Non-finite floats decode
//! without error and are left for the validity gate to reject.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::coeffs::{CosineCoeffs, Globals};
use crate::error::SeedError;

/// Current payload format version.
pub const SEED_VERSION: u8 = 1;

const FLOAT_COUNT: usize = 16;
const PAYLOAD_LEN: usize = 1 + FLOAT_COUNT * 4;

/// Coefficients and globals recovered from a seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedSeed {
    pub coeffs: CosineCoeffs,
    pub globals: Globals,
}

/// Encodes coefficients and globals into a seed string.
///
/// Values are stored as `f32`, so decoding returns the nearest `f32`.
pub fn encode_seed(coeffs: &CosineCoeffs, globals: &Globals) -> String {
    let mut payload = Vec::with_capacity(PAYLOAD_LEN);
    payload.push(SEED_VERSION);
    for row in coeffs.rows() {
        for v in &row[..3] {
            payload.extend_from_slice(&(*v as f32).to_le_bytes());
        }
    }
    for v in &globals.0 {
        payload.extend_from_slice(&(*v as f32).to_le_bytes());
    }
    URL_SAFE_NO_PAD.encode(payload)
}

/// Decodes a seed string exactly as given; surrounding whitespace is an error.
pub fn decode_seed(seed: &str) -> Result<DecodedSeed, SeedError> {
    let payload = URL_SAFE_NO_PAD
        .decode(seed)
        .map_err(|e| SeedError::Base64(e.to_string()))?;

    if payload.len() != PAYLOAD_LEN {
        return Err(SeedError::Length {
            expected: PAYLOAD_LEN,
            actual: payload.len(),
        });
    }
    if payload[0] != SEED_VERSION {
        return Err(SeedError::UnsupportedVersion(payload[0]));
    }

    let mut floats = [0.0f64; FLOAT_COUNT];
    for (i, chunk) in payload[1..].chunks_exact(4).enumerate() {
        let bytes = [chunk[0], chunk[1], chunk[2], chunk[3]];
        floats[i] = f32::from_le_bytes(bytes) as f64;
    }

    let mut rows = [[1.0f64; 4]; 4];
    for (r, row) in rows.iter_mut().enumerate() {
        row[..3].copy_from_slice(&floats[r * 3..r * 3 + 3]);
    }

    Ok(DecodedSeed {
        coeffs: CosineCoeffs(rows),
        globals: Globals([floats[12], floats[13], floats[14], floats[15]]),
    })
}
