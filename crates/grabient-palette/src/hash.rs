//! Canonical hashing of palette inputs.
//!
//! Reports carry the hash of the palette set they were computed from so two
//! runs can be compared without diffing the input files.

use crate::error::PaletteError;
use crate::palette::StagedPalette;

/// Computes the BLAKE3 hash of a palette set.
///
/// The set is serialized to a `serde_json::Value` first so object keys come
/// out sorted. Palette order is significant.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
pub fn palette_set_hash(palettes: &[StagedPalette]) -> Result<String, PaletteError> {
    let value = serde_json::to_value(palettes)?;
    let canonical = serde_json::to_vec(&value)?;
    Ok(blake3::hash(&canonical).to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(id: &str) -> StagedPalette {
        StagedPalette {
            id: id.to_string(),
            seed: "seed".to_string(),
            colors: vec!["#000000".to_string()],
            themes: vec!["night".to_string()],
            tag: String::new(),
        }
    }

    #[test]
    fn test_hash_stability() {
        let set = vec![palette("a"), palette("b")];
        let hash1 = palette_set_hash(&set).unwrap();
        let hash2 = palette_set_hash(&set).unwrap();
        assert_eq!(hash1, hash2, "hash should be stable across calls");
        assert_eq!(hash1.len(), 64, "hash should be 64 hex characters");
    }

    #[test]
    fn test_hash_depends_on_content() {
        let base = vec![palette("a")];
        let mut retagged = base.clone();
        retagged[0].themes.push("dusk".to_string());
        assert_ne!(
            palette_set_hash(&base).unwrap(),
            palette_set_hash(&retagged).unwrap()
        );
    }

    #[test]
    fn test_hash_depends_on_order() {
        let ab = vec![palette("a"), palette("b")];
        let ba = vec![palette("b"), palette("a")];
        assert_ne!(palette_set_hash(&ab).unwrap(), palette_set_hash(&ba).unwrap());
    }
}
