//! Staged palette records and the derived forms used during refinement.

use serde::{Deserialize, Serialize};

use crate::coeffs::{CosineCoeffs, Globals};
use crate::error::ValidationError;
use crate::similarity::{flatten_coeffs, FeatureVector};

/// A palette awaiting curation, as stored upstream.
///
/// `seed` is the source of truth; `colors` is a rendering of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedPalette {
    /// Opaque identifier.
    pub id: String,
    /// Serialized coefficients and globals.
    pub seed: String,
    /// Hex colors rendered from the seed.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Free-text theme labels, order significant.
    #[serde(default)]
    pub themes: Vec<String>,
    /// Single categorical label used when no theme exists.
    #[serde(default)]
    pub tag: String,
}

impl StagedPalette {
    /// Themes if present, otherwise the tag as a one-element list.
    pub fn labels(&self) -> Vec<&str> {
        if !self.themes.is_empty() {
            self.themes.iter().map(String::as_str).collect()
        } else if !self.tag.is_empty() {
            vec![self.tag.as_str()]
        } else {
            Vec::new()
        }
    }
}

/// A staged palette that passed validation, with its decoded coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteWithCoeffs {
    pub palette: StagedPalette,
    /// Raw coefficients as decoded from the seed. Similarity is measured on these.
    pub coeffs: CosineCoeffs,
    /// Globals as decoded from the seed. Only rendering applies them.
    pub globals: Globals,
}

impl PaletteWithCoeffs {
    pub fn new(palette: StagedPalette, coeffs: CosineCoeffs) -> Self {
        Self {
            palette,
            coeffs,
            globals: Globals::IDENTITY,
        }
    }

    pub fn id(&self) -> &str {
        &self.palette.id
    }
}

/// A cluster representative and the palettes it absorbed.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteWithDupes {
    /// The kept palette. Its `themes` accumulate the themes of every duplicate.
    pub palette: StagedPalette,
    pub coeffs: CosineCoeffs,
    pub vector: FeatureVector,
    /// Absorbed palettes in the order they were merged.
    pub duplicates: Vec<PaletteWithCoeffs>,
}

impl PaletteWithDupes {
    /// Starts a new cluster with no duplicates.
    pub fn representative(item: PaletteWithCoeffs) -> Self {
        let vector = flatten_coeffs(&item.coeffs);
        Self {
            palette: item.palette,
            coeffs: item.coeffs,
            vector,
            duplicates: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.palette.id
    }

    /// Ids of the absorbed palettes in merge order.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        self.duplicates.iter().map(|d| d.id()).collect()
    }
}

/// A palette excluded from similarity analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct CorruptedPalette {
    pub id: String,
    pub errors: Vec<ValidationError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged(themes: &[&str], tag: &str) -> StagedPalette {
        StagedPalette {
            id: "p1".to_string(),
            seed: String::new(),
            colors: Vec::new(),
            themes: themes.iter().map(|t| t.to_string()).collect(),
            tag: tag.to_string(),
        }
    }

    #[test]
    fn test_labels_prefers_themes() {
        assert_eq!(staged(&["dawn", "sky"], "warm").labels(), vec!["dawn", "sky"]);
        assert_eq!(staged(&[], "warm").labels(), vec!["warm"]);
        assert!(staged(&[], "").labels().is_empty());
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"id": "abc", "seed": "xyz"}"#;
        let palette: StagedPalette = serde_json::from_str(json).unwrap();
        assert_eq!(palette.id, "abc");
        assert!(palette.colors.is_empty());
        assert!(palette.themes.is_empty());
        assert_eq!(palette.tag, "");
    }

    #[test]
    fn test_representative_starts_empty() {
        let item = PaletteWithCoeffs::new(staged(&["dawn"], ""), CosineCoeffs::default());
        let rep = PaletteWithDupes::representative(item);
        assert!(rep.duplicates.is_empty());
        assert_eq!(rep.vector, flatten_coeffs(&CosineCoeffs::default()));
    }
}
