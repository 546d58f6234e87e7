//! Greedy single-pass palette deduplication.
//!
//! Palettes are processed in input order. Each one is compared against the
//! representatives collected so far, first to last, and merged into the first
//! representative closer than the threshold. Otherwise it becomes a new
//! representative. The grouping is order dependent and not transitive: two
//! palettes close to the same representative may be far from each other.
//!
//! Cost is O(n * k) where k is the number of representatives so far, O(n²)
//! when nothing merges.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PaletteError;
use crate::palette::{CorruptedPalette, PaletteWithCoeffs, PaletteWithDupes, StagedPalette};
use crate::similarity::{coeff_distance, flatten_coeffs};
use crate::validation::prepare_palettes;

/// Default similarity cutoff.
pub const DEFAULT_THRESHOLD: f64 = 0.7;
/// Smallest threshold accepted by [`RefineOptions::validate`].
pub const MIN_THRESHOLD: f64 = 0.05;
/// Largest threshold accepted by [`RefineOptions::validate`].
pub const MAX_THRESHOLD: f64 = 2.0;

/// Output of a deduplication pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DedupResult {
    /// Representatives in the order they were first seen.
    pub unique: Vec<PaletteWithDupes>,
    /// Number of palettes merged into a representative.
    pub duplicate_count: usize,
}

/// Merges palettes whose flattened coefficients are closer than `threshold`.
///
/// The first representative (lowest index) under the threshold wins, not the
/// closest one. A threshold of 0 still scans and merges nothing, since the
/// comparison is strict.
pub fn deduplicate(palettes: Vec<PaletteWithCoeffs>, threshold: f64) -> DedupResult {
    let mut result = DedupResult::default();

    for item in palettes {
        let vector = flatten_coeffs(&item.coeffs);
        let found = result
            .unique
            .iter()
            .position(|rep| coeff_distance(&rep.vector, &vector) < threshold);

        match found {
            Some(idx) => {
                let rep = &mut result.unique[idx];
                debug!(
                    duplicate = item.id(),
                    representative = rep.id(),
                    "Merging palette"
                );
                merge_themes(&mut rep.palette.themes, &item.palette.themes);
                rep.duplicates.push(item);
                result.duplicate_count += 1;
            }
            None => result.unique.push(PaletteWithDupes::representative(item)),
        }
    }

    debug!(
        unique = result.unique.len(),
        duplicates = result.duplicate_count,
        threshold,
        "Deduplication pass complete"
    );
    result
}

/// Wraps every palette as its own representative without comparing anything.
pub fn passthrough(palettes: Vec<PaletteWithCoeffs>) -> DedupResult {
    DedupResult {
        unique: palettes
            .into_iter()
            .map(PaletteWithDupes::representative)
            .collect(),
        duplicate_count: 0,
    }
}

/// Appends themes from `incoming` not already in `themes`, keeping order.
pub fn merge_themes(themes: &mut Vec<String>, incoming: &[String]) {
    for theme in incoming {
        if !themes.contains(theme) {
            themes.push(theme.clone());
        }
    }
}

/// Stable sort of representatives by duplicate count, largest first.
///
/// Presentation only; the grouping itself is unchanged.
pub fn sort_by_dupes(unique: &mut [PaletteWithDupes]) {
    unique.sort_by(|a, b| b.duplicates.len().cmp(&a.duplicates.len()));
}

/// Caller-tunable refinement settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefineOptions {
    /// Similarity cutoff on the flattened coefficient distance.
    pub threshold: f64,
    /// When false, no comparison is made and every palette is kept.
    pub enable_dedup: bool,
    /// Reorder representatives by duplicate count for display.
    pub sort_by_dupes: bool,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            enable_dedup: true,
            sort_by_dupes: false,
        }
    }
}

impl RefineOptions {
    /// Checks that the threshold is finite and within the supported range.
    pub fn validate(&self) -> Result<(), PaletteError> {
        if !self.threshold.is_finite()
            || self.threshold < MIN_THRESHOLD
            || self.threshold > MAX_THRESHOLD
        {
            return Err(PaletteError::InvalidThreshold {
                value: self.threshold,
                min: MIN_THRESHOLD,
                max: MAX_THRESHOLD,
            });
        }
        Ok(())
    }
}

/// Result of refining one page of staged palettes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefineResult {
    pub unique: Vec<PaletteWithDupes>,
    pub duplicate_count: usize,
    pub corrupted: Vec<CorruptedPalette>,
}

impl RefineResult {
    pub fn corrupted_count(&self) -> usize {
        self.corrupted.len()
    }
}

/// Validates, deduplicates and orders a page of staged palettes.
///
/// Corrupted palettes are dropped and reported; they never abort the page.
pub fn refine(palettes: Vec<StagedPalette>, options: &RefineOptions) -> RefineResult {
    let prepared = prepare_palettes(palettes);

    let DedupResult {
        mut unique,
        duplicate_count,
    } = if options.enable_dedup {
        deduplicate(prepared.valid, options.threshold)
    } else {
        passthrough(prepared.valid)
    };

    if options.sort_by_dupes {
        sort_by_dupes(&mut unique);
    }

    RefineResult {
        unique,
        duplicate_count,
        corrupted: prepared.corrupted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coeffs::CosineCoeffs;
    use pretty_assertions::assert_eq;

    fn palette(id: &str, themes: &[&str], red_offset: f64) -> PaletteWithCoeffs {
        let staged = StagedPalette {
            id: id.to_string(),
            seed: String::new(),
            colors: Vec::new(),
            themes: themes.iter().map(|t| t.to_string()).collect(),
            tag: String::new(),
        };
        let mut coeffs = CosineCoeffs::default();
        coeffs.0[0][0] = red_offset;
        PaletteWithCoeffs::new(staged, coeffs)
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_close_pair_merges() {
        let p1 = palette("p1", &["dawn"], 0.5);
        let p2 = palette("p2", &["sunrise"], 0.55);
        let result = deduplicate(vec![p1, p2.clone()], 0.1);

        assert_eq!(result.unique.len(), 1);
        assert_eq!(result.duplicate_count, 1);
        assert_eq!(result.unique[0].palette.themes, strings(&["dawn", "sunrise"]));
        assert_eq!(result.unique[0].duplicates, vec![p2]);
    }

    #[test]
    fn test_duplicates_do_not_extend_cluster() {
        // c is close to the absorbed b but not to the representative a.
        let a = palette("a", &[], 0.0);
        let b = palette("b", &[], 0.5);
        let c = palette("c", &[], 0.9);
        let result = deduplicate(vec![a, b, c], 0.6);

        assert_eq!(result.unique.len(), 2);
        assert_eq!(result.unique[0].duplicate_ids(), vec!["b"]);
        assert_eq!(result.unique[1].id(), "c");
    }

    #[test]
    fn test_earliest_representative_wins() {
        let a = palette("a", &[], 0.0);
        let b = palette("b", &[], 1.0);
        let c = palette("c", &[], 0.55);
        let result = deduplicate(vec![a, b, c], 0.6);

        let ids: Vec<&str> = result.unique.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(result.unique[0].duplicate_ids(), vec!["c"]);
        assert!(result.unique[1].duplicates.is_empty());
    }

    #[test]
    fn test_zero_threshold_merges_nothing() {
        let a = palette("a", &[], 0.5);
        let b = palette("b", &[], 0.5);
        let result = deduplicate(vec![a, b], 0.0);
        assert_eq!(result.unique.len(), 2);
        assert_eq!(result.duplicate_count, 0);
    }

    #[test]
    fn test_passthrough_keeps_identical_palettes() {
        let a = palette("a", &["x"], 0.5);
        let b = palette("b", &["y"], 0.5);
        let result = passthrough(vec![a, b]);
        assert_eq!(result.unique.len(), 2);
        assert_eq!(result.duplicate_count, 0);
        assert_eq!(result.unique[0].palette.themes, strings(&["x"]));
    }

    #[test]
    fn test_merge_themes_preserves_order() {
        let mut themes = strings(&["sunset", "warm"]);
        merge_themes(&mut themes, &strings(&["ocean", "warm", "sunset", "night"]));
        assert_eq!(themes, strings(&["sunset", "warm", "ocean", "night"]));
    }

    #[test]
    fn test_sort_by_dupes_is_stable() {
        let items = vec![
            palette("a", &[], 0.0),
            palette("b", &[], 5.0),
            palette("b2", &[], 5.01),
            palette("c", &[], 10.0),
            palette("d", &[], 15.0),
            palette("d2", &[], 15.01),
        ];
        let mut result = deduplicate(items, 0.1);
        sort_by_dupes(&mut result.unique);
        let ids: Vec<&str> = result.unique.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_options_validate() {
        assert!(RefineOptions::default().validate().is_ok());
        for bad in [0.0, 0.01, 2.5, f64::NAN, f64::INFINITY] {
            let options = RefineOptions {
                threshold: bad,
                ..RefineOptions::default()
            };
            assert!(
                matches!(options.validate(), Err(PaletteError::InvalidThreshold { .. })),
                "expected rejection for {}",
                bad
            );
        }
    }

    #[test]
    fn test_options_deserialize_defaults() {
        let options: RefineOptions = serde_json::from_str(r#"{"sort_by_dupes": true}"#).unwrap();
        assert_eq!(options.threshold, DEFAULT_THRESHOLD);
        assert!(options.enable_dedup);
        assert!(options.sort_by_dupes);
    }
}
