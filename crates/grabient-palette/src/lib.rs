//! Grabient Palette Library
//!
//! Cosine gradient palettes are stored as compact seed strings that decode to
//! a 4x4 coefficient matrix. This crate provides the model, the seed codec,
//! validation, similarity deduplication and tag derivation used when refining
//! staged palettes before they are promoted to the public catalog.
//!
//! # Example
//!
//! ```
//! use grabient_palette::{
//!     encode_seed, refine, render_hex, CosineCoeffs, Globals, RefineOptions, StagedPalette,
//!     DEFAULT_STEPS,
//! };
//!
//! let coeffs = CosineCoeffs::default();
//! let staged = |id: &str, theme: &str| StagedPalette {
//!     id: id.to_string(),
//!     seed: encode_seed(&coeffs, &Globals::IDENTITY),
//!     colors: render_hex(&coeffs, DEFAULT_STEPS),
//!     themes: vec![theme.to_string()],
//!     tag: String::new(),
//! };
//!
//! let result = refine(
//!     vec![staged("a", "rainbow"), staged("b", "spectrum")],
//!     &RefineOptions::default(),
//! );
//!
//! assert_eq!(result.unique.len(), 1);
//! assert_eq!(result.duplicate_count, 1);
//! assert_eq!(result.unique[0].palette.themes, vec!["rainbow", "spectrum"]);
//! ```
//!
//! # Modules
//!
//! - [`coeffs`]: Coefficient matrix, globals and gradient sampling
//! - [`color`]: RGBA color with hex and HSV conversions
//! - [`dedup`]: Greedy deduplication and the page-level `refine` pipeline
//! - [`embed`]: Embedding text assembly
//! - [`error`]: Error and warning types
//! - [`hash`]: Canonical hashing of palette sets
//! - [`palette`]: Staged palette records and cluster types
//! - [`seed`]: Seed string codec
//! - [`similarity`]: Feature vectors and distance
//! - [`tags`]: Tag derivation
//! - [`validation`]: Palette validity gate

pub mod coeffs;
pub mod color;
pub mod dedup;
pub mod embed;
pub mod error;
pub mod hash;
pub mod palette;
pub mod seed;
pub mod similarity;
pub mod tags;
pub mod validation;

// Re-export commonly used types at the crate root
pub use coeffs::{apply_globals, cosine_gradient, render_hex, CosineCoeffs, Globals, DEFAULT_STEPS};
pub use color::Color;
pub use dedup::{
    deduplicate, merge_themes, passthrough, refine, sort_by_dupes, DedupResult, RefineOptions,
    RefineResult, DEFAULT_THRESHOLD, MAX_THRESHOLD, MIN_THRESHOLD,
};
pub use embed::{assemble_embed_text, embed_text};
pub use error::{
    ErrorCode, PaletteError, SeedError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::palette_set_hash;
pub use palette::{CorruptedPalette, PaletteWithCoeffs, PaletteWithDupes, StagedPalette};
pub use seed::{decode_seed, encode_seed, DecodedSeed};
pub use similarity::{coeff_distance, flatten_coeffs, FeatureVector, FEATURE_LEN};
pub use tags::{analyze, emojis, tags_array, PaletteTags};
pub use validation::{
    is_valid_palette_coeffs, is_valid_palette_colors, prepare_palette, prepare_palettes,
    validate_palette, PreparedPalettes,
};
