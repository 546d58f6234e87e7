//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`. Output is a single pretty-printed document
//! on stdout; logs go to stderr.

use grabient_palette::{
    embed_text, emojis, tags_array, CorruptedPalette, PaletteTags, PaletteWithDupes,
    RefineOptions, RefineResult, ValidationError, ValidationWarning,
};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX for CLI-level errors, or passes through validation error codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// Invalid refine configuration
    pub const INVALID_CONFIG: &str = "CLI_004";
    /// Seed could not be decoded
    pub const SEED_DECODE: &str = "CLI_005";
    /// Coefficients could not be parsed
    pub const COEFFS_PARSE: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "P002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl From<&ValidationError> for JsonError {
    fn from(err: &ValidationError) -> Self {
        Self {
            code: err.code.code().to_string(),
            message: err.message.clone(),
            path: err.path.clone(),
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}

/// A palette excluded from refinement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonCorrupted {
    pub id: String,
    pub errors: Vec<JsonError>,
}

impl From<&CorruptedPalette> for JsonCorrupted {
    fn from(corrupted: &CorruptedPalette) -> Self {
        Self {
            id: corrupted.id.clone(),
            errors: corrupted.errors.iter().map(JsonError::from).collect(),
        }
    }
}

/// One cluster in the refine output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonCluster {
    pub id: String,
    pub seed: String,
    pub tag: String,
    /// Themes after merging the duplicates' themes.
    pub themes: Vec<String>,
    pub colors: Vec<String>,
    pub duplicates: Vec<String>,
}

impl From<&PaletteWithDupes> for JsonCluster {
    fn from(rep: &PaletteWithDupes) -> Self {
        Self {
            id: rep.palette.id.clone(),
            seed: rep.palette.seed.clone(),
            tag: rep.palette.tag.clone(),
            themes: rep.palette.themes.clone(),
            colors: rep.palette.colors.clone(),
            duplicates: rep.duplicate_ids().iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Counts reported by `refine`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefineCounts {
    pub input: usize,
    pub corrupted: usize,
    pub unique: usize,
    pub duplicates: usize,
}

/// Output of `refine --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefineOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_hash: Option<String>,
    /// Hash of the parsed palette set, independent of file formatting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RefineOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<RefineCounts>,
    pub errors: Vec<JsonError>,
    pub corrupted: Vec<JsonCorrupted>,
    pub clusters: Vec<JsonCluster>,
}

impl RefineOutput {
    /// Builds a successful report from a refine result.
    pub fn success(
        input_hash: String,
        set_hash: String,
        options: RefineOptions,
        input: usize,
        result: &RefineResult,
    ) -> Self {
        Self {
            success: true,
            input_hash: Some(input_hash),
            set_hash: Some(set_hash),
            options: Some(options),
            counts: Some(RefineCounts {
                input,
                corrupted: result.corrupted_count(),
                unique: result.unique.len(),
                duplicates: result.duplicate_count,
            }),
            errors: Vec::new(),
            corrupted: result.corrupted.iter().map(JsonCorrupted::from).collect(),
            clusters: result.unique.iter().map(JsonCluster::from).collect(),
        }
    }

    /// Builds a failure report.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            input_hash: None,
            set_hash: None,
            options: None,
            counts: None,
            errors,
            corrupted: Vec::new(),
            clusters: Vec::new(),
        }
    }
}

/// Per-palette entry in `validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonPaletteValidation {
    pub id: String,
    pub ok: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
}

/// Output of `validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_hash: Option<String>,
    pub valid: usize,
    pub corrupted: usize,
    pub errors: Vec<JsonError>,
    pub palettes: Vec<JsonPaletteValidation>,
}

/// Output of `tags --json`.
///
/// `tags` is `None` when the seed could not be analyzed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagsOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<PaletteTags>,
    pub emojis: Vec<String>,
    pub tags_array: Vec<String>,
    pub embed_text: String,
    pub errors: Vec<JsonError>,
}

impl TagsOutput {
    pub fn analyzed(tags: PaletteTags, themes: &[String]) -> Self {
        Self {
            success: true,
            emojis: emojis(&tags),
            tags_array: tags_array(&tags),
            embed_text: embed_text(&tags, themes),
            tags: Some(tags),
            errors: Vec::new(),
        }
    }

    pub fn unavailable(error: JsonError) -> Self {
        Self {
            success: false,
            tags: None,
            emojis: Vec::new(),
            tags_array: Vec::new(),
            embed_text: String::new(),
            errors: vec![error],
        }
    }
}

/// Output of `render --json` and `seed decode --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coeffs: Option<grabient_palette::CosineCoeffs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub globals: Option<grabient_palette::Globals>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub colors: Vec<String>,
    pub errors: Vec<JsonError>,
}

impl SeedOutput {
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            seed: None,
            coeffs: None,
            globals: None,
            colors: Vec::new(),
            errors: vec![error],
        }
    }
}

/// Serializes any output document for printing.
pub fn to_pretty_json<T: Serialize>(output: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(output)?)
}
