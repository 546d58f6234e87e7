//! Loading staged palettes from disk.
//!
//! Two formats are recognized by extension: `.json` holds either an array of
//! palettes or an object with a `palettes` array (the shape of one page of a
//! paginated export), and `.jsonl` holds one palette per line.

use grabient_palette::StagedPalette;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::commands::json_output::error_codes;

/// Recognized JSON extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Recognized JSON Lines extensions.
pub const JSONL_EXTENSIONS: &[&str] = &["jsonl", "ndjson"];

/// Palettes loaded from one file.
#[derive(Debug)]
pub struct LoadResult {
    /// Palettes in file order.
    pub palettes: Vec<StagedPalette>,
    /// BLAKE3 hash of the file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur while loading palettes.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { line: Option<usize>, message: String },
}

impl InputError {
    /// Stable CLI error code for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::FileRead { .. } => error_codes::FILE_READ,
            InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
            InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(
                    f,
                    "unknown file extension '.{}' (expected .json or .jsonl)",
                    ext
                ),
                None => write!(f, "file has no extension (expected .json or .jsonl)"),
            },
            InputError::JsonParse {
                line: Some(line),
                message,
            } => write!(f, "JSON parse error on line {}: {}", line, message),
            InputError::JsonParse { line: None, message } => {
                write!(f, "JSON parse error: {}", message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteDocument {
    List(Vec<StagedPalette>),
    Page { palettes: Vec<StagedPalette> },
}

/// Loads staged palettes from a `.json` or `.jsonl` file.
pub fn load_palettes(path: &Path) -> Result<LoadResult, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let is_json = matches!(&extension, Some(e) if JSON_EXTENSIONS.contains(&e.as_str()));
    let is_jsonl = matches!(&extension, Some(e) if JSONL_EXTENSIONS.contains(&e.as_str()));
    if !is_json && !is_jsonl {
        return Err(InputError::UnknownExtension { extension });
    }

    let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let palettes = if is_json {
        parse_json(&content)?
    } else {
        parse_jsonl(&content)?
    };

    Ok(LoadResult {
        palettes,
        source_hash,
    })
}

fn parse_json(content: &str) -> Result<Vec<StagedPalette>, InputError> {
    let document: PaletteDocument =
        serde_json::from_str(content).map_err(|e| InputError::JsonParse {
            line: None,
            message: e.to_string(),
        })?;
    Ok(match document {
        PaletteDocument::List(palettes) => palettes,
        PaletteDocument::Page { palettes } => palettes,
    })
}

fn parse_jsonl(content: &str) -> Result<Vec<StagedPalette>, InputError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|e| InputError::JsonParse {
                line: Some(i + 1),
                message: e.to_string(),
            })
        })
        .collect()
}
