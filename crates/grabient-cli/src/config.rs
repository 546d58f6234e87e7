//! Refinement settings from a config file and command-line overrides.
//!
//! Precedence, lowest first: built-in defaults, the JSON config file,
//! command-line flags.

use anyhow::{Context, Result};
use grabient_palette::RefineOptions;
use std::path::Path;

/// Settings given explicitly on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionOverrides {
    pub threshold: Option<f64>,
    pub no_dedup: bool,
    pub sort_by_dupes: bool,
}

/// Loads refine options from an optional JSON file.
pub fn load_config(path: Option<&Path>) -> Result<RefineOptions> {
    let Some(path) = path else {
        return Ok(RefineOptions::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let options: RefineOptions = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(options)
}

/// Applies command-line overrides on top of loaded options.
pub fn apply_overrides(mut options: RefineOptions, overrides: &OptionOverrides) -> RefineOptions {
    if let Some(threshold) = overrides.threshold {
        options.threshold = threshold;
    }
    if overrides.no_dedup {
        options.enable_dedup = false;
    }
    if overrides.sort_by_dupes {
        options.sort_by_dupes = true;
    }
    options
}

/// Resolves and validates the effective options.
pub fn resolve_options(config: Option<&Path>, overrides: &OptionOverrides) -> Result<RefineOptions> {
    let options = apply_overrides(load_config(config)?, overrides);
    options.validate()?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grabient_palette::DEFAULT_THRESHOLD;

    #[test]
    fn test_defaults_without_file() {
        let options = resolve_options(None, &OptionOverrides::default()).unwrap();
        assert_eq!(options, RefineOptions::default());
        assert_eq!(options.threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("refine.json");
        std::fs::write(&path, r#"{"threshold": 0.3, "sort_by_dupes": true}"#).unwrap();

        let options = resolve_options(Some(&path), &OptionOverrides::default()).unwrap();
        assert_eq!(options.threshold, 0.3);
        assert!(options.sort_by_dupes);
        assert!(options.enable_dedup);

        let overrides = OptionOverrides {
            threshold: Some(1.5),
            no_dedup: true,
            sort_by_dupes: false,
        };
        let options = resolve_options(Some(&path), &overrides).unwrap();
        assert_eq!(options.threshold, 1.5);
        assert!(!options.enable_dedup);
        assert!(options.sort_by_dupes);
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let overrides = OptionOverrides {
            threshold: Some(5.0),
            ..OptionOverrides::default()
        };
        let err = resolve_options(None, &overrides).unwrap_err();
        assert!(err.to_string().contains("outside"), "got: {}", err);
    }

    #[test]
    fn test_bad_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("refine.json");
        std::fs::write(&path, "{ threshold: }").unwrap();
        let err = resolve_options(Some(&path), &OptionOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
