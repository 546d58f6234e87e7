//! Error types for palette validation and processing.

use thiserror::Error;

/// Error codes for palette validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// P001: Palette has no colors
    EmptyColors,
    /// P002: A color entry is not a valid hex color
    MalformedColor,
    /// P003: A coefficient is NaN or infinite
    NonFiniteCoefficient,
    /// P004: Seed string could not be decoded
    MalformedSeed,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "P001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::EmptyColors => "P001",
            ErrorCode::MalformedColor => "P002",
            ErrorCode::NonFiniteCoefficient => "P003",
            ErrorCode::MalformedSeed => "P004",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for palette validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: The same theme appears more than once in one palette
    RepeatedTheme,
    /// W002: Palette has neither themes nor a tag
    MissingLabels,
    /// W003: A global modifier in the seed is NaN or infinite
    NonFiniteGlobal,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::RepeatedTheme => "W001",
            WarningCode::MissingLabels => "W002",
            WarningCode::NonFiniteGlobal => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Path to the problematic field (e.g., "colors\[2\]").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a field path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// Path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a field path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Errors raised while decoding a seed string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The seed is not URL-safe base64.
    #[error("seed is not valid base64: {0}")]
    Base64(String),

    /// The decoded payload has the wrong size.
    #[error("seed payload is {actual} bytes, expected {expected}")]
    Length { expected: usize, actual: usize },

    /// The payload carries an unknown format version.
    #[error("unsupported seed version {0}")]
    UnsupportedVersion(u8),
}

/// Top-level error type for palette operations.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// Seed decoding failed.
    #[error("seed decode error: {0}")]
    Seed(#[from] SeedError),

    /// Threshold is outside the accepted range.
    #[error("threshold {value} is outside [{min}, {max}]")]
    InvalidThreshold { value: f64, min: f64, max: f64 },

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Result of palette validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Creates a failed validation result.
    pub fn failure(errors: Vec<ValidationError>) -> Self {
        Self {
            ok: false,
            errors,
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Returns true if any error carries the given code.
    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::EmptyColors.code(), "P001");
        assert_eq!(ErrorCode::MalformedSeed.to_string(), "P004");
        assert_eq!(WarningCode::MissingLabels.code(), "W002");
        assert_eq!(WarningCode::NonFiniteGlobal.code(), "W003");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::with_path(ErrorCode::MalformedColor, "bad hex", "colors[1]");
        assert_eq!(err.to_string(), "P002: bad hex (at colors[1])");

        let err = ValidationError::new(ErrorCode::EmptyColors, "no colors");
        assert_eq!(err.to_string(), "P001: no colors");
    }

    #[test]
    fn test_add_error_flips_ok() {
        let mut result = ValidationResult::default();
        assert!(result.is_ok());
        result.add_warning(ValidationWarning::new(WarningCode::RepeatedTheme, "dup"));
        assert!(result.is_ok());
        result.add_error(ValidationError::new(ErrorCode::NonFiniteCoefficient, "nan"));
        assert!(!result.is_ok());
        assert!(result.has_error(ErrorCode::NonFiniteCoefficient));
        assert!(!result.has_error(ErrorCode::EmptyColors));
    }
}
