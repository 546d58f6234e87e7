//! Color utilities for palette rendering and analysis.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Accepted hex forms: `rgb`, `rrggbb`, `rrggbbaa`, optional leading `#`.
const HEX_PATTERN: &str = r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$";

static HEX_REGEX: OnceLock<Regex> = OnceLock::new();

fn hex_regex() -> &'static Regex {
    HEX_REGEX.get_or_init(|| Regex::new(HEX_PATTERN).expect("invalid regex pattern"))
}

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed hex color: {0:?}")]
pub struct ColorParseError(pub String);

/// RGBA color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from 8-bit RGB.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::rgb(
            rgb[0] as f64 / 255.0,
            rgb[1] as f64 / 255.0,
            rgb[2] as f64 / 255.0,
        )
    }

    /// Parse a hex color (`#rgb`, `#rrggbb` or `#rrggbbaa`, `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim();
        if !hex_regex().is_match(hex) {
            return Err(ColorParseError(hex.to_string()));
        }
        let digits = hex.trim_start_matches('#');

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError(hex.to_string()))
        };

        match digits.len() {
            3 => {
                let mut rgb = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    let v = channel(&c.to_string())?;
                    rgb[i] = v * 17;
                }
                Ok(Self::from_rgb8(rgb))
            }
            6 | 8 => {
                let r = channel(&digits[0..2])?;
                let g = channel(&digits[2..4])?;
                let b = channel(&digits[4..6])?;
                let mut color = Self::from_rgb8([r, g, b]);
                if digits.len() == 8 {
                    color.a = channel(&digits[6..8])? as f64 / 255.0;
                }
                Ok(color)
            }
            _ => Err(ColorParseError(hex.to_string())),
        }
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
        ]
    }

    /// Lowercase `#rrggbb` representation (alpha dropped).
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Relative luminance (Rec. 709 weights on the stored components).
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Convert to HSV values.
    /// Returns (hue in degrees 0-360, saturation 0-1, value 0-1).
    pub fn to_hsv(&self) -> (f64, f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let v = max;

        if delta < 1e-10 {
            return (0.0, 0.0, v);
        }

        let s = delta / max;

        let h = if (self.r - max).abs() < 1e-10 {
            (self.g - self.b) / delta
        } else if (self.g - max).abs() < 1e-10 {
            2.0 + (self.b - self.r) / delta
        } else {
            4.0 + (self.r - self.g) / delta
        };

        let h = h * 60.0;
        let h = if h < 0.0 { h + 360.0 } else { h };

        (h, s, v)
    }
}

/// Returns true if `hex` is a well-formed hex color.
pub fn is_valid_hex(hex: &str) -> bool {
    hex_regex().is_match(hex.trim())
}

/// Shortest angular distance between two hues, in degrees (0-180).
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_forms() {
        let long = Color::from_hex("#ff8800").unwrap();
        assert_eq!(long.to_rgb8(), [255, 136, 0]);

        let short = Color::from_hex("f80").unwrap();
        assert_eq!(short.to_rgb8(), [255, 136, 0]);

        let with_alpha = Color::from_hex("#FF880080").unwrap();
        assert_eq!(with_alpha.to_rgb8(), [255, 136, 0]);
        assert!((with_alpha.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        for bad in ["", "#", "#ff88", "#gg0000", "ff00000", "#ff 800", "rgb(1,2,3)"] {
            assert!(Color::from_hex(bad).is_err(), "expected error for {:?}", bad);
            assert!(!is_valid_hex(bad));
        }
    }

    #[test]
    fn test_to_hex_clamps() {
        assert_eq!(Color::rgb(1.5, -0.2, 0.5).to_hex(), "#ff0080");
    }

    #[test]
    fn test_to_hsv() {
        let (h, s, v) = Color::rgb(1.0, 0.0, 0.0).to_hsv();
        assert!(h.abs() < 1e-9);
        assert!((s - 1.0).abs() < 1e-9);
        assert!((v - 1.0).abs() < 1e-9);

        let (h, _, _) = Color::rgb(0.0, 0.0, 1.0).to_hsv();
        assert!((h - 240.0).abs() < 1e-9);

        let (_, s, v) = Color::rgb(0.5, 0.5, 0.5).to_hsv();
        assert_eq!(s, 0.0);
        assert!((v - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_hue_distance_wraps() {
        assert!((hue_distance(350.0, 10.0) - 20.0).abs() < 1e-9);
        assert!((hue_distance(0.0, 180.0) - 180.0).abs() < 1e-9);
        assert!((hue_distance(90.0, 60.0) - 30.0).abs() < 1e-9);
    }
}
