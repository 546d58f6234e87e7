//! Descriptive tags derived from cosine coefficients.
//!
//! Everything here is a pure function of the coefficient matrix. The
//! gradient is sampled at [`ANALYSIS_STEPS`] points and each sample is
//! classified in HSV space.

use serde::{Deserialize, Serialize};

use crate::coeffs::{cosine_gradient, CosineCoeffs, FREQUENCY};
use crate::color::{hue_distance, Color};

/// Samples taken from the gradient for analysis.
pub const ANALYSIS_STEPS: usize = 11;

/// Dominant colors reported per palette.
pub const MAX_DOMINANT_COLORS: usize = 3;

// Below this value a sample reads as black.
const BLACK_VALUE: f64 = 0.15;
// Below this saturation a sample reads as white or gray.
const ACHROMATIC_SATURATION: f64 = 0.12;
const WHITE_VALUE: f64 = 0.85;

/// Named color bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Black,
    White,
    Gray,
    Red,
    Orange,
    Brown,
    Yellow,
    Green,
    Teal,
    Blue,
    Purple,
    Pink,
}

impl ColorName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Black => "black",
            ColorName::White => "white",
            ColorName::Gray => "gray",
            ColorName::Red => "red",
            ColorName::Orange => "orange",
            ColorName::Brown => "brown",
            ColorName::Yellow => "yellow",
            ColorName::Green => "green",
            ColorName::Teal => "teal",
            ColorName::Blue => "blue",
            ColorName::Purple => "purple",
            ColorName::Pink => "pink",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ColorName::Black => "🖤",
            ColorName::White => "🤍",
            ColorName::Gray => "🩶",
            ColorName::Red => "❤️",
            ColorName::Orange => "🧡",
            ColorName::Brown => "🤎",
            ColorName::Yellow => "💛",
            ColorName::Green => "💚",
            ColorName::Teal => "🩵",
            ColorName::Blue => "💙",
            ColorName::Purple => "💜",
            ColorName::Pink => "🩷",
        }
    }

    /// Buckets a color by HSV.
    pub fn classify(color: &Color) -> Self {
        let (h, s, v) = color.to_hsv();
        if v < BLACK_VALUE {
            return ColorName::Black;
        }
        if s < ACHROMATIC_SATURATION {
            return if v > WHITE_VALUE {
                ColorName::White
            } else {
                ColorName::Gray
            };
        }
        match h {
            h if !(15.0..345.0).contains(&h) => ColorName::Red,
            h if h < 40.0 && v < 0.55 => ColorName::Brown,
            h if h < 40.0 => ColorName::Orange,
            h if h < 65.0 => ColorName::Yellow,
            h if h < 160.0 => ColorName::Green,
            h if h < 195.0 => ColorName::Teal,
            h if h < 255.0 => ColorName::Blue,
            h if h < 290.0 => ColorName::Purple,
            _ => ColorName::Pink,
        }
    }

    fn is_chromatic(&self) -> bool {
        !matches!(self, ColorName::Black | ColorName::White | ColorName::Gray)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Texture {
    Smooth,
    Wavy,
    Banded,
}

impl Texture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Texture::Smooth => "smooth",
            Texture::Wavy => "wavy",
            Texture::Banded => "banded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Warmth {
    Warm,
    Cool,
    Neutral,
}

impl Warmth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Warmth::Warm => "warm",
            Warmth::Cool => "cool",
            Warmth::Neutral => "neutral",
        }
    }

    fn emoji(&self) -> Option<&'static str> {
        match self {
            Warmth::Warm => Some("🔥"),
            Warmth::Cool => Some("❄️"),
            Warmth::Neutral => None,
        }
    }
}

/// How lightness and hue travel from one end of the gradient to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Journey {
    DarkToLight,
    LightToDark,
    Shifting,
    Cyclic,
    Steady,
}

impl Journey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Journey::DarkToLight => "dark-to-light",
            Journey::LightToDark => "light-to-dark",
            Journey::Shifting => "shifting",
            Journey::Cyclic => "cyclic",
            Journey::Steady => "steady",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    High,
    Medium,
    Low,
}

impl Contrast {
    pub fn as_str(&self) -> &'static str {
        match self {
            Contrast::High => "high-contrast",
            Contrast::Medium => "medium-contrast",
            Contrast::Low => "low-contrast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Vibrant,
    Pastel,
    Muted,
    Moody,
    Balanced,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Vibrant => "vibrant",
            Mood::Pastel => "pastel",
            Mood::Muted => "muted",
            Mood::Moody => "moody",
            Mood::Balanced => "balanced",
        }
    }

    fn emoji(&self) -> Option<&'static str> {
        match self {
            Mood::Vibrant => Some("⚡"),
            Mood::Pastel => Some("🌸"),
            Mood::Muted => Some("🌫️"),
            Mood::Moody => Some("🌙"),
            Mood::Balanced => None,
        }
    }
}

/// Categorical descriptors of a palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteTags {
    /// Highest weight first.
    pub dominant_colors: Vec<ColorName>,
    pub mood: Mood,
    pub texture: Texture,
    pub warmth: Warmth,
    pub journey: Journey,
    pub contrast: Contrast,
}

/// Derives tags from a coefficient matrix.
///
/// Total for finite coefficients; callers should run the validity gate first.
pub fn analyze(coeffs: &CosineCoeffs) -> PaletteTags {
    let samples = cosine_gradient(coeffs, ANALYSIS_STEPS);
    let names: Vec<ColorName> = samples.iter().map(ColorName::classify).collect();
    let hsv: Vec<(f64, f64, f64)> = samples.iter().map(Color::to_hsv).collect();
    let luma: Vec<f64> = samples.iter().map(Color::luminance).collect();

    PaletteTags {
        dominant_colors: dominant_colors(&names),
        mood: mood(&hsv),
        texture: texture(coeffs),
        warmth: warmth(&names, &hsv),
        journey: journey(&hsv, &luma),
        contrast: contrast(&luma),
    }
}

/// Ranks names by count, ties broken by first appearance.
fn dominant_colors(names: &[ColorName]) -> Vec<ColorName> {
    let mut counts: Vec<(ColorName, usize)> = Vec::new();
    for name in names {
        match counts.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((*name, 1)),
        }
    }
    // Stable, so first-seen order survives among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_DOMINANT_COLORS)
        .map(|(name, _)| name)
        .collect()
}

fn mood(hsv: &[(f64, f64, f64)]) -> Mood {
    let n = hsv.len().max(1) as f64;
    let mean_s = hsv.iter().map(|(_, s, _)| s).sum::<f64>() / n;
    let mean_v = hsv.iter().map(|(_, _, v)| v).sum::<f64>() / n;

    if mean_v < 0.35 {
        Mood::Moody
    } else if mean_s >= 0.6 && mean_v >= 0.6 {
        Mood::Vibrant
    } else if mean_s < 0.3 && mean_v >= 0.7 {
        Mood::Pastel
    } else if mean_s < 0.3 {
        Mood::Muted
    } else {
        Mood::Balanced
    }
}

fn texture(coeffs: &CosineCoeffs) -> Texture {
    let freq = &coeffs.rows()[FREQUENCY];
    let mean = (freq[0].abs() + freq[1].abs() + freq[2].abs()) / 3.0;
    if mean < 0.5 {
        Texture::Smooth
    } else if mean < 1.5 {
        Texture::Wavy
    } else {
        Texture::Banded
    }
}

fn warmth(names: &[ColorName], hsv: &[(f64, f64, f64)]) -> Warmth {
    let mut score = 0i32;
    for (name, (h, _, _)) in names.iter().zip(hsv) {
        if !name.is_chromatic() {
            continue;
        }
        if *h < 70.0 || *h >= 330.0 {
            score += 1;
        } else if (150.0..270.0).contains(h) {
            score -= 1;
        }
    }
    let ratio = score as f64 / names.len().max(1) as f64;
    if ratio > 0.2 {
        Warmth::Warm
    } else if ratio < -0.2 {
        Warmth::Cool
    } else {
        Warmth::Neutral
    }
}

fn journey(hsv: &[(f64, f64, f64)], luma: &[f64]) -> Journey {
    let (Some(first), Some(last)) = (luma.first(), luma.last()) else {
        return Journey::Steady;
    };
    let delta = last - first;
    if delta >= 0.1 {
        return Journey::DarkToLight;
    }
    if delta <= -0.1 {
        return Journey::LightToDark;
    }

    let start_hue = hsv[0].0;
    let end_hue = hsv[hsv.len() - 1].0;
    if hue_distance(start_hue, end_hue) >= 60.0 {
        Journey::Shifting
    } else if luma_range(luma) >= 0.25 {
        Journey::Cyclic
    } else {
        Journey::Steady
    }
}

fn contrast(luma: &[f64]) -> Contrast {
    let range = luma_range(luma);
    if range >= 0.5 {
        Contrast::High
    } else if range >= 0.25 {
        Contrast::Medium
    } else {
        Contrast::Low
    }
}

fn luma_range(luma: &[f64]) -> f64 {
    let max = luma.iter().copied().fold(f64::MIN, f64::max);
    let min = luma.iter().copied().fold(f64::MAX, f64::min);
    if luma.is_empty() {
        0.0
    } else {
        max - min
    }
}

/// Emoji for the dominant colors, warmth and mood, without repeats.
pub fn emojis(tags: &PaletteTags) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let candidates = tags
        .dominant_colors
        .iter()
        .map(|c| Some(c.emoji()))
        .chain([tags.warmth.emoji(), tags.mood.emoji()]);
    for emoji in candidates.flatten() {
        if !out.iter().any(|e| e == emoji) {
            out.push(emoji.to_string());
        }
    }
    out
}

/// Flat tag labels: dominant colors, then mood, texture, warmth, journey, contrast.
pub fn tags_array(tags: &PaletteTags) -> Vec<String> {
    tags.dominant_colors
        .iter()
        .map(|c| c.as_str())
        .chain([
            tags.mood.as_str(),
            tags.texture.as_str(),
            tags.warmth.as_str(),
            tags.journey.as_str(),
            tags.contrast.as_str(),
        ])
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(offset: [f64; 3]) -> CosineCoeffs {
        CosineCoeffs::from_rgb(offset, [0.0; 3], [0.0; 3], [0.0; 3])
    }

    #[test]
    fn test_classify_named_colors() {
        let cases = [
            (Color::rgb(0.05, 0.05, 0.05), ColorName::Black),
            (Color::rgb(0.95, 0.95, 0.95), ColorName::White),
            (Color::rgb(0.5, 0.5, 0.5), ColorName::Gray),
            (Color::rgb(0.9, 0.1, 0.1), ColorName::Red),
            (Color::rgb(1.0, 0.5, 0.0), ColorName::Orange),
            (Color::rgb(0.45, 0.25, 0.1), ColorName::Brown),
            (Color::rgb(0.9, 0.85, 0.1), ColorName::Yellow),
            (Color::rgb(0.1, 0.8, 0.2), ColorName::Green),
            (Color::rgb(0.1, 0.7, 0.7), ColorName::Teal),
            (Color::rgb(0.1, 0.2, 0.9), ColorName::Blue),
            (Color::rgb(0.5, 0.1, 0.9), ColorName::Purple),
            (Color::rgb(0.9, 0.2, 0.6), ColorName::Pink),
        ];
        for (color, expected) in cases {
            assert_eq!(ColorName::classify(&color), expected, "for {:?}", color);
        }
    }

    #[test]
    fn test_flat_red_palette() {
        let tags = analyze(&flat([0.9, 0.1, 0.1]));
        assert_eq!(tags.dominant_colors, vec![ColorName::Red]);
        assert_eq!(tags.warmth, Warmth::Warm);
        assert_eq!(tags.contrast, Contrast::Low);
        assert_eq!(tags.texture, Texture::Smooth);
        assert_eq!(tags.journey, Journey::Steady);
        assert_eq!(tags.mood, Mood::Vibrant);
    }

    #[test]
    fn test_flat_blue_palette_is_cool() {
        let tags = analyze(&flat([0.1, 0.2, 0.9]));
        assert_eq!(tags.dominant_colors, vec![ColorName::Blue]);
        assert_eq!(tags.warmth, Warmth::Cool);
    }

    #[test]
    fn test_black_to_white_ramp() {
        // Half a cosine period from 0 to 1 on every channel.
        let coeffs = CosineCoeffs::from_rgb([0.5; 3], [0.5; 3], [0.5; 3], [0.5; 3]);
        let tags = analyze(&coeffs);
        assert_eq!(tags.journey, Journey::DarkToLight);
        assert_eq!(tags.contrast, Contrast::High);
        assert_eq!(tags.warmth, Warmth::Neutral);
        assert_eq!(tags.dominant_colors[0], ColorName::Gray);
        assert!(tags.dominant_colors.contains(&ColorName::Black));
        assert!(tags.dominant_colors.contains(&ColorName::White));
    }

    #[test]
    fn test_high_frequency_is_banded() {
        let coeffs = CosineCoeffs::from_rgb([0.5; 3], [0.5; 3], [3.0; 3], [0.0; 3]);
        assert_eq!(analyze(&coeffs).texture, Texture::Banded);
        let coeffs = CosineCoeffs::from_rgb([0.5; 3], [0.5; 3], [1.0; 3], [0.0; 3]);
        assert_eq!(analyze(&coeffs).texture, Texture::Wavy);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let coeffs = CosineCoeffs::default();
        assert_eq!(analyze(&coeffs), analyze(&coeffs));
    }

    #[test]
    fn test_dominant_colors_tie_break() {
        use ColorName::*;
        let names = [Blue, Red, Red, Blue, Green, Pink];
        assert_eq!(dominant_colors(&names), vec![Blue, Red, Green]);
    }

    #[test]
    fn test_views() {
        let tags = PaletteTags {
            dominant_colors: vec![ColorName::Red, ColorName::Orange],
            mood: Mood::Vibrant,
            texture: Texture::Smooth,
            warmth: Warmth::Warm,
            journey: Journey::LightToDark,
            contrast: Contrast::Medium,
        };
        assert_eq!(emojis(&tags), vec!["❤️", "🧡", "🔥", "⚡"]);
        assert_eq!(
            tags_array(&tags),
            vec![
                "red",
                "orange",
                "vibrant",
                "smooth",
                "warm",
                "light-to-dark",
                "medium-contrast"
            ]
        );
    }
}
