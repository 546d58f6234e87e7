//! Tags command implementation
//!
//! Analyzes a single seed and prints its tags, emoji and embedding text. A
//! seed that cannot be analyzed falls back to "no tags available" instead of
//! failing the command.

use anyhow::Result;
use colored::Colorize;
use grabient_palette::{
    analyze, apply_globals, decode_seed, is_valid_palette_coeffs, CosineCoeffs, PaletteTags,
};
use std::process::ExitCode;
use tracing::warn;

use super::json_output::{error_codes, to_pretty_json, JsonError, TagsOutput};

/// Decodes a seed and derives its tags.
pub fn tags_for_seed(seed: &str) -> Result<PaletteTags, JsonError> {
    let decoded = decode_seed(seed)
        .map_err(|e| JsonError::new(error_codes::SEED_DECODE, e.to_string()))?;
    let coeffs = apply_globals(&decoded.coeffs, &decoded.globals);
    tags_for_coeffs(&coeffs)
}

fn tags_for_coeffs(coeffs: &CosineCoeffs) -> Result<PaletteTags, JsonError> {
    if !is_valid_palette_coeffs(coeffs) {
        return Err(JsonError::new(
            error_codes::SEED_DECODE,
            "seed contains non-finite coefficients",
        ));
    }
    Ok(analyze(coeffs))
}

/// Run the tags command
///
/// # Returns
/// Exit code: always 0; an unusable seed is reported, not treated as a failure
pub fn run(seed: &str, themes: &[String], json_output: bool) -> Result<ExitCode> {
    let output = match tags_for_seed(seed) {
        Ok(tags) => TagsOutput::analyzed(tags, themes),
        Err(error) => {
            warn!(error = error.message.as_str(), "Tag analysis unavailable");
            TagsOutput::unavailable(error)
        }
    };

    if json_output {
        println!("{}", to_pretty_json(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    match &output.tags {
        Some(tags) => print_tags(tags, &output),
        None => {
            println!("{}", "No tags available".yellow().bold());
            for error in &output.errors {
                println!("  {} {}", "!".yellow(), error.message.dimmed());
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_tags(tags: &PaletteTags, output: &TagsOutput) {
    let dominant: Vec<&str> = tags.dominant_colors.iter().map(|c| c.as_str()).collect();
    println!("{} {}", "Dominant:".cyan().bold(), dominant.join(", "));
    println!("{} {}", "Mood:".cyan(), tags.mood.as_str());
    println!("{} {}", "Texture:".cyan(), tags.texture.as_str());
    println!("{} {}", "Warmth:".cyan(), tags.warmth.as_str());
    println!("{} {}", "Journey:".cyan(), tags.journey.as_str());
    println!("{} {}", "Contrast:".cyan(), tags.contrast.as_str());
    println!("{} {}", "Emoji:".cyan(), output.emojis.join(" "));
    println!("{} {}", "Embed:".cyan().bold(), output.embed_text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use grabient_palette::{encode_seed, Globals};

    #[test]
    fn test_tags_for_valid_seed() {
        let seed = encode_seed(&CosineCoeffs::default(), &Globals::IDENTITY);
        let tags = tags_for_seed(&seed).unwrap();
        assert_eq!(tags, analyze(&CosineCoeffs::default()));
    }

    #[test]
    fn test_tags_for_malformed_seed() {
        let err = tags_for_seed("%%").unwrap_err();
        assert_eq!(err.code, error_codes::SEED_DECODE);
    }

    #[test]
    fn test_tags_for_non_finite_seed() {
        let mut coeffs = CosineCoeffs::default();
        coeffs.0[3][1] = f64::NAN;
        let seed = encode_seed(&coeffs, &Globals::IDENTITY);
        assert!(tags_for_seed(&seed).is_err());
    }

    #[test]
    fn test_unavailable_output_shape() {
        let output = TagsOutput::unavailable(JsonError::new(error_codes::SEED_DECODE, "bad"));
        assert!(!output.success);
        assert!(output.tags.is_none());
        assert!(output.embed_text.is_empty());
    }
}
