//! Validate command implementation
//!
//! Checks every palette in a file and reports which ones would be dropped as
//! corrupted during refinement.

use anyhow::{Context, Result};
use colored::Colorize;
use grabient_palette::{validate_palette, StagedPalette, ValidationResult};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{
    to_pretty_json, JsonError, JsonPaletteValidation, JsonWarning, ValidateOutput,
};
use crate::input::load_palettes;

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if every palette is valid, 1 otherwise
pub fn run(input_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input_path)
    } else {
        run_human(input_path)
    }
}

fn validate_all(palettes: &[StagedPalette]) -> Vec<(&StagedPalette, ValidationResult)> {
    palettes.iter().map(|p| (p, validate_palette(p))).collect()
}

fn run_human(input_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), input_path);

    let loaded = load_palettes(Path::new(input_path))
        .with_context(|| format!("Failed to load palette file: {}", input_path))?;

    let results = validate_all(&loaded.palettes);
    let mut corrupted = 0;

    for (palette, result) in &results {
        if !result.is_ok() {
            corrupted += 1;
            println!("\n{} {}", "Corrupted:".red().bold(), palette.id);
            for err in &result.errors {
                println!("  {} {}", "x".red(), err);
            }
        }
        if !result.warnings.is_empty() {
            println!("\n{} {}", "Warnings:".yellow().bold(), palette.id);
            for warn in &result.warnings {
                println!("  {} {}", "!".yellow(), warn);
            }
        }
    }

    let valid = results.len() - corrupted;
    if corrupted == 0 {
        println!(
            "\n{} {} palette(s) valid",
            "SUCCESS".green().bold(),
            valid
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} {} valid, {} corrupted",
            "FAILED".red().bold(),
            valid,
            corrupted
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(input_path: &str) -> Result<ExitCode> {
    let loaded = match load_palettes(Path::new(input_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output = ValidateOutput {
                success: false,
                input_hash: None,
                valid: 0,
                corrupted: 0,
                errors: vec![JsonError::new(e.code(), e.to_string())],
                palettes: Vec::new(),
            };
            println!("{}", to_pretty_json(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let palettes: Vec<JsonPaletteValidation> = validate_all(&loaded.palettes)
        .into_iter()
        .map(|(palette, result)| JsonPaletteValidation {
            id: palette.id.clone(),
            ok: result.is_ok(),
            errors: result.errors.iter().map(JsonError::from).collect(),
            warnings: result.warnings.iter().map(JsonWarning::from).collect(),
        })
        .collect();

    let corrupted = palettes.iter().filter(|p| !p.ok).count();
    let output = ValidateOutput {
        success: corrupted == 0,
        input_hash: Some(loaded.source_hash),
        valid: palettes.len() - corrupted,
        corrupted,
        errors: Vec::new(),
        palettes,
    };
    println!("{}", to_pretty_json(&output)?);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
