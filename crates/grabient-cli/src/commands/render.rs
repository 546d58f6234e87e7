//! Render command implementation
//!
//! Prints the hex colors a seed renders to.

use anyhow::Result;
use colored::Colorize;
use grabient_palette::{apply_globals, decode_seed, render_hex};
use std::process::ExitCode;

use super::json_output::{error_codes, to_pretty_json, JsonError, SeedOutput};

/// Run the render command
///
/// # Returns
/// Exit code: 0 on success, 1 if the seed could not be decoded
pub fn run(seed: &str, steps: usize, json_output: bool) -> Result<ExitCode> {
    let decoded = match decode_seed(seed) {
        Ok(decoded) => decoded,
        Err(e) => {
            if json_output {
                let error = JsonError::new(error_codes::SEED_DECODE, e.to_string());
                println!("{}", to_pretty_json(&SeedOutput::failure(error))?);
                return Ok(ExitCode::from(1));
            }
            return Err(e.into());
        }
    };

    let coeffs = apply_globals(&decoded.coeffs, &decoded.globals);
    let colors = render_hex(&coeffs, steps);

    if json_output {
        let output = SeedOutput {
            success: true,
            seed: Some(seed.to_string()),
            coeffs: Some(coeffs),
            globals: Some(decoded.globals),
            colors,
            errors: Vec::new(),
        };
        println!("{}", to_pretty_json(&output)?);
    } else {
        println!("{} {} step(s)", "Render:".cyan().bold(), steps);
        for color in &colors {
            println!("  {}", color);
        }
    }
    Ok(ExitCode::SUCCESS)
}
