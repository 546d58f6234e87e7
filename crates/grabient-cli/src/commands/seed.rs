//! Seed encode/decode commands.

use anyhow::{Context, Result};
use colored::Colorize;
use grabient_palette::{decode_seed, encode_seed, CosineCoeffs, Globals};
use std::process::ExitCode;

use super::json_output::{error_codes, to_pretty_json, JsonError, SeedOutput};

/// Parses coefficients given as a JSON 4x4 array.
pub fn parse_coeffs(json: &str) -> Result<CosineCoeffs> {
    serde_json::from_str(json).context("coefficients must be a 4x4 JSON array")
}

/// Parses globals given as a JSON array of 4 numbers.
pub fn parse_globals(json: &str) -> Result<Globals> {
    serde_json::from_str(json).context("globals must be a JSON array of 4 numbers")
}

/// Run `seed encode`
pub fn encode(coeffs_json: &str, globals_json: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let parsed = parse_coeffs(coeffs_json).and_then(|coeffs| {
        let globals = match globals_json {
            Some(g) => parse_globals(g)?,
            None => Globals::IDENTITY,
        };
        Ok((coeffs, globals))
    });

    let (coeffs, globals) = match parsed {
        Ok(parsed) => parsed,
        Err(e) if json_output => {
            let error = JsonError::new(error_codes::COEFFS_PARSE, format!("{:#}", e));
            println!("{}", to_pretty_json(&SeedOutput::failure(error))?);
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e),
    };

    let seed = encode_seed(&coeffs, &globals);
    if json_output {
        let output = SeedOutput {
            success: true,
            seed: Some(seed),
            coeffs: Some(coeffs),
            globals: Some(globals),
            colors: Vec::new(),
            errors: Vec::new(),
        };
        println!("{}", to_pretty_json(&output)?);
    } else {
        println!("{}", seed);
    }
    Ok(ExitCode::SUCCESS)
}

/// Run `seed decode`
pub fn decode(seed: &str, json_output: bool) -> Result<ExitCode> {
    let decoded = match decode_seed(seed) {
        Ok(decoded) => decoded,
        Err(e) if json_output => {
            let error = JsonError::new(error_codes::SEED_DECODE, e.to_string());
            println!("{}", to_pretty_json(&SeedOutput::failure(error))?);
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e.into()),
    };

    if json_output {
        let output = SeedOutput {
            success: true,
            seed: Some(seed.to_string()),
            coeffs: Some(decoded.coeffs),
            globals: Some(decoded.globals),
            colors: Vec::new(),
            errors: Vec::new(),
        };
        println!("{}", to_pretty_json(&output)?);
    } else {
        let labels = ["offset", "amplitude", "frequency", "phase"];
        for (label, row) in labels.iter().zip(decoded.coeffs.rows()) {
            println!(
                "{:>10} {:>8.4} {:>8.4} {:>8.4}",
                label.cyan(),
                row[0],
                row[1],
                row[2]
            );
        }
        println!("{:>10} {:?}", "globals".dimmed(), decoded.globals.0);
    }
    Ok(ExitCode::SUCCESS)
}
