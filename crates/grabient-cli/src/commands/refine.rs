//! Refine command implementation
//!
//! Validates a page of staged palettes, merges near-duplicates and prints the
//! resulting clusters.

use anyhow::{Context, Result};
use colored::Colorize;
use grabient_palette::{palette_set_hash, refine, RefineOptions, RefineResult};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;

use super::json_output::{error_codes, to_pretty_json, JsonError, RefineOutput};
use crate::config::{resolve_options, OptionOverrides};
use crate::input::{load_palettes, LoadResult};

/// Run the refine command
///
/// # Arguments
/// * `input_path` - Path to a `.json` or `.jsonl` palette file
/// * `config_path` - Optional JSON config with refine options
/// * `overrides` - Options given on the command line
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the input or config could not be used
pub fn run(
    input_path: &str,
    config_path: Option<&str>,
    overrides: &OptionOverrides,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(input_path, config_path, overrides)
    } else {
        run_human(input_path, config_path, overrides)
    }
}

fn run_human(
    input_path: &str,
    config_path: Option<&str>,
    overrides: &OptionOverrides,
) -> Result<ExitCode> {
    let start = Instant::now();

    let options = resolve_options(config_path.map(Path::new), overrides)?;

    println!("{} {}", "Refining:".cyan().bold(), input_path);
    print_options(&options);

    let LoadResult {
        palettes,
        source_hash,
    } = load_palettes(Path::new(input_path))
        .with_context(|| format!("Failed to load palette file: {}", input_path))?;

    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);

    let input_count = palettes.len();
    let result = refine(palettes, &options);
    let duration_ms = start.elapsed().as_millis() as u64;

    info!(
        input = input_count,
        unique = result.unique.len(),
        duplicates = result.duplicate_count,
        corrupted = result.corrupted_count(),
        duration_ms,
        "Refine complete"
    );

    print_result(&result);

    println!(
        "\n{} {} palette(s) -> {} unique, {} duplicate(s), {} corrupted ({}ms)",
        "DONE".green().bold(),
        input_count,
        result.unique.len(),
        result.duplicate_count,
        result.corrupted_count(),
        duration_ms
    );
    Ok(ExitCode::SUCCESS)
}

fn run_json(
    input_path: &str,
    config_path: Option<&str>,
    overrides: &OptionOverrides,
) -> Result<ExitCode> {
    let options = match resolve_options(config_path.map(Path::new), overrides) {
        Ok(options) => options,
        Err(e) => {
            let error = JsonError::new(error_codes::INVALID_CONFIG, format!("{:#}", e));
            println!("{}", to_pretty_json(&RefineOutput::failure(vec![error]))?);
            return Ok(ExitCode::from(1));
        }
    };

    let LoadResult {
        palettes,
        source_hash,
    } = match load_palettes(Path::new(input_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let error = JsonError::new(e.code(), e.to_string());
            println!("{}", to_pretty_json(&RefineOutput::failure(vec![error]))?);
            return Ok(ExitCode::from(1));
        }
    };

    let set_hash = palette_set_hash(&palettes)?;
    let input_count = palettes.len();
    let result = refine(palettes, &options);
    let output = RefineOutput::success(source_hash, set_hash, options, input_count, &result);
    println!("{}", to_pretty_json(&output)?);
    Ok(ExitCode::SUCCESS)
}

fn print_options(options: &RefineOptions) {
    if options.enable_dedup {
        println!(
            "{} threshold {}{}",
            "Dedup:".dimmed(),
            options.threshold,
            if options.sort_by_dupes {
                ", sorted by duplicates"
            } else {
                ""
            }
        );
    } else {
        println!("{} disabled", "Dedup:".dimmed());
    }
}

fn print_result(result: &RefineResult) {
    if !result.corrupted.is_empty() {
        println!("\n{}", "Corrupted:".red().bold());
        for corrupted in &result.corrupted {
            let first = corrupted
                .errors
                .first()
                .map(|e| e.to_string())
                .unwrap_or_default();
            println!("  {} {} {}", "x".red(), corrupted.id, first.dimmed());
        }
    }

    println!("\n{}", "Clusters:".cyan().bold());
    for rep in &result.unique {
        let dupes = if rep.duplicates.is_empty() {
            String::new()
        } else {
            format!(" +{} [{}]", rep.duplicates.len(), rep.duplicate_ids().join(", "))
        };
        println!(
            "  {} {}{} {}",
            "*".green(),
            rep.id(),
            dupes.yellow(),
            rep.palette.themes.join(", ").dimmed()
        );
    }
}
