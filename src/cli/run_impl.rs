use anyhow::Result;

use crate::analyzer::analyze_files;
use crate::config::{Config, OutputFormat};
use crate::formatters;
use crate::traversal::{TraversalOptions, expand_args};
use crate::types::ScanReport;

pub fn run_with_config(config: &Config) -> Result<i32> {
    let opts = TraversalOptions::new(&config.extension);

    if config.verbose > 0 {
        eprintln!("Scanning paths: {}", config.paths.join(" "));
        eprintln!(
            "Extension: .{}, threshold: {}, ratio: {}",
            opts.extension, config.threshold, config.ratio
        );
    }
    let files = expand_args(&config.paths, &opts)?;
    if config.verbose > 0 {
        eprintln!("Found {} files to analyze", files.len());
    }

    if files.is_empty() {
        eprintln!("no .{} files found", opts.extension);
        return Ok(0);
    }

    let (mut results, violations) = analyze_files(&files, config.threshold, config.ratio);
    // Stable sort keeps discovery order among equal counts.
    results.sort_by(|a, b| b.tokens.cmp(&a.tokens));

    if config.verbose > 1 {
        for r in &results {
            eprintln!("{}: ~{} tokens, {} chars", r.path.display(), r.tokens, r.chars);
        }
        let total: usize = results.iter().map(|r| r.tokens).sum();
        eprintln!(
            "Totals: files={}, tokens={}, violations={}",
            results.len(),
            total,
            violations.len()
        );
    }

    let code = i32::from(!violations.is_empty());

    match config.format {
        OutputFormat::Json => {
            let report = ScanReport {
                threshold: config.threshold,
                ratio: config.ratio,
                files_scanned: results.len(),
                files: results,
                violations,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            print!("{}", formatters::csv::format(&results, config.threshold));
        }
        OutputFormat::Text => {
            if config.show_all {
                print!("{}", formatters::table::format(&results, config.threshold));
            }
            if !violations.is_empty() {
                print!("{}", formatters::violations::format(&violations, config.threshold));
            } else if !config.show_all {
                println!(
                    "{}",
                    formatters::violations::summary(results.len(), config.threshold)
                );
            }
        }
    }

    Ok(code)
}
