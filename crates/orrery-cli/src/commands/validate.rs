use std::path::Path;

use colored::Colorize;

use orrery_core::ValidationIssue;
use orrery_core::validate::validate_json;

use super::plural;

pub fn run(catalog: &Path, textures: Option<&Path>) -> Result<(), String> {
    let json = std::fs::read_to_string(catalog)
        .map_err(|e| format!("cannot read {}: {e}", catalog.display()))?;
    let report = validate_json(&json, textures);

    let errors: Vec<&ValidationIssue> = report.errors().collect();
    let warnings: Vec<&ValidationIssue> = report.warnings().collect();

    if errors.is_empty() {
        println!(
            "  {} All {} bodies validated.",
            "OK".green().bold(),
            report.total
        );
    } else {
        println!(
            "  {} {} error{} found:",
            "FAILED".red().bold(),
            errors.len(),
            plural(errors.len())
        );
        for issue in &errors {
            println!("    {} {}", format!("{}:", issue.subject).bold(), issue.message);
        }
    }

    if !warnings.is_empty() {
        println!();
        println!(
            "  {} {} warning{}:",
            "WARN".yellow().bold(),
            warnings.len(),
            plural(warnings.len())
        );
        for issue in &warnings {
            println!("    {} {}", format!("{}:", issue.subject).bold(), issue.message);
        }
    }

    println!();
    println!("  {}", "Summary".bold().underline());
    println!("    {:>4} bodies", report.total);
    println!("    {:>4} error{}", errors.len(), plural(errors.len()));
    println!("    {:>4} warning{}", warnings.len(), plural(warnings.len()));

    if !report.by_kind.is_empty() {
        println!();
        println!("  By type:");
        for (kind, count) in &report.by_kind {
            println!("    {count:>4} {kind}");
        }
    }
    if !report.by_render_mode.is_empty() {
        println!();
        println!("  By render mode:");
        for (mode, count) in &report.by_render_mode {
            println!("    {count:>4} {mode}");
        }
    }

    if report.has_errors() {
        Err(format!(
            "validation failed with {} error{}",
            errors.len(),
            plural(errors.len())
        ))
    } else {
        Ok(())
    }
}
