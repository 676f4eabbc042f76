use std::path::Path;

use colored::Colorize;
use rj_core::scene_graph::DEFAULT_ENTRY_SCENE;
use rj_core::{ContentProvider, Severity, ToolkitCatalog, validate_scene_graph};

pub fn run(dir: &Path, journey: &str, entry: Option<&str>) -> Result<(), String> {
    let provider = super::open_dir(dir)?;
    let graph = provider.load_journey(journey).map_err(|e| e.to_string())?;

    let catalog = provider.load_catalog().unwrap_or_else(|e| {
        eprintln!("  {} {e}", "warning:".yellow().bold());
        ToolkitCatalog::new()
    });

    let entry = entry.unwrap_or(DEFAULT_ENTRY_SCENE);
    let issues = validate_scene_graph(&graph, &catalog, entry);
    for issue in &issues {
        let prefix = match issue.severity {
            Severity::Error => "error:".red().bold(),
            Severity::Warning => "warning:".yellow().bold(),
        };
        let location = issue
            .scene_id
            .as_deref()
            .map(|id| format!("{id}: "))
            .unwrap_or_default();
        eprintln!("  {prefix} {location}{}", issue.message);
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    let warnings = issues.len() - errors;

    if errors > 0 {
        eprintln!(
            "  {} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        );
        return Err("validation failed with errors".into());
    }

    let title = graph.title().unwrap_or(journey);
    println!("  All checks passed for '{title}'.");
    println!(
        "  {} scenes, {} warning{}",
        graph.scene_count(),
        warnings,
        if warnings == 1 { "" } else { "s" }
    );

    Ok(())
}
