use anyhow::Result;
use colored::Colorize;
use fsroutes::{to_route_config, RouteManifest, RoutesOptions, ROOT_ID};

use super::load_manifest;

/// Counts of what the manifest resolved to
#[derive(Debug, Default, PartialEq)]
struct Summary {
    pages: usize,
    layouts: usize,
    index_pages: usize,
    catch_all_pages: usize,
    top_level: usize,
}

fn summarize(manifest: &RouteManifest) -> Summary {
    manifest.values().fold(
        Summary {
            top_level: to_route_config(manifest).len(),
            ..Summary::default()
        },
        |mut acc, entry| {
            if entry.id.ends_with(&format!("/{}", fsroutes::LAYOUT_NAME)) {
                acc.layouts += 1;
            } else {
                acc.pages += 1;
                match entry.index {
                    Some(true) => acc.index_pages += 1,
                    _ => acc.catch_all_pages += 1,
                }
            }
            acc
        },
    )
}

pub fn execute(options: &RoutesOptions) -> Result<()> {
    println!("{}", "Checking routes...".green().bold());
    println!();

    let manifest = load_manifest(options)?;
    let summary = summarize(&manifest);

    for entry in manifest.values() {
        let path = entry.path.as_deref().unwrap_or("/");
        let parent = match entry.parent_id.as_deref() {
            Some(ROOT_ID) | None => String::new(),
            Some(parent) => format!(" ← {}", parent).dimmed().to_string(),
        };
        println!("  {} {} {}{}", "✓".green(), path.cyan(), entry.file, parent);
    }

    println!();
    println!(
        "{} {} pages ({} index, {} catch-all), {} layouts, {} top-level routes",
        "Done:".green().bold(),
        summary.pages,
        summary.index_pages,
        summary.catch_all_pages,
        summary.layouts,
        summary.top_level
    );

    Ok(())
}
