//! Shelf Publish - promote ready drafts into their category directories.

use std::path::Path;

use anyhow::Result;
use promptshelf::publish_drafts;

/// Run the `shelf publish` command.
///
/// Per-file failures are reported and counted but never abort the batch;
/// the command only exits non-zero when the drafts directory itself is
/// unusable.
pub fn run_publish(root: &Path) -> Result<()> {
    let report = publish_drafts(root)?;

    if report.total_drafts == 0 {
        println!("No draft files found.");
        return Ok(());
    }

    if !report.had_ready_drafts() {
        println!("No drafts with status \"ready\" found.");
        println!("\nTip: set status: ready in the front matter of drafts you want to publish.");
        return Ok(());
    }

    for published in &report.published {
        println!("published: {} -> {}/", published.file_name, published.category);
    }
    for failure in &report.failures {
        eprintln!("error: {}: {}", failure.file_name, failure.reason);
    }

    println!("\nSummary:");
    println!("  Published: {}", report.published.len());
    if !report.failures.is_empty() {
        println!("  Errors: {}", report.failures.len());
    }
    Ok(())
}
