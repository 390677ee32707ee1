//! Draft promotion
//!
//! Drafts live in `drafts/` next to the category directories and use the
//! same file format plus two lifecycle keys: `status` (`draft` | `ready`)
//! and an explicit `category`. Publishing moves every `ready` draft into its
//! category directory, stripping both lifecycle keys on the way — once the
//! file lands in a category directory, placement is the source of truth.
//!
//! Promotion is a batch operation with per-file outcomes: one bad draft is
//! reported and skipped, never aborting the rest of the batch.

use std::fs;
use std::path::Path;

use serde_yaml_ng::Value;
use tracing::info;

use crate::error::{Result, ShelfError};
use crate::frontmatter::{parse_front_matter, render_front_matter};
use crate::loader::DRAFTS_DIR;
use crate::prompt::Category;

/// A draft successfully moved into its category directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedDraft {
    /// The draft's file name
    pub file_name: String,
    /// The category it was published into
    pub category: Category,
}

/// A ready draft that could not be published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishFailure {
    /// The draft's file name
    pub file_name: String,
    /// Why publishing was refused
    pub reason: String,
}

/// Outcome of a [`publish_drafts`] batch
#[derive(Debug, Clone, Default)]
pub struct PublishReport {
    /// Total draft files found, regardless of status
    pub total_drafts: usize,
    /// Drafts published this run
    pub published: Vec<PublishedDraft>,
    /// Ready drafts that failed validation or could not be moved
    pub failures: Vec<PublishFailure>,
}

impl PublishReport {
    /// Whether any draft was marked ready at all
    pub fn had_ready_drafts(&self) -> bool {
        !self.published.is_empty() || !self.failures.is_empty()
    }
}

/// Publish every draft under `root/drafts` whose `status` is `ready`.
///
/// A ready draft must carry a valid `category`, a non-empty `description`,
/// and a non-empty `authors` list. Valid drafts are rewritten without the
/// `status` and `category` keys and moved into `root/<category>/`; a file
/// already at the target path is a per-file failure, not an overwrite.
pub fn publish_drafts(root: impl AsRef<Path>) -> Result<PublishReport> {
    let root = root.as_ref();
    let drafts_dir = root.join(DRAFTS_DIR);
    if !drafts_dir.is_dir() {
        return Err(ShelfError::DirectoryNotFound { path: drafts_dir });
    }

    let mut draft_files: Vec<_> = fs::read_dir(&drafts_dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| ext == "md" || ext == "mdx")
        })
        .collect();
    draft_files.sort();

    let mut report = PublishReport {
        total_drafts: draft_files.len(),
        ..PublishReport::default()
    };

    for path in draft_files {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        match publish_one(root, &path) {
            Ok(Some(category)) => {
                info!("published draft {} to {}/", file_name, category);
                report.published.push(PublishedDraft { file_name, category });
            }
            Ok(None) => {} // not marked ready
            Err(reason) => report.failures.push(PublishFailure { file_name, reason }),
        }
    }

    Ok(report)
}

/// Publish a single draft. `Ok(None)` means the draft is not marked ready.
fn publish_one(root: &Path, path: &Path) -> std::result::Result<Option<Category>, String> {
    let contents = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let parsed = parse_front_matter(&contents)?;
    let Some(mut metadata) = parsed.metadata else {
        return Ok(None);
    };

    if metadata.get("status").and_then(Value::as_str) != Some("ready") {
        return Ok(None);
    }

    let category = metadata
        .get("category")
        .and_then(Value::as_str)
        .ok_or_else(|| "missing required field: category".to_string())?
        .parse::<Category>()?;

    let has_description = metadata
        .get("description")
        .and_then(Value::as_str)
        .is_some_and(|d| !d.trim().is_empty());
    if !has_description {
        return Err("missing required field: description".to_string());
    }

    let has_authors = metadata
        .get("authors")
        .and_then(Value::as_sequence)
        .is_some_and(|a| !a.is_empty());
    if !has_authors {
        return Err("missing required field: authors".to_string());
    }

    let target_dir = root.join(category.as_str());
    let target = target_dir.join(path.file_name().unwrap_or_default());
    if target.exists() {
        return Err(format!("already exists in {}/", category));
    }

    // Lifecycle keys never survive publication
    metadata.remove("status");
    metadata.remove("category");

    let rewritten = render_front_matter(&metadata, &parsed.body)?;
    fs::create_dir_all(&target_dir).map_err(|e| e.to_string())?;
    fs::write(&target, rewritten).map_err(|e| e.to_string())?;
    fs::remove_file(path).map_err(|e| e.to_string())?;

    Ok(Some(category))
}
