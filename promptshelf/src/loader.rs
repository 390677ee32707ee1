//! Loading a prompt library from a content tree
//!
//! The library is loaded once from a root directory containing one
//! subdirectory per category (`simple/`, `complex/`, `rules/`), plus an
//! optional `drafts/` area that is never part of the loaded set. The loaded
//! library is a frozen snapshot: queries run against it, nothing mutates it.
//!
//! Loading is all-or-nothing for required metadata: one prompt with a
//! missing title fails the whole load, naming the file and field. Only the
//! optional `source` field degrades softly (warn and drop).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml_ng::Value;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{LoadWarning, Result, ShelfError};
use crate::frontmatter::parse_front_matter;
use crate::prompt::{Category, Prompt, SourceLink};

/// The drafts area next to the category directories; excluded from loading
pub const DRAFTS_DIR: &str = "drafts";

/// File extensions recognized as prompt files
const PROMPT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Raw front matter fields before validation
///
/// Everything is optional here; the loader turns absences into field-level
/// errors. Unknown keys are tolerated so lifecycle keys left over in drafts
/// never break a load.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMetadata {
    title: Option<String>,
    description: Option<String>,
    tags: Vec<String>,
    authors: Option<Vec<String>>,
    source: Option<Value>,
}

/// An immutable, fully validated prompt collection
#[derive(Debug, Clone, Default)]
pub struct ShelfLibrary {
    prompts: Vec<Prompt>,
    warnings: Vec<LoadWarning>,
}

impl ShelfLibrary {
    /// Load all prompts under `root`.
    ///
    /// `root` must contain only category subdirectories (plus an optional
    /// `drafts/` sibling, which is skipped). Files directly under `root` are
    /// ignored; an unrecognized subdirectory is a fatal error, since it would
    /// mean prompts exist that the category model cannot classify.
    pub fn load(root: impl AsRef<Path>) -> Result<ShelfLibrary> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ShelfError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut subdirs: Vec<PathBuf> = fs::read_dir(root)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        subdirs.sort();

        let mut library = ShelfLibrary::default();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for dir in subdirs {
            let name = dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();

            if name == DRAFTS_DIR || name.starts_with('.') {
                continue;
            }

            let category: Category = name.parse().map_err(|_| ShelfError::UnknownCategory {
                path: dir.clone(),
                directory: name.clone(),
            })?;

            library.load_category_dir(&dir, category, &mut seen)?;
        }

        debug!(
            prompts = library.prompts.len(),
            warnings = library.warnings.len(),
            "loaded prompt library from {}",
            root.display()
        );
        Ok(library)
    }

    /// All loaded prompts, in deterministic walk order
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Look up a prompt by id
    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    /// Non-fatal issues recorded during the load
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Number of loaded prompts
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    fn load_category_dir(
        &mut self,
        dir: &Path,
        category: Category,
        seen: &mut HashMap<String, PathBuf>,
    ) -> Result<()> {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let io_err = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("walk failed"));
                ShelfError::Io(io_err)
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let is_prompt_file = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| PROMPT_EXTENSIONS.contains(&ext));
            if !is_prompt_file {
                continue;
            }

            // Placement is the source of truth: the immediate parent must be
            // the category directory itself, not some nested subdirectory.
            let parent_name = path
                .parent()
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            if parent_name.parse::<Category>() != Ok(category) {
                return Err(ShelfError::UnknownCategory {
                    path: path.to_path_buf(),
                    directory: parent_name.to_string(),
                });
            }

            let prompt = self.load_prompt_file(path, category)?;

            if let Some(first) = seen.get(&prompt.id) {
                return Err(ShelfError::DuplicateId {
                    id: prompt.id,
                    first: first.clone(),
                    second: path.to_path_buf(),
                });
            }
            seen.insert(prompt.id.clone(), path.to_path_buf());
            self.prompts.push(prompt);
        }
        Ok(())
    }

    fn load_prompt_file(&mut self, path: &Path, category: Category) -> Result<Prompt> {
        let contents = fs::read_to_string(path)?;
        let parsed = parse_front_matter(&contents).map_err(|message| ShelfError::Metadata {
            path: path.to_path_buf(),
            message,
        })?;

        let raw: RawMetadata = match parsed.metadata {
            Some(mapping) => serde_yaml_ng::from_value(Value::Mapping(mapping)).map_err(|e| {
                ShelfError::Metadata {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            })?,
            None => RawMetadata::default(),
        };

        let title = require_string(path, "title", raw.title)?;
        let description = require_string(path, "description", raw.description)?;

        let authors = raw.authors.ok_or(ShelfError::MissingField {
            path: path.to_path_buf(),
            field: "authors",
        })?;
        if authors.is_empty() {
            return Err(ShelfError::InvalidField {
                path: path.to_path_buf(),
                field: "authors",
                reason: "must contain at least one author".to_string(),
            });
        }
        if authors.iter().any(|a| a.trim().is_empty()) {
            return Err(ShelfError::InvalidField {
                path: path.to_path_buf(),
                field: "authors",
                reason: "all authors must be non-empty strings".to_string(),
            });
        }

        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        let mut prompt = Prompt::new(id, category, title, description, authors)
            .with_tags(raw.tags)
            .with_content(parsed.body.trim());

        // Malformed source is the one soft failure: warn and drop the field.
        if let Some(value) = raw.source {
            match value.as_str().and_then(SourceLink::parse) {
                Some(link) => prompt.source = Some(link),
                None => self.warn_source(path, &value),
            }
        }

        Ok(prompt)
    }

    fn warn_source(&mut self, path: &Path, value: &Value) {
        let got = value.as_str().map_or_else(
            || format!("{value:?}"),
            |s| format!("\"{s}\""),
        );
        let message = format!("expected [Text](http(s) url), got {got}");
        warn!("{}: invalid source field: {}", path.display(), message);
        self.warnings.push(LoadWarning {
            path: path.to_path_buf(),
            field: "source",
            message,
        });
    }
}

fn require_string(path: &Path, field: &'static str, value: Option<String>) -> Result<String> {
    match value {
        None => Err(ShelfError::MissingField {
            path: path.to_path_buf(),
            field,
        }),
        Some(s) if s.trim().is_empty() => Err(ShelfError::InvalidField {
            path: path.to_path_buf(),
            field,
            reason: "must be a non-empty string".to_string(),
        }),
        Some(s) => Ok(s),
    }
}
