//! Shelf List - list prompts with optional category and author gates.

use std::path::Path;

use anyhow::Result;
use promptshelf::{CategoryFilter, ShelfLibrary};

use crate::results::{build_query, print_results};

/// Run the `shelf list` command.
pub fn run_list(
    root: &Path,
    category: CategoryFilter,
    author: Option<&str>,
    json: bool,
    share: bool,
) -> Result<()> {
    let library = ShelfLibrary::load(root)?;
    let query = build_query(category, author, None);
    print_results(&library, &query, json, share)
}
