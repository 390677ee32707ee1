//! Shelf Show - print a single prompt to stdout.
//!
//! The body goes to stdout and nothing else, so it pipes cleanly into
//! `pbcopy`, `xclip`, or anything downstream.

use std::path::Path;

use anyhow::Result;
use promptshelf::{ShelfError, ShelfLibrary};

/// Run the `shelf show` command.
pub fn run_show(root: &Path, id: &str, json: bool) -> Result<()> {
    let library = ShelfLibrary::load(root)?;
    let prompt = library
        .get(id)
        .ok_or_else(|| ShelfError::PromptNotFound(id.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(prompt)?);
    } else {
        println!("{}", prompt.content);
    }
    Ok(())
}
