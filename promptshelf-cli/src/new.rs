//! Shelf New - scaffold a new prompt file.

use std::path::Path;

use anyhow::Result;
use promptshelf::{scaffold_prompt, Category};

/// Run the `shelf new` command.
pub fn run_new(root: &Path, category: Category, title: &str, blank: bool) -> Result<()> {
    let path = scaffold_prompt(root, category, title, blank)?;

    println!("Created: {}", path.display());
    if blank {
        println!("  (blank template)");
    }
    println!("\nNext steps:");
    println!("  1. Edit the file and add your prompt content");
    println!("  2. Update the description, tags, and authors");
    println!("  3. Run 'shelf list' to see it in the library");
    Ok(())
}
