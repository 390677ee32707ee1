//! Shelf Search - ranked fuzzy search over the library.
//!
//! Search runs after the category and author gates, so it only ever narrows
//! and re-ranks; a gated-out prompt can never resurface through a match.

use std::path::Path;

use anyhow::Result;
use promptshelf::{CategoryFilter, ShelfLibrary};

use crate::results::{build_query, excerpt};
use crate::table;

/// Characters of body context shown next to each search hit
const EXCERPT_LENGTH: usize = 80;

/// Run the `shelf search` command.
pub fn run_search(
    root: &Path,
    query_text: &str,
    category: CategoryFilter,
    author: Option<&str>,
    json: bool,
    share: bool,
) -> Result<()> {
    let library = ShelfLibrary::load(root)?;
    let query = build_query(category, author, Some(query_text));

    if share {
        println!("{}", query.to_query_string());
        return Ok(());
    }

    let results = query.resolve(library.prompts());

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No prompts found matching \"{}\".", query_text);
        return Ok(());
    }

    println!(
        "Found {} prompt(s) matching \"{}\":\n",
        results.len(),
        query_text
    );

    let mut tbl = table::new_table();
    tbl.set_header(vec!["Id", "Category", "Title", "Excerpt"]);
    for prompt in &results {
        tbl.add_row(vec![
            prompt.id.clone(),
            prompt.category.to_string(),
            table::truncate_str(&prompt.title, 40),
            excerpt(prompt, query_text, EXCERPT_LENGTH),
        ]);
    }
    println!("{tbl}");
    println!("\nRun 'shelf show <id>' to print a prompt.");

    Ok(())
}
