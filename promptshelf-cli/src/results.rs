//! Shared result rendering for the list and search commands.

use anyhow::Result;
use promptshelf::{CategoryFilter, Prompt, ShelfLibrary, ShelfQuery, slugify};

use crate::table;

/// Build a query from CLI arguments.
///
/// The author argument accepts either a display name or an existing slug;
/// slugification is idempotent, so both normalize to the same gate.
pub fn build_query(
    category: CategoryFilter,
    author: Option<&str>,
    search: Option<&str>,
) -> ShelfQuery {
    let mut query = ShelfQuery::new();
    query.category = category;
    query.author_slug = author.map(slugify).filter(|s| !s.is_empty());
    query.search = search.unwrap_or_default().to_string();
    query
}

/// Resolve a query and print the results as a table, JSON, or a share string.
pub fn print_results(
    library: &ShelfLibrary,
    query: &ShelfQuery,
    json: bool,
    share: bool,
) -> Result<()> {
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
        println!("No prompts found. Try adjusting your search or filters.");
        return Ok(());
    }

    let mut tbl = table::new_table();
    tbl.set_header(vec!["Id", "Category", "Title", "Authors", "Description"]);
    for prompt in &results {
        tbl.add_row(vec![
            prompt.id.clone(),
            prompt.category.to_string(),
            table::truncate_str(&prompt.title, 40),
            prompt.authors.join(", "),
            table::truncate_str(&prompt.description, 60),
        ]);
    }
    println!("{tbl}");
    println!("\n{} prompt(s)", results.len());
    warn_summary(library);

    Ok(())
}

/// Generate a one-line excerpt of a prompt body around the first occurrence
/// of `query`, for search output.
pub fn excerpt(prompt: &Prompt, query: &str, max_chars: usize) -> String {
    let content = prompt
        .content
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let content_lower = content.to_lowercase();
    let query_lower = query.to_lowercase();

    let start = match content_lower.find(&query_lower) {
        Some(byte_pos) => {
            let char_pos = content_lower[..byte_pos].chars().count();
            char_pos.saturating_sub(max_chars / 2)
        }
        None => 0,
    };

    let snippet: String = content.chars().skip(start).take(max_chars).collect();
    let prefix = if start > 0 { "..." } else { "" };
    let suffix = if content.chars().count() > start + max_chars {
        "..."
    } else {
        ""
    };
    format!("{prefix}{snippet}{suffix}")
}

fn warn_summary(library: &ShelfLibrary) {
    if !library.warnings().is_empty() {
        eprintln!(
            "Note: {} load warning(s); run with --debug for details.",
            library.warnings().len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptshelf::Category;

    #[test]
    fn test_build_query_slugifies_author() {
        let query = build_query(CategoryFilter::All, Some("José García"), None);
        assert_eq!(query.author_slug.as_deref(), Some("jose-garcia"));
    }

    #[test]
    fn test_build_query_accepts_existing_slug() {
        let query = build_query(CategoryFilter::All, Some("jose-garcia"), None);
        assert_eq!(query.author_slug.as_deref(), Some("jose-garcia"));
    }

    #[test]
    fn test_build_query_drops_empty_author() {
        let query = build_query(CategoryFilter::All, Some("???"), None);
        assert_eq!(query.author_slug, None);
    }

    #[test]
    fn test_excerpt_centers_on_match() {
        let prompt = Prompt::new("x", Category::Simple, "T", "D", vec!["A".into()])
            .with_content("aaaa aaaa aaaa needle bbbb bbbb bbbb");
        let ex = excerpt(&prompt, "needle", 20);
        assert!(ex.contains("needle"));
        assert!(ex.len() < 40);
    }

    #[test]
    fn test_excerpt_without_match_takes_prefix() {
        let prompt = Prompt::new("x", Category::Simple, "T", "D", vec!["A".into()])
            .with_content("a long body with no match in it at all, truly none");
        let ex = excerpt(&prompt, "zzz", 16);
        assert!(ex.starts_with("a long body"));
        assert!(ex.ends_with("..."));
    }
}
