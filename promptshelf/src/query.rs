//! Combining category, author, and free-text filters into a result set
//!
//! A [`ShelfQuery`] is the whole of the browsing state: one category
//! selection, an optional author slug, and a search string. Resolution
//! precedence is fixed: category and author are hard intersective gates
//! applied first (order preserved), then the fuzzy search re-ranks whatever
//! survived. Search never widens a gated result set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::prompt::{Category, Prompt};
use crate::search::search;

/// Category selection: everything, or exactly one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// No category gate
    #[default]
    All,
    /// Only prompts in the given category
    Only(Category),
}

impl CategoryFilter {
    /// Whether a prompt in `category` passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    /// Decode a possibly attacker-supplied value, coercing anything
    /// unrecognized to [`CategoryFilter::All`].
    ///
    /// Shareable links put the category in user-editable territory, so a bad
    /// value must degrade to the default rather than error.
    pub fn from_query_value(value: &str) -> CategoryFilter {
        value
            .parse::<Category>()
            .map_or(CategoryFilter::All, CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => c.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    /// Strict parse for trusted input (CLI flags): unknown values are errors,
    /// unlike [`CategoryFilter::from_query_value`].
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            s.parse::<Category>().map(CategoryFilter::Only)
        }
    }
}

/// The complete filter/search state over a loaded library
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfQuery {
    /// Category gate
    pub category: CategoryFilter,
    /// Author gate, as a canonical slug
    pub author_slug: Option<String>,
    /// Free-text fuzzy query; blank means no search
    pub search: String,
}

impl ShelfQuery {
    /// An empty query that resolves to the full corpus unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category gate
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    /// Set the author gate
    pub fn with_author_slug(mut self, slug: impl Into<String>) -> Self {
        self.author_slug = Some(slug.into());
        self
    }

    /// Set the search string
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    /// Whether this query filters anything at all
    pub fn is_default(&self) -> bool {
        self.category == CategoryFilter::All
            && self.author_slug.is_none()
            && self.search.trim().is_empty()
    }

    /// Resolve this query against a corpus.
    ///
    /// Gates apply in fixed order: category, then author, both preserving
    /// relative corpus order; a non-blank search string then narrows and
    /// re-ranks the gated set by relevance. With everything at defaults the
    /// corpus comes back unchanged in order and membership.
    pub fn resolve(&self, corpus: &[Prompt]) -> Vec<Prompt> {
        let mut results: Vec<Prompt> = corpus
            .iter()
            .filter(|p| self.category.matches(p.category))
            .filter(|p| {
                self.author_slug
                    .as_deref()
                    .is_none_or(|slug| p.has_author_slug(slug))
            })
            .cloned()
            .collect();

        if !self.search.trim().is_empty() {
            results = search(&results, &self.search);
        }

        results
    }
}
