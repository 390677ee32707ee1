//! # Promptshelf Domain Crate
//!
//! This crate provides the prompt library domain for Promptshelf: loading a
//! collection of front-mattered prompt files into an immutable in-memory
//! library, and querying it.
//!
//! ## Features
//!
//! - **Loading**: Validated, fail-fast loading from a category-per-directory
//!   content tree ([`ShelfLibrary`])
//! - **Slugs**: Canonical author slugs for grouping and shareable links
//!   ([`slugify`])
//! - **Search**: Weighted fuzzy search across title, description, tags,
//!   authors, and content ([`search`])
//! - **Filtering**: Category and author gates combined with search under a
//!   fixed precedence ([`ShelfQuery`])
//! - **Sharing**: A query-string codec for the browsing state
//! - **Lifecycle**: Draft promotion and prompt scaffolding
//!
//! The loaded library is a frozen snapshot. All queries are synchronous pure
//! functions over it; content changes require a fresh [`ShelfLibrary::load`].

#![warn(missing_docs)]

mod drafts;
mod error;
mod frontmatter;
mod loader;
mod prompt;
mod query;
mod scaffold;
mod search;
mod share;
mod slug;

pub use drafts::{publish_drafts, PublishFailure, PublishReport, PublishedDraft};
pub use error::{LoadWarning, Result, ShelfError};
pub use frontmatter::{parse_front_matter, render_front_matter, FrontMatter};
pub use loader::{ShelfLibrary, DRAFTS_DIR};
pub use prompt::{Category, Prompt, SourceLink};
pub use query::{CategoryFilter, ShelfQuery};
pub use scaffold::scaffold_prompt;
pub use search::search;
pub use slug::slugify;
