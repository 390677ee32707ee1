//! CLI definition for the shelf command-line interface.
//!
//! This module is self-contained -- it only depends on `clap`, `std`, and the
//! domain types, so the surface of every command is visible in one place.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use promptshelf::{Category, CategoryFilter};

/// Shelf - a searchable, filterable prompt library on the command line.
///
/// Prompts live as markdown files with YAML front matter under a content
/// root with one directory per category (simple/, complex/, rules/) plus a
/// drafts/ area. The library is loaded fresh on every invocation; invalid
/// required metadata fails the whole load so bad content never ships.
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(version)]
#[command(about = "Searchable, filterable prompt library on the command line")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Content root directory
    #[arg(long, global = true, value_name = "DIR", default_value = "prompts")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List prompts, optionally filtered by category and author
    List {
        /// Category to show: all, simple, complex, or rules
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        /// Author display name or slug to filter by
        #[arg(long)]
        author: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Print the shareable query string for this view
        #[arg(long)]
        share: bool,
    },

    /// Fuzzy-search prompts, best match first
    Search {
        /// Search query
        query: String,
        /// Category to search within: all, simple, complex, or rules
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        /// Author display name or slug to filter by
        #[arg(long)]
        author: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Print the shareable query string for this view
        #[arg(long)]
        share: bool,
    },

    /// Print a prompt's content to stdout (pipe it anywhere)
    Show {
        /// Prompt id (the file name without extension)
        id: String,
        /// Print the full file metadata as JSON instead of the body
        #[arg(long)]
        json: bool,
    },

    /// Create a new prompt file from a template
    New {
        /// Category for the new prompt
        #[arg(long)]
        category: Category,
        /// Prompt title; the file name is derived from it
        #[arg(long)]
        title: String,
        /// Skip the category template, create minimal front matter only
        #[arg(long)]
        blank: bool,
    },

    /// Move drafts with status "ready" into their category directories
    Publish,
}
