//! Shelf - searchable, filterable prompt library on the command line.
//!
//! Commands:
//! - `shelf list`: List prompts, with category/author filters
//! - `shelf search <query>`: Fuzzy-search prompts, best match first
//! - `shelf show <id>`: Print a prompt body to stdout
//! - `shelf new --category <cat> --title <title>`: Scaffold a new prompt
//! - `shelf publish`: Move ready drafts into their category directories
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shelf::{list, new, publish, search, show};
use shelf::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("promptshelf=debug,shelf=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::List {
            category,
            author,
            json,
            share,
        } => list::run_list(&cli.root, category, author.as_deref(), json, share),

        Commands::Search {
            query,
            category,
            author,
            json,
            share,
        } => search::run_search(&cli.root, &query, category, author.as_deref(), json, share),

        Commands::Show { id, json } => show::run_show(&cli.root, &id, json),

        Commands::New {
            category,
            title,
            blank,
        } => new::run_new(&cli.root, category, &title, blank),

        Commands::Publish => publish::run_publish(&cli.root),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
