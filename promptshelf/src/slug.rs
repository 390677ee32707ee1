//! Author name slugification
//!
//! Author filtering and shareable links key off a canonical URL-safe slug
//! rather than the display name, so spelling variants of the same person
//! ("José", "jose", "JOSÉ ") group together.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Convert a display name to a canonical URL-safe slug.
///
/// Lowercases, trims, decomposes accented characters and drops the combining
/// marks, removes everything that is not an ASCII letter, digit, whitespace,
/// or hyphen, then collapses whitespace and hyphen runs into single hyphens.
///
/// Total and deterministic; never fails. Idempotent: slugifying an existing
/// slug returns it unchanged.
///
/// # Examples
///
/// ```
/// use promptshelf::slugify;
///
/// assert_eq!(slugify("José García"), "jose-garcia");
/// assert_eq!(slugify("  Jane   DOE  "), "jane-doe");
/// assert_eq!(slugify("jane-doe"), "jane-doe");
/// ```
pub fn slugify(name: &str) -> String {
    let decomposed: String = name
        .to_lowercase()
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    decomposed
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
