//! Core prompt types
//!
//! A [`Prompt`] is the immutable unit of the library: markdown content plus
//! validated metadata. Prompts are constructed by the loader and never
//! mutated afterwards; content changes require a fresh load.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::slug::slugify;

/// The closed set of prompt categories
///
/// Category is derived from the subdirectory a prompt file lives in, never
/// from its front matter, so storage layout and classification cannot drift
/// apart. Any other directory name observed at load time is a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Quick prompts, typically under 100 words
    Simple,
    /// Multi-section prompts for GPTs/Gems
    Complex,
    /// Agent configuration for coding tools
    Rules,
}

impl Category {
    /// All categories, in canonical order
    pub const ALL: [Category; 3] = [Category::Simple, Category::Complex, Category::Rules];

    /// The directory name for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Simple => "simple",
            Category::Complex => "complex",
            Category::Rules => "rules",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Category::Simple),
            "complex" => Ok(Category::Complex),
            "rules" => Ok(Category::Rules),
            other => Err(format!(
                "unknown category '{other}' (expected simple, complex, or rules)"
            )),
        }
    }
}

/// An attribution link extracted from the `source` front matter field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    /// The link text
    pub text: String,
    /// The link target; always an http or https URL
    pub href: String,
}

impl SourceLink {
    /// Parse a `[Text](url)` front matter value into a source link.
    ///
    /// The value must match the exact bracket-paren link pattern and the URL
    /// must use the `http` or `https` scheme. Anything else returns `None`;
    /// the caller decides whether that is a warning or an error.
    pub fn parse(value: &str) -> Option<SourceLink> {
        let rest = value.strip_prefix('[')?;
        let (text, tail) = rest.split_once("](")?;
        let href = tail.strip_suffix(')')?;
        if text.is_empty() || href.is_empty() {
            return None;
        }

        let url = Url::parse(href).ok()?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return None;
        }

        Some(SourceLink {
            text: text.to_string(),
            href: href.to_string(),
        })
    }
}

/// A loaded prompt document
///
/// Field order and contents mirror the on-disk representation: front matter
/// metadata plus the markdown body (with the front matter removed and
/// surrounding whitespace trimmed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Unique id, derived from the source filename without extension
    pub id: String,
    /// Category, derived from the containing subdirectory
    pub category: Category,
    /// Human-readable title
    pub title: String,
    /// Short description of when and how to use the prompt
    pub description: String,
    /// Free-form tags; empty when the front matter omits them
    #[serde(default)]
    pub tags: Vec<String>,
    /// Author display names; always at least one
    pub authors: Vec<String>,
    /// URL-safe author slugs, one per author, in the same order
    pub author_slugs: Vec<String>,
    /// The prompt body
    pub content: String,
    /// Optional attribution link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceLink>,
}

impl Prompt {
    /// Create a prompt with the given id, category, and required metadata.
    ///
    /// Author slugs are derived here so they can never fall out of sync with
    /// the author list.
    pub fn new(
        id: impl Into<String>,
        category: Category,
        title: impl Into<String>,
        description: impl Into<String>,
        authors: Vec<String>,
    ) -> Self {
        let author_slugs = authors.iter().map(|a| slugify(a)).collect();
        Self {
            id: id.into(),
            category,
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            authors,
            author_slugs,
            content: String::new(),
            source: None,
        }
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the body content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the attribution link
    pub fn with_source(mut self, source: SourceLink) -> Self {
        self.source = Some(source);
        self
    }

    /// Whether any of this prompt's authors resolves to the given slug
    pub fn has_author_slug(&self, slug: &str) -> bool {
        self.author_slugs.iter().any(|s| s == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_category_rejects_unknown() {
        assert!("drafts".parse::<Category>().is_err());
        assert!("Simple".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_source_link_parses_https() {
        let link = SourceLink::parse("[Anthropic Docs](https://docs.anthropic.com/prompts)")
            .expect("valid link");
        assert_eq!(link.text, "Anthropic Docs");
        assert_eq!(link.href, "https://docs.anthropic.com/prompts");
    }

    #[test]
    fn test_source_link_parses_http() {
        assert!(SourceLink::parse("[Example](http://example.com)").is_some());
    }

    #[test]
    fn test_source_link_rejects_plain_text() {
        assert!(SourceLink::parse("not-a-link").is_none());
    }

    #[test]
    fn test_source_link_rejects_non_http_scheme() {
        assert!(SourceLink::parse("[Click](ftp://evil.example)").is_none());
        assert!(SourceLink::parse("[Click](javascript:alert(1))").is_none());
    }

    #[test]
    fn test_source_link_rejects_empty_parts() {
        assert!(SourceLink::parse("[](https://example.com)").is_none());
        assert!(SourceLink::parse("[Text]()").is_none());
    }

    #[test]
    fn test_prompt_derives_author_slugs() {
        let prompt = Prompt::new(
            "refactor-helper",
            Category::Simple,
            "Refactor Helper",
            "Helps refactor code",
            vec!["José García".to_string(), "Jane Doe".to_string()],
        );
        assert_eq!(prompt.author_slugs, vec!["jose-garcia", "jane-doe"]);
        assert_eq!(prompt.author_slugs.len(), prompt.authors.len());
        assert!(prompt.has_author_slug("jane-doe"));
        assert!(!prompt.has_author_slug("jane"));
    }
}
