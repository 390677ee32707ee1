//! Shareable representation of the browsing state
//!
//! A [`ShelfQuery`] maps to and from a URL-style query string with three
//! optional keys: `q` (search text), `category`, and `author`. Defaults are
//! omitted on encode; on decode a missing key means its default, and an
//! unrecognized category silently coerces to `all` — decoded strings arrive
//! from shared links and are never trusted enough to be an error.

use crate::query::{CategoryFilter, ShelfQuery};

/// Key for the search text
const QUERY_KEY: &str = "q";
/// Key for the category selection
const CATEGORY_KEY: &str = "category";
/// Key for the author slug
const AUTHOR_KEY: &str = "author";

impl ShelfQuery {
    /// Encode this state as a query string, e.g. `q=foo%20bar&category=rules`.
    ///
    /// Keys at their default are absent; a fully default state encodes as the
    /// empty string.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push((QUERY_KEY, search.to_string()));
        }
        if let CategoryFilter::Only(category) = self.category {
            pairs.push((CATEGORY_KEY, category.to_string()));
        }
        if let Some(slug) = &self.author_slug {
            pairs.push((AUTHOR_KEY, slug.clone()));
        }

        pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Decode a query string back into a state.
    ///
    /// Total: unknown keys are ignored, undecodable values are ignored, and
    /// an unrecognized category value falls back to `all`. A leading `?` is
    /// tolerated so whole URL fragments can be pasted in.
    pub fn from_query_string(input: &str) -> ShelfQuery {
        let input = input.strip_prefix('?').unwrap_or(input);
        let mut state = ShelfQuery::new();

        for pair in input.split('&').filter(|p| !p.is_empty()) {
            let (key, raw_value) = match pair.split_once('=') {
                Some(kv) => kv,
                None => continue,
            };
            let Ok(value) = urlencoding::decode(raw_value) else {
                continue;
            };

            match key {
                QUERY_KEY => state.search = value.into_owned(),
                CATEGORY_KEY => state.category = CategoryFilter::from_query_value(&value),
                AUTHOR_KEY if !value.is_empty() => {
                    state.author_slug = Some(value.into_owned());
                }
                _ => {}
            }
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Category;

    #[test]
    fn test_default_state_encodes_empty() {
        assert_eq!(ShelfQuery::new().to_query_string(), "");
    }

    #[test]
    fn test_encode_full_state() {
        let state = ShelfQuery::new()
            .with_search("foo bar")
            .with_category(Category::Rules)
            .with_author_slug("jane-doe");
        assert_eq!(
            state.to_query_string(),
            "q=foo%20bar&category=rules&author=jane-doe"
        );
    }

    #[test]
    fn test_round_trip() {
        let state = ShelfQuery::new()
            .with_search("foo bar")
            .with_category(Category::Rules)
            .with_author_slug("jane-doe");
        assert_eq!(ShelfQuery::from_query_string(&state.to_query_string()), state);
    }

    #[test]
    fn test_round_trip_partial_states() {
        let states = [
            ShelfQuery::new(),
            ShelfQuery::new().with_search("refactor"),
            ShelfQuery::new().with_category(Category::Simple),
            ShelfQuery::new().with_author_slug("jose-garcia"),
        ];
        for state in states {
            assert_eq!(
                ShelfQuery::from_query_string(&state.to_query_string()),
                state,
                "state failed to round-trip: {state:?}"
            );
        }
    }

    #[test]
    fn test_decode_empty_is_default() {
        assert_eq!(ShelfQuery::from_query_string(""), ShelfQuery::new());
        assert_eq!(ShelfQuery::from_query_string("?"), ShelfQuery::new());
    }

    #[test]
    fn test_decode_unknown_category_coerces_to_all() {
        let state = ShelfQuery::from_query_string("category=sneaky");
        assert_eq!(state.category, CategoryFilter::All);
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let state = ShelfQuery::from_query_string("utm_source=spam&q=hello");
        assert_eq!(state.search, "hello");
        assert_eq!(state.author_slug, None);
    }

    #[test]
    fn test_decode_tolerates_leading_question_mark() {
        let state = ShelfQuery::from_query_string("?q=hello&category=simple");
        assert_eq!(state.search, "hello");
        assert_eq!(state.category, CategoryFilter::Only(Category::Simple));
    }

    #[test]
    fn test_blank_search_is_omitted() {
        let state = ShelfQuery::new().with_search("   ");
        assert_eq!(state.to_query_string(), "");
    }
}
