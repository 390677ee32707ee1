//! Ranked fuzzy search over a prompt corpus
//!
//! A thin weighted wrapper over [`fuzzy_matcher`]'s Skim algorithm. Fields
//! carry fixed weights (title heaviest, body lightest) and matching uses a
//! fixed moderate tolerance: loose enough for minor typos and abbreviations,
//! strict enough that unrelated prompts do not surface. The tolerance is a
//! constant, not a per-query knob.
//!
//! There is no persistent index. Search runs over whatever corpus the filter
//! engine hands it (usually already category-filtered), and scoring a few
//! hundred prompts per keystroke is cheap enough to redo every call.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::prompt::Prompt;

/// Relative weight of a title match
const TITLE_WEIGHT: i64 = 3;
/// Relative weight of a description match
const DESCRIPTION_WEIGHT: i64 = 2;
/// Relative weight of a tag match
const TAG_WEIGHT: i64 = 2;
/// Relative weight of an author match
const AUTHOR_WEIGHT: i64 = 2;
/// Relative weight of a body match
const CONTENT_WEIGHT: i64 = 1;

/// Minimum raw field score for a match to count at all.
///
/// Skim awards roughly 16 points per consecutively matched character, so
/// this floor discards degenerate matches where the query characters are
/// merely scattered somewhere through a long body.
const MATCH_THRESHOLD: i64 = 30;

/// Search `corpus` for `query`, best match first.
///
/// Returns the prompts with a fuzzy match on any weighted field, ordered by
/// descending weighted score; ties keep their corpus order. Blank queries
/// belong to the filter engine, not here — passed one anyway, this returns
/// the corpus unchanged.
pub fn search(corpus: &[Prompt], query: &str) -> Vec<Prompt> {
    let query = query.trim();
    if query.is_empty() {
        return corpus.to_vec();
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let mut scored: Vec<(i64, &Prompt)> = corpus
        .iter()
        .filter_map(|prompt| score_prompt(&matcher, prompt, query).map(|s| (s, prompt)))
        .collect();

    // Stable sort preserves corpus order among equal scores
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, p)| p.clone()).collect()
}

/// Best weighted field score for a prompt, or `None` if nothing matches
fn score_prompt(matcher: &SkimMatcherV2, prompt: &Prompt, query: &str) -> Option<i64> {
    let mut fields: Vec<(&str, i64)> = vec![
        (prompt.title.as_str(), TITLE_WEIGHT),
        (prompt.description.as_str(), DESCRIPTION_WEIGHT),
        (prompt.content.as_str(), CONTENT_WEIGHT),
    ];
    fields.extend(prompt.tags.iter().map(|t| (t.as_str(), TAG_WEIGHT)));
    fields.extend(prompt.authors.iter().map(|a| (a.as_str(), AUTHOR_WEIGHT)));

    let mut best: Option<i64> = None;
    for (text, weight) in fields {
        if let Some(score) = matcher.fuzzy_match(text, query) {
            if score < MATCH_THRESHOLD {
                continue;
            }
            let weighted = score * weight;
            if best.is_none_or(|b| weighted > b) {
                best = Some(weighted);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Category;

    fn prompt(id: &str, title: &str, description: &str, tags: &[&str], content: &str) -> Prompt {
        Prompt::new(
            id,
            Category::Simple,
            title,
            description,
            vec!["Jane Doe".to_string()],
        )
        .with_tags(tags.iter().map(|t| t.to_string()).collect())
        .with_content(content)
    }

    fn corpus() -> Vec<Prompt> {
        vec![
            prompt(
                "refactor",
                "Refactor Helper",
                "Cleans up messy code",
                &["refactoring"],
                "Refactor the following code for readability.",
            ),
            prompt(
                "email",
                "Email Drafter",
                "Writes professional emails",
                &["writing"],
                "Draft an email that is concise and warm.",
            ),
            prompt(
                "review",
                "Code Review Rules",
                "Guidelines for reviewing pull requests",
                &["code", "review"],
                "When reviewing, prefer small focused comments.",
            ),
        ]
    }

    #[test]
    fn test_search_matches_title() {
        let results = search(&corpus(), "refactor");
        assert!(!results.is_empty());
        assert_eq!(results[0].id, "refactor");
    }

    #[test]
    fn test_search_excludes_unrelated() {
        let results = search(&corpus(), "refactor");
        assert!(results.iter().all(|p| p.id != "email"));
    }

    #[test]
    fn test_search_title_outranks_content() {
        // "review" appears in the title of one prompt and only the body of another
        let results = search(&corpus(), "review");
        assert_eq!(results[0].id, "review");
    }

    #[test]
    fn test_search_matches_tags() {
        let results = search(&corpus(), "writing");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "email");
    }

    #[test]
    fn test_search_matches_authors() {
        let results = search(&corpus(), "Jane Doe");
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_search_no_match_for_nonsense() {
        assert!(search(&corpus(), "xyzzyplugh").is_empty());
    }

    #[test]
    fn test_search_blank_query_returns_corpus_unchanged() {
        let corpus = corpus();
        let results = search(&corpus, "   ");
        assert_eq!(results, corpus);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let lower = search(&corpus(), "refactor");
        let upper = search(&corpus(), "REFACTOR");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_search_empty_corpus() {
        assert!(search(&[], "anything").is_empty());
    }
}
