//! YAML front matter parsing for prompt files
//!
//! Prompt files are markdown documents with a leading key/value block fenced
//! by `---` lines. This module splits a file into that metadata block and the
//! body; interpreting the metadata against the prompt schema is the loader's
//! job.

use serde_yaml_ng::Mapping;

/// Parsed front matter and remaining body
#[derive(Debug, Clone)]
pub struct FrontMatter {
    /// Parsed YAML metadata (`None` if the file has no front matter block)
    pub metadata: Option<Mapping>,
    /// Remaining content after front matter removal
    pub body: String,
}

/// Split a file into YAML front matter and body.
///
/// Expects the front matter to be delimited by `---` at the beginning and
/// end, followed by the body. A file that does not start with a `---` fence,
/// or never closes it, is treated as all body with no metadata. YAML that
/// fails to parse, or parses to something other than a mapping, is an error.
///
/// # Format
/// ```markdown
/// ---
/// title: Example
/// description: An example prompt
/// ---
/// Body goes here
/// ```
pub fn parse_front_matter(input: &str) -> Result<FrontMatter, String> {
    let input = input.trim_start_matches('\u{feff}');

    let Some(rest) = input.strip_prefix("---") else {
        return Ok(FrontMatter {
            metadata: None,
            body: input.to_string(),
        });
    };

    // The opening fence must be a full line
    let rest = if let Some(r) = rest.strip_prefix("\r\n") {
        r
    } else if let Some(r) = rest.strip_prefix('\n') {
        r
    } else {
        return Ok(FrontMatter {
            metadata: None,
            body: input.to_string(),
        });
    };

    let Some((yaml, body)) = split_at_closing_fence(rest) else {
        // Unclosed fence: the whole file is body
        return Ok(FrontMatter {
            metadata: None,
            body: input.to_string(),
        });
    };

    let metadata = if yaml.trim().is_empty() {
        None
    } else {
        match serde_yaml_ng::from_str::<Mapping>(yaml) {
            Ok(mapping) => Some(mapping),
            Err(e) => return Err(format!("invalid YAML front matter: {e}")),
        }
    };

    Ok(FrontMatter {
        metadata,
        body: body.to_string(),
    })
}

/// Render a metadata mapping and body back into a front-mattered file.
///
/// Inverse of [`parse_front_matter`] up to YAML formatting; used when a file
/// is rewritten with modified metadata (draft promotion).
pub fn render_front_matter(metadata: &Mapping, body: &str) -> Result<String, String> {
    let yaml = serde_yaml_ng::to_string(metadata).map_err(|e| e.to_string())?;
    Ok(format!("---\n{yaml}---\n\n{}\n", body.trim()))
}

/// Split content after the opening fence at the closing `---` line.
///
/// Returns the YAML block and the body following the fence line.
fn split_at_closing_fence(content: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &content[..offset];
            let body = &content[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml_ng::Value;

    #[test]
    fn test_parse_front_matter_with_yaml() {
        let content = r#"---
title: Test Prompt
description: A test prompt
tags:
  - test
  - example
---
Hello there.
This is the body.
"#;

        let result = parse_front_matter(content).unwrap();
        let metadata = result.metadata.expect("has metadata");
        assert_eq!(
            metadata.get("title").and_then(Value::as_str),
            Some("Test Prompt")
        );
        assert_eq!(
            metadata
                .get("tags")
                .and_then(Value::as_sequence)
                .map(|s| s.len()),
            Some(2)
        );
        assert!(result.body.starts_with("Hello there."));
    }

    #[test]
    fn test_parse_front_matter_no_fence() {
        let content = "Just a body.\nNo metadata here.";
        let result = parse_front_matter(content).unwrap();
        assert!(result.metadata.is_none());
        assert_eq!(result.body, content);
    }

    #[test]
    fn test_parse_front_matter_empty_block() {
        let content = "---\n---\nBody here\n";
        let result = parse_front_matter(content).unwrap();
        assert!(result.metadata.is_none());
        assert_eq!(result.body.trim(), "Body here");
    }

    #[test]
    fn test_parse_front_matter_unclosed_fence() {
        let content = "---\ntitle: Test\nBody without closing fence\n";
        let result = parse_front_matter(content).unwrap();
        assert!(result.metadata.is_none());
        assert_eq!(result.body, content);
    }

    #[test]
    fn test_parse_front_matter_malformed_yaml() {
        let content = "---\ninvalid yaml: [\n---\nBody\n";
        assert!(parse_front_matter(content).is_err());
    }

    #[test]
    fn test_parse_front_matter_crlf() {
        let content = "---\r\ntitle: Test\r\n---\r\nBody\r\n";
        let result = parse_front_matter(content).unwrap();
        let metadata = result.metadata.expect("has metadata");
        assert_eq!(
            metadata.get("title").and_then(Value::as_str),
            Some("Test")
        );
        assert_eq!(result.body.trim(), "Body");
    }

    #[test]
    fn test_render_front_matter_round_trip() {
        let mut mapping = Mapping::new();
        mapping.insert(Value::from("title"), Value::from("Test"));
        mapping.insert(Value::from("description"), Value::from("A test"));

        let rendered = render_front_matter(&mapping, "Body text").unwrap();
        let parsed = parse_front_matter(&rendered).unwrap();

        assert_eq!(parsed.metadata, Some(mapping));
        assert_eq!(parsed.body.trim(), "Body text");
    }
}
