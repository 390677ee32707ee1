//! Scaffolding new prompt files
//!
//! Creates a new prompt file at the path derived from its category and
//! title, pre-filled with either a category-specific template or minimal
//! blank front matter. Never overwrites an existing file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ShelfError};
use crate::prompt::Category;
use crate::slug::slugify;

/// Create a new prompt file under `root/<category>/`.
///
/// The file name is the slugified title plus `.md`. With `blank` set the
/// file gets minimal front matter only; otherwise it gets the category's
/// starter template. Returns the created path.
pub fn scaffold_prompt(
    root: impl AsRef<Path>,
    category: Category,
    title: &str,
    blank: bool,
) -> Result<PathBuf> {
    let file_stem = slugify(title);
    if file_stem.is_empty() {
        return Err(ShelfError::InvalidTitle(title.to_string()));
    }

    let dir = root.as_ref().join(category.as_str());
    let path = dir.join(format!("{file_stem}.md"));
    if path.exists() {
        return Err(ShelfError::AlreadyExists { path });
    }

    let contents = if blank {
        blank_template(title)
    } else {
        category_template(category, title)
    };

    fs::create_dir_all(&dir)?;
    fs::write(&path, contents)?;
    Ok(path)
}

fn blank_template(title: &str) -> String {
    format!(
        r#"---
title: "{title}"
description: ""
tags: []
authors: ["Your Name"]
---


"#
    )
}

fn category_template(category: Category, title: &str) -> String {
    match category {
        Category::Simple => format!(
            r#"---
title: "{title}"
description: "Describe when and how you use this prompt"
tags: ["tag1", "tag2"]
authors: ["Your Name"]
---

Your prompt content here...

[PLACEHOLDER]
"#
        ),
        Category::Complex => format!(
            r#"---
title: "{title}"
description: "Describe this GPT/Gem and what it helps you accomplish"
tags: ["tag1", "tag2"]
authors: ["Your Name"]
---

You are [role description].

# Your Role
- Responsibility 1
- Responsibility 2

# Process
1. Step 1
2. Step 2

# Output Format
- Format requirement 1
- Format requirement 2

[Additional instructions...]
"#
        ),
        Category::Rules => format!(
            r#"---
title: "{title}"
description: "Describe what project type or tool this is for"
tags: ["tag1", "tag2"]
authors: ["Your Name"]
---

# {title}

## Code Style
- Rule 1
- Rule 2

## Best Practices
- Practice 1
- Practice 2

## Conventions
- Convention 1
- Convention 2
"#
        ),
    }
}
