//! CLI command flow tests: scaffold, publish, and show against a temp tree.

use std::fs;

use promptshelf::{Category, CategoryFilter, ShelfLibrary};
use shelf::{list, new, publish, show};
use tempfile::TempDir;

#[test]
fn test_new_then_list_flow() {
    let root = TempDir::new().unwrap();

    new::run_new(root.path(), Category::Simple, "Code Refactor Helper", false).unwrap();
    assert!(root.path().join("simple/code-refactor-helper.md").exists());

    // The scaffolded file is valid enough to load and list
    let library = ShelfLibrary::load(root.path()).unwrap();
    assert_eq!(library.len(), 1);
    list::run_list(root.path(), CategoryFilter::All, None, false, false).unwrap();
}

#[test]
fn test_new_refuses_overwrite() {
    let root = TempDir::new().unwrap();
    new::run_new(root.path(), Category::Rules, "My Rules", true).unwrap();
    assert!(new::run_new(root.path(), Category::Rules, "My Rules", true).is_err());
}

#[test]
fn test_publish_flow_moves_ready_draft() {
    let root = TempDir::new().unwrap();
    let drafts = root.path().join("drafts");
    fs::create_dir_all(&drafts).unwrap();
    fs::write(
        drafts.join("idea.md"),
        r#"---
title: Idea
description: A promoted idea
status: ready
category: complex
authors: ["Jane Doe"]
---

The promoted body.
"#,
    )
    .unwrap();

    publish::run_publish(root.path()).unwrap();
    assert!(!drafts.join("idea.md").exists());
    assert!(root.path().join("complex/idea.md").exists());

    show::run_show(root.path(), "idea", false).unwrap();
}

#[test]
fn test_show_unknown_id_errors() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("simple")).unwrap();
    assert!(show::run_show(root.path(), "missing", false).is_err());
}
