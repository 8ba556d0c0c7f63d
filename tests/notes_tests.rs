//! Note store tests against the on-disk fjall engine.

#![cfg(feature = "fjall")]

use md_publisher::{FjallStore, Metadata, Note, NoteError, NoteStore};
use serde_json::{Value, json};
use tempfile::TempDir;

fn metadata(value: Value) -> Metadata {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn open(dir: &TempDir) -> anyhow::Result<NoteStore> {
    Ok(NoteStore::new(FjallStore::open(dir.path())?))
}

#[test]
fn test_note_store_lifecycle() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let notes = open(&dir)?;

    let mut note = Note::new("test-note", "Test content").with_metadata(metadata(json!({
        "title": "Test Note",
        "tags": ["test", "example"],
    })));
    notes.save(&mut note)?;

    let loaded = notes.get("test-note")?;
    assert_eq!(loaded, note);

    let listed = notes.list()?;
    assert_eq!(listed, vec![note]);

    notes.delete("test-note")?;
    assert!(matches!(notes.get("test-note"), Err(NoteError::NotFound(id)) if id == "test-note"));
    assert!(notes.list()?.is_empty());

    Ok(())
}

#[test]
fn test_note_store_with_frontmatter() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let notes = open(&dir)?;

    let mut note = Note::new(
        "frontmatter-note",
        "---\n\
title: Frontmatter Title\n\
description: This is a description from frontmatter\n\
tags:\n  - tag1\n  - tag2\n\
author: Test Author\n\
---\n\
# Actual Content\n\nThis is the content of the note.",
    )
    .with_metadata(metadata(json!({"existing": "metadata"})));
    notes.save(&mut note)?;

    let loaded = notes.get("frontmatter-note")?;
    assert_eq!(loaded.content, "# Actual Content\n\nThis is the content of the note.");
    assert_eq!(
        loaded.metadata,
        Some(metadata(json!({
            "existing": "metadata",
            "title": "Frontmatter Title",
            "description": "This is a description from frontmatter",
            "tags": ["tag1", "tag2"],
            "author": "Test Author",
        })))
    );

    Ok(())
}

#[test]
fn test_notes_survive_reopen() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    {
        let notes = open(&dir)?;
        notes.save(&mut Note::new("n1", "---\ndraft: true\n---\nbody"))?;
        notes.close()?;
    }

    let notes = open(&dir)?;
    let loaded = notes.get("n1")?;
    assert_eq!(loaded.content, "body");
    assert_eq!(loaded.metadata_value("draft"), Some(&json!(true)));

    Ok(())
}

#[test]
fn test_malformed_frontmatter_is_stored_verbatim() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let notes = open(&dir)?;

    let content = "---\ninvalid: yaml: [\n---\n# X";
    notes.save(&mut Note::new("bad-yaml", content))?;

    let loaded = notes.get("bad-yaml")?;
    assert_eq!(loaded.content, content);
    assert_eq!(loaded.metadata, None);

    Ok(())
}

#[test]
fn test_non_finite_frontmatter_fails_save() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let notes = open(&dir)?;

    let mut note = Note::new("nan", "---\ntitle: T\nscore: .inf\n---\n# Body");
    let err = notes.save(&mut note).unwrap_err();

    assert!(matches!(err, NoteError::Frontmatter { .. }));
    assert!(err.is_persistence());
    assert!(notes.list()?.is_empty());

    Ok(())
}

#[test]
fn test_unified_error_classification() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let notes = open(&dir)?;

    let err: md_publisher::Error = notes.get("nope").unwrap_err().into();
    assert!(err.is_note());
    assert!(err.is_not_found());
    assert!(!err.is_kv());

    Ok(())
}
