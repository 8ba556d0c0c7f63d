//! Markdown note storage with YAML frontmatter extraction.
//!
//! Notes (markdown content plus a free-form metadata map) are persisted as
//! JSON records in an ordered key-value engine. On every save a leading
//! frontmatter block is parsed, merged into the metadata and stripped from
//! the content.
//!
//! # Quick Start
//!
//! ```ignore
//! use md_publisher::prelude::*;
//! use std::path::Path;
//!
//! let notes = NoteStore::new(FjallStore::open(Path::new("data"))?);
//!
//! let mut note = Note::new("hello", "---\ntitle: Hello\n---\n# Hello");
//! notes.save(&mut note)?;
//!
//! let stored = notes.get("hello")?;
//! assert_eq!(stored.content, "# Hello");
//! ```
//!
//! # Modules
//!
//! - [`kv`] - The key-value contract and its engines
//! - [`notes`] - Notes, frontmatter extraction and the note store
//! - [`server`] - HTTP API (requires `server` feature)
//!
//! # Feature Flags
//!
//! - `fjall` - Enable the durable fjall engine (enabled by default)
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `server` - Enable the HTTP API server (enabled by default)
//! - `full` - Enable all features

pub mod kv;
mod logging;
pub mod notes;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export storage types at crate root for convenience
#[cfg(feature = "fjall")]
pub use kv::FjallStore;
pub use kv::{KvError, KvStore, MemoryStore};
pub use notes::{
    FrontmatterError, Metadata, Note, NoteError, NoteStore, extract_frontmatter,
    parse_frontmatter,
};
