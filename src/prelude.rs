//! Convenient re-exports for common usage patterns.
//!
//! ```ignore
//! use md_publisher::prelude::*;
//!
//! let notes = NoteStore::new(MemoryStore::new());
//! notes.save(&mut Note::new("n1", "# Hi"))?;
//! ```

pub use crate::error::{Error, Result};

#[cfg(feature = "fjall")]
pub use crate::kv::FjallStore;
pub use crate::kv::{KvError, KvStore, MemoryStore};

pub use crate::notes::{
    FrontmatterError, Metadata, Note, NoteError, NoteStore, extract_frontmatter,
    parse_frontmatter,
};
