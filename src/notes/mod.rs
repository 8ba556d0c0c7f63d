//! Markdown notes and their persistence.
//!
//! A [`Note`] is an id, a markdown body and an open metadata map. The
//! [`NoteStore`] writes notes through any [`KvStore`](crate::kv::KvStore),
//! moving a leading YAML frontmatter block into the metadata on every save.

mod error;
mod frontmatter;
mod note;
mod store;

pub use error::{FrontmatterError, NoteError};
pub use frontmatter::{extract_frontmatter, parse_frontmatter};
pub use note::{Metadata, Note};
pub use store::NoteStore;
