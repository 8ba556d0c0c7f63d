//! Key-value store module.
//!
//! The note store only talks to the [`KvStore`] trait. Two engines ship
//! with the crate: [`FjallStore`], a durable LSM-tree store (requires the
//! `fjall` feature), and [`MemoryStore`], an ordered in-memory map.

mod error;
#[cfg(feature = "fjall")]
mod fjall_store;
mod memory;
mod store;

pub use error::KvError;
#[cfg(feature = "fjall")]
pub use fjall_store::FjallStore;
pub use memory::MemoryStore;
pub use store::KvStore;
