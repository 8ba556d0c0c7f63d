//! Conditional logging macros for library-level tracing.
//!
//! With the `logging` feature these are `tracing`'s own macros. Without it
//! every level maps to one macro that expands to nothing, so embedders that
//! do not want logging pay nothing for it.
//!
//! ```rust,ignore
//! use crate::logging::{debug, warn};
//!
//! debug!(id = %note.id, "saving note");
//! warn!(key = %key, error = %err, "skipping unreadable note record");
//! ```

#[cfg(feature = "logging")]
#[cfg_attr(not(feature = "fjall"), allow(unused_imports))]
pub(crate) use tracing::{debug, error, info, trace, warn};

#[cfg(not(feature = "logging"))]
mod disabled {
    macro_rules! discard {
        ($($arg:tt)*) => {};
    }

    pub(crate) use discard as debug;
    pub(crate) use discard as error;
    #[allow(unused_imports)]
    pub(crate) use discard as info;
    pub(crate) use discard as trace;
    pub(crate) use discard as warn;
}

#[cfg(not(feature = "logging"))]
#[allow(unused_imports)]
pub(crate) use disabled::{debug, error, info, trace, warn};
