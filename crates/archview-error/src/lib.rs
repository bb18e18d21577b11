//! # archview-error
//!
//! Unified error handling for archview.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., WriteFailed, ConfigInvalid)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use archview_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::DeserializationFailed, "expected `components`")
//!         .with_operation("world::load")
//!         .with_context("path", "world.json"))
//! }
//! ```
//!
//! ## Principles
//!
//! - Fallible functions outside the renderer return `Result<T, archview_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using archview Error
pub type Result<T> = std::result::Result<T, Error>;
