//! Architecture world model consumed by the archview renderers.
//!
//! A [`World`] is a finished graph: components in a fixed order, each with its
//! outgoing links. Producers (source inspection, hand-written JSON) build it;
//! renderers only ever borrow it.
//!
//! # Module Structure
//!
//! - [`world`]: World, Component and Link
//! - [`options`]: Render options and clustering mode

mod options;
mod world;

pub use archview_error::{Error, ErrorKind, Result};
pub use options::{Clustering, DEFAULT_DOC_URL, Options};
pub use world::{Component, Link, World};
