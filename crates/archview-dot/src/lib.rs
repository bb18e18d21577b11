//! Graph rendering module for producing DOT format output.
//!
//! This module transforms a [`World`] into DOT format for visualization.
//! Nodes are emitted flat or grouped into one subgraph cluster per class;
//! every node and edge is colored by a hash of the component name.
//!
//! # Module Structure
//!
//! - [`dot`]: DOT format utilities, attribute lists and the counting writer
//! - [`color`]: Deterministic name-seeded colors
//! - `cluster`: Class clustering in first-seen order
//! - `attrs`: Label, href, tooltip, color and style composers
//! - `render`: The single emission pass
//!
//! # Example
//!
//! ```
//! use archview_core::{Component, Link, Options, World};
//!
//! let world = World::new(vec![
//!     Component::new("app.Server").with_link(Link::uses("app.DB", "Server.db")),
//!     Component::new("app.DB"),
//! ]);
//! let dot = archview_dot::render_to_string(&world, &Options::default());
//! assert!(dot.starts_with("digraph G {"));
//! assert!(dot.contains("\tapp_Server -> app_DB "));
//! ```

mod attrs;
mod cluster;
pub mod color;
pub mod dot;
mod render;

use std::io;

use archview_core::{Options, World};

pub use cluster::{ClassCluster, group_by_class};
pub use dot::{DotWriter, WriteError, sanitize_id};

/// DOT encoder for one world with one set of options.
pub struct Dot<'w> {
    world: &'w World,
    options: &'w Options,
}

impl<'w> Dot<'w> {
    pub fn new(world: &'w World, options: &'w Options) -> Self {
        Self { world, options }
    }

    /// Write the DOT graph to `sink`.
    ///
    /// Returns the number of bytes written. On failure nothing further is
    /// written (not even the closing brace) and the error carries the byte
    /// count reached before it.
    #[tracing::instrument(skip_all)]
    pub fn write_to<W: io::Write + ?Sized>(&self, sink: &mut W) -> Result<u64, WriteError> {
        let mut out = DotWriter::new(sink);
        render::write_graph(self, &mut out);

        tracing::debug!(
            components = self.world.components.len(),
            links = self.world.link_count(),
            clustering = %self.options.clustering,
            written = out.written(),
            ok = out.is_ok(),
            "dot rendered"
        );
        out.finish()
    }
}

/// Render `world` as DOT into `sink`, returning the bytes written.
pub fn render<W: io::Write + ?Sized>(
    world: &World,
    options: &Options,
    sink: &mut W,
) -> Result<u64, WriteError> {
    Dot::new(world, options).write_to(sink)
}

/// Render `world` as a DOT string.
pub fn render_to_string(world: &World, options: &Options) -> String {
    let estimated_size = world.components.len() * 150 + world.link_count() * 80 + 200;
    let mut buf = Vec::with_capacity(estimated_size);
    // Writes into a Vec cannot fail.
    let _ = Dot::new(world, options).write_to(&mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
