//! archview command-line interface.

pub mod config;
pub mod output;

use std::io;
use std::str::FromStr;

use archview_core::{Clustering, Options, World};
use archview_error::{Error, Result};

pub use config::{load_options, parse_options};
pub use output::write_dot_output;

/// Options for running archview.
#[derive(Debug, Clone, Default)]
pub struct ArchviewOptions {
    /// World JSON file, or `-` for stdin.
    pub world: String,
    /// TOML file with render options.
    pub config: Option<String>,
    /// Output file; stdout when unset.
    pub output: Option<String>,
    pub no_color: bool,
    /// `none` or `class`.
    pub cluster: Option<String>,
    pub trim_prefix: Option<String>,
    pub doc_url: Option<String>,
}

impl ArchviewOptions {
    /// Render options: config file values, overridden by explicit flags.
    pub fn render_options(&self) -> Result<Options> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => Options::default(),
        };

        if self.no_color {
            options.no_color = true;
        }
        if let Some(cluster) = &self.cluster {
            options.clustering = Clustering::from_str(cluster).map_err(|_| {
                Error::invalid_argument(format!(
                    "unknown clustering '{}', use 'none' or 'class'",
                    cluster
                ))
                .with_context("cluster", cluster.clone())
            })?;
        }
        if let Some(prefix) = &self.trim_prefix {
            options.trim_prefix = prefix.clone();
        }
        if let Some(url) = &self.doc_url {
            options.doc_url = url.clone();
        }
        Ok(options)
    }

    /// Load the world from the configured file or stdin.
    pub fn load_world(&self) -> Result<World> {
        if self.world == "-" {
            return World::from_reader(io::stdin().lock());
        }
        World::load(&self.world)
    }
}

/// Main entry point: load, render, write. Returns the bytes written.
pub fn run_main(opts: &ArchviewOptions) -> Result<u64> {
    let options = opts.render_options()?;
    let world = opts.load_world()?;

    for (source, target) in world.dangling_links() {
        tracing::warn!(source, target, "link target is not a component of the world");
    }

    write_dot_output(&world, &options, opts.output.as_deref())
}
