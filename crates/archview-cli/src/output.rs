//! Output generation (DOT graphs).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use tracing::info;

use archview_core::{Options, World};
use archview_error::{Error, Result};

/// Render `world` to the file at `path`, or to stdout when `path` is `None`.
///
/// Returns the number of bytes written.
pub fn write_dot_output(world: &World, options: &Options, path: Option<&str>) -> Result<u64> {
    let render_start = Instant::now();

    let written = match path {
        Some(path) => {
            let file = File::create(path).map_err(|err| {
                Error::from(err)
                    .with_operation("output::create")
                    .with_context("path", path)
            })?;
            let written = write_buffered(world, options, file)?;
            info!(path, written, "output written");
            written
        }
        None => write_buffered(world, options, io::stdout().lock())?,
    };

    info!(
        "Graph rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );
    Ok(written)
}

fn write_buffered<W: Write>(world: &World, options: &Options, sink: W) -> Result<u64> {
    let mut sink = BufWriter::new(sink);
    let written = archview_dot::render(world, options, &mut sink)?;
    sink.flush()
        .map_err(|err| Error::from(err).with_operation("output::flush"))?;
    Ok(written)
}
