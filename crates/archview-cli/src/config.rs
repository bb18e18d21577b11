//! Render options from a TOML file.
//!
//! ```toml
//! no_color = false
//! clustering = "class"
//! trim_prefix = "example/site/"
//! doc_url = "https://pkg.go.dev/"
//! ```

use std::path::Path;

use archview_core::Options;
use archview_error::{Error, Result};

/// Parse render options from TOML text. Missing keys keep their defaults;
/// unknown keys are rejected.
pub fn parse_options(input: &str) -> Result<Options> {
    toml::from_str(input).map_err(|err| {
        Error::config_invalid(err.message().to_string())
            .with_operation("config::parse")
            .set_source(err)
    })
}

/// Load render options from a TOML file.
pub fn load_options(path: impl AsRef<Path>) -> Result<Options> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|err| {
        Error::from(err)
            .with_operation("config::load")
            .with_context("path", path.display().to_string())
    })?;
    let options = parse_options(&content)
        .map_err(|err| err.with_context("path", path.display().to_string()))?;
    tracing::debug!(path = %path.display(), ?options, "config loaded");
    Ok(options)
}
