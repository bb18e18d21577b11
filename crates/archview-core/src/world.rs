//! World, Component and Link.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use archview_error::{Error, Result};

/// The complete graph to render.
///
/// Component order is significant: nodes, clusters and edges are all emitted
/// in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct World {
    pub components: Vec<Component>,
}

/// One system unit in the architecture graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    /// Fully qualified name, e.g. `example/site/pgdb.DB`.
    /// Unique within a world; it is the node identity and the color seed.
    pub name: String,
    /// Grouping key used for clustering (e.g. "Database", "Service").
    pub class: String,
    /// Free text shown as the node tooltip.
    pub comment: String,
    /// Outgoing links, in emission order.
    pub links: Vec<Link>,
}

/// A directed dependency from the owning component to `target`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    /// Name of the target component.
    pub target: String,
    /// How the dependency was found; shown as the edge tooltip.
    pub path: String,
    /// Implementation relationship (rendered dashed) rather than a plain use.
    pub implementation: bool,
}

impl World {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    /// Parse a world from its JSON representation.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|err| deserialization_error(err, "world::from_json"))
    }

    /// Parse a world from a JSON stream (e.g. stdin).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader)
            .map_err(|err| deserialization_error(err, "world::from_reader"))
    }

    /// Load a world from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| {
            Error::from(err)
                .with_operation("world::load")
                .with_context("path", path.display().to_string())
        })?;
        let world = Self::from_json(&content)
            .map_err(|err| err.with_context("path", path.display().to_string()))?;
        tracing::debug!(
            path = %path.display(),
            components = world.components.len(),
            links = world.link_count(),
            "world loaded"
        );
        Ok(world)
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Total number of links over all components.
    pub fn link_count(&self) -> usize {
        self.components.iter().map(|c| c.links.len()).sum()
    }

    /// Find a component by its fully qualified name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Links whose target is not a component of this world, as
    /// `(source name, target name)` pairs in emission order.
    ///
    /// Renderers draw such links anyway; this is for diagnostics only.
    pub fn dangling_links(&self) -> Vec<(&str, &str)> {
        let names: HashSet<&str> = self.components.iter().map(|c| c.name.as_str()).collect();
        self.components
            .iter()
            .flat_map(|source| {
                source
                    .links
                    .iter()
                    .filter(|link| !names.contains(link.target.as_str()))
                    .map(move |link| (source.name.as_str(), link.target.as_str()))
            })
            .collect()
    }
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Package path: everything before the last `.` of the name.
    pub fn package(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => "",
        }
    }

    /// Unqualified name: everything after the last `.` of the name.
    pub fn short_name(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[idx + 1..],
            None => &self.name,
        }
    }
}

impl Link {
    /// A plain dependency on `target`.
    pub fn uses(target: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            path: path.into(),
            implementation: false,
        }
    }

    /// An implementation relationship with `target`.
    pub fn implements(target: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            path: path.into(),
            implementation: true,
        }
    }
}

fn deserialization_error(err: serde_json::Error, operation: &'static str) -> Error {
    let line = err.line().to_string();
    let column = err.column().to_string();
    Error::deserialization_failed(err.to_string())
        .with_operation(operation)
        .with_context("line", line)
        .with_context("column", column)
        .set_source(err)
}
