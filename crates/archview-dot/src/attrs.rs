//! Node and edge attribute composers.
//!
//! Each composer returns one `key=value` token, or an empty string when the
//! attribute does not apply; `dot::attrs` drops the empty ones.

use archview_core::{Component, Link};

use crate::Dot;
use crate::color::name_color;
use crate::dot::{attr, sanitize_id};

impl Dot<'_> {
    /// Node identifier for a component name.
    pub fn id(&self, name: &str) -> String {
        sanitize_id(name)
    }

    /// Displayed label: the name with the configured prefix trimmed.
    pub fn label(&self, component: &Component) -> String {
        let name = component.name.as_str();
        let shown = name
            .strip_prefix(self.options.trim_prefix.as_str())
            .unwrap_or(name);
        attr("label", shown)
    }

    /// Documentation link for the component's package and short name.
    pub fn href(&self, component: &Component) -> String {
        let url = format!(
            "{}{}#{}",
            self.options.doc_url,
            component.package(),
            component.short_name()
        );
        attr("href", &url)
    }

    /// Color seeded by `name`; empty when colors are disabled.
    pub fn color(&self, name: &str) -> String {
        if self.options.no_color {
            return String::new();
        }
        format!("color={}", name_color(name))
    }

    pub fn node_tooltip(&self, component: &Component) -> String {
        attr("tooltip", &component.comment)
    }

    pub fn edge_tooltip(&self, link: &Link) -> String {
        attr("tooltip", &link.path)
    }

    pub fn link_style(&self, link: &Link) -> String {
        if link.implementation {
            "style=dashed".to_string()
        } else {
            String::new()
        }
    }
}
