//! Render options.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Base of the documentation link attached to every flat node.
pub const DEFAULT_DOC_URL: &str = "http://godoc.org/";

/// How nodes are grouped into subgraph clusters.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Clustering {
    /// Flat node list, no clusters (default)
    #[default]
    #[strum(serialize = "none")]
    #[serde(rename = "none")]
    None,
    /// One cluster per distinct component class
    #[strum(serialize = "class")]
    #[serde(rename = "class")]
    ByClass,
}

/// Options for graph rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Disable per-component colors and the filled node style.
    pub no_color: bool,
    /// Cluster nodes by class.
    pub clustering: Clustering,
    /// Literal prefix stripped from displayed labels (never from ids).
    pub trim_prefix: String,
    /// Documentation base URL used to build node hrefs.
    pub doc_url: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            no_color: false,
            clustering: Clustering::None,
            trim_prefix: String::new(),
            doc_url: DEFAULT_DOC_URL.to_string(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    pub fn with_clustering(mut self, clustering: Clustering) -> Self {
        self.clustering = clustering;
        self
    }

    pub fn with_trim_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.trim_prefix = prefix.into();
        self
    }

    pub fn with_doc_url(mut self, url: impl Into<String>) -> Self {
        self.doc_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_clustering_from_str() {
        assert_eq!(Clustering::from_str("none").unwrap(), Clustering::None);
        assert_eq!(Clustering::from_str("class").unwrap(), Clustering::ByClass);
        assert!(Clustering::from_str("package").is_err());
        assert_eq!(Clustering::ByClass.to_string(), "class");
    }

    #[test]
    fn test_options_defaults() {
        let options = Options::default();
        assert!(!options.no_color);
        assert_eq!(options.clustering, Clustering::None);
        assert_eq!(options.trim_prefix, "");
        assert_eq!(options.doc_url, DEFAULT_DOC_URL);
    }

    #[test]
    fn test_options_from_json_partial() {
        let options: Options =
            serde_json::from_str(r#"{ "clustering": "class", "trim_prefix": "example/" }"#)
                .unwrap();
        assert_eq!(options.clustering, Clustering::ByClass);
        assert_eq!(options.trim_prefix, "example/");
        assert_eq!(options.doc_url, DEFAULT_DOC_URL);
    }

    #[test]
    fn test_options_reject_unknown_fields() {
        assert!(serde_json::from_str::<Options>(r#"{ "colour": true }"#).is_err());
    }
}
