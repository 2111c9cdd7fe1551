//! Anchors for in-document node references and URLs for external assets.

use crate::config::Config;
use crate::document::Inline;
use crate::model::{Category, NodeDefinition};

/// GitHub heading anchor for a label: lowercase, spaces to hyphens.
pub fn anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase().replace(' ', "-"))
}

/// Link to another node's heading, labelled with the node name as code.
pub fn node_link(name: &str) -> Inline {
    Inline::Link {
        label: vec![Inline::code(name)],
        url: anchor(name),
    }
}

/// Resolves external URLs for a node from the configured base paths.
pub struct LinkResolver<'a> {
    config: &'a Config,
}

impl<'a> LinkResolver<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Screenshot URL: `<base>/<category lowercase>/<identifier>.<ext>`.
    pub fn image_path(&self, category: &Category, node: &NodeDefinition) -> String {
        format!(
            "{}{}/{}.{}",
            self.config.image_base_url,
            category.name.to_lowercase(),
            node.identifier,
            self.config.image_extension
        )
    }

    /// Primary and secondary source file URLs for a node.
    pub fn source_links(&self, node: &NodeDefinition) -> (String, String) {
        let module_file: Vec<&str> = node
            .module
            .split('.')
            .skip(self.config.module_prefix_depth)
            .collect();
        let primary = format!(
            "{}{}.{}",
            self.config.primary_source.base_url,
            module_file.join("/"),
            self.config.primary_source.extension
        );

        let stem = node
            .identifier
            .strip_prefix(self.config.identifier_prefix.as_str())
            .unwrap_or(&node.identifier);
        let secondary = format!(
            "{}{}.{}",
            self.config.secondary_source.base_url, stem, self.config.secondary_source.extension
        );

        (primary, secondary)
    }
}
