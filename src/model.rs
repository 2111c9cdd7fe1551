//! Input data model — the node registry as supplied by the host.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Complete registry: ordered categories plus the version being documented.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Registry {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// A named grouping of nodes.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub name: String,
    /// Grouping key for the "Node Categories" listing
    #[serde(default = "default_section")]
    pub section: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nodes: Vec<NodeDefinition>,
    #[serde(default)]
    pub deprecated_nodes: Vec<NodeDefinition>,
}

/// A single documented node.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDefinition {
    /// Human-readable label, e.g. "Math Float"
    pub label: String,
    /// Internal type name, e.g. "LNMathFloatNode"
    pub identifier: String,
    /// Dotted module path, e.g. "arm.logicnode.math.LN_math_float"
    #[serde(default)]
    pub module: String,
    /// Raw docstring; absent when the node has none
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
}

fn default_section() -> String {
    "default".to_string()
}

impl Registry {
    /// Parse a registry from JSON text.
    ///
    /// Nodes listed under `deprecated_nodes` are flagged deprecated.
    pub fn from_json(text: &str) -> Result<Self> {
        let mut registry: Registry =
            serde_json::from_str(text).context("failed to parse node registry")?;
        for category in &mut registry.categories {
            for node in &mut category.deprecated_nodes {
                node.deprecated = true;
            }
        }
        Ok(registry)
    }
}

impl Category {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.deprecated_nodes.is_empty()
    }

    /// Active and deprecated nodes merged into one sequence sorted by label.
    ///
    /// Ordinal string comparison with a stable sort, so equal labels keep
    /// their declared order and output does not depend on locale.
    pub fn sorted_nodes(&self) -> Vec<&NodeDefinition> {
        let mut nodes: Vec<&NodeDefinition> =
            self.nodes.iter().chain(self.deprecated_nodes.iter()).collect();
        nodes.sort_by(|a, b| a.label.cmp(&b.label));
        nodes
    }

    /// Description text, if present and not blank.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(label: &str) -> NodeDefinition {
        NodeDefinition {
            label: label.to_string(),
            identifier: format!("LN{}Node", label.replace(' ', "")),
            ..Default::default()
        }
    }

    #[test]
    fn deprecated_list_marks_nodes() {
        let registry = Registry::from_json(
            r#"{"categories": [{"name": "Logic",
                "nodes": [{"label": "Gate", "identifier": "LNGateNode"}],
                "deprecated_nodes": [{"label": "Old", "identifier": "LNOldNode"}]}]}"#,
        )
        .unwrap();
        let cat = &registry.categories[0];
        assert!(!cat.nodes[0].deprecated);
        assert!(cat.deprecated_nodes[0].deprecated);
        assert_eq!(cat.section, "default");
        assert!(registry.version.is_none());
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(Registry::from_json(r#"{"categorys": []}"#).is_err());
    }

    #[test]
    fn sorted_nodes_interleaves_deprecated() {
        let cat = Category {
            name: "Math".to_string(),
            nodes: vec![node("Vector"), node("Clamp")],
            deprecated_nodes: vec![node("Math Float")],
            ..Default::default()
        };
        let labels: Vec<&str> = cat.sorted_nodes().iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, ["Clamp", "Math Float", "Vector"]);
    }

    #[test]
    fn sorted_nodes_is_ordinal() {
        let cat = Category {
            name: "Misc".to_string(),
            nodes: vec![node("apple"), node("Banana"), node("Apple")],
            ..Default::default()
        };
        let labels: Vec<&str> = cat.sorted_nodes().iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, ["Apple", "Banana", "apple"]);
    }

    #[test]
    fn blank_description_is_none() {
        let cat = Category {
            name: "Misc".to_string(),
            description: Some("  \n".to_string()),
            ..Default::default()
        };
        assert_eq!(cat.description(), None);
        assert!(cat.is_empty());
    }
}
