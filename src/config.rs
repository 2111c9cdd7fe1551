//! Generator configuration: titles, base URLs and link labels.
//!
//! Every field has a default matching the Armory wiki, so a config file only
//! needs the keys it changes.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Top-level document title
    pub title: String,
    /// Project name used in the version line and deprecation notices
    pub project_name: String,
    /// Base URL of the node screenshots, one subdirectory per category
    pub image_base_url: String,
    pub image_extension: String,
    pub primary_source: SourceLink,
    pub secondary_source: SourceLink,
    /// Number of leading module path components dropped for the primary source
    pub module_prefix_depth: usize,
    /// Stripped from the node identifier for the secondary source
    pub identifier_prefix: String,
    pub nodes_url: String,
    pub generator_url: String,
    pub contribute_url: String,
}

/// One external source link in a node's "Sources:" line.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceLink {
    pub label: String,
    pub base_url: String,
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Logic Nodes Reference".to_string(),
            project_name: "Armory".to_string(),
            image_base_url: "https://github.com/armory3d/armory_wiki_images/raw/master/logic_nodes/"
                .to_string(),
            image_extension: "jpg".to_string(),
            primary_source: SourceLink {
                label: "Python".to_string(),
                base_url: "https://github.com/armory3d/armory/blob/master/blender/arm/logicnode/"
                    .to_string(),
                extension: "py".to_string(),
            },
            secondary_source: SourceLink {
                label: "Haxe".to_string(),
                base_url: "https://github.com/armory3d/armory/blob/master/Sources/armory/logicnode/"
                    .to_string(),
                extension: "hx".to_string(),
            },
            module_prefix_depth: 2,
            identifier_prefix: "LN".to_string(),
            nodes_url: "https://github.com/armory3d/armory/tree/master/blender/arm/logicnode"
                .to_string(),
            generator_url:
                "https://github.com/armory3d/armory_tools/blob/master/make_node_reference.py"
                    .to_string(),
            contribute_url:
                "https://github.com/armory3d/armory/wiki/contribute#creating-a-pull-request"
                    .to_string(),
        }
    }
}

impl Config {
    /// Load a TOML config file. Missing keys fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config: {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
