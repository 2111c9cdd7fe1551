//! Assembles the full reference document from the registry.

use crate::config::Config;
use crate::document::{Block, Document, Inline, ListItem};
use crate::links::anchor;
use crate::model::{Category, NodeDefinition, Registry};
use crate::parser::annotation;
use crate::parser::sections::SectionAggregator;
use tracing::{debug, debug_span, info};

/// Build the reference for every category in the registry.
pub fn build(config: &Config, registry: &Registry, version: &str) -> Document {
    let mut builder = DocumentBuilder::new(config);
    builder.intro(version);
    builder.sub_level(|b| {
        b.category_index(&registry.categories);
        for category in &registry.categories {
            if category.is_empty() {
                debug!(category = %category.name, "skipping empty category");
                continue;
            }
            b.category(category);
        }
    });
    builder.finish()
}

/// Accumulates blocks while tracking the current header depth.
pub struct DocumentBuilder<'a> {
    config: &'a Config,
    aggregator: SectionAggregator<'a>,
    doc: Document,
    level: usize,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            aggregator: SectionAggregator::new(config),
            doc: Document::default(),
            level: 1,
        }
    }

    pub fn finish(self) -> Document {
        self.doc
    }

    fn header(&mut self, text: &str) {
        self.doc.push(Block::Header {
            level: self.level,
            text: text.to_string(),
        });
    }

    /// Run `f` with headers one level deeper.
    fn sub_level(&mut self, f: impl FnOnce(&mut Self)) {
        self.level += 1;
        f(self);
        self.level -= 1;
    }

    /// Title, generated-file notice, version line and rule.
    pub fn intro(&mut self, version: &str) {
        let config = self.config;
        self.header(&config.title);

        let notice = vec![
            Inline::text(
                "This document was generated automatically. Please do not edit this page \
                 directly, instead change the docstrings of the nodes in their ",
            ),
            Inline::link("Python files", self.config.nodes_url.as_str()),
            Inline::text(" or the "),
            Inline::link("generator script", self.config.generator_url.as_str()),
            Inline::text(" and "),
            Inline::link("open a pull request", self.config.contribute_url.as_str()),
            Inline::text(". Thank you for contributing to this reference!"),
        ];
        self.doc.push(Block::paragraph(vec![Inline::italic(notice)]));

        let built_for = vec![
            Inline::text("This reference was built for "),
            Inline::bold(format!("{} {}", self.config.project_name, version)),
            Inline::text("."),
        ];
        self.doc.push(Block::paragraph(vec![Inline::italic(built_for)]));

        self.doc.push(Block::HorizontalRule);
    }

    /// "Node Categories" listing, grouped by section in order of first
    /// appearance. Empty categories and sections are left out.
    pub fn category_index(&mut self, categories: &[Category]) {
        self.header("Node Categories");

        let mut groups: Vec<(&str, Vec<&Category>)> = Vec::new();
        for category in categories {
            let pos = match groups.iter().position(|(s, _)| *s == category.section) {
                Some(pos) => pos,
                None => {
                    groups.push((category.section.as_str(), Vec::new()));
                    groups.len() - 1
                }
            };
            if !category.is_empty() {
                groups[pos].1.push(category);
            }
        }

        let items: Vec<ListItem> = groups
            .into_iter()
            .filter(|(_, cats)| !cats.is_empty())
            .map(|(section, cats)| ListItem {
                content: vec![Inline::bold(capitalize(section))],
                children: cats
                    .into_iter()
                    .map(|c| ListItem::new(vec![Inline::link(&c.name, anchor(&c.name))]))
                    .collect(),
            })
            .collect();

        if !items.is_empty() {
            self.doc.push(Block::UnorderedList { items });
        }
    }

    /// Category header and description, then every node sorted by label.
    pub fn category(&mut self, category: &Category) {
        info!(category = %category.name, nodes = category.nodes.len(),
            deprecated = category.deprecated_nodes.len(), "documenting category");

        self.header(&category.name);
        if let Some(description) = category.description() {
            self.doc
                .push(Block::paragraph(vec![Inline::text(description)]));
        }

        self.sub_level(|b| {
            for node in category.sorted_nodes() {
                b.node(category, node);
            }
        });
    }

    fn node(&mut self, category: &Category, node: &NodeDefinition) {
        let _span = debug_span!("node", label = %node.label).entered();

        self.header(&node.label);
        let tags = annotation::parse(node.doc.as_deref());
        debug!(tags = tags.len(), "parsed docstring");
        let body = self.aggregator.aggregate(category, node, &tags);
        self.doc.extend(body);
    }
}

/// First character uppercase, the rest lowercase.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
