//! Groups a node's tags into its rendered body.
//!
//! Body layout: deprecation notice, description, screenshot, then the
//! "See also"/"Inputs"/"Outputs"/"Options" sections in order of the first
//! tag of each kind, then the sources line.

use super::annotation::{normalize, Tag, TagKind};
use super::deprecation::DeprecationNotice;
use crate::config::Config;
use crate::document::{Block, Inline, ListItem};
use crate::links::{node_link, LinkResolver};
use crate::model::{Category, NodeDefinition};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    SeeAlso,
    Inputs,
    Outputs,
    Options,
}

impl SectionKind {
    pub fn caption(self) -> &'static str {
        match self {
            SectionKind::SeeAlso => "See also:",
            SectionKind::Inputs => "Inputs:",
            SectionKind::Outputs => "Outputs:",
            SectionKind::Options => "Options:",
        }
    }
}

/// Items of one kind, in order of appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub items: Vec<ListItem>,
}

/// Everything collected from one node's tags, before layout.
#[derive(Debug, Default)]
pub struct NodeSections {
    pub description: Option<String>,
    pub deprecation: Option<DeprecationNotice>,
    /// Created on the first tag of each kind
    pub sections: Vec<Section>,
}

impl NodeSections {
    /// Collect tags in order. Malformed tags are skipped with a warning.
    pub fn collect(tags: &[Tag]) -> Self {
        let mut out = NodeSections::default();

        for tag in tags {
            match tag.kind {
                TagKind::Description => {
                    let text = normalize(&tag.payload);
                    if !text.is_empty() {
                        out.description = Some(text);
                    }
                }
                TagKind::SeeNode => {
                    let name = tag.payload.trim();
                    if name.is_empty() {
                        warn!("skipping @seeNode without a node name");
                        continue;
                    }
                    out.push(
                        SectionKind::SeeAlso,
                        vec![Inline::italic(vec![node_link(name)])],
                    );
                }
                TagKind::See => {
                    let text = normalize(&tag.payload);
                    if text.is_empty() {
                        warn!("skipping @see without text");
                        continue;
                    }
                    out.push(
                        SectionKind::SeeAlso,
                        vec![Inline::italic(vec![Inline::text(text)])],
                    );
                }
                TagKind::Input => out.push_entry(SectionKind::Inputs, tag),
                TagKind::Output => out.push_entry(SectionKind::Outputs, tag),
                TagKind::Option => out.push_entry(SectionKind::Options, tag),
                TagKind::Deprecated => match DeprecationNotice::parse(&tag.payload) {
                    Some(notice) => {
                        if out.deprecation.is_some() {
                            debug!("multiple @deprecated tags, keeping the last one");
                        }
                        out.deprecation = Some(notice);
                    }
                    None => warn!(
                        payload = tag.payload.trim(),
                        "skipping @deprecated without ':' separator"
                    ),
                },
                TagKind::Unknown => debug!(payload = tag.payload.trim(), "ignoring unknown tag"),
            }
        }

        out
    }

    /// Append an item to the section of `kind`, creating it on first use.
    fn push(&mut self, kind: SectionKind, content: Vec<Inline>) {
        let item = ListItem::new(content);
        match self.sections.iter_mut().find(|s| s.kind == kind) {
            Some(section) => section.items.push(item),
            None => self.sections.push(Section {
                kind,
                items: vec![item],
            }),
        }
    }

    /// `name:description` entries for inputs, outputs and options.
    fn push_entry(&mut self, kind: SectionKind, tag: &Tag) {
        let Some((name, description)) = split_entry(&tag.payload) else {
            warn!(
                payload = tag.payload.trim(),
                "skipping {} entry without ':' separator or name",
                kind.caption().trim_end_matches(':')
            );
            return;
        };

        let mut content = vec![Inline::code(name)];
        if !description.is_empty() {
            content.push(Inline::text(format!(": {}", description)));
        }
        self.push(kind, content);
    }
}

/// Split `name:description` on the first colon; the description keeps any
/// further colons and has its whitespace collapsed. A blank name is malformed.
pub fn split_entry(payload: &str) -> Option<(&str, String)> {
    let (name, description) = payload.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, normalize(description)))
}

/// Builds the body blocks of a node from its tags.
pub struct SectionAggregator<'a> {
    config: &'a Config,
    links: LinkResolver<'a>,
}

impl<'a> SectionAggregator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            links: LinkResolver::new(config),
        }
    }

    /// Blocks following the node header.
    pub fn aggregate(&self, category: &Category, node: &NodeDefinition, tags: &[Tag]) -> Vec<Block> {
        let mut collected = NodeSections::collect(tags);
        let mut blocks = Vec::new();

        if collected.deprecation.is_none() && node.deprecated {
            collected.deprecation = Some(DeprecationNotice::default());
        }
        if let Some(ref notice) = collected.deprecation {
            blocks.push(notice.to_block(&self.config.project_name));
        }

        if let Some(description) = collected.description {
            blocks.push(Block::paragraph(vec![Inline::text(description)]));
        }

        blocks.push(Block::Image {
            url: self.links.image_path(category, node),
            alt: format!("{} node", node.label),
        });

        for section in collected.sections {
            blocks.push(Block::caption(section.kind.caption()));
            blocks.push(Block::UnorderedList {
                items: section.items,
            });
        }

        blocks.push(self.sources(node));
        blocks
    }

    fn sources(&self, node: &NodeDefinition) -> Block {
        let (primary, secondary) = self.links.source_links(node);
        Block::paragraph(vec![
            Inline::bold("Sources:"),
            Inline::text(" "),
            Inline::link(&self.config.primary_source.label, primary),
            Inline::text(" | "),
            Inline::link(&self.config.secondary_source.label, secondary),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::annotation;

    fn category() -> Category {
        Category {
            name: "Logic".to_string(),
            ..Default::default()
        }
    }

    fn node(doc: Option<&str>) -> NodeDefinition {
        NodeDefinition {
            label: "Gate".to_string(),
            identifier: "LNGateNode".to_string(),
            module: "arm.logicnode.logic.LN_gate".to_string(),
            doc: doc.map(str::to_string),
            deprecated: false,
        }
    }

    fn body(node: &NodeDefinition) -> Vec<Block> {
        let config = Config::default();
        let tags = annotation::parse(node.doc.as_deref());
        SectionAggregator::new(&config).aggregate(&category(), node, &tags)
    }

    fn captions(blocks: &[Block]) -> Vec<String> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph { content } => match content.as_slice() {
                    [Inline::Bold(inner)] => match inner.as_slice() {
                        [Inline::Text(t)] => Some(t.clone()),
                        _ => None,
                    },
                    _ => None,
                },
                _ => None,
            })
            .collect()
    }

    #[test]
    fn zero_tags_gives_image_and_sources() {
        for doc in [None, Some(""), Some("   \n")] {
            let blocks = body(&node(doc));
            assert_eq!(blocks.len(), 2, "doc: {:?}", doc);
            assert!(matches!(blocks[0], Block::Image { .. }));
            assert!(matches!(blocks[1], Block::Paragraph { .. }));
        }
    }

    #[test]
    fn two_inputs_one_header() {
        let blocks = body(&node(Some("Desc\n@input In: first\n@input Other: second")));
        assert_eq!(captions(&blocks), ["Inputs:"]);
        let Block::UnorderedList { items } = &blocks[3] else {
            panic!("expected list, got {:?}", blocks[3]);
        };
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].content,
            [Inline::code("In"), Inline::text(": first")]
        );
        assert_eq!(
            items[1].content,
            [Inline::code("Other"), Inline::text(": second")]
        );
    }

    #[test]
    fn sections_follow_first_appearance() {
        let blocks = body(&node(Some(
            "@output Out: x @option Mode: y @seeNode Branch @input In: z @output Done: w",
        )));
        assert_eq!(
            captions(&blocks),
            ["Outputs:", "Options:", "See also:", "Inputs:"]
        );
        assert!(matches!(blocks[0], Block::Image { .. }));
    }

    #[test]
    fn see_and_see_node_share_a_section() {
        let collected = NodeSections::collect(&annotation::parse(Some(
            "@see the manual @seeNode Branch @see the manual",
        )));
        assert_eq!(collected.sections.len(), 1);
        let items = &collected.sections[0].items;
        assert_eq!(items.len(), 3);
        assert_eq!(
            items[1].content,
            [Inline::italic(vec![node_link("Branch")])]
        );
        assert_eq!(items[0], items[2]);
    }

    #[test]
    fn colon_in_description_preserved() {
        let (name, description) = split_entry("Value:Use the following: yes").unwrap();
        assert_eq!(name, "Value");
        assert_eq!(description, "Use the following: yes");
    }

    #[test]
    fn blank_see_skipped() {
        let collected = NodeSections::collect(&annotation::parse(Some("Desc @see \n")));
        assert!(collected.sections.is_empty());
        let blocks = body(&node(Some("Desc @see \n")));
        assert!(captions(&blocks).is_empty());
    }

    #[test]
    fn blank_entry_name_skipped() {
        assert_eq!(split_entry(" : value"), None);
        let collected =
            NodeSections::collect(&annotation::parse(Some("@input : value @output Out: x")));
        assert_eq!(collected.sections.len(), 1);
        assert_eq!(collected.sections[0].kind, SectionKind::Outputs);
    }

    #[test]
    fn malformed_entry_skipped() {
        let collected =
            NodeSections::collect(&annotation::parse(Some("@input Broken @input Ok: fine")));
        assert_eq!(collected.sections.len(), 1);
        assert_eq!(collected.sections[0].items.len(), 1);
        assert!(NodeSections::collect(&annotation::parse(Some("@option Nope"))).sections.is_empty());
    }

    #[test]
    fn deprecation_before_description() {
        let blocks = body(&node(Some("Old gate.\n@deprecated Branch: Use branches")));
        assert!(matches!(blocks[0], Block::Quote { .. }));
        assert_eq!(
            blocks[1],
            Block::paragraph(vec![Inline::text("Old gate.")])
        );
        assert!(matches!(blocks[2], Block::Image { .. }));
    }

    #[test]
    fn last_deprecation_wins() {
        let collected = NodeSections::collect(&annotation::parse(Some(
            "@deprecated A: first @deprecated B: second",
        )));
        let notice = collected.deprecation.unwrap();
        assert_eq!(notice.alternatives, ["B"]);
        assert_eq!(notice.message, "second.");
    }

    #[test]
    fn flagged_node_without_tag_gets_notice() {
        let mut flagged = node(Some("Legacy."));
        flagged.deprecated = true;
        let blocks = body(&flagged);
        assert_eq!(blocks[0], DeprecationNotice::default().to_block("Armory"));
    }

    #[test]
    fn image_and_sources() {
        let blocks = body(&node(None));
        assert_eq!(
            blocks[0],
            Block::Image {
                url: "https://github.com/armory3d/armory_wiki_images/raw/master/logic_nodes/logic/LNGateNode.jpg"
                    .to_string(),
                alt: "Gate node".to_string(),
            }
        );
        let Block::Paragraph { content } = &blocks[1] else {
            panic!("expected sources paragraph");
        };
        assert_eq!(content[0], Inline::bold("Sources:"));
        assert_eq!(
            content[2],
            Inline::link(
                "Python",
                "https://github.com/armory3d/armory/blob/master/blender/arm/logicnode/logic/LN_gate.py"
            )
        );
    }
}
