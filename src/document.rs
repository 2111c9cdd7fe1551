//! Output tree model for the generated reference — format-agnostic.

use serde::Serialize;

/// The entire generated reference as an ordered list of blocks.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// Block-level content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header { level: usize, text: String },
    Paragraph { content: Vec<Inline> },
    UnorderedList { items: Vec<ListItem> },
    Image { url: String, alt: String },
    Quote { content: Vec<Inline> },
    HorizontalRule,
}

/// Inline spans inside paragraphs, list items and quotes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
    Code(String),
    Link { label: Vec<Inline>, url: String },
}

/// A list entry, optionally carrying a nested list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub content: Vec<Inline>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ListItem>,
}

impl Document {
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }
}

impl Block {
    pub fn paragraph(content: Vec<Inline>) -> Self {
        Block::Paragraph { content }
    }

    /// Bold caption paragraph such as "Inputs:".
    pub fn caption(text: &str) -> Self {
        Block::Paragraph {
            content: vec![Inline::bold(text)],
        }
    }
}

impl Inline {
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Text(s.into())
    }

    pub fn bold(s: impl Into<String>) -> Self {
        Inline::Bold(vec![Inline::Text(s.into())])
    }

    pub fn italic(content: Vec<Inline>) -> Self {
        Inline::Italic(content)
    }

    pub fn code(s: impl Into<String>) -> Self {
        Inline::Code(s.into())
    }

    pub fn link(label: &str, url: impl Into<String>) -> Self {
        Inline::Link {
            label: vec![Inline::text(label)],
            url: url.into(),
        }
    }
}

impl ListItem {
    pub fn new(content: Vec<Inline>) -> Self {
        ListItem {
            content,
            children: Vec::new(),
        }
    }
}
