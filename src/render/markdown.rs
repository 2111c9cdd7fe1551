//! GitHub-flavored markdown renderer.
//!
//! Blocks are separated by one blank line; nested list items are indented
//! by two spaces per level.

use crate::document::*;
use crate::render::Renderer;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let blocks: Vec<String> = doc
            .blocks
            .iter()
            .map(render_block)
            .filter(|b| !b.is_empty())
            .collect();

        let mut output = blocks.join("\n\n");
        output.push('\n');
        Ok(output)
    }
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Header { level, text } => format!("{} {}", "#".repeat(*level), text),
        Block::Paragraph { content } => render_inlines(content),
        Block::UnorderedList { items } => {
            let mut lines = Vec::new();
            render_list(&mut lines, items, 0);
            lines.join("\n")
        }
        Block::Image { url, alt } => format!("![{}]({})", alt, url),
        Block::Quote { content } => render_inlines(content)
            .lines()
            .map(|line| format!("> {}", line))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::HorizontalRule => "---".to_string(),
    }
}

fn render_list(lines: &mut Vec<String>, items: &[ListItem], depth: usize) {
    let indent = "  ".repeat(depth);
    for item in items {
        lines.push(format!("{}- {}", indent, render_inlines(&item.content)));
        render_list(lines, &item.children, depth + 1);
    }
}

fn render_inlines(content: &[Inline]) -> String {
    content.iter().map(render_inline).collect()
}

fn render_inline(inline: &Inline) -> String {
    match inline {
        Inline::Text(text) => text.clone(),
        Inline::Bold(inner) => format!("**{}**", render_inlines(inner)),
        Inline::Italic(inner) => format!("*{}*", render_inlines(inner)),
        Inline::Code(text) => format!("`{}`", text),
        Inline::Link { label, url } => format!("[{}]({})", render_inlines(label), url),
    }
}
