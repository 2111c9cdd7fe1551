//! `@deprecated <alt1>,<alt2>:<message>` handling.

use super::annotation::normalize;
use crate::document::{Block, Inline};
use crate::links::node_link;

/// Replacement nodes and message of a deprecated node.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeprecationNotice {
    pub alternatives: Vec<String>,
    /// Normalized message, ending in a period unless empty
    pub message: String,
}

impl DeprecationNotice {
    /// Parse a `deprecated` payload. Returns `None` when the colon separating
    /// alternatives from the message is missing.
    pub fn parse(payload: &str) -> Option<Self> {
        let (alternatives, message) = payload.split_once(':')?;

        let alternatives = alternatives
            .split(',')
            .map(str::trim)
            .filter(|alt| !alt.is_empty())
            .map(str::to_string)
            .collect();

        let mut message = normalize(message);
        if !message.is_empty() && !message.ends_with('.') {
            message.push('.');
        }

        Some(Self {
            alternatives,
            message,
        })
    }

    /// Render the notice as a block quote.
    pub fn to_block(&self, project_name: &str) -> Block {
        let mut content = vec![
            Inline::bold("DEPRECATED."),
            Inline::text(format!(
                " This node is deprecated and will be removed in future versions of {}.",
                project_name
            )),
        ];

        if !self.alternatives.is_empty() {
            content.push(Inline::text(" Please use the following node(s) instead: "));
            for (i, alt) in self.alternatives.iter().enumerate() {
                if i > 0 {
                    content.push(Inline::text(", "));
                }
                content.push(node_link(alt));
            }
            content.push(Inline::text("."));
        }

        if !self.message.is_empty() {
            content.push(Inline::text(format!(" {}", self.message)));
        }

        Block::Quote { content }
    }
}
