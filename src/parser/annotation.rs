//! Docstring `@` annotation parser.
//!
//! Everything before the first `@` is the node description. Every following
//! fragment starts with a tag keyword:
//!
//! ```text
//! Adds two values.
//! @input A: first summand
//! @output Sum: A + B
//! @seeNode Math
//! @deprecated Math,Vector Math: use the generic node
//! ```

use tracing::debug;

/// Tag kinds recognized in a docstring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Description,
    SeeNode,
    See,
    Input,
    Output,
    Option,
    Deprecated,
    Unknown,
}

/// A single classified docstring fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub kind: TagKind,
    /// Text after the tag keyword, untrimmed
    pub payload: String,
}

/// Separates tags from each other and from the description.
pub const DELIMITER: char = '@';

/// Keyword table, most specific first.
const PREFIXES: &[(&str, TagKind)] = &[
    ("seeNode ", TagKind::SeeNode),
    ("see ", TagKind::See),
    ("input ", TagKind::Input),
    ("output ", TagKind::Output),
    ("deprecated ", TagKind::Deprecated),
    ("option ", TagKind::Option),
];

/// Split a docstring into tags in order of appearance.
///
/// The leading description is always the first tag when a docstring is
/// present; unrecognized fragments are dropped.
pub fn parse(doc: Option<&str>) -> Vec<Tag> {
    let Some(doc) = doc else {
        return Vec::new();
    };

    let mut parts = doc.split(DELIMITER);
    let mut tags = Vec::new();

    if let Some(description) = parts.next() {
        tags.push(Tag {
            kind: TagKind::Description,
            payload: description.to_string(),
        });
    }

    for fragment in parts {
        let tag = classify(fragment);
        if tag.kind == TagKind::Unknown {
            debug!(fragment = fragment.trim_end(), "ignoring unrecognized tag");
            continue;
        }
        tags.push(tag);
    }

    tags
}

/// Classify one fragment by its keyword and strip the keyword off.
pub fn classify(fragment: &str) -> Tag {
    for (prefix, kind) in PREFIXES {
        if let Some(payload) = fragment.strip_prefix(prefix) {
            return Tag {
                kind: *kind,
                payload: payload.to_string(),
            };
        }
    }
    Tag {
        kind: TagKind::Unknown,
        payload: fragment.to_string(),
    }
}

/// Collapse runs of whitespace (including newlines) into single spaces.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
