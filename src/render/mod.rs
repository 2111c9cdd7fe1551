//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::document::Document;
use anyhow::{anyhow, Result};

/// Trait for rendering a Document into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &Document) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or json", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        assert!(create_renderer("markdown").is_ok());
        assert!(create_renderer("md").is_ok());
        assert!(create_renderer("json").is_ok());
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("html").err().unwrap();
        assert!(err.to_string().contains("unknown format: html"));
    }
}
