//! Docstring parsing — tag splitting, section grouping, deprecation notices.

pub mod annotation;
pub mod deprecation;
pub mod sections;
