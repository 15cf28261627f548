//! svgtidy - an SVG cleaner
//!
//! svgtidy normalizes SVG documents: it bakes `translate(...)` transforms
//! into element coordinates, deduplicates inline styles into a shared
//! stylesheet, strips editor cruft, and re-emits every number with a minimal
//! fixed-precision representation.

mod ast;
mod clean;
mod error;
mod number;
mod parse;
mod path;
mod roles;
mod serialize;
mod style;
mod transform;

pub use ast::*;
pub use clean::*;
pub use error::*;
pub use number::*;
pub use parse::*;
pub use serialize::*;

/// Clean an SVG string with default settings.
pub fn clean(svg: &str) -> Result<String, TidyError> {
    clean_with_options(svg, &Options::default())
}

/// Clean an SVG string with custom options.
pub fn clean_with_options(svg: &str, options: &Options) -> Result<String, TidyError> {
    let mut doc = parse_svg(svg)?;
    clean_document(&mut doc, options)?;
    Ok(serialize(&doc, options))
}

/// Cleaning options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Decimal places for emitted numbers (default: 1 place)
    pub precision: Precision,
    /// Attribute names stripped from every element
    pub strip_attributes: Vec<String>,
    /// Namespace prefixes whose elements and attributes are removed
    pub strip_namespaces: Vec<String>,
    /// Replace attribute-free groups with their children
    pub flatten_groups: bool,
    /// Move inline styles into a shared stylesheet
    pub extract_styles: bool,
    /// Bake translate transforms into coordinates
    pub apply_transforms: bool,
    /// Indentation unit for output
    pub indent: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            precision: Precision::Places(1),
            strip_attributes: vec!["id".to_string()],
            strip_namespaces: vec!["sodipodi".to_string(), "inkscape".to_string()],
            flatten_groups: true,
            extract_styles: true,
            apply_transforms: true,
            indent: "  ".to_string(),
        }
    }
}
