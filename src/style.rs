//! Inline style canonicalization and stylesheet extraction.
//!
//! Each `style="..."` attribute is parsed into (property, value) pairs,
//! stripped of pairs that equal their SVG presentation default, and interned
//! against previously seen sets so semantically equal styles share one class.
//! The collected classes are emitted once, as a `<style>` element.

use std::collections::HashMap;

use crate::ast::{Element, Node};
use crate::number::Precision;

/// Presentation properties at their default values carry no information and
/// are dropped before interning.
const DEFAULT_STYLES: &[(&str, &str)] = &[
    ("opacity", "1"),
    ("fill-opacity", "1"),
    ("stroke", "none"),
    ("stroke-width", "1"),
    ("stroke-opacity", "1"),
    ("stroke-miterlimit", "4"),
    ("stroke-linecap", "butt"),
    ("stroke-linejoin", "miter"),
    ("stroke-dasharray", "none"),
    ("stroke-dashoffset", "0"),
    ("font-anchor", "start"),
    ("font-style", "normal"),
    ("font-weight", "normal"),
    ("font-stretch", "normal"),
    ("font-variant", "normal"),
];

/// A canonicalized style declaration: default-stripped (property, value)
/// pairs in the order they were written.
pub type StyleSet = Vec<(String, String)>;

/// Interner mapping canonical style sets to sequential class names, owned by
/// one cleaning run.
#[derive(Debug, Default)]
pub struct StyleTable {
    classes: HashMap<StyleSet, usize>,
    order: Vec<StyleSet>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the class name for a style set, assigning the next sequential
    /// name (`style0`, `style1`, ...) on first sight.
    pub fn class_for(&mut self, set: StyleSet) -> String {
        let index = match self.classes.get(&set) {
            Some(&index) => index,
            None => {
                let index = self.order.len();
                self.classes.insert(set.clone(), index);
                self.order.push(set);
                index
            }
        };
        format!("style{index}")
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Render the collected classes as CSS text, one rule per class in
    /// assignment order, formatted for a readable `<style>` block.
    pub fn stylesheet_text(&self) -> String {
        let mut out = String::from("\n");
        for (index, set) in self.order.iter().enumerate() {
            out.push_str(&format!("\t.style{index}{{\n"));
            for (property, value) in set {
                out.push_str(&format!("\t\t{property}:\t{value};\n"));
            }
            out.push_str("\t}\n");
        }
        out
    }

    /// Build the `<style>` element to be injected as the root's first child.
    pub fn into_style_element(self) -> Element {
        let mut style = Element::new("style");
        style.children.push(Node::Text(self.stylesheet_text()));
        style
    }
}

/// Parse a style attribute into its canonical set: split on `;` then the
/// first `:`, trim, drop malformed entries and known defaults, and reformat
/// values that lead with a number.
pub fn canonicalize_style(style: &str, precision: Precision) -> StyleSet {
    let mut set = Vec::new();

    for entry in style.split(';') {
        let Some((property, value)) = entry.split_once(':') else {
            continue;
        };
        let property = property.trim();
        let value = value.trim();
        if property.is_empty() {
            continue;
        }
        if DEFAULT_STYLES.contains(&(property, value)) {
            continue;
        }
        set.push((property.to_string(), reformat_length(value, precision)));
    }

    set
}

/// Reformat the numeric prefix of a length-like value, keeping the unit
/// suffix as written. Values that do not start with a digit pass through.
fn reformat_length(value: &str, precision: Precision) -> String {
    if !value.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return value.to_string();
    }
    let number_end = value
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(value.len());
    let (number, rest) = value.split_at(number_end);
    format!("{}{}", precision.format(number), rest.trim_start())
}

/// Replace each inline style in the subtree with a shared class reference,
/// accumulating distinct declaration sets into `table`.
pub(crate) fn extract_styles(elem: &mut Element, table: &mut StyleTable, precision: Precision) {
    if let Some(style) = elem.get_attr("style").map(str::to_string) {
        let set = canonicalize_style(&style, precision);
        let class = table.class_for(set);
        // clobbers any class the element already had
        elem.set_attr("class", class);
        elem.remove_attr("style");
    }

    for child in elem.child_elements_mut() {
        extract_styles(child, table, precision);
    }
}
