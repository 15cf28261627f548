//! The document cleaning passes.
//!
//! Each pass visits every element once, in document order. The order is
//! fixed: attribute stripping and namespace stripping first, then group
//! flattening, style extraction, decimal formatting, and finally transform
//! baking. Transform baking runs after the precision is settled so baked
//! coordinates come out formatted like everything else.

use crate::ast::{Document, Element, Node};
use crate::error::TidyError;
use crate::number::Precision;
use crate::path::split_values;
use crate::style::{extract_styles, StyleTable};
use crate::transform::apply_transforms;
use crate::Options;

/// Attributes whose values are plain lengths/coordinates, eligible for
/// decimal formatting on any element.
const VALUE_ATTRIBUTES: &[&str] = &[
    "x", "y", "x1", "y1", "x2", "y2", "cx", "cy", "r", "rx", "ry", "width", "height",
];

/// Run all enabled passes over the document, in order.
pub fn clean_document(doc: &mut Document, options: &Options) -> Result<(), TidyError> {
    if !options.strip_attributes.is_empty() {
        remove_attributes(&mut doc.root, &options.strip_attributes);
    }

    for prefix in &options.strip_namespaces {
        remove_namespace(&mut doc.root, prefix);
    }

    if options.flatten_groups {
        flatten_groups(&mut doc.root);
    }

    let mut styles = StyleTable::new();
    if options.extract_styles {
        extract_styles(&mut doc.root, &mut styles, options.precision);
    }

    // With the Raw sentinel there is nothing to reformat, and rewriting the
    // points/d separators anyway would change documents for no reason.
    if let Precision::Places(_) = options.precision {
        set_decimal_places(&mut doc.root, options.precision);
    }

    if options.apply_transforms {
        apply_transforms(&mut doc.root, options.precision)?;
    }

    if !styles.is_empty() {
        doc.root
            .children
            .insert(0, Node::Element(styles.into_style_element()));
    }

    Ok(())
}

/// Strip a list of (unprefixed) attribute names from every element.
fn remove_attributes(elem: &mut Element, names: &[String]) {
    elem.attributes
        .retain(|a| a.name.prefix.is_some() || !names.iter().any(|n| *n == a.name.local));

    for child in elem.child_elements_mut() {
        remove_attributes(child, names);
    }
}

/// Remove everything belonging to a namespace prefix: prefixed attributes,
/// prefixed elements, and the root's `xmlns:prefix` declaration.
fn remove_namespace(root: &mut Element, prefix: &str) {
    strip_namespace(root, prefix);
    root.attributes
        .retain(|a| !(a.name.prefix.as_deref() == Some("xmlns") && a.name.local == prefix));
}

fn strip_namespace(elem: &mut Element, prefix: &str) {
    elem.attributes
        .retain(|a| a.name.prefix.as_deref() != Some(prefix));
    elem.children.retain(
        |n| !matches!(n, Node::Element(e) if e.name.prefix.as_deref() == Some(prefix)),
    );

    for child in elem.child_elements_mut() {
        strip_namespace(child, prefix);
    }
}

/// Replace attribute-free `<g>` elements with their children, bottom-up so
/// nested empty groups collapse fully.
fn flatten_groups(elem: &mut Element) {
    for child in elem.child_elements_mut() {
        flatten_groups(child);
    }

    let mut new_children = Vec::with_capacity(elem.children.len());
    for child in std::mem::take(&mut elem.children) {
        match child {
            Node::Element(mut e) if e.is("g") && e.attributes.is_empty() => {
                new_children.append(&mut e.children);
            }
            other => new_children.push(other),
        }
    }
    elem.children = new_children;
}

/// Reformat every numeric value in the subtree: `points` lists, path data
/// tokens (best-effort, command letters pass through), and the fixed list of
/// coordinate/length attributes on other elements.
fn set_decimal_places(elem: &mut Element, precision: Precision) {
    if elem.is("polyline") || elem.is("polygon") {
        if let Some(points) = elem.get_attr("points").map(str::to_string) {
            elem.set_attr("points", reformat_points(&points, precision));
        }
    } else if elem.is("path") {
        if let Some(d) = elem.get_attr("d").map(str::to_string) {
            let tokens: Vec<String> = split_values(&d).map(|t| precision.format(t)).collect();
            elem.set_attr("d", tokens.join(" "));
        }
    } else {
        for attr in &mut elem.attributes {
            if attr.name.prefix.is_none() && VALUE_ATTRIBUTES.contains(&attr.name.local.as_str()) {
                attr.value = precision.format(&attr.value);
            }
        }
    }

    for child in elem.child_elements_mut() {
        set_decimal_places(child, precision);
    }
}

fn reformat_points(points: &str, precision: Precision) -> String {
    let values: Vec<String> = split_values(points).map(|t| precision.format(t)).collect();
    values
        .chunks(2)
        .map(|pair| pair.join(","))
        .collect::<Vec<_>>()
        .join(" ")
}
