//! SVG serialization to indented XML.

use quick_xml::escape::escape;

use crate::ast::*;
use crate::Options;

/// Serialize a Document to an indented SVG string.
pub fn serialize(doc: &Document, options: &Options) -> String {
    let mut out = String::new();

    if let Some(ref decl) = doc.xml_declaration {
        out.push_str("<?xml version=\"");
        out.push_str(&decl.version);
        out.push('"');
        if let Some(ref enc) = decl.encoding {
            out.push_str(" encoding=\"");
            out.push_str(enc);
            out.push('"');
        }
        if let Some(standalone) = decl.standalone {
            out.push_str(" standalone=\"");
            out.push_str(if standalone { "yes" } else { "no" });
            out.push('"');
        }
        out.push_str("?>\n");
    }

    if let Some(ref dt) = doc.doctype {
        out.push_str("<!DOCTYPE ");
        out.push_str(dt);
        out.push_str(">\n");
    }

    write_element(&mut out, &doc.root, 0, &options.indent);
    out.push('\n');

    out
}

fn write_element(out: &mut String, elem: &Element, depth: usize, indent: &str) {
    out.push('<');
    out.push_str(&elem.name.full_name());

    for attr in &elem.attributes {
        out.push(' ');
        out.push_str(&attr.name.full_name());
        out.push_str("=\"");
        out.push_str(&escape(attr.value.as_str()));
        out.push('"');
    }

    if elem.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');

    // Elements with text content keep it verbatim (the stylesheet carries
    // its own formatting); pure element content gets block layout.
    if has_inline_content(elem) {
        for child in &elem.children {
            write_inline_node(out, child);
        }
    } else {
        for child in &elem.children {
            out.push('\n');
            push_indent(out, depth + 1, indent);
            write_node(out, child, depth + 1, indent);
        }
        out.push('\n');
        push_indent(out, depth, indent);
    }

    out.push_str("</");
    out.push_str(&elem.name.full_name());
    out.push('>');
}

fn has_inline_content(elem: &Element) -> bool {
    elem.children
        .iter()
        .any(|n| matches!(n, Node::Text(_) | Node::CData(_)))
}

fn write_node(out: &mut String, node: &Node, depth: usize, indent: &str) {
    match node {
        Node::Element(elem) => write_element(out, elem, depth, indent),
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::Text(_) | Node::CData(_) => write_inline_node(out, node),
    }
}

fn write_inline_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(elem) => write_element(out, elem, 0, ""),
        Node::Text(text) => out.push_str(&escape(text.as_str())),
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::CData(data) => {
            out.push_str("<![CDATA[");
            out.push_str(data);
            out.push_str("]]>");
        }
    }
}

fn push_indent(out: &mut String, depth: usize, indent: &str) {
    for _ in 0..depth {
        out.push_str(indent);
    }
}
