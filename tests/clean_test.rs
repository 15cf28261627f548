//! End-to-end cleaning tests through the public API.

use svgtidy::{clean, clean_with_options, parse_svg, Options, Precision, TidyError};

const INKSCAPE_ISH: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.0.dtd" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" width="100.00" height="100.00">
  <sodipodi:namedview inkscape:zoom="0.5"/>
  <g>
    <rect id="r1" x="10.00" y="10.50" width="80" height="80" style="fill:red;opacity:1" transform="translate(2, 3)"/>
  </g>
  <rect x="0" y="0" width="5" height="5" style="fill:red"/>
  <circle cx="1.234" cy="2" r="3" style="fill:blue"/>
</svg>"#;

#[test]
fn test_clean_full_document() {
    let out = clean(INKSCAPE_ISH).unwrap();

    // editor cruft is gone
    assert!(!out.contains("sodipodi"));
    assert!(!out.contains("inkscape"));
    assert!(!out.contains("id="));
    assert!(!out.contains("<g>"));

    // inline styles became shared classes
    assert!(!out.contains("style="));
    assert_eq!(out.matches("class=\"style0\"").count(), 2);
    assert_eq!(out.matches("class=\"style1\"").count(), 1);

    // stylesheet holds the default-stripped declarations, in class order
    assert!(out.contains(".style0{\n\t\tfill:\tred;\n\t}"));
    assert!(out.contains(".style1{\n\t\tfill:\tblue;\n\t}"));
    assert!(!out.contains("opacity"));

    // the stylesheet is the root's first child
    let style_pos = out.find("<style>").unwrap();
    let rect_pos = out.find("<rect").unwrap();
    assert!(style_pos < rect_pos);

    // translate(2, 3) baked into the rect, transform removed
    assert!(out.contains("x=\"12\""));
    assert!(out.contains("y=\"13.5\""));
    assert!(!out.contains("transform"));

    // numbers trimmed to one decimal place
    assert!(out.contains("width=\"100\""));
    assert!(out.contains("cx=\"1.2\""));

    // output is still well-formed SVG
    let doc = parse_svg(&out).unwrap();
    assert!(doc.root.is("svg"));
    assert_eq!(doc.root.child_elements().next().unwrap().name.local, "style");
}

#[test]
fn test_clean_path_and_polyline_translation() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <path d="M 10 10 A 5 5 0 0 1 20 20" transform="translate(2, 3)"/>
  <polyline points="0,0 10,10" transform="translate(5, -5)"/>
</svg>"#;
    let out = clean(svg).unwrap();

    assert!(out.contains("d=\"M12 13A5 5 0 0 1 22 23\""));
    assert!(out.contains("points=\"5,-5 15,5\""));
    assert!(!out.contains("transform"));
}

#[test]
fn test_clean_leaves_unsupported_transforms() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <rect x="1" y="1" transform="scale(2)"/>
  <g fill="red" transform="translate(1, 1)"><rect x="0" y="0"/></g>
</svg>"#;
    let out = clean(svg).unwrap();

    // scale is not recognized; a group has no coordinates of its own
    assert!(out.contains("transform=\"scale(2)\""));
    assert!(out.contains("transform=\"translate(1, 1)\""));
}

#[test]
fn test_clean_is_idempotent() {
    let once = clean(INKSCAPE_ISH).unwrap();
    let twice = clean(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_bad_path_data_aborts_the_run() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <path d="M 10 oops" transform="translate(1, 1)"/>
</svg>"#;
    let err = clean(svg).unwrap_err();
    assert!(matches!(err, TidyError::InvalidPathNumber { .. }));
}

#[test]
fn test_raw_precision_leaves_numbers_as_written() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <rect x="1.2500" width="10.00"/>
</svg>"#;
    let options = Options {
        precision: Precision::Raw,
        ..Options::default()
    };
    let out = clean_with_options(svg, &options).unwrap();
    assert!(out.contains("x=\"1.2500\""));
    assert!(out.contains("width=\"10.00\""));
}

#[test]
fn test_opt_outs() {
    let options = Options {
        extract_styles: false,
        apply_transforms: false,
        flatten_groups: false,
        strip_attributes: Vec::new(),
        strip_namespaces: Vec::new(),
        ..Options::default()
    };
    let out = clean_with_options(INKSCAPE_ISH, &options).unwrap();

    assert!(out.contains("style=\"fill:red;opacity:1\""));
    assert!(out.contains("transform=\"translate(2, 3)\""));
    assert!(out.contains("<g>"));
    assert!(out.contains("sodipodi:namedview"));
    assert!(out.contains("id=\"r1\""));
    assert!(!out.contains("<style>"));
}
