//! Baking `translate(...)` transforms into element coordinates.

use crate::ast::Element;
use crate::error::TidyError;
use crate::number::Precision;
use crate::path::{parse_path_data, serialize_path_data, split_values};
use crate::roles::{roles_for, Role};

/// Fixed coordinate-attribute lists for shapes positioned by plain
/// attributes. Entries alternate x-role, y-role.
const POSITION_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("rect", &["x", "y"]),
    ("tspan", &["x", "y"]),
    ("circle", &["cx", "cy"]),
    ("ellipse", &["cx", "cy"]),
    ("line", &["x1", "y1", "x2", "y2"]),
];

/// How an element stores its coordinates, decided once per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeShape {
    /// A fixed list of coordinate attributes (rect, circle, ...).
    Positional(&'static [&'static str]),
    /// A `points` list (polyline, polygon).
    PointList,
    /// Path data in `d`.
    PathData,
    /// No coordinate data we know how to shift.
    Unsupported,
}

fn classify(elem: &Element) -> NodeShape {
    let positional = POSITION_ATTRIBUTES
        .iter()
        .find_map(|&(tag, attrs)| elem.is(tag).then_some(attrs));

    if let Some(attrs) = positional {
        NodeShape::Positional(attrs)
    } else if elem.get_attr("points").is_some() {
        NodeShape::PointList
    } else if elem.get_attr("d").is_some() {
        NodeShape::PathData
    } else {
        NodeShape::Unsupported
    }
}

/// Extract (dx, dy) from the first `translate(a[, ]b)` in a transform string.
///
/// Anything else — `scale`, `rotate`, `matrix`, a single-argument
/// `translate` — is not recognized and yields `None`, leaving the caller to
/// keep the attribute as-is.
pub(crate) fn parse_translate(transform: &str) -> Option<(f64, f64)> {
    let keyword = transform.find("translate")?;
    let rest = &transform[keyword + "translate".len()..];
    let open = rest.find('(')?;
    if !rest[..open].trim().is_empty() {
        return None;
    }
    let close = open + rest[open..].find(')')?;
    let mut nums = split_values(&rest[open + 1..close]).map(|t| t.parse::<f64>());
    let dx = nums.next()?.ok()?;
    let dy = nums.next()?.ok()?;
    Some((dx, dy))
}

/// Walk the subtree, baking every recognized translate transform into the
/// element's own coordinates and dropping the transform attribute.
///
/// Re-running on an already-baked tree is a no-op.
pub(crate) fn apply_transforms(elem: &mut Element, precision: Precision) -> Result<(), TidyError> {
    let delta = elem.get_attr("transform").and_then(parse_translate);
    if let Some((dx, dy)) = delta {
        translate_element(elem, dx, dy, precision)?;
    }

    for child in elem.child_elements_mut() {
        apply_transforms(child, precision)?;
    }
    Ok(())
}

fn translate_element(
    elem: &mut Element,
    dx: f64,
    dy: f64,
    precision: Precision,
) -> Result<(), TidyError> {
    match classify(elem) {
        NodeShape::Positional(attrs) => {
            for (i, name) in attrs.iter().enumerate() {
                // absent or non-numeric attribute reads as 0
                let current = elem
                    .get_attr(name)
                    .and_then(|v| v.trim().parse::<f64>().ok())
                    .unwrap_or(0.0);
                let shifted = current + if i % 2 == 0 { dx } else { dy };
                elem.set_attr(*name, precision.format_f64(shifted));
            }
            elem.remove_attr("transform");
        }
        NodeShape::PointList => {
            let points = elem.get_attr("points").unwrap_or("").to_string();
            let shifted = translate_points(&points, dx, dy, precision)?;
            elem.set_attr("points", shifted);
            elem.remove_attr("transform");
        }
        NodeShape::PathData => {
            let d = elem.get_attr("d").unwrap_or("").to_string();
            let commands = parse_path_data(&d)?;
            let shifted = serialize_path_data(&commands, precision, |letter, i, value| {
                match roles_for(letter) {
                    Some(roles) => match roles[i % roles.len()] {
                        Role::X => value + dx,
                        Role::Y => value + dy,
                        Role::Other => value,
                    },
                    None => value,
                }
            });
            elem.set_attr("d", shifted);
            elem.remove_attr("transform");
        }
        // Not an error: the transform stays in place untouched.
        NodeShape::Unsupported => {}
    }
    Ok(())
}

fn translate_points(
    points: &str,
    dx: f64,
    dy: f64,
    precision: Precision,
) -> Result<String, TidyError> {
    let mut values = Vec::new();
    for token in split_values(points) {
        let v: f64 = token.parse().map_err(|_| TidyError::InvalidPointNumber {
            token: token.to_string(),
        })?;
        let i = values.len();
        values.push(v + if i % 2 == 0 { dx } else { dy });
    }

    let pairs: Vec<String> = values
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|v| precision.format_f64(*v))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();
    Ok(pairs.join(" "))
}
