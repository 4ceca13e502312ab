//! Tile markup parsing.
//!
//! A tile is a small standalone SVG file. Parsing keeps only what a `<pattern>` needs:
//! the drawable children, with namespaces stripped and editor metadata dropped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;

use crate::svg::{Element, Node, Tag};

/// Elements dropped from tiles together with their subtree.
const SKIPPED: &[&str] = &["title", "desc", "metadata"];

/// A parsed tile: its pattern cell size and the children to copy into a `<pattern>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TileFragment {
    pub width: f64,
    pub height: f64,
    pub children: Vec<Element>,
}

/// Why a tile could not be turned into a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileParseError(pub String);

fn local(name: QName<'_>) -> String {
    String::from_utf8_lossy(name.local_name().as_ref()).into_owned()
}

fn is_namespace_declaration(key: QName<'_>) -> bool {
    key.as_namespace_binding().is_some()
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, TileParseError> {
    let mut element = Element::new(Tag::from_name(&local(start.name())));
    for attr in start.attributes() {
        let attr = attr.map_err(|e| TileParseError(format!("bad attribute: {e}")))?;
        if is_namespace_declaration(attr.key) {
            continue;
        }
        let value = attr
            .unescape_value()
            .map_err(|e| TileParseError(format!("bad attribute value: {e}")))?;
        element = element.attr(&local(attr.key), value.into_owned());
    }
    Ok(element)
}

/// Cell size from a 4-part `viewBox`, else from `width`/`height`.
fn tile_size(root: &Element) -> Result<(f64, f64), TileParseError> {
    let parse = |raw: &str| -> Option<f64> {
        raw.trim()
            .trim_end_matches("px")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
    };

    if let Some(view_box) = root.get("viewBox") {
        let parts: Vec<&str> = view_box
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        if let [_, _, w, h] = parts.as_slice() {
            return match (parse(w), parse(h)) {
                (Some(w), Some(h)) => Ok((w, h)),
                _ => Err(TileParseError(format!("unusable viewBox '{view_box}'"))),
            };
        }
    }

    match (root.get("width").and_then(parse), root.get("height").and_then(parse)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(TileParseError(
            "tile has neither a viewBox nor width/height".to_string(),
        )),
    }
}

/// Attach a finished element to its parent, or keep it as the root.
fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.push(Node::Element(element)),
        None => *root = Some(element),
    }
}

/// Parse tile markup into a [`TileFragment`].
///
/// # Errors
/// Returns `TileParseError` for malformed XML, a missing `<svg>` root, or a tile without
/// a usable size.
pub fn parse_tile(source: &str) -> Result<TileFragment, TileParseError> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    // Depth inside a skipped subtree; 0 when copying.
    let mut skipping = 0_usize;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| TileParseError(format!("malformed tile at {}: {e}", reader.buffer_position())))?;
        match event {
            Event::Start(start) => {
                if skipping > 0 || SKIPPED.contains(&local(start.name()).as_str()) {
                    skipping += 1;
                    continue;
                }
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                if skipping > 0 || SKIPPED.contains(&local(start.name()).as_str()) {
                    continue;
                }
                let element = element_from_start(&start)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                if skipping > 0 {
                    skipping -= 1;
                    continue;
                }
                let element = stack
                    .pop()
                    .ok_or_else(|| TileParseError("unbalanced closing tag".to_string()))?;
                attach(&mut stack, &mut root, element);
            }
            Event::Text(text) if skipping == 0 => {
                let text = text
                    .unescape()
                    .map_err(|e| TileParseError(format!("bad text: {e}")))?;
                if let Some(parent) = stack.last_mut()
                    && !text.trim().is_empty()
                {
                    parent.push(Node::Text(text.into_owned()));
                }
            }
            Event::CData(data) if skipping == 0 => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8_lossy(&data).into_owned();
                    if !text.trim().is_empty() {
                        parent.push(Node::Text(text));
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(TileParseError("unclosed element at end of tile".to_string()));
    }
    let root = root.ok_or_else(|| TileParseError("tile is empty".to_string()))?;
    if root.tag() != &Tag::Svg {
        return Err(TileParseError(format!(
            "tile root is <{}>, expected <svg>",
            root.tag().name()
        )));
    }

    let (width, height) = tile_size(&root)?;
    Ok(TileFragment {
        width,
        height,
        children: root.child_elements().cloned().collect(),
    })
}

#[cfg(test)]
#[path = "tile_tests.rs"]
mod tests;
