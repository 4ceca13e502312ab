//! Typed SVG fragment tree.
//!
//! Every visible or definition fragment is an [`Element`] with a [`Tag`], an
//! insertion-ordered attribute map and child [`Node`]s. Serialization walks the tree
//! in order, so identical trees always produce identical markup.

use std::fmt::Write;

use indexmap::IndexMap;

use super::format::{escape_attr, escape_text, fmt_num};
use super::style::{Paint, TextAnchor};

/// Base trait for anything that serializes to SVG markup.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Element kinds emitted by the chart renderers and found in pattern tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Svg,
    Style,
    Defs,
    Group,
    Rect,
    Circle,
    Ellipse,
    Line,
    Path,
    Polygon,
    Polyline,
    Text,
    ClipPath,
    LinearGradient,
    Stop,
    Pattern,
    /// Any other element copied verbatim from a tile.
    Other(String),
}

impl Tag {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "svg" => Self::Svg,
            "style" => Self::Style,
            "defs" => Self::Defs,
            "g" => Self::Group,
            "rect" => Self::Rect,
            "circle" => Self::Circle,
            "ellipse" => Self::Ellipse,
            "line" => Self::Line,
            "path" => Self::Path,
            "polygon" => Self::Polygon,
            "polyline" => Self::Polyline,
            "text" => Self::Text,
            "clipPath" => Self::ClipPath,
            "linearGradient" => Self::LinearGradient,
            "stop" => Self::Stop,
            "pattern" => Self::Pattern,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Svg => "svg",
            Self::Style => "style",
            Self::Defs => "defs",
            Self::Group => "g",
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Line => "line",
            Self::Path => "path",
            Self::Polygon => "polygon",
            Self::Polyline => "polyline",
            Self::Text => "text",
            Self::ClipPath => "clipPath",
            Self::LinearGradient => "linearGradient",
            Self::Stop => "stop",
            Self::Pattern => "pattern",
            Self::Other(name) => name,
        }
    }
}

/// Attribute map; iteration order is insertion order.
pub type Attributes = IndexMap<String, String>;

/// A child of an element: either a nested element or character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Tag,
    attrs: Attributes,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn rect() -> Self {
        Self::new(Tag::Rect)
    }

    #[must_use]
    pub fn circle() -> Self {
        Self::new(Tag::Circle)
    }

    #[must_use]
    pub fn line() -> Self {
        Self::new(Tag::Line)
    }

    #[must_use]
    pub fn path() -> Self {
        Self::new(Tag::Path)
    }

    #[must_use]
    pub fn polygon() -> Self {
        Self::new(Tag::Polygon)
    }

    /// A `<text>` element; content is attached after the attributes are set.
    #[must_use]
    pub fn text() -> Self {
        Self::new(Tag::Text)
    }

    /// Set an attribute. Setting an existing name replaces its value in place.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }

    /// Set a numeric attribute using the shared number formatter.
    #[must_use]
    pub fn num(self, name: &str, value: f64) -> Self {
        self.attr(name, fmt_num(value))
    }

    #[must_use]
    pub fn paint(self, name: &str, paint: &Paint) -> Self {
        self.attr(name, paint.to_css())
    }

    #[must_use]
    pub fn anchor(self, anchor: TextAnchor) -> Self {
        self.attr("text-anchor", anchor.to_string())
    }

    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    #[must_use]
    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    #[must_use]
    pub const fn tag(&self) -> &Tag {
        &self.tag
    }

    #[must_use]
    pub const fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get("id")
    }

    /// Child elements, skipping character data.
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Concatenated character data of direct children.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Collect every `url(#id)` reference in this subtree, in document order.
    pub fn collect_references(&self, out: &mut Vec<String>) {
        for value in self.attrs.values() {
            let mut rest = value.as_str();
            while let Some(start) = rest.find("url(#") {
                let after = &rest[start + 5..];
                match after.find(')') {
                    Some(end) => {
                        out.push(after[..end].to_string());
                        rest = &after[end + 1..];
                    }
                    None => break,
                }
            }
        }
        for child in self.child_elements() {
            child.collect_references(out);
        }
    }

    /// Serialize this element at the given nesting depth.
    pub fn write_to(&self, out: &mut String, depth: usize) {
        let indent = "    ".repeat(depth);
        let name = self.tag.name();
        let _ = write!(out, "{indent}<{name}");
        for (key, value) in &self.attrs {
            let _ = write!(out, r#" {key}="{}""#, escape_attr(value));
        }

        match self.children.as_slice() {
            [] => out.push_str("/>\n"),
            [Node::Text(text)] if !text.contains('\n') => {
                let _ = writeln!(out, ">{}</{name}>", escape_text(text));
            }
            children => {
                out.push_str(">\n");
                for child in children {
                    match child {
                        Node::Element(e) => e.write_to(out, depth + 1),
                        Node::Text(text) => {
                            for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
                                let _ = writeln!(out, "{indent}    {}", escape_text(line));
                            }
                        }
                    }
                }
                let _ = writeln!(out, "{indent}</{name}>");
            }
        }
    }
}

impl SvgElement for Element {
    fn render(&self) -> String {
        let mut output = String::new();
        self.write_to(&mut output, 0);
        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
