//! Document assembly: root element, font import, background, definitions and body.

use std::fmt::{self, Write};
use std::str::FromStr;

use indexmap::IndexMap;

use super::element::{Element, SvgElement, Tag};
use super::format::{escape_text, fmt_num};
use crate::error::{PlotError, Result};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Font import emitted in every document.
pub const FONT_IMPORT: &str = "@import url('https://fonts.googleapis.com/css2?family=Hubot+Sans:wght@400&display=swap');";
/// Default text rule emitted in every document.
pub const FONT_RULE: &str = "text { font-family: 'Hubot Sans', sans-serif; }";

/// Background corner radius shared by all chart types.
pub const BACKGROUND_RADIUS: f64 = 20.0;

/// Output encodings a caller may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
}

impl FromStr for OutputFormat {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(PlotError::UnsupportedOutput(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => write!(f, "svg"),
            Self::Png => write!(f, "png"),
        }
    }
}

/// Ordered block of reusable definitions, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defs {
    entries: IndexMap<String, Element>,
}

impl Defs {
    /// Register a definition. The element must carry an `id` that is not yet in use.
    ///
    /// # Errors
    /// Returns `DuplicateDefinition` if the id is missing or already registered.
    pub fn insert(&mut self, definition: Element) -> Result<()> {
        let Some(id) = definition.id().map(str::to_string) else {
            return Err(PlotError::DuplicateDefinition(format!(
                "<{}> without id",
                definition.tag().name()
            )));
        };
        if self.entries.contains_key(&id) {
            return Err(PlotError::DuplicateDefinition(id));
        }
        self.entries.insert(id, definition);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// A complete chart document. Built once per render call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    width: f64,
    height: f64,
    xlink: bool,
    background: String,
    defs: Defs,
    body: Vec<Element>,
}

impl Document {
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub const fn defs(&self) -> &Defs {
        &self.defs
    }

    #[must_use]
    pub fn body(&self) -> &[Element] {
        &self.body
    }

    /// Body elements with the given tag, in paint order.
    pub fn body_elements<'a>(&'a self, tag: &'a Tag) -> impl Iterator<Item = &'a Element> + 'a {
        self.body.iter().filter(move |e| e.tag() == tag)
    }

    /// Ids referenced through `url(#id)` by body fragments that have no definition.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<String> {
        let mut refs = Vec::new();
        for element in &self.body {
            element.collect_references(&mut refs);
        }
        for definition in self.defs.entries.values() {
            definition.collect_references(&mut refs);
        }
        refs.retain(|id| !self.defs.contains(id));
        refs
    }

    /// Serialize to the requested format.
    ///
    /// # Errors
    /// Returns `UnsupportedOutput` for anything other than SVG.
    pub fn export(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Svg => Ok(self.render()),
            OutputFormat::Png => Err(PlotError::UnsupportedOutput(format.to_string())),
        }
    }

    fn write_root_open(&self, out: &mut String) {
        let _ = write!(
            out,
            r#"<svg width="{w}" height="{h}" xmlns="{SVG_NS}""#,
            w = fmt_num(self.width),
            h = fmt_num(self.height)
        );
        if self.xlink {
            let _ = write!(out, r#" xmlns:xlink="{XLINK_NS}""#);
        }
        let _ = writeln!(
            out,
            r#" viewBox="0 0 {} {}">"#,
            fmt_num(self.width),
            fmt_num(self.height)
        );
    }
}

impl SvgElement for Document {
    fn render(&self) -> String {
        let mut output = String::new();
        self.write_root_open(&mut output);

        let _ = writeln!(output, "    <style>");
        let _ = writeln!(output, "        {}", escape_text(FONT_IMPORT));
        let _ = writeln!(output, "        {}", escape_text(FONT_RULE));
        let _ = writeln!(output, "    </style>");

        Element::rect()
            .num("width", self.width)
            .num("height", self.height)
            .attr("fill", self.background.as_str())
            .num("rx", BACKGROUND_RADIUS)
            .num("ry", BACKGROUND_RADIUS)
            .write_to(&mut output, 1);

        if !self.defs.is_empty() {
            let _ = writeln!(output, "    <defs>");
            for definition in self.defs.entries.values() {
                definition.write_to(&mut output, 2);
            }
            let _ = writeln!(output, "    </defs>");
        }

        for element in &self.body {
            element.write_to(&mut output, 1);
        }

        output.push_str("</svg>");
        output
    }
}

/// Builder for chart documents.
#[derive(Debug)]
pub struct DocumentBuilder {
    width: f64,
    height: f64,
    xlink: bool,
    background: String,
    defs: Defs,
    body: Vec<Element>,
}

impl DocumentBuilder {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            xlink: false,
            background: "#121212".to_string(),
            defs: Defs::default(),
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_background(mut self, color: &str) -> Self {
        self.background = color.to_string();
        self
    }

    /// Declare the `xlink` namespace on the root element.
    #[must_use]
    pub const fn with_xlink(mut self) -> Self {
        self.xlink = true;
        self
    }

    /// Add a definition to the defs block.
    ///
    /// # Errors
    /// Returns `DuplicateDefinition` if the id is missing or already registered.
    pub fn define(&mut self, definition: Element) -> Result<()> {
        self.defs.insert(definition)
    }

    pub fn push(&mut self, element: Element) {
        self.body.push(element);
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.body.extend(elements);
    }

    #[must_use]
    pub fn build(self) -> Document {
        Document {
            width: self.width,
            height: self.height,
            xlink: self.xlink,
            background: self.background,
            defs: self.defs,
            body: self.body,
        }
    }
}

/// Prefix a serialized document with the XML declaration used for files on disk.
#[must_use]
pub fn with_xml_prolog(svg: &str) -> String {
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{svg}")
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
