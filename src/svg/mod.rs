//! SVG document primitives.
//!
//! Provides the building blocks every chart renderer shares:
//! - a typed fragment tree with insertion-ordered attributes
//! - a document assembler (root, font import, rounded background, defs, body)
//! - paint and text-anchor styling, number and text formatting

mod document;
mod element;
mod format;
mod style;

pub use document::{
    BACKGROUND_RADIUS, Defs, Document, DocumentBuilder, FONT_IMPORT, FONT_RULE, OutputFormat,
    with_xml_prolog,
};
pub use element::{Attributes, Element, Node, SvgElement, Tag};
pub use format::{escape_attr, escape_text, fmt_num, tick_label, zero_pad};
pub use style::{Paint, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
