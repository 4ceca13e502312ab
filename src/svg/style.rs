//! SVG styling primitives: paints and text anchoring.

use std::fmt;

/// Fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paint {
    /// Direct hex color (e.g., "#C5FFC8")
    Solid(String),
    /// Reference to a `<pattern>` definition by id
    Pattern(String),
    /// Reference to a `<linearGradient>` definition by id
    Gradient(String),
}

impl Paint {
    #[must_use]
    pub fn solid(color: &str) -> Self {
        Self::Solid(color.to_string())
    }

    #[must_use]
    pub fn pattern(id: &str) -> Self {
        Self::Pattern(id.to_string())
    }

    #[must_use]
    pub fn gradient(id: &str) -> Self {
        Self::Gradient(id.to_string())
    }

    /// Convert to the attribute value (`#RRGGBB` or `url(#id)`).
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Solid(color) => color.clone(),
            Self::Pattern(id) | Self::Gradient(id) => format!("url(#{id})"),
        }
    }

    /// The definition id this paint depends on, if any.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::Solid(_) => None,
            Self::Pattern(id) | Self::Gradient(id) => Some(id),
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
