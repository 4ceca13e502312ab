//! Pattern tiles and their embedding as `<pattern>` definitions.

mod tile;

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{PlotError, Result};
use crate::svg::{Element, Node, Tag};

pub use tile::{TileFragment, TileParseError, parse_tile};

/// Provides tile markup by relative file name (`pattern_crossing_lines.svg`, ...).
pub trait TileSource: Sync {
    /// Read the markup of a tile.
    ///
    /// # Errors
    /// Returns an IO error if the tile does not exist or cannot be read.
    fn read_tile(&self, name: &str) -> io::Result<String>;
}

/// The tiles shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    CrossingLines,
    DiagonalLines,
    VerticalLines,
    NoiseRectangleLarge,
    DitherCrossLarge,
}

impl Tile {
    pub const ALL: [Self; 5] = [
        Self::CrossingLines,
        Self::DiagonalLines,
        Self::VerticalLines,
        Self::NoiseRectangleLarge,
        Self::DitherCrossLarge,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CrossingLines => "crossing_lines",
            Self::DiagonalLines => "diagonal_lines",
            Self::VerticalLines => "vertical_lines",
            Self::NoiseRectangleLarge => "noise_rectangle_large",
            Self::DitherCrossLarge => "dither_cross_large",
        }
    }

    /// Path of the tile file relative to the assets directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::CrossingLines => "pattern_crossing_lines.svg",
            Self::DiagonalLines => "pattern_diagonal_lines.svg",
            Self::VerticalLines => "pattern_vertical_lines.svg",
            Self::NoiseRectangleLarge => "large/noise_rectangle_large.svg",
            Self::DitherCrossLarge => "large/dither_cross_large.svg",
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tile {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| PlotError::MissingAsset {
                tile: s.to_string(),
                reason: "unknown tile name".to_string(),
            })
    }
}

/// Tiles compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTiles;

impl TileSource for BuiltinTiles {
    fn read_tile(&self, name: &str) -> io::Result<String> {
        let markup = match name {
            "pattern_crossing_lines.svg" => {
                include_str!("../../assets/patterns/pattern_crossing_lines.svg")
            }
            "pattern_diagonal_lines.svg" => {
                include_str!("../../assets/patterns/pattern_diagonal_lines.svg")
            }
            "pattern_vertical_lines.svg" => {
                include_str!("../../assets/patterns/pattern_vertical_lines.svg")
            }
            "large/noise_rectangle_large.svg" => {
                include_str!("../../assets/patterns/large/noise_rectangle_large.svg")
            }
            "large/dither_cross_large.svg" => {
                include_str!("../../assets/patterns/large/dither_cross_large.svg")
            }
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no built-in tile named {name}"),
                ));
            }
        };
        Ok(markup.to_string())
    }
}

/// Tiles read from a directory laid out like `assets/patterns`.
#[derive(Debug, Clone)]
pub struct DirTileSource {
    root: PathBuf,
}

impl DirTileSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TileSource for DirTileSource {
    fn read_tile(&self, name: &str) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(name))
    }
}

/// In-memory tiles keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemoryTileSource {
    tiles: HashMap<String, String>,
}

impl MemoryTileSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tile(mut self, name: impl Into<String>, markup: impl Into<String>) -> Self {
        self.tiles.insert(name.into(), markup.into());
        self
    }
}

impl TileSource for MemoryTileSource {
    fn read_tile(&self, name: &str) -> io::Result<String> {
        self.tiles.get(name).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no tile named {name}"))
        })
    }
}

/// Loads tiles once per render call and turns them into `<pattern>` definitions.
pub struct PatternEmbedder<'a> {
    source: &'a dyn TileSource,
    cache: HashMap<Tile, TileFragment>,
}

impl<'a> PatternEmbedder<'a> {
    #[must_use]
    pub fn new(source: &'a dyn TileSource) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// Load and parse a tile, reusing an earlier load in this call.
    ///
    /// # Errors
    /// Returns `MissingAsset` if the tile cannot be read or parsed.
    pub fn load(&mut self, tile: Tile) -> Result<&TileFragment> {
        if self.cache.contains_key(&tile) {
            tracing::trace!(tile = tile.name(), "tile cache hit");
        } else {
            let markup = self
                .source
                .read_tile(tile.file_name())
                .map_err(|e| PlotError::MissingAsset {
                    tile: tile.name().to_string(),
                    reason: e.to_string(),
                })?;
            let fragment = parse_tile(&markup).map_err(|e| PlotError::MissingAsset {
                tile: tile.name().to_string(),
                reason: e.0,
            })?;
            tracing::debug!(
                tile = tile.name(),
                width = fragment.width,
                height = fragment.height,
                "loaded pattern tile"
            );
            self.cache.insert(tile, fragment);
        }
        self.cache.get(&tile).ok_or_else(|| PlotError::MissingAsset {
            tile: tile.name().to_string(),
            reason: "tile vanished from cache".to_string(),
        })
    }

    /// Build a `<pattern>` definition with the given id backed by `tile`.
    ///
    /// # Errors
    /// Returns `MissingAsset` if the tile cannot be read or parsed.
    pub fn pattern(&mut self, id: &str, tile: Tile) -> Result<Element> {
        let fragment = self.load(tile)?;
        let mut pattern = Element::new(Tag::Pattern)
            .attr("id", id)
            .attr("patternUnits", "userSpaceOnUse")
            .num("width", fragment.width)
            .num("height", fragment.height);
        for child in &fragment.children {
            pattern.push(Node::Element(child.clone()));
        }
        Ok(pattern)
    }

    /// Number of distinct tiles loaded so far.
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.cache.len()
    }
}

impl fmt::Debug for PatternEmbedder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternEmbedder")
            .field("loaded", &self.cache.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
