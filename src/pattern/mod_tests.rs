//! Tests for tile sources and pattern embedding.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::svg::SvgElement;

/// Wraps a source and counts reads.
struct CountingSource<S> {
    inner: S,
    reads: AtomicUsize,
}

impl<S: TileSource> TileSource for CountingSource<S> {
    fn read_tile(&self, name: &str) -> io::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read_tile(name)
    }
}

mod source_tests {
    use super::*;

    #[test]
    fn every_builtin_tile_parses() {
        for tile in Tile::ALL {
            let markup = BuiltinTiles.read_tile(tile.file_name()).unwrap();
            let fragment = parse_tile(&markup).unwrap();
            assert!(fragment.width > 0.0, "{tile}");
            assert!(!fragment.children.is_empty(), "{tile}");
        }
    }

    #[test]
    fn builtin_unknown_tile_is_not_found() {
        let err = BuiltinTiles.read_tile("nope.svg").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn noise_tile_uses_viewbox_size() {
        let markup = BuiltinTiles
            .read_tile(Tile::NoiseRectangleLarge.file_name())
            .unwrap();
        let fragment = parse_tile(&markup).unwrap();
        assert!((fragment.width - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dir_source_reads_nested_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("large")).unwrap();
        std::fs::write(
            dir.path().join("large/dither_cross_large.svg"),
            r#"<svg viewBox="0 0 3 3"><rect width="3" height="3"/></svg>"#,
        )
        .unwrap();
        let source = DirTileSource::new(dir.path());
        assert_eq!(source.root(), dir.path());
        let markup = source.read_tile("large/dither_cross_large.svg").unwrap();
        assert!(markup.contains("viewBox"));
        assert!(source.read_tile("pattern_vertical_lines.svg").is_err());
    }

    #[test]
    fn tile_names_parse() {
        assert_eq!("crossing_lines".parse::<Tile>().unwrap(), Tile::CrossingLines);
        assert!(matches!(
            "zigzag".parse::<Tile>(),
            Err(PlotError::MissingAsset { .. })
        ));
    }
}

mod embedder_tests {
    use super::*;

    fn memory() -> MemoryTileSource {
        MemoryTileSource::new().with_tile(
            Tile::CrossingLines.file_name(),
            r##"<svg width="20" height="20" viewBox="0 0 10 10" xmlns="http://www.w3.org/2000/svg">
                <title>Crossing</title>
                <path d="M0 0L10 10" stroke="#121212"/>
            </svg>"##,
        )
    }

    #[test]
    fn pattern_definition_markup() {
        let source = memory();
        let mut embedder = PatternEmbedder::new(&source);
        let pattern = embedder.pattern("pattern-middle", Tile::CrossingLines).unwrap();
        assert_eq!(
            pattern.render(),
            "<pattern id=\"pattern-middle\" patternUnits=\"userSpaceOnUse\" width=\"10\" height=\"10\">\n    <path d=\"M0 0L10 10\" stroke=\"#121212\"/>\n</pattern>\n"
        );
    }

    #[test]
    fn tile_is_read_once_per_call() {
        let source = CountingSource {
            inner: memory(),
            reads: AtomicUsize::new(0),
        };
        let mut embedder = PatternEmbedder::new(&source);
        let a = embedder.pattern("pattern-noise", Tile::CrossingLines).unwrap();
        let b = embedder.pattern("pattern-crossing", Tile::CrossingLines).unwrap();
        assert_eq!(source.reads.load(Ordering::SeqCst), 1);
        assert_eq!(embedder.loaded(), 1);
        assert_eq!(a.children(), b.children());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn missing_tile_is_fatal() {
        let source = MemoryTileSource::new();
        let mut embedder = PatternEmbedder::new(&source);
        let err = embedder.pattern("pattern-top", Tile::DitherCrossLarge).unwrap_err();
        let PlotError::MissingAsset { tile, .. } = err else {
            panic!("expected MissingAsset");
        };
        assert_eq!(tile, "dither_cross_large");
    }

    #[test]
    fn unparseable_tile_is_fatal() {
        let source = MemoryTileSource::new().with_tile(Tile::VerticalLines.file_name(), "<svg><rect/></svg>");
        let mut embedder = PatternEmbedder::new(&source);
        assert!(matches!(
            embedder.load(Tile::VerticalLines),
            Err(PlotError::MissingAsset { .. })
        ));
    }
}
