//! Chart manifests: serde model, loading from TOML or JSON, validation and conversion
//! into render jobs.

mod build;
mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{FileManifestLoader, ManifestLoader, parse_manifest};
pub use model::{Categories, ChartEntry, Manifest, ManifestFormat, Settings};
pub use validation::validate_manifest;
