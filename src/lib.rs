pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod pattern;
pub mod render;
pub mod style;
pub mod svg;

pub use error::{PlotError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RENDER_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
