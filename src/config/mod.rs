//! Settings for the reader.
//!
//! `Config` is persisted as `settings.toml` in the platform config directory
//! resolved by [`AppPaths`]. A missing file loads as defaults.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{Config, ReaderConfig, TimingConfig};
