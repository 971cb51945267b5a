//! Utilities shared by the text summarization pipeline: loading YAML
//! configuration, preparing directories and reporting file sizes.
//!
//! The library only emits `tracing` events and never installs a subscriber;
//! that is left to the caller (see the `text-summarizer-utils` binary).

pub mod configuration;
pub mod error;
pub mod filesystem;

pub use configuration::{read_config, read_typed_config, ArtifactsLayout, ConfigMapping};
pub use error::{Error, Result};
pub use filesystem::{ensure_directories, file_size, get_size, FileSize};
