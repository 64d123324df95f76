//! Error types for presets and preset definitions

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Unknown preset '{name}' (available: {})", available.join(", "))]
    UnknownPreset { name: String, available: Vec<String> },

    #[error("Invalid preset definition {}: {detail}", path.display())]
    InvalidDefinition { path: PathBuf, detail: String },

    #[error("Preset definition already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Preset I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PresetError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
