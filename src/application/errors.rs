//! Application layer error types

use thiserror::Error;

use crate::core::ConfigError;
use crate::generation::GenerationError;
use crate::presets::PresetError;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Preset(#[from] PresetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ApplicationError {
    /// Only file writes are worth retrying; every other error is caused by
    /// the input
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Generation(e) if e.is_retryable())
    }

    /// Stable name of the error kind, printed by the binary on failure
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Generation(e) => match e {
                GenerationError::InvalidParameterType { .. } => "InvalidParameterType",
                GenerationError::NameCollision { .. } => "NameCollision",
                GenerationError::InvalidIdentifier { .. } => "InvalidIdentifier",
                GenerationError::DuplicateMethodName { .. } => "DuplicateMethodName",
                GenerationError::InvalidTimeout { .. } => "InvalidTimeout",
                GenerationError::Render(_) => "Render",
                GenerationError::FileWrite { .. } => "FileWrite",
            },
            Self::Preset(e) => match e {
                PresetError::UnknownPreset { .. } => "UnknownPreset",
                PresetError::InvalidDefinition { .. } => "InvalidDefinition",
                PresetError::AlreadyExists { .. } => "AlreadyExists",
                PresetError::Io { .. } => "PresetIo",
            },
            Self::Config(_) => "Config",
            Self::InvalidArgument(_) => "InvalidArgument",
        }
    }
}
