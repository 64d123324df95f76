//! Port interfaces for the generation domain

use async_trait::async_trait;
use std::path::Path;

use crate::generation::{
    ArtifactKind, Context, GeneratedArtifact, GenerationError, NamespaceScope, SourceFile,
};

/// Produces one of the four artifacts from a context
pub trait ArtifactGenerator: Send + Sync {
    /// The artifact this generator produces
    fn kind(&self) -> ArtifactKind;

    /// Build the artifact inside `scope`, which the generator takes over
    fn generate(
        &self,
        context: &Context,
        scope: NamespaceScope,
    ) -> Result<GeneratedArtifact, GenerationError>;
}

/// Turns a structured artifact into source text
pub trait SourceRenderer: Send + Sync {
    /// Render deterministically: the same artifact always yields the same text
    fn render(&self, artifact: &GeneratedArtifact) -> String;
}

/// Persists rendered sources
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write one file, creating parent directories and overwriting any
    /// existing content
    async fn write_file(&self, file: &SourceFile) -> Result<(), GenerationError>;

    /// Ensure a directory exists
    async fn ensure_directory(&self, path: &Path) -> Result<(), GenerationError>;
}
