//! Generation orchestration - drives the four generators, the renderer and
//! the output service

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::generation::{
    ArtifactKind, Context, GeneratedArtifact, GenerationError, GenerationReport, NamespaceScope,
    OutputService, SourceFile, SourceRenderer,
};

/// Runs one generation request end to end
pub struct GenerationOrchestrator {
    renderer: Arc<dyn SourceRenderer>,
    output: Arc<dyn OutputService>,
}

impl GenerationOrchestrator {
    pub fn new(renderer: Arc<dyn SourceRenderer>, output: Arc<dyn OutputService>) -> Self {
        Self { renderer, output }
    }

    /// Generate the four artifacts in `ArtifactKind::ALL` order, each inside
    /// a fresh namespace scope.
    ///
    /// Nothing is written; any failure aborts the whole set.
    pub fn generate(&self, context: &Context) -> Result<Vec<GeneratedArtifact>, GenerationError> {
        context.validate()?;

        ArtifactKind::ALL
            .into_iter()
            .map(|kind| {
                let scope = NamespaceScope::new(context.namespace().clone());
                let artifact = kind.generator().generate(context, scope)?;
                debug!(
                    kind = %kind,
                    class = %artifact.qualified_name(),
                    methods = artifact.declaration.methods.len(),
                    "Generated artifact"
                );
                Ok(artifact)
            })
            .collect()
    }

    /// Render every artifact to `output_root/<Name>.php` without writing
    pub fn preview(
        &self,
        context: &Context,
        output_root: &Path,
    ) -> Result<Vec<SourceFile>, GenerationError> {
        let artifacts = self.generate(context)?;
        Ok(self.render(&artifacts, output_root))
    }

    /// Generate, render and write the four artifacts.
    ///
    /// Files are written in generation order. A write failure leaves the
    /// earlier files in place; rerunning overwrites them with identical
    /// content.
    pub async fn run(
        &self,
        context: &Context,
        output_root: &Path,
    ) -> Result<GenerationReport, GenerationError> {
        let artifacts = self.generate(context)?;
        let files = self.render(&artifacts, output_root);

        self.output.ensure_directory(output_root).await?;

        let mut written = Vec::with_capacity(files.len());
        for file in files {
            self.output.write_file(&file).await?;
            info!(path = %file.path.display(), "Wrote file");
            written.push(file.path);
        }

        Ok(GenerationReport { artifacts, written })
    }

    /// Bind each artifact's rendered text to `output_root/<Name>.php`
    pub fn render(&self, artifacts: &[GeneratedArtifact], output_root: &Path) -> Vec<SourceFile> {
        artifacts
            .iter()
            .map(|artifact| SourceFile {
                path: output_root.join(artifact.file_name()),
                content: self.renderer.render(artifact),
            })
            .collect()
    }
}
