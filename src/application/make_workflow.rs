//! Use case for scaffolding a workflow/activity pair

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::application::{ApplicationError, MakeWorkflowRequest, MakeWorkflowResponse};
use crate::core::ScaffoldConfig;
use crate::generation::naming::{WORKFLOW_TOKEN, strip_trailing_token};
use crate::generation::utils::{to_camel_case, to_proper_case};
use crate::generation::{
    Context, GeneratedArtifact, GenerationOrchestrator, MethodDescriptor, Namespace, Parameter,
};
use crate::presets::PresetRegistry;

pub struct MakeWorkflowUseCase {
    presets: Arc<PresetRegistry>,
    orchestrator: Arc<GenerationOrchestrator>,
    config: ScaffoldConfig,
}

impl MakeWorkflowUseCase {
    pub fn new(
        presets: Arc<PresetRegistry>,
        orchestrator: Arc<GenerationOrchestrator>,
        config: ScaffoldConfig,
    ) -> Self {
        Self {
            presets,
            orchestrator,
            config,
        }
    }

    pub async fn execute(
        &self,
        request: MakeWorkflowRequest,
    ) -> Result<MakeWorkflowResponse, ApplicationError> {
        request.validate()?;

        let context = self.build_context(&request)?;
        let output_root = request
            .output_dir
            .clone()
            .unwrap_or_else(|| self.output_root(&context));

        if request.dry_run {
            let artifacts = self.orchestrator.generate(&context)?;
            let files = self.orchestrator.render(&artifacts, &output_root);
            return Ok(MakeWorkflowResponse {
                output_root,
                files,
                written: Vec::new(),
                declarations: declarations(&artifacts),
            });
        }

        let report = self.orchestrator.run(&context, &output_root).await?;
        info!(
            workflow = %context.base_class_name(),
            files = report.written.len(),
            output = %output_root.display(),
            "Workflow scaffolded"
        );

        Ok(MakeWorkflowResponse {
            files: self.orchestrator.render(&report.artifacts, &output_root),
            declarations: report.declarations(),
            written: report.written,
            output_root,
        })
    }

    /// Defaults from config, then the preset, then explicit request values.
    /// Signals and queries from the request are added after the preset's.
    /// Method names given on the command line are normalized to camelCase.
    pub fn build_context(&self, request: &MakeWorkflowRequest) -> Result<Context, ApplicationError> {
        let class_name = to_proper_case(&request.name);
        if class_name.is_empty() {
            return Err(ApplicationError::InvalidArgument(format!(
                "'{}' does not contain a usable class name",
                request.name
            )));
        }

        let namespace = match &request.namespace {
            Some(namespace) => Namespace::parse(namespace),
            None => {
                let stem = strip_trailing_token(&class_name, WORKFLOW_TOKEN);
                let segment = if stem.is_empty() { class_name.as_str() } else { stem };
                self.config.base_namespace().child(segment)
            }
        };

        let mut context = Context::new(class_name)
            .with_namespace(namespace)
            .with_activity_timeout(self.config.activity_timeout);

        if let Some(name) = &request.preset {
            context = self.presets.get(name)?.apply(context);
        }

        if let Some(method) = &request.method {
            context = context.with_method(to_camel_case(method));
        }
        if !request.params.is_empty() {
            context = context.with_method_parameters(
                request
                    .params
                    .iter()
                    .map(|p| Parameter::new(p.name.clone(), p.ty.clone())),
            );
        }
        if !request.signals.is_empty() {
            let signals: Vec<_> = context
                .signal_methods()
                .iter()
                .cloned()
                .chain(request.signals.iter().map(|s| MethodDescriptor::new(to_camel_case(s))))
                .collect();
            context = context.with_signal_methods(signals);
        }
        if !request.queries.is_empty() {
            let queries: Vec<_> = context
                .query_methods()
                .iter()
                .cloned()
                .chain(
                    request
                        .queries
                        .iter()
                        .map(|q| MethodDescriptor::new(to_camel_case(&q.name)).returns(q.ty.clone())),
                )
                .collect();
            context = context.with_query_methods(queries);
        }
        if request.task_queue.is_some() {
            context = context.with_task_queue(request.task_queue.clone());
        }
        if let Some(timeout) = request.timeout {
            context = context.with_activity_timeout(timeout);
        }

        context.validate()?;
        Ok(context)
    }

    pub fn output_root(&self, context: &Context) -> PathBuf {
        self.config.output_root_for(context.namespace())
    }
}

fn declarations(artifacts: &[GeneratedArtifact]) -> Vec<crate::generation::Declaration> {
    artifacts.iter().map(GeneratedArtifact::declaration).collect()
}
