use crate::generation::{
    ArtifactGenerator, ArtifactKind, ClassDecl, Context, GeneratedArtifact, GenerationError,
    NamespaceScope, RoleMarker,
};

use super::{handler_signature, mark, prepare, query_signature, signal_signature};

/// Emits the `#[WorkflowInterface]` declaration: handler, signal and query
/// signatures, each tagged with its role marker
pub struct WorkflowInterfaceGenerator;

impl ArtifactGenerator for WorkflowInterfaceGenerator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::WorkflowInterface
    }

    fn generate(
        &self,
        context: &Context,
        mut scope: NamespaceScope,
    ) -> Result<GeneratedArtifact, GenerationError> {
        let names = prepare(context)?;

        let mut declaration = ClassDecl::interface(&names.workflow_interface);
        declaration
            .markers
            .push(mark(&mut scope, RoleMarker::WorkflowInterface));

        let mut handler = handler_signature(context);
        handler
            .markers
            .push(mark(&mut scope, RoleMarker::WorkflowMethod));
        declaration.methods.push(handler);

        for signal in context.signal_methods() {
            let mut method = signal_signature(signal);
            method.markers.push(mark(&mut scope, RoleMarker::SignalMethod));
            declaration.methods.push(method);
        }

        for query in context.query_methods() {
            let mut method = query_signature(query);
            method.markers.push(mark(&mut scope, RoleMarker::QueryMethod));
            declaration.methods.push(method);
        }

        Ok(GeneratedArtifact {
            kind: self.kind(),
            scope,
            declaration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{MethodDescriptor, Namespace};

    fn generate(context: &Context) -> GeneratedArtifact {
        WorkflowInterfaceGenerator
            .generate(context, NamespaceScope::new(context.namespace().clone()))
            .unwrap()
    }

    #[test]
    fn test_handler_only_without_signals_or_queries() {
        let artifact = generate(&Context::new("PingSiteWorkflow"));

        assert_eq!(artifact.name(), "PingSiteWorkflowInterface");
        assert_eq!(artifact.declaration.markers, vec![RoleMarker::WorkflowInterface]);
        assert_eq!(artifact.declaration.methods.len(), 1);

        let handler = &artifact.declaration.methods[0];
        assert_eq!(handler.name, "handle");
        assert_eq!(handler.markers, vec![RoleMarker::WorkflowMethod]);
        assert!(handler.body.is_none());
        assert!(!artifact.imports().contains("Temporal\\Workflow\\SignalMethod"));
    }

    #[test]
    fn test_signals_and_queries_are_tagged() {
        let context = Context::new("PingSite")
            .with_namespace(Namespace::parse("App.Workflow.PingSite"))
            .with_signal_methods(vec![MethodDescriptor::new("pause")])
            .with_query_methods(vec![MethodDescriptor::new("status").returns("string")]);
        let artifact = generate(&context);

        let pause = artifact.declaration.method("pause").unwrap();
        assert_eq!(pause.return_type.as_deref(), Some("void"));
        assert_eq!(pause.markers, vec![RoleMarker::SignalMethod]);

        let status = artifact.declaration.method("status").unwrap();
        assert_eq!(status.return_type.as_deref(), Some("string"));
        assert_eq!(status.markers, vec![RoleMarker::QueryMethod]);

        let imports: Vec<_> = artifact.imports().iter().cloned().collect();
        assert_eq!(
            imports,
            [
                "Temporal\\Workflow\\QueryMethod",
                "Temporal\\Workflow\\SignalMethod",
                "Temporal\\Workflow\\WorkflowInterface",
                "Temporal\\Workflow\\WorkflowMethod",
            ]
        );
    }

    #[test]
    fn test_task_queue_is_not_attached_to_workflow_role() {
        let context = Context::new("PingSite").with_task_queue(Some("emails".into()));
        let artifact = generate(&context);
        assert!(artifact.declaration().task_queue.is_none());
    }
}
