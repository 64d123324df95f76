use crate::generation::{
    ArtifactGenerator, ArtifactKind, ClassDecl, Context, GeneratedArtifact, GenerationError,
    NamespaceScope, RoleMarker,
};

use super::{activity_signature, mark, prepare, queue_marker};

/// Emits the `#[ActivityInterface]` declaration with the single activity
/// method
pub struct ActivityInterfaceGenerator;

impl ArtifactGenerator for ActivityInterfaceGenerator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::ActivityInterface
    }

    fn generate(
        &self,
        context: &Context,
        mut scope: NamespaceScope,
    ) -> Result<GeneratedArtifact, GenerationError> {
        let names = prepare(context)?;

        let mut declaration = ClassDecl::interface(&names.activity_interface);
        declaration
            .markers
            .push(mark(&mut scope, RoleMarker::ActivityInterface));
        declaration.markers.extend(queue_marker(&mut scope, context));

        let mut method = activity_signature(context);
        method
            .markers
            .push(mark(&mut scope, RoleMarker::ActivityMethod));
        declaration.methods.push(method);

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
    use crate::generation::Parameter;

    #[test]
    fn test_activity_method_mirrors_handler_parameters() {
        let context = Context::new("PingSiteWorkflow").with_method_parameters(vec![
            Parameter::new("url", "string"),
            Parameter::new("retries", "int"),
        ]);
        let artifact = ActivityInterfaceGenerator
            .generate(&context, NamespaceScope::new(context.namespace().clone()))
            .unwrap();

        assert_eq!(artifact.name(), "PingSiteWorkflowActivityInterface");
        assert_eq!(artifact.declaration.markers, vec![RoleMarker::ActivityInterface]);

        let method = artifact.declaration.method("handle").unwrap();
        let params: Vec<_> = method.params.iter().map(|p| (p.name.as_str(), p.ty.as_str())).collect();
        assert_eq!(params, [("url", "string"), ("retries", "int")]);
        assert_eq!(method.return_type.as_deref(), Some("string"));
        assert_eq!(method.markers, vec![RoleMarker::ActivityMethod]);
        assert!(method.body.is_none());
    }

    #[test]
    fn test_task_queue_marker() {
        let context = Context::new("PingSiteWorkflow").with_task_queue(Some("emails".into()));
        let artifact = ActivityInterfaceGenerator
            .generate(&context, NamespaceScope::new(context.namespace().clone()))
            .unwrap();

        assert_eq!(
            artifact.declaration.markers,
            vec![
                RoleMarker::ActivityInterface,
                RoleMarker::AssignWorker { name: "emails".into() },
            ]
        );
        assert!(
            artifact
                .imports()
                .contains("Spiral\\TemporalBridge\\Attribute\\AssignWorker")
        );
    }
}
