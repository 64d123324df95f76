use serde_json::json;

use crate::generation::stubs::{Stub, query_placeholder};
use crate::generation::{
    ArtifactGenerator, ArtifactKind, ClassDecl, Context, GeneratedArtifact, GenerationError,
    MethodDecl, NamespaceScope, PropertyDecl, Visibility,
};

use super::{call_arguments, handler_signature, prepare, query_signature, signal_signature};

const ACTIVITY_PROXY: &str = "Temporal\\Internal\\Workflow\\ActivityProxy";
const WORKFLOW_FACADE: &str = "Temporal\\Workflow";
const ACTIVITY_OPTIONS: &str = "Temporal\\Activity\\ActivityOptions";
const CARBON_INTERVAL: &str = "Carbon\\CarbonInterval";

/// Emits the workflow implementation: an activity proxy acquired in the
/// constructor, a handler delegating to the activity, and stub bodies for
/// signals and queries
pub struct WorkflowGenerator;

impl ArtifactGenerator for WorkflowGenerator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Workflow
    }

    fn generate(
        &self,
        context: &Context,
        mut scope: NamespaceScope,
    ) -> Result<GeneratedArtifact, GenerationError> {
        let names = prepare(context)?;

        let mut declaration = ClassDecl::class(&names.workflow);
        declaration.implements.push(names.workflow_interface.clone());

        let proxy = scope.add_use(ACTIVITY_PROXY);
        declaration.properties.push(PropertyDecl {
            name: "activity".to_string(),
            ty: proxy.clone(),
            visibility: Visibility::Private,
            doc: Some(format!("@var {proxy}|{}", names.activity_interface)),
        });

        let mut constructor = MethodDecl::new("__construct");
        constructor.body = Some(Stub::WorkflowConstructor.render(&json!({
            "workflow": scope.add_use(WORKFLOW_FACADE),
            "activity_interface": names.activity_interface,
            "activity_options": scope.add_use(ACTIVITY_OPTIONS),
            "carbon_interval": scope.add_use(CARBON_INTERVAL),
            "timeout": context.activity_timeout_secs(),
        }))?);
        declaration.methods.push(constructor);

        let mut handler = handler_signature(context);
        handler.body = Some(Stub::WorkflowHandler.render(&json!({
            "method": context.handler().name(),
            "arguments": call_arguments(context.handler()),
        }))?);
        declaration.methods.push(handler);

        for signal in context.signal_methods() {
            let mut method = signal_signature(signal);
            method.body = Some(Stub::Signal.render(&json!({}))?);
            declaration.methods.push(method);
        }

        for query in context.query_methods() {
            let mut method = query_signature(query);
            let statement = method
                .return_type
                .as_deref()
                .and_then(|ty| query_placeholder(ty, query.name()));
            method.body = Some(Stub::Query.render(&json!({ "statement": statement }))?);
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
    use crate::generation::{MethodDescriptor, Parameter};

    fn generate(context: &Context) -> GeneratedArtifact {
        WorkflowGenerator
            .generate(context, NamespaceScope::new(context.namespace().clone()))
            .unwrap()
    }

    #[test]
    fn test_constructor_acquires_activity_proxy() {
        let artifact = generate(&Context::new("PingSiteWorkflow"));

        assert_eq!(artifact.name(), "PingSiteWorkflow");
        assert_eq!(artifact.declaration.implements, vec!["PingSiteWorkflowInterface"]);

        let property = &artifact.declaration.properties[0];
        assert_eq!(property.name, "activity");
        assert_eq!(property.ty, "ActivityProxy");
        assert_eq!(
            property.doc.as_deref(),
            Some("@var ActivityProxy|PingSiteWorkflowActivityInterface")
        );

        let body = artifact.declaration.method("__construct").unwrap().body.clone().unwrap();
        assert_eq!(body[1], "    PingSiteWorkflowActivityInterface::class,");
        assert!(body[3].contains("CarbonInterval::seconds(10)"));
    }

    #[test]
    fn test_custom_timeout() {
        let artifact = generate(&Context::new("Ping").with_activity_timeout(45));
        let body = artifact.declaration.method("__construct").unwrap().body.clone().unwrap();
        assert!(body[3].contains("CarbonInterval::seconds(45)"));
    }

    #[test]
    fn test_handler_delegates_in_parameter_order() {
        let context = Context::new("Ping").with_method_parameters(vec![
            Parameter::new("url", "string"),
            Parameter::new("retries", "int"),
        ]);
        let artifact = generate(&context);
        let handler = artifact.declaration.method("handle").unwrap();
        assert_eq!(
            handler.body.as_deref(),
            Some(&["return yield $this->activity->handle($url, $retries);".to_string()][..])
        );
        assert!(handler.markers.is_empty());
    }

    #[test]
    fn test_signal_and_query_stubs() {
        let context = Context::new("Ping")
            .with_signal_methods(vec![MethodDescriptor::new("pause")])
            .with_query_methods(vec![MethodDescriptor::new("status").returns("string")]);
        let artifact = generate(&context);

        let pause = artifact.declaration.method("pause").unwrap();
        assert_eq!(pause.return_type.as_deref(), Some("void"));
        assert_eq!(pause.body.as_deref(), Some(&["// Do something special.".to_string()][..]));

        let status = artifact.declaration.method("status").unwrap();
        assert_eq!(
            status.body.clone().unwrap(),
            vec!["// Query something special.", "return '';"]
        );
    }

    #[test]
    fn test_imports() {
        let artifact = generate(&Context::new("Ping"));
        let imports: Vec<_> = artifact.imports().iter().cloned().collect();
        assert_eq!(
            imports,
            [
                "Carbon\\CarbonInterval",
                "Temporal\\Activity\\ActivityOptions",
                "Temporal\\Internal\\Workflow\\ActivityProxy",
                "Temporal\\Workflow",
            ]
        );
    }
}
