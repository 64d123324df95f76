use serde_json::json;

use crate::generation::stubs::{ACTIVITY_LOG_MESSAGE, ACTIVITY_RESULT, Stub};
use crate::generation::utils::php_string_literal;
use crate::generation::{
    ArtifactGenerator, ArtifactKind, ClassDecl, Context, GeneratedArtifact, GenerationError,
    MethodDecl, NamespaceScope, ParamDecl, Visibility,
};

use super::{activity_signature, prepare, queue_marker};

const LOGGER_INTERFACE: &str = "Psr\\Log\\LoggerInterface";
const LOGGER_PROPERTY: &str = "logger";

/// Emits the activity implementation: an injected logger and a method body
/// that logs its arguments and returns a fixed marker value
pub struct ActivityGenerator;

impl ArtifactGenerator for ActivityGenerator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Activity
    }

    fn generate(
        &self,
        context: &Context,
        mut scope: NamespaceScope,
    ) -> Result<GeneratedArtifact, GenerationError> {
        let names = prepare(context)?;

        let mut declaration = ClassDecl::class(&names.activity);
        declaration.implements.push(names.activity_interface.clone());
        declaration.markers.extend(queue_marker(&mut scope, context));

        let mut constructor = MethodDecl::new("__construct");
        constructor.params.push(ParamDecl {
            name: LOGGER_PROPERTY.to_string(),
            ty: scope.add_use(LOGGER_INTERFACE),
            promoted: Some(Visibility::Private),
        });
        constructor.body = Some(Vec::new());
        declaration.methods.push(constructor);

        let log_context = context
            .handler()
            .parameters()
            .iter()
            .map(|p| format!("{} => ${}", php_string_literal(&p.name), p.name))
            .collect::<Vec<_>>()
            .join(", ");

        let mut method = activity_signature(context);
        method.body = Some(Stub::ActivityBody.render(&json!({
            "logger": LOGGER_PROPERTY,
            "message": php_string_literal(ACTIVITY_LOG_MESSAGE),
            "context": log_context,
            "result": php_string_literal(ACTIVITY_RESULT),
        }))?);
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
    use crate::generation::{Parameter, RoleMarker};

    fn generate(context: &Context) -> GeneratedArtifact {
        ActivityGenerator
            .generate(context, NamespaceScope::new(context.namespace().clone()))
            .unwrap()
    }

    #[test]
    fn test_constructor_injects_logger() {
        let artifact = generate(&Context::new("PingSiteWorkflow"));

        assert_eq!(artifact.name(), "PingSiteWorkflowActivity");
        assert_eq!(
            artifact.declaration.implements,
            vec!["PingSiteWorkflowActivityInterface"]
        );

        let constructor = artifact.declaration.method("__construct").unwrap();
        assert_eq!(
            constructor.params,
            vec![ParamDecl {
                name: "logger".into(),
                ty: "LoggerInterface".into(),
                promoted: Some(Visibility::Private),
            }]
        );
        assert!(artifact.imports().contains("Psr\\Log\\LoggerInterface"));
        assert!(artifact.declaration.markers.is_empty());
    }

    #[test]
    fn test_body_logs_parameters_and_returns_marker() {
        let context = Context::new("Ping").with_method_parameters(vec![
            Parameter::new("url", "string"),
            Parameter::new("retries", "int"),
        ]);
        let artifact = generate(&context);
        let body = artifact.declaration.method("handle").unwrap().body.clone().unwrap();
        assert_eq!(
            body,
            vec![
                "$this->logger->info('Something special happens here.', ['url' => $url, 'retries' => $retries]);",
                "",
                "return 'Success';",
            ]
        );
    }

    #[test]
    fn test_task_queue_marker() {
        let artifact = generate(&Context::new("Ping").with_task_queue(Some("emails".into())));
        assert_eq!(
            artifact.declaration.markers,
            vec![RoleMarker::AssignWorker { name: "emails".into() }]
        );
    }
}
