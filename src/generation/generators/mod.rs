//! The four artifact generators and the helpers they share

mod activity;
mod activity_interface;
mod workflow;
mod workflow_interface;

pub use activity::ActivityGenerator;
pub use activity_interface::ActivityInterfaceGenerator;
pub use workflow::WorkflowGenerator;
pub use workflow_interface::WorkflowInterfaceGenerator;

use crate::generation::{
    ArtifactGenerator, ArtifactKind, ArtifactNames, Context, GenerationError, MethodDecl,
    MethodDescriptor, NamespaceScope, ParamDecl, RoleMarker,
};

/// Return type of the generated activity method
pub const ACTIVITY_RETURN_TYPE: &str = "string";

impl ArtifactKind {
    /// Generator responsible for this artifact
    pub fn generator(self) -> &'static dyn ArtifactGenerator {
        match self {
            ArtifactKind::WorkflowInterface => &WorkflowInterfaceGenerator,
            ArtifactKind::Workflow => &WorkflowGenerator,
            ArtifactKind::ActivityInterface => &ActivityInterfaceGenerator,
            ArtifactKind::Activity => &ActivityGenerator,
        }
    }
}

/// Validates everything the generators read from the context and resolves
/// the artifact names. Every generator runs it so that each one fails the
/// same way on the same input.
fn prepare(context: &Context) -> Result<ArtifactNames, GenerationError> {
    context.validate()?;
    context.namespace().validate()?;

    let handler = context.handler();
    handler.validate()?;
    if handler.is_void() {
        return Err(GenerationError::invalid_type(
            format!("return type of {}()", handler.name()),
            "the workflow handler yields the activity result and cannot be void",
        ));
    }

    for signal in context.signal_methods() {
        signal.validate()?;
    }
    for query in context.query_methods() {
        query.validate()?;
        if query.is_void() {
            return Err(GenerationError::invalid_type(
                format!("return type of {}()", query.name()),
                "query methods must declare a non-void return type",
            ));
        }
    }

    ArtifactNames::resolve(context.base_class_name())
}

/// Imports the marker's attribute class and returns the marker
fn mark(scope: &mut NamespaceScope, marker: RoleMarker) -> RoleMarker {
    scope.add_use(marker.attribute_class());
    marker
}

/// Task-queue marker for the activity role, when a queue is set
fn queue_marker(scope: &mut NamespaceScope, context: &Context) -> Option<RoleMarker> {
    context.task_queue().map(|queue| {
        mark(
            scope,
            RoleMarker::AssignWorker {
                name: queue.to_string(),
            },
        )
    })
}

fn signature(descriptor: &MethodDescriptor) -> MethodDecl {
    let mut method = MethodDecl::new(descriptor.name());
    method.params = descriptor.parameters().iter().map(ParamDecl::from).collect();
    method.return_type = descriptor.return_type().map(str::to_string);
    method
}

/// Workflow entry point; identical in the interface and the implementation
fn handler_signature(context: &Context) -> MethodDecl {
    signature(context.handler())
}

fn signal_signature(descriptor: &MethodDescriptor) -> MethodDecl {
    let mut method = signature(descriptor);
    method.return_type = Some("void".to_string());
    method
}

fn query_signature(descriptor: &MethodDescriptor) -> MethodDecl {
    signature(descriptor)
}

/// The activity's single method: handler name and parameters, string result
fn activity_signature(context: &Context) -> MethodDecl {
    let mut method = signature(context.handler());
    method.return_type = Some(ACTIVITY_RETURN_TYPE.to_string());
    method
}

/// `$a, $b` in parameter order
fn call_arguments(descriptor: &MethodDescriptor) -> String {
    descriptor
        .parameters()
        .iter()
        .map(|p| format!("${}", p.name))
        .collect::<Vec<_>>()
        .join(", ")
}
