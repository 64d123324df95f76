//! Typed role markers read by the workflow runtime

use serde::Serialize;

/// Role marker attached to a generated declaration or method.
///
/// Each marker corresponds to one PHP attribute class understood by the
/// Temporal runtime's declaration scanner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleMarker {
    WorkflowInterface,
    WorkflowMethod,
    SignalMethod,
    QueryMethod,
    ActivityInterface,
    ActivityMethod,
    /// Routes the declaration to the worker pool of a task queue
    AssignWorker { name: String },
}

impl RoleMarker {
    /// Fully qualified attribute class, without the leading separator
    pub fn attribute_class(&self) -> &'static str {
        match self {
            Self::WorkflowInterface => "Temporal\\Workflow\\WorkflowInterface",
            Self::WorkflowMethod => "Temporal\\Workflow\\WorkflowMethod",
            Self::SignalMethod => "Temporal\\Workflow\\SignalMethod",
            Self::QueryMethod => "Temporal\\Workflow\\QueryMethod",
            Self::ActivityInterface => "Temporal\\Activity\\ActivityInterface",
            Self::ActivityMethod => "Temporal\\Activity\\ActivityMethod",
            Self::AssignWorker { .. } => "Spiral\\TemporalBridge\\Attribute\\AssignWorker",
        }
    }

    /// Named attribute arguments in declaration order
    pub fn arguments(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::AssignWorker { name } => vec![("name", name.as_str())],
            _ => Vec::new(),
        }
    }

    pub fn task_queue(&self) -> Option<&str> {
        match self {
            Self::AssignWorker { name } => Some(name),
            _ => None,
        }
    }
}
