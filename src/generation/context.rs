//! Generation context - the declarative description of one workflow/activity pair

use std::collections::HashSet;

use crate::generation::{GenerationError, MethodDescriptor, Namespace, Parameter};

/// Default schedule-to-close timeout of the generated activity stub, in seconds
pub const DEFAULT_ACTIVITY_TIMEOUT_SECS: u64 = 10;

/// Return type of the default workflow handler
pub const DEFAULT_HANDLER_RETURN_TYPE: &str = "\\Generator";

/// Everything needed to generate the four artifacts of one workflow.
///
/// Built once per request from defaults plus chained `with_*` overrides,
/// then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    base_class_name: String,
    namespace: Namespace,
    task_queue: Option<String>,
    handler: MethodDescriptor,
    signal_methods: Vec<MethodDescriptor>,
    query_methods: Vec<MethodDescriptor>,
    activity_timeout_secs: u64,
}

impl Context {
    /// A context with the default handler `handle(string $name): \Generator`,
    /// no signals, no queries and no task queue
    pub fn new(base_class_name: impl Into<String>) -> Self {
        Self {
            base_class_name: base_class_name.into(),
            namespace: Namespace::global(),
            task_queue: None,
            handler: MethodDescriptor::new("handle")
                .param("name", "string")
                .returns(DEFAULT_HANDLER_RETURN_TYPE),
            signal_methods: Vec::new(),
            query_methods: Vec::new(),
            activity_timeout_secs: DEFAULT_ACTIVITY_TIMEOUT_SECS,
        }
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }

    #[must_use]
    pub fn with_task_queue(mut self, queue: Option<String>) -> Self {
        self.task_queue = queue;
        self
    }

    /// Renames the handler method, keeping its parameters and return type
    #[must_use]
    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.handler = self.handler.renamed(name);
        self
    }

    /// Replaces the handler parameter list
    #[must_use]
    pub fn with_method_parameters<I>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = Parameter>,
    {
        self.handler = self.handler.with_parameters(parameters);
        self
    }

    #[must_use]
    pub fn with_handler_return_type(mut self, ty: impl Into<String>) -> Self {
        self.handler = self.handler.returns(ty);
        self
    }

    /// Replaces the handler descriptor entirely
    #[must_use]
    pub fn with_handler(mut self, handler: MethodDescriptor) -> Self {
        self.handler = handler;
        self
    }

    /// Replaces the signal methods. Declared return types are dropped, signals
    /// are always void.
    #[must_use]
    pub fn with_signal_methods<I>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = MethodDescriptor>,
    {
        self.signal_methods = methods.into_iter().map(MethodDescriptor::returns_void).collect();
        self
    }

    #[must_use]
    pub fn with_query_methods<I>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = MethodDescriptor>,
    {
        self.query_methods = methods.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_activity_timeout(mut self, seconds: u64) -> Self {
        self.activity_timeout_secs = seconds;
        self
    }

    pub fn base_class_name(&self) -> &str {
        &self.base_class_name
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn task_queue(&self) -> Option<&str> {
        self.task_queue.as_deref()
    }

    pub fn handler(&self) -> &MethodDescriptor {
        &self.handler
    }

    pub fn signal_methods(&self) -> &[MethodDescriptor] {
        &self.signal_methods
    }

    pub fn query_methods(&self) -> &[MethodDescriptor] {
        &self.query_methods
    }

    pub fn activity_timeout_secs(&self) -> u64 {
        self.activity_timeout_secs
    }

    /// Checks that handler, signal and query names are pairwise distinct and
    /// that the activity timeout is at least one second
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.activity_timeout_secs == 0 {
            return Err(GenerationError::InvalidTimeout {
                seconds: self.activity_timeout_secs,
            });
        }

        let mut seen = HashSet::new();
        let names = std::iter::once(&self.handler)
            .chain(&self.signal_methods)
            .chain(&self.query_methods)
            .map(MethodDescriptor::name);

        for name in names {
            // PHP method names are case-insensitive
            if !seen.insert(name.to_ascii_lowercase()) {
                return Err(GenerationError::DuplicateMethodName {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}
