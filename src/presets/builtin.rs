//! Presets shipped with the binary

use crate::generation::{Context, MethodDescriptor};
use crate::presets::Preset;

/// Name of the built-in signal preset
pub const SIGNAL_PRESET: &str = "signal";

/// Greeting workflow driven by signals: collects names until told to exit
pub struct SignalWorkflow;

impl Preset for SignalWorkflow {
    fn description(&self) -> &str {
        "Workflow with signal methods and a query over collected state"
    }

    fn apply(&self, context: Context) -> Context {
        context
            .with_signal_methods(vec![
                MethodDescriptor::new("addName").param("name", "string"),
                MethodDescriptor::new("exit"),
            ])
            .with_query_methods(vec![MethodDescriptor::new("getGreetings").returns("array")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_preset_shape() {
        let context = SignalWorkflow.apply(Context::new("Greeting"));

        let signals: Vec<_> = context.signal_methods().iter().map(|m| m.name()).collect();
        assert_eq!(signals, ["addName", "exit"]);
        assert!(context.signal_methods().iter().all(|m| m.is_void()));

        let query = &context.query_methods()[0];
        assert_eq!(query.name(), "getGreetings");
        assert_eq!(query.return_type(), Some("array"));
        assert!(context.validate().is_ok());
    }
}
