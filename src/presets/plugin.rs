//! Plugin bootstrap: an ordered list of plugins that populate the preset
//! registry once at startup

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::presets::builtin::{SIGNAL_PRESET, SignalWorkflow};
use crate::presets::definition::load_definitions;
use crate::presets::{PresetError, PresetRegistry};

/// Registers presets during bootstrap
pub trait ScaffoldPlugin: Send + Sync {
    fn name(&self) -> &str;

    fn register(&self, registry: &mut PresetRegistry) -> Result<(), PresetError>;
}

/// Runs plugins in order into a fresh registry
#[derive(Default)]
pub struct Bootstrap {
    plugins: Vec<Box<dyn ScaffoldPlugin>>,
}

impl Bootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in presets, then the definitions found in `preset_dir`
    pub fn with_defaults(preset_dir: impl Into<PathBuf>) -> Self {
        Self::new()
            .plugin(BuiltinPresets)
            .plugin(DefinitionDirectory::new(preset_dir))
    }

    #[must_use]
    pub fn plugin(mut self, plugin: impl ScaffoldPlugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn boot(&self) -> Result<Arc<PresetRegistry>, PresetError> {
        let mut registry = PresetRegistry::new();
        for plugin in &self.plugins {
            plugin.register(&mut registry)?;
            info!(plugin = plugin.name(), presets = registry.len(), "Plugin booted");
        }
        Ok(Arc::new(registry))
    }
}

/// Presets shipped with the binary
pub struct BuiltinPresets;

impl ScaffoldPlugin for BuiltinPresets {
    fn name(&self) -> &str {
        "builtin"
    }

    fn register(&self, registry: &mut PresetRegistry) -> Result<(), PresetError> {
        registry.register(SIGNAL_PRESET, Arc::new(SignalWorkflow));
        Ok(())
    }
}

/// Presets defined as YAML files in a directory
pub struct DefinitionDirectory {
    dir: PathBuf,
}

impl DefinitionDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ScaffoldPlugin for DefinitionDirectory {
    fn name(&self) -> &str {
        "definitions"
    }

    fn register(&self, registry: &mut PresetRegistry) -> Result<(), PresetError> {
        for (name, preset) in load_definitions(&self.dir)? {
            registry.register(name, Arc::new(preset));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::Context;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct Recording {
        name: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl ScaffoldPlugin for Recording {
        fn name(&self) -> &str {
            self.name
        }

        fn register(&self, _registry: &mut PresetRegistry) -> Result<(), PresetError> {
            self.log.lock().unwrap().push(self.name);
            Ok(())
        }
    }

    #[test]
    fn test_plugins_run_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        Bootstrap::new()
            .plugin(Recording { name: "first", log: log.clone() })
            .plugin(Recording { name: "second", log: log.clone() })
            .boot()
            .unwrap();
        assert_eq!(*log.lock().unwrap(), ["first", "second"]);
    }

    #[test]
    fn test_defaults_register_signal_preset() {
        let dir = TempDir::new().unwrap();
        let registry = Bootstrap::with_defaults(dir.path().join("none")).boot().unwrap();
        assert_eq!(registry.list().collect::<Vec<_>>(), [SIGNAL_PRESET]);
    }

    #[test]
    fn test_definitions_override_builtins() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("signal.yaml"),
            "description: Custom signal\ntask_queue: signals\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("ping.yaml"), "description: Ping\n").unwrap();

        let registry = Bootstrap::with_defaults(dir.path()).boot().unwrap();
        assert_eq!(registry.list().collect::<Vec<_>>(), ["signal", "ping"]);

        let preset = registry.get("signal").unwrap();
        assert_eq!(preset.description(), "Custom signal");
        let context = preset.apply(Context::new("Greeting"));
        assert_eq!(context.task_queue(), Some("signals"));
    }

    #[test]
    fn test_invalid_definition_fails_boot() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bad.yaml"), "signals: 12\n").unwrap();
        assert!(matches!(
            Bootstrap::with_defaults(dir.path()).boot(),
            Err(PresetError::InvalidDefinition { .. })
        ));
    }
}
