//! Use case for listing registered presets

use std::sync::Arc;

use crate::application::PresetSummary;
use crate::presets::PresetRegistry;

pub struct ListPresetsUseCase {
    presets: Arc<PresetRegistry>,
}

impl ListPresetsUseCase {
    pub fn new(presets: Arc<PresetRegistry>) -> Self {
        Self { presets }
    }

    /// Presets in registration order
    pub fn execute(&self) -> Vec<PresetSummary> {
        self.presets
            .entries()
            .map(|(name, preset)| PresetSummary {
                name: name.to_string(),
                description: preset.description().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{Bootstrap, BuiltinPresets};

    #[test]
    fn test_lists_builtin_signal_preset() {
        let presets = Bootstrap::new().plugin(BuiltinPresets).boot().unwrap();
        let summaries = ListPresetsUseCase::new(presets).execute();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "signal");
        assert!(!summaries[0].description.is_empty());
    }
}
