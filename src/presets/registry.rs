//! Named lookup of presets

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::generation::Context;
use crate::presets::PresetError;

/// A canned Context shape applied before command-line overrides
pub trait Preset: Send + Sync {
    /// One-line description shown by `preset:list`
    fn description(&self) -> &str;

    /// Return the context with this preset's shape applied
    fn apply(&self, context: Context) -> Context;
}

/// Presets in registration order.
///
/// Populated during bootstrap through `&mut` access, then shared read-only.
#[derive(Default)]
pub struct PresetRegistry {
    entries: Vec<(String, Arc<dyn Preset>)>,
}

impl PresetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `preset` under `name`.
    ///
    /// Registering an existing name replaces the preset; the entry keeps
    /// its original position in the listing order.
    pub fn register(&mut self, name: impl Into<String>, preset: Arc<dyn Preset>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => {
                warn!(preset = %name, "Preset registered twice, replacing the earlier one");
                entry.1 = preset;
            }
            None => {
                info!(preset = %name, "Registered preset");
                self.entries.push((name, preset));
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Preset>, PresetError> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, preset)| Arc::clone(preset))
            .ok_or_else(|| PresetError::UnknownPreset {
                name: name.to_string(),
                available: self.list().map(str::to_string).collect(),
            })
    }

    /// Registered names in registration order
    pub fn list(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Names with their presets, in registration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &dyn Preset)> + '_ {
        self.entries
            .iter()
            .map(|(name, preset)| (name.as_str(), preset.as_ref()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for PresetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.list()).finish()
    }
}
