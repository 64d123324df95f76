//! Use case for writing a preset definition skeleton

use std::path::PathBuf;

use tracing::info;

use crate::application::{ApplicationError, MakePresetRequest, MakePresetResponse};
use crate::presets::{PresetDefinition, write_skeleton};

pub struct MakePresetUseCase {
    preset_dir: PathBuf,
}

impl MakePresetUseCase {
    pub fn new(preset_dir: impl Into<PathBuf>) -> Self {
        Self {
            preset_dir: preset_dir.into(),
        }
    }

    pub fn execute(&self, request: MakePresetRequest) -> Result<MakePresetResponse, ApplicationError> {
        request.validate()?;

        let path = write_skeleton(&self.preset_dir, &request.name, request.force)?;

        // The skeleton must load the same way the bootstrap will load it
        let source = std::fs::read_to_string(&path)
            .map_err(crate::presets::PresetError::io(&path))?;
        PresetDefinition::from_yaml(&path, &source)?;

        info!(preset = %request.name, path = %path.display(), "Preset definition written");
        Ok(MakePresetResponse { path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{Bootstrap, PresetError};
    use tempfile::TempDir;

    #[test]
    fn test_written_preset_is_registered_on_next_boot() {
        let dir = TempDir::new().unwrap();
        let use_case = MakePresetUseCase::new(dir.path());

        let response = use_case
            .execute(MakePresetRequest { name: "ping".into(), force: false })
            .unwrap();
        assert_eq!(response.path, dir.path().join("ping.yaml"));

        let registry = Bootstrap::with_defaults(dir.path()).boot().unwrap();
        assert_eq!(registry.list().collect::<Vec<_>>(), ["signal", "ping"]);
    }

    #[test]
    fn test_existing_preset_needs_force() {
        let dir = TempDir::new().unwrap();
        let use_case = MakePresetUseCase::new(dir.path());
        let request = MakePresetRequest { name: "ping".into(), force: false };

        use_case.execute(request.clone()).unwrap();
        assert!(matches!(
            use_case.execute(request),
            Err(ApplicationError::Preset(PresetError::AlreadyExists { .. }))
        ));
        assert!(
            use_case
                .execute(MakePresetRequest { name: "ping".into(), force: true })
                .is_ok()
        );
    }

    #[test]
    fn test_invalid_name() {
        let dir = TempDir::new().unwrap();
        let use_case = MakePresetUseCase::new(dir.path());
        assert!(matches!(
            use_case.execute(MakePresetRequest { name: "a/b".into(), force: false }),
            Err(ApplicationError::InvalidArgument(_))
        ));
    }
}
